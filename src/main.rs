mod run_report;

use anyhow::{Context as _, Result};
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use tagsmith::{Options, ProcessResultVerbose, process_content_verbose};
use tracing::{error, info};
use walkdir::WalkDir;

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    init_tracing();

    match run(&config) {
        Ok(0) => {}
        Ok(failed) => {
            error!("{failed} file(s) failed");
            std::process::exit(1);
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
    }
}

/// Process every matching file under the input directory. Returns the number
/// of files that failed to read or write; per-file failures never abort the
/// whole run.
fn run(config: &CliConfig) -> Result<usize> {
    let mut failed = 0usize;

    for path in collect_files(&config.dir, &config.ext)? {
        info!("work on {}", path.display());
        match process_file(&path, &config.out) {
            Ok(res) => run_report::print_file(&path, &res, config.color),
            Err(err) => {
                error!("{}: {err:#}", path.display());
                failed += 1;
            }
        }
    }

    Ok(failed)
}

/// Direct children of `dir` with the given extension, in file-name order so
/// runs are deterministic across platforms.
fn collect_files(dir: &Path, ext: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.with_context(|| format!("failed to scan {}", dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path().extension().and_then(|e| e.to_str()) == Some(ext) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Read one definition file, rewrite its blocks, and write the result into
/// `out_dir` under the same file name.
fn process_file(path: &Path, out_dir: &Path) -> Result<ProcessResultVerbose> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let res = process_content_verbose(&content, &Options::default());

    let file_name = path.file_name().with_context(|| format!("no file name in {}", path.display()))?;
    let out_path = out_dir.join(file_name);
    std::fs::write(&out_path, &res.output).with_context(|| format!("failed to write {}", out_path.display()))?;

    Ok(res)
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

struct CliConfig {
    dir: PathBuf,
    ext: String,
    out: PathBuf,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut dir: Option<PathBuf> = None;
    let mut ext = "txt".to_string();
    let mut out = PathBuf::from(".");
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("tagsmith {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--dir" | "-d" => {
                let value = args.next().ok_or_else(|| "error: --dir expects a value".to_string())?;
                set_dir(&mut dir, value)?;
            }
            "--ext" | "-e" => {
                ext = args.next().ok_or_else(|| "error: --ext expects a value".to_string())?;
            }
            "--out" | "-o" => {
                let value = args.next().ok_or_else(|| "error: --out expects a value".to_string())?;
                out = PathBuf::from(value);
            }
            _ if arg.starts_with("--dir=") => {
                let value = arg.trim_start_matches("--dir=").to_string();
                set_dir(&mut dir, value)?;
            }
            _ if arg.starts_with("--ext=") => {
                ext = arg.trim_start_matches("--ext=").to_string();
            }
            _ if arg.starts_with("--out=") => {
                out = PathBuf::from(arg.trim_start_matches("--out="));
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => set_dir(&mut dir, arg)?,
        }
    }

    let ext = ext.trim_start_matches('.').to_string();
    if ext.is_empty() {
        return Err("error: --ext expects a non-empty extension".to_string());
    }

    Ok(CliConfig { dir: dir.unwrap_or_else(|| PathBuf::from(".")), ext, out, color })
}

fn set_dir(dir: &mut Option<PathBuf>, value: String) -> Result<(), String> {
    if dir.is_some() {
        return Err("error: input directory provided multiple times".to_string());
    }
    *dir = Some(PathBuf::from(value));
    Ok(())
}

fn print_help() {
    println!(
        "tagsmith {version}

Batch tagger for brace-delimited trait definition files. Scans a directory
for definition files, infers a set of descriptive tags for every trait block,
and writes each file back out with a synthesized `tags` field.

Usage:
  tagsmith [OPTIONS] [dir]

Options:
  -d, --dir <path>    Input directory to scan (default: current directory).
                      Also accepted as a positional argument.
  -e, --ext <ext>     File extension to process (default: txt).
  -o, --out <dir>     Output directory (default: current directory). Output
                      files keep their input file name.
  --color             Force ANSI color output.
  --no-color          Disable ANSI color output.
  -h, --help          Show this help message.
  -V, --version       Print version information.

Logging is controlled with RUST_LOG (default: info).

Exit codes:
  0  Success.
  1  One or more files failed to read or write.
  2  Invalid arguments.
",
        version = env!("CARGO_PKG_VERSION")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "trait_quick = {\n\tcost = 1\n\tallowed_archetypes = { BIOLOGICAL }\n}\n\ntrait_untaggable = {\n\tallowed_archetypes = { MACHINE }\n}\n";

    #[test]
    fn process_file_writes_output_under_the_same_name() {
        let dir = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let input = dir.path().join("species_traits.txt");
        std::fs::write(&input, SAMPLE).unwrap();

        let res = process_file(&input, out.path()).unwrap();
        assert_eq!(res.summary.added, 1);
        assert_eq!(res.summary.dropped_missing_cost, 1);

        let written = std::fs::read_to_string(out.path().join("species_traits.txt")).unwrap();
        assert_eq!(written, res.output);
        assert!(written.contains("\ttags = {\n\t\t\"positive\"\n\t\t\"organic\"\n\t}\n}"));
        assert!(!written.contains("trait_untaggable"));
    }

    #[test]
    fn process_file_fails_cleanly_on_missing_input() {
        let out = tempfile::tempdir().unwrap();
        let err = process_file(Path::new("/nonexistent/input.txt"), out.path()).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn collect_files_filters_by_extension_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.txt"), "").unwrap();
        std::fs::write(dir.path().join("a.txt"), "").unwrap();
        std::fs::write(dir.path().join("notes.md"), "").unwrap();
        std::fs::create_dir(dir.path().join("nested.txt")).unwrap();

        let files = collect_files(dir.path(), "txt").unwrap();
        let names: Vec<_> = files.iter().map(|p| p.file_name().unwrap().to_str().unwrap()).collect();
        assert_eq!(names, ["a.txt", "b.txt"]);
    }

    #[test]
    fn collect_files_ignores_nested_directories() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("sub");
        std::fs::create_dir(&sub).unwrap();
        std::fs::write(sub.join("deep.txt"), "").unwrap();
        std::fs::write(dir.path().join("top.txt"), "").unwrap();

        let files = collect_files(dir.path(), "txt").unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("top.txt"));
    }
}
