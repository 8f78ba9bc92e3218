use anyhow::{Context, Result};
use blockbridge_engine::{io, normalize_fenced_code};
use std::path::{Path, PathBuf};
use std::{env, fs, process};

struct Options {
    check_only: bool,
    target: PathBuf,
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let options = match parse_args(&args[1..]) {
        Some(options) => options,
        None => {
            eprintln!("Usage: {} [--check] <content-dir-or-file>", args[0]);
            eprintln!();
            eprintln!("Rewrites malformed fenced code in stored markdown documents.");
            eprintln!("With --check, reports files needing repair without writing.");
            process::exit(2);
        }
    };

    let files = collect_targets(&options.target)?;

    let mut needs_repair = 0usize;
    for file in &files {
        if repair_file(file, options.check_only)? {
            needs_repair += 1;
            let verb = if options.check_only {
                "needs repair"
            } else {
                "repaired"
            };
            println!("{}: {}", file.display(), verb);
        }
    }

    if options.check_only && needs_repair > 0 {
        process::exit(1);
    }

    println!("{} file(s) scanned, {} needed repair", files.len(), needs_repair);
    Ok(())
}

fn parse_args(args: &[String]) -> Option<Options> {
    match args {
        [target] if target != "--check" => Some(Options {
            check_only: false,
            target: PathBuf::from(target),
        }),
        [flag, target] if flag == "--check" => Some(Options {
            check_only: true,
            target: PathBuf::from(target),
        }),
        _ => None,
    }
}

fn collect_targets(target: &Path) -> Result<Vec<PathBuf>> {
    if target.is_dir() {
        Ok(io::scan_markdown_files(target)?)
    } else if target.is_file() {
        Ok(vec![target.to_path_buf()])
    } else {
        anyhow::bail!("no such file or directory: {}", target.display())
    }
}

/// Normalize one document. Returns whether its fences were malformed.
fn repair_file(path: &Path, check_only: bool) -> Result<bool> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let repaired = normalize_fenced_code(&content);

    if repaired == content {
        return Ok(false);
    }
    if !check_only {
        fs::write(path, &repaired)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }
    Ok(true)
}
