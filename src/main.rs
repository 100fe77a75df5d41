mod prettify;
mod preview;
mod renderer;
mod scanner;
mod types;

use clap::Parser;
use colored::Colorize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory to scan for report files
    #[arg(default_value = ".")]
    directory: String,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    match generate_index(Path::new(&args.directory)) {
        Ok(out_path) => println!("{} {}", "Wrote".green(), out_path.display()),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Runs the whole pipeline against one directory: scan, render, write.
/// Returns the path of the generated index. Any failure aborts the run;
/// the output file is only touched once the full document exists.
fn generate_index(dir: &Path) -> io::Result<PathBuf> {
    let entries = scanner::scan_reports(dir)?;
    log::info!("indexed {} report files in {}", entries.len(), dir.display());

    let html = renderer::render_index(&entries);
    let out_path = dir.join(types::OUTPUT_FILENAME);
    fs::write(&out_path, html)?;

    Ok(out_path)
}
