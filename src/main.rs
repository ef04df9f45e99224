use anyhow::Result;
use clap::Parser as _;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::collector::TestCollector;
use crate::convention::Convention;

mod collector;
mod convention;
mod runner;

#[derive(clap::Parser)]
#[command(name = "testgen", about = "Automatically run C tests.")]
struct Cli {
    /// The test source file to scan
    file: PathBuf,

    /// Destination path, or "stdout" to print to standard output
    #[arg(short, long, default_value = "stdout")]
    output: String,

    /// Marker convention identifying test declarations
    #[arg(short, long, value_enum)]
    convention: Convention,
}

#[derive(Error, Debug)]
enum TestGenError {
    #[error("cannot read {}: {}", path.display(), source)]
    InputUnreadable { path: PathBuf, source: std::io::Error },
    #[error("cannot write {}: {}", path.display(), source)]
    OutputWrite { path: PathBuf, source: std::io::Error },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let contents = fs::read_to_string(&cli.file).map_err(|source| TestGenError::InputUnreadable {
        path: cli.file.clone(),
        source,
    })?;

    let tests = TestCollector::new(cli.convention).collect(contents.lines());
    let generated = runner::synthesize(cli.convention, &contents, &tests);

    match cli.output.as_str() {
        "stdout" => print!("{}", generated),
        path => {
            let path = Path::new(path);
            write_runner(path, &generated).map_err(|source| TestGenError::OutputWrite {
                path: path.to_path_buf(),
                source,
            })?;
        }
    }

    Ok(())
}

/// Writes through a temporary file in the destination directory, so the
/// destination never holds a half-written runner.
fn write_runner(path: &Path, contents: &str) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(contents.as_bytes())?;
    file.persist(path).map_err(|error| error.error)?;

    Ok(())
}
