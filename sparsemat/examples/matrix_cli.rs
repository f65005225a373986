//! Command line front end for sparse matrix files
//!
//! Run with: cargo run --features cli --example matrix_cli -- --help

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Parser, Subcommand, ValueEnum};
use sparsemat::{MatrixFile, MatrixOperations, SparseError, SparseMatrix};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "Add, subtract and multiply sparse integer matrices stored as text files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute lhs+rhs, lhs-rhs and lhs*lhs and save all three results
    Run {
        /// First input matrix
        #[arg(long)]
        lhs: PathBuf,

        /// Second input matrix
        #[arg(long)]
        rhs: PathBuf,

        /// Directory receiving the result files
        #[arg(long, default_value = "sample_results")]
        out_dir: PathBuf,
    },
    /// Apply a single operation
    Op {
        operation: Operation,

        lhs: PathBuf,

        rhs: PathBuf,

        /// Save the result here instead of printing it
        #[arg(long)]
        out: Option<PathBuf>,

        /// Print or save as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a matrix file
    Show {
        path: PathBuf,

        /// Only print this row
        #[arg(long)]
        row: Option<usize>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Operation {
    Add,
    Sub,
    Mul,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let start_time = Instant::now();

    match &cli.command {
        Commands::Run { lhs, rhs, out_dir } => handle_run(lhs, rhs, out_dir)?,
        Commands::Op {
            operation,
            lhs,
            rhs,
            out,
            json,
        } => handle_op(*operation, lhs, rhs, out.as_deref(), *json)?,
        Commands::Show { path, row } => handle_show(path, *row)?,
    }

    let elapsed = start_time.elapsed();
    info!("completed in {elapsed:.2?}");

    Ok(())
}

fn handle_run(lhs_path: &Path, rhs_path: &Path, out_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    println!("Looking for input files at:");
    println!("- {}", lhs_path.display());
    println!("- {}", rhs_path.display());

    let (lhs, rhs) = match load_pair(lhs_path, rhs_path) {
        Ok(inputs) => inputs,
        Err(e @ SparseError::NotFound { .. }) => {
            eprintln!("Error: {e}");
            eprintln!("\nPlease ensure that the input files exist at the following locations:");
            eprintln!("- {}", lhs_path.display());
            eprintln!("- {}", rhs_path.display());
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    };

    let results = [
        ("addition_result.txt", lhs.add(&rhs)?),
        ("subtraction_result.txt", lhs.subtract(&rhs)?),
        ("multiplication_result.txt", lhs.multiply(&lhs)?),
    ];

    for (name, result) in &results {
        let path = out_dir.join(name);
        MatrixFile::save(result, &path)?;
        info!(
            path = %path.display(),
            rows = result.rows(),
            cols = result.cols(),
            nnz = result.nnz(),
            "saved result"
        );
    }

    println!("\nResults saved to {}", out_dir.display());
    Ok(())
}

fn load_pair(lhs_path: &Path, rhs_path: &Path) -> sparsemat::Result<(SparseMatrix, SparseMatrix)> {
    Ok((MatrixFile::load(lhs_path)?, MatrixFile::load(rhs_path)?))
}

fn handle_op(
    operation: Operation,
    lhs_path: &Path,
    rhs_path: &Path,
    out: Option<&Path>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let lhs: SparseMatrix = MatrixFile::load(lhs_path)?;
    let rhs: SparseMatrix = MatrixFile::load(rhs_path)?;

    let result = match operation {
        Operation::Add => lhs.add(&rhs)?,
        Operation::Sub => lhs.subtract(&rhs)?,
        Operation::Mul => lhs.multiply(&rhs)?,
    };
    info!(rows = result.rows(), cols = result.cols(), nnz = result.nnz(), "computed result");

    match (out, json) {
        (Some(path), true) => MatrixFile::save_json(&result, path)?,
        (Some(path), false) => MatrixFile::save(&result, path)?,
        (None, true) => println!("{}", serde_json::to_string_pretty(&result)?),
        (None, false) => println!("{}", result.to_text()),
    }

    Ok(())
}

fn handle_show(path: &Path, row: Option<usize>) -> Result<(), Box<dyn std::error::Error>> {
    let matrix: SparseMatrix = MatrixFile::load(path)?;

    match row {
        Some(r) => {
            println!("Row {r} elements:");
            for entry in matrix.get_row(r) {
                println!("  ({r}, {}) = {}", entry.col, entry.value);
            }
        }
        None => println!("{matrix}"),
    }

    Ok(())
}
