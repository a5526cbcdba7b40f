//! `matprod`: read two integer matrices from standard input, print their
//! product in fixed-width columns, or `Incompatible matrices!` when the
//! inner dimensions disagree.
//!
//! Input is a whitespace-separated token stream: `rows cols` followed by
//! `rows * cols` row-major entries, twice. There are no flags; diagnostics
//! only appear on stderr (set `RUST_LOG=debug` for parse/multiply spans).

use std::io::{self, Read};

use matprod_matrix::Matrix;
use matprod_matrix::mul::{compatible, mul_row_major};
use matprod_matrix::parse::{ParseMatrixError, parse_matrix};
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

#[derive(Debug, Error)]
enum MainError {
    #[error("failed to read standard input: {0}")]
    Io(#[from] io::Error),
    #[error("malformed matrix input: {0}")]
    Parse(#[from] ParseMatrixError),
}

fn main() -> Result<(), MainError> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    let mut tokens = input.split_whitespace();

    let first = parse_matrix(&mut tokens)?;
    let second = parse_matrix(&mut tokens)?;
    debug!(a = %first.dimensions(), b = %second.dimensions(), "matrices read");

    if !compatible(&first, &second) {
        println!("Incompatible matrices!");
        return Ok(());
    }

    let product = mul_row_major(&first, &second);
    print!("{}", product.display_rows());
    Ok(())
}
