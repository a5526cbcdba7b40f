//! Reading matrices out of a whitespace-separated token stream.
//!
//! The expected layout is `rows cols` followed by `rows * cols` entries in
//! row-major order. Dimension plausibility is deliberately not checked: a
//! `0 0` header yields an empty matrix, and an overstated dimension simply
//! exhausts the stream.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::str::FromStr;

use thiserror::Error;
use tracing::debug;

use crate::dense::RowMajorMatrix;

/// Error type for matrix parsing failures.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseMatrixError {
    /// The token stream ended before the matrix was complete.
    #[error("input ended while reading the {context}")]
    ExhaustedStream {
        /// What was being read when the stream ran dry
        context: &'static str,
    },
    /// A token could not be read as an integer of the expected kind.
    #[error("invalid integer token `{token}` for the {context}")]
    InvalidToken {
        /// The offending token, verbatim
        token: String,
        /// What the token was supposed to be
        context: &'static str,
    },
}

/// Result type alias for parsing operations.
pub type ParseResult<T> = core::result::Result<T, ParseMatrixError>;

fn next_int<'a, I, T>(tokens: &mut I, context: &'static str) -> ParseResult<T>
where
    I: Iterator<Item = &'a str>,
    T: FromStr,
{
    let token = tokens
        .next()
        .ok_or(ParseMatrixError::ExhaustedStream { context })?;
    token.parse().map_err(|_| ParseMatrixError::InvalidToken {
        token: token.to_string(),
        context,
    })
}

/// Consume one matrix from `tokens`: `rows cols` then row-major entries.
pub fn parse_matrix<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
) -> ParseResult<RowMajorMatrix<i64>> {
    let rows: usize = next_int(tokens, "row count")?;
    let cols: usize = next_int(tokens, "column count")?;

    let values = (0..rows * cols)
        .map(|_| next_int(tokens, "matrix entry"))
        .collect::<ParseResult<Vec<i64>>>()?;

    debug!(rows, cols, "parsed matrix");
    Ok(RowMajorMatrix::new(values, cols))
}
