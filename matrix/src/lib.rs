//! Dense integer matrices with row-major storage, plus the token-stream
//! parsing, multiplication and fixed-width formatting used by the `matprod`
//! binary.

#![no_std]

extern crate alloc;

pub mod dense;
pub mod display;
pub mod mul;
pub mod parse;

use core::fmt;

use serde::{Deserialize, Serialize};

/// The shape of a matrix.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.height, self.width)
    }
}

pub trait Matrix<T> {
    fn width(&self) -> usize;
    fn height(&self) -> usize;

    fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.width(),
            height: self.height(),
        }
    }
}
