//! Parsing of user-provided entry indices.
//!
//! This module provides [`IndexParser`] which turns the text typed at the
//! selection and navigation prompts into integers.
//!
//! # Public API
//! - [`IndexParser`]: Static parsing helpers
//!
//! # Supported Formats
//! - **Single index**: `3`
//! - **Comma-separated**: `0,3,5` or `0, 3 , 5` (each token is trimmed)
//!
//! # Rules
//! - **Order kept**: indices come back in the order they were typed
//! - **Duplicates kept**: `0,0` yields two entries
//! - **No bounds check**: range handling is up to the caller, so negative
//!   and too-large values parse successfully, even beyond `i64`
//! - **All or nothing**: one bad token (including an empty one) fails the
//!   whole input

use crate::core::error::{FileNavigatorError, Result};
use std::num::IntErrorKind;

pub struct IndexParser;

impl IndexParser {
    pub fn parse(input: &str) -> Result<Vec<i64>> {
        input.split(',').map(Self::parse_single).collect()
    }

    /// Integers beyond `i64` saturate, so they parse but never resolve
    pub fn parse_single(token: &str) -> Result<i64> {
        let token = token.trim();
        match token.parse::<i64>() {
            Ok(index) => Ok(index),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => Ok(i64::MAX),
                IntErrorKind::NegOverflow => Ok(i64::MIN),
                _ => Err(FileNavigatorError::invalid_number(token)),
            },
        }
    }

    /// Maps a parsed index onto a listing of `len` entries
    pub fn resolve(index: i64, len: usize) -> Option<usize> {
        usize::try_from(index).ok().filter(|&i| i < len)
    }
}
