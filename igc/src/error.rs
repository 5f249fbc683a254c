// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use thiserror::Error;

/// The cause of an [`Error`].
///
/// Each error belongs to exactly one kind which allows callers (e.g. a repair
/// tool) to react to a failure without matching every variant.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum ErrorKind {
    /// The input is not text or has the wrong length.
    Shape,
    /// The text doesn't match the lexical pattern of a field.
    Grammar,
    /// A numeric or angular value is outside its legal bound.
    Range,
    /// An extension's byte positions are inconsistent.
    Position,
    /// The leading literal is not a known or not the expected record type.
    UnrecognizedRecord,
}

#[derive(Error, Clone, PartialEq, Debug)]
pub enum Error {
    #[error("{context} should be ASCII text")]
    NotText { context: &'static str },

    #[error("{record} record should be {expected} byte long but is {actual}")]
    InvalidRecordLength {
        record: char,
        expected: String,
        actual: usize,
    },

    #[error("{field} should be {expected} byte long but is {actual}")]
    InvalidFieldLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{field} is \"{value}\" but should match {expected}")]
    InvalidFormat {
        field: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("{field} is {value} but should be within [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("\"{value}\" is not a known extension subtype")]
    UnknownSubtype { value: String },

    #[error("extension starts at byte {start} but finishes at byte {finish}")]
    InvalidPosition { start: u8, finish: u8 },

    #[error("{subtype} extension at bytes {start}-{finish} should start at byte {expected}")]
    InvalidLayout {
        subtype: String,
        start: u8,
        finish: u8,
        expected: usize,
    },

    #[error("found \"{found}\" as record type but should be {expected}")]
    UnrecognizedRecord {
        found: String,
        expected: &'static str,
    },
}

impl Error {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotText { .. }
            | Self::InvalidRecordLength { .. }
            | Self::InvalidFieldLength { .. } => ErrorKind::Shape,
            Self::InvalidFormat { .. } | Self::UnknownSubtype { .. } => ErrorKind::Grammar,
            Self::OutOfRange { .. } => ErrorKind::Range,
            Self::InvalidPosition { .. } | Self::InvalidLayout { .. } => ErrorKind::Position,
            Self::UnrecognizedRecord { .. } => ErrorKind::UnrecognizedRecord,
        }
    }
}
