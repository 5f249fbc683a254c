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

use std::fmt;

use crate::fields::RecordType;
use crate::{Error, Field, FixedField};

/// An IGC record type.
pub trait Record: Sized {
    /// The leading literal of the record.
    const LITERAL: RecordType;

    /// The minimum length of the line including the literal.
    const MIN_LENGTH: usize;

    /// The maximum length of the line or `None` if it's unbounded.
    const MAX_LENGTH: Option<usize>;

    /// Parse the fields following the literal.
    ///
    /// # Errors
    ///
    /// Returns an error if any field contains invalid data.
    fn parse(fields: &mut Fields<'_>) -> Result<Self, Error>;

    /// Writes the canonical line of this record.
    fn encode(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// Checks the length of the line.
    ///
    /// # Errors
    ///
    /// Returns an error if the length is not within the record's bounds.
    fn check_length(len: usize) -> Result<(), Error> {
        let valid = match Self::MAX_LENGTH {
            Some(max) => (Self::MIN_LENGTH..=max).contains(&len),
            None => len >= Self::MIN_LENGTH,
        };

        if valid {
            Ok(())
        } else {
            let expected = match Self::MAX_LENGTH {
                Some(max) if max == Self::MIN_LENGTH => max.to_string(),
                Some(max) => format!("{} to {max}", Self::MIN_LENGTH),
                None => format!("at least {}", Self::MIN_LENGTH),
            };
            Err(Error::InvalidRecordLength {
                record: Self::LITERAL.as_char(),
                expected,
                actual: len,
            })
        }
    }

    /// Decode this record type from a line.
    ///
    /// # Errors
    ///
    /// Returns an error if the line doesn't start with the record's literal,
    /// has an invalid length or any error returned by
    /// [`parse`][Record::parse].
    fn decode(line: &str) -> Result<Self, Error> {
        let mut fields = Fields::new(line)?;
        fields.literal(Self::LITERAL)?;
        Self::check_length(line.len())?;

        let record = Self::parse(&mut fields)?;
        fields.finish(Self::LITERAL)?;
        Ok(record)
    }
}

/// Returns the bytes as text if they are ASCII.
pub(crate) fn as_text(bytes: &[u8]) -> Result<&str, Error> {
    match std::str::from_utf8(bytes) {
        Ok(line) if line.is_ascii() => Ok(line),
        _ => Err(Error::NotText { context: "record" }),
    }
}

/// A cursor over the fixed byte ranges of a line.
pub struct Fields<'a> {
    line: &'a str,
    index: usize,
}

impl<'a> Fields<'a> {
    /// Creates the cursor at the beginning of the line.
    ///
    /// # Errors
    ///
    /// Returns an error if the line is not ASCII. Only ASCII lines can be
    /// sliced at any byte position.
    pub fn new(line: &'a str) -> Result<Self, Error> {
        if line.is_ascii() {
            Ok(Self { line, index: 0 })
        } else {
            Err(Error::NotText { context: "record" })
        }
    }

    /// Returns the current position, which is the number of bytes read.
    #[inline]
    pub fn position(&self) -> usize {
        self.index
    }

    /// Returns the number of bytes not yet read.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.line.len() - self.index
    }

    /// Reads the leading record type and checks that it's the `expected` one.
    ///
    /// # Errors
    ///
    /// Returns an error if the literal is unknown or not the expected.
    pub fn literal(&mut self, expected: RecordType) -> Result<RecordType, Error> {
        let unrecognized = |found: &str| Error::UnrecognizedRecord {
            found: found.to_owned(),
            expected: expected.as_str(),
        };

        let raw = self.line.get(self.index..self.index + 1).unwrap_or("");
        let found = raw.parse::<RecordType>().map_err(|_| unrecognized(raw))?;

        if found == expected {
            self.index += 1;
            Ok(found)
        } else {
            Err(unrecognized(raw))
        }
    }

    /// Takes the next `n` bytes as raw text.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than `n` bytes are left.
    pub fn take(&mut self, n: usize, field: &'static str) -> Result<&'a str, Error> {
        let raw = self
            .line
            .get(self.index..self.index + n)
            .ok_or(Error::InvalidFieldLength {
                field,
                expected: n,
                actual: self.remaining(),
            })?;
        self.index += n;
        Ok(raw)
    }

    /// Reads the next field, and advances the position by the field's length.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing the field fails.
    #[inline]
    pub fn next<F>(&mut self) -> Result<F, Error>
    where
        F: FixedField,
    {
        self.take(F::LENGTH, F::NAME)?.parse()
    }

    /// Reads all remaining bytes as one field.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing the field fails.
    #[inline]
    pub fn rest<F>(&mut self) -> Result<F, Error>
    where
        F: Field,
    {
        let raw = &self.line[self.index..];
        self.index = self.line.len();
        raw.parse()
    }

    /// Checks that the whole line was read.
    ///
    /// # Errors
    ///
    /// Returns an error if bytes are left.
    pub fn finish(&self, record: RecordType) -> Result<(), Error> {
        if self.index == self.line.len() {
            Ok(())
        } else {
            Err(Error::InvalidRecordLength {
                record: record.as_char(),
                expected: self.index.to_string(),
                actual: self.line.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{GnssAltitude, ManufacturerCode};

    #[test]
    fn reads_fields_in_order() {
        let mut fields = Fields::new("AXCT00202").expect("line should be ASCII");
        assert_eq!(
            fields.literal(RecordType::FlightRecorderId),
            Ok(RecordType::FlightRecorderId)
        );

        let code: ManufacturerCode = fields.next().expect("code should parse");
        assert_eq!(code.as_str(), "XCT");

        let alt: GnssAltitude = fields.next().expect("altitude should parse");
        assert_eq!(alt.value(), 202);
        assert_eq!(fields.finish(RecordType::FlightRecorderId), Ok(()));
    }

    #[test]
    fn rejects_short_slices() {
        let mut fields = Fields::new("AXC").expect("line should be ASCII");
        fields.take(1, "Record Type").expect("literal should be taken");
        assert_eq!(
            fields.next::<ManufacturerCode>(),
            Err(Error::InvalidFieldLength {
                field: "Manufacturer Code",
                expected: 3,
                actual: 2,
            })
        );
    }

    #[test]
    fn rejects_unexpected_literal() {
        let mut fields = Fields::new("BXCT").expect("line should be ASCII");
        assert_eq!(
            fields.literal(RecordType::FlightRecorderId),
            Err(Error::UnrecognizedRecord {
                found: "B".to_string(),
                expected: "A",
            })
        );
    }

    #[test]
    fn rejects_non_ascii() {
        assert!(Fields::new("AXCTü").is_err());
        assert_eq!(
            as_text(&[b'A', 0xFF]),
            Err(Error::NotText { context: "record" })
        );
    }
}
