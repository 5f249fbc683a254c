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
use std::str::FromStr;

use crate::Error;

/// A typed field of a record.
///
/// This trait is implemented by all IGC fields. A field is decoded with
/// [`FromStr`] which validates the text against the field's grammar and
/// bounds, and it's encoded back to its canonical text with
/// [`Display`](fmt::Display). For every accepted text `s`, the encoded field is
/// `s` again (upper-cased where the field normalizes its case).
pub trait Field: FromStr<Err = Error> + fmt::Display {
    /// The name of the field used in errors.
    const NAME: &'static str;

    /// Parse this field from a byte slice.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not ASCII text or any error returned
    /// by [`from_str`](FromStr::from_str).
    fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        match std::str::from_utf8(bytes) {
            Ok(s) if s.is_ascii() => s.parse(),
            _ => Err(Error::NotText { context: Self::NAME }),
        }
    }
}

/// A field with a fixed length.
pub trait FixedField: Field {
    /// The fixed length of this field in bytes.
    const LENGTH: usize;
}

/// Returns the text if it's ASCII with exactly the length of the field.
pub(crate) fn fixed_length<F: FixedField>(s: &str) -> Result<&str, Error> {
    if !s.is_ascii() {
        Err(Error::NotText { context: F::NAME })
    } else if s.len() == F::LENGTH {
        Ok(s)
    } else {
        Err(Error::InvalidFieldLength {
            field: F::NAME,
            expected: F::LENGTH,
            actual: s.len(),
        })
    }
}

/// Parses a number whose first byte is either `-` or a `0` sign placeholder
/// followed by digits only.
pub(crate) fn parse_signed(s: &str, field: &'static str, pattern: &'static str) -> Result<i32, Error> {
    let invalid = || Error::InvalidFormat {
        field,
        expected: pattern,
        value: s.to_owned(),
    };

    let negative = match s.as_bytes().first() {
        Some(b'-') => true,
        Some(b'0') => false,
        _ => return Err(invalid()),
    };

    let value = parse_numeric!(i32, field, pattern, &s[1..]).map_err(|_| invalid())?;
    Ok(if negative { -value } else { value })
}
