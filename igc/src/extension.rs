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
use std::slice;
use std::str::FromStr;

use crate::field::fixed_length;
use crate::fields::{ExtensionCount, FinishByte, StartByte, Subtype};
use crate::{Error, Field, FixedField};

/// Describes the bytes of an extension within a B record.
///
/// The text form is `SSFFCCC` with the 1-based start byte `SS`, the finish
/// byte `FF` and the subtype `CCC`.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extension {
    start: u8,
    finish: u8,
    subtype: Subtype,
}

impl Extension {
    /// Creates the extension.
    ///
    /// # Errors
    ///
    /// Returns an error if a byte number is out of range or if the extension
    /// starts after it finishes.
    pub fn new(start: u8, finish: u8, subtype: Subtype) -> Result<Self, Error> {
        let start = StartByte::new(start)?.value();
        let finish = FinishByte::new(finish)?.value();

        if start > finish {
            return Err(Error::InvalidPosition { start, finish });
        }

        Ok(Self {
            start,
            finish,
            subtype,
        })
    }

    /// Decodes the extension from the 7 byte slice of an I record.
    ///
    /// # Errors
    ///
    /// Returns an error if the slice is malformed, the subtype is unknown or
    /// the extension starts after it finishes.
    #[inline]
    pub fn from_slice(s: &str) -> Result<Self, Error> {
        s.parse()
    }

    /// The 1-based byte at which the extension starts.
    #[inline]
    pub fn start(&self) -> u8 {
        self.start
    }

    /// The 1-based byte at which the extension finishes.
    #[inline]
    pub fn finish(&self) -> u8 {
        self.finish
    }

    #[inline]
    pub fn subtype(&self) -> Subtype {
        self.subtype
    }

    /// Returns the number of bytes of the extension.
    #[inline]
    pub fn width(&self) -> usize {
        (self.finish - self.start) as usize + 1
    }
}

impl Field for Extension {
    const NAME: &'static str = "Extension";
}

impl FixedField for Extension {
    const LENGTH: usize = 7;
}

impl FromStr for Extension {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = fixed_length::<Self>(s)?;

        let start: StartByte = s[0..2].parse()?;
        let finish: FinishByte = s[2..4].parse()?;
        let subtype: Subtype = s[4..7].parse()?;

        Self::new(start.value(), finish.value(), subtype)
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}{}", self.start, self.finish, self.subtype)
    }
}

/// The ordered extensions of B records declared by an I record.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtensionLayout(Vec<Extension>);

/// Latitude and longitude minute decimals in the two bytes following the B
/// record's fixed fields.
const POSITION_DECIMALS: [Extension; 2] = [
    Extension {
        start: 36,
        finish: 36,
        subtype: Subtype::LATITUDE_DECIMALS,
    },
    Extension {
        start: 37,
        finish: 37,
        subtype: Subtype::LONGITUDE_DECIMALS,
    },
];

impl ExtensionLayout {
    /// Creates the layout from extensions in the order of the I record.
    ///
    /// # Errors
    ///
    /// Returns an error if there are more extensions than an I record can
    /// declare.
    pub fn new(extensions: Vec<Extension>) -> Result<Self, Error> {
        match u8::try_from(extensions.len()) {
            Ok(count) if count <= ExtensionCount::MAX => Ok(Self(extensions)),
            _ => Err(Error::OutOfRange {
                field: ExtensionCount::NAME,
                value: extensions.len() as f64,
                min: ExtensionCount::MIN as f64,
                max: ExtensionCount::MAX as f64,
            }),
        }
    }

    /// The layout of a B record that extends latitude and longitude by one
    /// minute decimal each, i.e. `I023636LAD3737LOD`.
    pub fn position_decimals() -> Self {
        Self(POSITION_DECIMALS.to_vec())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Extension> {
        self.0.iter()
    }

    /// Returns the first extension of the subtype.
    pub fn get(&self, subtype: Subtype) -> Option<&Extension> {
        self.0.iter().find(|ext| ext.subtype == subtype)
    }

    /// Checks that the extensions occupy the bytes following the first
    /// `offset` bytes of a line without gaps or overlaps.
    ///
    /// Returns the length of a line with this layout.
    ///
    /// # Errors
    ///
    /// Returns an error if an extension doesn't start right after its
    /// predecessor.
    pub fn line_length(&self, offset: usize) -> Result<usize, Error> {
        let mut next = offset + 1;

        for ext in &self.0 {
            if ext.start as usize != next {
                return Err(Error::InvalidLayout {
                    subtype: ext.subtype.to_string(),
                    start: ext.start,
                    finish: ext.finish,
                    expected: next,
                });
            }
            next = ext.finish as usize + 1;
        }

        Ok(next - 1)
    }
}

impl<'a> IntoIterator for &'a ExtensionLayout {
    type Item = &'a Extension;
    type IntoIter = slice::Iter<'a, Extension>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
