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

use log::{debug, trace};

use crate::extension::ExtensionLayout;
use crate::fields::RecordType;
use crate::record::Record as _;
use crate::Error;

mod fix;
mod fix_extensions;
mod identification;

pub use fix::{BRecord, ExtensionValue, CORE_LENGTH};
pub use fix_extensions::IRecord;
pub use identification::ARecord;

/// A decoded line of an IGC file.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Record {
    A(ARecord),
    B(BRecord),
    I(IRecord),
}

impl Record {
    /// Decodes a line by its leading record type.
    ///
    /// A B record is decoded without a declared layout. Use
    /// [`decode_with`](Record::decode_with) to decode the fixes of a file that
    /// has an I record.
    ///
    /// # Errors
    ///
    /// Returns an error if the line is empty, starts with a record type other
    /// than A, B or I, or the record is invalid.
    pub fn decode(line: &str) -> Result<Self, Error> {
        Self::decode_with(line, None)
    }

    /// Decodes a line and uses the `layout` for B records.
    ///
    /// # Errors
    ///
    /// Returns an error if the line is empty, starts with a record type other
    /// than A, B or I, or the record is invalid.
    pub fn decode_with(line: &str, layout: Option<&ExtensionLayout>) -> Result<Self, Error> {
        let result = Self::dispatch(line, layout);

        if let Err(err) = &result {
            debug!("failed to decode {line:?}: {err}");
        }

        result
    }

    fn dispatch(line: &str, layout: Option<&ExtensionLayout>) -> Result<Self, Error> {
        let unrecognized = |found: &str| Error::UnrecognizedRecord {
            found: found.to_owned(),
            expected: "A, B or I",
        };

        let literal = line.get(0..1).ok_or_else(|| unrecognized(""))?;
        let record_type = literal
            .parse::<RecordType>()
            .map_err(|_| unrecognized(literal))?;

        trace!("decoding {} record", record_type.as_str());

        match (record_type, layout) {
            (RecordType::FlightRecorderId, _) => ARecord::decode(line).map(Self::A),
            (RecordType::Fix, Some(layout)) => {
                BRecord::decode_with_layout(line, layout).map(Self::B)
            }
            (RecordType::Fix, None) => BRecord::decode(line).map(Self::B),
            (RecordType::FixExtensions, _) => IRecord::decode(line).map(Self::I),
            _ => Err(unrecognized(literal)),
        }
    }

    /// Returns the type of this record.
    pub fn kind(&self) -> RecordType {
        match self {
            Self::A(_) => RecordType::FlightRecorderId,
            Self::B(_) => RecordType::Fix,
            Self::I(_) => RecordType::FixExtensions,
        }
    }
}

impl FromStr for Record {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        Self::decode(line)
    }
}

impl TryFrom<&[u8]> for Record {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::decode(crate::record::as_text(bytes)?)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A(record) => fmt::Display::fmt(record, f),
            Self::B(record) => fmt::Display::fmt(record, f),
            Self::I(record) => fmt::Display::fmt(record, f),
        }
    }
}

impl From<ARecord> for Record {
    fn from(record: ARecord) -> Self {
        Self::A(record)
    }
}

impl From<BRecord> for Record {
    fn from(record: BRecord) -> Self {
        Self::B(record)
    }
}

impl From<IRecord> for Record {
    fn from(record: IRecord) -> Self {
        Self::I(record)
    }
}
