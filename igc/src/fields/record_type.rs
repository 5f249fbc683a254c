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

use crate::{Error, Field, FixedField};

/// The leading literal of a line that selects the record type.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RecordType {
    /// `A`: Flight recorder manufacturer and identification.
    FlightRecorderId,
    /// `B`: Fix with time, position and altitudes.
    Fix,
    /// `C`: Task and declaration.
    Task,
    /// `D`: Differential GNSS.
    DifferentialGnss,
    /// `E`: Event.
    Event,
    /// `F`: Satellite constellation.
    Satellites,
    /// `G`: Security.
    Security,
    /// `H`: File header.
    Header,
    /// `I`: Extensions of the fix record.
    FixExtensions,
    /// `J`: Extensions of the K record.
    DataExtensions,
    /// `K`: Extension data.
    ExtensionData,
    /// `L`: Logbook and comments.
    Logbook,
}

impl RecordType {
    /// Returns the literal as string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FlightRecorderId => "A",
            Self::Fix => "B",
            Self::Task => "C",
            Self::DifferentialGnss => "D",
            Self::Event => "E",
            Self::Satellites => "F",
            Self::Security => "G",
            Self::Header => "H",
            Self::FixExtensions => "I",
            Self::DataExtensions => "J",
            Self::ExtensionData => "K",
            Self::Logbook => "L",
        }
    }

    /// Returns the literal as character.
    pub fn as_char(&self) -> char {
        self.as_str().chars().next().unwrap_or('?')
    }
}

impl Field for RecordType {
    const NAME: &'static str = "Record Type";
}

impl FixedField for RecordType {
    const LENGTH: usize = 1;
}

impl FromStr for RecordType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unrecognized = || Error::UnrecognizedRecord {
            found: s.to_owned(),
            expected: "one of A to L",
        };

        let [byte] = s.as_bytes() else {
            return Err(unrecognized());
        };

        match byte.to_ascii_uppercase() {
            b'A' => Ok(Self::FlightRecorderId),
            b'B' => Ok(Self::Fix),
            b'C' => Ok(Self::Task),
            b'D' => Ok(Self::DifferentialGnss),
            b'E' => Ok(Self::Event),
            b'F' => Ok(Self::Satellites),
            b'G' => Ok(Self::Security),
            b'H' => Ok(Self::Header),
            b'I' => Ok(Self::FixExtensions),
            b'J' => Ok(Self::DataExtensions),
            b'K' => Ok(Self::ExtensionData),
            b'L' => Ok(Self::Logbook),
            _ => Err(unrecognized()),
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_any_case() {
        assert_eq!("A".parse(), Ok(RecordType::FlightRecorderId));
        assert_eq!("a".parse(), Ok(RecordType::FlightRecorderId));
        assert_eq!("b".parse::<RecordType>().map(|t| t.to_string()), Ok("B".to_string()));
        assert_eq!("i".parse(), Ok(RecordType::FixExtensions));
    }

    #[test]
    fn rejects_unknown_literals() {
        for s in ["S", "AA", "", "1", "Z"] {
            let err = s.parse::<RecordType>().expect_err("literal should be rejected");
            assert_eq!(err.kind(), crate::ErrorKind::UnrecognizedRecord);
        }
    }
}
