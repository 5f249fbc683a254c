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

use crate::field::fixed_length;
use crate::{Error, Field, FixedField};

/// The three-letter codes of the known extension subtypes.
pub const KNOWN_SUBTYPES: &[&str] = &[
    // linear accelerations in X, Y and Z axes
    "ACX", "ACY", "ACZ",
    // angular accelerations in X, Y and Z axes
    "ANX", "ANY", "ANZ",
    // attitude pitch and roll angle
    "AOP", "AOR",
    // altimeter pressure setting
    "ATS",
    "BFI", "CCL", "CCN", "CGD", "CID", "CLB", "CM2", "CM3", "CM4", "CO2",
    "DAE", "DTE", "EDN", "ENL", "EOF", "EON", "EUP", "FIN", "FLP", "FOR",
    "FXA", "GCN", "GSP", "HDM", "HDT", "IAS",
    // further decimal places of the latitude minutes
    "LAD",
    "LCU",
    // further decimal places of the longitude minutes
    "LOD",
    "LOV", "MAC", "MOP", "OA1", "OA2", "OA3", "OAT", "ONT", "PEV", "PFC",
    "PLD", "RAI", "REX", "RHW", "RPM", "SEC", "SIT", "SIU", "STA", "TAS",
    "TDS", "TEN", "TRM", "TRN", "TRT", "UND", "VAR", "VAT", "VXA", "WDI",
    "WSP", "WVE",
];

/// The subtype code of an extension, e.g. `LAD` or `ENL`.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Subtype([u8; 3]);

impl Subtype {
    /// Further decimal places of the latitude minutes.
    pub const LATITUDE_DECIMALS: Self = Self(*b"LAD");

    /// Further decimal places of the longitude minutes.
    pub const LONGITUDE_DECIMALS: Self = Self(*b"LOD");

    /// Returns `true` if the code is a known subtype. The case is ignored.
    pub fn is_known(code: &str) -> bool {
        KNOWN_SUBTYPES
            .iter()
            .any(|known| known.eq_ignore_ascii_case(code))
    }

    /// Returns the upper-case code.
    #[inline]
    pub fn as_str(&self) -> &str {
        // only known codes are ever stored
        std::str::from_utf8(&self.0).unwrap_or("")
    }
}

impl Field for Subtype {
    const NAME: &'static str = "Extension Subtype";
}

impl FixedField for Subtype {
    const LENGTH: usize = 3;
}

impl FromStr for Subtype {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = fixed_length::<Self>(s)?;

        if !s.bytes().all(|byte| byte.is_ascii_alphanumeric()) {
            return Err(Error::InvalidFormat {
                field: Self::NAME,
                expected: "3 alphanumeric characters",
                value: s.to_owned(),
            });
        }

        if !Self::is_known(s) {
            return Err(Error::UnknownSubtype {
                value: s.to_owned(),
            });
        }

        let mut bytes = [0; 3];
        bytes.copy_from_slice(s.as_bytes());
        bytes.make_ascii_uppercase();
        Ok(Self(bytes))
    }
}

impl fmt::Debug for Subtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.as_str())
    }
}

impl fmt::Display for Subtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn parses_known_subtypes() {
        assert_eq!("LAD".parse(), Ok(Subtype::LATITUDE_DECIMALS));
        assert_eq!("lod".parse(), Ok(Subtype::LONGITUDE_DECIMALS));
        assert_eq!("Enl".parse::<Subtype>().map(|s| s.to_string()), Ok("ENL".to_string()));
    }

    #[test]
    fn rejects_unknown_subtypes() {
        assert_eq!(
            "XYZ".parse::<Subtype>(),
            Err(Error::UnknownSubtype {
                value: "XYZ".to_string()
            })
        );
        assert_eq!(
            "L-D".parse::<Subtype>().map_err(|e| e.kind()),
            Err(ErrorKind::Grammar)
        );
        assert_eq!(
            "EN*".parse::<Subtype>(),
            Err(Error::InvalidFormat {
                field: "Extension Subtype",
                expected: "3 alphanumeric characters",
                value: "EN*".to_string(),
            })
        );
        assert_eq!(
            "LA".parse::<Subtype>().map_err(|e| e.kind()),
            Err(ErrorKind::Shape)
        );
    }

    #[test]
    fn catalog_is_upper_case() {
        assert!(KNOWN_SUBTYPES
            .iter()
            .all(|code| code.len() == 3 && code.bytes().all(|b| !b.is_ascii_lowercase())));
    }
}
