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

/// The fix validity of a B record.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Validity {
    /// `A`: A 3D fix.
    ThreeD,
    /// `V`: A 2D fix without GNSS altitude or no GNSS data at all. The
    /// pressure altitude is still recorded.
    TwoD,
}

impl Field for Validity {
    const NAME: &'static str = "Fix Validity";
}

impl FixedField for Validity {
    const LENGTH: usize = 1;
}

impl FromStr for Validity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" | "a" => Ok(Self::ThreeD),
            "V" | "v" => Ok(Self::TwoD),
            _ => Err(Error::InvalidFormat {
                field: Self::NAME,
                expected: "A or V",
                value: s.to_owned(),
            }),
        }
    }
}

impl fmt::Display for Validity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ThreeD => f.write_str("A"),
            Self::TwoD => f.write_str("V"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_validity() {
        assert_eq!("A".parse(), Ok(Validity::ThreeD));
        assert_eq!("v".parse(), Ok(Validity::TwoD));
        assert_eq!(Validity::TwoD.to_string(), "V");
    }

    #[test]
    fn rejects_invalid_validity() {
        assert!("aa".parse::<Validity>().is_err());
        assert!("B".parse::<Validity>().is_err());
        assert!("".parse::<Validity>().is_err());
    }
}
