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

use crate::{Error, Field};

alphanumeric_field! {
    /// The three character code of the flight recorder's manufacturer.
    ManufacturerCode, "Manufacturer Code", 3
}

alphanumeric_field! {
    /// The three character serial number of the flight recorder.
    UniqueId, "Unique ID", 3
}

/// Free-form identification of the flight recorder that follows the unique
/// ID. Unlike the other fields, its case is kept as is.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IdExtension(String);

impl IdExtension {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Field for IdExtension {
    const NAME: &'static str = "ID Extension";
}

impl FromStr for IdExtension {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.bytes().all(|byte| byte.is_ascii_alphanumeric()) {
            Ok(Self(s.to_owned()))
        } else {
            Err(Error::InvalidFormat {
                field: Self::NAME,
                expected: "alphanumeric characters",
                value: s.to_owned(),
            })
        }
    }
}

impl fmt::Display for IdExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
