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

use chrono::{NaiveTime, Timelike};

use crate::{Error, Field, FixedField};

/// UTC time of day with a resolution of seconds (`HHMMSS`).
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Time(NaiveTime);

impl Time {
    /// Creates the time from a wall-clock time. Fractions of a second are
    /// dropped.
    pub fn new(time: NaiveTime) -> Self {
        Self(time.with_nanosecond(0).unwrap_or(time))
    }

    /// Creates the time from hour, minute and second.
    ///
    /// # Errors
    ///
    /// Returns an error if any component is out of range.
    pub fn from_hms(hour: u32, min: u32, sec: u32) -> Result<Self, Error> {
        let check = |field, value: u32, max: u32| {
            if value <= max {
                Ok(())
            } else {
                Err(Error::OutOfRange {
                    field,
                    value: value as f64,
                    min: 0.0,
                    max: max as f64,
                })
            }
        };

        check("Time Hour", hour, 23)?;
        check("Time Minute", min, 59)?;
        check("Time Second", sec, 59)?;

        NaiveTime::from_hms_opt(hour, min, sec)
            .map(Self)
            .ok_or(Error::OutOfRange {
                field: Self::NAME,
                value: (hour * 10000 + min * 100 + sec) as f64,
                min: 0.0,
                max: 235959.0,
            })
    }

    /// Returns the time of day.
    #[inline]
    pub fn as_naive_time(&self) -> NaiveTime {
        self.0
    }

    #[inline]
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    #[inline]
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    #[inline]
    pub fn second(&self) -> u32 {
        self.0.second()
    }
}

impl Field for Time {
    const NAME: &'static str = "Time";
}

impl FixedField for Time {
    const LENGTH: usize = 6;
}

impl FromStr for Time {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = crate::field::fixed_length::<Self>(s)?;
        let digits = |range: std::ops::Range<usize>| {
            parse_numeric!(u32, Self::NAME, "HHMMSS", &s[range]).map_err(|_| Error::InvalidFormat {
                field: Self::NAME,
                expected: "HHMMSS",
                value: s.to_owned(),
            })
        };

        let hour = digits(0..2)?;
        let min = digits(2..4)?;
        let sec = digits(4..6)?;
        Self::from_hms(hour, min, sec)
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}{:02}", self.hour(), self.minute(), self.second())
    }
}

impl From<Time> for NaiveTime {
    fn from(time: Time) -> Self {
        time.0
    }
}
