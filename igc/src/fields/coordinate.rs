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
use std::marker::PhantomData;
use std::str::FromStr;

use crate::field::fixed_length;
use crate::{Error, Field, FixedField};

/// The default number of fractional digits of a coordinate's decimal degrees.
pub const DEFAULT_PRECISION: u8 = 10;

/// The decimal places of minutes in the fixed-width text.
pub const MINUTE_DECIMALS: u8 = 3;

/// The maximum number of extra minute decimals that can extend the fixed-width
/// text.
pub const MAX_EXTRA_DIGITS: usize = 5;

/// The properties of a geographic axis.
pub trait Axis {
    const NAME: &'static str;
    const DEGREES: &'static str;
    const MINUTES: &'static str;
    const SECONDS: &'static str;
    const HEMISPHERE: &'static str;
    const EXTRA_DIGITS: &'static str;

    /// The text pattern of the fixed-width coordinate.
    const PATTERN: &'static str;

    /// The largest absolute value in degrees.
    const BOUND: u16;

    /// The number of digits of the degrees.
    const DEGREE_DIGITS: usize;

    /// The hemisphere of positive values.
    const POSITIVE: char;

    /// The hemisphere of negative values.
    const NEGATIVE: char;
}

#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct NorthSouth;

impl Axis for NorthSouth {
    const NAME: &'static str = "Latitude";
    const DEGREES: &'static str = "Latitude Degrees";
    const MINUTES: &'static str = "Latitude Minutes";
    const SECONDS: &'static str = "Latitude Seconds";
    const HEMISPHERE: &'static str = "Latitude Hemisphere";
    const EXTRA_DIGITS: &'static str = "Latitude Decimal Minutes Extension";
    const PATTERN: &'static str = "DDMMmmm followed by N or S";
    const BOUND: u16 = 90;
    const DEGREE_DIGITS: usize = 2;
    const POSITIVE: char = 'N';
    const NEGATIVE: char = 'S';
}

#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct EastWest;

impl Axis for EastWest {
    const NAME: &'static str = "Longitude";
    const DEGREES: &'static str = "Longitude Degrees";
    const MINUTES: &'static str = "Longitude Minutes";
    const SECONDS: &'static str = "Longitude Seconds";
    const HEMISPHERE: &'static str = "Longitude Hemisphere";
    const EXTRA_DIGITS: &'static str = "Longitude Decimal Minutes Extension";
    const PATTERN: &'static str = "DDDMMmmm followed by E or W";
    const BOUND: u16 = 180;
    const DEGREE_DIGITS: usize = 3;
    const POSITIVE: char = 'E';
    const NEGATIVE: char = 'W';
}

/// A geographic coordinate stored as decimal degrees.
///
/// The text form are the degrees, the minutes with three decimals and the
/// hemisphere, e.g. `5439791N` for 54° 39.791' north. Degrees, minutes and
/// seconds are derived from the decimal degrees.
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate<A> {
    decimal: f64,
    minute_decimals: u8,
    #[cfg_attr(feature = "serde", serde(skip))]
    axis: PhantomData<A>,
}

/// Latitude in the range from -90° (south) to 90° (north).
pub type Latitude = Coordinate<NorthSouth>;

/// Longitude in the range from -180° (west) to 180° (east).
pub type Longitude = Coordinate<EastWest>;

fn round_to(value: f64, precision: u8) -> f64 {
    let factor = 10f64.powi(precision.min(15) as i32);
    (value * factor).round() / factor
}

fn check_component(field: &'static str, value: f64, max: f64) -> Result<(), Error> {
    if (0.0..=max).contains(&value) {
        Ok(())
    } else {
        Err(Error::OutOfRange {
            field,
            value,
            min: 0.0,
            max,
        })
    }
}

impl<A: Axis> Coordinate<A> {
    /// Creates the coordinate from decimal degrees rounded to the
    /// [`DEFAULT_PRECISION`].
    ///
    /// # Errors
    ///
    /// Returns an error if the value exceeds the axis' bound.
    pub fn from_decimal(decimal: f64) -> Result<Self, Error> {
        Self::with_precision(decimal, DEFAULT_PRECISION)
    }

    /// Creates the coordinate from decimal degrees rounded to `precision`
    /// fractional digits.
    ///
    /// # Errors
    ///
    /// Returns an error if the value exceeds the axis' bound.
    pub fn with_precision(decimal: f64, precision: u8) -> Result<Self, Error> {
        let bound = A::BOUND as f64;

        if !(-bound..=bound).contains(&decimal) {
            return Err(Error::OutOfRange {
                field: A::NAME,
                value: decimal,
                min: -bound,
                max: bound,
            });
        }

        Ok(Self {
            decimal: round_to(decimal, precision),
            minute_decimals: MINUTE_DECIMALS,
            axis: PhantomData,
        })
    }

    /// Creates the coordinate from degrees, minutes, seconds and hemisphere.
    ///
    /// # Errors
    ///
    /// Returns an error if any component or the combined value is out of range
    /// or if the hemisphere is not one of the axis.
    pub fn from_dms(degrees: u16, minutes: u8, seconds: f64, hemisphere: char) -> Result<Self, Error> {
        check_component(A::DEGREES, degrees as f64, A::BOUND as f64)?;
        check_component(A::MINUTES, minutes as f64, 60.0)?;
        check_component(A::SECONDS, seconds, 60.0)?;
        let sign = Self::sign(hemisphere)?;

        let decimal = degrees as f64 + minutes as f64 / 60.0 + seconds / 3600.0;
        Self::from_decimal(sign * decimal)
    }

    /// Creates the coordinate from degrees, decimal minutes and hemisphere.
    ///
    /// # Errors
    ///
    /// Returns an error if any component or the combined value is out of range
    /// or if the hemisphere is not one of the axis.
    pub fn from_dmm(degrees: u16, minutes: f64, hemisphere: char) -> Result<Self, Error> {
        check_component(A::DEGREES, degrees as f64, A::BOUND as f64)?;
        check_component(A::MINUTES, minutes, 60.0)?;
        let sign = Self::sign(hemisphere)?;

        let decimal = degrees as f64 + minutes / 60.0;
        Self::from_decimal(sign * decimal)
    }

    /// Decodes the fixed-width coordinate whose minutes are extended by
    /// `extra` decimal places.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is malformed, the extra digits are no
    /// digits or too many, or if the value is out of range.
    pub fn decode_extended(text: &str, extra: &str) -> Result<Self, Error> {
        let text = fixed_length::<Self>(text)?;

        if !extra.is_ascii() {
            return Err(Error::NotText {
                context: A::EXTRA_DIGITS,
            });
        }

        if extra.len() > MAX_EXTRA_DIGITS {
            return Err(Error::InvalidFieldLength {
                field: A::EXTRA_DIGITS,
                expected: MAX_EXTRA_DIGITS,
                actual: extra.len(),
            });
        }

        let invalid = || Error::InvalidFormat {
            field: A::NAME,
            expected: A::PATTERN,
            value: text.to_owned(),
        };

        let (digits, hemisphere) = text.split_at(A::DEGREE_DIGITS + 5);
        let hemisphere = hemisphere.chars().next().ok_or_else(invalid)?;
        let upper = hemisphere.to_ascii_uppercase();
        if upper != A::POSITIVE && upper != A::NEGATIVE {
            return Err(invalid());
        }

        let (degrees, minutes) = digits.split_at(A::DEGREE_DIGITS);
        let degrees =
            parse_numeric!(u16, A::NAME, A::PATTERN, degrees).map_err(|_| invalid())?;
        let mut units = parse_numeric!(u64, A::NAME, A::PATTERN, minutes).map_err(|_| invalid())?;

        if !extra.is_empty() {
            let extra_units = parse_numeric!(u64, A::EXTRA_DIGITS, "digits", extra)?;
            units = units * 10u64.pow(extra.len() as u32) + extra_units;
        }

        let decimals = MINUTE_DECIMALS as usize + extra.len();
        let scale = 10u64.pow(decimals as u32);

        // the text has no representation for a full 60 minutes
        if units >= 60 * scale {
            return Err(Error::OutOfRange {
                field: A::MINUTES,
                value: units as f64 / scale as f64,
                min: 0.0,
                max: (60 * scale - 1) as f64 / scale as f64,
            });
        }

        let mut coordinate = Self::from_dmm(degrees, units as f64 / scale as f64, hemisphere)?;
        coordinate.minute_decimals = decimals as u8;
        Ok(coordinate)
    }

    /// Returns the coordinate as signed decimal degrees.
    #[inline]
    pub fn as_decimal(&self) -> f64 {
        self.decimal
    }

    /// Returns the number of decimal places of the minutes this coordinate was
    /// decoded with.
    #[inline]
    pub fn minute_decimals(&self) -> u8 {
        self.minute_decimals
    }

    /// Returns the upper-case hemisphere letter.
    ///
    /// Zero keeps the hemisphere it was created with as the sign of `0.0`.
    pub fn hemisphere(&self) -> char {
        if self.decimal.is_sign_negative() {
            A::NEGATIVE
        } else {
            A::POSITIVE
        }
    }

    /// Returns the whole degrees.
    pub fn degrees(&self) -> u16 {
        self.decimal.abs().trunc() as u16
    }

    /// Returns the minutes including their fraction.
    pub fn decimal_minutes(&self) -> f64 {
        let abs = self.decimal.abs();
        round_to(60.0 * (abs - abs.trunc()), DEFAULT_PRECISION)
    }

    /// Returns the whole minutes.
    pub fn minutes(&self) -> u8 {
        self.decimal_minutes().trunc() as u8
    }

    /// Returns the seconds including their fraction.
    pub fn decimal_seconds(&self) -> f64 {
        let abs = self.decimal.abs();
        let seconds = 3600.0 * (abs - abs.trunc()) - 60.0 * self.minutes() as f64;
        round_to(seconds, DEFAULT_PRECISION)
    }

    /// Returns degrees, minutes, seconds and hemisphere.
    pub fn dms(&self) -> (u16, u8, f64, char) {
        (
            self.degrees(),
            self.minutes(),
            self.decimal_seconds(),
            self.hemisphere(),
        )
    }

    /// Returns degrees, decimal minutes and hemisphere.
    pub fn dmm(&self) -> (u16, f64, char) {
        (self.degrees(), self.decimal_minutes(), self.hemisphere())
    }

    /// Encodes the fixed-width text together with `extra` minute decimals
    /// that extend it.
    pub(crate) fn encode_extended(&self, extra: usize) -> (String, String) {
        let extra = extra.min(MAX_EXTRA_DIGITS);
        let (degrees, units) = self.minute_units(MINUTE_DECIMALS as u32 + extra as u32);
        let scale = 10u64.pow(extra as u32);

        let text = format!(
            "{degrees:0width$}{:05}{}",
            units / scale,
            self.hemisphere(),
            width = A::DEGREE_DIGITS
        );
        let extension = if extra > 0 {
            format!("{:0extra$}", units % scale)
        } else {
            String::new()
        };

        (text, extension)
    }

    fn sign(hemisphere: char) -> Result<f64, Error> {
        match hemisphere.to_ascii_uppercase() {
            c if c == A::POSITIVE => Ok(1.0),
            c if c == A::NEGATIVE => Ok(-1.0),
            _ => Err(Error::InvalidFormat {
                field: A::HEMISPHERE,
                expected: if A::POSITIVE == 'N' { "N or S" } else { "E or W" },
                value: hemisphere.to_string(),
            }),
        }
    }

    /// Returns the whole degrees and the minutes in units of `decimals`
    /// decimal places.
    fn minute_units(&self, decimals: u32) -> (u16, u64) {
        let scale = 10u64.pow(decimals);
        let abs = self.decimal.abs();
        let mut degrees = abs.trunc() as u16;
        let minutes = round_to(60.0 * (abs - abs.trunc()), DEFAULT_PRECISION);
        let mut units = (minutes * scale as f64).round() as u64;

        if units >= 60 * scale {
            degrees += 1;
            units -= 60 * scale;
        }

        (degrees, units)
    }
}

impl<A: Axis> Field for Coordinate<A> {
    const NAME: &'static str = A::NAME;
}

impl<A: Axis> FixedField for Coordinate<A> {
    const LENGTH: usize = A::DEGREE_DIGITS + 6;
}

impl<A: Axis> FromStr for Coordinate<A> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode_extended(s, "")
    }
}

impl<A: Axis> fmt::Display for Coordinate<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let extra = self.minute_decimals.saturating_sub(MINUTE_DECIMALS) as usize;
        let (text, _) = self.encode_extended(extra);
        f.write_str(&text)
    }
}
