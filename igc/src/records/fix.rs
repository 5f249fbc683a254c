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

use log::debug;

use crate::extension::{Extension, ExtensionLayout};
use crate::fields::*;
use crate::record::{Fields, Record};
use crate::{Error, Field, FixedField};

/// The length of a B record without extensions.
pub const CORE_LENGTH: usize = 35;

/// The value of an extension that is not interpreted by the B record.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtensionValue {
    extension: Extension,
    value: String,
}

impl ExtensionValue {
    /// The extension that describes where the value is found.
    #[inline]
    pub fn extension(&self) -> &Extension {
        &self.extension
    }

    /// The raw text of the value.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A fix with time, position and altitudes.
///
/// The fixed fields take the first 35 bytes. An [`ExtensionLayout`] that is
/// declared by the file's I record describes any further bytes. Extensions of
/// the subtypes `LAD` and `LOD` add decimal places to the minutes of the
/// latitude and longitude; all others are kept as [`ExtensionValue`].
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BRecord {
    pub time: Time,
    pub latitude: Latitude,
    pub longitude: Longitude,
    pub validity: Validity,
    pub pressure_altitude: PressureAltitude,
    pub gnss_altitude: GnssAltitude,
    layout: ExtensionLayout,
    extensions: Vec<ExtensionValue>,
}

impl BRecord {
    /// Creates a fix without extensions.
    pub fn new(
        time: Time,
        latitude: Latitude,
        longitude: Longitude,
        validity: Validity,
        pressure_altitude: PressureAltitude,
        gnss_altitude: GnssAltitude,
    ) -> Self {
        Self {
            time,
            latitude,
            longitude,
            validity,
            pressure_altitude,
            gnss_altitude,
            layout: ExtensionLayout::default(),
            extensions: Vec::new(),
        }
    }

    /// Decodes the fix with the extensions of the `layout`.
    ///
    /// The extensions must follow the fixed fields without gaps and the line
    /// must end with the last extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the layout doesn't fit a B record, the line has not
    /// the layout's length or if any field is invalid.
    pub fn decode_with_layout(line: &str, layout: &ExtensionLayout) -> Result<Self, Error> {
        let mut fields = Fields::new(line)?;
        fields.literal(Self::LITERAL)?;

        let length = layout.line_length(CORE_LENGTH)?;
        if line.len() != length {
            return Err(Error::InvalidRecordLength {
                record: Self::LITERAL.as_char(),
                expected: length.to_string(),
                actual: line.len(),
            });
        }

        let record = Self::parse_with(&mut fields, layout.clone())?;
        fields.finish(Self::LITERAL)?;
        Ok(record)
    }

    /// The extensions this fix was decoded with.
    #[inline]
    pub fn layout(&self) -> &ExtensionLayout {
        &self.layout
    }

    /// The values of the extensions in the order of the layout, excluding
    /// the position decimals.
    #[inline]
    pub fn extensions(&self) -> &[ExtensionValue] {
        &self.extensions
    }

    /// Returns the raw value of the first extension of the subtype.
    pub fn extension(&self, subtype: Subtype) -> Option<&str> {
        self.extensions
            .iter()
            .find(|v| v.extension.subtype() == subtype)
            .map(ExtensionValue::value)
    }

    fn parse_with(fields: &mut Fields<'_>, layout: ExtensionLayout) -> Result<Self, Error> {
        let time = fields.next()?;
        let latitude = fields.take(Latitude::LENGTH, Latitude::NAME)?;
        let longitude = fields.take(Longitude::LENGTH, Longitude::NAME)?;
        let validity = fields.next()?;
        let pressure_altitude = fields.next()?;
        let gnss_altitude = fields.next()?;

        let mut latitude_decimals = None;
        let mut longitude_decimals = None;
        let mut extensions = Vec::new();

        for ext in &layout {
            let value = fields.take(ext.width(), Extension::NAME)?;

            match ext.subtype() {
                Subtype::LATITUDE_DECIMALS if latitude_decimals.is_none() => {
                    latitude_decimals = Some(value)
                }
                Subtype::LONGITUDE_DECIMALS if longitude_decimals.is_none() => {
                    longitude_decimals = Some(value)
                }
                _ => extensions.push(ExtensionValue {
                    extension: *ext,
                    value: value.to_owned(),
                }),
            }
        }

        Ok(Self {
            time,
            latitude: Latitude::decode_extended(latitude, latitude_decimals.unwrap_or(""))?,
            longitude: Longitude::decode_extended(longitude, longitude_decimals.unwrap_or(""))?,
            validity,
            pressure_altitude,
            gnss_altitude,
            layout,
            extensions,
        })
    }
}

impl Record for BRecord {
    const LITERAL: RecordType = RecordType::Fix;
    const MIN_LENGTH: usize = CORE_LENGTH;
    const MAX_LENGTH: Option<usize> = Some(CORE_LENGTH + 2);

    fn check_length(len: usize) -> Result<(), Error> {
        if len == CORE_LENGTH || len == CORE_LENGTH + 2 {
            Ok(())
        } else {
            Err(Error::InvalidRecordLength {
                record: Self::LITERAL.as_char(),
                expected: format!("{CORE_LENGTH} or {}", CORE_LENGTH + 2),
                actual: len,
            })
        }
    }

    fn parse(fields: &mut Fields<'_>) -> Result<Self, Error> {
        let layout = if fields.position() + fields.remaining() > CORE_LENGTH {
            debug!("decoding fix with one decimal of latitude and longitude minutes appended");
            ExtensionLayout::position_decimals()
        } else {
            ExtensionLayout::default()
        };

        Self::parse_with(fields, layout)
    }

    fn encode(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = |subtype| self.layout.get(subtype).map_or(0, Extension::width);
        let (latitude, latitude_decimals) =
            self.latitude.encode_extended(width(Subtype::LATITUDE_DECIMALS));
        let (longitude, longitude_decimals) =
            self.longitude.encode_extended(width(Subtype::LONGITUDE_DECIMALS));

        write!(
            f,
            "{}{}{latitude}{longitude}{}{}{}",
            Self::LITERAL,
            self.time,
            self.validity,
            self.pressure_altitude,
            self.gnss_altitude
        )?;

        let mut latitude_decimals = Some(latitude_decimals);
        let mut longitude_decimals = Some(longitude_decimals);
        let mut values = self.extensions.iter();

        for ext in &self.layout {
            let value = match ext.subtype() {
                Subtype::LATITUDE_DECIMALS if latitude_decimals.is_some() => {
                    latitude_decimals.take()
                }
                Subtype::LONGITUDE_DECIMALS if longitude_decimals.is_some() => {
                    longitude_decimals.take()
                }
                _ => values.next().map(|v| v.value.clone()),
            };
            f.write_str(value.as_deref().unwrap_or_default())?;
        }

        Ok(())
    }
}

record_impls!(BRecord);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    const FIX: &str = "B1135265439791N03758059EA0018200202";
    const EXTENDED_FIX: &str = "B1135265439791N03758059EA001820020257";

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "{actual} should be close to {expected}"
        );
    }

    #[test]
    fn fix_record() {
        let b: BRecord = FIX.parse().expect("B record should parse");

        assert_eq!(b.time.to_string(), "113526");
        assert_eq!((b.time.hour(), b.time.minute(), b.time.second()), (11, 35, 26));
        assert_close(b.latitude.as_decimal(), 54.0 + 39.791 / 60.0);
        assert_close(b.longitude.as_decimal(), 37.0 + 58.059 / 60.0);
        assert_eq!(b.validity, Validity::ThreeD);
        assert_eq!(b.pressure_altitude.value(), 182);
        assert_eq!(b.gnss_altitude.value(), 202);
        assert!(b.layout().is_empty());
        assert_eq!(b.to_string(), FIX);
    }

    #[test]
    fn fix_record_with_position_decimals() {
        let b: BRecord = EXTENDED_FIX.parse().expect("B record should parse");

        assert_eq!(b.latitude.minute_decimals(), 4);
        assert_close(b.latitude.decimal_minutes(), 39.7915);
        assert_close(b.longitude.decimal_minutes(), 58.0597);
        assert!(b.extensions().is_empty());
        assert_eq!(b.to_string(), EXTENDED_FIX);
    }

    #[test]
    fn accepts_only_known_lengths() {
        for len in 0..=60 {
            let line: String = EXTENDED_FIX.chars().chain("0".repeat(30).chars()).take(len).collect();
            let result = line.parse::<BRecord>();

            if len == 35 || len == 37 {
                assert!(result.is_ok(), "{len} byte should be accepted");
            } else if len == 0 {
                assert_eq!(result.map_err(|e| e.kind()).map(|_| ()), Err(ErrorKind::UnrecognizedRecord));
            } else {
                assert_eq!(
                    result.map_err(|e| e.kind()).map(|_| ()),
                    Err(ErrorKind::Shape),
                    "{len} byte should be rejected"
                );
            }
        }
    }

    #[test]
    fn negative_pressure_altitude() {
        let line = "B0000005439791S03758059WV-001200000";
        let b: BRecord = line.parse().expect("B record should parse");
        assert_eq!(b.pressure_altitude.value(), -12);
        assert_eq!(b.validity, Validity::TwoD);
        assert!(b.latitude.as_decimal() < 0.0);
        assert!(b.longitude.as_decimal() < 0.0);
        assert_eq!(b.to_string(), line);
    }

    #[test]
    fn rejects_invalid_fields() {
        let kind = |s: &str| s.parse::<BRecord>().map_err(|e| e.kind()).map(|_| ());

        assert_eq!(kind("B2535265439791N03758059EA0018200202"), Err(ErrorKind::Range));
        assert_eq!(kind("B1135269439791N03758059EA0018200202"), Err(ErrorKind::Range));
        assert_eq!(kind("B1135265439791X03758059EA0018200202"), Err(ErrorKind::Grammar));
        assert_eq!(kind("B1135265439791N03758059EX0018200202"), Err(ErrorKind::Grammar));
        assert_eq!(kind("B1135265439791N03758059EA+018200202"), Err(ErrorKind::Grammar));
        assert_eq!(kind("B1135265439791N03758059EA00182002x2"), Err(ErrorKind::Grammar));
        assert_eq!(kind("A1135265439791N03758059EA0018200202"), Err(ErrorKind::UnrecognizedRecord));
    }

    #[test]
    fn decodes_with_layout() {
        let layout = ExtensionLayout::new(vec![
            Extension::from_slice("3637LAD").expect("extension should parse"),
            Extension::from_slice("3839LOD").expect("extension should parse"),
            Extension::from_slice("4042ENL").expect("extension should parse"),
        ])
        .expect("layout should be valid");

        let line = "B1135265439791N03758059EA00182002021234050";
        let b = BRecord::decode_with_layout(line, &layout).expect("B record should parse");

        assert_eq!(b.latitude.minute_decimals(), 5);
        assert_close(b.latitude.decimal_minutes(), 39.79112);
        assert_close(b.longitude.decimal_minutes(), 58.05934);
        assert_eq!(b.extension(Subtype::LATITUDE_DECIMALS), None);
        assert_eq!(b.extension("ENL".parse().expect("subtype should parse")), Some("050"));
        assert_eq!(b.extensions().len(), 1);
        assert_eq!(b.layout(), &layout);
        assert_eq!(b.to_string(), line);
    }

    #[test]
    fn implicit_layout_matches_declared_layout() {
        let declared = BRecord::decode_with_layout(EXTENDED_FIX, &ExtensionLayout::position_decimals())
            .expect("B record should parse");
        let implicit: BRecord = EXTENDED_FIX.parse().expect("B record should parse");
        assert_eq!(declared, implicit);
    }

    #[test]
    fn rejects_line_not_matching_layout() {
        let layout = ExtensionLayout::position_decimals();

        assert_eq!(
            BRecord::decode_with_layout(FIX, &layout),
            Err(Error::InvalidRecordLength {
                record: 'B',
                expected: "37".to_string(),
                actual: 35,
            })
        );

        let overlapping = ExtensionLayout::new(vec![
            Extension::from_slice("3436ENL").expect("extension should parse")
        ])
        .expect("layout should be valid");
        assert_eq!(
            BRecord::decode_with_layout(EXTENDED_FIX, &overlapping).map_err(|e| e.kind()),
            Err(ErrorKind::Position)
        );

        let too_precise = ExtensionLayout::new(vec![
            Extension::from_slice("3641LAD").expect("extension should parse")
        ])
        .expect("layout should be valid");
        assert_eq!(
            BRecord::decode_with_layout("B1135265439791N03758059EA0018200202123456", &too_precise)
                .map_err(|e| e.kind()),
            Err(ErrorKind::Shape)
        );
    }

    #[test]
    fn encodes_new_fix() {
        let b = BRecord::new(
            Time::from_hms(9, 5, 0).expect("time should be valid"),
            Latitude::from_dmm(47, 30.5, 'N').expect("latitude should be valid"),
            Longitude::from_dmm(8, 15.25, 'E').expect("longitude should be valid"),
            Validity::ThreeD,
            PressureAltitude::new(1234).expect("altitude should be valid"),
            GnssAltitude::new(1300).expect("altitude should be valid"),
        );

        assert_eq!(b.to_string(), "B0905004730500N00815250EA0123401300");
    }
}
