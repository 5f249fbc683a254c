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

/// Validate that all bytes are ASCII digits and return Result
macro_rules! parse_numeric {
    ($t:ty, $field:expr, $expected:expr, $s:expr) => {{
        let s: &str = $s;
        if !s.is_empty() && s.bytes().all(|byte| byte.is_ascii_digit()) {
            Ok(s
                .bytes()
                .fold(0 as $t, |acc, byte| acc * 10 + (byte & 0x0F) as $t))
        } else {
            Err($crate::Error::InvalidFormat {
                field: $field,
                expected: $expected,
                value: s.to_owned(),
            })
        }
    }};
}

/// Generates an integer field with a fixed width, zero-padded text form and a
/// closed value range.
macro_rules! bounded_field {
    (@parse signed, $t:ty, $label:expr, $pattern:expr, $s:expr) => {
        $crate::field::parse_signed($s, $label, $pattern)
    };

    (@parse unsigned, $t:ty, $label:expr, $pattern:expr, $s:expr) => {
        parse_numeric!($t, $label, $pattern, $s)
    };

    (
        $(#[$meta:meta])*
        $name:ident($t:ty, $sign:ident) {
            name: $label:literal,
            length: $len:literal,
            pattern: $pattern:literal,
            range: $min:literal..=$max:literal $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name($t);

        impl $name {
            /// The smallest value of this field.
            pub const MIN: $t = $min;
            /// The largest value of this field.
            pub const MAX: $t = $max;

            /// Creates the field from its value.
            ///
            /// # Errors
            ///
            /// Returns an error if the value is out of range.
            pub fn new(value: $t) -> Result<Self, $crate::Error> {
                if (Self::MIN..=Self::MAX).contains(&value) {
                    Ok(Self(value))
                } else {
                    Err($crate::Error::OutOfRange {
                        field: $label,
                        value: value as f64,
                        min: Self::MIN as f64,
                        max: Self::MAX as f64,
                    })
                }
            }

            #[inline]
            pub fn value(&self) -> $t {
                self.0
            }
        }

        impl $crate::Field for $name {
            const NAME: &'static str = $label;
        }

        impl $crate::FixedField for $name {
            const LENGTH: usize = $len;
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = $crate::field::fixed_length::<Self>(s)?;
                let value = bounded_field!(@parse $sign, $t, $label, $pattern, s)?;
                Self::new(value)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{:0width$}", self.0, width = $len)
            }
        }
    };
}

/// Generates an upper-cased alpha/numeric field of fixed length.
macro_rules! alphanumeric_field {
    ($(#[$meta:meta])* $name:ident, $label:literal, $len:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name([u8; $len]);

        impl $name {
            /// Returns the field as an upper-case string.
            #[inline]
            pub fn as_str(&self) -> &str {
                // only ASCII is ever stored
                std::str::from_utf8(&self.0).unwrap_or("")
            }
        }

        impl $crate::Field for $name {
            const NAME: &'static str = $label;
        }

        impl $crate::FixedField for $name {
            const LENGTH: usize = $len;
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = $crate::field::fixed_length::<Self>(s)?;

                if !s.bytes().all(|byte| byte.is_ascii_alphanumeric()) {
                    return Err($crate::Error::InvalidFormat {
                        field: $label,
                        expected: concat!($len, " alphanumeric characters"),
                        value: s.to_owned(),
                    });
                }

                let mut bytes = [0; $len];
                bytes.copy_from_slice(s.as_bytes());
                bytes.make_ascii_uppercase();
                Ok(Self(bytes))
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "\"{}\"", self.as_str())
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

/// Implements the std conversions of a record on top of its `Record` trait.
macro_rules! record_impls {
    ($name:ident) => {
        impl ::std::str::FromStr for $name {
            type Err = $crate::Error;

            fn from_str(line: &str) -> Result<Self, Self::Err> {
                <Self as $crate::record::Record>::decode(line)
            }
        }

        impl ::core::convert::TryFrom<&str> for $name {
            type Error = $crate::Error;

            fn try_from(line: &str) -> Result<Self, Self::Error> {
                <Self as $crate::record::Record>::decode(line)
            }
        }

        impl ::core::convert::TryFrom<&[u8]> for $name {
            type Error = $crate::Error;

            fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
                let line = $crate::record::as_text(bytes)?;
                <Self as $crate::record::Record>::decode(line)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                $crate::record::Record::encode(self, f)
            }
        }
    };
}
