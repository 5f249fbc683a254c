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

//! IGC flight recorder line codec.
//!
//! This crate decodes and encodes single lines of the IGC file format that
//! flight recorders write. Each line is a [record] identified by its leading
//! letter and made of typed [fields]. Decoding validates every field against
//! its grammar and bounds, and encoding a decoded record yields the canonical
//! text of the line again.
//!
//! Supported are the flight recorder identification (A), fixes (B) and the
//! fix extensions (I) that declare further bytes appended to each fix.
//!
//! # Examples
//!
//! Lets decode a fix and print its position:
//!
//! ```
//! use igc::records::BRecord;
//!
//! # fn main() -> Result<(), igc::Error> {
//! let fix: BRecord = "B1135265439791N03758059EA0018200202".parse()?;
//!
//! let lat = fix.latitude.as_decimal();
//! let lon = fix.longitude.as_decimal();
//! println!("{} at {lat:.4}, {lon:.4}", fix.time); // => "113526 at 54.6632, 37.9677"
//!
//! // the record encodes to the line it was decoded from
//! assert_eq!(fix.to_string(), "B1135265439791N03758059EA0018200202");
//! #     Ok(())
//! # }
//! ```
//!
//! The fixes of a file follow the layout its I record declares:
//!
//! ```
//! use igc::records::Record;
//!
//! # fn main() -> Result<(), igc::Error> {
//! let lines = [
//!     "AXCT54Ff734e8955a067",
//!     "I023636LAD3737LOD",
//!     "B1135265439791N03758059EA001820020257",
//! ];
//!
//! let mut layout = None;
//! for line in lines {
//!     let record = Record::decode_with(line, layout.as_ref())?;
//!     if let Record::I(i) = &record {
//!         layout = Some(i.extensions.clone());
//!     }
//!     assert_eq!(record.to_string(), line);
//! }
//! #     Ok(())
//! # }
//! ```
//!
//! [record]: crate::records
//! [fields]: crate::fields

#[macro_use]
mod macros;

mod error;
mod field;
mod record;

// Re-export the derive macro for convenience
pub(crate) use igc_derive::Record;

pub mod extension;
pub mod fields;
pub mod records;
pub use error::{Error, ErrorKind};
pub use extension::{Extension, ExtensionLayout};
pub use field::{Field, FixedField};
