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

mod altitude;
mod coordinate;
mod extension_number;
mod identification;
mod record_type;
mod subtype;
mod time;
mod validity;

pub use altitude::{GnssAltitude, PressureAltitude};
pub use coordinate::{
    Axis, Coordinate, EastWest, Latitude, Longitude, NorthSouth, DEFAULT_PRECISION,
    MAX_EXTRA_DIGITS, MINUTE_DECIMALS,
};
pub use extension_number::{ExtensionCount, FinishByte, StartByte};
pub use identification::{IdExtension, ManufacturerCode, UniqueId};
pub use record_type::RecordType;
pub use subtype::{Subtype, KNOWN_SUBTYPES};
pub use time::Time;
pub use validity::Validity;
