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

use crate::fields::*;
use crate::Record;

/// Flight recorder manufacturer and identification, the first line of a file.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Record)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[igc(record_type = FlightRecorderId)]
pub struct ARecord {
    pub manufacturer_code: ManufacturerCode,
    pub unique_id: UniqueId,
    #[igc(rest)]
    pub id_extension: IdExtension,
}
