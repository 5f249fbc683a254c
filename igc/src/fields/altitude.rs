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

bounded_field! {
    /// Altitude in metres above the ISA sea level datum of 1013.25 hPa.
    ///
    /// Negative values are written with a leading `-`, e.g. `-0182`.
    PressureAltitude(i32, signed) {
        name: "Pressure Altitude",
        length: 5,
        pattern: "[0-][0-9]{4}",
        range: -9999..=9999,
    }
}

bounded_field! {
    /// Altitude in metres above the WGS84 ellipsoid.
    GnssAltitude(u32, unsigned) {
        name: "GNSS Altitude",
        length: 5,
        pattern: "[0-9]{5}",
        range: 0..=99999,
    }
}
