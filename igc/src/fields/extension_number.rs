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
    /// The number of extensions declared by an I record.
    ExtensionCount(u8, unsigned) {
        name: "Number of Extensions",
        length: 2,
        pattern: "[0-9]{2}",
        range: 0..=99,
    }
}

bounded_field! {
    /// The 1-based byte at which an extension starts within a B record.
    StartByte(u8, unsigned) {
        name: "Start Byte",
        length: 2,
        pattern: "[0-9]{2}",
        range: 0..=99,
    }
}

bounded_field! {
    /// The 1-based byte at which an extension finishes within a B record.
    FinishByte(u8, unsigned) {
        name: "Finish Byte",
        length: 2,
        pattern: "[0-9]{2}",
        range: 0..=99,
    }
}
