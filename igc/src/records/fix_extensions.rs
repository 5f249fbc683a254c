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

use crate::extension::{Extension, ExtensionLayout};
use crate::fields::{ExtensionCount, RecordType};
use crate::record::{Fields, Record};
use crate::{Error, FixedField};

/// The extensions that are appended to each following B record.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IRecord {
    pub extensions: ExtensionLayout,
}

impl IRecord {
    /// The number of declared extensions.
    #[inline]
    pub fn count(&self) -> usize {
        self.extensions.len()
    }
}

impl From<ExtensionLayout> for IRecord {
    fn from(extensions: ExtensionLayout) -> Self {
        Self { extensions }
    }
}

impl Record for IRecord {
    const LITERAL: RecordType = RecordType::FixExtensions;
    const MIN_LENGTH: usize = 1 + ExtensionCount::LENGTH;
    const MAX_LENGTH: Option<usize> =
        Some(Self::MIN_LENGTH + Extension::LENGTH * ExtensionCount::MAX as usize);

    fn parse(fields: &mut Fields<'_>) -> Result<Self, Error> {
        let count = fields.next::<ExtensionCount>()?.value() as usize;

        let expected = count * Extension::LENGTH;
        if fields.remaining() != expected {
            return Err(Error::InvalidRecordLength {
                record: Self::LITERAL.as_char(),
                expected: (fields.position() + expected).to_string(),
                actual: fields.position() + fields.remaining(),
            });
        }

        let extensions = (0..count)
            .map(|_| fields.next::<Extension>())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            extensions: ExtensionLayout::new(extensions)?,
        })
    }

    fn encode(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:02}", Self::LITERAL, self.extensions.len())?;
        for ext in &self.extensions {
            write!(f, "{ext}")?;
        }
        Ok(())
    }
}

record_impls!(IRecord);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Subtype;
    use crate::ErrorKind;

    #[test]
    fn fix_extensions_record() {
        let i: IRecord = "I023636LAD3737LOD".parse().expect("I record should parse");

        assert_eq!(i.count(), 2);
        assert_eq!(i.extensions, ExtensionLayout::position_decimals());

        let lad = i
            .extensions
            .get(Subtype::LATITUDE_DECIMALS)
            .expect("LAD should be declared");
        assert_eq!((lad.start(), lad.finish(), lad.width()), (36, 36, 1));
        assert_eq!(i.to_string(), "I023636LAD3737LOD");
    }

    #[test]
    fn empty_fix_extensions() {
        let i: IRecord = "I00".parse().expect("I record should parse");
        assert!(i.extensions.is_empty());
        assert_eq!(i.to_string(), "I00");
        assert_eq!(IRecord::default().to_string(), "I00");
    }

    #[test]
    fn normalizes_subtype_case() {
        let i = IRecord::try_from(b"I013638fxa".as_slice()).expect("I record should parse");
        assert_eq!(i.to_string(), "I013638FXA");
    }

    #[test]
    fn rejects_finish_before_start() {
        assert_eq!(
            "I023636LAD3736LOD".parse::<IRecord>(),
            Err(Error::InvalidPosition {
                start: 37,
                finish: 36
            })
        );
    }

    #[test]
    fn rejects_count_mismatch() {
        assert_eq!(
            "I033636LAD3737LOD".parse::<IRecord>(),
            Err(Error::InvalidRecordLength {
                record: 'I',
                expected: "24".to_string(),
                actual: 17,
            })
        );
        assert_eq!(
            "I013636LAD3737LOD".parse::<IRecord>().map_err(|e| e.kind()),
            Err(ErrorKind::Shape)
        );
        assert_eq!("I0".parse::<IRecord>().map_err(|e| e.kind()), Err(ErrorKind::Shape));
    }

    #[test]
    fn rejects_invalid_extensions() {
        let kind = |s: &str| s.parse::<IRecord>().map_err(|e| e.kind()).map(|_| ());

        assert_eq!(kind("Ix13636LAD"), Err(ErrorKind::Grammar));
        assert_eq!(kind("I0136x6LAD"), Err(ErrorKind::Grammar));
        assert_eq!(kind("I013636QQQ"), Err(ErrorKind::Grammar));
        assert_eq!(kind("I013636L-D"), Err(ErrorKind::Grammar));
        assert_eq!(kind("B013636LAD"), Err(ErrorKind::UnrecognizedRecord));
    }
}
