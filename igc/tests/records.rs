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

use igc::fields::{Latitude, Longitude, Subtype, Validity};
use igc::records::{ARecord, BRecord, IRecord, Record};
use igc::{Error, ErrorKind, ExtensionLayout};

#[test]
fn identification_round_trip() {
    let a: ARecord = "AXCT54Ff734e8955a067".parse().expect("A record should parse");

    assert_eq!(a.manufacturer_code.as_str(), "XCT");
    assert_eq!(a.unique_id.as_str(), "54F");
    assert_eq!(a.id_extension.as_str(), "f734e8955a067");
    assert_eq!(a.to_string(), "AXCT54Ff734e8955a067");
}

#[test]
fn coordinates_from_text() {
    let lat: Latitude = "5439791N".parse().expect("latitude should parse");
    let lon: Longitude = "03758059E".parse().expect("longitude should parse");

    assert!((lat.as_decimal() - 54.663183333).abs() < 1e-6);
    assert!((lon.as_decimal() - 37.967650).abs() < 1e-6);
    assert_eq!(lat.to_string(), "5439791N");
    assert_eq!(lon.to_string(), "03758059E");
}

#[test]
fn fix_round_trip() {
    let line = "B1135265439791N03758059EA0018200202";
    let b: BRecord = line.parse().expect("B record should parse");

    assert_eq!(b.time.to_string(), "113526");
    assert_eq!(b.validity, Validity::ThreeD);
    assert_eq!(b.pressure_altitude.value(), 182);
    assert_eq!(b.gnss_altitude.value(), 202);
    assert_eq!(b.to_string(), line);
}

#[test]
fn fix_on_equator_and_prime_meridian() {
    for line in [
        "B1135260000000S00000000WA0018200202",
        "B1135260000000N00000000EA0018200202",
        "B1135260000000S00000000WA001820020200",
    ] {
        let b: BRecord = line.parse().expect("B record should parse");
        assert_eq!(b.to_string(), line);
    }

    let b: BRecord = "B1135260000000s00000000wA0018200202".parse().expect("B record should parse");
    assert_eq!(b.latitude.hemisphere(), 'S');
    assert_eq!(b.longitude.hemisphere(), 'W');
    assert_eq!(b.to_string(), "B1135260000000S00000000WA0018200202");
}

#[test]
fn fix_extensions_positions() {
    let i: IRecord = "I023636LAD3737LOD".parse().expect("I record should parse");
    let positions: Vec<_> = i
        .extensions
        .iter()
        .map(|ext| (ext.start(), ext.finish(), ext.subtype().as_str().to_string()))
        .collect();

    assert_eq!(
        positions,
        vec![(36, 36, "LAD".to_string()), (37, 37, "LOD".to_string())]
    );
    assert_eq!(
        "I023636LAD3736LOD".parse::<IRecord>().map_err(|e| e.kind()),
        Err(ErrorKind::Position)
    );
}

#[test]
fn unrecognized_record() {
    assert_eq!(
        Record::decode("ZBAD").map_err(|e| e.kind()),
        Err(ErrorKind::UnrecognizedRecord)
    );
}

#[test]
fn decodes_a_file() {
    let lines = [
        "AXCT54Ff734e8955a067",
        "I033636LAD3737LOD3840ENL",
        "B1135265439791N03758059EA001820020257012",
        "B1135275439800N03758070EA001830020309999",
    ];

    let mut layout: Option<ExtensionLayout> = None;
    let mut fixes = Vec::new();

    for line in lines {
        let record = Record::decode_with(line, layout.as_ref()).expect("line should decode");
        assert_eq!(record.to_string(), line);

        match record {
            Record::I(i) => layout = Some(i.extensions),
            Record::B(b) => fixes.push(b),
            Record::A(_) => {}
        }
    }

    let enl: Subtype = "ENL".parse().expect("subtype should parse");
    let values: Vec<_> = fixes.iter().filter_map(|b| b.extension(enl)).collect();
    assert_eq!(values, vec!["012", "999"]);
    assert!((fixes[0].latitude.decimal_minutes() - 39.7915).abs() < 1e-9);
    assert!((fixes[1].longitude.decimal_minutes() - 58.0709).abs() < 1e-9);
}

#[test]
fn decodes_bytes() {
    let record = Record::try_from(b"B1135265439791S03758059WV-001200000".as_slice())
        .expect("B record should parse");
    assert_eq!(record.to_string(), "B1135265439791S03758059WV-001200000");

    assert_eq!(
        Record::try_from([b'B', 0xC3, 0x28].as_slice()),
        Err(Error::NotText { context: "record" })
    );
}

#[test]
fn canonical_encoding_is_stable() {
    let lines = [
        "axct54fabc",
        "i013636lad",
        "b1135265439791n03758059ea0018200202",
        "B1135265439791N03758059EA-000000202",
    ];

    for line in lines {
        let first = Record::decode(line).expect("line should decode");
        let canonical = first.to_string();
        let second = Record::decode(&canonical).expect("canonical line should decode");

        assert_eq!(first, second);
        assert_eq!(second.to_string(), canonical);
    }
}

#[test]
fn coordinate_accessors_agree() {
    let lat = Latitude::from_dms(33, 52, 4.2, 'S').expect("latitude should be valid");
    let (degrees, minutes, seconds, hemisphere) = lat.dms();

    assert_eq!((degrees, minutes, hemisphere), (33, 52, 'S'));
    assert!((seconds - 4.2).abs() < 1e-6);
    assert!(lat.as_decimal() < 0.0);
}
