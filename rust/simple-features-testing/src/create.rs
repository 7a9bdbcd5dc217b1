// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.
use std::str::FromStr;

use simple_features_wkb::{geom::Geometry, wkb::read_geometry, wkb::ByteOrder};
use wkb::{writer::WriteOptions, Endianness};
use wkt::Wkt;

/// Create a little endian ISO WKB from a WKT string
///
/// The WKB is produced by the `wkb` crate, independently of the writer under
/// test. Panics on invalid WKT.
pub fn make_wkb(wkt_value: &str) -> Vec<u8> {
    make_wkb_with_byte_order(wkt_value, ByteOrder::LittleEndian)
}

/// Create an ISO WKB with the given byte order from a WKT string
///
/// Panics on invalid WKT.
pub fn make_wkb_with_byte_order(wkt_value: &str, byte_order: ByteOrder) -> Vec<u8> {
    let geom = Wkt::<f64>::from_str(wkt_value).unwrap();
    let endianness = match byte_order {
        ByteOrder::BigEndian => Endianness::BigEndian,
        ByteOrder::LittleEndian => Endianness::LittleEndian,
    };

    let mut out: Vec<u8> = vec![];
    wkb::writer::write_geometry(&mut out, &geom, &WriteOptions { endianness }).unwrap();
    out
}

/// Create a [Geometry] from a WKT string
///
/// Panics on invalid WKT or if the resulting WKB can't be read.
pub fn make_geometry(wkt_value: &str) -> Geometry {
    read_geometry(&make_wkb(wkt_value)).unwrap()
}
