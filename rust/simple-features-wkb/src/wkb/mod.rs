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
//! ISO Well-Known Binary encoding and decoding
//!
//! Every geometry starts with a one byte order marker and a four byte type
//! code (base code + 1000 for Z + 2000 for M). Points, LineStrings and
//! Polygon rings are stored inline as coordinate lists; every other member is
//! a complete nested geometry with its own marker and type code.
use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::SimpleFeaturesError;

mod reader;
mod writer;

pub use reader::{read_geometry, read_geometry_from_cursor, read_geometry_with_options, WkbReader};
pub use writer::{to_wkb, write_geometry, WkbByteOrder};

/// Byte order of multi-byte values in a WKB buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ByteOrder {
    /// Marker 0 (XDR)
    BigEndian,
    /// Marker 1 (NDR)
    LittleEndian,
}

impl ByteOrder {
    /// Interpret a byte order marker
    ///
    /// Any value other than 0 is treated as little endian.
    pub fn from_marker(marker: u8) -> Self {
        if marker == 0 {
            ByteOrder::BigEndian
        } else {
            ByteOrder::LittleEndian
        }
    }

    /// The marker byte written for this byte order
    pub fn marker(&self) -> u8 {
        match self {
            ByteOrder::BigEndian => 0,
            ByteOrder::LittleEndian => 1,
        }
    }
}

impl Display for ByteOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ByteOrder::BigEndian => f.write_str("big_endian"),
            ByteOrder::LittleEndian => f.write_str("little_endian"),
        }
    }
}

impl FromStr for ByteOrder {
    type Err = SimpleFeaturesError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "big_endian" | "xdr" => Ok(ByteOrder::BigEndian),
            "little_endian" | "ndr" => Ok(ByteOrder::LittleEndian),
            _ => Err(SimpleFeaturesError::Invalid(format!(
                "Invalid byte order: '{value}'"
            ))),
        }
    }
}
