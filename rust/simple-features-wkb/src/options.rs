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
use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{error::SimpleFeaturesError, wkb::ByteOrder};

/// Default upper bound on any count (points, rings, members) read from WKB
///
/// Bounds the allocation a malformed or hostile buffer can request.
pub const DEFAULT_MAX_NUM_FIELD_VALUE: i32 = i32::MAX;

/// Default limit on how deeply geometries may nest inside one another in WKB
///
/// Each level is one recursive call of the reader, so this bounds the stack a
/// malformed or hostile buffer can consume. A top-level geometry is at depth 1.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Default byte order used when writing WKB (network order)
pub const DEFAULT_BYTE_ORDER: ByteOrder = ByteOrder::BigEndian;

/// Default tolerance used by the point-on-line and point-in-polygon tests
pub const DEFAULT_EPSILON: f64 = 0.000000000000001;

/// Default longitude bound used to detect and repair antimeridian crossings
pub const DEFAULT_MAX_LONGITUDE: f64 = 180.0;

/// Options for reading WKB
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadOptions {
    /// Largest count accepted for any point, ring, or member list
    pub max_num_field_value: i32,

    /// Deepest nesting of geometries accepted, counting the top level as 1
    pub max_depth: usize,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            max_num_field_value: DEFAULT_MAX_NUM_FIELD_VALUE,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Options for writing WKB
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriteOptions {
    /// Byte order of every geometry written, including nested members
    pub byte_order: ByteOrder,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            byte_order: DEFAULT_BYTE_ORDER,
        }
    }
}

/// Options for the geometric utilities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UtilsOptions {
    /// Tolerance for the point-on-line and point-in-polygon tests
    pub epsilon: f64,

    /// Longitude bound for minimizing and normalizing geometries
    pub max_longitude: f64,
}

impl Default for UtilsOptions {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            max_longitude: DEFAULT_MAX_LONGITUDE,
        }
    }
}

/// All library options addressable by dotted keys
///
/// Keys are `read.max_num_field_value`, `read.max_depth`, `write.byte_order`,
/// `utils.epsilon`, and `utils.max_longitude`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleFeaturesOptions {
    pub read: ReadOptions,
    pub write: WriteOptions,
    pub utils: UtilsOptions,
}

/// A single option with its current value and description
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigEntry {
    pub key: String,
    pub value: String,
    pub description: &'static str,
}

impl SimpleFeaturesOptions {
    /// Set an option from its string representation
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), SimpleFeaturesError> {
        match key {
            "read.max_num_field_value" => {
                let parsed: i32 = parse_value(key, value)?;
                if parsed < 0 {
                    return Err(SimpleFeaturesError::Invalid(format!(
                        "Option {key} must be non-negative but got {parsed}"
                    )));
                }
                self.read.max_num_field_value = parsed;
            }
            "read.max_depth" => {
                let parsed: usize = parse_value(key, value)?;
                if parsed == 0 {
                    return Err(SimpleFeaturesError::Invalid(format!(
                        "Option {key} must be at least 1"
                    )));
                }
                self.read.max_depth = parsed;
            }
            "write.byte_order" => {
                self.write.byte_order = ByteOrder::from_str(value)?;
            }
            "utils.epsilon" => {
                let parsed: f64 = parse_value(key, value)?;
                if !parsed.is_finite() || parsed < 0.0 {
                    return Err(SimpleFeaturesError::Invalid(format!(
                        "Option {key} must be a finite non-negative number but got {parsed}"
                    )));
                }
                self.utils.epsilon = parsed;
            }
            "utils.max_longitude" => {
                let parsed: f64 = parse_value(key, value)?;
                if !parsed.is_finite() || parsed <= 0.0 {
                    return Err(SimpleFeaturesError::Invalid(format!(
                        "Option {key} must be a finite positive number but got {parsed}"
                    )));
                }
                self.utils.max_longitude = parsed;
            }
            _ => {
                return Err(SimpleFeaturesError::Invalid(format!(
                    "Unknown option '{key}'"
                )))
            }
        }

        log::debug!("Set option {key} = {value}");
        Ok(())
    }

    /// List every option with its current value
    pub fn entries(&self) -> Vec<ConfigEntry> {
        vec![
            entry(
                "read.max_num_field_value",
                self.read.max_num_field_value,
                "Largest count accepted for any point, ring, or member list",
            ),
            entry(
                "read.max_depth",
                self.read.max_depth,
                "Deepest nesting of geometries accepted when reading WKB",
            ),
            entry(
                "write.byte_order",
                self.write.byte_order,
                "Byte order used when writing WKB (big_endian or little_endian)",
            ),
            entry(
                "utils.epsilon",
                self.utils.epsilon,
                "Tolerance for the point-on-line and point-in-polygon tests",
            ),
            entry(
                "utils.max_longitude",
                self.utils.max_longitude,
                "Longitude bound for minimizing and normalizing geometries",
            ),
        ]
    }
}

fn entry(key: &str, value: impl Display, description: &'static str) -> ConfigEntry {
    ConfigEntry {
        key: key.to_string(),
        value: value.to_string(),
        description,
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T, SimpleFeaturesError>
where
    T::Err: Display,
{
    value.trim().parse::<T>().map_err(|e| {
        SimpleFeaturesError::Invalid(format!("Invalid value '{value}' for option {key}: {e}"))
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults() {
        let options = SimpleFeaturesOptions::default();
        assert_eq!(options.read.max_num_field_value, i32::MAX);
        assert_eq!(options.read.max_depth, 128);
        assert_eq!(options.write.byte_order, ByteOrder::BigEndian);
        assert_eq!(options.utils.epsilon, 1e-15);
        assert_eq!(options.utils.max_longitude, 180.0);
    }

    #[test]
    fn set_and_list() {
        let mut options = SimpleFeaturesOptions::default();
        options.set("read.max_num_field_value", "1024").unwrap();
        options.set("read.max_depth", "16").unwrap();
        options.set("write.byte_order", "little_endian").unwrap();
        options.set("utils.epsilon", "1e-12").unwrap();
        options.set("utils.max_longitude", " 20037508.342789244 ").unwrap();

        assert_eq!(options.read.max_num_field_value, 1024);
        assert_eq!(options.read.max_depth, 16);
        assert_eq!(options.write.byte_order, ByteOrder::LittleEndian);
        assert_eq!(options.utils.epsilon, 1e-12);
        assert_eq!(options.utils.max_longitude, 20037508.342789244);

        let entries = options.entries();
        let keys: Vec<_> = entries.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "read.max_num_field_value",
                "read.max_depth",
                "write.byte_order",
                "utils.epsilon",
                "utils.max_longitude"
            ]
        );
        assert_eq!(entries[0].value, "1024");
        assert_eq!(entries[1].value, "16");
        assert_eq!(entries[2].value, "little_endian");
    }

    #[test]
    fn set_errors() {
        let mut options = SimpleFeaturesOptions::default();

        let err = options.set("read.nope", "1").unwrap_err();
        assert_eq!(err.to_string(), "Unknown option 'read.nope'");

        let err = options.set("read.max_num_field_value", "-1").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Option read.max_num_field_value must be non-negative but got -1"
        );

        let err = options.set("read.max_depth", "0").unwrap_err();
        assert_eq!(err.to_string(), "Option read.max_depth must be at least 1");
        assert!(options.set("read.max_depth", "-3").is_err());

        let err = options.set("utils.epsilon", "abc").unwrap_err();
        assert!(err
            .to_string()
            .starts_with("Invalid value 'abc' for option utils.epsilon"));

        assert!(options.set("utils.max_longitude", "0").is_err());
        assert!(options.set("utils.epsilon", "NaN").is_err());
        assert!(options.set("write.byte_order", "sideways").is_err());

        assert_eq!(options, SimpleFeaturesOptions::default());
    }

    #[test]
    fn serde_roundtrip() {
        let mut options = SimpleFeaturesOptions::default();
        options.write.byte_order = ByteOrder::LittleEndian;
        options.read.max_num_field_value = 10;

        let json = serde_json::to_string(&options).unwrap();
        let deserialized: SimpleFeaturesOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, options);

        let partial: SimpleFeaturesOptions =
            serde_json::from_str(r#"{"write": {"byte_order": "little_endian"}}"#).unwrap();
        assert_eq!(partial.write.byte_order, ByteOrder::LittleEndian);
        assert_eq!(partial.read, ReadOptions::default());
    }
}
