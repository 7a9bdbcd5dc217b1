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
use std::fmt::Write;

use simple_features_wkb::geom::{Geometry, Point};

/// Assert two [Geometry] values are structurally equal
///
/// Panics with the type, dimensions, and first differing point when the
/// geometries differ. This can be used in place of `assert_eq!()` where the
/// default failure message for a deeply nested geometry would be unreadable.
pub fn assert_geometry_equal(actual: &Geometry, expected: &Geometry) {
    if actual == expected {
        return;
    }

    let actual_type = actual.type_and_dimensions();
    let expected_type = expected.type_and_dimensions();
    if actual_type != expected_type {
        panic!("Geometry types not equal: actual is {actual_type}, expected {expected_type}");
    }

    let actual_points = collect_points(actual);
    let expected_points = collect_points(expected);
    let pairs = actual_points.iter().zip(&expected_points);
    for (i, (actual_point, expected_point)) in pairs.enumerate() {
        if actual_point != expected_point {
            panic!(
                "{actual_type} geometries not equal at point {i}: actual {actual_point:?}, expected {expected_point:?}"
            );
        }
    }

    if actual_points.len() != expected_points.len() {
        panic!(
            "{actual_type} geometries not equal: actual has {} points, expected {}",
            actual_points.len(),
            expected_points.len()
        );
    }

    panic!(
        "{actual_type} geometries have equal points but different structure:\n actual: {actual:?}\n expected: {expected:?}"
    );
}

/// Assert the XY position of a point is within tolerance of another
pub fn assert_point_near(actual: &Point, expected: &Point, tolerance: f64) {
    let dx = (actual.x - expected.x).abs();
    let dy = (actual.y - expected.y).abs();
    if !(dx <= tolerance && dy <= tolerance) {
        panic!(
            "Points not within {tolerance}: actual ({} {}), expected ({} {})",
            actual.x, actual.y, expected.x, expected.y
        );
    }
}

/// Assert two WKB buffers are byte for byte equal
///
/// Panics with the first differing offset and a hex rendering of both buffers.
pub fn assert_wkb_equal(actual: &[u8], expected: &[u8]) {
    if actual == expected {
        return;
    }

    let offset = actual
        .iter()
        .zip(expected)
        .position(|(a, b)| a != b)
        .unwrap_or(actual.len().min(expected.len()));
    panic!(
        "WKB not equal at offset {offset} (actual has {} bytes, expected {} bytes)\n actual: {}\n expected: {}",
        actual.len(),
        expected.len(),
        to_hex(actual),
        to_hex(expected)
    );
}

fn collect_points(geometry: &Geometry) -> Vec<Point> {
    let mut points = vec![];
    geometry.for_each_point(&mut |point| points.push(*point));
    points
}

fn to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        let _ = write!(out, "{byte:02x}");
    }
    out
}
