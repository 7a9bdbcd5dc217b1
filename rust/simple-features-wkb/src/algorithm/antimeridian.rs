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
use crate::{
    geom::{Geometry, Point},
    options::UtilsOptions,
};

/// Unwrap lines and rings that cross the antimeridian
///
/// Walking each point sequence in order, a point whose x jumps by more than
/// `max_x` from the previous (already adjusted) point is shifted by `2 * max_x`
/// towards it. The result is continuous in x but may leave the range
/// `[-max_x, max_x]`. Points and MultiPoints are unchanged.
pub fn minimize_geometry(geometry: &mut Geometry, max_x: f64) {
    geometry.for_each_line_string_mut(&mut |line| minimize_points(line.points_mut(), max_x));
}

/// [minimize_geometry] with the bound from [UtilsOptions::max_longitude]
pub fn minimize_geometry_with_options(geometry: &mut Geometry, options: &UtilsOptions) {
    minimize_geometry(geometry, options.max_longitude);
}

fn minimize_points(points: &mut [Point], max_x: f64) {
    for i in 1..points.len() {
        let previous_x = points[i - 1].x;
        let point = &mut points[i];
        if point.x - previous_x > max_x {
            log::debug!("Shifting x {} by {} at index {i}", point.x, -2.0 * max_x);
            point.x -= 2.0 * max_x;
        } else if previous_x - point.x > max_x {
            log::debug!("Shifting x {} by {} at index {i}", point.x, 2.0 * max_x);
            point.x += 2.0 * max_x;
        }
    }
}

/// Wrap every x back into `[-max_x, max_x]`
///
/// Reverses [minimize_geometry] for coordinates that were originally in range.
pub fn normalize_geometry(geometry: &mut Geometry, max_x: f64) {
    geometry.for_each_point_mut(&mut |point| {
        if point.x < -max_x {
            point.x += 2.0 * max_x;
        } else if point.x > max_x {
            point.x -= 2.0 * max_x;
        }
    });
}

/// [normalize_geometry] with the bound from [UtilsOptions::max_longitude]
pub fn normalize_geometry_with_options(geometry: &mut Geometry, options: &UtilsOptions) {
    normalize_geometry(geometry, options.max_longitude);
}
