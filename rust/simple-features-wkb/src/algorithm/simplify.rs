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
    algorithm::contains::perpendicular_distance,
    geom::{Geometry, Point},
};

/// Simplify a point sequence with the Douglas-Peucker algorithm
///
/// The first and last points are always kept and every kept point is copied
/// unchanged from the input in its original order. A point is kept when its
/// distance to the segment between the enclosing kept points exceeds
/// `tolerance`.
pub fn simplify_points(points: &[Point], tolerance: f64) -> Vec<Point> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let mut keep = vec![false; points.len()];
    keep[0] = true;
    keep[points.len() - 1] = true;

    let mut ranges = vec![(0, points.len() - 1)];
    while let Some((start, end)) = ranges.pop() {
        if end <= start + 1 {
            continue;
        }

        let mut max_distance = 0.0;
        let mut index = start;
        for (i, point) in points.iter().enumerate().take(end).skip(start + 1) {
            let distance = perpendicular_distance(point, &points[start], &points[end]);
            if distance > max_distance {
                max_distance = distance;
                index = i;
            }
        }

        if max_distance > tolerance {
            keep[index] = true;
            ranges.push((start, index));
            ranges.push((index, end));
        }
    }

    let simplified: Vec<Point> = points
        .iter()
        .zip(keep)
        .filter_map(|(point, keep)| keep.then_some(*point))
        .collect();
    log::trace!(
        "Simplified {} points to {} with tolerance {tolerance}",
        points.len(),
        simplified.len()
    );
    simplified
}

/// Simplify every line, curve member, and ring of a geometry in place
///
/// Points and MultiPoints are unchanged.
pub fn simplify_geometry(geometry: &mut Geometry, tolerance: f64) {
    geometry.for_each_line_string_mut(&mut |line| {
        let simplified = simplify_points(line.points(), tolerance);
        line.set_points(simplified);
    });
}
