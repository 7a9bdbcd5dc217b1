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
    geom::Point,
    options::{UtilsOptions, DEFAULT_EPSILON},
};

/// Planar distance between the XY positions of two points
pub fn distance(a: &Point, b: &Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}

/// Distance from a point to the segment between `line_start` and `line_end`
///
/// The projection onto the line is clamped to the segment, so points beyond
/// either end measure to the nearest endpoint.
pub fn perpendicular_distance(point: &Point, line_start: &Point, line_end: &Point) -> f64 {
    let dx = line_end.x - line_start.x;
    let dy = line_end.y - line_start.y;
    let length_squared = dx * dx + dy * dy;
    if length_squared == 0.0 {
        return distance(point, line_start);
    }

    let t = ((point.x - line_start.x) * dx + (point.y - line_start.y) * dy) / length_squared;
    let t = t.clamp(0.0, 1.0);
    let projection = Point::new(line_start.x + t * dx, line_start.y + t * dy);
    distance(point, &projection)
}

/// True if the ring is non-empty and its first and last points have equal XY
pub fn closed_polygon(points: &[Point]) -> bool {
    match (points.first(), points.last()) {
        (Some(first), Some(last)) => first.xy_equals(last),
        _ => false,
    }
}

/// True if point lies on the segment from `a` to `b` within epsilon
///
/// With `d = point - a` and `s = b - a`, the point must project onto the
/// segment (`d·s >= -ε` and `|d|² <= |s|² + ε`) and be collinear with it
/// (`|(d·s)² - |d|²·|s|²| <= ε`). All quantities are in squared coordinate
/// units, so epsilon is not a distance.
pub fn point_on_path(point: &Point, a: &Point, b: &Point, epsilon: f64) -> bool {
    let sx = b.x - a.x;
    let sy = b.y - a.y;
    let dx = point.x - a.x;
    let dy = point.y - a.y;

    let dot = dx * sx + dy * sy;
    if dot < -epsilon {
        return false;
    }

    let d_length_squared = dx * dx + dy * dy;
    let s_length_squared = sx * sx + sy * sy;
    if d_length_squared > s_length_squared + epsilon {
        return false;
    }

    (dot * dot - d_length_squared * s_length_squared).abs() <= epsilon
}

/// True if point lies on any segment between consecutive points
///
/// The ring is treated as an open path: no closing segment is added.
pub fn point_on_line(point: &Point, points: &[Point]) -> bool {
    point_on_line_with_epsilon(point, points, DEFAULT_EPSILON)
}

/// [point_on_line] with the tolerance from [UtilsOptions::epsilon]
pub fn point_on_line_with_options(point: &Point, points: &[Point], options: &UtilsOptions) -> bool {
    point_on_line_with_epsilon(point, points, options.epsilon)
}

pub fn point_on_line_with_epsilon(point: &Point, points: &[Point], epsilon: f64) -> bool {
    points
        .windows(2)
        .any(|segment| point_on_path(point, &segment[0], &segment[1], epsilon))
}

/// True if point lies on any edge of the ring, including the closing edge of
/// a ring that does not repeat its first point
pub fn point_on_polygon_edge(point: &Point, points: &[Point]) -> bool {
    point_on_polygon_edge_with_epsilon(point, points, DEFAULT_EPSILON)
}

pub fn point_on_polygon_edge_with_options(
    point: &Point,
    points: &[Point],
    options: &UtilsOptions,
) -> bool {
    point_on_polygon_edge_with_epsilon(point, points, options.epsilon)
}

pub fn point_on_polygon_edge_with_epsilon(point: &Point, points: &[Point], epsilon: f64) -> bool {
    if point_on_line_with_epsilon(point, points, epsilon) {
        return true;
    }

    match (points.first(), points.last()) {
        (Some(first), Some(last)) if !closed_polygon(points) => {
            point_on_path(point, last, first, epsilon)
        }
        _ => false,
    }
}

/// True if point is inside the ring or on its boundary
///
/// Uses ray casting. The ring may or may not repeat its first point; both
/// forms give the same answer.
pub fn point_in_polygon(point: &Point, points: &[Point]) -> bool {
    point_in_polygon_with_epsilon(point, points, DEFAULT_EPSILON)
}

/// [point_in_polygon] with the tolerance from [UtilsOptions::epsilon]
pub fn point_in_polygon_with_options(
    point: &Point,
    points: &[Point],
    options: &UtilsOptions,
) -> bool {
    point_in_polygon_with_epsilon(point, points, options.epsilon)
}

pub fn point_in_polygon_with_epsilon(point: &Point, points: &[Point], epsilon: f64) -> bool {
    let num_points = points.len();
    if num_points == 0 {
        return false;
    }

    // Skip the duplicated closing point so each edge is visited once
    let (mut i, mut j) = if closed_polygon(points) {
        (1, 0)
    } else {
        (0, num_points - 1)
    };

    let mut inside = false;
    while i < num_points {
        let a = &points[i];
        let b = &points[j];

        if (a.x - point.x).abs() <= epsilon && (a.y - point.y).abs() <= epsilon {
            return true;
        }

        if (a.y > point.y) != (b.y > point.y)
            && point.x < (b.x - a.x) * (point.y - a.y) / (b.y - a.y) + a.x
        {
            inside = !inside;
        }

        j = i;
        i += 1;
    }

    inside || point_on_polygon_edge_with_epsilon(point, points, epsilon)
}
