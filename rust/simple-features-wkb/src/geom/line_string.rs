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
use crate::geom::Point;

/// An ordered sequence of points
///
/// Also the payload of a `CircularString`, which shares this layout but
/// interpolates arcs between its points.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineString {
    has_z: bool,
    has_m: bool,
    points: Vec<Point>,
}

impl LineString {
    /// Create an empty LineString with the given dimensions
    pub fn new(has_z: bool, has_m: bool) -> Self {
        Self {
            has_z,
            has_m,
            points: Vec::new(),
        }
    }

    /// Create a LineString from points
    pub fn from_points(has_z: bool, has_m: bool, points: Vec<Point>) -> Self {
        Self {
            has_z,
            has_m,
            points,
        }
    }

    /// Create an XY LineString from (x, y) tuples
    pub fn from_xy(coords: impl IntoIterator<Item = (f64, f64)>) -> Self {
        Self::from_points(false, false, coords.into_iter().map(Point::from).collect())
    }

    pub fn has_z(&self) -> bool {
        self.has_z
    }

    pub fn has_m(&self) -> bool {
        self.has_m
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn points_mut(&mut self) -> &mut Vec<Point> {
        &mut self.points
    }

    pub fn set_points(&mut self, points: Vec<Point>) {
        self.points = points;
    }

    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn add_points(&mut self, points: impl IntoIterator<Item = Point>) {
        self.points.extend(points);
    }

    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn start_point(&self) -> Option<&Point> {
        self.points.first()
    }

    pub fn end_point(&self) -> Option<&Point> {
        self.points.last()
    }

    /// True if non-empty and the first and last points share x and y
    pub fn is_closed(&self) -> bool {
        match (self.start_point(), self.end_point()) {
            (Some(start), Some(end)) => start.xy_equals(end),
            _ => false,
        }
    }
}
