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
use crate::geom::{LineString, Point, Polygon};

/// A collection of points
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiPoint {
    has_z: bool,
    has_m: bool,
    points: Vec<Point>,
}

impl MultiPoint {
    pub fn new(has_z: bool, has_m: bool) -> Self {
        Self {
            has_z,
            has_m,
            points: Vec::new(),
        }
    }

    pub fn from_points(has_z: bool, has_m: bool, points: Vec<Point>) -> Self {
        Self {
            has_z,
            has_m,
            points,
        }
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

    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// A collection of LineStrings
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiLineString {
    has_z: bool,
    has_m: bool,
    line_strings: Vec<LineString>,
}

impl MultiLineString {
    pub fn new(has_z: bool, has_m: bool) -> Self {
        Self {
            has_z,
            has_m,
            line_strings: Vec::new(),
        }
    }

    pub fn from_line_strings(has_z: bool, has_m: bool, line_strings: Vec<LineString>) -> Self {
        Self {
            has_z,
            has_m,
            line_strings,
        }
    }

    pub fn has_z(&self) -> bool {
        self.has_z
    }

    pub fn has_m(&self) -> bool {
        self.has_m
    }

    pub fn line_strings(&self) -> &[LineString] {
        &self.line_strings
    }

    pub fn line_strings_mut(&mut self) -> &mut Vec<LineString> {
        &mut self.line_strings
    }

    pub fn set_line_strings(&mut self, line_strings: Vec<LineString>) {
        self.line_strings = line_strings;
    }

    pub fn add_line_string(&mut self, line_string: LineString) {
        self.line_strings.push(line_string);
    }

    pub fn num_line_strings(&self) -> usize {
        self.line_strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.line_strings.is_empty()
    }
}

/// A collection of Polygons
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiPolygon {
    has_z: bool,
    has_m: bool,
    polygons: Vec<Polygon>,
}

impl MultiPolygon {
    pub fn new(has_z: bool, has_m: bool) -> Self {
        Self {
            has_z,
            has_m,
            polygons: Vec::new(),
        }
    }

    pub fn from_polygons(has_z: bool, has_m: bool, polygons: Vec<Polygon>) -> Self {
        Self {
            has_z,
            has_m,
            polygons,
        }
    }

    pub fn has_z(&self) -> bool {
        self.has_z
    }

    pub fn has_m(&self) -> bool {
        self.has_m
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn polygons_mut(&mut self) -> &mut Vec<Polygon> {
        &mut self.polygons
    }

    pub fn set_polygons(&mut self, polygons: Vec<Polygon>) {
        self.polygons = polygons;
    }

    pub fn add_polygon(&mut self, polygon: Polygon) {
        self.polygons.push(polygon);
    }

    pub fn num_polygons(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }
}
