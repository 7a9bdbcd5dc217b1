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
use crate::geom::Polygon;

/// A contiguous collection of polygons sharing edges
///
/// Also the payload of a `Tin`, whose polygons are conventionally triangles.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PolyhedralSurface {
    has_z: bool,
    has_m: bool,
    polygons: Vec<Polygon>,
}

impl PolyhedralSurface {
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
