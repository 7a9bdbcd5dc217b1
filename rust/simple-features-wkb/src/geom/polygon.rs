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
use crate::geom::LineString;

/// A surface bounded by an exterior ring and zero or more holes
///
/// Ring 0 is the exterior ring; every following ring is an interior ring.
/// Ring closure is not validated here. Also the payload of a `Triangle`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    has_z: bool,
    has_m: bool,
    rings: Vec<LineString>,
}

impl Polygon {
    pub fn new(has_z: bool, has_m: bool) -> Self {
        Self {
            has_z,
            has_m,
            rings: Vec::new(),
        }
    }

    pub fn from_rings(has_z: bool, has_m: bool, rings: Vec<LineString>) -> Self {
        Self { has_z, has_m, rings }
    }

    pub fn has_z(&self) -> bool {
        self.has_z
    }

    pub fn has_m(&self) -> bool {
        self.has_m
    }

    pub fn rings(&self) -> &[LineString] {
        &self.rings
    }

    pub fn rings_mut(&mut self) -> &mut Vec<LineString> {
        &mut self.rings
    }

    pub fn set_rings(&mut self, rings: Vec<LineString>) {
        self.rings = rings;
    }

    pub fn add_ring(&mut self, ring: LineString) {
        self.rings.push(ring);
    }

    pub fn num_rings(&self) -> usize {
        self.rings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    pub fn exterior_ring(&self) -> Option<&LineString> {
        self.rings.first()
    }

    pub fn interior_rings(&self) -> &[LineString] {
        self.rings.get(1..).unwrap_or_default()
    }

    pub fn num_points(&self) -> usize {
        self.rings.iter().map(LineString::num_points).sum()
    }
}
