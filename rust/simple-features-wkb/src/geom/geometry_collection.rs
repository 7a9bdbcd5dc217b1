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
use crate::geom::Geometry;

/// A heterogeneous collection of geometries
///
/// Also the payload of `MultiCurve` and `MultiSurface`. Members are not
/// checked against the collection kind or its dimensions.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeometryCollection {
    has_z: bool,
    has_m: bool,
    geometries: Vec<Geometry>,
}

impl GeometryCollection {
    pub fn new(has_z: bool, has_m: bool) -> Self {
        Self {
            has_z,
            has_m,
            geometries: Vec::new(),
        }
    }

    pub fn from_geometries(has_z: bool, has_m: bool, geometries: Vec<Geometry>) -> Self {
        Self {
            has_z,
            has_m,
            geometries,
        }
    }

    pub fn has_z(&self) -> bool {
        self.has_z
    }

    pub fn has_m(&self) -> bool {
        self.has_m
    }

    pub fn geometries(&self) -> &[Geometry] {
        &self.geometries
    }

    pub fn geometries_mut(&mut self) -> &mut Vec<Geometry> {
        &mut self.geometries
    }

    pub fn set_geometries(&mut self, geometries: Vec<Geometry>) {
        self.geometries = geometries;
    }

    pub fn add_geometry(&mut self, geometry: impl Into<Geometry>) {
        self.geometries.push(geometry.into());
    }

    pub fn num_geometries(&self) -> usize {
        self.geometries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.geometries.is_empty()
    }
}
