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

/// Topological dimension of a geometry
///
/// 0 for points, 1 for curves, 2 for surfaces. A GeometryCollection has the
/// largest dimension of its members, or 0 when empty. MultiCurve and
/// MultiSurface are classified by kind regardless of their members.
pub fn get_dimension(geometry: &Geometry) -> u8 {
    match geometry {
        Geometry::Point(_) | Geometry::MultiPoint(_) => 0,
        Geometry::LineString(_)
        | Geometry::CircularString(_)
        | Geometry::CompoundCurve(_)
        | Geometry::MultiLineString(_)
        | Geometry::MultiCurve(_) => 1,
        Geometry::Polygon(_)
        | Geometry::Triangle(_)
        | Geometry::CurvePolygon(_)
        | Geometry::MultiPolygon(_)
        | Geometry::MultiSurface(_)
        | Geometry::PolyhedralSurface(_)
        | Geometry::Tin(_) => 2,
        Geometry::GeometryCollection(collection) => collection
            .geometries()
            .iter()
            .map(get_dimension)
            .max()
            .unwrap_or(0),
    }
}
