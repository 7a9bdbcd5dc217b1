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
//! The OGC Simple Features geometry model
//!
//! [Geometry] is a closed enum with one variant per concrete geometry kind.
//! Kinds that share a layout share a payload struct (e.g., `Triangle` holds a
//! [Polygon]), so the kind is always carried by the variant rather than the
//! payload. Every node owns its children: [Clone] is a deep copy and
//! [PartialEq] is structural equality.
use geo_traits::Dimensions;

use crate::{
    error::SimpleFeaturesError,
    types::{dimensions_from_flags, GeometryTypeAndDimensions, GeometryTypeId},
};

mod compound_curve;
mod curve;
mod curve_polygon;
mod geometry_collection;
mod line_string;
mod multi;
mod point;
mod polygon;
mod polyhedral_surface;

pub use compound_curve::CompoundCurve;
pub use curve::Curve;
pub use curve_polygon::CurvePolygon;
pub use geometry_collection::GeometryCollection;
pub use line_string::LineString;
pub use multi::{MultiLineString, MultiPoint, MultiPolygon};
pub use point::Point;
pub use polygon::Polygon;
pub use polyhedral_surface::PolyhedralSurface;

/// Any concrete geometry
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    CircularString(LineString),
    CompoundCurve(CompoundCurve),
    Polygon(Polygon),
    Triangle(Polygon),
    CurvePolygon(CurvePolygon),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
    MultiCurve(GeometryCollection),
    MultiSurface(GeometryCollection),
    PolyhedralSurface(PolyhedralSurface),
    Tin(PolyhedralSurface),
}

impl Geometry {
    /// The concrete [GeometryTypeId] of this geometry (never abstract)
    pub fn geometry_type(&self) -> GeometryTypeId {
        match self {
            Geometry::Point(_) => GeometryTypeId::Point,
            Geometry::LineString(_) => GeometryTypeId::LineString,
            Geometry::CircularString(_) => GeometryTypeId::CircularString,
            Geometry::CompoundCurve(_) => GeometryTypeId::CompoundCurve,
            Geometry::Polygon(_) => GeometryTypeId::Polygon,
            Geometry::Triangle(_) => GeometryTypeId::Triangle,
            Geometry::CurvePolygon(_) => GeometryTypeId::CurvePolygon,
            Geometry::MultiPoint(_) => GeometryTypeId::MultiPoint,
            Geometry::MultiLineString(_) => GeometryTypeId::MultiLineString,
            Geometry::MultiPolygon(_) => GeometryTypeId::MultiPolygon,
            Geometry::GeometryCollection(_) => GeometryTypeId::GeometryCollection,
            Geometry::MultiCurve(_) => GeometryTypeId::MultiCurve,
            Geometry::MultiSurface(_) => GeometryTypeId::MultiSurface,
            Geometry::PolyhedralSurface(_) => GeometryTypeId::PolyhedralSurface,
            Geometry::Tin(_) => GeometryTypeId::Tin,
        }
    }

    pub fn has_z(&self) -> bool {
        match self {
            Geometry::Point(point) => point.has_z(),
            Geometry::LineString(line) | Geometry::CircularString(line) => line.has_z(),
            Geometry::CompoundCurve(curve) => curve.has_z(),
            Geometry::Polygon(polygon) | Geometry::Triangle(polygon) => polygon.has_z(),
            Geometry::CurvePolygon(polygon) => polygon.has_z(),
            Geometry::MultiPoint(multi) => multi.has_z(),
            Geometry::MultiLineString(multi) => multi.has_z(),
            Geometry::MultiPolygon(multi) => multi.has_z(),
            Geometry::GeometryCollection(collection)
            | Geometry::MultiCurve(collection)
            | Geometry::MultiSurface(collection) => collection.has_z(),
            Geometry::PolyhedralSurface(surface) | Geometry::Tin(surface) => surface.has_z(),
        }
    }

    pub fn has_m(&self) -> bool {
        match self {
            Geometry::Point(point) => point.has_m(),
            Geometry::LineString(line) | Geometry::CircularString(line) => line.has_m(),
            Geometry::CompoundCurve(curve) => curve.has_m(),
            Geometry::Polygon(polygon) | Geometry::Triangle(polygon) => polygon.has_m(),
            Geometry::CurvePolygon(polygon) => polygon.has_m(),
            Geometry::MultiPoint(multi) => multi.has_m(),
            Geometry::MultiLineString(multi) => multi.has_m(),
            Geometry::MultiPolygon(multi) => multi.has_m(),
            Geometry::GeometryCollection(collection)
            | Geometry::MultiCurve(collection)
            | Geometry::MultiSurface(collection) => collection.has_m(),
            Geometry::PolyhedralSurface(surface) | Geometry::Tin(surface) => surface.has_m(),
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        dimensions_from_flags(self.has_z(), self.has_m())
    }

    pub fn type_and_dimensions(&self) -> GeometryTypeAndDimensions {
        GeometryTypeAndDimensions::new(self.geometry_type(), self.dimensions())
    }

    /// The ISO WKB type code (base code + 1000 for Z + 2000 for M)
    pub fn wkb_code(&self) -> u32 {
        self.type_and_dimensions().wkb_id()
    }

    /// True for LineString, CircularString, and CompoundCurve
    pub fn is_curve(&self) -> bool {
        GeometryTypeId::Curve.accepts(self.geometry_type())
    }

    /// True for Polygon, CurvePolygon, Triangle, PolyhedralSurface, and Tin
    pub fn is_surface(&self) -> bool {
        GeometryTypeId::Surface.accepts(self.geometry_type())
    }

    /// True if this geometry has no direct children
    ///
    /// A Point is never empty. A collection holding only empty members is not
    /// empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Geometry::Point(_) => false,
            Geometry::LineString(line) | Geometry::CircularString(line) => line.is_empty(),
            Geometry::CompoundCurve(curve) => curve.is_empty(),
            Geometry::Polygon(polygon) | Geometry::Triangle(polygon) => polygon.is_empty(),
            Geometry::CurvePolygon(polygon) => polygon.is_empty(),
            Geometry::MultiPoint(multi) => multi.is_empty(),
            Geometry::MultiLineString(multi) => multi.is_empty(),
            Geometry::MultiPolygon(multi) => multi.is_empty(),
            Geometry::GeometryCollection(collection)
            | Geometry::MultiCurve(collection)
            | Geometry::MultiSurface(collection) => collection.is_empty(),
            Geometry::PolyhedralSurface(surface) | Geometry::Tin(surface) => surface.is_empty(),
        }
    }

    /// Total number of points at any depth
    pub fn num_points(&self) -> usize {
        let mut count = 0;
        self.for_each_point(&mut |_| count += 1);
        count
    }

    /// Visit every point at any depth in storage order
    pub fn for_each_point(&self, visit: &mut impl FnMut(&Point)) {
        match self {
            Geometry::Point(point) => visit(point),
            Geometry::MultiPoint(multi) => multi.points().iter().for_each(visit),
            other => {
                other.for_each_line_string(&mut |line| line.points().iter().for_each(&mut *visit))
            }
        }
    }

    /// Visit every point at any depth in storage order, allowing modification
    pub fn for_each_point_mut(&mut self, visit: &mut impl FnMut(&mut Point)) {
        match self {
            Geometry::Point(point) => visit(point),
            Geometry::MultiPoint(multi) => multi.points_mut().iter_mut().for_each(visit),
            other => other.for_each_line_string_mut(&mut |line| {
                line.points_mut().iter_mut().for_each(&mut *visit)
            }),
        }
    }

    /// Visit every point sequence (lines, curve members, and rings) at any depth
    ///
    /// Points and MultiPoints have no point sequences and are skipped.
    pub fn for_each_line_string(&self, visit: &mut impl FnMut(&LineString)) {
        match self {
            Geometry::Point(_) | Geometry::MultiPoint(_) => {}
            Geometry::LineString(line) | Geometry::CircularString(line) => visit(line),
            Geometry::CompoundCurve(curve) => curve.line_strings().iter().for_each(visit),
            Geometry::Polygon(polygon) | Geometry::Triangle(polygon) => {
                polygon.rings().iter().for_each(visit)
            }
            Geometry::CurvePolygon(polygon) => polygon
                .rings()
                .iter()
                .flat_map(Curve::line_strings)
                .for_each(visit),
            Geometry::MultiLineString(multi) => multi.line_strings().iter().for_each(visit),
            Geometry::MultiPolygon(multi) => multi
                .polygons()
                .iter()
                .flat_map(Polygon::rings)
                .for_each(visit),
            Geometry::PolyhedralSurface(surface) | Geometry::Tin(surface) => surface
                .polygons()
                .iter()
                .flat_map(Polygon::rings)
                .for_each(visit),
            Geometry::GeometryCollection(collection)
            | Geometry::MultiCurve(collection)
            | Geometry::MultiSurface(collection) => {
                for geometry in collection.geometries() {
                    geometry.for_each_line_string(visit);
                }
            }
        }
    }

    /// Mutable counterpart of [Geometry::for_each_line_string]
    pub fn for_each_line_string_mut(&mut self, visit: &mut impl FnMut(&mut LineString)) {
        match self {
            Geometry::Point(_) | Geometry::MultiPoint(_) => {}
            Geometry::LineString(line) | Geometry::CircularString(line) => visit(line),
            Geometry::CompoundCurve(curve) => curve.line_strings_mut().iter_mut().for_each(visit),
            Geometry::Polygon(polygon) | Geometry::Triangle(polygon) => {
                polygon.rings_mut().iter_mut().for_each(visit)
            }
            Geometry::CurvePolygon(polygon) => polygon
                .rings_mut()
                .iter_mut()
                .flat_map(Curve::line_strings_mut)
                .for_each(visit),
            Geometry::MultiLineString(multi) => {
                multi.line_strings_mut().iter_mut().for_each(visit)
            }
            Geometry::MultiPolygon(multi) => multi
                .polygons_mut()
                .iter_mut()
                .flat_map(|polygon| polygon.rings_mut().iter_mut())
                .for_each(visit),
            Geometry::PolyhedralSurface(surface) | Geometry::Tin(surface) => surface
                .polygons_mut()
                .iter_mut()
                .flat_map(|polygon| polygon.rings_mut().iter_mut())
                .for_each(visit),
            Geometry::GeometryCollection(collection)
            | Geometry::MultiCurve(collection)
            | Geometry::MultiSurface(collection) => {
                for geometry in collection.geometries_mut() {
                    geometry.for_each_line_string_mut(visit);
                }
            }
        }
    }
}

impl From<Point> for Geometry {
    fn from(value: Point) -> Self {
        Geometry::Point(value)
    }
}

impl From<LineString> for Geometry {
    fn from(value: LineString) -> Self {
        Geometry::LineString(value)
    }
}

impl From<CompoundCurve> for Geometry {
    fn from(value: CompoundCurve) -> Self {
        Geometry::CompoundCurve(value)
    }
}

impl From<Polygon> for Geometry {
    fn from(value: Polygon) -> Self {
        Geometry::Polygon(value)
    }
}

impl From<CurvePolygon> for Geometry {
    fn from(value: CurvePolygon) -> Self {
        Geometry::CurvePolygon(value)
    }
}

impl From<MultiPoint> for Geometry {
    fn from(value: MultiPoint) -> Self {
        Geometry::MultiPoint(value)
    }
}

impl From<MultiLineString> for Geometry {
    fn from(value: MultiLineString) -> Self {
        Geometry::MultiLineString(value)
    }
}

impl From<MultiPolygon> for Geometry {
    fn from(value: MultiPolygon) -> Self {
        Geometry::MultiPolygon(value)
    }
}

impl From<GeometryCollection> for Geometry {
    fn from(value: GeometryCollection) -> Self {
        Geometry::GeometryCollection(value)
    }
}

impl From<PolyhedralSurface> for Geometry {
    fn from(value: PolyhedralSurface) -> Self {
        Geometry::PolyhedralSurface(value)
    }
}

fn unexpected(expected: GeometryTypeId, actual: &Geometry) -> SimpleFeaturesError {
    SimpleFeaturesError::UnexpectedGeometryType {
        expected,
        actual: actual.geometry_type(),
    }
}

impl TryFrom<Geometry> for Point {
    type Error = SimpleFeaturesError;

    fn try_from(value: Geometry) -> Result<Self, Self::Error> {
        match value {
            Geometry::Point(point) => Ok(point),
            other => Err(unexpected(GeometryTypeId::Point, &other)),
        }
    }
}

impl TryFrom<Geometry> for LineString {
    type Error = SimpleFeaturesError;

    fn try_from(value: Geometry) -> Result<Self, Self::Error> {
        match value {
            Geometry::LineString(line) => Ok(line),
            other => Err(unexpected(GeometryTypeId::LineString, &other)),
        }
    }
}

impl TryFrom<Geometry> for Polygon {
    type Error = SimpleFeaturesError;

    fn try_from(value: Geometry) -> Result<Self, Self::Error> {
        match value {
            Geometry::Polygon(polygon) => Ok(polygon),
            other => Err(unexpected(GeometryTypeId::Polygon, &other)),
        }
    }
}
