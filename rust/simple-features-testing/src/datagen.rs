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
use std::f64::consts::PI;

use rand::distributions::Uniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use simple_features_wkb::{
    geom::{
        CompoundCurve, Curve, CurvePolygon, Geometry, GeometryCollection, LineString,
        MultiLineString, MultiPoint, MultiPolygon, Point, Polygon, PolyhedralSurface,
    },
    types::GeometryTypeId,
};

/// Every concrete geometry type
pub const CONCRETE_GEOMETRY_TYPES: [GeometryTypeId; 15] = [
    GeometryTypeId::Point,
    GeometryTypeId::LineString,
    GeometryTypeId::Polygon,
    GeometryTypeId::MultiPoint,
    GeometryTypeId::MultiLineString,
    GeometryTypeId::MultiPolygon,
    GeometryTypeId::GeometryCollection,
    GeometryTypeId::CircularString,
    GeometryTypeId::CompoundCurve,
    GeometryTypeId::CurvePolygon,
    GeometryTypeId::MultiCurve,
    GeometryTypeId::MultiSurface,
    GeometryTypeId::PolyhedralSurface,
    GeometryTypeId::Tin,
    GeometryTypeId::Triangle,
];

/// Deterministic generator of random geometries
///
/// Lines are random walks and polygon rings are closed, star-shaped (hence
/// simple) rings, so every generated surface has a positive area and a
/// centroid inside its envelope. Every coordinate lies within the configured
/// bounds.
///
/// # Example
///
/// ```rust
/// use simple_features_testing::datagen::RandomGeometryGenerator;
/// use simple_features_wkb::types::GeometryTypeId;
///
/// let mut generator = RandomGeometryGenerator::new(42).has_z(true);
/// let geometry = generator.geometry(GeometryTypeId::MultiPolygon);
/// assert!(geometry.has_z());
/// ```
#[derive(Debug, Clone)]
pub struct RandomGeometryGenerator {
    rng: StdRng,
    has_z: bool,
    has_m: bool,
    bounds: (f64, f64, f64, f64),
    size_range: (f64, f64),
    max_members: usize,
}

impl RandomGeometryGenerator {
    /// Create a generator with a seed, XY output, and bounds of the whole world
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            has_z: false,
            has_m: false,
            bounds: (-180.0, 180.0, -90.0, 90.0),
            size_range: (1.0, 10.0),
            max_members: 5,
        }
    }

    /// Generate Z values
    pub fn has_z(mut self, has_z: bool) -> Self {
        self.has_z = has_z;
        self
    }

    /// Generate M values
    pub fn has_m(mut self, has_m: bool) -> Self {
        self.has_m = has_m;
        self
    }

    /// Set the bounds (min_x, max_x, min_y, max_y) of generated coordinates
    ///
    /// The bounds must be wider and taller than twice the largest size.
    pub fn bounds(mut self, min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        self.bounds = (min_x, max_x, min_y, max_y);
        self
    }

    /// Set the range of ring radii and walk step lengths
    pub fn size_range(mut self, size_range: (f64, f64)) -> Self {
        self.size_range = size_range;
        self
    }

    /// Set the largest number of members of generated collections
    pub fn max_members(mut self, max_members: usize) -> Self {
        self.max_members = max_members.max(1);
        self
    }

    /// Generate a geometry of any concrete type
    ///
    /// Panics for abstract types.
    pub fn geometry(&mut self, geometry_type: GeometryTypeId) -> Geometry {
        match geometry_type {
            GeometryTypeId::Point => Geometry::Point(self.point()),
            GeometryTypeId::LineString => Geometry::LineString(self.line_string()),
            GeometryTypeId::CircularString => Geometry::CircularString(self.line_string()),
            GeometryTypeId::CompoundCurve => Geometry::CompoundCurve(self.compound_curve()),
            GeometryTypeId::Polygon => Geometry::Polygon(self.polygon()),
            GeometryTypeId::Triangle => Geometry::Triangle(self.triangle()),
            GeometryTypeId::CurvePolygon => Geometry::CurvePolygon(self.curve_polygon()),
            GeometryTypeId::MultiPoint => Geometry::MultiPoint(self.multi_point()),
            GeometryTypeId::MultiLineString => {
                Geometry::MultiLineString(self.multi_line_string())
            }
            GeometryTypeId::MultiPolygon => Geometry::MultiPolygon(self.multi_polygon()),
            GeometryTypeId::GeometryCollection => {
                Geometry::GeometryCollection(self.geometry_collection())
            }
            GeometryTypeId::MultiCurve => Geometry::MultiCurve(self.multi_curve()),
            GeometryTypeId::MultiSurface => Geometry::MultiSurface(self.multi_surface()),
            GeometryTypeId::PolyhedralSurface => {
                Geometry::PolyhedralSurface(self.polyhedral_surface())
            }
            GeometryTypeId::Tin => Geometry::Tin(self.tin()),
            GeometryTypeId::Geometry | GeometryTypeId::Curve | GeometryTypeId::Surface => {
                panic!("Can't generate abstract geometry type {geometry_type}")
            }
        }
    }

    pub fn point(&mut self) -> Point {
        let (min_x, max_x, min_y, max_y) = self.bounds;
        let x = self.rng.sample(Uniform::new(min_x, max_x));
        let y = self.rng.sample(Uniform::new(min_y, max_y));
        self.with_ordinates(x, y)
    }

    /// A random walk of 2 to 10 points
    pub fn line_string(&mut self) -> LineString {
        let num_points = self.rng.gen_range(2..=10);
        let mut current = self.point();
        let mut points = vec![current];
        for _ in 1..num_points {
            let step = self.rng.sample(Uniform::new(self.size_range.0, self.size_range.1));
            let angle = self.rng.sample(Uniform::new(0.0, 2.0 * PI));
            let (min_x, max_x, min_y, max_y) = self.bounds;
            let x = (current.x + step * angle.cos()).clamp(min_x, max_x);
            let y = (current.y + step * angle.sin()).clamp(min_y, max_y);
            current = self.with_ordinates(x, y);
            points.push(current);
        }

        LineString::from_points(self.has_z, self.has_m, points)
    }

    pub fn compound_curve(&mut self) -> CompoundCurve {
        let num_members = self.num_members();
        let line_strings = (0..num_members).map(|_| self.line_string()).collect();
        CompoundCurve::from_line_strings(self.has_z, self.has_m, line_strings)
    }

    /// A polygon with a closed star-shaped exterior ring and no holes
    pub fn polygon(&mut self) -> Polygon {
        let num_vertices = self.rng.gen_range(3..=8);
        let ring = self.ring(num_vertices);
        Polygon::from_rings(self.has_z, self.has_m, vec![ring])
    }

    /// A closed ring of three vertices
    pub fn triangle(&mut self) -> Polygon {
        let ring = self.ring(3);
        Polygon::from_rings(self.has_z, self.has_m, vec![ring])
    }

    pub fn curve_polygon(&mut self) -> CurvePolygon {
        let num_vertices = self.rng.gen_range(3..=8);
        let ring = self.ring(num_vertices);
        let curve = if self.rng.gen_bool(0.5) {
            Curve::CircularString(ring)
        } else {
            // Split the ring into two connected members
            let points = ring.points();
            let split = points.len() / 2;
            Curve::CompoundCurve(CompoundCurve::from_line_strings(
                self.has_z,
                self.has_m,
                vec![
                    LineString::from_points(self.has_z, self.has_m, points[..=split].to_vec()),
                    LineString::from_points(self.has_z, self.has_m, points[split..].to_vec()),
                ],
            ))
        };

        CurvePolygon::from_rings(self.has_z, self.has_m, vec![curve])
    }

    pub fn multi_point(&mut self) -> MultiPoint {
        let num_members = self.num_members();
        let points = (0..num_members).map(|_| self.point()).collect();
        MultiPoint::from_points(self.has_z, self.has_m, points)
    }

    pub fn multi_line_string(&mut self) -> MultiLineString {
        let num_members = self.num_members();
        let line_strings = (0..num_members).map(|_| self.line_string()).collect();
        MultiLineString::from_line_strings(self.has_z, self.has_m, line_strings)
    }

    pub fn multi_polygon(&mut self) -> MultiPolygon {
        let num_members = self.num_members();
        let polygons = (0..num_members).map(|_| self.polygon()).collect();
        MultiPolygon::from_polygons(self.has_z, self.has_m, polygons)
    }

    pub fn polyhedral_surface(&mut self) -> PolyhedralSurface {
        let num_members = self.num_members();
        let polygons = (0..num_members).map(|_| self.polygon()).collect();
        PolyhedralSurface::from_polygons(self.has_z, self.has_m, polygons)
    }

    pub fn tin(&mut self) -> PolyhedralSurface {
        let num_members = self.num_members();
        let polygons = (0..num_members).map(|_| self.triangle()).collect();
        PolyhedralSurface::from_polygons(self.has_z, self.has_m, polygons)
    }

    /// A collection of Points, LineStrings, and Polygons
    pub fn geometry_collection(&mut self) -> GeometryCollection {
        let num_members = self.num_members();
        let mut geometries = Vec::with_capacity(num_members);
        for _ in 0..num_members {
            let member = match self.rng.gen_range(0..3) {
                0 => Geometry::Point(self.point()),
                1 => Geometry::LineString(self.line_string()),
                _ => Geometry::Polygon(self.polygon()),
            };
            geometries.push(member);
        }

        GeometryCollection::from_geometries(self.has_z, self.has_m, geometries)
    }

    /// A collection of LineStrings, CircularStrings, and CompoundCurves
    pub fn multi_curve(&mut self) -> GeometryCollection {
        let num_members = self.num_members();
        let mut geometries = Vec::with_capacity(num_members);
        for _ in 0..num_members {
            let member = match self.rng.gen_range(0..3) {
                0 => Geometry::LineString(self.line_string()),
                1 => Geometry::CircularString(self.line_string()),
                _ => Geometry::CompoundCurve(self.compound_curve()),
            };
            geometries.push(member);
        }

        GeometryCollection::from_geometries(self.has_z, self.has_m, geometries)
    }

    /// A collection of Polygons and CurvePolygons
    pub fn multi_surface(&mut self) -> GeometryCollection {
        let num_members = self.num_members();
        let mut geometries = Vec::with_capacity(num_members);
        for _ in 0..num_members {
            let member = if self.rng.gen_bool(0.5) {
                Geometry::Polygon(self.polygon())
            } else {
                Geometry::CurvePolygon(self.curve_polygon())
            };
            geometries.push(member);
        }

        GeometryCollection::from_geometries(self.has_z, self.has_m, geometries)
    }

    /// A closed ring of vertices at increasing angles around a random center
    fn ring(&mut self, num_vertices: usize) -> LineString {
        let (min_x, max_x, min_y, max_y) = self.bounds;
        let radius = self.rng.sample(Uniform::new(self.size_range.0, self.size_range.1));

        // Keep the ring within bounds by constraining the center
        let center_x = self.rng.sample(Uniform::new(min_x + radius, max_x - radius));
        let center_y = self.rng.sample(Uniform::new(min_y + radius, max_y - radius));

        let mut angles: Vec<f64> = (0..num_vertices)
            .map(|i| {
                let sector = 2.0 * PI / num_vertices as f64;
                sector * i as f64 + self.rng.sample(Uniform::new(0.1, 0.9)) * sector
            })
            .collect();
        angles.sort_by(f64::total_cmp);

        let mut points = Vec::with_capacity(num_vertices + 1);
        for angle in angles {
            let distance = radius * self.rng.sample(Uniform::new(0.5, 1.0));
            let x = center_x + distance * angle.cos();
            let y = center_y + distance * angle.sin();
            points.push(self.with_ordinates(x, y));
        }
        points.push(points[0]);

        LineString::from_points(self.has_z, self.has_m, points)
    }

    fn with_ordinates(&mut self, x: f64, y: f64) -> Point {
        let z = self.has_z.then(|| self.rng.sample(Uniform::new(0.0, 100.0)));
        let m = self.has_m.then(|| self.rng.sample(Uniform::new(0.0, 100.0)));
        Point { x, y, z, m }
    }

    fn num_members(&mut self) -> usize {
        self.rng.gen_range(1..=self.max_members)
    }
}
