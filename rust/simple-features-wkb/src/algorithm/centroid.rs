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
    algorithm::{contains::distance, get_dimension},
    geom::{Curve, Geometry, Point, Polygon},
};

/// Dimension-aware centroid of a geometry
///
/// Surfaces are weighted by area with holes subtracted, curves by segment
/// length, and points equally. Members of a collection with a lower dimension
/// than the collection do not contribute. A surface with zero area falls back
/// to the centroid of its rings as curves, and curves of zero length fall back
/// to the mean of their points. Returns `None` if the geometry has no points.
///
/// The result is an XY point.
pub fn get_centroid(geometry: &Geometry) -> Option<Point> {
    let dimension = get_dimension(geometry);

    if dimension == 2 {
        let mut surface = SurfaceCentroid::default();
        surface.add_geometry(geometry);
        if let Some(centroid) = surface.centroid() {
            return Some(centroid);
        }
    }

    if dimension >= 1 {
        let mut curve = CurveCentroid::default();
        geometry.for_each_line_string(&mut |line| curve.add_points(line.points()));
        if let Some(centroid) = curve.centroid() {
            return Some(centroid);
        }
    }

    let mut points = PointCentroid::default();
    geometry.for_each_point(&mut |point| points.add_point(point));
    points.centroid()
}

/// Accumulates twice the signed area and area moments of rings relative to a
/// fixed base point to limit cancellation for coordinates far from the origin
#[derive(Default)]
struct SurfaceCentroid {
    base: Option<Point>,
    area2: f64,
    sum_x: f64,
    sum_y: f64,
}

impl SurfaceCentroid {
    fn add_geometry(&mut self, geometry: &Geometry) {
        match geometry {
            Geometry::Polygon(polygon) | Geometry::Triangle(polygon) => self.add_polygon(polygon),
            Geometry::CurvePolygon(polygon) => {
                for (i, ring) in polygon.rings().iter().enumerate() {
                    self.add_ring(&curve_points(ring), i == 0);
                }
            }
            Geometry::MultiPolygon(multi) => {
                for polygon in multi.polygons() {
                    self.add_polygon(polygon);
                }
            }
            Geometry::PolyhedralSurface(surface) | Geometry::Tin(surface) => {
                for polygon in surface.polygons() {
                    self.add_polygon(polygon);
                }
            }
            Geometry::GeometryCollection(collection) | Geometry::MultiSurface(collection) => {
                for member in collection.geometries() {
                    self.add_geometry(member);
                }
            }
            _ => {}
        }
    }

    fn add_polygon(&mut self, polygon: &Polygon) {
        for (i, ring) in polygon.rings().iter().enumerate() {
            self.add_ring(ring.points(), i == 0);
        }
    }

    /// Exterior rings add their absolute area and holes subtract theirs,
    /// whatever the winding order
    fn add_ring(&mut self, points: &[Point], is_exterior: bool) {
        if points.len() < 3 {
            return;
        }

        let base = *self.base.get_or_insert(Point::new(points[0].x, points[0].y));

        let mut area2 = 0.0;
        let mut sum_x = 0.0;
        let mut sum_y = 0.0;
        for (i, a) in points.iter().enumerate() {
            let b = &points[(i + 1) % points.len()];
            let (ax, ay) = (a.x - base.x, a.y - base.y);
            let (bx, by) = (b.x - base.x, b.y - base.y);
            let cross = ax * by - bx * ay;
            area2 += cross;
            sum_x += cross * (ax + bx);
            sum_y += cross * (ay + by);
        }

        if area2 == 0.0 {
            return;
        }

        let sign = if is_exterior {
            area2.signum()
        } else {
            -area2.signum()
        };
        self.area2 += sign * area2;
        self.sum_x += sign * sum_x;
        self.sum_y += sign * sum_y;
    }

    fn centroid(&self) -> Option<Point> {
        let base = self.base?;
        if self.area2 == 0.0 {
            return None;
        }

        Some(Point::new(
            base.x + self.sum_x / (3.0 * self.area2),
            base.y + self.sum_y / (3.0 * self.area2),
        ))
    }
}

#[derive(Default)]
struct CurveCentroid {
    length: f64,
    sum_x: f64,
    sum_y: f64,
}

impl CurveCentroid {
    fn add_points(&mut self, points: &[Point]) {
        for segment in points.windows(2) {
            let length = distance(&segment[0], &segment[1]);
            self.length += length;
            self.sum_x += length * (segment[0].x + segment[1].x) / 2.0;
            self.sum_y += length * (segment[0].y + segment[1].y) / 2.0;
        }
    }

    fn centroid(&self) -> Option<Point> {
        if self.length == 0.0 {
            return None;
        }

        Some(Point::new(
            self.sum_x / self.length,
            self.sum_y / self.length,
        ))
    }
}

#[derive(Default)]
struct PointCentroid {
    count: usize,
    sum_x: f64,
    sum_y: f64,
}

impl PointCentroid {
    fn add_point(&mut self, point: &Point) {
        self.count += 1;
        self.sum_x += point.x;
        self.sum_y += point.y;
    }

    fn centroid(&self) -> Option<Point> {
        if self.count == 0 {
            return None;
        }

        let count = self.count as f64;
        Some(Point::new(self.sum_x / count, self.sum_y / count))
    }
}

/// Flatten the members of a curve into one ring
fn curve_points(curve: &Curve) -> Vec<Point> {
    curve
        .line_strings()
        .into_iter()
        .flat_map(|line| line.points().iter().copied())
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geom::{
        CompoundCurve, CurvePolygon, GeometryCollection, LineString, MultiLineString,
        MultiPoint, MultiPolygon,
    };

    fn square_with_hole() -> Polygon {
        let mut polygon = Polygon::new(false, false);
        polygon.add_ring(LineString::from_xy([
            (-90.0, 45.0),
            (-90.0, -45.0),
            (90.0, -45.0),
            (90.0, 45.0),
        ]));
        polygon.add_ring(LineString::from_xy([
            (0.0, 45.0),
            (0.0, 0.0),
            (90.0, 0.0),
            (90.0, 45.0),
        ]));
        polygon
    }

    #[test]
    fn point_centroid_is_the_point() {
        let point = Point::new_zm(1.5, -2.5, 3.0, 4.0);
        assert_eq!(
            get_centroid(&Geometry::Point(point)),
            Some(Point::new(1.5, -2.5))
        );
    }

    #[test]
    fn multi_point_centroid_is_the_mean() {
        let multi = MultiPoint::from_points(
            false,
            false,
            vec![
                Point::new(0.0, 0.0),
                Point::new(2.0, 0.0),
                Point::new(2.0, 4.0),
                Point::new(0.0, 4.0),
            ],
        );
        assert_eq!(
            get_centroid(&Geometry::MultiPoint(multi)),
            Some(Point::new(1.0, 2.0))
        );
    }

    #[test]
    fn line_centroid_is_length_weighted() {
        // Segment lengths 2 and 6; midpoints (1, 0) and (2, 3)
        let line = LineString::from_xy([(0.0, 0.0), (2.0, 0.0), (2.0, 6.0)]);
        let centroid = get_centroid(&Geometry::LineString(line)).unwrap();
        assert_eq!(centroid, Point::new(1.75, 2.25));

        let multi = MultiLineString::from_line_strings(
            false,
            false,
            vec![
                LineString::from_xy([(0.0, 0.0), (2.0, 0.0)]),
                LineString::from_xy([(2.0, 0.0), (2.0, 6.0)]),
            ],
        );
        assert_eq!(
            get_centroid(&Geometry::MultiLineString(multi)),
            Some(Point::new(1.75, 2.25))
        );
    }

    #[test]
    fn polygon_centroid_with_hole() {
        let mut polygon = square_with_hole();
        let hole = polygon.rings_mut().pop().unwrap();
        assert_eq!(
            get_centroid(&Geometry::Polygon(polygon.clone())),
            Some(Point::new(0.0, 0.0))
        );

        polygon.add_ring(hole);
        assert_eq!(
            get_centroid(&Geometry::Polygon(polygon)),
            Some(Point::new(-15.0, -7.5))
        );
    }

    #[test]
    fn polygon_centroid_ignores_winding() {
        let mut polygon = square_with_hole();
        for ring in polygon.rings_mut() {
            ring.points_mut().reverse();
        }
        assert_eq!(
            get_centroid(&Geometry::Polygon(polygon.clone())),
            Some(Point::new(-15.0, -7.5))
        );

        polygon.rings_mut()[0].points_mut().reverse();
        assert_eq!(
            get_centroid(&Geometry::Polygon(polygon)),
            Some(Point::new(-15.0, -7.5))
        );
    }

    #[test]
    fn multi_polygon_centroid_is_area_weighted() {
        let small = Polygon::from_rings(
            false,
            false,
            vec![LineString::from_xy([
                (0.0, 0.0),
                (2.0, 0.0),
                (2.0, 2.0),
                (0.0, 2.0),
                (0.0, 0.0),
            ])],
        );
        let large = Polygon::from_rings(
            false,
            false,
            vec![LineString::from_xy([
                (10.0, 0.0),
                (14.0, 0.0),
                (14.0, 4.0),
                (10.0, 4.0),
                (10.0, 0.0),
            ])],
        );

        // Areas 4 and 16 with centroids (1, 1) and (12, 2)
        let multi = MultiPolygon::from_polygons(false, false, vec![small, large]);
        let centroid = get_centroid(&Geometry::MultiPolygon(multi)).unwrap();
        assert!((centroid.x - 9.8).abs() < 1e-12);
        assert!((centroid.y - 1.8).abs() < 1e-12);
    }

    #[test]
    fn curve_polygon_centroid() {
        let mut compound = CompoundCurve::new(false, false);
        compound.add_line_string(LineString::from_xy([(0.0, 0.0), (4.0, 0.0), (4.0, 2.0)]));
        compound.add_line_string(LineString::from_xy([(0.0, 2.0), (0.0, 0.0)]));
        let polygon = CurvePolygon::from_rings(false, false, vec![Curve::CompoundCurve(compound)]);
        assert_eq!(
            get_centroid(&Geometry::CurvePolygon(polygon)),
            Some(Point::new(2.0, 1.0))
        );
    }

    #[test]
    fn collection_uses_highest_dimension() {
        let mut collection = GeometryCollection::default();
        collection.add_geometry(Point::new(100.0, 100.0));
        collection.add_geometry(LineString::from_xy([(50.0, 50.0), (60.0, 50.0)]));
        collection.add_geometry(Polygon::from_rings(
            false,
            false,
            vec![LineString::from_xy([(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)])],
        ));
        assert_eq!(
            get_centroid(&Geometry::GeometryCollection(collection)),
            Some(Point::new(1.0, 1.0))
        );
    }

    #[test]
    fn degenerate_inputs_fall_back() {
        // Zero-area polygon falls back to its ring as a curve
        let flat = Polygon::from_rings(
            false,
            false,
            vec![LineString::from_xy([(0.0, 0.0), (4.0, 0.0), (0.0, 0.0)])],
        );
        assert_eq!(
            get_centroid(&Geometry::Polygon(flat)),
            Some(Point::new(2.0, 0.0))
        );

        // Zero-length line falls back to the mean of its points
        let stuck = LineString::from_xy([(3.0, 3.0), (3.0, 3.0)]);
        assert_eq!(
            get_centroid(&Geometry::LineString(stuck)),
            Some(Point::new(3.0, 3.0))
        );

        assert_eq!(get_centroid(&Geometry::LineString(LineString::default())), None);
        assert_eq!(
            get_centroid(&Geometry::GeometryCollection(GeometryCollection::default())),
            None
        );
    }
}
