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
use serde::{Deserialize, Serialize};

use crate::geom::{Geometry, Point};

/// Axis-aligned bounds of the coordinates of a geometry
///
/// `z` and `m` hold (min, max) ranges and are `None` when no point
/// contributing to the envelope carried that ordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    pub z: Option<(f64, f64)>,
    pub m: Option<(f64, f64)>,
}

/// Compute the envelope of every point in a geometry
///
/// Returns `None` if the geometry contains no points at any depth.
pub fn build_envelope(geometry: &Geometry) -> Option<Envelope> {
    let mut envelope: Option<Envelope> = None;
    geometry.for_each_point(&mut |point| {
        envelope = Some(match envelope {
            Some(mut envelope) => {
                envelope.expand_to_include(point);
                envelope
            }
            None => Envelope::from_point(point),
        });
    });

    envelope
}

impl Envelope {
    /// Create an XY envelope
    pub fn xy(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
            z: None,
            m: None,
        }
    }

    /// Create a degenerate envelope covering a single point
    pub fn from_point(point: &Point) -> Self {
        Self {
            min_x: point.x,
            max_x: point.x,
            min_y: point.y,
            max_y: point.y,
            z: point.z.map(|z| (z, z)),
            m: point.m.map(|m| (m, m)),
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Grow this envelope to cover a point
    pub fn expand_to_include(&mut self, point: &Point) {
        self.min_x = self.min_x.min(point.x);
        self.max_x = self.max_x.max(point.x);
        self.min_y = self.min_y.min(point.y);
        self.max_y = self.max_y.max(point.y);
        self.z = merge_range(self.z, point.z.map(|z| (z, z)));
        self.m = merge_range(self.m, point.m.map(|m| (m, m)));
    }

    /// Grow this envelope to cover another envelope
    pub fn merge(&mut self, other: &Envelope) {
        self.min_x = self.min_x.min(other.min_x);
        self.max_x = self.max_x.max(other.max_x);
        self.min_y = self.min_y.min(other.min_y);
        self.max_y = self.max_y.max(other.max_y);
        self.z = merge_range(self.z, other.z);
        self.m = merge_range(self.m, other.m);
    }

    /// True if the two envelopes share at least one XY position (boundaries included)
    pub fn intersects(&self, other: &Envelope) -> bool {
        self.min_x <= other.max_x
            && other.min_x <= self.max_x
            && self.min_y <= other.max_y
            && other.min_y <= self.max_y
    }

    /// True if the XY position of point is inside or on the boundary of this envelope
    pub fn contains_point(&self, point: &Point) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }
}

fn merge_range(a: Option<(f64, f64)>, b: Option<(f64, f64)>) -> Option<(f64, f64)> {
    match (a, b) {
        (Some(a), Some(b)) => Some((a.0.min(b.0), a.1.max(b.1))),
        (Some(a), None) => Some(a),
        (None, b) => b,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geom::{GeometryCollection, LineString, MultiPoint, Polygon};

    #[test]
    fn envelope_of_point() {
        let point = Point::new(3.0, -4.0);
        let envelope = build_envelope(&Geometry::Point(point)).unwrap();
        assert_eq!(envelope, Envelope::xy(3.0, 3.0, -4.0, -4.0));
        assert_eq!(envelope.width(), 0.0);
        assert!(envelope.contains_point(&point));
    }

    #[test]
    fn envelope_of_polygon() {
        let polygon = Polygon::from_rings(
            false,
            false,
            vec![LineString::from_xy([
                (-90.0, 45.0),
                (-90.0, -45.0),
                (90.0, -45.0),
                (90.0, 45.0),
            ])],
        );
        let envelope = build_envelope(&Geometry::Polygon(polygon)).unwrap();
        assert_eq!(envelope, Envelope::xy(-90.0, 90.0, -45.0, 45.0));
        assert_eq!(envelope.width(), 180.0);
        assert_eq!(envelope.height(), 90.0);
    }

    #[test]
    fn envelope_tracks_z_and_m() {
        let multi = MultiPoint::from_points(
            true,
            true,
            vec![
                Point::new_zm(0.0, 0.0, 10.0, -1.0),
                Point::new_zm(1.0, 1.0, 5.0, 2.0),
            ],
        );
        let envelope = build_envelope(&Geometry::MultiPoint(multi)).unwrap();
        assert_eq!(envelope.z, Some((5.0, 10.0)));
        assert_eq!(envelope.m, Some((-1.0, 2.0)));

        let mut xy = Envelope::xy(0.0, 1.0, 0.0, 1.0);
        assert_eq!(xy.z, None);
        xy.expand_to_include(&Point::new_z(2.0, 0.5, 7.0));
        let expected = Envelope {
            min_x: 0.0,
            max_x: 2.0,
            min_y: 0.0,
            max_y: 1.0,
            z: Some((7.0, 7.0)),
            m: None,
        };
        assert_eq!(xy, expected);
    }

    #[test]
    fn envelope_of_empty_geometries() {
        assert_eq!(
            build_envelope(&Geometry::LineString(LineString::default())),
            None
        );

        let mut collection = GeometryCollection::default();
        collection.add_geometry(Polygon::default());
        assert_eq!(
            build_envelope(&Geometry::GeometryCollection(collection)),
            None
        );
    }

    #[test]
    fn merge_and_intersect() {
        let mut a = Envelope::xy(0.0, 1.0, 0.0, 1.0);
        let b = Envelope::xy(1.0, 2.0, 1.0, 2.0);
        let c = Envelope::xy(1.5, 2.0, -5.0, -4.0);
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
        assert!(!c.intersects(&a));

        a.merge(&c);
        assert_eq!(a, Envelope::xy(0.0, 2.0, -5.0, 1.0));
        assert!(a.intersects(&c));
        assert!(a.contains_point(&Point::new(2.0, -5.0)));
        assert!(!a.contains_point(&Point::new(2.0, 1.5)));
    }

    #[test]
    fn envelope_serde() {
        let envelope = Envelope {
            min_x: 1.0,
            max_x: 2.0,
            min_y: 3.0,
            max_y: 4.0,
            z: Some((5.0, 6.0)),
            m: None,
        };
        let json = serde_json::to_string(&envelope).unwrap();
        let deserialized: Envelope = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, envelope);
    }
}
