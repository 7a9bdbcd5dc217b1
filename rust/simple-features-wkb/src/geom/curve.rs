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
    error::SimpleFeaturesError,
    geom::{CompoundCurve, Geometry, LineString},
    types::GeometryTypeId,
};

/// Any concrete one-dimensional geometry
///
/// The closed set of kinds that a `CurvePolygon` may use as a ring.
#[derive(Debug, Clone, PartialEq)]
pub enum Curve {
    LineString(LineString),
    CircularString(LineString),
    CompoundCurve(CompoundCurve),
}

impl Curve {
    pub fn geometry_type(&self) -> GeometryTypeId {
        match self {
            Curve::LineString(_) => GeometryTypeId::LineString,
            Curve::CircularString(_) => GeometryTypeId::CircularString,
            Curve::CompoundCurve(_) => GeometryTypeId::CompoundCurve,
        }
    }

    pub fn has_z(&self) -> bool {
        match self {
            Curve::LineString(line) | Curve::CircularString(line) => line.has_z(),
            Curve::CompoundCurve(curve) => curve.has_z(),
        }
    }

    pub fn has_m(&self) -> bool {
        match self {
            Curve::LineString(line) | Curve::CircularString(line) => line.has_m(),
            Curve::CompoundCurve(curve) => curve.has_m(),
        }
    }

    pub fn num_points(&self) -> usize {
        match self {
            Curve::LineString(line) | Curve::CircularString(line) => line.num_points(),
            Curve::CompoundCurve(curve) => curve.num_points(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.num_points() == 0
    }

    /// The point sequences that make up this curve
    ///
    /// One sequence for a LineString or CircularString, one per member for a
    /// CompoundCurve.
    pub fn line_strings(&self) -> Vec<&LineString> {
        match self {
            Curve::LineString(line) | Curve::CircularString(line) => vec![line],
            Curve::CompoundCurve(curve) => curve.line_strings().iter().collect(),
        }
    }

    pub fn line_strings_mut(&mut self) -> Vec<&mut LineString> {
        match self {
            Curve::LineString(line) | Curve::CircularString(line) => vec![line],
            Curve::CompoundCurve(curve) => curve.line_strings_mut().iter_mut().collect(),
        }
    }
}

impl From<Curve> for Geometry {
    fn from(value: Curve) -> Self {
        match value {
            Curve::LineString(line) => Geometry::LineString(line),
            Curve::CircularString(line) => Geometry::CircularString(line),
            Curve::CompoundCurve(curve) => Geometry::CompoundCurve(curve),
        }
    }
}

impl TryFrom<Geometry> for Curve {
    type Error = SimpleFeaturesError;

    fn try_from(value: Geometry) -> Result<Self, Self::Error> {
        match value {
            Geometry::LineString(line) => Ok(Curve::LineString(line)),
            Geometry::CircularString(line) => Ok(Curve::CircularString(line)),
            Geometry::CompoundCurve(curve) => Ok(Curve::CompoundCurve(curve)),
            other => Err(SimpleFeaturesError::UnexpectedGeometryType {
                expected: GeometryTypeId::Curve,
                actual: other.geometry_type(),
            }),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geom::Point;

    #[test]
    fn curve_from_geometry() {
        let line = LineString::from_xy([(0.0, 0.0), (1.0, 1.0)]);
        let curve = Curve::try_from(Geometry::CircularString(line.clone())).unwrap();
        assert_eq!(curve.geometry_type(), GeometryTypeId::CircularString);
        assert_eq!(curve.num_points(), 2);
        assert_eq!(Geometry::from(curve), Geometry::CircularString(line));

        let err = Curve::try_from(Geometry::Point(Point::new(0.0, 0.0))).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unexpected Geometry Type. Expected: CURVE, Actual: POINT"
        );
    }

    #[test]
    fn compound_curve_line_strings() {
        let mut compound = CompoundCurve::new(true, true);
        compound.add_line_string(LineString::new(true, true));
        compound.add_line_string(LineString::new(true, true));

        let mut curve = Curve::CompoundCurve(compound);
        assert!(curve.has_z() && curve.has_m());
        assert!(curve.is_empty());
        assert_eq!(curve.line_strings().len(), 2);

        for line in curve.line_strings_mut() {
            line.add_point(Point::new_zm(1.0, 2.0, 3.0, 4.0));
        }
        assert_eq!(curve.num_points(), 2);
    }
}
