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
use std::{fmt::Display, str::FromStr};

use geo_traits::Dimensions;
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::error::SimpleFeaturesError;

/// Geometry types
///
/// The closed set of OGC Simple Features geometry types without considering
/// [Dimensions]. `Geometry`, `Curve`, and `Surface` are abstract: they can be
/// requested as an expected type while reading but never decoded or
/// constructed. See [GeometryTypeAndDimensions] for a struct to track both
/// the type and the dimensions.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Hash, Clone, Copy)]
pub enum GeometryTypeId {
    /// Abstract root of the type hierarchy
    Geometry,
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
    /// Arc-interpolated curve with the same layout as a LineString
    CircularString,
    CompoundCurve,
    CurvePolygon,
    MultiCurve,
    MultiSurface,
    /// Abstract one-dimensional type
    Curve,
    /// Abstract two-dimensional type
    Surface,
    PolyhedralSurface,
    Tin,
    Triangle,
}

/// Every [GeometryTypeId] in WKB identifier order
pub const ALL_GEOMETRY_TYPES: [GeometryTypeId; 18] = [
    GeometryTypeId::Geometry,
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
    GeometryTypeId::Curve,
    GeometryTypeId::Surface,
    GeometryTypeId::PolyhedralSurface,
    GeometryTypeId::Tin,
    GeometryTypeId::Triangle,
];

impl GeometryTypeId {
    /// Construct a geometry type from a WKB type integer
    ///
    /// Parses the geometry type (not dimension) component of a WKB type code
    /// (e.g., 1 for Point...17 for Triangle).
    pub fn try_from_wkb_id(wkb_id: u32) -> Result<Self, SimpleFeaturesError> {
        usize::try_from(wkb_id)
            .ok()
            .and_then(|i| ALL_GEOMETRY_TYPES.get(i))
            .copied()
            .ok_or_else(|| {
                SimpleFeaturesError::Invalid(format!("Unknown geometry type identifier {wkb_id}"))
            })
    }

    /// WKB integer identifier
    ///
    /// The GeometryType portion of the WKB identifier (e.g., 1 for Point...17 for Triangle).
    pub fn wkb_id(&self) -> u32 {
        match self {
            Self::Geometry => 0,
            Self::Point => 1,
            Self::LineString => 2,
            Self::Polygon => 3,
            Self::MultiPoint => 4,
            Self::MultiLineString => 5,
            Self::MultiPolygon => 6,
            Self::GeometryCollection => 7,
            Self::CircularString => 8,
            Self::CompoundCurve => 9,
            Self::CurvePolygon => 10,
            Self::MultiCurve => 11,
            Self::MultiSurface => 12,
            Self::Curve => 13,
            Self::Surface => 14,
            Self::PolyhedralSurface => 15,
            Self::Tin => 16,
            Self::Triangle => 17,
        }
    }

    /// OGC name of the type (e.g., `POLYHEDRALSURFACE`)
    pub fn name(&self) -> &'static str {
        match self {
            Self::Geometry => "GEOMETRY",
            Self::Point => "POINT",
            Self::LineString => "LINESTRING",
            Self::Polygon => "POLYGON",
            Self::MultiPoint => "MULTIPOINT",
            Self::MultiLineString => "MULTILINESTRING",
            Self::MultiPolygon => "MULTIPOLYGON",
            Self::GeometryCollection => "GEOMETRYCOLLECTION",
            Self::CircularString => "CIRCULARSTRING",
            Self::CompoundCurve => "COMPOUNDCURVE",
            Self::CurvePolygon => "CURVEPOLYGON",
            Self::MultiCurve => "MULTICURVE",
            Self::MultiSurface => "MULTISURFACE",
            Self::Curve => "CURVE",
            Self::Surface => "SURFACE",
            Self::PolyhedralSurface => "POLYHEDRALSURFACE",
            Self::Tin => "TIN",
            Self::Triangle => "TRIANGLE",
        }
    }

    /// Mixed-case identifier (e.g., `PolyhedralSurface`) used when combined
    /// with a dimension suffix
    pub fn camel_case_name(&self) -> &'static str {
        match self {
            Self::Geometry => "Geometry",
            Self::Point => "Point",
            Self::LineString => "LineString",
            Self::Polygon => "Polygon",
            Self::MultiPoint => "MultiPoint",
            Self::MultiLineString => "MultiLineString",
            Self::MultiPolygon => "MultiPolygon",
            Self::GeometryCollection => "GeometryCollection",
            Self::CircularString => "CircularString",
            Self::CompoundCurve => "CompoundCurve",
            Self::CurvePolygon => "CurvePolygon",
            Self::MultiCurve => "MultiCurve",
            Self::MultiSurface => "MultiSurface",
            Self::Curve => "Curve",
            Self::Surface => "Surface",
            Self::PolyhedralSurface => "PolyhedralSurface",
            Self::Tin => "Tin",
            Self::Triangle => "Triangle",
        }
    }

    /// Returns true for the types that can never be instantiated
    pub fn is_abstract(&self) -> bool {
        matches!(self, Self::Geometry | Self::Curve | Self::Surface)
    }

    /// Returns true if a geometry of type `actual` satisfies this expected type
    ///
    /// `Geometry` accepts everything, `Curve` and `Surface` accept their
    /// concrete members, and every concrete type accepts only itself.
    pub fn accepts(&self, actual: GeometryTypeId) -> bool {
        match self {
            Self::Geometry => true,
            Self::Curve => matches!(
                actual,
                Self::LineString | Self::CircularString | Self::CompoundCurve
            ),
            Self::Surface => matches!(
                actual,
                Self::Polygon
                    | Self::CurvePolygon
                    | Self::Triangle
                    | Self::PolyhedralSurface
                    | Self::Tin
            ),
            expected => *expected == actual,
        }
    }
}

impl Display for GeometryTypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GeometryTypeId {
    type Err = SimpleFeaturesError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        ALL_GEOMETRY_TYPES
            .iter()
            .find(|geometry_type| geometry_type.name().eq_ignore_ascii_case(value))
            .copied()
            .ok_or_else(|| {
                SimpleFeaturesError::Invalid(format!("Invalid geometry type string: '{value}'"))
            })
    }
}

/// Geometry type and dimension
///
/// Combines a [GeometryTypeId] with [Dimensions] to handle cases where these
/// concepts are represented together (e.g., WKB geometry type integers).
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, SerializeDisplay, DeserializeFromStr)]
pub struct GeometryTypeAndDimensions {
    geometry_type: GeometryTypeId,
    dimensions: Dimensions,
}

impl GeometryTypeAndDimensions {
    /// Create from [GeometryTypeId] and [Dimensions]
    pub fn new(geometry_type: GeometryTypeId, dimensions: Dimensions) -> Self {
        Self {
            geometry_type,
            dimensions,
        }
    }

    /// Create from a type and the presence of Z and M values
    pub fn from_flags(geometry_type: GeometryTypeId, has_z: bool, has_m: bool) -> Self {
        Self::new(geometry_type, dimensions_from_flags(has_z, has_m))
    }

    /// The [GeometryTypeId]
    pub fn geometry_type(&self) -> GeometryTypeId {
        self.geometry_type
    }

    /// The [Dimensions]
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Whether coordinates carry a Z value
    pub fn has_z(&self) -> bool {
        matches!(self.dimensions, Dimensions::Xyz | Dimensions::Xyzm)
    }

    /// Whether coordinates carry an M value
    pub fn has_m(&self) -> bool {
        matches!(self.dimensions, Dimensions::Xym | Dimensions::Xyzm)
    }

    /// Create from an ISO WKB integer identifier (e.g., 1001 for Point Z)
    pub fn try_from_wkb_id(wkb_id: u32) -> Result<Self, SimpleFeaturesError> {
        let dimensions = match wkb_id / 1000 {
            0 => Dimensions::Xy,
            1 => Dimensions::Xyz,
            2 => Dimensions::Xym,
            3 => Dimensions::Xyzm,
            _ => {
                return Err(SimpleFeaturesError::Invalid(format!(
                    "Unknown dimensions in ISO WKB geometry type: {wkb_id}"
                )))
            }
        };

        let geometry_type = GeometryTypeId::try_from_wkb_id(wkb_id % 1000)?;
        Ok(Self {
            geometry_type,
            dimensions,
        })
    }

    /// ISO WKB integer identifier (e.g., 1001 for Point Z)
    pub fn wkb_id(&self) -> u32 {
        let dimensions_id = match self.dimensions {
            Dimensions::Xy => 0,
            Dimensions::Xyz => 1000,
            Dimensions::Xym => 2000,
            Dimensions::Xyzm => 3000,
            Dimensions::Unknown(n) => match n {
                2 => 0,
                3 => 1000,
                4 => 3000,
                _ => {
                    // Avoid a panic unless in debug mode
                    debug_assert!(false, "Unknown dimensions in GeometryTypeAndDimensions");
                    0
                }
            },
        };

        dimensions_id + self.geometry_type.wkb_id()
    }
}

/// Map Z/M presence to [Dimensions]
pub fn dimensions_from_flags(has_z: bool, has_m: bool) -> Dimensions {
    match (has_z, has_m) {
        (false, false) => Dimensions::Xy,
        (true, false) => Dimensions::Xyz,
        (false, true) => Dimensions::Xym,
        (true, true) => Dimensions::Xyzm,
    }
}

impl From<(GeometryTypeId, Dimensions)> for GeometryTypeAndDimensions {
    fn from(value: (GeometryTypeId, Dimensions)) -> Self {
        Self {
            geometry_type: value.0,
            dimensions: value.1,
        }
    }
}

impl Display for GeometryTypeAndDimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let suffix = match self.dimensions {
            Dimensions::Xy => "",
            Dimensions::Xyz => " Z",
            Dimensions::Xym => " M",
            Dimensions::Xyzm => " ZM",
            Dimensions::Unknown(_) => " Unknown",
        };

        f.write_str(self.geometry_type.camel_case_name())?;
        f.write_str(suffix)
    }
}

impl FromStr for GeometryTypeAndDimensions {
    type Err = SimpleFeaturesError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let mut parts = value.split_ascii_whitespace();
        let geometry_type = match parts.next() {
            Some(maybe_geometry_type) => GeometryTypeId::from_str(maybe_geometry_type)?,
            None => {
                return Err(SimpleFeaturesError::Invalid(format!(
                    "Invalid geometry type string: '{value}'"
                )))
            }
        };

        let dimensions = match parts.next() {
            Some(maybe_dimensions) => match maybe_dimensions {
                "z" | "Z" => Dimensions::Xyz,
                "m" | "M" => Dimensions::Xym,
                "zm" | "ZM" => Dimensions::Xyzm,
                _ => {
                    return Err(SimpleFeaturesError::Invalid(format!(
                        "invalid geometry type string: '{value}'"
                    )))
                }
            },
            None => Dimensions::Xy,
        };

        if parts.next().is_some() {
            return Err(SimpleFeaturesError::Invalid(format!(
                "invalid geometry type string: '{value}'"
            )));
        }

        Ok(Self {
            geometry_type,
            dimensions,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use rstest::rstest;
    use Dimensions::*;
    use GeometryTypeId::*;

    #[test]
    fn geometry_type_wkb_id_roundtrip() {
        for (i, geometry_type) in ALL_GEOMETRY_TYPES.iter().enumerate() {
            assert_eq!(geometry_type.wkb_id(), i as u32);
            assert_eq!(
                GeometryTypeId::try_from_wkb_id(i as u32).unwrap(),
                *geometry_type
            );
        }
    }

    #[test]
    fn geometry_type_wkb_id_err() {
        let err = GeometryTypeId::try_from_wkb_id(18).unwrap_err();
        assert_eq!(err.to_string(), "Unknown geometry type identifier 18");
    }

    #[rstest]
    fn geometry_type_str(
        #[values(
            (Geometry, "GEOMETRY"),
            (LineString, "LINESTRING"),
            (CircularString, "CIRCULARSTRING"),
            (PolyhedralSurface, "POLYHEDRALSURFACE"),
            (Tin, "TIN"),
            (Triangle, "TRIANGLE")
        )]
        geometry_type_and_str: (GeometryTypeId, &str),
    ) {
        let (geometry_type, string) = geometry_type_and_str;
        assert_eq!(geometry_type.to_string(), string);
        assert_eq!(GeometryTypeId::from_str(string).unwrap(), geometry_type);
        assert_eq!(
            GeometryTypeId::from_str(geometry_type.camel_case_name()).unwrap(),
            geometry_type
        );
    }

    #[test]
    fn geometry_type_str_err() {
        let err = GeometryTypeId::from_str("gazornenplat").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid geometry type string: 'gazornenplat'"
        );
    }

    #[test]
    fn abstract_types() {
        let abstract_types: Vec<_> = ALL_GEOMETRY_TYPES
            .iter()
            .filter(|t| t.is_abstract())
            .copied()
            .collect();
        assert_eq!(abstract_types, vec![Geometry, Curve, Surface]);
    }

    #[rstest]
    #[case(Geometry, Triangle, true)]
    #[case(Geometry, GeometryCollection, true)]
    #[case(Curve, LineString, true)]
    #[case(Curve, CircularString, true)]
    #[case(Curve, CompoundCurve, true)]
    #[case(Curve, Polygon, false)]
    #[case(Curve, MultiLineString, false)]
    #[case(Surface, Polygon, true)]
    #[case(Surface, CurvePolygon, true)]
    #[case(Surface, Tin, true)]
    #[case(Surface, LineString, false)]
    #[case(LineString, LineString, true)]
    #[case(LineString, CircularString, false)]
    #[case(Polygon, Triangle, false)]
    #[case(Point, MultiPoint, false)]
    fn expected_type_accepts(
        #[case] expected: GeometryTypeId,
        #[case] actual: GeometryTypeId,
        #[case] accepted: bool,
    ) {
        assert_eq!(expected.accepts(actual), accepted);
    }

    #[rstest]
    fn geometry_type_dims_wkb_id_roundtrip(
        #[values(Point, LineString, Polygon, CompoundCurve, Tin, Triangle)]
        geometry_type: GeometryTypeId,
        #[values(
            (Xy, 0),
            (Xyz, 1000),
            (Xym, 2000),
            (Xyzm, 3000),
        )]
        dimensions_and_id: (Dimensions, u32),
    ) {
        let (dimensions, dimensions_id) = dimensions_and_id;

        let value = GeometryTypeAndDimensions::new(geometry_type, dimensions);
        assert_eq!(value.wkb_id(), dimensions_id + geometry_type.wkb_id());
        assert_eq!(
            GeometryTypeAndDimensions::try_from_wkb_id(dimensions_id + geometry_type.wkb_id())
                .unwrap(),
            value
        );
    }

    #[test]
    fn dimension_flags() {
        let value = GeometryTypeAndDimensions::from_flags(Point, true, false);
        assert_eq!(value.wkb_id(), 1001);
        assert!(value.has_z());
        assert!(!value.has_m());

        let value = GeometryTypeAndDimensions::from_flags(Point, false, true);
        assert_eq!(value.wkb_id(), 2001);
        assert!(!value.has_z());
        assert!(value.has_m());

        let value = GeometryTypeAndDimensions::from_flags(Point, true, true);
        assert_eq!(value.wkb_id(), 3001);
        assert!(value.has_z() && value.has_m());
    }

    #[test]
    fn geometry_type_dims_wkb_id_err() {
        let err = GeometryTypeAndDimensions::try_from_wkb_id(18).unwrap_err();
        assert_eq!(err.to_string(), "Unknown geometry type identifier 18");

        let err = GeometryTypeAndDimensions::try_from_wkb_id(4001).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown dimensions in ISO WKB geometry type: 4001"
        );
    }

    #[rstest]
    fn geometry_type_dims_str_roundtrip(
        #[values(Point, MultiCurve, CurvePolygon, PolyhedralSurface)] geometry_type: GeometryTypeId,
        #[values(
            (Xy, ""),
            (Xyz, " Z"),
            (Xym, " M"),
            (Xyzm, " ZM"),
        )]
        dimensions_and_suffix: (Dimensions, &str),
    ) {
        let (dimensions, suffix) = dimensions_and_suffix;
        let string_id = geometry_type.camel_case_name().to_string() + suffix;

        let value = GeometryTypeAndDimensions::new(geometry_type, dimensions);
        assert_eq!(value.to_string(), string_id);
        assert_eq!(
            GeometryTypeAndDimensions::from_str(string_id.as_str()).unwrap(),
            value
        );
    }

    #[test]
    fn geometry_type_dims_serde() {
        let value = GeometryTypeAndDimensions::new(CompoundCurve, Xyzm);
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, "\"CompoundCurve ZM\"");

        let deserialized: GeometryTypeAndDimensions = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, value);

        let err = serde_json::from_str::<GeometryTypeAndDimensions>("\"Point XYZ\"");
        assert!(err.is_err());
    }
}
