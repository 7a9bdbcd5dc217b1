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
use std::io::Cursor;

use byteorder::{BigEndian, ByteOrder as ByteOrderTrait, LittleEndian, ReadBytesExt};

use crate::{
    error::SimpleFeaturesError,
    geom::{
        CompoundCurve, Curve, CurvePolygon, Geometry, GeometryCollection, LineString,
        MultiLineString, MultiPoint, MultiPolygon, Point, Polygon, PolyhedralSurface,
    },
    options::ReadOptions,
    types::{GeometryTypeAndDimensions, GeometryTypeId},
    wkb::ByteOrder,
};

/// Smallest possible encoding of a nested geometry (marker and type code)
const MIN_NESTED_GEOMETRY_SIZE: u64 = 5;

/// Smallest possible encoding of an inline ring (its point count)
const MIN_RING_SIZE: u64 = 4;

/// Read a geometry from a WKB buffer
///
/// Bytes after the end of the first geometry are ignored.
pub fn read_geometry(buf: &[u8]) -> Result<Geometry, SimpleFeaturesError> {
    read_geometry_with_options(buf, &ReadOptions::default())
}

/// Read a geometry from a WKB buffer with explicit [ReadOptions]
pub fn read_geometry_with_options(
    buf: &[u8],
    options: &ReadOptions,
) -> Result<Geometry, SimpleFeaturesError> {
    let mut cursor = Cursor::new(buf);
    read_geometry_from_cursor(&mut cursor, options)
}

/// Read the next geometry from a cursor
///
/// On success the cursor is positioned immediately after the geometry, so
/// consecutive geometries can be read from one buffer. On failure the cursor
/// position is unspecified.
pub fn read_geometry_from_cursor<T: AsRef<[u8]>>(
    cursor: &mut Cursor<T>,
    options: &ReadOptions,
) -> Result<Geometry, SimpleFeaturesError> {
    WkbReader::wrap(cursor, options).read()
}

/// Recursive WKB decoder over an in-memory cursor
///
/// The byte order is negotiated from each geometry's own marker and passed
/// down as a type parameter, so a nested geometry with a different byte order
/// never affects its siblings or parent.
pub struct WkbReader<'c, T: AsRef<[u8]>> {
    cursor: &'c mut Cursor<T>,
    max_num_field_value: i32,
    max_depth: usize,
    depth: usize,
}

impl<'c, T: AsRef<[u8]>> WkbReader<'c, T> {
    /// Wrap a cursor to read WKB
    pub fn wrap(cursor: &'c mut Cursor<T>, options: &ReadOptions) -> Self {
        Self {
            cursor,
            max_num_field_value: options.max_num_field_value,
            max_depth: options.max_depth,
            depth: 0,
        }
    }

    /// Read the next geometry of any type
    pub fn read(&mut self) -> Result<Geometry, SimpleFeaturesError> {
        self.read_expected(GeometryTypeId::Geometry)
    }

    /// Read the next geometry and check that `expected` accepts its type
    ///
    /// `expected` may be abstract (e.g., [GeometryTypeId::Curve] accepts any
    /// LineString, CircularString, or CompoundCurve). Nesting deeper than
    /// [ReadOptions::max_depth] is an error.
    pub fn read_expected(
        &mut self,
        expected: GeometryTypeId,
    ) -> Result<Geometry, SimpleFeaturesError> {
        self.depth += 1;
        let result = if self.depth > self.max_depth {
            Err(SimpleFeaturesError::Invalid(format!(
                "Invalid WKB: nesting depth {} at offset {} exceeds the maximum of {}",
                self.depth,
                self.cursor.position(),
                self.max_depth
            )))
        } else {
            self.read_nested(expected)
        };
        self.depth -= 1;
        result
    }

    fn read_nested(&mut self, expected: GeometryTypeId) -> Result<Geometry, SimpleFeaturesError> {
        self.ensure_remaining(1)?;
        match ByteOrder::from_marker(self.cursor.read_u8()?) {
            ByteOrder::BigEndian => self.read_geometry::<BigEndian>(expected),
            ByteOrder::LittleEndian => self.read_geometry::<LittleEndian>(expected),
        }
    }

    fn read_geometry<B: ByteOrderTrait>(
        &mut self,
        expected: GeometryTypeId,
    ) -> Result<Geometry, SimpleFeaturesError> {
        let offset = self.cursor.position();
        let code = self.read_u32::<B>()?;
        let type_and_dimensions = GeometryTypeAndDimensions::try_from_wkb_id(code)?;
        let geometry_type = type_and_dimensions.geometry_type();
        let has_z = type_and_dimensions.has_z();
        let has_m = type_and_dimensions.has_m();
        log::trace!("Reading {type_and_dimensions} at offset {offset}");

        if geometry_type.is_abstract() {
            return Err(SimpleFeaturesError::AbstractGeometryType(geometry_type));
        }

        if !expected.accepts(geometry_type) {
            return Err(SimpleFeaturesError::UnexpectedGeometryType {
                expected,
                actual: geometry_type,
            });
        }

        let geometry = match geometry_type {
            GeometryTypeId::Point => Geometry::Point(self.read_point::<B>(has_z, has_m)?),
            GeometryTypeId::LineString => {
                Geometry::LineString(self.read_line_string::<B>(has_z, has_m)?)
            }
            GeometryTypeId::CircularString => {
                Geometry::CircularString(self.read_line_string::<B>(has_z, has_m)?)
            }
            GeometryTypeId::Polygon => Geometry::Polygon(self.read_polygon::<B>(has_z, has_m)?),
            GeometryTypeId::Triangle => Geometry::Triangle(self.read_polygon::<B>(has_z, has_m)?),
            GeometryTypeId::MultiPoint => Geometry::MultiPoint(MultiPoint::from_points(
                has_z,
                has_m,
                self.read_members::<B, Point>(GeometryTypeId::Point)?,
            )),
            GeometryTypeId::MultiLineString => {
                Geometry::MultiLineString(MultiLineString::from_line_strings(
                    has_z,
                    has_m,
                    self.read_members::<B, LineString>(GeometryTypeId::LineString)?,
                ))
            }
            GeometryTypeId::MultiPolygon => Geometry::MultiPolygon(MultiPolygon::from_polygons(
                has_z,
                has_m,
                self.read_members::<B, Polygon>(GeometryTypeId::Polygon)?,
            )),
            GeometryTypeId::CompoundCurve => {
                Geometry::CompoundCurve(CompoundCurve::from_line_strings(
                    has_z,
                    has_m,
                    self.read_members::<B, LineString>(GeometryTypeId::LineString)?,
                ))
            }
            GeometryTypeId::CurvePolygon => Geometry::CurvePolygon(CurvePolygon::from_rings(
                has_z,
                has_m,
                self.read_members::<B, Curve>(GeometryTypeId::Curve)?,
            )),
            GeometryTypeId::PolyhedralSurface => Geometry::PolyhedralSurface(
                PolyhedralSurface::from_polygons(
                    has_z,
                    has_m,
                    self.read_members::<B, Polygon>(GeometryTypeId::Polygon)?,
                ),
            ),
            GeometryTypeId::Tin => Geometry::Tin(PolyhedralSurface::from_polygons(
                has_z,
                has_m,
                self.read_members::<B, Polygon>(GeometryTypeId::Polygon)?,
            )),
            GeometryTypeId::GeometryCollection => {
                Geometry::GeometryCollection(self.read_collection::<B>(has_z, has_m)?)
            }
            GeometryTypeId::MultiCurve => {
                Geometry::MultiCurve(self.read_collection::<B>(has_z, has_m)?)
            }
            GeometryTypeId::MultiSurface => {
                Geometry::MultiSurface(self.read_collection::<B>(has_z, has_m)?)
            }
            GeometryTypeId::Geometry | GeometryTypeId::Curve | GeometryTypeId::Surface => {
                return Err(SimpleFeaturesError::AbstractGeometryType(geometry_type))
            }
        };

        Ok(geometry)
    }

    fn read_point<B: ByteOrderTrait>(
        &mut self,
        has_z: bool,
        has_m: bool,
    ) -> Result<Point, SimpleFeaturesError> {
        let x = self.read_f64::<B>()?;
        let y = self.read_f64::<B>()?;
        let z = if has_z {
            Some(self.read_f64::<B>()?)
        } else {
            None
        };
        let m = if has_m {
            Some(self.read_f64::<B>()?)
        } else {
            None
        };

        Ok(Point { x, y, z, m })
    }

    fn read_line_string<B: ByteOrderTrait>(
        &mut self,
        has_z: bool,
        has_m: bool,
    ) -> Result<LineString, SimpleFeaturesError> {
        let point_size = 8 * (2 + has_z as u64 + has_m as u64);
        let num_points = self.read_count::<B>(point_size)?;
        let mut points = Vec::with_capacity(num_points);
        for _ in 0..num_points {
            points.push(self.read_point::<B>(has_z, has_m)?);
        }

        Ok(LineString::from_points(has_z, has_m, points))
    }

    fn read_polygon<B: ByteOrderTrait>(
        &mut self,
        has_z: bool,
        has_m: bool,
    ) -> Result<Polygon, SimpleFeaturesError> {
        let num_rings = self.read_count::<B>(MIN_RING_SIZE)?;
        let mut rings = Vec::with_capacity(num_rings);
        for _ in 0..num_rings {
            rings.push(self.read_line_string::<B>(has_z, has_m)?);
        }

        Ok(Polygon::from_rings(has_z, has_m, rings))
    }

    fn read_collection<B: ByteOrderTrait>(
        &mut self,
        has_z: bool,
        has_m: bool,
    ) -> Result<GeometryCollection, SimpleFeaturesError> {
        let num_geometries = self.read_count::<B>(MIN_NESTED_GEOMETRY_SIZE)?;
        let mut geometries = Vec::with_capacity(num_geometries);
        for _ in 0..num_geometries {
            geometries.push(self.read()?);
        }

        Ok(GeometryCollection::from_geometries(has_z, has_m, geometries))
    }

    /// Read a count followed by that many complete nested geometries
    fn read_members<B, G>(
        &mut self,
        expected: GeometryTypeId,
    ) -> Result<Vec<G>, SimpleFeaturesError>
    where
        B: ByteOrderTrait,
        G: TryFrom<Geometry, Error = SimpleFeaturesError>,
    {
        let num_members = self.read_count::<B>(MIN_NESTED_GEOMETRY_SIZE)?;
        let mut members = Vec::with_capacity(num_members);
        for _ in 0..num_members {
            members.push(G::try_from(self.read_expected(expected)?)?);
        }

        Ok(members)
    }

    /// Read a count and check it before anything is allocated for it
    fn read_count<B: ByteOrderTrait>(
        &mut self,
        min_element_size: u64,
    ) -> Result<usize, SimpleFeaturesError> {
        let offset = self.cursor.position();
        self.ensure_remaining(4)?;
        let count = self.cursor.read_i32::<B>()?;
        if count < 0 {
            return Err(SimpleFeaturesError::Invalid(format!(
                "Invalid WKB: negative count {count} at offset {offset}"
            )));
        }

        if count > self.max_num_field_value {
            return Err(SimpleFeaturesError::Invalid(format!(
                "Invalid WKB: count {count} at offset {offset} exceeds the maximum of {}",
                self.max_num_field_value
            )));
        }

        self.ensure_remaining(count as u64 * min_element_size)?;
        Ok(usize::try_from(count)?)
    }

    fn read_u32<B: ByteOrderTrait>(&mut self) -> Result<u32, SimpleFeaturesError> {
        self.ensure_remaining(4)?;
        Ok(self.cursor.read_u32::<B>()?)
    }

    fn read_f64<B: ByteOrderTrait>(&mut self) -> Result<f64, SimpleFeaturesError> {
        self.ensure_remaining(8)?;
        Ok(self.cursor.read_f64::<B>()?)
    }

    fn ensure_remaining(&self, needed: u64) -> Result<(), SimpleFeaturesError> {
        let offset = self.cursor.position();
        let len = self.cursor.get_ref().as_ref().len() as u64;
        if len.saturating_sub(offset) < needed {
            return Err(SimpleFeaturesError::BufferTooSmall { offset, needed });
        }

        Ok(())
    }
}
