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
use std::io::Write;

use byteorder::{BigEndian, ByteOrder as ByteOrderTrait, LittleEndian, WriteBytesExt};

use crate::{
    error::SimpleFeaturesError,
    geom::{Curve, Geometry, LineString, Point, Polygon},
    options::WriteOptions,
    types::{GeometryTypeAndDimensions, GeometryTypeId},
    wkb::ByteOrder,
};

/// A [byteorder::ByteOrder] with its WKB marker byte
pub trait WkbByteOrder: ByteOrderTrait {
    const MARKER: u8;
}

impl WkbByteOrder for BigEndian {
    const MARKER: u8 = 0;
}

impl WkbByteOrder for LittleEndian {
    const MARKER: u8 = 1;
}

/// Write a geometry as ISO WKB
///
/// Nested geometries are written with the same byte order as their parent.
pub fn write_geometry(
    out: &mut impl Write,
    geometry: &Geometry,
    options: &WriteOptions,
) -> Result<(), SimpleFeaturesError> {
    match options.byte_order {
        ByteOrder::BigEndian => write_geometry_ordered::<BigEndian>(out, geometry),
        ByteOrder::LittleEndian => write_geometry_ordered::<LittleEndian>(out, geometry),
    }
}

/// Encode a geometry as an ISO WKB buffer
pub fn to_wkb(
    geometry: &Geometry,
    options: &WriteOptions,
) -> Result<Vec<u8>, SimpleFeaturesError> {
    let mut out = Vec::new();
    write_geometry(&mut out, geometry, options)?;
    Ok(out)
}

fn write_geometry_ordered<B: WkbByteOrder>(
    out: &mut impl Write,
    geometry: &Geometry,
) -> Result<(), SimpleFeaturesError> {
    let has_z = geometry.has_z();
    let has_m = geometry.has_m();
    write_header::<B>(out, geometry.geometry_type(), has_z, has_m)?;

    match geometry {
        Geometry::Point(point) => write_coord::<B>(out, point, has_z, has_m),
        Geometry::LineString(line) | Geometry::CircularString(line) => {
            write_coords::<B>(out, line, has_z, has_m)
        }
        Geometry::Polygon(polygon) | Geometry::Triangle(polygon) => {
            write_rings::<B>(out, polygon, has_z, has_m)
        }
        Geometry::MultiPoint(multi) => {
            write_count::<B>(out, multi.num_points())?;
            for point in multi.points() {
                write_point::<B>(out, point)?;
            }
            Ok(())
        }
        Geometry::MultiLineString(multi) => {
            write_count::<B>(out, multi.num_line_strings())?;
            for line in multi.line_strings() {
                write_line_string::<B>(out, GeometryTypeId::LineString, line)?;
            }
            Ok(())
        }
        Geometry::CompoundCurve(curve) => {
            write_count::<B>(out, curve.num_line_strings())?;
            for line in curve.line_strings() {
                write_line_string::<B>(out, GeometryTypeId::LineString, line)?;
            }
            Ok(())
        }
        Geometry::MultiPolygon(multi) => {
            write_count::<B>(out, multi.num_polygons())?;
            for polygon in multi.polygons() {
                write_polygon::<B>(out, polygon)?;
            }
            Ok(())
        }
        Geometry::PolyhedralSurface(surface) | Geometry::Tin(surface) => {
            write_count::<B>(out, surface.num_polygons())?;
            for polygon in surface.polygons() {
                write_polygon::<B>(out, polygon)?;
            }
            Ok(())
        }
        Geometry::CurvePolygon(polygon) => {
            write_count::<B>(out, polygon.num_rings())?;
            for ring in polygon.rings() {
                write_curve::<B>(out, ring)?;
            }
            Ok(())
        }
        Geometry::GeometryCollection(collection)
        | Geometry::MultiCurve(collection)
        | Geometry::MultiSurface(collection) => {
            write_count::<B>(out, collection.num_geometries())?;
            for member in collection.geometries() {
                write_geometry_ordered::<B>(out, member)?;
            }
            Ok(())
        }
    }
}

fn write_header<B: WkbByteOrder>(
    out: &mut impl Write,
    geometry_type: GeometryTypeId,
    has_z: bool,
    has_m: bool,
) -> Result<(), SimpleFeaturesError> {
    let type_and_dimensions = GeometryTypeAndDimensions::from_flags(geometry_type, has_z, has_m);
    log::trace!("Writing {type_and_dimensions}");
    out.write_u8(B::MARKER)?;
    out.write_u32::<B>(type_and_dimensions.wkb_id())?;
    Ok(())
}

fn write_point<B: WkbByteOrder>(
    out: &mut impl Write,
    point: &Point,
) -> Result<(), SimpleFeaturesError> {
    write_header::<B>(out, GeometryTypeId::Point, point.has_z(), point.has_m())?;
    write_coord::<B>(out, point, point.has_z(), point.has_m())
}

fn write_line_string<B: WkbByteOrder>(
    out: &mut impl Write,
    geometry_type: GeometryTypeId,
    line: &LineString,
) -> Result<(), SimpleFeaturesError> {
    write_header::<B>(out, geometry_type, line.has_z(), line.has_m())?;
    write_coords::<B>(out, line, line.has_z(), line.has_m())
}

fn write_polygon<B: WkbByteOrder>(
    out: &mut impl Write,
    polygon: &Polygon,
) -> Result<(), SimpleFeaturesError> {
    write_header::<B>(out, GeometryTypeId::Polygon, polygon.has_z(), polygon.has_m())?;
    write_rings::<B>(out, polygon, polygon.has_z(), polygon.has_m())
}

fn write_curve<B: WkbByteOrder>(
    out: &mut impl Write,
    curve: &Curve,
) -> Result<(), SimpleFeaturesError> {
    match curve {
        Curve::LineString(line) => write_line_string::<B>(out, GeometryTypeId::LineString, line),
        Curve::CircularString(line) => {
            write_line_string::<B>(out, GeometryTypeId::CircularString, line)
        }
        Curve::CompoundCurve(compound) => {
            write_header::<B>(
                out,
                GeometryTypeId::CompoundCurve,
                compound.has_z(),
                compound.has_m(),
            )?;
            write_count::<B>(out, compound.num_line_strings())?;
            for line in compound.line_strings() {
                write_line_string::<B>(out, GeometryTypeId::LineString, line)?;
            }
            Ok(())
        }
    }
}

/// Write the rings of a Polygon or Triangle inline using the enclosing
/// geometry's dimensions
fn write_rings<B: WkbByteOrder>(
    out: &mut impl Write,
    polygon: &Polygon,
    has_z: bool,
    has_m: bool,
) -> Result<(), SimpleFeaturesError> {
    write_count::<B>(out, polygon.num_rings())?;
    for ring in polygon.rings() {
        write_coords::<B>(out, ring, has_z, has_m)?;
    }
    Ok(())
}

fn write_coords<B: WkbByteOrder>(
    out: &mut impl Write,
    line: &LineString,
    has_z: bool,
    has_m: bool,
) -> Result<(), SimpleFeaturesError> {
    write_count::<B>(out, line.num_points())?;
    for point in line.points() {
        write_coord::<B>(out, point, has_z, has_m)?;
    }
    Ok(())
}

/// Write the ordinates of a point inline
///
/// Inline points must carry every ordinate the enclosing geometry declares;
/// ordinates the enclosing geometry does not declare are dropped.
fn write_coord<B: WkbByteOrder>(
    out: &mut impl Write,
    point: &Point,
    has_z: bool,
    has_m: bool,
) -> Result<(), SimpleFeaturesError> {
    out.write_f64::<B>(point.x)?;
    out.write_f64::<B>(point.y)?;
    if has_z {
        let z = point.z.ok_or_else(|| missing_ordinate("Z", point))?;
        out.write_f64::<B>(z)?;
    }
    if has_m {
        let m = point.m.ok_or_else(|| missing_ordinate("M", point))?;
        out.write_f64::<B>(m)?;
    }
    Ok(())
}

fn missing_ordinate(ordinate: &str, point: &Point) -> SimpleFeaturesError {
    SimpleFeaturesError::Invalid(format!(
        "Can't write point ({} {}) without {ordinate} in a geometry with {ordinate}",
        point.x, point.y
    ))
}

fn write_count<B: WkbByteOrder>(
    out: &mut impl Write,
    count: usize,
) -> Result<(), SimpleFeaturesError> {
    out.write_i32::<B>(i32::try_from(count)?)?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        geom::{CompoundCurve, CurvePolygon, GeometryCollection, MultiPoint},
        wkb::read_geometry,
    };
    use rstest::rstest;

    fn little_endian() -> WriteOptions {
        WriteOptions {
            byte_order: ByteOrder::LittleEndian,
        }
    }

    #[test]
    fn write_point_bytes() {
        let point = Geometry::Point(Point::new(1.0, 2.0));

        let big = to_wkb(&point, &WriteOptions::default()).unwrap();
        assert_eq!(
            big,
            vec![
                0x00, 0x00, 0x00, 0x00, 0x01, 0x3f, 0xf0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
                0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00
            ]
        );

        let little = to_wkb(&point, &little_endian()).unwrap();
        assert_eq!(
            little,
            vec![
                0x01, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xf0, 0x3f,
                0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x40
            ]
        );
    }

    #[test]
    fn write_line_string_zm_bytes() {
        let line = LineString::from_points(true, true, vec![Point::new_zm(1.0, 2.0, 3.0, 4.0)]);
        let wkb = to_wkb(&Geometry::LineString(line), &little_endian()).unwrap();

        let mut expected = vec![0x01];
        expected.extend_from_slice(&3002u32.to_le_bytes());
        expected.extend_from_slice(&1i32.to_le_bytes());
        for value in [1.0f64, 2.0, 3.0, 4.0] {
            expected.extend_from_slice(&value.to_le_bytes());
        }
        assert_eq!(wkb, expected);
    }

    #[test]
    fn nested_geometries_use_parent_byte_order() {
        let multi = MultiPoint::from_points(
            false,
            true,
            vec![Point::new_m(1.0, 2.0, 3.0), Point::new_m(4.0, 5.0, 6.0)],
        );
        let wkb = to_wkb(&Geometry::MultiPoint(multi), &WriteOptions::default()).unwrap();

        // header + count + two points of 1 + 4 + 24 bytes
        assert_eq!(wkb.len(), 5 + 4 + 2 * 29);
        assert_eq!(&wkb[..9], &[0x00, 0x00, 0x00, 0x07, 0xd4, 0x00, 0x00, 0x00, 0x02]);
        assert_eq!(&wkb[9..14], &[0x00, 0x00, 0x00, 0x07, 0xd1]);
        assert_eq!(&wkb[38..43], &[0x00, 0x00, 0x00, 0x07, 0xd1]);
    }

    #[test]
    fn curve_polygon_rings_are_nested_geometries() {
        let mut compound = CompoundCurve::new(false, false);
        compound.add_line_string(LineString::from_xy([(0.0, 0.0), (1.0, 0.0)]));
        let polygon = CurvePolygon::from_rings(
            false,
            false,
            vec![
                Curve::CircularString(LineString::from_xy([(0.0, 0.0)])),
                Curve::CompoundCurve(compound),
            ],
        );
        let geometry = Geometry::CurvePolygon(polygon);
        let wkb = to_wkb(&geometry, &little_endian()).unwrap();

        // CURVEPOLYGON header and count, then a CIRCULARSTRING header
        assert_eq!(&wkb[..5], &[0x01, 10, 0, 0, 0]);
        assert_eq!(&wkb[5..9], &2i32.to_le_bytes());
        assert_eq!(&wkb[9..14], &[0x01, 8, 0, 0, 0]);
        assert_eq!(read_geometry(&wkb).unwrap(), geometry);
    }

    #[rstest]
    fn write_then_read(
        #[values(ByteOrder::BigEndian, ByteOrder::LittleEndian)] byte_order: ByteOrder,
    ) {
        let mut collection = GeometryCollection::new(false, false);
        collection.add_geometry(Point::new(1.0, 2.0));
        collection.add_geometry(Geometry::Triangle(Polygon::from_rings(
            false,
            false,
            vec![LineString::from_xy([
                (0.0, 0.0),
                (1.0, 0.0),
                (0.0, 1.0),
                (0.0, 0.0),
            ])],
        )));
        collection.add_geometry(Geometry::MultiCurve(GeometryCollection::new(false, false)));
        let geometry = Geometry::GeometryCollection(collection);

        let options = WriteOptions { byte_order };
        let wkb = to_wkb(&geometry, &options).unwrap();
        assert_eq!(wkb[0], byte_order.marker());
        assert_eq!(read_geometry(&wkb).unwrap(), geometry);
    }

    #[test]
    fn missing_ordinates_are_an_error() {
        let line = LineString::from_points(true, false, vec![Point::new(1.0, 2.0)]);
        let err = to_wkb(&Geometry::LineString(line), &WriteOptions::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Can't write point (1 2) without Z in a geometry with Z"
        );
    }

    #[test]
    fn extra_ordinates_are_dropped() {
        let line = LineString::from_points(false, false, vec![Point::new_z(1.0, 2.0, 3.0)]);
        let wkb = to_wkb(&Geometry::LineString(line), &WriteOptions::default()).unwrap();
        assert_eq!(
            read_geometry(&wkb).unwrap(),
            Geometry::LineString(LineString::from_xy([(1.0, 2.0)]))
        );
    }
}
