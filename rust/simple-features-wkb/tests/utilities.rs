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
use rand::{rngs::StdRng, Rng, SeedableRng};
use rstest::rstest;
use simple_features_testing::{
    compare::assert_point_near,
    create::make_geometry,
    datagen::{RandomGeometryGenerator, CONCRETE_GEOMETRY_TYPES},
};
use simple_features_wkb::{
    algorithm::{
        distance, get_centroid, get_dimension, minimize_geometry, normalize_geometry,
        point_in_polygon, simplify_geometry, simplify_points,
    },
    envelope::build_envelope,
    geom::{Geometry, LineString, Point, Polygon},
    options::WriteOptions,
    types::GeometryTypeId,
    wkb::{read_geometry, to_wkb},
};

const HALF_WORLD_WIDTH: f64 = 20037508.342789244;

#[rstest]
fn centroid_is_within_envelope(#[values(1, 2, 3)] seed: u64) {
    let mut generator = RandomGeometryGenerator::new(seed);
    for geometry_type in CONCRETE_GEOMETRY_TYPES {
        for _ in 0..10 {
            let geometry = generator.geometry(geometry_type);
            let centroid = get_centroid(&geometry).unwrap();
            let envelope = build_envelope(&geometry).unwrap();

            if geometry_type == GeometryTypeId::Point {
                assert_eq!(centroid.x, envelope.min_x);
                assert_eq!(centroid.x, envelope.max_x);
                assert_eq!(centroid.y, envelope.min_y);
                assert_eq!(centroid.y, envelope.max_y);
            }

            let tolerance = 1e-9;
            assert!(
                centroid.x >= envelope.min_x - tolerance
                    && centroid.x <= envelope.max_x + tolerance,
                "{geometry_type} centroid x {} outside [{}, {}]",
                centroid.x,
                envelope.min_x,
                envelope.max_x
            );
            assert!(
                centroid.y >= envelope.min_y - tolerance
                    && centroid.y <= envelope.max_y + tolerance,
                "{geometry_type} centroid y {} outside [{}, {}]",
                centroid.y,
                envelope.min_y,
                envelope.max_y
            );
        }
    }
}

#[test]
fn centroid_survives_wkb() {
    let geometry = make_geometry(
        "POLYGON ((-90 45, -90 -45, 90 -45, 90 45), (0 45, 0 0, 90 0, 90 45))",
    );
    assert_eq!(get_dimension(&geometry), 2);

    let centroid = get_centroid(&geometry).unwrap();
    assert_point_near(&centroid, &Point::new(-15.0, -7.5), 1e-12);

    let wkb = to_wkb(&geometry, &WriteOptions::default()).unwrap();
    let decoded = read_geometry(&wkb).unwrap();
    assert_eq!(get_centroid(&decoded), Some(centroid));
}

#[test]
fn dimension_of_wkt_geometries() {
    assert_eq!(get_dimension(&make_geometry("MULTIPOINT ((0 0), (1 1))")), 0);
    assert_eq!(get_dimension(&make_geometry("LINESTRING (0 0, 1 1)")), 1);
    assert_eq!(
        get_dimension(&make_geometry(
            "GEOMETRYCOLLECTION (POINT (0 0), LINESTRING (0 0, 1 1))"
        )),
        1
    );
    assert_eq!(
        get_dimension(&make_geometry(
            "GEOMETRYCOLLECTION (POINT (0 0), POLYGON ((0 0, 1 0, 1 1, 0 0)))"
        )),
        2
    );
}

#[test]
fn point_in_decoded_polygon() {
    let geometry = make_geometry("POLYGON ((0 5, 5 0, 10 5, 5 10, 0 5))");
    let Geometry::Polygon(polygon) = geometry else {
        panic!("Expected a Polygon");
    };
    let ring = polygon.exterior_ring().unwrap().points();

    assert!(point_in_polygon(&Point::new(5.0, 5.0), ring));
    assert!(point_in_polygon(&Point::new(2.5, 7.5), ring));
    assert!(!point_in_polygon(&Point::new(0.0, 0.0), ring));
    assert!(!point_in_polygon(&Point::new(2.5 - 1e-7, 7.5 + 1e-7), ring));
}

/// A random walk of 100 points with steps of up to 100km in web mercator
fn random_walk(rng: &mut StdRng) -> Vec<Point> {
    let mut x = rng.gen_range(-HALF_WORLD_WIDTH..HALF_WORLD_WIDTH);
    let mut y = rng.gen_range(-HALF_WORLD_WIDTH..HALF_WORLD_WIDTH);
    let mut points = vec![Point::new(x, y)];

    for _ in 1..100 {
        let sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        x += 100000.0 * rng.gen::<f64>() * sign;

        let sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        let y_change = 100000.0 * rng.gen::<f64>() * sign;
        y += y_change;
        if !(-HALF_WORLD_WIDTH..=HALF_WORLD_WIDTH).contains(&y) {
            y -= 2.0 * y_change;
        }

        points.push(Point::new(x, y));
    }

    points
}

#[rstest]
fn simplify_random_walk(#[values(7, 8, 9, 10)] seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let points = random_walk(&mut rng);

    let mut distances: Vec<f64> = points.windows(2).map(|w| distance(&w[0], &w[1])).collect();
    distances.sort_by(f64::total_cmp);
    let tolerance = distances[distances.len() / 2];

    let simplified = simplify_points(&points, tolerance);
    assert!(simplified.len() <= points.len());
    assert!(simplified.len() >= 2);
    assert_eq!(simplified.first(), points.first());
    assert_eq!(simplified.last(), points.last());

    // Kept points are far enough apart and appear in their original order
    let mut index = 0;
    for pair in simplified.windows(2) {
        assert!(distance(&pair[0], &pair[1]) >= tolerance);

        index += 1;
        while index < points.len() && !points[index].xy_equals(&pair[1]) {
            index += 1;
        }
        assert!(index < points.len());
    }

    let mut geometry = Geometry::LineString(LineString::from_points(false, false, points));
    simplify_geometry(&mut geometry, tolerance);
    assert_eq!(
        geometry,
        Geometry::LineString(LineString::from_points(false, false, simplified))
    );
}

#[rstest]
fn minimize_and_normalize(#[values(21, 22, 23, 24, 25, 26)] seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let eastward = rng.gen_bool(0.5);

    // Two points east of 90 and two west of -91, in either order
    let mut random_point = |min_x: f64, max_x: f64| {
        Point::new(rng.gen_range(min_x..max_x), rng.gen_range(-90.0..0.0))
    };
    let (first, second) = if eastward {
        ((90.0, 180.0), (-179.0, -91.0))
    } else {
        ((-179.0, -91.0), (90.0, 180.0))
    };
    let ring_points = vec![
        random_point(first.0, first.1),
        random_point(first.0, first.1),
        random_point(second.0, second.1),
        random_point(second.0, second.1),
    ];

    let ring = LineString::from_points(false, false, ring_points.clone());
    let polygon = Geometry::Polygon(Polygon::from_rings(false, false, vec![ring]));

    let mut minimized = polygon.clone();
    minimize_geometry(&mut minimized, 180.0);
    let mut normalized = minimized.clone();
    normalize_geometry(&mut normalized, 180.0);

    let minimized_points = points_of(&minimized);
    let normalized_points = points_of(&normalized);
    for (i, point) in ring_points.iter().enumerate() {
        assert!((point.y - minimized_points[i].y).abs() < 1e-10);
        assert!((point.y - normalized_points[i].y).abs() < 1e-10);
        assert!((point.x - normalized_points[i].x).abs() < 1e-10);

        let expected_shift = match (i < 2, eastward) {
            (true, _) => 0.0,
            (false, true) => 360.0,
            (false, false) => -360.0,
        };
        assert!((point.x + expected_shift - minimized_points[i].x).abs() < 1e-10);
    }

    // The original is untouched
    assert_eq!(points_of(&polygon), ring_points);
}

fn points_of(geometry: &Geometry) -> Vec<Point> {
    let mut points = vec![];
    geometry.for_each_point(&mut |point| points.push(*point));
    points
}
