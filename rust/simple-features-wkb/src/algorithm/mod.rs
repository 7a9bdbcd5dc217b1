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
//! Geometric utilities over decoded geometries
//!
//! These operate on XY only; Z and M ordinates are carried along untouched
//! or ignored.
mod antimeridian;
mod centroid;
mod contains;
mod dimension;
mod simplify;

pub use antimeridian::{
    minimize_geometry, minimize_geometry_with_options, normalize_geometry,
    normalize_geometry_with_options,
};
pub use centroid::get_centroid;
pub use contains::{
    closed_polygon, distance, perpendicular_distance, point_in_polygon,
    point_in_polygon_with_epsilon, point_in_polygon_with_options, point_on_line,
    point_on_line_with_epsilon, point_on_line_with_options, point_on_path, point_on_polygon_edge,
    point_on_polygon_edge_with_epsilon, point_on_polygon_edge_with_options,
};
pub use dimension::get_dimension;
pub use simplify::{simplify_geometry, simplify_points};
