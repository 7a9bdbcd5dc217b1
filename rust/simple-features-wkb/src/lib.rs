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
//! OGC Simple Features geometries with an ISO Well-Known Binary codec
//!
//! The [geom] module holds the geometry model, [wkb] reads and writes it, and
//! [algorithm] computes dimensions, centroids, containment, simplification,
//! and antimeridian adjustments over it.
pub mod algorithm;
pub mod envelope;
pub mod error;
pub mod geom;
pub mod options;
pub mod types;
pub mod wkb;
