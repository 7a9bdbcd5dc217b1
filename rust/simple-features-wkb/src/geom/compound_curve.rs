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
use crate::geom::LineString;

/// A curve made of connected LineStrings
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompoundCurve {
    has_z: bool,
    has_m: bool,
    line_strings: Vec<LineString>,
}

impl CompoundCurve {
    pub fn new(has_z: bool, has_m: bool) -> Self {
        Self {
            has_z,
            has_m,
            line_strings: Vec::new(),
        }
    }

    pub fn from_line_strings(has_z: bool, has_m: bool, line_strings: Vec<LineString>) -> Self {
        Self {
            has_z,
            has_m,
            line_strings,
        }
    }

    pub fn has_z(&self) -> bool {
        self.has_z
    }

    pub fn has_m(&self) -> bool {
        self.has_m
    }

    pub fn line_strings(&self) -> &[LineString] {
        &self.line_strings
    }

    pub fn line_strings_mut(&mut self) -> &mut Vec<LineString> {
        &mut self.line_strings
    }

    pub fn set_line_strings(&mut self, line_strings: Vec<LineString>) {
        self.line_strings = line_strings;
    }

    pub fn add_line_string(&mut self, line_string: LineString) {
        self.line_strings.push(line_string);
    }

    pub fn num_line_strings(&self) -> usize {
        self.line_strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.line_strings.is_empty()
    }

    /// Total number of points across all member LineStrings
    pub fn num_points(&self) -> usize {
        self.line_strings.iter().map(LineString::num_points).sum()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn compound_curve_accessors() {
        let mut curve = CompoundCurve::new(false, true);
        assert!(!curve.has_z());
        assert!(curve.has_m());
        assert!(curve.is_empty());

        curve.add_line_string(LineString::from_xy([(0.0, 0.0), (1.0, 0.0)]));
        curve.add_line_string(LineString::from_xy([(1.0, 0.0), (1.0, 1.0), (2.0, 2.0)]));
        assert_eq!(curve.num_line_strings(), 2);
        assert_eq!(curve.num_points(), 5);

        let copy = curve.clone();
        curve.line_strings_mut().pop();
        assert_eq!(copy.num_line_strings(), 2);
        assert_eq!(curve.num_line_strings(), 1);
    }
}
