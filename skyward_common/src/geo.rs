/*
 * Copyright © 2026, the SKYWARD project developers. All rights reserved.
 *
 * The "SKYWARD" software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */
#![allow(unused)]

//! spherical geometry on a R=6371km earth. The radar pipeline needs exact numeric
//! reproducibility for distance/bearing values, hence the haversine and forward-azimuth
//! formulas are computed directly on f64 degrees instead of going through a geodesy crate

use std::fmt;
use serde::{Serialize,Deserialize};

use crate::{sin2,atan2};
use crate::angle::{normalize_90,normalize_180,normalize_360};

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// geodetic position in degrees. Note we support alternative input field spellings so
/// that the type directly deserializes from the various aircraft-position feeds
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct GeoPos {
    #[serde(alias="latitude")]
    pub lat: f64,

    #[serde(alias="longitude")]
    pub lon: f64,
}

impl GeoPos {
    pub fn from_lat_lon_degrees (lat: f64, lon: f64)->Self {
        GeoPos { lat: normalize_90(lat), lon: normalize_180(lon) }
    }
}

impl fmt::Display for GeoPos {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.lat, self.lon)
    }
}

/// great-circle distance in km between two geodetic positions (haversine formula).
/// Symmetric, and zero for identical positions
pub fn haversine_km (a: &GeoPos, b: &GeoPos)->f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = (b.lat - a.lat).to_radians();
    let dlon = (b.lon - a.lon).to_radians();

    let h = sin2(dlat / 2.0) + lat1.cos() * lat2.cos() * sin2(dlon / 2.0);
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

/// initial bearing in degrees from `a` to `b` (forward azimuth), normalized to [0,360)
pub fn bearing_deg (a: &GeoPos, b: &GeoPos)->f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlon = (b.lon - a.lon).to_radians();

    let y = dlon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();

    normalize_360( atan2(y, x).to_degrees())
}
