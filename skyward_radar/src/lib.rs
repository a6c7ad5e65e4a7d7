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

//! the SKYWARD radar query service: polls public aircraft-position endpoints around a
//! coordinate, merges/filters/classifies what they report and selects a single tracked
//! aircraft per query with sticky-target semantics. The selected contact is enriched
//! with operator classification, route and weather data and served as JSON to the
//! display front-end.
//!
//! Queries are stateless - the only cross-query input is the caller-supplied id of the
//! previously tracked aircraft (see [`QueryRequest::prev_id`]), which the selector uses
//! for flutter avoidance.

use std::fmt;
use std::time::Duration;
use serde::{Deserialize,Serialize};
use chrono_tz::Tz;
use uom::si::f64::{Length,Velocity};
use uom::si::length::foot;
use uom::si::velocity::{knot,kilometer_per_hour};

use skyward_common::geo::{GeoPos,haversine_km,bearing_deg};
use skyward_wx::WxConfig;

pub mod errors;
pub use errors::*;

pub mod sources;
use sources::SourceConfig;

pub mod classifier;
use classifier::{classify,Classification};

pub mod selector;

pub mod routes;
use routes::RouteConfig;

pub mod service;

/* #region data model *********************************************************************************/

/// what we know about one aircraft after source merge - ephemeral, rebuilt per query
#[derive(Debug,Clone)]
pub struct AircraftObservation {
    pub id: String,                      // ICAO 24bit hex code (the de-duplication key)
    pub pos: GeoPos,
    pub altitude: Length,                // 0 ft if the source reports "on ground"
    pub ground_speed: Velocity,
    pub heading_deg: f64,
    pub callsign: String,                // trimmed/uppercased, "N/A" if absent
    pub registration: Option<String>,
    pub aircraft_type: Option<String>,   // ICAO type code, feeds the classifier
    pub vertical_rate_fpm: Option<f64>,
    pub route_hint: Option<String>,      // origin-destination if the source already knows it
}

impl fmt::Display for AircraftObservation {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "AircraftObservation( id: {}, cs: \"{}\", pos: {}", self.id, self.callsign, self.pos)?;
        write!( f, ", alt: {:.0}ft", self.altitude.get::<foot>())?;
        write!( f, ", spd: {:.0}kt", self.ground_speed.get::<knot>())?;
        write!( f, ", hdg: {:.0} )", self.heading_deg)
    }
}

/// an in-radius observation with its derived per-query fields
#[derive(Debug,Clone)]
pub struct Candidate {
    pub obs: AircraftObservation,
    pub distance_km: f64,
    pub bearing_deg: f64,
    pub classification: Classification,
    pub eta_minutes: f64,
    pub route: Option<String>, // from the source hint - resolved lazily otherwise
}

impl Candidate {
    /// radius filter plus derived-field computation. Returns None if the observation
    /// is outside the query radius
    pub fn from_observation (obs: AircraftObservation, origin: &GeoPos, radius_km: f64)->Option<Candidate> {
        let distance_km = haversine_km( origin, &obs.pos);
        if distance_km > radius_km {
            return None
        }

        let bearing_deg = bearing_deg( origin, &obs.pos);
        let classification = classify( &obs.callsign, obs.aircraft_type.as_deref());

        let speed_kmh = obs.ground_speed.get::<kilometer_per_hour>();
        let eta_minutes = if speed_kmh > 0.0 { (distance_km / speed_kmh) * 60.0 } else { 0.0 };

        let route = obs.route_hint.clone();

        Some( Candidate { obs, distance_km, bearing_deg, classification, eta_minutes, route } )
    }
}

/// the outbound tracked-aircraft record
#[derive(Debug,Clone,Serialize)]
pub struct TrackedReport {
    pub id: String,
    #[serde(skip_serializing_if="skyward_common::is_none")]
    pub registration: Option<String>,
    pub callsign: String,

    pub operator: &'static str,
    pub color: &'static str,
    pub rare: bool,

    pub distance_km: f64, // one decimal
    pub bearing_deg: f64,
    pub altitude_ft: i64,
    pub speed_kmh: f64,
    pub speed_kt: f64,
    pub heading_deg: f64,
    pub lat: f64,
    pub lon: f64,

    pub route: String,
    pub eta_minutes: f64,
    #[serde(skip_serializing_if="skyward_common::is_none")]
    pub vertical_rate_fpm: Option<f64>,
}

impl TrackedReport {
    pub fn from_candidate (c: &Candidate, route: String)->Self {
        TrackedReport {
            id: c.obs.id.clone(),
            registration: c.obs.registration.clone(),
            callsign: c.obs.callsign.clone(),
            operator: c.classification.operator,
            color: c.classification.color,
            rare: c.classification.rare,
            distance_km: round1( c.distance_km),
            bearing_deg: round1( c.bearing_deg),
            altitude_ft: c.obs.altitude.get::<foot>().round() as i64,
            speed_kmh: round1( c.obs.ground_speed.get::<kilometer_per_hour>()),
            speed_kt: round1( c.obs.ground_speed.get::<knot>()),
            heading_deg: c.obs.heading_deg,
            lat: c.obs.pos.lat,
            lon: c.obs.pos.lon,
            route,
            eta_minutes: round1( c.eta_minutes),
            vertical_rate_fpm: c.obs.vertical_rate_fpm,
        }
    }
}

#[inline]
pub fn round1 (x: f64)->f64 { (x * 10.0).round() / 10.0 }

/// one radar query. `prev_id` is the id of the aircraft the caller was tracking in its
/// previous response - re-sent explicitly with every request, we keep no session state
#[derive(Debug,Clone)]
pub struct QueryRequest {
    pub pos: GeoPos,
    pub prev_id: Option<String>,
    pub test_mode: bool,
}

/// the complete outbound response
#[derive(Debug,Clone,Serialize)]
pub struct RadarResponse {
    pub tracked: Option<TrackedReport>,
    pub local_time: String,
    pub wx: skyward_wx::WxReport,
}

/* #endregion data model */

/* #region config *************************************************************************************/

#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct RadarConfig {
    /// aircraft-position endpoints, queried concurrently. Later sources win on
    /// duplicate aircraft ids
    pub sources: Vec<SourceConfig>,

    /// query radius in km. A policy choice, not a derived constant (reference
    /// deployments have used both 190 and 120)
    pub radius_km: f64,

    /// minimum distance improvement in km before the tracked target switches to a
    /// closer aircraft (flutter avoidance)
    pub hysteresis_km: f64,

    pub route: RouteConfig,
    pub wx: WxConfig,

    /// timezone for the date/time shown on the display
    pub display_tz: Tz,

    /// where the query server listens
    pub sock_addr: String,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            sources: vec![
                SourceConfig {
                    name: "adsb.lol".to_string(),
                    url_pattern: "https://api.adsb.lol/v2/point/${lat}/${lon}/${radius}".to_string(),
                    timeout: Duration::from_secs(6),
                },
                SourceConfig {
                    name: "airplanes.live".to_string(),
                    url_pattern: "https://api.airplanes.live/v2/point/${lat}/${lon}/${radius}".to_string(),
                    timeout: Duration::from_secs(6),
                },
            ],
            radius_km: 190.0,
            hysteresis_km: 5.0,
            route: RouteConfig::default(),
            wx: WxConfig::default(),
            display_tz: chrono_tz::America::Sao_Paulo,
            sock_addr: "0.0.0.0:8082".to_string(),
        }
    }
}

/* #endregion config */

/* #region test mode **********************************************************************************/

/// fixed synthetic aircraft returned in test mode, placed a constant offset NE of the
/// query point so that all derived fields go through the regular candidate path
pub fn synthetic_observation (origin: &GeoPos)->AircraftObservation {
    AircraftObservation {
        id: "e49405".to_string(),
        pos: GeoPos::from_lat_lon_degrees( origin.lat + 0.3, origin.lon + 0.3),
        altitude: Length::new::<foot>( 37000.0),
        ground_speed: Velocity::new::<knot>( 447.0),
        heading_deg: 225.0,
        callsign: "GLO1234".to_string(),
        registration: Some( "PR-GUO".to_string()),
        aircraft_type: Some( "B38M".to_string()),
        vertical_rate_fpm: Some( -640.0),
        route_hint: Some( "GRU-SDU".to_string()),
    }
}

pub fn synthetic_candidate (origin: &GeoPos)->Option<Candidate> {
    Candidate::from_observation( synthetic_observation(origin), origin, f64::INFINITY)
}

/* #endregion test mode */
