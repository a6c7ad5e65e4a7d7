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

//! multi-source aircraft-position fetch. Every configured endpoint is queried with its
//! own timeout and may fail independently - failures are logged and swallowed, the merge
//! proceeds with whatever succeeded. An all-sources-failed query yields an empty set,
//! never an error.
//!
//! The wire format is the "v2 point" record shape shared by adsb.lol and airplanes.live
//! (`/v2/point/{lat}/{lon}/{radius-nm}` -> `{"ac":[..]}`)

use std::collections::HashMap;
use std::time::Duration;
use futures::future::join_all;
use reqwest::{Client,Response};
use serde::{Deserialize,Serialize};
use serde::de::DeserializeOwned;
use tracing::{debug,warn};
use uom::si::f64::{Length,Velocity};
use uom::si::length::foot;
use uom::si::velocity::knot;

use skyward_common::datetime::{de_duration_from_fractional_secs,ser_duration_as_fractional_secs};
use skyward_common::geo::GeoPos;

use crate::AircraftObservation;
use crate::errors::{Result,SkywardRadarError};

const NM_PER_KM: f64 = 0.539957;
const MAX_RADIUS_NM: f64 = 250.0; // what the v2 point endpoints accept

#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct SourceConfig {
    pub name: String,

    /// endpoint URL with `${lat}`, `${lon}` and `${radius}` fields expanded per query
    /// (radius in nautical miles)
    pub url_pattern: String,

    /// per-request timeout in fractional seconds
    #[serde(serialize_with="ser_duration_as_fractional_secs", deserialize_with="de_duration_from_fractional_secs")]
    pub timeout: Duration,
}

/// expand the `${..}` fields of a source url pattern
pub fn expand_url (pattern: &str, pos: &GeoPos, radius_km: f64)->String {
    let radius_nm = (radius_km * NM_PER_KM).ceil().min( MAX_RADIUS_NM);

    pattern
        .replace( "${lat}", &format!("{:.4}", pos.lat))
        .replace( "${lon}", &format!("{:.4}", pos.lon))
        .replace( "${radius}", &format!("{:.0}", radius_nm))
}

/* #region wire format ********************************************************************************/

/// `alt_baro` is either feet or the string "ground". The v2 point APIs emit no other
/// string payload; should one ever appear it is treated like "ground" (0 ft) rather
/// than failing the whole response envelope
#[derive(Debug,Clone,Deserialize)]
#[serde(untagged)]
pub enum AltBaro {
    Feet(f64),
    OnGround(String),
}

impl AltBaro {
    pub fn feet (&self)->f64 {
        match self {
            AltBaro::Feet(ft) => *ft,
            AltBaro::OnGround(_) => 0.0,
        }
    }
}

#[derive(Debug,Clone,Deserialize)]
pub struct SourceRecord {
    pub hex: String,

    #[serde(default)]
    pub flight: Option<String>,
    #[serde(default)]
    pub r: Option<String>, // registration / tail number
    #[serde(default)]
    pub t: Option<String>, // ICAO type code

    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,

    #[serde(default)]
    pub alt_baro: Option<AltBaro>,
    #[serde(default)]
    pub gs: Option<f64>, // ground speed, knots
    #[serde(default)]
    pub track: Option<f64>,
    #[serde(default)]
    pub baro_rate: Option<f64>, // ft/min
}

impl SourceRecord {
    /// records without a position are malformed for our purposes and get skipped
    pub fn into_observation (self)->Option<AircraftObservation> {
        let lat = self.lat?;
        let lon = self.lon?;

        let callsign = match self.flight {
            Some(cs) => {
                let cs = cs.trim().to_uppercase();
                if cs.is_empty() { "N/A".to_string() } else { cs }
            }
            None => "N/A".to_string()
        };

        let altitude_ft = self.alt_baro.as_ref().map( |a| a.feet()).unwrap_or(0.0);

        Some( AircraftObservation {
            id: self.hex.trim().to_lowercase(),
            pos: GeoPos::from_lat_lon_degrees( lat, lon),
            altitude: Length::new::<foot>( altitude_ft),
            ground_speed: Velocity::new::<knot>( self.gs.unwrap_or(0.0)),
            heading_deg: self.track.unwrap_or(0.0),
            callsign,
            registration: self.r,
            aircraft_type: self.t,
            vertical_rate_fpm: self.baro_rate,
            route_hint: None,
        })
    }
}

#[derive(Debug,Deserialize)]
pub struct SourceResponse {
    #[serde(default, alias="aircraft")]
    pub ac: Vec<SourceRecord>,
}

/* #endregion wire format */

/* #region fetch & merge ******************************************************************************/

// the reqwest::Response::json() alternative does not preserve enough error information
pub (crate) async fn from_json<T> (response: Response)->Result<T> where T: DeserializeOwned {
    let bytes = response.bytes().await?;
    serde_json::from_slice( &bytes).map_err( |e| SkywardRadarError::JsonError( e.to_string()))
}

async fn fetch_source (client: &Client, source: &SourceConfig, url: String)->Result<Vec<SourceRecord>> {
    let response = client.get(&url).timeout( source.timeout).send().await?;
    let sr: SourceResponse = from_json( response.error_for_status()?).await?;

    Ok(sr.ac)
}

/// de-duplicating merge of per-source record batches, keyed by aircraft id.
/// Batches are applied in source order - the last source wins for shared keys
pub fn merge_observations (batches: impl IntoIterator<Item=Vec<SourceRecord>>)->Vec<AircraftObservation> {
    let mut merged: HashMap<String,AircraftObservation> = HashMap::new();

    for batch in batches {
        for rec in batch {
            if let Some(obs) = rec.into_observation() {
                merged.insert( obs.id.clone(), obs);
            }
        }
    }

    merged.into_values().collect()
}

/// query all configured sources concurrently and merge their records. Individual source
/// failures are logged and ignored; an empty result is a valid outcome, not an error
pub async fn fetch_all (client: &Client, sources: &[SourceConfig], pos: &GeoPos, radius_km: f64)->Vec<AircraftObservation> {
    let futs = sources.iter().map( |s| fetch_source( client, s, expand_url( &s.url_pattern, pos, radius_km)));
    let results = join_all(futs).await;

    let mut batches: Vec<Vec<SourceRecord>> = Vec::with_capacity( sources.len());
    for (source, result) in sources.iter().zip(results) {
        match result {
            Ok(records) => {
                debug!("source {} returned {} records", source.name, records.len());
                batches.push(records);
            }
            Err(e) => warn!("aircraft source {} unavailable: {e}", source.name)
        }
    }

    merge_observations( batches)
}

/* #endregion fetch & merge */
