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

//! best-effort weather collaborator. Retrieves current conditions for a coordinate
//! from an Open-Meteo compatible endpoint and maps the numeric WMO weather code to a
//! display label. Lookup failures degrade to a well-defined `unknown` report - this
//! never blocks or fails radar target selection

use std::time::Duration;
use serde::{Deserialize,Serialize};
use serde::de::DeserializeOwned;
use reqwest::{Client,Response};
use tracing::warn;

use skyward_common::datetime::{de_duration_from_fractional_secs,ser_duration_as_fractional_secs};
use skyward_common::geo::GeoPos;

pub mod errors;
pub use errors::*;

pub const UNKNOWN_SKY: &str = "UNKNOWN";

#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct WxConfig {
    /// current conditions endpoint (Open-Meteo compatible)
    pub url: String,

    /// per-request timeout in fractional seconds
    #[serde(serialize_with="ser_duration_as_fractional_secs", deserialize_with="de_duration_from_fractional_secs")]
    pub timeout: Duration,
}

impl Default for WxConfig {
    fn default() -> Self {
        Self {
            url: "https://api.open-meteo.com/v1/forecast".to_string(),
            timeout: Duration::from_secs(5),
        }
    }
}

/// weather snapshot attached to radar responses. Sentinel values for a failed lookup
/// are explicit (None fields, "UNKNOWN" sky) rather than NaN so that the report always
/// serializes to valid JSON
#[derive(Debug,Clone,Serialize)]
pub struct WxReport {
    pub temperature_c: Option<f64>,
    pub sky: &'static str,
    pub visibility_km: Option<f64>,
}

impl WxReport {
    pub fn unknown ()->Self {
        WxReport { temperature_c: None, sky: UNKNOWN_SKY, visibility_km: None }
    }

    pub fn is_unknown (&self)->bool {
        self.temperature_c.is_none() && self.sky == UNKNOWN_SKY
    }
}

//--- wire format

#[derive(Debug,Deserialize)]
struct OpenMeteoResponse {
    current: OpenMeteoCurrent,
}

#[derive(Debug,Deserialize)]
struct OpenMeteoCurrent {
    temperature_2m: f64,
    weather_code: u32,
    visibility: Option<f64>, // meters
}

/// map a WMO weather code to a short sky-condition label
pub fn sky_condition (code: u32)->&'static str {
    match code {
        0 => "CLEAR",
        1 | 2 => "PARTLY CLOUDY",
        3 => "OVERCAST",
        45 | 48 => "FOG",
        51..=57 => "DRIZZLE",
        61..=67 => "RAIN",
        71..=77 => "SNOW",
        80..=82 => "SHOWERS",
        85 | 86 => "SNOW SHOWERS",
        95..=99 => "THUNDERSTORM",
        _ => UNKNOWN_SKY
    }
}

// the reqwest::Response::json() alternative does not preserve enough error information
async fn from_json<T> (response: Response)->Result<T> where T: DeserializeOwned {
    let bytes = response.bytes().await?;
    serde_json::from_slice( &bytes).map_err( |e| SkywardWxError::JsonError( e.to_string()))
}

pub async fn get_current_wx (client: &Client, config: &WxConfig, pos: &GeoPos)->Result<WxReport> {
    let url = format!("{}?latitude={}&longitude={}&current=temperature_2m,weather_code,visibility",
                      config.url, pos.lat, pos.lon);

    let response = client.get(&url).timeout(config.timeout).send().await?;
    let omr: OpenMeteoResponse = from_json( response.error_for_status()?).await?;

    Ok( WxReport {
        temperature_c: Some(omr.current.temperature_2m),
        sky: sky_condition( omr.current.weather_code),
        visibility_km: omr.current.visibility.map( |m| m / 1000.0),
    })
}

/// the degrading variant used by the radar pipeline
pub async fn current_wx_or_unknown (client: &Client, config: &WxConfig, pos: &GeoPos)->WxReport {
    match get_current_wx( client, config, pos).await {
        Ok(report) => report,
        Err(e) => {
            warn!("weather lookup failed for {pos}: {e}");
            WxReport::unknown()
        }
    }
}
