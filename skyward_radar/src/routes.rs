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

//! callsign-keyed route lookup with bounded memoization. Routes are stable over a
//! session so successful (and failed) lookups are cached in an LRU - a dead route
//! endpoint is asked at most once per callsign per cache lifetime

use std::sync::Mutex;
use std::time::Duration;
use reqwest::Client;
use serde::{Deserialize,Serialize};
use tracing::{debug,warn};

use skyward_common::cache::LruCache;
use skyward_common::datetime::{de_duration_from_fractional_secs,ser_duration_as_fractional_secs};

use crate::errors::Result;
use crate::sources::from_json;

pub const FALLBACK_ROUTE: &str = "EN ROUTE";

#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct RouteConfig {
    /// route endpoint with a `${callsign}` field expanded per lookup
    pub url_pattern: String,

    /// memoization cache capacity (entries)
    pub cache_capacity: usize,

    /// per-request timeout in fractional seconds
    #[serde(serialize_with="ser_duration_as_fractional_secs", deserialize_with="de_duration_from_fractional_secs")]
    pub timeout: Duration,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            url_pattern: "https://api.adsb.lol/api/0/route/${callsign}".to_string(),
            cache_capacity: 128,
            timeout: Duration::from_secs(4),
        }
    }
}

#[derive(Debug,Deserialize)]
struct RouteResponse {
    #[serde(default, alias="_airport_codes_iata")]
    airport_codes: Option<String>,
}

pub struct RouteResolver {
    config: RouteConfig,
    cache: Mutex<LruCache<String,String>>, // callsign -> route string
}

impl RouteResolver {

    pub fn new (config: RouteConfig)->Self {
        let cache = Mutex::new( LruCache::new( config.cache_capacity));
        RouteResolver { config, cache }
    }

    /// resolve a callsign to an origin-destination string. Never fails - lookup errors
    /// and unknown routes degrade to the generic fallback label
    pub async fn resolve (&self, client: &Client, callsign: &str)->String {
        if callsign.is_empty() || callsign == "N/A" {
            return FALLBACK_ROUTE.to_string()
        }

        if let Some(route) = self.cached(callsign) {
            return route
        }

        let route = match self.lookup( client, callsign).await {
            Ok(Some(codes)) if !codes.is_empty() && !codes.eq_ignore_ascii_case("unknown") => codes,
            Ok(_) => FALLBACK_ROUTE.to_string(),
            Err(e) => {
                warn!("route lookup failed for {callsign}: {e}");
                FALLBACK_ROUTE.to_string()
            }
        };

        self.memoize( callsign.to_string(), route.clone());
        route
    }

    async fn lookup (&self, client: &Client, callsign: &str)->Result<Option<String>> {
        let url = self.config.url_pattern.replace( "${callsign}", callsign);

        let response = client.get(&url).timeout( self.config.timeout).send().await?;
        let rr: RouteResponse = from_json( response.error_for_status()?).await?;

        debug!("route for {callsign}: {:?}", rr.airport_codes);
        Ok(rr.airport_codes)
    }

    fn cached (&self, callsign: &str)->Option<String> {
        self.cache.lock().ok()?.get( &callsign.to_string()).cloned()
    }

    fn memoize (&self, callsign: String, route: String) {
        if let Ok(mut cache) = self.cache.lock() {
            cache.put( callsign, route);
        }
    }
}
