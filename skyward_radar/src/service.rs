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

//! query orchestration and the HTTP surface. One `RadarService` instance is shared by
//! all requests - queries themselves are stateless, the only shared mutable state is
//! the route memoization cache inside the resolver

use std::sync::Arc;
use axum::{
    Router,
    extract::{Query as AxumQuery, State},
    response::Json,
    routing::get,
};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug,info};

use skyward_common::datetime::{display_now,short_display_string};
use skyward_common::geo::GeoPos;
use skyward_wx::current_wx_or_unknown;

use crate::{
    Candidate, QueryRequest, RadarConfig, RadarResponse, TrackedReport,
    synthetic_candidate,
};
use crate::errors::Result;
use crate::routes::{RouteResolver,FALLBACK_ROUTE};
use crate::selector::select;
use crate::sources::fetch_all;

pub struct RadarService {
    pub config: RadarConfig,
    client: Client,
    routes: RouteResolver,
}

impl RadarService {

    pub fn new (config: RadarConfig)->Result<Self> {
        let client = Client::builder()
            .user_agent( concat!("skyward/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let routes = RouteResolver::new( config.route.clone());

        Ok( RadarService { config, client, routes } )
    }

    /// run the full query pipeline: fetch -> filter/build -> select -> enrich.
    /// Every failure mode inside degrades to "no target" or sentinel values -
    /// this never returns an error to the caller
    pub async fn query (&self, request: &QueryRequest)->RadarResponse {
        let tracked = if request.test_mode {
            self.test_report( &request.pos).await
        } else {
            self.live_query(request).await
        };

        let local_time = short_display_string( &display_now( &self.config.display_tz));
        let wx = current_wx_or_unknown( &self.client, &self.config.wx, &request.pos).await;

        RadarResponse { tracked, local_time, wx }
    }

    async fn live_query (&self, request: &QueryRequest)->Option<TrackedReport> {
        let observations = fetch_all( &self.client, &self.config.sources, &request.pos, self.config.radius_km).await;
        debug!("merged {} observations", observations.len());

        let candidates: Vec<Candidate> = observations.into_iter()
            .filter_map( |obs| Candidate::from_observation( obs, &request.pos, self.config.radius_km))
            .collect();

        let selected = select( &candidates, request.prev_id.as_deref(), self.config.hysteresis_km)?;
        info!("tracking {} at {:.1} km", selected.obs.callsign, selected.distance_km);

        let route = self.route_for(selected).await;
        Some( TrackedReport::from_candidate( selected, route))
    }

    /// source-provided route hints win over a lookup
    async fn route_for (&self, candidate: &Candidate)->String {
        match &candidate.route {
            Some(hint) => hint.clone(),
            None => self.routes.resolve( &self.client, &candidate.obs.callsign).await
        }
    }

    /// fixed synthetic aircraft for UI testing, bypassing the live fetch
    async fn test_report (&self, origin: &GeoPos)->Option<TrackedReport> {
        let candidate = synthetic_candidate(origin)?;
        let route = candidate.route.clone().unwrap_or_else( || FALLBACK_ROUTE.to_string());
        Some( TrackedReport::from_candidate( &candidate, route))
    }
}

/* #region http surface *******************************************************************************/

#[derive(Debug,Deserialize)]
pub struct RadarQueryParams {
    pub lat: f64,
    pub lon: f64,

    /// id of the previously tracked aircraft (sticky-target input)
    #[serde(default)]
    pub track: Option<String>,

    /// return the fixed synthetic aircraft instead of live data
    #[serde(default)]
    pub test: bool,
}

pub fn build_router (service: Arc<RadarService>)->Router {
    Router::new()
        .route( "/radar", get( radar_handler))
        .route( "/health", get( || async { "ok" }))
        .with_state( service)
}

async fn radar_handler (State(service): State<Arc<RadarService>>, AxumQuery(params): AxumQuery<RadarQueryParams>)->Json<RadarResponse> {
    let request = QueryRequest {
        pos: GeoPos::from_lat_lon_degrees( params.lat, params.lon),
        prev_id: params.track,
        test_mode: params.test,
    };

    Json( service.query( &request).await )
}

pub async fn serve (service: Arc<RadarService>)->Result<()> {
    let sock_addr = service.config.sock_addr.clone();
    let router = build_router(service);

    let listener = tokio::net::TcpListener::bind( &sock_addr).await?;
    info!("serving radar queries on http://{sock_addr}/radar");
    axum::serve( listener, router).await?;

    Ok(())
}

/* #endregion http surface */
