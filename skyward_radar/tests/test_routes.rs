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

//! route resolver tests against a local counting endpoint - the hit counter is what
//! proves short-circuit and memoization behavior, not just the returned value

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize,Ordering};
use std::time::Duration;

use axum::{Router, extract::Path, response::Json, routing::get};
use serde_json::json;

use skyward_radar::routes::{RouteConfig,RouteResolver,FALLBACK_ROUTE};

struct RouteEndpoint {
    hits: Arc<AtomicUsize>,
    url_pattern: String,
}

impl RouteEndpoint {
    fn hit_count (&self)->usize { self.hits.load( Ordering::SeqCst) }
}

/// spin up a loopback route endpoint that answers every callsign with `payload`
/// and counts how often it was asked
async fn spawn_route_endpoint (payload: &'static str)->RouteEndpoint {
    let hits = Arc::new( AtomicUsize::new(0));
    let counter = hits.clone();

    let app = Router::new().route( "/route/{callsign}", get( move |Path(callsign): Path<String>| {
        let counter = counter.clone();
        async move {
            counter.fetch_add( 1, Ordering::SeqCst);
            Json( json!( { "callsign": callsign, "_airport_codes_iata": payload } ))
        }
    }));

    let listener = tokio::net::TcpListener::bind( "127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn( async move { axum::serve( listener, app).await.unwrap() });

    RouteEndpoint { hits, url_pattern: format!("http://{addr}/route/${{callsign}}") }
}

fn resolver (url_pattern: String)->RouteResolver {
    RouteResolver::new( RouteConfig {
        url_pattern,
        cache_capacity: 8,
        timeout: Duration::from_secs(2),
    })
}

#[tokio::test]
async fn test_lookup_is_memoized () {
    let endpoint = spawn_route_endpoint( "GRU-SDU").await;
    let resolver = resolver( endpoint.url_pattern.clone());
    let client = reqwest::Client::new();

    assert_eq!( resolver.resolve( &client, "GLO1234").await, "GRU-SDU");
    assert_eq!( resolver.resolve( &client, "GLO1234").await, "GRU-SDU");
    assert_eq!( endpoint.hit_count(), 1); // second call answered from the cache

    assert_eq!( resolver.resolve( &client, "TAM3344").await, "GRU-SDU");
    assert_eq!( endpoint.hit_count(), 2); // different callsign is a fresh lookup
}

#[tokio::test]
async fn test_na_callsign_short_circuits () {
    let endpoint = spawn_route_endpoint( "GRU-SDU").await;
    let resolver = resolver( endpoint.url_pattern.clone());
    let client = reqwest::Client::new();

    assert_eq!( resolver.resolve( &client, "N/A").await, FALLBACK_ROUTE);
    assert_eq!( resolver.resolve( &client, "").await, FALLBACK_ROUTE);
    assert_eq!( endpoint.hit_count(), 0); // endpoint never contacted
}

#[tokio::test]
async fn test_unknown_route_fallback_is_cached () {
    let endpoint = spawn_route_endpoint( "unknown").await;
    let resolver = resolver( endpoint.url_pattern.clone());
    let client = reqwest::Client::new();

    assert_eq!( resolver.resolve( &client, "XYZ987").await, FALLBACK_ROUTE);
    assert_eq!( resolver.resolve( &client, "XYZ987").await, FALLBACK_ROUTE);
    assert_eq!( endpoint.hit_count(), 1); // the fallback is memoized like a hit
}

#[tokio::test]
async fn test_unreachable_endpoint_degrades_to_fallback () {
    // discard port - connection refused, the resolver must degrade, not error
    let resolver = resolver( "http://127.0.0.1:9/route/${callsign}".to_string());
    let client = reqwest::Client::new();

    assert_eq!( resolver.resolve( &client, "GLO1234").await, FALLBACK_ROUTE);
}
