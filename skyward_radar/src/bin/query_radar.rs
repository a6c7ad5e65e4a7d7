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

//! one-shot diagnostic radar query from the command line

use std::path::PathBuf;
use anyhow::Result;
use lazy_static::lazy_static;
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

use skyward_common::config::load_config_or_default;
use skyward_common::geo::GeoPos;
use skyward_radar::{QueryRequest,RadarConfig};
use skyward_radar::service::RadarService;

#[derive(StructOpt)]
#[structopt(about = "one-shot SKYWARD radar query tool")]
struct CliOpts {
    /// produce formatted output
    #[structopt(short,long)]
    pretty: bool,

    /// id of the previously tracked aircraft (sticky-target input)
    #[structopt(short,long)]
    track: Option<String>,

    /// return the fixed synthetic test aircraft instead of live data
    #[structopt(long)]
    test: bool,

    /// optional RON config file (built-in defaults otherwise)
    #[structopt(short,long)]
    config: Option<PathBuf>,

    /// query latitude in degrees
    lat: f64,

    /// query longitude in degrees
    lon: f64,
}

lazy_static! {
    static ref ARGS: CliOpts = CliOpts::from_args();
}

#[tokio::main]
async fn main ()->Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter( EnvFilter::from_default_env())
        .init();

    let config: RadarConfig = load_config_or_default( &ARGS.config)?;
    let service = RadarService::new(config)?;

    let request = QueryRequest {
        pos: GeoPos::from_lat_lon_degrees( ARGS.lat, ARGS.lon),
        prev_id: ARGS.track.clone(),
        test_mode: ARGS.test,
    };

    let response = service.query( &request).await;

    if ARGS.pretty {
        println!("{}", serde_json::to_string_pretty( &response)?);
    } else {
        println!("{}", serde_json::to_string( &response)?);
    }

    Ok(())
}
