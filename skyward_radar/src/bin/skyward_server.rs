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

use std::path::PathBuf;
use std::sync::Arc;
use anyhow::Result;
use lazy_static::lazy_static;
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

use skyward_common::config::load_config_or_default;
use skyward_radar::RadarConfig;
use skyward_radar::service::{RadarService,serve};

#[derive(StructOpt)]
#[structopt(about = "SKYWARD radar query server")]
struct CliOpts {
    /// optional RON config file (built-in defaults otherwise)
    #[structopt(short,long)]
    config: Option<PathBuf>,
}

lazy_static! {
    static ref ARGS: CliOpts = CliOpts::from_args();
}

#[tokio::main]
async fn main ()->Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter( EnvFilter::from_default_env())  // use RUST_LOG to set max level
        .init();

    let config: RadarConfig = load_config_or_default( &ARGS.config)?;
    let service = Arc::new( RadarService::new(config)?);

    serve(service).await?;
    Ok(())
}
