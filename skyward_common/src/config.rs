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

//! RON config file loading. Config types are serde structs with explicit Default
//! impls so that all binaries run without a config file

use std::fs;
use std::path::{Path,PathBuf};
use serde::de::DeserializeOwned;

use crate::errors::Result;

pub fn load_config<T> (path: impl AsRef<Path>)->Result<T> where T: DeserializeOwned {
    let contents = fs::read_to_string( path.as_ref())?;
    let conf: T = ron::from_str( &contents)?;
    Ok(conf)
}

pub fn load_config_or_default<T> (opt_path: &Option<PathBuf>)->Result<T> where T: DeserializeOwned + Default {
    match opt_path {
        Some(path) => load_config(path),
        None => Ok( T::default() )
    }
}
