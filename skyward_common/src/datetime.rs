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

use std::time::Duration;
use chrono::{DateTime,TimeZone,Utc};
use chrono_tz::Tz;
use serde::{Deserialize,Deserializer,Serializer};

#[inline] pub fn millis (n: u64)->Duration { Duration::from_millis(n) }
#[inline] pub fn secs (n: u64)->Duration { Duration::from_secs(n) }
#[inline] pub fn secs_f64 (n: f64)->Duration { Duration::from_secs_f64(n) }
#[inline] pub fn minutes (n: u64)->Duration { Duration::from_secs(n * 60) }

pub fn utc_now ()->DateTime<Utc> {
    Utc::now()
}

/// current wallclock time in the given display timezone (what the front-end shows)
pub fn display_now (tz: &Tz)->DateTime<Tz> {
    Utc::now().with_timezone(tz)
}

/// short datetime string used by display clients ("2026-08-29 14:05:33")
pub fn short_display_string (dt: &DateTime<Tz>)->String {
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

//--- serde support for Duration config fields (RON stores them as fractional seconds)

pub fn ser_duration_as_fractional_secs<S: Serializer> (dur: &Duration, s: S) -> Result<S::Ok, S::Error>  {
    let secs = dur.as_secs_f64();
    s.serialize_f64( secs)
}

pub fn de_duration_from_fractional_secs <'a,D>(deserializer: D) -> Result<Duration,D::Error> where D: Deserializer<'a> {
    let secs: f64 = f64::deserialize(deserializer)?;
    Ok( Duration::from_secs_f64(secs) )
}
