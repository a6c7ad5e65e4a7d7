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

use skyward_wx::{sky_condition,WxReport,UNKNOWN_SKY};

#[test]
fn test_sky_condition_buckets () {
    assert_eq!( sky_condition(0), "CLEAR");
    assert_eq!( sky_condition(1), "PARTLY CLOUDY");
    assert_eq!( sky_condition(2), "PARTLY CLOUDY");
    assert_eq!( sky_condition(3), "OVERCAST");
    assert_eq!( sky_condition(45), "FOG");
    assert_eq!( sky_condition(53), "DRIZZLE");
    assert_eq!( sky_condition(63), "RAIN");
    assert_eq!( sky_condition(75), "SNOW");
    assert_eq!( sky_condition(81), "SHOWERS");
    assert_eq!( sky_condition(95), "THUNDERSTORM");
}

#[test]
fn test_unknown_code () {
    assert_eq!( sky_condition(42), UNKNOWN_SKY);
    assert_eq!( sky_condition(9999), UNKNOWN_SKY);
}

#[test]
fn test_unknown_report_serializes () {
    let report = WxReport::unknown();
    assert!( report.is_unknown());

    let json = serde_json::to_string( &report).unwrap();
    assert_eq!( json, r#"{"temperature_c":null,"sky":"UNKNOWN","visibility_km":null}"#);
}
