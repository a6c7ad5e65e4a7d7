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

use skyward_common::geo::*;

// run with "cargo test -p skyward_common --test test_geo -- --nocapture"

#[test]
fn test_haversine_symmetry () {
    let a = GeoPos::from_lat_lon_degrees( -23.5505, -46.6333); // Sao Paulo
    let b = GeoPos::from_lat_lon_degrees( -22.9068, -43.1729); // Rio de Janeiro

    let d_ab = haversine_km( &a, &b);
    let d_ba = haversine_km( &b, &a);

    println!("SP->RJ: {d_ab} km");
    assert_eq!( d_ab, d_ba);
    assert!( (d_ab - 360.7).abs() < 1.0); // known distance ~361 km
}

#[test]
fn test_haversine_identity () {
    let a = GeoPos::from_lat_lon_degrees( 12.34, 56.78);
    assert_eq!( haversine_km( &a, &a), 0.0);
}

#[test]
fn test_one_degree_of_latitude () {
    let origin = GeoPos::from_lat_lon_degrees( 0.0, 0.0);
    let north = GeoPos::from_lat_lon_degrees( 1.0, 0.0);

    let d = haversine_km( &origin, &north);
    println!("1 deg latitude: {d} km");
    assert!( (d - 111.195).abs() < 0.01); // 2*pi*6371/360

    assert!( bearing_deg( &origin, &north).abs() < 1e-9); // due north
}

#[test]
fn test_one_degree_of_longitude_on_equator () {
    let origin = GeoPos::from_lat_lon_degrees( 0.0, 0.0);
    let east = GeoPos::from_lat_lon_degrees( 0.0, 1.0);

    let d = haversine_km( &origin, &east);
    assert!( (d - 111.195).abs() < 0.01);

    assert!( (bearing_deg( &origin, &east) - 90.0).abs() < 1e-9); // due east
}

#[test]
fn test_bearing_range () {
    let origin = GeoPos::from_lat_lon_degrees( -23.5, -46.6);

    for lat in [-89.0, -45.0, -1.0, 0.0, 1.0, 45.0, 89.0] {
        for lon in [-179.0, -90.0, -1.0, 0.0, 1.0, 90.0, 179.0] {
            let p = GeoPos::from_lat_lon_degrees( lat, lon);
            if p == origin { continue }

            let brg = bearing_deg( &origin, &p);
            assert!( brg >= 0.0 && brg < 360.0, "bearing {brg} out of range for {p}");
        }
    }
}

#[test]
fn test_geo_pos_deserialization () {
    let p: GeoPos = serde_json::from_str( r#"{ "lat": -23.5, "lon": -46.6 }"#).unwrap();
    assert_eq!( p, GeoPos::from_lat_lon_degrees( -23.5, -46.6));

    // alternative feed spelling
    let p: GeoPos = serde_json::from_str( r#"{ "latitude": -23.5, "longitude": -46.6 }"#).unwrap();
    assert_eq!( p, GeoPos::from_lat_lon_degrees( -23.5, -46.6));
}
