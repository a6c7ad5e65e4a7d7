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

use skyward_radar::classifier::{classify,PRIVATE};

#[test]
fn test_airline_prefixes () {
    assert_eq!( classify( "GLO1234", None).operator, "GOL");
    assert_eq!( classify( "TAM3344", None).operator, "LATAM");
    assert_eq!( classify( "AZU4021", None).operator, "AZUL");
    assert_eq!( classify( "BAW247", None).operator, "BRITISH AIRWAYS");
    assert!( !classify( "GLO1234", None).rare);
}

#[test]
fn test_callsign_normalization () {
    // classification happens on the trimmed/uppercased callsign
    assert_eq!( classify( " glo1234 ", None).operator, "GOL");
}

#[test]
fn test_military_type_code_outranks_prefix () {
    // an airline callsign on a military type code is still flagged
    let c = classify( "GLO1234", Some("C130"));
    assert_eq!( c.operator, "MILITARY");
    assert!( c.rare);
}

#[test]
fn test_first_match_wins_on_overlapping_prefixes () {
    // "PTB" (Voepass) is listed before the generic "PT" tail-number prefix;
    // a callsign matching both must resolve to the earlier rule
    assert_eq!( classify( "PTB2201", None).operator, "VOEPASS");
    assert_eq!( classify( "PTMVL", None).operator, "PRIVATE");
}

#[test]
fn test_government_callsigns_are_rare () {
    assert!( classify( "FAB2101", None).rare);
    assert_eq!( classify( "FAB2101", None).operator, "BRAZILIAN AIR FORCE");
    assert!( classify( "RCH421", None).rare);
}

#[test]
fn test_novelty_callsigns () {
    let c = classify( "SANTA1", None);
    assert_eq!( c.operator, "SANTA CLAUS");
    assert!( c.rare);

    assert_eq!( classify( "XHOHOHO", None).operator, "SANTA CLAUS");
}

#[test]
fn test_default_is_private () {
    let c = classify( "N123AB", None);
    assert_eq!( c, PRIVATE);
    assert_eq!( c.operator, "PRIVATE");
    assert!( !c.rare);
}
