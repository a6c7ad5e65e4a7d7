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

//! operator classification of a contact from its callsign and ICAO type code.
//!
//! This is an explicit ordered rule table evaluated top to bottom, first match wins.
//! The order is semantic: military type codes outrank callsign prefixes, and some
//! prefixes overlap (e.g. "PTB" must be checked before the generic "PT" tail-number
//! prefix) - do not reorder or convert to an unordered map.

/// what the display needs to know about an operator
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct Classification {
    pub operator: &'static str,
    pub color: &'static str,
    pub rare: bool,
}

pub const DEFAULT_COLOR: &str = "#9aa5b1";

/// anything no rule claims
pub const PRIVATE: Classification = Classification { operator: "PRIVATE", color: DEFAULT_COLOR, rare: false };

#[derive(Debug,Clone,Copy)]
pub enum Matcher {
    TypeCode( &'static [&'static str] ), // exact membership of the ICAO type code
    Prefix( &'static str ),              // callsign prefix
    Contains( &'static str ),            // callsign substring (novelty cases)
}

#[derive(Debug,Clone,Copy)]
pub struct ClassRule {
    pub matcher: Matcher,
    pub operator: &'static str,
    pub color: &'static str,
    pub rare: bool,
}

impl ClassRule {
    fn matches (&self, callsign: &str, type_code: Option<&str>)->bool {
        match self.matcher {
            Matcher::TypeCode(codes) => type_code.map_or( false, |t| codes.contains(&t)),
            Matcher::Prefix(p) => callsign.starts_with(p),
            Matcher::Contains(s) => callsign.contains(s),
        }
    }

    fn classification (&self)->Classification {
        Classification { operator: self.operator, color: self.color, rare: self.rare }
    }
}

/// ICAO type codes we always flag as military/rare, regardless of callsign
const MIL_TYPES: &[&str] = &[
    "C130", "C30J", "K35R", "KC46", "A400", "P8", "P3", "E3TF", "E3CF", "E6",
    "C17", "C5M", "B52", "A10", "F15", "F16", "F18", "F35", "EUFI", "TOR",
    "H60", "UH60", "T6", "TEX2", "VC25", "E190BJ",
];

const fn rule (matcher: Matcher, operator: &'static str, color: &'static str, rare: bool)->ClassRule {
    ClassRule { matcher, operator, color, rare }
}

/// the ordered classification table. First match wins
pub static RULES: &[ClassRule] = &[
    //--- military / rare type codes come first so they outrank any airline prefix
    rule( Matcher::TypeCode(MIL_TYPES), "MILITARY", "#556b2f", true),

    //--- novelty callsigns
    rule( Matcher::Contains("SANTA"),  "SANTA CLAUS", "#ff0000", true),
    rule( Matcher::Contains("HOHOHO"), "SANTA CLAUS", "#ff0000", true),

    //--- government / military callsign prefixes
    rule( Matcher::Prefix("FAB"), "BRAZILIAN AIR FORCE", "#3a5f3a", true),
    rule( Matcher::Prefix("RCH"), "US AIR FORCE (REACH)", "#3a5f3a", true),
    rule( Matcher::Prefix("RRR"), "ROYAL AIR FORCE", "#3a5f3a", true),
    rule( Matcher::Prefix("CTM"), "FRENCH AIR FORCE", "#3a5f3a", true),
    rule( Matcher::Prefix("GAF"), "GERMAN AIR FORCE", "#3a5f3a", true),
    rule( Matcher::Prefix("CFC"), "CANADIAN FORCES", "#3a5f3a", true),
    rule( Matcher::Prefix("ASY"), "ROYAL AUSTRALIAN AIR FORCE", "#3a5f3a", true),
    rule( Matcher::Prefix("IAM"), "ITALIAN AIR FORCE", "#3a5f3a", true),

    //--- Brazilian carriers (the reference deployment region)
    rule( Matcher::Prefix("GLO"), "GOL",              "#ff7900", false),
    rule( Matcher::Prefix("TAM"), "LATAM",            "#d6003c", false),
    rule( Matcher::Prefix("AZU"), "AZUL",             "#00a1e4", false),
    rule( Matcher::Prefix("PTB"), "VOEPASS",          "#ffd100", false), // before the "PT" tail-number prefix
    rule( Matcher::Prefix("ACN"), "AZUL CONECTA",     "#0080c6", false),
    rule( Matcher::Prefix("TTL"), "TOTAL LINHAS AEREAS", "#005baa", false),
    rule( Matcher::Prefix("SID"), "SIDERAL",          "#6b7280", false),
    rule( Matcher::Prefix("MWM"), "MODERN LOGISTICS", "#24306e", false),
    rule( Matcher::Prefix("LTG"), "LATAM CARGO",      "#a00030", false),

    //--- other South American carriers
    rule( Matcher::Prefix("ARG"), "AEROLINEAS ARGENTINAS", "#74ccff", false),
    rule( Matcher::Prefix("LAN"), "LATAM CHILE",      "#d6003c", false),
    rule( Matcher::Prefix("AVA"), "AVIANCA",          "#e8112d", false),
    rule( Matcher::Prefix("CMP"), "COPA AIRLINES",    "#003d7d", false),
    rule( Matcher::Prefix("BOV"), "BOLIVIANA",        "#f7b500", false),
    rule( Matcher::Prefix("UAL"), "UNITED",           "#005daa", false),

    //--- North American carriers
    rule( Matcher::Prefix("AAL"), "AMERICAN AIRLINES", "#c30019", false),
    rule( Matcher::Prefix("DAL"), "DELTA",            "#9b1631", false),
    rule( Matcher::Prefix("SWA"), "SOUTHWEST",        "#f9b612", false),
    rule( Matcher::Prefix("ACA"), "AIR CANADA",       "#d22630", false),
    rule( Matcher::Prefix("FDX"), "FEDEX",            "#4d148c", false),
    rule( Matcher::Prefix("UPS"), "UPS",              "#351c15", false),
    rule( Matcher::Prefix("GTI"), "ATLAS AIR",        "#0033a0", false),

    //--- European carriers
    rule( Matcher::Prefix("BAW"), "BRITISH AIRWAYS",  "#075aaa", false),
    rule( Matcher::Prefix("VIR"), "VIRGIN ATLANTIC",  "#e10a0a", false),
    rule( Matcher::Prefix("DLH"), "LUFTHANSA",        "#05164d", false),
    rule( Matcher::Prefix("AFR"), "AIR FRANCE",       "#002157", false),
    rule( Matcher::Prefix("KLM"), "KLM",              "#00a1de", false),
    rule( Matcher::Prefix("IBE"), "IBERIA",           "#d7192d", false),
    rule( Matcher::Prefix("SWR"), "SWISS",            "#e30614", false),
    rule( Matcher::Prefix("TAP"), "TAP AIR PORTUGAL", "#00784c", false),
    rule( Matcher::Prefix("THY"), "TURKISH AIRLINES", "#c90019", false),

    //--- Middle East / Asia / Oceania
    rule( Matcher::Prefix("UAE"), "EMIRATES",         "#d71a21", false),
    rule( Matcher::Prefix("QTR"), "QATAR AIRWAYS",    "#5c0632", false),
    rule( Matcher::Prefix("ETD"), "ETIHAD",           "#bd8b13", false),
    rule( Matcher::Prefix("ETH"), "ETHIOPIAN",        "#628c3d", false),
    rule( Matcher::Prefix("SIA"), "SINGAPORE AIRLINES", "#f99f1c", false),
    rule( Matcher::Prefix("CPA"), "CATHAY PACIFIC",   "#00645a", false),
    rule( Matcher::Prefix("JAL"), "JAPAN AIRLINES",   "#b80e1f", false),
    rule( Matcher::Prefix("QFA"), "QANTAS",           "#e40000", false),

    //--- Brazilian tail-number callsigns (private/general aviation)
    rule( Matcher::Prefix("PT"), "PRIVATE", DEFAULT_COLOR, false),
    rule( Matcher::Prefix("PR"), "PRIVATE", DEFAULT_COLOR, false),
    rule( Matcher::Prefix("PP"), "PRIVATE", DEFAULT_COLOR, false),
    rule( Matcher::Prefix("PS"), "PRIVATE", DEFAULT_COLOR, false),
];

/// classify a contact. `callsign` is matched uppercased; `type_code` as reported
pub fn classify (callsign: &str, type_code: Option<&str>)->Classification {
    let cs = callsign.trim().to_uppercase();

    for rule in RULES {
        if rule.matches( &cs, type_code) {
            return rule.classification()
        }
    }
    PRIVATE
}
