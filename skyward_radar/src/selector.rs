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

//! nearest-and-stickiest target selection. Once an aircraft is tracked it stays tracked
//! across queries until it leaves the radius (or stops reporting), or a different
//! aircraft gets closer by more than the hysteresis margin. The margin prevents rapid
//! target flutter between two aircraft at near-equal distance.

use crate::Candidate;

/// select the tracked aircraft from the filtered candidate list.
/// `prev_id` is the caller-supplied id of the previously tracked aircraft
pub fn select<'a> (candidates: &'a [Candidate], prev_id: Option<&str>, hysteresis_km: f64)->Option<&'a Candidate> {
    let closest = candidates.iter().min_by( |a,b| a.distance_km.total_cmp( &b.distance_km))?;

    let prev_id = match prev_id {
        Some(id) => id,
        None => return Some(closest)
    };

    match candidates.iter().find( |c| c.obs.id == prev_id) {
        None => Some(closest), // previous target left the radius or stopped reporting
        Some(current) => {
            if closest.distance_km < current.distance_km - hysteresis_km {
                Some(closest) // hand-off to a materially closer aircraft
            } else {
                Some(current)
            }
        }
    }
}
