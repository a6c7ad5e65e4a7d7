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

//! bounded LRU cache used for memoization of stable lookups (e.g. callsign->route).
//! Recency tracking is a plain VecDeque scan - intended capacities are small (~128)
//! so we don't need an intrusive list

use std::collections::{HashMap,VecDeque};
use std::hash::Hash;

#[derive(Debug)]
pub struct LruCache<K,V> where K: Eq + Hash + Clone {
    capacity: usize,
    map: HashMap<K,V>,
    order: VecDeque<K>, // front = least recently used
}

impl<K,V> LruCache<K,V> where K: Eq + Hash + Clone {

    pub fn new (capacity: usize)->Self {
        let capacity = capacity.max(1);
        LruCache {
            capacity,
            map: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
        }
    }

    pub fn capacity (&self)->usize { self.capacity }
    pub fn len (&self)->usize { self.map.len() }
    pub fn is_empty (&self)->bool { self.map.is_empty() }
    pub fn contains (&self, k: &K)->bool { self.map.contains_key(k) }

    /// lookup that refreshes recency of the entry
    pub fn get (&mut self, k: &K)->Option<&V> {
        if self.map.contains_key(k) {
            self.touch(k);
            self.map.get(k)
        } else {
            None
        }
    }

    /// insert or overwrite. Evicts the least recently used entry at capacity
    pub fn put (&mut self, k: K, v: V) {
        if self.map.contains_key(&k) {
            self.map.insert( k.clone(), v);
            self.touch(&k);
            return;
        }

        if self.map.len() >= self.capacity {
            if let Some(lru) = self.order.pop_front() {
                self.map.remove(&lru);
            }
        }

        self.order.push_back( k.clone());
        self.map.insert( k, v);
    }

    fn touch (&mut self, k: &K) {
        if let Some(idx) = self.order.iter().position( |e| e == k) {
            if let Some(e) = self.order.remove(idx) {
                self.order.push_back(e);
            }
        }
    }
}
