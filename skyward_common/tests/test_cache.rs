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

use skyward_common::cache::LruCache;

#[test]
fn test_eviction_order () {
    let mut cache: LruCache<String,u32> = LruCache::new(2);

    cache.put( "a".to_string(), 1);
    cache.put( "b".to_string(), 2);
    cache.put( "c".to_string(), 3); // evicts "a"

    assert_eq!( cache.len(), 2);
    assert!( !cache.contains( &"a".to_string()));
    assert_eq!( cache.get( &"b".to_string()), Some(&2));
    assert_eq!( cache.get( &"c".to_string()), Some(&3));
}

#[test]
fn test_get_refreshes_recency () {
    let mut cache: LruCache<String,u32> = LruCache::new(2);

    cache.put( "a".to_string(), 1);
    cache.put( "b".to_string(), 2);

    cache.get( &"a".to_string()); // "b" is now least recently used
    cache.put( "c".to_string(), 3);

    assert!( cache.contains( &"a".to_string()));
    assert!( !cache.contains( &"b".to_string()));
}

#[test]
fn test_overwrite_does_not_grow () {
    let mut cache: LruCache<&str,u32> = LruCache::new(2);

    cache.put( "a", 1);
    cache.put( "a", 2);
    assert_eq!( cache.len(), 1);
    assert_eq!( cache.get( &"a"), Some(&2));
}

#[test]
fn test_zero_capacity_is_clamped () {
    let mut cache: LruCache<&str,u32> = LruCache::new(0);
    cache.put( "a", 1);
    assert_eq!( cache.capacity(), 1);
    assert_eq!( cache.get( &"a"), Some(&1));
}
