// Host-side tests for front-end constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn canvas_ids_are_distinct() {
    let mut ids = vec![NEBULA_CANVAS_ID];
    ids.extend_from_slice(&STAR_CANVAS_IDS);
    let mut sorted = ids.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), ids.len());
}

#[test]
fn star_canvases_are_ordered_back_to_front() {
    assert!(STAR_CANVAS_IDS[0].ends_with("back"));
    assert!(STAR_CANVAS_IDS[1].ends_with("mid"));
    assert!(STAR_CANVAS_IDS[2].ends_with("front"));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn start_delay_is_short_and_positive() {
    assert!(START_DELAY_MS > 0);
    assert!(START_DELAY_MS < 1000);
}

#[test]
fn reduced_motion_query_is_a_media_query() {
    assert!(REDUCED_MOTION_QUERY.starts_with('('));
    assert!(REDUCED_MOTION_QUERY.contains("prefers-reduced-motion"));
}
