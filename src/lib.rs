#![doc(test(attr(deny(warnings))))]

//! Money Notes Core provides the domain model, durable transaction store,
//! aggregation engine, and view-state coordination that power a personal
//! finance tracking front end.

pub mod analytics;
pub mod coordinator;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod store;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Money Notes Core tracing initialized.");
    });
}
