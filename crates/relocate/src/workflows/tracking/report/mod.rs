//! Derived statistics over the checklist and timeline. Nothing here is
//! persisted; every call rescans the stores so a dashboard always reflects the
//! latest write.

mod engine;
mod stats;
pub mod views;

pub use engine::AggregationEngine;
pub use stats::{completion_percentage, summarize_items, summarize_timeline};
