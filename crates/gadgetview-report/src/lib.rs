//! # gadgetview-report
//!
//! Turns the per-node results of the process and socket collector gadgets
//! into a single report.
//!
//! Both pipelines share one shape:
//! - **Input**: read the node status list handed over by the orchestrator.
//! - **Decode**: parse each node's output fragment into typed records.
//! - **Aggregate**: concatenate every node's records, keeping decode failures aside.
//! - **Filter**: optionally collapse threads into one row per process.
//! - **Sort**: order records by a fixed tuple of keys.
//! - **Render**: emit an indented JSON document or an aligned table.

pub mod aggregate;
pub mod collector;
pub mod decode;
pub mod filter;
pub mod input;
pub mod render;
pub mod sort;
