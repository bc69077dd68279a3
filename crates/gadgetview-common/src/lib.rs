//! # gadgetview-common
//!
//! Shared record types, error definitions, configuration models, and
//! constants used across the gadgetview workspace.
//!
//! This crate is the leaf of the dependency graph. It depends on no other
//! internal crate and describes the data that flows through the report
//! pipelines: the per-node status list handed over by the trace
//! orchestrator, and the process and socket records decoded from it.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
