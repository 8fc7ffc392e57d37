//! Inbound (driving) ports consumed by inbound adapters.
//!
//! - [`workflow`]: results of the validated write workflows, rendered by the
//!   HTTP layer.

pub mod workflow;
