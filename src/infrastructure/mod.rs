//! Infrastructure: configuration, logging, seeding and startup wiring.

pub mod bootstrap;
pub mod config;
pub mod seed;
