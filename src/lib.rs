//! # picklist
//!
//! Postgres-backed coordination core for warehouse order-fulfillment
//! picking: an ordered catalog of open pick work and a race-safe
//! claim/release protocol built on conditional updates.

pub mod catalog;
pub mod claims;
pub mod config;
pub mod db;
pub mod envelope;
pub mod error;
pub mod identity;
pub mod model;
pub mod telemetry;
