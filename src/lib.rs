//! Simulated device events: craft a single HTTP request against a target
//! device and classify the outcome.

pub mod status;
pub mod upload;
