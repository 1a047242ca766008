//! API exposure
//!
//! Resources are transport-agnostic; this module turns them into HTTP routes.

pub mod rest;

pub use rest::RestExposure;
