//! Monitor configuration parsing and merging
//!
//! Reads the java and monitor properties files and builds the effective configuration of each monitor

pub mod discovery;
pub mod java;
pub mod merge;
pub mod properties;
