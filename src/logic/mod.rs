//! Logic Module - Detection Engine
//!
//! - `profiles/` - static catalog of known tracking platforms and its schema
//! - `detection/` - risk-scoring engine that evaluates observed browser
//!   signals against that catalog

pub mod detection;
pub mod profiles;
