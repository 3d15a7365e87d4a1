//! Core types for Ensemble.

pub mod message;

pub use message::*;
