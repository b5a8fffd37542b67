//! Infrastructure Layer
//!
//! Adapters implementing the application ports.

pub mod persistence;
