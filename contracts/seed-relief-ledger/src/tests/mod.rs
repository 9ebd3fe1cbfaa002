#![cfg(test)]

/// Test fixture and helper functions
pub mod utils;


/// Disaster event lifecycle tests
mod disaster;
