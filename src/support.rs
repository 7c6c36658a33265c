//! Crate-level utilities shared by models.
//!
//! These APIs are public because they're useful outside of any single model,
//! but they are not stable.

pub mod constraint;
