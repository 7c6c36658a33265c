//! # Twine Demister
//!
//! Demister (mist eliminator) sizing models for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! Modules in [`support`] are public because they're useful, but their APIs
//! are not stable.
//!
//! ## Features
//!
//! - `serde`: Serialize and deserialize model inputs and results.

pub mod models;
pub mod support;
