//! Public Twine models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are grouped into domain submodules (e.g., `separation`).
//!
//! # Model structure
//!
//! Each model lives in its own module with an internal `core` submodule that
//! holds the computation. The model module re-exports the types callers need
//! and provides the [`twine_core::Model`] implementation, which is a thin
//! adapter over the core API.

pub mod separation;
