//! Vapor-liquid separation models.
//!
//! This module contains models for separating entrained liquid from vapor
//! streams, such as demister pads in process vessels.

pub mod demister;
