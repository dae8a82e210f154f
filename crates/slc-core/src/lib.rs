//! SLC Core Types and Definitions
//!
//! This crate provides the foundational types for the SLC scene language.
//! It includes:
//!
//! - **Document**: The parsed, render-ready scene model ([`document`] module)
//! - **Template**: The starter text for a freshly created document ([`template`] module)

pub mod document;
pub mod template;

pub use document::{Document, ParamValue, Shape};
