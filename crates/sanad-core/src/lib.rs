//! Core types and rules for the Sanad registration portal.
//!
//! This crate is deliberately free of IO and HTTP dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod chat;
pub mod error;
pub mod faq;
pub mod ident;
pub mod photo;
pub mod program;
pub mod registration;
pub mod validate;

pub use error::{Error, Result};
