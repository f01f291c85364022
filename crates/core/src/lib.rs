//! Bantu Ants Core - Shared types library.
//!
//! This crate provides common types used across the Bantu Ants components:
//! - `storefront` - Public-facing brand site API (catalog, cart, checkout)
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and display prices

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
