//! # fin-core
//!
//! Core types and utilities shared by every finapp crate.
//!
//! This crate provides:
//! - Date decomposition and localized month names (`dates`)
//! - Currency canonicalization into `MoneyValue` pairs (`money`)
//! - Random record identifiers (`ids`)
//! - Lookup and grouping over ordered record sequences (`collections`)
//! - The provider-issued `Identity` and domain entities (income entries, user profile)
//! - Status enums and the cross-cutting `CoreError`

pub mod collections;
pub mod dates;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod identity;
pub mod ids;
pub mod money;

pub use errors::CoreError;
pub use identity::Identity;
