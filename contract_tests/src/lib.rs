//! # Char Contract Tests
//!
//! This crate provides "golden" tests for the `char_types` public contract
//! to ensure it doesn't drift accidentally over time.
//!
//! ## Philosophy
//!
//! - **Explicit over implicit**: the contract is written as code
//! - **Testability first**: contract tests fail when behavior changes
//! - **Mechanism not policy**: define what must be stable, not how to use it
//!
//! ## Structure
//!
//! The `char_contract` module pins:
//! - The documented construction table (which inputs succeed, which fail)
//! - Error kind discrimination
//! - The signed/unsigned view algebra
//! - The canonical serialized form of a `Char`

pub mod char_contract;
