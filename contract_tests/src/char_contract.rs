//! Char construction and view contract tests
//!
//! These tests define the stable contract for the Char value type.
