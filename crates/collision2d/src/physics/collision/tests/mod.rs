//! Cross-shape property tests
//!
//! Per-shape behaviour is tested next to each type; these modules check the
//! properties that tie the shapes together.

mod properties;
