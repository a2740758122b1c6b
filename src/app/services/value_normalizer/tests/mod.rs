//! Tests for value normalization primitives

pub mod phone_tests;
pub mod text_tests;
