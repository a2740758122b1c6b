//! Tests for header normalization and alias lookup
