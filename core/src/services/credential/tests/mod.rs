//! Tests for the credential pipeline
