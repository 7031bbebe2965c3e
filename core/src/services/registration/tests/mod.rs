//! Tests for the registration service
