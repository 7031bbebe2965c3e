//! Tests for the token issuer

mod service_tests;
