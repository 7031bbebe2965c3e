//! Tests for password policy and hashing
