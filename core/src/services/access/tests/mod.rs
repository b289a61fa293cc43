//! Tests for the access service
