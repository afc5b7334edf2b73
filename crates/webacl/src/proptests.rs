//! Property-based tests for authorizations.
