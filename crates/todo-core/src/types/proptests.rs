//! Property-based tests for lists, validation and ordering.
