//! Integration test flows.
