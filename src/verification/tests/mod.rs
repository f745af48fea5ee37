//! Unit tests for the verification module.

mod intake_tests;
