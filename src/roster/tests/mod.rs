//! Unit tests for the roster module.

mod directory_tests;
mod domain_tests;
