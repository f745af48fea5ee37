//! Unit tests for the dispatch module.

mod resolver_tests;
