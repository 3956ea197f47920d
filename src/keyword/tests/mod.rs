//! Unit tests for the keyword module.

mod domain_tests;
