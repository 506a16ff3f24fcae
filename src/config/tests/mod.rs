//! Bindings file tests

mod bindings_tests;
