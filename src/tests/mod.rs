//! tests/mod.rs
pub mod support;

mod handler_tests;
