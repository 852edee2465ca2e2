//! Integration test modules

mod fetch_tests;
mod pipeline_tests;
