//! Integration tests: the full router served on an ephemeral port

mod api_tests;
mod support;
