//! Unit tests for configuration loading and precedence.
//!
//! Tests are organised into modules by functional area:
//! - `helpers`: Shared test utilities
//! - `cli_flags`: Command-line flag loading tests
//! - `precedence`: Layer precedence tests
//! - `operation_mode`: Operation mode determination tests
//! - `validation`: Configuration consistency validation tests

mod helpers;
mod operation_mode;
mod precedence;
