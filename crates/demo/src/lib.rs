// File: crates/demo/src/lib.rs
// Summary: Library half of the `fitchart` binary so commands can be driven from tests.

pub mod cli;
pub mod commands;
pub mod config;
pub mod decode;
