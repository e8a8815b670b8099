//! CLI command implementations

pub mod compare;
pub mod enhance;
pub mod info;
pub mod synth;

pub mod json_output;
