//! ClearTake CLI library.
//!
//! This crate provides the core functionality for the ClearTake CLI,
//! including WAV input loading and the recording-enhancement commands.

pub mod commands;
pub mod input;
