//! Application layer: state machines driven by the shell.

pub mod admin;
