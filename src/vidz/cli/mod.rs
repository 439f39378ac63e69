//! The binary's CLI layer: clap surface, message printing, and the
//! interactive shell. Nothing here is part of the library API.

pub mod commands;
pub mod print;
pub mod shell;
