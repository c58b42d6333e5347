//! Main module for qmltrace library functionality

pub mod ast;
pub mod formats;
pub mod lexing;
pub mod loader;
pub mod parsing;
pub mod testing;
pub mod trace;
