//! Main module for ssf library functionality

pub mod ast;
pub mod config;
pub mod formats;
pub mod lexing;
pub mod loader;
pub mod parsing;
pub mod testing;
