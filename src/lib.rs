#![forbid(unsafe_code)]
//! lstree — print a directory hierarchy with box-drawing connectors.

pub mod cli;
pub mod error;
pub mod logging;
pub mod printer;
pub mod render;
pub mod tree;
