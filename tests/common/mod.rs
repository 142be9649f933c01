#![allow(dead_code)]

pub mod command;
pub mod file;

pub use command::*;
pub use file::*;
