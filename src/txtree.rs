//! Main module for txtree library functionality

pub mod ast;
pub mod building;
pub mod formats;
pub mod grammar;
pub mod iter;
pub mod names;
pub mod parsing;
pub mod testing;
pub mod verify;
