//! Forest building
//!
//! Turns matched lines into nodes and assembles them into a [`Forest`](crate::txtree::ast::Forest).

pub mod builder;
pub mod resolver;

pub use builder::{Attached, ForestBuilder};
pub use resolver::{NameResolver, NameServiceResolver, SimpleResolver};
