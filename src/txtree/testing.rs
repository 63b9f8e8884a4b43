//! Testing utilities for forest assertions
//!
//! Checking a parsed forest by hand means indexing through roots, children and synonyms
//! and asserting one field at a time:
//!
//! ```rust-example
//! let abies = &forest.roots()[0].children()[0];
//! assert_eq!(abies.name(), "Abies");
//! assert_eq!(abies.rank_tag(), Some("genus"));
//! assert_eq!(abies.synonyms().len(), 1);
//! assert_eq!(abies.synonyms()[0].name(), "Picea");
//! ```
//!
//! The fluent API states the expected shape in one place:
//!
//! ```rust-example
//! use crate::txtree::testing::assert_forest;
//!
//! assert_forest(&forest)
//!     .root_count(1)
//!     .root(0, |family| {
//!         family.name("Pinaceae").child(0, |genus| {
//!             genus
//!                 .name("Abies")
//!                 .rank_tag("genus")
//!                 .synonym(0, |s| s.name("Picea").homotypic(false))
//!         })
//!     });
//! ```
//!
//! Failures report the path to the offending node, e.g.
//! `roots[0]:children[0]:synonyms[0]: Expected name 'Picea', found 'Pinus'`.

mod assertions;

pub use assertions::{assert_forest, ForestAssertion, NodeAssertion};
