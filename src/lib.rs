//! Small generic helpers over in-memory sequences: flatten nested lists, group
//! by a derived key, generate integer ranges, deduplicate, and drop values.
//!
//! Every operation borrows its input and returns a fresh collection.
//!
//! ```
//! use smart_arrays::{flatten, group_by_key, nested, range_between, uniq, without};
//!
//! assert_eq!(flatten(&nested![0, [[1], 2], [[[3]]]]), vec![0, 1, 2, 3]);
//! assert_eq!(range_between(3, 7), vec![3, 4, 5, 6]);
//! assert_eq!(uniq(&[0, 1, 0, 1, 2, 3, 3, 2]), vec![0, 1, 2, 3]);
//! assert_eq!(without!([0, 1, 0, 2, 0, 3], 0, 4, 5), vec![1, 2, 3]);
//!
//! let jobs = group_by_key(&[("Luke", "Jedi"), ("Vador", "Sith")], |c| c.1);
//! assert_eq!(jobs["Sith"], [("Vador", "Sith")]);
//! ```

#[cfg(feature = "cli")]
pub mod app;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::core::ext::SmartSliceExt;
pub use crate::core::flatten::{flatten, flatten_owned};
pub use crate::core::group::{group_by, group_by_key};
pub use crate::core::range::{range, range_between};
pub use crate::core::uniq::{uniq, uniq_by};
pub use crate::core::without::without;
pub use crate::domain::model::{Groups, Nested, NestedList};
pub use crate::utils::error::{ArrayError, Result};
