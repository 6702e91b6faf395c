pub mod ext;
pub mod flatten;
pub mod group;
pub mod json;
pub mod range;
pub mod uniq;
pub mod without;

pub use crate::domain::model::{Groups, Nested, NestedList};
pub use crate::utils::error::Result;
