// src/lib.rs
pub use compare::compare;
pub use contains::contains;
pub use error::{ErrorKind, PathError};
pub use grammar::{PartKind, is_slug, split_exp, validate, validate_exp};
pub use resource::{ResourceKind, ResourceMap};
pub use types::{CPath, CPathExp};

mod compare;
mod contains;
mod error;
mod grammar;
mod matcher;
pub mod normalize;
pub mod resource;
mod types;
