//! Value types for credential paths.
//!
//! Canonical string forms:
//! - Literal path: `/org/project/environment/service/identity/instance`
//! - Path expression: `/org/project/[ci|dev-*]/api/*/*`
//!
//! Both are parse-or-fail values with no mutation API; serde uses the
//! canonical string form in both directions.

mod path;
mod path_exp;

pub use path::CPath;
pub use path_exp::CPathExp;
