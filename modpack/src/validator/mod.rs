//! Descriptor validation.
//!
//! [`validate`] is a pure function over a [`Mod`](crate::descriptor::Mod)
//! producing a [`ValidationReport`]. Invalid data is a normal result, not an
//! error: the report lists every broken rule in a stable order.
//!
//! # Rules
//!
//! 1. Required fields: ID, Name, Author, Release Date, Category, Description,
//!    Link and at least one mod file link
//! 2. Mod file links end in `.json` or `.xml`
//! 3. A preview, when present, exceeds 50 pixels on both axes
//! 4. At least one downloadable; each has a name, a source and an install type
//! 5. A non-empty "always install" payload, at least one configuration, or both
//! 6. A present "always install" payload is non-empty
//! 7. Each configuration has a name, a description and choices; each choice
//!    has a name and does not lead back to its own configuration
//! 8. Exactly one root when several configurations exist; never more than one
//! 9. Configuration names are unique and every next-configuration name exists

mod report;
mod rules;

pub use report::{ValidationReport, Violation, ViolationKind};
pub use rules::validate;
