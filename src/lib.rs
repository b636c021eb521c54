//! locsplice: bounded section splicing for nested locale translation tables.
//!
//! A translation table is a source file holding one object literal per locale, each mapping
//! section names to nested objects of quoted strings. locsplice finds a section within one
//! locale by brace matching over the raw text and splices replacement text over it, leaving
//! every other byte of the file as it was.
//!
//! ```
//! let document = "'en-US': { landing: { a: 'x' }, other: { b: 'y' } }";
//! let patched =
//!     locsplice::edit_plan::replace_section(document, "en-US", "landing", "landing: { a: 'z' }")?;
//! assert_eq!(patched, "'en-US': { landing: { a: 'z' }, other: { b: 'y' } }");
//! # Ok::<(), locsplice::Error>(())
//! ```

pub mod config;
pub mod edit_plan;
pub mod error;
pub mod input;
pub mod scan;
pub mod section;

pub use edit_plan::{Edit, EditPlan};
pub use error::{Error, Result};
