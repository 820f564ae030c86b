//! Internal `serde` data structures that map directly to the PLCnext XML
//! configuration schemas.
//!
//! One module per document kind. These structs mirror the raw element and
//! attribute layout of the files and are not part of the public API; the
//! readers project them onto the types in [`crate::types`]. Optional
//! collections are modeled as defaulted `Vec`s so that an absent collection
//! reads as empty rather than failing.

pub mod acf;
pub mod esm;
pub mod gds;
pub mod meta;
