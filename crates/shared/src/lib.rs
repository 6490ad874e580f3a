//! Catalog data model shared between the catalog engine and its front-ends.

pub mod domain;
pub mod error;
pub mod protocol;
