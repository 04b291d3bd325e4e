//! Domain types shared by the review catalog crates.
//!
//! Holds the id alias, the domain error taxonomy, and the boundary
//! validation rules. Nothing in here touches the database.

pub mod error;
pub mod types;
pub mod validation;
