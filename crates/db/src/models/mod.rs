//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - An entity struct as returned to callers (references resolved)
//! - A `Deserialize` create DTO for inserts
//!
//! Entities that embed other entities are loaded through a flat `FromRow`
//! row struct and converted with `From`.

pub mod author;
pub mod media;
pub mod media_type;
pub mod review;
pub mod user;
