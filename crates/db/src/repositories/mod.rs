//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&mut SqliteConnection` as the first argument, so a caller
//! can run several of them on one checked-out connection or transaction.
//! Lookups return `Option` and leave the not-found policy to
//! [`Catalog`](crate::Catalog).

pub mod author_repo;
pub mod media_repo;
pub mod media_type_repo;
pub mod review_repo;
pub mod user_repo;

pub use author_repo::AuthorRepo;
pub use media_repo::MediaRepo;
pub use media_type_repo::MediaTypeRepo;
pub use review_repo::ReviewRepo;
pub use user_repo::UserRepo;
