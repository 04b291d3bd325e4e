pub mod author;
pub mod media;
pub mod media_type;
pub mod review;
pub mod user;
