//! Request-scoped access to the catalog.
//!
//! A [`Catalog`] checks one connection out of the pool when it is acquired
//! and holds it until it is dropped. Every operation of a request runs on
//! that connection, and the connection goes back to the pool on every exit
//! path, errors and panics included. Nothing is cached between calls.

use reviewhub_core::error::CoreError;
use reviewhub_core::types::DbId;
use sqlx::pool::PoolConnection;
use sqlx::{Connection, Sqlite};

use crate::models::author::{Author, CreateAuthor};
use crate::models::media::{CreateMedia, Media};
use crate::models::media_type::{CreateMediaType, MediaType};
use crate::models::review::{CreateReview, Review};
use crate::models::user::{CreateUser, User};
use crate::repositories::{AuthorRepo, MediaRepo, MediaTypeRepo, ReviewRepo, UserRepo};
use crate::DbPool;

/// Errors produced by [`Catalog`] operations.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// A lookup came back empty.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Anything the database rejected, foreign key violations included.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl CatalogError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::Core(core) if core.is_not_found())
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Typed create/read operations over the catalog tables.
///
/// Owns the request's unit of work: one pooled connection.
pub struct Catalog {
    conn: PoolConnection<Sqlite>,
}

impl Catalog {
    /// Check a connection out of `pool` for the lifetime of the catalog.
    pub async fn acquire(pool: &DbPool) -> CatalogResult<Self> {
        let conn = pool.acquire().await?;
        Ok(Self { conn })
    }

    // -- Users --------------------------------------------------------------

    pub async fn create_user(&mut self, input: &CreateUser) -> CatalogResult<User> {
        let user = UserRepo::create(&mut *self.conn, input).await?;
        tracing::info!(user_id = user.id, "User created");
        Ok(user)
    }

    pub async fn get_user(&mut self, user_id: DbId) -> CatalogResult<User> {
        UserRepo::find_by_id(&mut *self.conn, user_id)
            .await?
            .ok_or_else(|| miss(CoreError::not_found("User", user_id)))
    }

    /// List a user's reviews in insertion order.
    ///
    /// An existing user without reviews yields an empty list; an unknown
    /// user is a not-found error. The existence check and the listing read
    /// inside one transaction.
    pub async fn get_user_reviews(&mut self, user_id: DbId) -> CatalogResult<Vec<Review>> {
        let mut tx = self.conn.begin().await?;
        if UserRepo::find_by_id(&mut *tx, user_id).await?.is_none() {
            return Err(miss(CoreError::not_found("User", user_id)));
        }
        let reviews = ReviewRepo::list_by_user(&mut *tx, user_id).await?;
        tx.commit().await?;
        Ok(reviews)
    }

    // -- Reviews ------------------------------------------------------------

    pub async fn create_review(&mut self, input: &CreateReview) -> CatalogResult<Review> {
        let review = ReviewRepo::create(&mut *self.conn, input).await?;
        tracing::info!(
            review_id = review.id,
            media_id = review.media_id,
            user_id = review.user_id,
            rating = review.rating,
            "Review created",
        );
        Ok(review)
    }

    pub async fn get_review(&mut self, review_id: DbId) -> CatalogResult<Review> {
        ReviewRepo::find_by_id(&mut *self.conn, review_id)
            .await?
            .ok_or_else(|| miss(CoreError::not_found("Review", review_id)))
    }

    // -- Media --------------------------------------------------------------

    pub async fn create_media(&mut self, input: &CreateMedia) -> CatalogResult<Media> {
        let media = MediaRepo::create(&mut *self.conn, input).await?;
        tracing::info!(
            media_id = media.id,
            media_type_id = media.media_type_id,
            author_id = ?media.author_id,
            "Media created",
        );
        Ok(media)
    }

    pub async fn get_media(&mut self, media_id: DbId) -> CatalogResult<Media> {
        MediaRepo::find_by_id(&mut *self.conn, media_id)
            .await?
            .ok_or_else(|| miss(CoreError::not_found("Media", media_id)))
    }

    // -- Media types --------------------------------------------------------

    pub async fn create_media_type(&mut self, input: &CreateMediaType) -> CatalogResult<MediaType> {
        let media_type = MediaTypeRepo::create(&mut *self.conn, input).await?;
        tracing::info!(media_type_id = media_type.id, name = %media_type.name, "Media type created");
        Ok(media_type)
    }

    pub async fn get_media_type(&mut self, media_type_id: DbId) -> CatalogResult<MediaType> {
        MediaTypeRepo::find_by_id(&mut *self.conn, media_type_id)
            .await?
            .ok_or_else(|| miss(CoreError::not_found("MediaType", media_type_id)))
    }

    /// Look up a media type by name. With duplicate names the oldest row wins.
    pub async fn get_media_type_by_name(&mut self, name: &str) -> CatalogResult<MediaType> {
        MediaTypeRepo::find_by_name(&mut *self.conn, name)
            .await?
            .ok_or_else(|| miss(CoreError::not_found_by_name("MediaType", name)))
    }

    // -- Authors ------------------------------------------------------------

    pub async fn create_author(&mut self, input: &CreateAuthor) -> CatalogResult<Author> {
        let author = AuthorRepo::create(&mut *self.conn, input).await?;
        tracing::info!(author_id = author.id, "Author created");
        Ok(author)
    }

    pub async fn get_author(&mut self, author_id: DbId) -> CatalogResult<Author> {
        AuthorRepo::find_by_id(&mut *self.conn, author_id)
            .await?
            .ok_or_else(|| miss(CoreError::not_found("Author", author_id)))
    }

    /// The author's media with the highest mean rating, lowest id on ties.
    ///
    /// The author is not looked up first: an unknown author, an author with
    /// no media, and an author whose media have no reviews all produce the
    /// same not-found error.
    pub async fn get_author_highest_rated_media(&mut self, author_id: DbId) -> CatalogResult<Media> {
        MediaRepo::find_highest_rated_by_author(&mut *self.conn, author_id)
            .await?
            .ok_or_else(|| miss(CoreError::no_rated_media(author_id)))
    }
}

fn miss(err: CoreError) -> CatalogError {
    tracing::debug!(error = %err, "Lookup miss");
    CatalogError::Core(err)
}
