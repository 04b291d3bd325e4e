use reviewhub_db::{Catalog, CatalogResult, DbPool};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the pool is reference counted internally.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: DbPool,
}

impl AppState {
    /// A catalog holding one pooled connection for the current request.
    pub async fn catalog(&self) -> CatalogResult<Catalog> {
        Catalog::acquire(&self.pool).await
    }
}
