use crate::db::{DbConnection, DbPool};
use crate::domain::filtration::Filtration;
use crate::domain::product::{NewProduct, Product};
use crate::domain::types::ProductId;
use crate::repository::errors::{RepositoryError, RepositoryResult};

pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod product;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    /// Number of rows to skip; page numbers start at 1. `None` when the page
    /// lies beyond any representable row offset.
    pub fn offset(&self) -> Option<usize> {
        self.page.saturating_sub(1).checked_mul(self.per_page)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProductListQuery {
    pub pagination: Option<Pagination>,
}

impl ProductListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

pub trait ProductReader {
    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>>;
    /// Returns the total number of products together with the requested slice.
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)>;
    fn search_products(&self, filtration: &Filtration) -> RepositoryResult<Vec<Product>>;
}

pub trait ProductWriter {
    fn create_products(&self, new_products: &[NewProduct]) -> RepositoryResult<usize>;
}

/// Diesel-backed repository shared by all handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        self.pool.get().map_err(|err| {
            log::error!("Failed to get connection from pool: {err}");
            RepositoryError::from(err)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_starts_at_first_page() {
        assert_eq!(Pagination { page: 0, per_page: 2 }.offset(), Some(0));
        assert_eq!(Pagination { page: 1, per_page: 2 }.offset(), Some(0));
        assert_eq!(Pagination { page: 3, per_page: 2 }.offset(), Some(4));
    }

    #[test]
    fn offset_overflow_is_none() {
        let pagination = Pagination {
            page: usize::MAX,
            per_page: 2,
        };
        assert_eq!(pagination.offset(), None);
    }
}
