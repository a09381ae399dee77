//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::filtration::Filtration;
use crate::domain::product::{NewProduct, Product};
use crate::domain::types::ProductId;
use crate::repository::errors::RepositoryResult;
use crate::repository::{ProductListQuery, ProductReader, ProductWriter};

mock! {
    pub Repository {}

    impl ProductReader for Repository {
        fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>>;
        fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)>;
        fn search_products(&self, filtration: &Filtration) -> RepositoryResult<Vec<Product>>;
    }

    impl ProductWriter for Repository {
        fn create_products(&self, new_products: &[NewProduct]) -> RepositoryResult<usize>;
    }
}
