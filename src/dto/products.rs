use serde::{Deserialize, Serialize};

use crate::domain::product::Product;
use crate::pagination::Paginated;

/// Query parameters accepted by the product search page. Every field is
/// echoed back into the search inputs of the rendered table.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct SearchParams {
    pub id: String,
    pub name: String,
    pub ean: String,
    pub price_gte: String,
    pub price_lte: String,
}

/// Data required to render the full product table.
#[derive(Debug)]
pub struct ProductsPageData {
    pub products: Vec<Product>,
}

/// Data required to render the search results.
#[derive(Debug)]
pub struct SearchPageData {
    pub products: Vec<Product>,
    pub search: SearchParams,
}

/// Data required to render one page of the paginated table.
#[derive(Debug)]
pub struct PagedProductsData {
    pub products: Paginated<Product>,
}
