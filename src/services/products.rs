use crate::domain::filtration::{Filtration, ProductField};
use crate::domain::product::Product;
use crate::domain::types::{ProductId, TypeConstraintError};
use crate::dto::products::{PagedProductsData, ProductsPageData, SearchPageData, SearchParams};
use crate::pagination::Paginated;
use crate::repository::{ProductListQuery, ProductReader};
use crate::services::{ServiceError, ServiceResult};

/// Products shown on one page of the paginated table.
pub const PRODUCTS_PER_PAGE: usize = 2;

/// Longest accepted value of a single search parameter.
pub const MAX_FILTER_VALUE_LEN: usize = 255;

/// Loads every product for the main table.
pub fn load_all_products<R>(repo: &R) -> ServiceResult<ProductsPageData>
where
    R: ProductReader + ?Sized,
{
    let (_, products) = repo
        .list_products(ProductListQuery::new())
        .map_err(|err| {
            log::error!("Failed to list products: {err}");
            ServiceError::from(err)
        })?;

    Ok(ProductsPageData { products })
}

/// Translates the search page parameters into filtration rules.
pub fn build_filtration(params: &SearchParams) -> Filtration {
    let max_size = Some(MAX_FILTER_VALUE_LEN);

    Filtration::new()
        .equal(ProductField::Id, &params.id, max_size)
        .like(ProductField::Name, &params.name, max_size)
        .like(ProductField::Ean, &params.ean, max_size)
        .greater_equal(ProductField::Price, &params.price_gte, max_size)
        .less_equal(ProductField::Price, &params.price_lte, max_size)
}

/// Returns the products matching the submitted search parameters.
pub fn search_products<R>(repo: &R, params: SearchParams) -> ServiceResult<SearchPageData>
where
    R: ProductReader + ?Sized,
{
    let filtration = build_filtration(&params);

    let products = repo.search_products(&filtration).map_err(|err| {
        log::error!("Failed to search products: {err}");
        ServiceError::from(err)
    })?;

    Ok(SearchPageData {
        products,
        search: params,
    })
}

/// Fetches a single product. Identifiers that cannot be stored at all are
/// rejected as unprocessable; unknown ones are reported as missing.
pub fn load_product<R>(repo: &R, raw_id: u64) -> ServiceResult<Product>
where
    R: ProductReader + ?Sized,
{
    let product_id = match ProductId::try_from(raw_id) {
        Ok(product_id) => product_id,
        Err(TypeConstraintError::IdOutOfRange) => {
            return Err(ServiceError::InvalidRequest(format!(
                "product id {raw_id} is too large"
            )));
        }
        Err(_) => return Err(ServiceError::NotFound),
    };

    repo.get_product_by_id(product_id)
        .map_err(|err| {
            log::error!("Failed to load product {product_id}: {err}");
            ServiceError::from(err)
        })?
        .ok_or(ServiceError::NotFound)
}

/// Loads one page of the paginated product table. Pages outside
/// `1..=total_pages` do not exist.
pub fn load_products_page<R>(repo: &R, page: usize) -> ServiceResult<PagedProductsData>
where
    R: ProductReader + ?Sized,
{
    if page == 0 {
        return Err(ServiceError::NotFound);
    }

    let (total, products) = repo
        .list_products(ProductListQuery::new().paginate(page, PRODUCTS_PER_PAGE))
        .map_err(|err| {
            log::error!("Failed to list products page {page}: {err}");
            ServiceError::from(err)
        })?;

    let total_pages = total.div_ceil(PRODUCTS_PER_PAGE);
    if page > total_pages {
        return Err(ServiceError::NotFound);
    }

    Ok(PagedProductsData {
        products: Paginated::new(products, page, total_pages, PRODUCTS_PER_PAGE),
    })
}
