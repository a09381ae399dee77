use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::domain::filtration::{FilterOperation, FilterRule, FilterValue, Filtration, ProductField};
use crate::domain::product::{NewProduct, Product};
use crate::domain::types::ProductId;
use crate::models::product::{NewProduct as DbNewProduct, Product as DbProduct};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, ProductListQuery, ProductReader, ProductWriter};
use crate::schema::products;

fn into_domain(rows: Vec<DbProduct>) -> RepositoryResult<Vec<Product>> {
    rows.into_iter()
        .map(|row| Product::try_from(row).map_err(Into::into))
        .collect()
}

/// Narrows `query` by a single rule. Combinations the filtration builder never
/// produces leave the query untouched.
fn apply_rule<'a>(
    query: products::BoxedQuery<'a, Sqlite>,
    rule: &FilterRule,
) -> products::BoxedQuery<'a, Sqlite> {
    use FilterOperation::{Equal, GreaterEqual, LessEqual, Like};

    match (rule.field, rule.operation, &rule.value) {
        (ProductField::Id, Equal, FilterValue::Integer(id)) => query.filter(products::id.eq(*id)),
        (ProductField::Id, GreaterEqual, FilterValue::Integer(id)) => {
            query.filter(products::id.ge(*id))
        }
        (ProductField::Id, LessEqual, FilterValue::Integer(id)) => {
            query.filter(products::id.le(*id))
        }
        (ProductField::Price, Equal, FilterValue::Real(price)) => {
            query.filter(products::price.eq(*price))
        }
        (ProductField::Price, GreaterEqual, FilterValue::Real(price)) => {
            query.filter(products::price.ge(*price))
        }
        (ProductField::Price, LessEqual, FilterValue::Real(price)) => {
            query.filter(products::price.le(*price))
        }
        (ProductField::Name, operation, FilterValue::Text(text)) => match operation {
            Equal => query.filter(products::name.eq(text.clone())),
            Like => query.filter(products::name.like(format!("%{text}%"))),
            GreaterEqual => query.filter(products::name.ge(text.clone())),
            LessEqual => query.filter(products::name.le(text.clone())),
        },
        (ProductField::Ean, operation, FilterValue::Text(text)) => match operation {
            Equal => query.filter(products::ean.eq(text.clone())),
            Like => query.filter(products::ean.like(format!("%{text}%"))),
            GreaterEqual => query.filter(products::ean.ge(text.clone())),
            LessEqual => query.filter(products::ean.le(text.clone())),
        },
        _ => {
            log::warn!("Ignoring unsupported filter rule {rule:?}");
            query
        }
    }
}

impl ProductReader for DieselRepository {
    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>> {
        let mut conn = self.conn()?;
        let product = products::table
            .find(id.get())
            .first::<DbProduct>(&mut conn)
            .optional()?;

        product.map(Product::try_from).transpose().map_err(Into::into)
    }

    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)> {
        let mut conn = self.conn()?;

        let total: i64 = products::table.count().get_result(&mut conn)?;
        let total = usize::try_from(total).unwrap_or_default();

        let mut items: products::BoxedQuery<'_, Sqlite> = products::table
            .order((products::created_at.asc(), products::id.asc()))
            .into_boxed();

        if let Some(pagination) = &query.pagination {
            let limit = i64::try_from(pagination.per_page).ok();
            let offset = pagination
                .offset()
                .filter(|offset| *offset < total)
                .and_then(|offset| i64::try_from(offset).ok());
            // Pages past the last row never reach the database.
            let (Some(limit), Some(offset)) = (limit, offset) else {
                return Ok((total, Vec::new()));
            };
            items = items.limit(limit).offset(offset);
        }

        let items = items.load::<DbProduct>(&mut conn)?;

        Ok((total, into_domain(items)?))
    }

    fn search_products(&self, filtration: &Filtration) -> RepositoryResult<Vec<Product>> {
        let mut conn = self.conn()?;

        let items = filtration
            .rules()
            .iter()
            .fold(products::table.into_boxed(), apply_rule)
            .order((products::created_at.asc(), products::id.asc()))
            .load::<DbProduct>(&mut conn)?;

        into_domain(items)
    }
}

impl ProductWriter for DieselRepository {
    fn create_products(&self, new_products: &[NewProduct]) -> RepositoryResult<usize> {
        let mut conn = self.conn()?;
        let insertables: Vec<DbNewProduct> = new_products.iter().map(Into::into).collect();

        let affected = diesel::insert_into(products::table)
            .values(&insertables)
            .execute(&mut conn)?;

        Ok(affected)
    }
}
