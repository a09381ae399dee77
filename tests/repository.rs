#![cfg(all(feature = "server", not(target_arch = "wasm32")))]

use product_catalog::domain::filtration::{Filtration, ProductField};
use product_catalog::domain::product::NewProduct;
use product_catalog::domain::types::ProductId;
use product_catalog::repository::{DieselRepository, ProductListQuery, ProductReader, ProductWriter};

mod common;

fn seeded_repository(test_db: &common::TestDb) -> DieselRepository {
    let repo = DieselRepository::new(test_db.pool().clone());
    let products = vec![
        NewProduct::new("Desk lamp", "4006381333931", 19.99),
        NewProduct::new("Floor lamp", "4006381333948", 49.5),
        NewProduct::new("Office chair", "5901234123457", 120.0),
    ];
    assert_eq!(repo.create_products(&products).unwrap(), 3);
    repo
}

#[test]
fn test_list_and_get_products() {
    let test_db = common::TestDb::new("test_list_and_get_products.db");
    let repo = seeded_repository(&test_db);

    let (total, items) = repo.list_products(ProductListQuery::new()).unwrap();
    assert_eq!(total, 3);
    let names: Vec<_> = items.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Desk lamp", "Floor lamp", "Office chair"]);

    let found = repo.get_product_by_id(items[1].id).unwrap().unwrap();
    assert_eq!(found.ean, "4006381333948");

    let missing = repo
        .get_product_by_id(ProductId::new(999).unwrap())
        .unwrap();
    assert!(missing.is_none());
}

#[test]
fn test_list_products_paginates() {
    let test_db = common::TestDb::new("test_list_products_paginates.db");
    let repo = seeded_repository(&test_db);

    let (total, page_two) = repo
        .list_products(ProductListQuery::new().paginate(2, 2))
        .unwrap();
    assert_eq!(total, 3);
    assert_eq!(page_two.len(), 1);
    assert_eq!(page_two[0].name, "Office chair");

    let (_, beyond) = repo
        .list_products(ProductListQuery::new().paginate(3, 2))
        .unwrap();
    assert!(beyond.is_empty());

    let (total, overflowing) = repo
        .list_products(ProductListQuery::new().paginate(usize::MAX, 2))
        .unwrap();
    assert_eq!(total, 3);
    assert!(overflowing.is_empty());
}

#[test]
fn test_search_products_combines_filters() {
    let test_db = common::TestDb::new("test_search_products_combines_filters.db");
    let repo = seeded_repository(&test_db);

    let lamps = repo
        .search_products(&Filtration::new().like(ProductField::Name, "lamp", Some(255)))
        .unwrap();
    assert_eq!(lamps.len(), 2);

    let cheap_lamps = repo
        .search_products(
            &Filtration::new()
                .like(ProductField::Name, "lamp", Some(255))
                .less_equal(ProductField::Price, "20", Some(255)),
        )
        .unwrap();
    assert_eq!(cheap_lamps.len(), 1);
    assert_eq!(cheap_lamps[0].name, "Desk lamp");

    let by_ean = repo
        .search_products(&Filtration::new().like(ProductField::Ean, "59012", Some(255)))
        .unwrap();
    assert_eq!(by_ean.len(), 1);
    assert_eq!(by_ean[0].name, "Office chair");

    let by_id = repo
        .search_products(&Filtration::new().equal(
            ProductField::Id,
            &by_ean[0].id.to_string(),
            Some(255),
        ))
        .unwrap();
    assert_eq!(by_id, by_ean);

    let priced = repo
        .search_products(
            &Filtration::new()
                .greater_equal(ProductField::Price, "40", Some(255))
                .less_equal(ProductField::Price, "200", Some(255)),
        )
        .unwrap();
    assert_eq!(priced.len(), 2);
}

#[test]
fn test_empty_filtration_returns_everything() {
    let test_db = common::TestDb::new("test_empty_filtration_returns_everything.db");
    let repo = seeded_repository(&test_db);

    let all = repo.search_products(&Filtration::new()).unwrap();
    assert_eq!(all.len(), 3);
}
