use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::ProductId;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// European article number as printed on the package.
    pub ean: String,
    pub price: f64,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub ean: String,
    pub price: f64,
}

impl NewProduct {
    #[must_use]
    pub fn new(name: impl Into<String>, ean: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into().trim().to_string(),
            ean: ean.into().trim().to_string(),
            price,
        }
    }
}
