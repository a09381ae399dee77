//! Product filtration rules built from user supplied search parameters.
//!
//! Each builder call validates its raw value and silently drops the rule when
//! the value is empty, too long or cannot be read as the field's type. Rules
//! that survive are combined with `AND` by the repository.

/// Columns of the product table that can be filtered on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProductField {
    Id,
    Name,
    Ean,
    Price,
}

impl ProductField {
    fn is_text(self) -> bool {
        matches!(self, ProductField::Name | ProductField::Ean)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterOperation {
    /// Strict comparison (`=`).
    Equal,
    /// Substring match (`LIKE '%value%'`).
    Like,
    /// `>=`
    GreaterEqual,
    /// `<=`
    LessEqual,
}

/// Filter value already converted to the column type.
#[derive(Clone, Debug, PartialEq)]
pub enum FilterValue {
    Integer(i32),
    Real(f64),
    Text(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct FilterRule {
    pub field: ProductField,
    pub operation: FilterOperation,
    pub value: FilterValue,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Filtration {
    rules: Vec<FilterRule>,
}

impl Filtration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Strict comparison filter.
    pub fn equal(self, field: ProductField, value: &str, max_size: Option<usize>) -> Self {
        self.push(field, FilterOperation::Equal, value, max_size)
    }

    /// Substring filter; only applies to text columns.
    pub fn like(self, field: ProductField, value: &str, max_size: Option<usize>) -> Self {
        if !field.is_text() {
            log::debug!("LIKE filter is not supported for {field:?}");
            return self;
        }
        self.push(field, FilterOperation::Like, value, max_size)
    }

    /// Greater-or-equal filter.
    pub fn greater_equal(self, field: ProductField, value: &str, max_size: Option<usize>) -> Self {
        self.push(field, FilterOperation::GreaterEqual, value, max_size)
    }

    /// Less-or-equal filter.
    pub fn less_equal(self, field: ProductField, value: &str, max_size: Option<usize>) -> Self {
        self.push(field, FilterOperation::LessEqual, value, max_size)
    }

    pub fn rules(&self) -> &[FilterRule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// A filter value must be non-empty and no longer than `max_size`
    /// characters.
    pub fn is_valid_filtration_value(value: &str, max_size: Option<usize>) -> bool {
        if value.is_empty() {
            return false;
        }

        match max_size {
            Some(max_size) => value.chars().count() <= max_size,
            None => true,
        }
    }

    fn push(
        mut self,
        field: ProductField,
        operation: FilterOperation,
        raw: &str,
        max_size: Option<usize>,
    ) -> Self {
        if !Self::is_valid_filtration_value(raw, max_size) {
            return self;
        }

        let value = match field {
            // Unreadable ids drop the rule, so `id=abc` widens the search
            // instead of matching nothing.
            ProductField::Id => raw.trim().parse().ok().map(FilterValue::Integer),
            ProductField::Price => raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|price| price.is_finite())
                .map(FilterValue::Real),
            ProductField::Name | ProductField::Ean => Some(FilterValue::Text(raw.to_string())),
        };

        match value {
            Some(value) => self.rules.push(FilterRule {
                field,
                operation,
                value,
            }),
            None => log::debug!("Skipping {field:?} filter with unreadable value '{raw}'"),
        }
        self
    }
}
