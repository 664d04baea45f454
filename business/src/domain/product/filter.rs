use regex::{Regex, RegexBuilder};

use super::model::Product;
use super::value_objects::ProductStatus;
use crate::domain::shared::value_objects::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockCondition {
    InStock,
    SoldOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCondition {
    Is(ProductStatus),
    IsNot(ProductStatus),
}

/// Selection criteria for product listings.
///
/// Every listing in the catalog is one of the named constructors below.
/// Repository adapters translate the same criteria into their own queries;
/// `matches` is the reference semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub owner: Option<UserId>,
    /// Case-insensitive substring of the product name, taken literally.
    pub keyword: Option<String>,
    pub stock: Option<StockCondition>,
    pub status: Option<StatusCondition>,
}

impl ProductFilter {
    /// Public catalog: everything with stock left, optionally narrowed by name.
    pub fn available(keyword: Option<String>) -> Self {
        Self {
            keyword: keyword.filter(|k| !k.is_empty()),
            stock: Some(StockCondition::InStock),
            ..Self::default()
        }
    }

    pub fn waitlisted(owner: UserId) -> Self {
        Self {
            owner: Some(owner),
            stock: Some(StockCondition::InStock),
            status: Some(StatusCondition::IsNot(ProductStatus::Cancelled)),
            ..Self::default()
        }
    }

    pub fn dispatch_ready(owner: UserId) -> Self {
        Self {
            owner: Some(owner),
            stock: Some(StockCondition::SoldOut),
            status: Some(StatusCondition::Is(ProductStatus::Placed)),
            ..Self::default()
        }
    }

    pub fn dispatched(owner: UserId) -> Self {
        Self {
            owner: Some(owner),
            status: Some(StatusCondition::Is(ProductStatus::Dispatched)),
            ..Self::default()
        }
    }

    /// Keyword as an escaped, case-insensitive pattern.
    pub fn keyword_pattern(&self) -> Option<String> {
        self.keyword.as_deref().map(regex::escape)
    }

    pub fn matches(&self, product: &Product) -> bool {
        if let Some(owner) = &self.owner
            && owner != &product.user_id
        {
            return false;
        }

        if let Some(stock) = self.stock {
            let in_condition = match (stock, product.remaining_quantity) {
                (StockCondition::InStock, Some(q)) => q > 0,
                (StockCondition::SoldOut, Some(q)) => q == 0,
                (_, None) => false,
            };
            if !in_condition {
                return false;
            }
        }

        if let Some(status) = self.status {
            let in_condition = match status {
                StatusCondition::Is(s) => product.status == s,
                StatusCondition::IsNot(s) => product.status != s,
            };
            if !in_condition {
                return false;
            }
        }

        match self.keyword_regex() {
            Some(regex) => product
                .name
                .as_deref()
                .is_some_and(|name| regex.is_match(name)),
            None => true,
        }
    }

    fn keyword_regex(&self) -> Option<Regex> {
        let pattern = self.keyword_pattern()?;
        RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .build()
            .ok()
    }
}
