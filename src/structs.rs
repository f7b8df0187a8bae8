use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "f")]
    Female,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub sex: Sex,
}

impl User {
    pub fn is_male(&self) -> bool {
        self.sex == Sex::Male
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub title: String,
    pub icon: String,
    pub owner_id: i64,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub category_id: i64,
}

/// A product as it is listed inside its category.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ProductSummary {
    pub id: i64,
    pub name: String,
}

/// A category joined with its owner and its products.
///
/// `owner` is `None` when no user carries the category's `owner_id`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedCategory {
    pub id: i64,
    pub title: String,
    pub icon: String,
    pub owner_id: i64,
    pub owner: Option<User>,
    pub products: Vec<ProductSummary>,
}

impl EnrichedCategory {
    pub fn owner_name(&self) -> Option<&str> {
        self.owner.as_ref().map(|owner| owner.name.as_str())
    }
}

/// One line of the product table.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ProductRow {
    pub id: i64,
    pub name: String,
    pub category_icon: String,
    pub category_title: String,
    pub owner_name: Option<String>,
    pub owner_is_male: bool,
}
