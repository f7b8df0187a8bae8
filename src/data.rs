use std::path::Path;

use serde::de::DeserializeOwned;

use crate::{
    config::Config,
    errors::AppError,
    structs::{Category, Product, User},
};

const USERS_JSON: &str = include_str!("../data/users.json");
const CATEGORIES_JSON: &str = include_str!("../data/categories.json");
const PRODUCTS_JSON: &str = include_str!("../data/products.json");

/// The three source collections, loaded once at startup.
#[derive(Debug, Clone)]
pub struct SourceData {
    pub users: Vec<User>,
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
}

pub fn bundled() -> Result<SourceData, AppError> {
    Ok(SourceData {
        users: serde_json::from_str(USERS_JSON)?,
        categories: serde_json::from_str(CATEGORIES_JSON)?,
        products: serde_json::from_str(PRODUCTS_JSON)?,
    })
}

async fn read_collection<T: DeserializeOwned>(dir: &Path, file: &str) -> Result<Vec<T>, AppError> {
    let path = dir.join(file);
    let raw = tokio::fs::read_to_string(&path).await.map_err(|e| {
        log::error!("Failed to read {}: {}", path.display(), e);
        AppError::IoError(e)
    })?;
    serde_json::from_str(&raw).map_err(|e| {
        log::error!("Failed to parse {}: {}", path.display(), e);
        AppError::DataError(e)
    })
}

pub async fn from_dir(dir: &Path) -> Result<SourceData, AppError> {
    Ok(SourceData {
        users: read_collection(dir, "users.json").await?,
        categories: read_collection(dir, "categories.json").await?,
        products: read_collection(dir, "products.json").await?,
    })
}

pub async fn load(config: &Config) -> Result<SourceData, AppError> {
    let data = match &config.data_dir {
        Some(dir) => {
            log::info!("Loading catalog data from {}", dir.display());
            from_dir(dir).await?
        }
        None => {
            log::info!("Loading bundled catalog data");
            bundled()?
        }
    };
    log::info!(
        "Loaded {} users, {} categories, {} products",
        data.users.len(),
        data.categories.len(),
        data.products.len()
    );
    Ok(data)
}

/// Distinct user names in input order, one owner filter tab each.
pub fn owner_names(users: &[User]) -> Vec<String> {
    let mut names: Vec<String> = Vec::with_capacity(users.len());
    for user in users {
        if !names.contains(&user.name) {
            names.push(user.name.clone());
        }
    }
    names
}
