use crate::{
    structs::{Category, EnrichedCategory, Product, ProductRow, ProductSummary, User},
    utils::contains_ignore_case,
};

/// Joins every category with its owner and its products.
///
/// Output order follows `categories`; products keep their input order.
pub fn build_categories(
    users: &[User],
    categories: &[Category],
    products: &[Product],
) -> Vec<EnrichedCategory> {
    categories
        .iter()
        .map(|category| EnrichedCategory {
            id: category.id,
            title: category.title.clone(),
            icon: category.icon.clone(),
            owner_id: category.owner_id,
            owner: users.iter().find(|user| user.id == category.owner_id).cloned(),
            products: products
                .iter()
                .filter(|product| product.category_id == category.id)
                .map(|product| ProductSummary {
                    id: product.id,
                    name: product.name.clone(),
                })
                .collect(),
        })
        .collect()
}

/// Narrows categories by exact owner name, then by a case-insensitive
/// search over product names. Empty criteria do not filter.
pub fn filter_categories<'a>(
    categories: &'a [EnrichedCategory],
    selected_owner_name: &str,
    search_query: &str,
) -> Vec<&'a EnrichedCategory> {
    if selected_owner_name.is_empty() && search_query.is_empty() {
        return categories.iter().collect();
    }

    categories
        .iter()
        .filter(|category| {
            selected_owner_name.is_empty() || category.owner_name() == Some(selected_owner_name)
        })
        .filter(|category| {
            search_query.is_empty()
                || category
                    .products
                    .iter()
                    .any(|product| contains_ignore_case(&product.name, search_query))
        })
        .collect()
}

/// Flattens categories into table rows, category by category.
pub fn product_rows(categories: &[&EnrichedCategory]) -> Vec<ProductRow> {
    categories
        .iter()
        .flat_map(|category| {
            category.products.iter().map(move |product| ProductRow {
                id: product.id,
                name: product.name.clone(),
                category_icon: category.icon.clone(),
                category_title: category.title.clone(),
                owner_name: category.owner_name().map(str::to_owned),
                owner_is_male: category.owner.as_ref().is_some_and(User::is_male),
            })
        })
        .collect()
}

/// Ids of categories whose owner did not resolve, paired with the dangling owner id.
pub fn missing_owners(categories: &[EnrichedCategory]) -> Vec<(i64, i64)> {
    categories
        .iter()
        .filter(|category| category.owner.is_none())
        .map(|category| (category.id, category.owner_id))
        .collect()
}
