use serde::{Deserialize, Serialize};

use crate::domain::product::{Product, ProductSummary, VariantDetail};
use crate::dto::parse_page_value;
use crate::pagination::Paginated;
use crate::repository::{
    DEFAULT_PAGE_SIZE, ListOptions, ProductListQuery, ProductSort, SortDir, StatusFilter,
    TrashFilter,
};

/// Raw query-string options of the products list view.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ProductListParams {
    pub q: Option<String>,
    #[serde(rename = "categoryId")]
    pub category_id: Option<String>,
    pub status: Option<String>,
    pub trash: Option<String>,
    pub sort: Option<String>,
    pub dir: Option<String>,
    pub page: Option<String>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<String>,
}

impl ProductListParams {
    pub fn to_query(&self) -> ProductListQuery {
        let opts = ListOptions::new()
            .search(self.q.clone().unwrap_or_default())
            .status(StatusFilter::parse(self.status.as_deref().unwrap_or("")))
            .trash(TrashFilter::parse(self.trash.as_deref().unwrap_or("")))
            .dir(SortDir::parse(self.dir.as_deref().unwrap_or("")))
            .paginate(
                parse_page_value(self.page.as_deref(), 1),
                parse_page_value(self.page_size.as_deref(), DEFAULT_PAGE_SIZE),
            );

        let category_id = self
            .category_id
            .as_deref()
            .filter(|id| !id.is_empty() && *id != "ALL")
            .unwrap_or_default();

        ProductListQuery::new()
            .sort(ProductSort::parse(self.sort.as_deref().unwrap_or("")))
            .category(category_id)
            .options(opts)
    }
}

/// Data required to render the products list template.
pub struct ProductListPage {
    pub products: Paginated<ProductSummary>,
    pub total: usize,
    /// `(id, name)` of live categories for the filter dropdown.
    pub categories: Vec<(String, String)>,
}

/// Data required to render the product detail template.
pub struct ProductDetailPage {
    pub product: Product,
    pub category_name: Option<String>,
    pub variants: Vec<VariantDetail>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_all_sentinel_means_no_filter() {
        let params = ProductListParams {
            category_id: Some("ALL".to_string()),
            ..Default::default()
        };
        assert_eq!(params.to_query().category_id, None);

        let params = ProductListParams {
            category_id: Some("cat-1".to_string()),
            ..Default::default()
        };
        assert_eq!(params.to_query().category_id.as_deref(), Some("cat-1"));
    }
}
