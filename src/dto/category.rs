use serde::{Deserialize, Serialize};

use crate::domain::category::Category;
use crate::dto::parse_page_value;
use crate::pagination::Paginated;
use crate::repository::{
    CategoryListQuery, CategorySort, DEFAULT_PAGE_SIZE, ListOptions, SortDir, StatusFilter,
    TrashFilter,
};

/// Raw query-string options of the categories list view. Every value is
/// optional and parsed permissively; bad input falls back to the default.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct CategoryListParams {
    pub q: Option<String>,
    pub status: Option<String>,
    pub trash: Option<String>,
    pub sort: Option<String>,
    pub dir: Option<String>,
    pub page: Option<String>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<String>,
}

impl CategoryListParams {
    pub fn to_query(&self) -> CategoryListQuery {
        let opts = ListOptions::new()
            .search(self.q.clone().unwrap_or_default())
            .status(StatusFilter::parse(self.status.as_deref().unwrap_or("")))
            .trash(TrashFilter::parse(self.trash.as_deref().unwrap_or("")))
            .dir(SortDir::parse(self.dir.as_deref().unwrap_or("")))
            .paginate(
                parse_page_value(self.page.as_deref(), 1),
                parse_page_value(self.page_size.as_deref(), DEFAULT_PAGE_SIZE),
            );

        CategoryListQuery::new()
            .sort(CategorySort::parse(self.sort.as_deref().unwrap_or("")))
            .options(opts)
    }
}

/// Data required to render the categories list template.
pub struct CategoryListPage {
    pub categories: Paginated<Category>,
    pub total: usize,
}
