use serde::{Deserialize, Serialize};

use crate::domain::customer::Customer;
use crate::dto::parse_page_value;
use crate::pagination::Paginated;
use crate::repository::{
    CustomerListQuery, CustomerSort, DEFAULT_PAGE_SIZE, ListOptions, SortDir, StatusFilter,
    TrashFilter,
};

/// Raw query-string options of the customers list view.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct CustomerListParams {
    pub q: Option<String>,
    pub city: Option<String>,
    pub status: Option<String>,
    pub trash: Option<String>,
    pub sort: Option<String>,
    pub dir: Option<String>,
    pub page: Option<String>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<String>,
}

impl CustomerListParams {
    pub fn to_query(&self) -> CustomerListQuery {
        let opts = ListOptions::new()
            .search(self.q.clone().unwrap_or_default())
            .status(StatusFilter::parse(self.status.as_deref().unwrap_or("")))
            .trash(TrashFilter::parse(self.trash.as_deref().unwrap_or("")))
            .dir(SortDir::parse(self.dir.as_deref().unwrap_or("")))
            .paginate(
                parse_page_value(self.page.as_deref(), 1),
                parse_page_value(self.page_size.as_deref(), DEFAULT_PAGE_SIZE),
            );

        CustomerListQuery::new()
            .sort(CustomerSort::parse(self.sort.as_deref().unwrap_or("")))
            .city(self.city.clone().unwrap_or_default())
            .options(opts)
    }
}

/// Data required to render the customers list template.
pub struct CustomerListPage {
    pub customers: Paginated<Customer>,
    pub total: usize,
}
