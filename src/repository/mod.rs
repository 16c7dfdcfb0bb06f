//! Repository traits and the list-query vocabulary shared by every listable
//! entity.
//!
//! Every list view is described by [`ListOptions`] (search, status, trash,
//! direction, normalized pagination) plus an entity-specific sort key and
//! optional extra filters. Repositories answer with `(total, items)`: a
//! bounded page and an unbounded count taken as two independent reads.

use crate::db::DbPool;
use crate::domain::category::{Category, NewCategory, UpdateCategory};
use crate::domain::customer::{Customer, NewCustomer, UpdateCustomer};
use crate::domain::product::{
    NewProduct, NewProductVariant, Product, ProductSummary, ProductVariant, UpdateProduct,
    UpdateProductVariant, VariantDetail,
};
use crate::domain::types::EntityStatus;
use crate::repository::errors::RepositoryResult;

pub mod category;
pub mod customer;
pub mod errors;
#[cfg(test)]
pub mod mock;
pub mod product;

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const MIN_PAGE_SIZE: usize = 5;
pub const MAX_PAGE_SIZE: usize = 50;

/// Status filter over the `status` column; `All` adds no clause.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    /// Permissive parse: anything unrecognized means no filtering.
    pub fn parse(value: &str) -> Self {
        match value {
            "ACTIVE" => StatusFilter::Active,
            "INACTIVE" => StatusFilter::Inactive,
            _ => StatusFilter::All,
        }
    }

    pub fn as_status(&self) -> Option<EntityStatus> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Active => Some(EntityStatus::Active),
            StatusFilter::Inactive => Some(EntityStatus::Inactive),
        }
    }
}

/// Tri-state visibility of soft-deleted rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TrashFilter {
    #[default]
    Exclude,
    Only,
    Include,
}

impl TrashFilter {
    pub fn parse(value: &str) -> Self {
        match value {
            "ONLY" => TrashFilter::Only,
            "INCLUDE" => TrashFilter::Include,
            _ => TrashFilter::Exclude,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    #[default]
    Desc,
}

impl SortDir {
    pub fn parse(value: &str) -> Self {
        match value {
            "asc" => SortDir::Asc,
            _ => SortDir::Desc,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategorySort {
    #[default]
    CreatedAt,
    Name,
    Status,
}

impl CategorySort {
    pub fn parse(value: &str) -> Self {
        match value {
            "name" => CategorySort::Name,
            "status" => CategorySort::Status,
            _ => CategorySort::CreatedAt,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CustomerSort {
    #[default]
    CreatedAt,
    CompanyName,
    City,
}

impl CustomerSort {
    pub fn parse(value: &str) -> Self {
        match value {
            "companyName" => CustomerSort::CompanyName,
            "city" => CustomerSort::City,
            _ => CustomerSort::CreatedAt,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProductSort {
    #[default]
    CreatedAt,
    Name,
    Status,
}

impl ProductSort {
    pub fn parse(value: &str) -> Self {
        match value {
            "name" => ProductSort::Name,
            "status" => ProductSort::Status,
            _ => ProductSort::CreatedAt,
        }
    }
}

/// Options common to every list view. Page and page size are normalized on
/// the way in and never leave the legal range.
#[derive(Debug, Clone)]
pub struct ListOptions {
    pub search: Option<String>,
    pub status: StatusFilter,
    pub trash: TrashFilter,
    pub dir: SortDir,
    page: usize,
    page_size: usize,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            search: None,
            status: StatusFilter::default(),
            trash: TrashFilter::default(),
            dir: SortDir::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        let term = term.into().trim().to_string();
        self.search = if term.is_empty() { None } else { Some(term) };
        self
    }

    pub fn status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    pub fn trash(mut self, trash: TrashFilter) -> Self {
        self.trash = trash;
        self
    }

    pub fn dir(mut self, dir: SortDir) -> Self {
        self.dir = dir;
        self
    }

    pub fn paginate(mut self, page: usize, page_size: usize) -> Self {
        self.page = page.max(1);
        self.page_size = page_size.clamp(MIN_PAGE_SIZE, MAX_PAGE_SIZE);
        self
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn offset(&self) -> i64 {
        ((self.page - 1) * self.page_size) as i64
    }

    pub fn limit(&self) -> i64 {
        self.page_size as i64
    }
}

#[derive(Debug, Clone, Default)]
pub struct CategoryListQuery {
    pub opts: ListOptions,
    pub sort: CategorySort,
}

impl CategoryListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sort(mut self, sort: CategorySort) -> Self {
        self.sort = sort;
        self
    }

    pub fn options(mut self, opts: ListOptions) -> Self {
        self.opts = opts;
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct CustomerListQuery {
    pub opts: ListOptions,
    pub sort: CustomerSort,
    /// Exact-match (case-insensitive) city filter.
    pub city: Option<String>,
}

impl CustomerListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sort(mut self, sort: CustomerSort) -> Self {
        self.sort = sort;
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        let city = city.into().trim().to_string();
        self.city = if city.is_empty() { None } else { Some(city) };
        self
    }

    pub fn options(mut self, opts: ListOptions) -> Self {
        self.opts = opts;
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProductListQuery {
    pub opts: ListOptions,
    pub sort: ProductSort,
    /// Exact-match category filter.
    pub category_id: Option<String>,
}

impl ProductListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sort(mut self, sort: ProductSort) -> Self {
        self.sort = sort;
        self
    }

    pub fn category(mut self, category_id: impl Into<String>) -> Self {
        let category_id = category_id.into().trim().to_string();
        self.category_id = if category_id.is_empty() {
            None
        } else {
            Some(category_id)
        };
        self
    }

    pub fn options(mut self, opts: ListOptions) -> Self {
        self.opts = opts;
        self
    }
}

pub trait CategoryReader {
    fn get_category_by_id(&self, id: &str) -> RepositoryResult<Option<Category>>;
    fn list_categories(&self, query: CategoryListQuery) -> RepositoryResult<(usize, Vec<Category>)>;
    /// `(id, name)` pairs for select inputs; excludes trashed rows.
    fn list_category_names(&self) -> RepositoryResult<Vec<(String, String)>>;
}

pub trait CategoryWriter {
    fn create_category(&self, new: &NewCategory, author: &str) -> RepositoryResult<Category>;
    fn update_category(
        &self,
        id: &str,
        updates: &UpdateCategory,
        author: &str,
    ) -> RepositoryResult<Category>;
    fn soft_delete_category(&self, id: &str, author: &str) -> RepositoryResult<()>;
    fn restore_category(&self, id: &str, author: &str) -> RepositoryResult<()>;
}

pub trait CustomerReader {
    fn get_customer_by_id(&self, id: &str) -> RepositoryResult<Option<Customer>>;
    fn list_customers(&self, query: CustomerListQuery) -> RepositoryResult<(usize, Vec<Customer>)>;
}

pub trait CustomerWriter {
    fn create_customer(&self, new: &NewCustomer, author: &str) -> RepositoryResult<Customer>;
    fn update_customer(
        &self,
        id: &str,
        updates: &UpdateCustomer,
        author: &str,
    ) -> RepositoryResult<Customer>;
    fn soft_delete_customer(&self, id: &str, author: &str) -> RepositoryResult<()>;
    fn restore_customer(&self, id: &str, author: &str) -> RepositoryResult<()>;
}

pub trait ProductReader {
    fn get_product_by_id(&self, id: &str) -> RepositoryResult<Option<Product>>;
    fn list_products(
        &self,
        query: ProductListQuery,
    ) -> RepositoryResult<(usize, Vec<ProductSummary>)>;
    fn get_variant_by_id(&self, id: &str) -> RepositoryResult<Option<ProductVariant>>;
    /// Variants of one product with media and component rows attached.
    fn list_variants(&self, product_id: &str) -> RepositoryResult<Vec<VariantDetail>>;
}

pub trait ProductWriter {
    fn create_product(&self, new: &NewProduct, author: &str) -> RepositoryResult<Product>;
    fn update_product(
        &self,
        id: &str,
        updates: &UpdateProduct,
        author: &str,
    ) -> RepositoryResult<Product>;
    fn soft_delete_product(&self, id: &str, author: &str) -> RepositoryResult<()>;
    fn restore_product(&self, id: &str, author: &str) -> RepositoryResult<()>;
    fn create_variant(&self, new: &NewProductVariant) -> RepositoryResult<ProductVariant>;
    fn update_variant(&self, updates: &UpdateProductVariant) -> RepositoryResult<ProductVariant>;
    fn set_variant_status(&self, id: &str, status: EntityStatus)
    -> RepositoryResult<ProductVariant>;
}

/// Diesel-backed implementation of all repository traits.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_is_normalized() {
        let opts = ListOptions::new().paginate(0, 0);
        assert_eq!(opts.page(), 1);
        assert_eq!(opts.page_size(), MIN_PAGE_SIZE);
        assert_eq!(opts.offset(), 0);

        let opts = ListOptions::new().paginate(3, 500);
        assert_eq!(opts.page(), 3);
        assert_eq!(opts.page_size(), MAX_PAGE_SIZE);
        assert_eq!(opts.offset(), 100);
        assert_eq!(opts.limit(), 50);
    }

    #[test]
    fn filters_parse_permissively() {
        assert_eq!(StatusFilter::parse("ACTIVE"), StatusFilter::Active);
        assert_eq!(StatusFilter::parse("bogus"), StatusFilter::All);
        assert_eq!(TrashFilter::parse("ONLY"), TrashFilter::Only);
        assert_eq!(TrashFilter::parse("bogus"), TrashFilter::Exclude);
        assert_eq!(SortDir::parse("asc"), SortDir::Asc);
        assert_eq!(SortDir::parse("bogus"), SortDir::Desc);
        assert_eq!(CustomerSort::parse("companyName"), CustomerSort::CompanyName);
        assert_eq!(CustomerSort::parse("bogus"), CustomerSort::CreatedAt);
    }

    #[test]
    fn blank_search_and_city_are_dropped() {
        let opts = ListOptions::new().search("   ");
        assert_eq!(opts.search, None);
        let query = CustomerListQuery::new().city(" ");
        assert_eq!(query.city, None);
    }
}
