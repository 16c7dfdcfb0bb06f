//! Mock repository implementation for isolating services in tests.

use mockall::mock;

use crate::domain::category::{Category, NewCategory, UpdateCategory};
use crate::domain::customer::{Customer, NewCustomer, UpdateCustomer};
use crate::domain::product::{
    NewProduct, NewProductVariant, Product, ProductSummary, ProductVariant, UpdateProduct,
    UpdateProductVariant, VariantDetail,
};
use crate::domain::types::EntityStatus;
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    CategoryListQuery, CategoryReader, CategoryWriter, CustomerListQuery, CustomerReader,
    CustomerWriter, ProductListQuery, ProductReader, ProductWriter,
};

mock! {
    pub Repository {}

    impl CategoryReader for Repository {
        fn get_category_by_id(&self, id: &str) -> RepositoryResult<Option<Category>>;
        fn list_categories(
            &self,
            query: CategoryListQuery,
        ) -> RepositoryResult<(usize, Vec<Category>)>;
        fn list_category_names(&self) -> RepositoryResult<Vec<(String, String)>>;
    }

    impl CategoryWriter for Repository {
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

    impl CustomerReader for Repository {
        fn get_customer_by_id(&self, id: &str) -> RepositoryResult<Option<Customer>>;
        fn list_customers(
            &self,
            query: CustomerListQuery,
        ) -> RepositoryResult<(usize, Vec<Customer>)>;
    }

    impl CustomerWriter for Repository {
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

    impl ProductReader for Repository {
        fn get_product_by_id(&self, id: &str) -> RepositoryResult<Option<Product>>;
        fn list_products(
            &self,
            query: ProductListQuery,
        ) -> RepositoryResult<(usize, Vec<ProductSummary>)>;
        fn get_variant_by_id(&self, id: &str) -> RepositoryResult<Option<ProductVariant>>;
        fn list_variants(&self, product_id: &str) -> RepositoryResult<Vec<VariantDetail>>;
    }

    impl ProductWriter for Repository {
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
        fn update_variant(
            &self,
            updates: &UpdateProductVariant,
        ) -> RepositoryResult<ProductVariant>;
        fn set_variant_status(
            &self,
            id: &str,
            status: EntityStatus,
        ) -> RepositoryResult<ProductVariant>;
    }
}
