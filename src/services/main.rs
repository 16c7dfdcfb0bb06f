use crate::dto::main::DashboardData;
use crate::repository::{
    CategoryListQuery, CategoryReader, CustomerListQuery, CustomerReader, ProductListQuery,
    ProductReader,
};
use crate::services::ServiceResult;

/// Live record counts shown on the landing page. Trashed rows are excluded by
/// the default query.
pub fn get_dashboard_data<R>(repo: &R) -> ServiceResult<DashboardData>
where
    R: CategoryReader + CustomerReader + ProductReader + ?Sized,
{
    let (category_total, _) = repo.list_categories(CategoryListQuery::new())?;
    let (customer_total, _) = repo.list_customers(CustomerListQuery::new())?;
    let (product_total, _) = repo.list_products(ProductListQuery::new())?;

    Ok(DashboardData {
        category_total,
        customer_total,
        product_total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::mock::MockRepository;

    #[test]
    fn dashboard_collects_totals() {
        let mut repo = MockRepository::new();
        repo.expect_list_categories().returning(|_| Ok((3, vec![])));
        repo.expect_list_customers().returning(|_| Ok((7, vec![])));
        repo.expect_list_products().returning(|_| Ok((11, vec![])));

        let data = get_dashboard_data(&repo).unwrap();
        assert_eq!(data.category_total, 3);
        assert_eq!(data.customer_total, 7);
        assert_eq!(data.product_total, 11);
    }
}
