use validator::Validate;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::customer::Customer;
use crate::dto::customer::{CustomerListPage, CustomerListParams};
use crate::forms::customer::{AddCustomerForm, SaveCustomerForm};
use crate::pagination::Paginated;
use crate::repository::{CustomerReader, CustomerWriter};
use crate::services::{ServiceError, ServiceResult};

pub fn get_customer_list_page<R>(
    repo: &R,
    params: &CustomerListParams,
) -> ServiceResult<CustomerListPage>
where
    R: CustomerReader + ?Sized,
{
    let query = params.to_query();
    let page = query.opts.page();
    let page_size = query.opts.page_size();

    let (total, customers) = repo.list_customers(query)?;

    Ok(CustomerListPage {
        customers: Paginated::new(customers, page, total.div_ceil(page_size)),
        total,
    })
}

pub fn get_customer<R>(repo: &R, id: &str) -> ServiceResult<Customer>
where
    R: CustomerReader + ?Sized,
{
    repo.get_customer_by_id(id)?.ok_or(ServiceError::NotFound)
}

pub fn create_customer<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: &AddCustomerForm,
) -> ServiceResult<Customer>
where
    R: CustomerWriter + ?Sized,
{
    form.validate()
        .map_err(|_| ServiceError::Form("Enter the fields properly.".to_string()))?;

    Ok(repo.create_customer(&form.into(), &user.sub)?)
}

pub fn update_customer<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: &SaveCustomerForm,
) -> ServiceResult<Customer>
where
    R: CustomerReader + CustomerWriter + ?Sized,
{
    form.validate()
        .map_err(|_| ServiceError::Form("Enter the fields properly.".to_string()))?;

    repo.get_customer_by_id(&form.id)?
        .ok_or(ServiceError::NotFound)?;

    Ok(repo.update_customer(&form.id, &form.into(), &user.sub)?)
}

pub fn soft_delete_customer<R>(repo: &R, user: &AuthenticatedUser, id: &str) -> ServiceResult<()>
where
    R: CustomerReader + CustomerWriter + ?Sized,
{
    repo.get_customer_by_id(id)?.ok_or(ServiceError::NotFound)?;

    Ok(repo.soft_delete_customer(id, &user.sub)?)
}

pub fn restore_customer<R>(repo: &R, user: &AuthenticatedUser, id: &str) -> ServiceResult<()>
where
    R: CustomerReader + CustomerWriter + ?Sized,
{
    let customer = repo.get_customer_by_id(id)?.ok_or(ServiceError::NotFound)?;

    if customer.deleted_at.is_none() {
        return Err(ServiceError::Form(
            "Customer is not deleted to be restored.".to_string(),
        ));
    }

    Ok(repo.restore_customer(id, &user.sub)?)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::customer::DEFAULT_COUNTRY;
    use crate::domain::types::EntityStatus;
    use crate::repository::mock::MockRepository;

    fn test_user() -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "user-1".to_string(),
            email: "admin@example.com".to_string(),
            name: "Admin".to_string(),
            exp: 0,
        }
    }

    fn sample_customer(deleted: bool) -> Customer {
        let now = Utc::now().naive_utc();
        Customer {
            id: "cust-1".to_string(),
            company_name: "Acme Switchgear".to_string(),
            company_email: None,
            company_phone: None,
            address_line1: "12 Industrial Estate".to_string(),
            address_line2: None,
            city: "Pune".to_string(),
            state: "Maharashtra".to_string(),
            country: DEFAULT_COUNTRY.to_string(),
            pincode: "411001".to_string(),
            gstin: None,
            status: EntityStatus::Active,
            created_at: now,
            updated_at: now,
            deleted_at: deleted.then_some(now),
            created_by: None,
            updated_by: None,
            deleted_by: None,
        }
    }

    #[test]
    fn update_missing_customer_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_get_customer_by_id().returning(|_| Ok(None));
        let form = SaveCustomerForm {
            id: "ghost".to_string(),
            company_name: "Acme Switchgear".to_string(),
            company_email: String::new(),
            company_phone: String::new(),
            address_line1: "12 Industrial Estate".to_string(),
            address_line2: String::new(),
            city: "Pune".to_string(),
            state: "Maharashtra".to_string(),
            country: String::new(),
            pincode: "411001".to_string(),
            gstin: String::new(),
            status: String::new(),
        };
        let result = update_customer(&repo, &test_user(), &form);
        assert_eq!(result, Err(ServiceError::NotFound));
    }

    #[test]
    fn restore_requires_a_trashed_customer() {
        let mut repo = MockRepository::new();
        repo.expect_get_customer_by_id()
            .returning(|_| Ok(Some(sample_customer(false))));
        let result = restore_customer(&repo, &test_user(), "cust-1");
        assert_eq!(
            result,
            Err(ServiceError::Form(
                "Customer is not deleted to be restored.".to_string()
            ))
        );
    }

    #[test]
    fn soft_delete_passes_author_through() {
        let mut repo = MockRepository::new();
        repo.expect_get_customer_by_id()
            .returning(|_| Ok(Some(sample_customer(false))));
        repo.expect_soft_delete_customer()
            .withf(|id, author| id == "cust-1" && author == "user-1")
            .returning(|_, _| Ok(()));
        assert!(soft_delete_customer(&repo, &test_user(), "cust-1").is_ok());
    }
}
