use validator::Validate;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::category::Category;
use crate::dto::category::{CategoryListPage, CategoryListParams};
use crate::forms::category::{AddCategoryForm, SaveCategoryForm};
use crate::pagination::Paginated;
use crate::repository::{CategoryReader, CategoryWriter};
use crate::services::{ServiceError, ServiceResult};

pub fn get_category_list_page<R>(
    repo: &R,
    params: &CategoryListParams,
) -> ServiceResult<CategoryListPage>
where
    R: CategoryReader + ?Sized,
{
    let query = params.to_query();
    let page = query.opts.page();
    let page_size = query.opts.page_size();

    let (total, categories) = repo.list_categories(query)?;

    Ok(CategoryListPage {
        categories: Paginated::new(categories, page, total.div_ceil(page_size)),
        total,
    })
}

pub fn get_category<R>(repo: &R, id: &str) -> ServiceResult<Category>
where
    R: CategoryReader + ?Sized,
{
    repo.get_category_by_id(id)?.ok_or(ServiceError::NotFound)
}

pub fn create_category<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: &AddCategoryForm,
) -> ServiceResult<Category>
where
    R: CategoryWriter + ?Sized,
{
    form.validate()
        .map_err(|_| ServiceError::Form("Enter the fields properly.".to_string()))?;

    Ok(repo.create_category(&form.into(), &user.sub)?)
}

pub fn update_category<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: &SaveCategoryForm,
) -> ServiceResult<Category>
where
    R: CategoryReader + CategoryWriter + ?Sized,
{
    form.validate()
        .map_err(|_| ServiceError::Form("Enter the fields properly.".to_string()))?;

    repo.get_category_by_id(&form.id)?
        .ok_or(ServiceError::NotFound)?;

    Ok(repo.update_category(&form.id, &form.into(), &user.sub)?)
}

pub fn soft_delete_category<R>(repo: &R, user: &AuthenticatedUser, id: &str) -> ServiceResult<()>
where
    R: CategoryReader + CategoryWriter + ?Sized,
{
    repo.get_category_by_id(id)?.ok_or(ServiceError::NotFound)?;

    Ok(repo.soft_delete_category(id, &user.sub)?)
}

pub fn restore_category<R>(repo: &R, user: &AuthenticatedUser, id: &str) -> ServiceResult<()>
where
    R: CategoryReader + CategoryWriter + ?Sized,
{
    let category = repo.get_category_by_id(id)?.ok_or(ServiceError::NotFound)?;

    if category.deleted_at.is_none() {
        return Err(ServiceError::Form(
            "Category is not deleted to be restored.".to_string(),
        ));
    }

    Ok(repo.restore_category(id, &user.sub)?)
}
