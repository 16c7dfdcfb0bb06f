use validator::Validate;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::product::{Product, ProductVariant};
use crate::domain::types::build_base_sku;
use crate::dto::product::{ProductDetailPage, ProductListPage, ProductListParams};
use crate::forms::product::{AddProductForm, SaveProductForm, SaveVariantForm};
use crate::pagination::Paginated;
use crate::repository::{CategoryReader, ProductReader, ProductWriter};
use crate::services::{ServiceError, ServiceResult};

pub fn get_product_list_page<R>(
    repo: &R,
    params: &ProductListParams,
) -> ServiceResult<ProductListPage>
where
    R: ProductReader + CategoryReader + ?Sized,
{
    let query = params.to_query();
    let page = query.opts.page();
    let page_size = query.opts.page_size();

    let (total, products) = repo.list_products(query)?;
    let categories = repo.list_category_names()?;

    Ok(ProductListPage {
        products: Paginated::new(products, page, total.div_ceil(page_size)),
        total,
        categories,
    })
}

pub fn get_product_detail_page<R>(repo: &R, id: &str) -> ServiceResult<ProductDetailPage>
where
    R: ProductReader + CategoryReader + ?Sized,
{
    let product = repo.get_product_by_id(id)?.ok_or(ServiceError::NotFound)?;
    let category_name = repo
        .get_category_by_id(&product.category_id)?
        .map(|category| category.name);
    let variants = repo.list_variants(&product.id)?;

    Ok(ProductDetailPage {
        product,
        category_name,
        variants,
    })
}

pub fn create_product<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: &AddProductForm,
) -> ServiceResult<Product>
where
    R: CategoryReader + ProductWriter + ?Sized,
{
    form.validate()
        .map_err(|_| ServiceError::Form("Enter the fields properly.".to_string()))?;

    repo.get_category_by_id(&form.category_id)?
        .ok_or_else(|| ServiceError::Form("Selected category does not exist.".to_string()))?;

    Ok(repo.create_product(&form.into(), &user.sub)?)
}

pub fn update_product<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: &SaveProductForm,
) -> ServiceResult<Product>
where
    R: CategoryReader + ProductReader + ProductWriter + ?Sized,
{
    form.validate()
        .map_err(|_| ServiceError::Form("Enter the fields properly.".to_string()))?;

    repo.get_product_by_id(&form.id)?
        .ok_or(ServiceError::NotFound)?;
    repo.get_category_by_id(&form.category_id)?
        .ok_or_else(|| ServiceError::Form("Selected category does not exist.".to_string()))?;

    Ok(repo.update_product(&form.id, &form.into(), &user.sub)?)
}

pub fn soft_delete_product<R>(repo: &R, user: &AuthenticatedUser, id: &str) -> ServiceResult<()>
where
    R: ProductReader + ProductWriter + ?Sized,
{
    repo.get_product_by_id(id)?.ok_or(ServiceError::NotFound)?;

    Ok(repo.soft_delete_product(id, &user.sub)?)
}

pub fn restore_product<R>(repo: &R, user: &AuthenticatedUser, id: &str) -> ServiceResult<()>
where
    R: ProductReader + ProductWriter + ?Sized,
{
    let product = repo.get_product_by_id(id)?.ok_or(ServiceError::NotFound)?;

    if product.deleted_at.is_none() {
        return Err(ServiceError::Form(
            "Product is not deleted to be restored.".to_string(),
        ));
    }

    Ok(repo.restore_product(id, &user.sub)?)
}

pub fn create_variant<R>(repo: &R, form: &SaveVariantForm) -> ServiceResult<ProductVariant>
where
    R: ProductReader + ProductWriter + ?Sized,
{
    form.validate()
        .map_err(|_| ServiceError::Form("Enter the fields properly.".to_string()))?;

    let product = repo
        .get_product_by_id(&form.product_id)?
        .ok_or(ServiceError::NotFound)?;

    let mut new = form.to_new_variant();
    if new.fields.sku.is_empty() {
        new.fields.sku = build_base_sku(&product.name, &new.fields.variant);
    }

    Ok(repo.create_variant(&new)?)
}

pub fn update_variant<R>(repo: &R, form: &SaveVariantForm) -> ServiceResult<ProductVariant>
where
    R: ProductReader + ProductWriter + ?Sized,
{
    form.validate()
        .map_err(|_| ServiceError::Form("Enter the fields properly.".to_string()))?;

    if form.id.trim().is_empty() {
        return Err(ServiceError::Form("Missing variant id.".to_string()));
    }

    let product = repo
        .get_product_by_id(&form.product_id)?
        .ok_or(ServiceError::NotFound)?;

    let mut updates = form.to_update_variant();
    if updates.fields.sku.is_empty() {
        updates.fields.sku = build_base_sku(&product.name, &updates.fields.variant);
    }

    Ok(repo.update_variant(&updates)?)
}

pub fn toggle_variant_status<R>(repo: &R, id: &str) -> ServiceResult<ProductVariant>
where
    R: ProductReader + ProductWriter + ?Sized,
{
    let variant = repo.get_variant_by_id(id)?.ok_or(ServiceError::NotFound)?;

    Ok(repo.set_variant_status(id, variant.status.toggled())?)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
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

    fn sample_product() -> Product {
        let now = Utc::now().naive_utc();
        Product {
            id: "prod-1".to_string(),
            category_id: "cat-1".to_string(),
            name: "Well Glass 100W".to_string(),
            slug: "well-glass-100w".to_string(),
            flp_type: None,
            protection: None,
            gas_group: None,
            material: None,
            finish: None,
            hardware: None,
            hsn_code: None,
            zones: vec!["Zone 1".to_string()],
            short_desc: None,
            long_desc: None,
            status: EntityStatus::Active,
            created_at: now,
            updated_at: now,
            deleted_at: None,
            created_by: None,
            updated_by: None,
            deleted_by: None,
        }
    }

    fn sample_variant(status: EntityStatus) -> ProductVariant {
        let now = Utc::now().naive_utc();
        ProductVariant {
            id: "var-1".to_string(),
            product_id: "prod-1".to_string(),
            variant: "2 Way".to_string(),
            sku: "WELL-GLASS-100W-2-WAY".to_string(),
            type_number: None,
            rating: None,
            terminals: None,
            gasket: None,
            mounting: None,
            cable_entry: None,
            earthing: None,
            cutout_size: None,
            plate_size: None,
            size: None,
            glass: None,
            wire_guard: None,
            rpm: None,
            kw: None,
            horse_power: None,
            status,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn create_product_requires_existing_category() {
        let mut repo = MockRepository::new();
        repo.expect_get_category_by_id().returning(|_| Ok(None));
        let form = AddProductForm {
            category_id: "ghost".to_string(),
            name: "Well Glass 100W".to_string(),
            slug: "well-glass-100w".to_string(),
            flp_type: None,
            protection: None,
            gas_group: None,
            material: None,
            finish: None,
            hardware: None,
            hsn_code: None,
            zones: vec!["Zone 1".to_string()],
            short_desc: None,
            long_desc: None,
            status: String::new(),
        };
        let result = create_product(&repo, &test_user(), &form);
        assert_eq!(
            result,
            Err(ServiceError::Form(
                "Selected category does not exist.".to_string()
            ))
        );
    }

    #[test]
    fn create_variant_derives_sku_when_blank() {
        let mut repo = MockRepository::new();
        repo.expect_get_product_by_id()
            .returning(|_| Ok(Some(sample_product())));
        repo.expect_create_variant()
            .withf(|new| new.fields.sku == "WELL-GLASS-100W-2-WAY")
            .returning(|new| {
                let mut variant = sample_variant(EntityStatus::Active);
                variant.sku = new.fields.sku.clone();
                Ok(variant)
            });

        let form = SaveVariantForm {
            product_id: "prod-1".to_string(),
            variant: "2 Way".to_string(),
            ..Default::default()
        };
        let variant = create_variant(&repo, &form).unwrap();
        assert_eq!(variant.sku, "WELL-GLASS-100W-2-WAY");
    }

    #[test]
    fn toggle_flips_variant_status() {
        let mut repo = MockRepository::new();
        repo.expect_get_variant_by_id()
            .returning(|_| Ok(Some(sample_variant(EntityStatus::Active))));
        repo.expect_set_variant_status()
            .withf(|id, status| id == "var-1" && *status == EntityStatus::Inactive)
            .returning(|_, status| Ok(sample_variant(status)));

        let variant = toggle_variant_status(&repo, "var-1").unwrap();
        assert_eq!(variant.status, EntityStatus::Inactive);
    }

    #[test]
    fn update_variant_without_id_is_rejected() {
        let repo = MockRepository::new();
        let form = SaveVariantForm {
            product_id: "prod-1".to_string(),
            variant: "2 Way".to_string(),
            ..Default::default()
        };
        let result = update_variant(&repo, &form);
        assert_eq!(
            result,
            Err(ServiceError::Form("Missing variant id.".to_string()))
        );
    }
}
