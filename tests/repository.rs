use flp_catalog::domain::category::{NewCategory, UpdateCategory};
use flp_catalog::domain::customer::{DEFAULT_COUNTRY, NewCustomer};
use flp_catalog::domain::product::{
    ComponentEntry, MediaEntry, NewProduct, NewProductVariant, UpdateProductVariant, VariantFields,
};
use flp_catalog::domain::types::{EntityStatus, MediaKind};
use flp_catalog::repository::errors::{RepositoryError, is_slug_conflict};
use flp_catalog::repository::{
    CategoryListQuery, CategoryReader, CategoryWriter, CustomerListQuery, CustomerReader,
    CustomerSort, CustomerWriter, DieselRepository, ListOptions, ProductListQuery, ProductReader,
    ProductWriter, SortDir, StatusFilter, TrashFilter,
};

mod common;

fn new_category(name: &str) -> NewCategory {
    NewCategory::new(name.to_string(), name.to_string(), None, EntityStatus::Active)
}

fn new_customer(company: &str, city: &str) -> NewCustomer {
    NewCustomer::new(
        company.to_string(),
        None,
        None,
        "Plot 5, MIDC".to_string(),
        None,
        city.to_string(),
        "Maharashtra".to_string(),
        String::new(),
        "400001".to_string(),
        None,
        EntityStatus::Active,
    )
}

fn new_product(category_id: &str, name: &str, slug: &str) -> NewProduct {
    NewProduct::new(
        category_id.to_string(),
        name.to_string(),
        slug.to_string(),
        None,
        None,
        None,
        None,
        None,
        None,
        Some("8536".to_string()),
        vec!["Zone 1".to_string()],
        None,
        None,
        EntityStatus::Active,
    )
}

#[test]
fn test_category_crud_and_soft_delete() {
    let test_db = common::TestDb::new("test_category_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let created = repo
        .create_category(&new_category("Junction Boxes"), "user-1")
        .unwrap();
    assert_eq!(created.slug, "junction-boxes");
    assert_eq!(created.created_by.as_deref(), Some("user-1"));
    assert!(created.deleted_at.is_none());

    let fetched = repo.get_category_by_id(&created.id).unwrap().unwrap();
    assert_eq!(fetched, created);

    let updates = UpdateCategory::new(
        "Control Stations".to_string(),
        "control-stations".to_string(),
        Some("Push buttons".to_string()),
        EntityStatus::Inactive,
    );
    let updated = repo
        .update_category(&created.id, &updates, "user-2")
        .unwrap();
    assert_eq!(updated.name, "Control Stations");
    assert_eq!(updated.status, EntityStatus::Inactive);
    assert_eq!(updated.updated_by.as_deref(), Some("user-2"));

    repo.soft_delete_category(&created.id, "user-2").unwrap();
    let trashed = repo.get_category_by_id(&created.id).unwrap().unwrap();
    assert!(trashed.deleted_at.is_some());
    assert_eq!(trashed.deleted_by.as_deref(), Some("user-2"));

    repo.restore_category(&created.id, "user-2").unwrap();
    let restored = repo.get_category_by_id(&created.id).unwrap().unwrap();
    assert!(restored.deleted_at.is_none());
    assert!(restored.deleted_by.is_none());

    assert!(matches!(
        repo.soft_delete_category("ghost", "user-1"),
        Err(RepositoryError::NotFound)
    ));
}

#[test]
fn test_trash_filter_tri_state() {
    let test_db = common::TestDb::new("test_trash_tri_state.db");
    let repo = DieselRepository::new(test_db.pool());

    repo.create_category(&new_category("Live"), "u").unwrap();
    let dead = repo.create_category(&new_category("Dead"), "u").unwrap();
    repo.soft_delete_category(&dead.id, "u").unwrap();

    let (total, items) = repo.list_categories(CategoryListQuery::new()).unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].name, "Live");

    let (total, items) = repo
        .list_categories(
            CategoryListQuery::new().options(ListOptions::new().trash(TrashFilter::Only)),
        )
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].name, "Dead");

    let (total, _) = repo
        .list_categories(
            CategoryListQuery::new().options(ListOptions::new().trash(TrashFilter::Include)),
        )
        .unwrap();
    assert_eq!(total, 2);
}

#[test]
fn test_category_slug_conflict() {
    let test_db = common::TestDb::new("test_slug_conflict.db");
    let repo = DieselRepository::new(test_db.pool());

    repo.create_category(&new_category("Junction Boxes"), "u")
        .unwrap();
    let err = repo
        .create_category(&new_category("Junction Boxes"), "u")
        .unwrap_err();
    assert!(is_slug_conflict(&err));

    let (total, _) = repo
        .list_categories(
            CategoryListQuery::new().options(ListOptions::new().trash(TrashFilter::Include)),
        )
        .unwrap();
    assert_eq!(total, 1);
}

#[test]
fn test_customer_search_is_case_insensitive_and_city_exact() {
    let test_db = common::TestDb::new("test_customer_search.db");
    let repo = DieselRepository::new(test_db.pool());

    repo.create_customer(&new_customer("Acme Switchgear", "Pune"), "u")
        .unwrap();
    repo.create_customer(&new_customer("Bharat Electric", "Mumbai"), "u")
        .unwrap();

    let (total, items) = repo
        .list_customers(CustomerListQuery::new().options(ListOptions::new().search("acme")))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].company_name, "Acme Switchgear");

    let (total, items) = repo
        .list_customers(CustomerListQuery::new().city("mumbai"))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].company_name, "Bharat Electric");

    // LIKE without wildcards must not behave as a substring match.
    let (total, _) = repo
        .list_customers(CustomerListQuery::new().city("mumb"))
        .unwrap();
    assert_eq!(total, 0);
}

#[test]
fn test_customer_sort_and_pagination() {
    let test_db = common::TestDb::new("test_customer_pagination.db");
    let repo = DieselRepository::new(test_db.pool());

    for i in 0..7 {
        repo.create_customer(&new_customer(&format!("Company {i}"), "Pune"), "u")
            .unwrap();
    }

    let (total, items) = repo
        .list_customers(
            CustomerListQuery::new()
                .sort(CustomerSort::CompanyName)
                .options(ListOptions::new().dir(SortDir::Asc).paginate(2, 5)),
        )
        .unwrap();
    assert_eq!(total, 7);
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].company_name, "Company 5");

    let created = repo
        .create_customer(&new_customer("Country Default", "Pune"), "u")
        .unwrap();
    assert_eq!(created.country, DEFAULT_COUNTRY);
}

#[test]
fn test_status_filter() {
    let test_db = common::TestDb::new("test_status_filter.db");
    let repo = DieselRepository::new(test_db.pool());

    repo.create_customer(&new_customer("Active Co", "Pune"), "u")
        .unwrap();
    let inactive = NewCustomer::new(
        "Inactive Co".to_string(),
        None,
        None,
        "Plot 5".to_string(),
        None,
        "Pune".to_string(),
        "Maharashtra".to_string(),
        String::new(),
        "400001".to_string(),
        None,
        EntityStatus::Inactive,
    );
    repo.create_customer(&inactive, "u").unwrap();

    let (total, items) = repo
        .list_customers(
            CustomerListQuery::new().options(ListOptions::new().status(StatusFilter::Inactive)),
        )
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].company_name, "Inactive Co");
}

#[test]
fn test_product_list_summary() {
    let test_db = common::TestDb::new("test_product_summary.db");
    let repo = DieselRepository::new(test_db.pool());

    let category = repo.create_category(&new_category("Lighting"), "u").unwrap();
    let product = repo
        .create_product(&new_product(&category.id, "Well Glass 100W", "well-glass"), "u")
        .unwrap();
    assert_eq!(product.zones, vec!["Zone 1".to_string()]);

    repo.create_variant(&NewProductVariant {
        product_id: product.id.clone(),
        fields: VariantFields {
            variant: "2 Way".to_string(),
            sku: "WG-2W".to_string(),
            ..Default::default()
        },
        media: vec![],
        components: vec![],
    })
    .unwrap();

    let (total, items) = repo.list_products(ProductListQuery::new()).unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].category_name, "Lighting");
    assert_eq!(items[0].variant_count, 1);
    assert_eq!(items[0].hsn_code.as_deref(), Some("8536"));

    let (total, _) = repo
        .list_products(ProductListQuery::new().category("other"))
        .unwrap();
    assert_eq!(total, 0);

    let (total, _) = repo
        .list_products(ProductListQuery::new().options(ListOptions::new().search("GLASS")))
        .unwrap();
    assert_eq!(total, 1);
}

#[test]
fn test_variant_create_attaches_media_and_components() {
    let test_db = common::TestDb::new("test_variant_create.db");
    let repo = DieselRepository::new(test_db.pool());

    let category = repo.create_category(&new_category("Lighting"), "u").unwrap();
    let product = repo
        .create_product(&new_product(&category.id, "Well Glass", "well-glass"), "u")
        .unwrap();

    let variant = repo
        .create_variant(&NewProductVariant {
            product_id: product.id.clone(),
            fields: VariantFields {
                variant: "2 Way".to_string(),
                sku: "WG-2W".to_string(),
                ..Default::default()
            },
            media: vec![
                MediaEntry {
                    id: None,
                    kind: MediaKind::Image,
                    url: "https://cdn.example.com/a.jpg".to_string(),
                    title: Some("Front".to_string()),
                },
                MediaEntry {
                    id: None,
                    kind: MediaKind::Drawing,
                    url: "https://cdn.example.com/b.pdf".to_string(),
                    title: None,
                },
            ],
            components: vec![ComponentEntry {
                id: None,
                item: "Terminal block".to_string(),
                unit: Some("pcs".to_string()),
            }],
        })
        .unwrap();

    let details = repo.list_variants(&product.id).unwrap();
    assert_eq!(details.len(), 1);
    let detail = &details[0];
    assert_eq!(detail.variant.id, variant.id);
    assert_eq!(detail.images.len(), 1);
    assert_eq!(detail.drawings.len(), 1);
    assert_eq!(detail.components.len(), 1);
    assert_eq!(detail.components[0].item, "Terminal block");
}

#[test]
fn test_variant_update_syncs_media_rows() {
    let test_db = common::TestDb::new("test_variant_media_sync.db");
    let repo = DieselRepository::new(test_db.pool());

    let category = repo.create_category(&new_category("Lighting"), "u").unwrap();
    let product = repo
        .create_product(&new_product(&category.id, "Well Glass", "well-glass"), "u")
        .unwrap();

    let variant = repo
        .create_variant(&NewProductVariant {
            product_id: product.id.clone(),
            fields: VariantFields {
                variant: "2 Way".to_string(),
                sku: "WG-2W".to_string(),
                ..Default::default()
            },
            media: vec![
                MediaEntry {
                    id: None,
                    kind: MediaKind::Image,
                    url: "https://cdn.example.com/a.jpg".to_string(),
                    title: None,
                },
                MediaEntry {
                    id: None,
                    kind: MediaKind::Image,
                    url: "https://cdn.example.com/b.jpg".to_string(),
                    title: None,
                },
            ],
            components: vec![],
        })
        .unwrap();

    let details = repo.list_variants(&product.id).unwrap();
    let kept = details[0].images[0].clone();
    let dropped = details[0].images[1].clone();

    repo.update_variant(&UpdateProductVariant {
        id: variant.id.clone(),
        product_id: product.id.clone(),
        fields: VariantFields {
            variant: "2 Way".to_string(),
            sku: "WG-2W".to_string(),
            ..Default::default()
        },
        media: vec![
            MediaEntry {
                id: Some(kept.id.clone()),
                kind: MediaKind::Image,
                url: "https://cdn.example.com/a-new.jpg".to_string(),
                title: Some("Updated".to_string()),
            },
            MediaEntry {
                id: None,
                kind: MediaKind::Drawing,
                url: "https://cdn.example.com/c.pdf".to_string(),
                title: None,
            },
        ],
        components: vec![],
    })
    .unwrap();

    let details = repo.list_variants(&product.id).unwrap();
    let all_ids: Vec<&str> = details[0]
        .images
        .iter()
        .chain(details[0].drawings.iter())
        .map(|m| m.id.as_str())
        .collect();
    assert_eq!(all_ids.len(), 2);
    assert!(all_ids.contains(&kept.id.as_str()));
    assert!(!all_ids.contains(&dropped.id.as_str()));
    assert_eq!(details[0].images[0].url, "https://cdn.example.com/a-new.jpg");
    assert_eq!(details[0].images[0].title.as_deref(), Some("Updated"));
    assert_eq!(details[0].drawings.len(), 1);
}

#[test]
fn test_variant_update_rejects_foreign_media_id() {
    let test_db = common::TestDb::new("test_variant_foreign_media.db");
    let repo = DieselRepository::new(test_db.pool());

    let category = repo.create_category(&new_category("Lighting"), "u").unwrap();
    let product = repo
        .create_product(&new_product(&category.id, "Well Glass", "well-glass"), "u")
        .unwrap();

    let media_for = |url: &str| MediaEntry {
        id: None,
        kind: MediaKind::Image,
        url: url.to_string(),
        title: None,
    };
    let variant_a = repo
        .create_variant(&NewProductVariant {
            product_id: product.id.clone(),
            fields: VariantFields {
                variant: "2 Way".to_string(),
                sku: "WG-2W".to_string(),
                ..Default::default()
            },
            media: vec![media_for("https://cdn.example.com/a.jpg")],
            components: vec![],
        })
        .unwrap();
    let variant_b = repo
        .create_variant(&NewProductVariant {
            product_id: product.id.clone(),
            fields: VariantFields {
                variant: "3 Way".to_string(),
                sku: "WG-3W".to_string(),
                ..Default::default()
            },
            media: vec![media_for("https://cdn.example.com/b.jpg")],
            components: vec![],
        })
        .unwrap();

    let details = repo.list_variants(&product.id).unwrap();
    let media_a = details
        .iter()
        .find(|d| d.variant.id == variant_a.id)
        .unwrap()
        .images[0]
        .clone();

    // Submitting another variant's media id must not re-parent that row.
    let err = repo
        .update_variant(&UpdateProductVariant {
            id: variant_b.id.clone(),
            product_id: product.id.clone(),
            fields: VariantFields {
                variant: "3 Way".to_string(),
                sku: "WG-3W".to_string(),
                ..Default::default()
            },
            media: vec![MediaEntry {
                id: Some(media_a.id.clone()),
                kind: MediaKind::Image,
                url: "https://cdn.example.com/hijacked.jpg".to_string(),
                title: None,
            }],
            components: vec![],
        })
        .unwrap_err();
    assert!(matches!(err, RepositoryError::ValidationError(_)));

    let details = repo.list_variants(&product.id).unwrap();
    let detail_a = details
        .iter()
        .find(|d| d.variant.id == variant_a.id)
        .unwrap();
    let detail_b = details
        .iter()
        .find(|d| d.variant.id == variant_b.id)
        .unwrap();
    assert_eq!(detail_a.images.len(), 1);
    assert_eq!(detail_a.images[0].url, "https://cdn.example.com/a.jpg");
    assert_eq!(detail_b.images.len(), 1);
    assert_eq!(detail_b.images[0].url, "https://cdn.example.com/b.jpg");
}

#[test]
fn test_variant_update_rejects_foreign_product() {
    let test_db = common::TestDb::new("test_variant_foreign_product.db");
    let repo = DieselRepository::new(test_db.pool());

    let category = repo.create_category(&new_category("Lighting"), "u").unwrap();
    let product_a = repo
        .create_product(&new_product(&category.id, "Well Glass", "well-glass"), "u")
        .unwrap();
    let product_b = repo
        .create_product(&new_product(&category.id, "Flood Light", "flood-light"), "u")
        .unwrap();

    let variant = repo
        .create_variant(&NewProductVariant {
            product_id: product_a.id.clone(),
            fields: VariantFields {
                variant: "2 Way".to_string(),
                sku: "WG-2W".to_string(),
                ..Default::default()
            },
            media: vec![],
            components: vec![],
        })
        .unwrap();

    let err = repo
        .update_variant(&UpdateProductVariant {
            id: variant.id,
            product_id: product_b.id,
            fields: VariantFields {
                variant: "2 Way".to_string(),
                sku: "WG-2W".to_string(),
                ..Default::default()
            },
            media: vec![],
            components: vec![],
        })
        .unwrap_err();
    assert!(matches!(err, RepositoryError::ValidationError(_)));
}

#[test]
fn test_set_variant_status() {
    let test_db = common::TestDb::new("test_variant_status.db");
    let repo = DieselRepository::new(test_db.pool());

    let category = repo.create_category(&new_category("Lighting"), "u").unwrap();
    let product = repo
        .create_product(&new_product(&category.id, "Well Glass", "well-glass"), "u")
        .unwrap();
    let variant = repo
        .create_variant(&NewProductVariant {
            product_id: product.id,
            fields: VariantFields {
                variant: "2 Way".to_string(),
                sku: "WG-2W".to_string(),
                ..Default::default()
            },
            media: vec![],
            components: vec![],
        })
        .unwrap();
    assert_eq!(variant.status, EntityStatus::Active);

    let toggled = repo
        .set_variant_status(&variant.id, variant.status.toggled())
        .unwrap();
    assert_eq!(toggled.status, EntityStatus::Inactive);
}

#[test]
fn test_category_names_excludes_trash() {
    let test_db = common::TestDb::new("test_category_names.db");
    let repo = DieselRepository::new(test_db.pool());

    let live = repo.create_category(&new_category("Lighting"), "u").unwrap();
    let dead = repo.create_category(&new_category("Obsolete"), "u").unwrap();
    repo.soft_delete_category(&dead.id, "u").unwrap();

    let names = repo.list_category_names().unwrap();
    assert_eq!(names, vec![(live.id, "Lighting".to_string())]);
}
