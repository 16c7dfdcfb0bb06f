use std::collections::HashMap;

use chrono::Utc;
use diesel::prelude::*;
use diesel::sqlite::Sqlite;
use uuid::Uuid;

use crate::domain::product::{
    NewProduct, NewProductVariant, Product, ProductComponent, ProductSummary, ProductVariant,
    UpdateProduct, UpdateProductVariant, VariantDetail,
};
use crate::domain::types::EntityStatus;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    DieselRepository, ProductListQuery, ProductReader, ProductSort, ProductWriter, SortDir,
    TrashFilter,
};
use crate::schema::{product_components, product_media, product_variants, products, variant_components};

fn apply_filters<'a, ST>(
    mut q: products::BoxedQuery<'a, Sqlite, ST>,
    query: &ProductListQuery,
) -> products::BoxedQuery<'a, Sqlite, ST> {
    match query.opts.trash {
        TrashFilter::Exclude => q = q.filter(products::deleted_at.is_null()),
        TrashFilter::Only => q = q.filter(products::deleted_at.is_not_null()),
        TrashFilter::Include => {}
    }

    if let Some(term) = &query.opts.search {
        let pattern = format!("%{term}%");
        q = q.filter(
            products::name
                .like(pattern.clone())
                .or(products::hsn_code.like(pattern)),
        );
    }

    if let Some(category_id) = &query.category_id {
        q = q.filter(products::category_id.eq(category_id.clone()));
    }

    if let Some(status) = query.opts.status.as_status() {
        q = q.filter(products::status.eq(status.as_str()));
    }

    q
}

type SummaryRow = (
    String,
    String,
    Option<String>,
    String,
    String,
    Option<chrono::NaiveDateTime>,
    chrono::NaiveDateTime,
);

impl ProductReader for DieselRepository {
    fn get_product_by_id(&self, id: &str) -> RepositoryResult<Option<Product>> {
        use crate::models::product::Product as DbProduct;

        let mut conn = self.pool().get()?;
        let product = products::table
            .find(id)
            .select(DbProduct::as_select())
            .first::<DbProduct>(&mut conn)
            .optional()?;

        Ok(product.map(Into::into))
    }

    fn list_products(
        &self,
        query: ProductListQuery,
    ) -> RepositoryResult<(usize, Vec<ProductSummary>)> {
        let mut conn = self.pool().get()?;

        // The list view only needs a projection, not full rows.
        let mut items_query = apply_filters(
            products::table
                .select((
                    products::id,
                    products::name,
                    products::hsn_code,
                    products::category_id,
                    products::status,
                    products::deleted_at,
                    products::created_at,
                ))
                .into_boxed(),
            &query,
        );

        items_query = match (query.sort, query.opts.dir) {
            (ProductSort::Name, SortDir::Asc) => items_query.order(products::name.asc()),
            (ProductSort::Name, SortDir::Desc) => items_query.order(products::name.desc()),
            (ProductSort::Status, SortDir::Asc) => items_query.order(products::status.asc()),
            (ProductSort::Status, SortDir::Desc) => items_query.order(products::status.desc()),
            (ProductSort::CreatedAt, SortDir::Asc) => items_query.order(products::created_at.asc()),
            (ProductSort::CreatedAt, SortDir::Desc) => {
                items_query.order(products::created_at.desc())
            }
        };

        let rows = items_query
            .limit(query.opts.limit())
            .offset(query.opts.offset())
            .load::<SummaryRow>(&mut conn)?;

        let product_ids: Vec<String> = rows.iter().map(|row| row.0.clone()).collect();
        let category_ids: Vec<String> = rows.iter().map(|row| row.3.clone()).collect();

        let category_names: HashMap<String, String> = crate::schema::categories::table
            .filter(crate::schema::categories::id.eq_any(&category_ids))
            .select((
                crate::schema::categories::id,
                crate::schema::categories::name,
            ))
            .load::<(String, String)>(&mut conn)?
            .into_iter()
            .collect();

        let variant_counts: HashMap<String, i64> = product_variants::table
            .filter(product_variants::product_id.eq_any(&product_ids))
            .group_by(product_variants::product_id)
            .select((product_variants::product_id, diesel::dsl::count_star()))
            .load::<(String, i64)>(&mut conn)?
            .into_iter()
            .collect();

        let items = rows
            .into_iter()
            .map(
                |(id, name, hsn_code, category_id, status, deleted_at, created_at)| {
                    ProductSummary {
                        variant_count: variant_counts.get(&id).copied().unwrap_or(0),
                        category_name: category_names
                            .get(&category_id)
                            .cloned()
                            .unwrap_or_default(),
                        id,
                        name,
                        hsn_code,
                        category_id,
                        status: EntityStatus::from(status.as_str()),
                        deleted_at,
                        created_at,
                    }
                },
            )
            .collect::<Vec<ProductSummary>>();

        let total: i64 =
            apply_filters(products::table.count().into_boxed(), &query).get_result(&mut conn)?;

        Ok((total as usize, items))
    }

    fn get_variant_by_id(&self, id: &str) -> RepositoryResult<Option<ProductVariant>> {
        use crate::models::product::ProductVariant as DbVariant;

        let mut conn = self.pool().get()?;
        let variant = product_variants::table
            .find(id)
            .select(DbVariant::as_select())
            .first::<DbVariant>(&mut conn)
            .optional()?;

        Ok(variant.map(Into::into))
    }

    fn list_variants(&self, product_id: &str) -> RepositoryResult<Vec<VariantDetail>> {
        use crate::models::product::{
            ProductComponent as DbComponent, ProductMedia as DbMedia, ProductVariant as DbVariant,
            VariantComponent as DbVariantComponent,
        };

        let mut conn = self.pool().get()?;

        let variants = product_variants::table
            .filter(product_variants::product_id.eq(product_id))
            .order(product_variants::created_at.asc())
            .select(DbVariant::as_select())
            .load::<DbVariant>(&mut conn)?;

        let variant_ids: Vec<String> = variants.iter().map(|v| v.id.clone()).collect();

        let media = product_media::table
            .filter(product_media::variant_id.eq_any(&variant_ids))
            .order(product_media::created_at.asc())
            .select(DbMedia::as_select())
            .load::<DbMedia>(&mut conn)?;

        let components = variant_components::table
            .inner_join(product_components::table)
            .filter(variant_components::variant_id.eq_any(&variant_ids))
            .select((DbVariantComponent::as_select(), DbComponent::as_select()))
            .load::<(DbVariantComponent, DbComponent)>(&mut conn)?;

        let mut media_by_variant: HashMap<String, Vec<DbMedia>> = HashMap::new();
        for row in media {
            media_by_variant
                .entry(row.variant_id.clone())
                .or_default()
                .push(row);
        }

        let mut components_by_variant: HashMap<String, Vec<ProductComponent>> = HashMap::new();
        for (link, component) in components {
            components_by_variant
                .entry(link.variant_id)
                .or_default()
                .push(ProductComponent {
                    id: component.id,
                    link_id: link.id,
                    item: component.item,
                    unit: component.unit,
                });
        }

        let details = variants
            .into_iter()
            .map(|variant| {
                let rows = media_by_variant.remove(&variant.id).unwrap_or_default();
                let (images, drawings): (Vec<DbMedia>, Vec<DbMedia>) =
                    rows.into_iter().partition(|m| m.kind != "DRAWING");
                VariantDetail {
                    components: components_by_variant
                        .remove(&variant.id)
                        .unwrap_or_default(),
                    images: images.into_iter().map(Into::into).collect(),
                    drawings: drawings.into_iter().map(Into::into).collect(),
                    variant: variant.into(),
                }
            })
            .collect();

        Ok(details)
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(&self, new: &NewProduct, author: &str) -> RepositoryResult<Product> {
        use crate::models::product::{Product as DbProduct, NewProduct as DbNewProduct, encode_zones};

        let mut conn = self.pool().get()?;
        let now = Utc::now().naive_utc();
        let insertable = DbNewProduct {
            id: Uuid::new_v4().to_string(),
            category_id: &new.category_id,
            name: &new.name,
            slug: &new.slug,
            flp_type: new.flp_type.as_deref(),
            protection: new.protection.as_deref(),
            gas_group: new.gas_group.as_deref(),
            material: new.material.as_deref(),
            finish: new.finish.as_deref(),
            hardware: new.hardware.as_deref(),
            hsn_code: new.hsn_code.as_deref(),
            zones: encode_zones(&new.zones),
            short_desc: new.short_desc.as_deref(),
            long_desc: new.long_desc.as_deref(),
            status: new.status.as_str(),
            created_at: now,
            updated_at: now,
            created_by: Some(author),
        };

        let created = diesel::insert_into(products::table)
            .values(&insertable)
            .get_result::<DbProduct>(&mut conn)?;

        Ok(created.into())
    }

    fn update_product(
        &self,
        id: &str,
        updates: &UpdateProduct,
        author: &str,
    ) -> RepositoryResult<Product> {
        use crate::models::product::{Product as DbProduct, UpdateProduct as DbUpdateProduct, encode_zones};

        let mut conn = self.pool().get()?;
        let changeset = DbUpdateProduct {
            category_id: &updates.category_id,
            name: &updates.name,
            slug: &updates.slug,
            flp_type: updates.flp_type.as_deref(),
            protection: updates.protection.as_deref(),
            gas_group: updates.gas_group.as_deref(),
            material: updates.material.as_deref(),
            finish: updates.finish.as_deref(),
            hardware: updates.hardware.as_deref(),
            hsn_code: updates.hsn_code.as_deref(),
            zones: encode_zones(&updates.zones),
            short_desc: updates.short_desc.as_deref(),
            long_desc: updates.long_desc.as_deref(),
            status: updates.status.as_str(),
            updated_at: Utc::now().naive_utc(),
            updated_by: Some(author),
        };

        let updated = diesel::update(products::table.find(id))
            .set(&changeset)
            .get_result::<DbProduct>(&mut conn)?;

        Ok(updated.into())
    }

    fn soft_delete_product(&self, id: &str, author: &str) -> RepositoryResult<()> {
        let mut conn = self.pool().get()?;
        let now = Utc::now().naive_utc();

        let affected = diesel::update(products::table.find(id))
            .set((
                products::deleted_at.eq(Some(now)),
                products::deleted_by.eq(Some(author)),
                products::updated_at.eq(now),
            ))
            .execute(&mut conn)?;

        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    fn restore_product(&self, id: &str, author: &str) -> RepositoryResult<()> {
        let mut conn = self.pool().get()?;
        let now = Utc::now().naive_utc();

        let affected = diesel::update(products::table.find(id))
            .set((
                products::deleted_at.eq(None::<chrono::NaiveDateTime>),
                products::deleted_by.eq(None::<String>),
                products::updated_at.eq(now),
                products::updated_by.eq(Some(author)),
            ))
            .execute(&mut conn)?;

        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    fn create_variant(&self, new: &NewProductVariant) -> RepositoryResult<ProductVariant> {
        use crate::models::product::{
            NewProductComponent, NewProductMedia, NewProductVariant as DbNewVariant,
            ProductVariant as DbVariant, VariantComponent,
        };

        let mut conn = self.pool().get()?;
        let now = Utc::now().naive_utc();

        let created = conn.transaction::<DbVariant, RepositoryError, _>(|conn| {
            let fields = &new.fields;
            let insertable = DbNewVariant {
                id: Uuid::new_v4().to_string(),
                product_id: &new.product_id,
                variant: &fields.variant,
                sku: &fields.sku,
                type_number: fields.type_number.as_deref(),
                rating: fields.rating.as_deref(),
                terminals: fields.terminals.as_deref(),
                gasket: fields.gasket.as_deref(),
                mounting: fields.mounting.as_deref(),
                cable_entry: fields.cable_entry.as_deref(),
                earthing: fields.earthing.as_deref(),
                cutout_size: fields.cutout_size.as_deref(),
                plate_size: fields.plate_size.as_deref(),
                size: fields.size.as_deref(),
                glass: fields.glass.as_deref(),
                wire_guard: fields.wire_guard.as_deref(),
                rpm: fields.rpm.as_deref(),
                kw: fields.kw.as_deref(),
                horse_power: fields.horse_power.as_deref(),
                status: fields.status.as_str(),
                created_at: now,
                updated_at: now,
            };

            let variant = diesel::insert_into(product_variants::table)
                .values(&insertable)
                .get_result::<DbVariant>(conn)?;

            for entry in &new.media {
                let media = NewProductMedia {
                    id: Uuid::new_v4().to_string(),
                    variant_id: &variant.id,
                    kind: entry.kind.as_str(),
                    url: &entry.url,
                    title: entry.title.as_deref(),
                    created_at: now,
                };
                diesel::insert_into(product_media::table)
                    .values(&media)
                    .execute(conn)?;
            }

            for entry in &new.components {
                let component = NewProductComponent {
                    id: Uuid::new_v4().to_string(),
                    item: &entry.item,
                    unit: entry.unit.as_deref(),
                };
                diesel::insert_into(product_components::table)
                    .values(&component)
                    .execute(conn)?;

                let link = VariantComponent {
                    id: Uuid::new_v4().to_string(),
                    variant_id: variant.id.clone(),
                    component_id: component.id,
                };
                diesel::insert_into(variant_components::table)
                    .values(&link)
                    .execute(conn)?;
            }

            Ok(variant)
        })?;

        Ok(created.into())
    }

    fn update_variant(&self, updates: &UpdateProductVariant) -> RepositoryResult<ProductVariant> {
        use crate::models::product::{
            NewProductComponent, NewProductMedia, ProductVariant as DbVariant,
            UpdateProductVariant as DbUpdateVariant, VariantComponent,
        };

        let mut conn = self.pool().get()?;
        let now = Utc::now().naive_utc();

        let updated = conn.transaction::<DbVariant, RepositoryError, _>(|conn| {
            let existing = product_variants::table
                .find(&updates.id)
                .select(DbVariant::as_select())
                .first::<DbVariant>(conn)
                .optional()?
                .ok_or(RepositoryError::NotFound)?;

            if existing.product_id != updates.product_id {
                return Err(RepositoryError::ValidationError(
                    "Variant does not belong to the given product".to_string(),
                ));
            }

            let fields = &updates.fields;
            let changeset = DbUpdateVariant {
                variant: &fields.variant,
                sku: &fields.sku,
                type_number: fields.type_number.as_deref(),
                rating: fields.rating.as_deref(),
                terminals: fields.terminals.as_deref(),
                gasket: fields.gasket.as_deref(),
                mounting: fields.mounting.as_deref(),
                cable_entry: fields.cable_entry.as_deref(),
                earthing: fields.earthing.as_deref(),
                cutout_size: fields.cutout_size.as_deref(),
                plate_size: fields.plate_size.as_deref(),
                size: fields.size.as_deref(),
                glass: fields.glass.as_deref(),
                wire_guard: fields.wire_guard.as_deref(),
                rpm: fields.rpm.as_deref(),
                kw: fields.kw.as_deref(),
                horse_power: fields.horse_power.as_deref(),
                status: fields.status.as_str(),
                updated_at: now,
            };

            let variant = diesel::update(product_variants::table.find(&updates.id))
                .set(&changeset)
                .get_result::<DbVariant>(conn)?;

            // The submitted media list is the source of truth: rows whose id
            // is not resubmitted are detached.
            let keep_media: Vec<String> = updates
                .media
                .iter()
                .filter_map(|m| m.id.clone())
                .collect();
            diesel::delete(
                product_media::table
                    .filter(product_media::variant_id.eq(&variant.id))
                    .filter(product_media::id.ne_all(&keep_media)),
            )
            .execute(conn)?;

            for entry in &updates.media {
                match &entry.id {
                    Some(id) => {
                        let affected = diesel::update(
                            product_media::table
                                .find(id)
                                .filter(product_media::variant_id.eq(&variant.id)),
                        )
                        .set((
                            product_media::url.eq(&entry.url),
                            product_media::title.eq(entry.title.as_deref()),
                            product_media::kind.eq(entry.kind.as_str()),
                        ))
                        .execute(conn)?;
                        if affected == 0 {
                            return Err(RepositoryError::ValidationError(
                                "Media does not belong to the variant".to_string(),
                            ));
                        }
                    }
                    None => {
                        let media = NewProductMedia {
                            id: Uuid::new_v4().to_string(),
                            variant_id: &variant.id,
                            kind: entry.kind.as_str(),
                            url: &entry.url,
                            title: entry.title.as_deref(),
                            created_at: now,
                        };
                        diesel::insert_into(product_media::table)
                            .values(&media)
                            .execute(conn)?;
                    }
                }
            }

            // Same strategy for component join rows; shared component rows
            // are left in place when detached.
            let keep_links: Vec<String> = updates
                .components
                .iter()
                .filter_map(|c| c.id.clone())
                .collect();
            diesel::delete(
                variant_components::table
                    .filter(variant_components::variant_id.eq(&variant.id))
                    .filter(variant_components::id.ne_all(&keep_links)),
            )
            .execute(conn)?;

            for entry in &updates.components {
                match &entry.id {
                    Some(link_id) => {
                        let component_id = variant_components::table
                            .find(link_id)
                            .filter(variant_components::variant_id.eq(&variant.id))
                            .select(variant_components::component_id)
                            .first::<String>(conn)
                            .optional()?
                            .ok_or_else(|| {
                                RepositoryError::ValidationError(
                                    "Component does not belong to the variant".to_string(),
                                )
                            })?;
                        diesel::update(product_components::table.find(&component_id))
                            .set((
                                product_components::item.eq(&entry.item),
                                product_components::unit.eq(entry.unit.as_deref()),
                            ))
                            .execute(conn)?;
                    }
                    None => {
                        let component = NewProductComponent {
                            id: Uuid::new_v4().to_string(),
                            item: &entry.item,
                            unit: entry.unit.as_deref(),
                        };
                        diesel::insert_into(product_components::table)
                            .values(&component)
                            .execute(conn)?;

                        let link = VariantComponent {
                            id: Uuid::new_v4().to_string(),
                            variant_id: variant.id.clone(),
                            component_id: component.id,
                        };
                        diesel::insert_into(variant_components::table)
                            .values(&link)
                            .execute(conn)?;
                    }
                }
            }

            Ok(variant)
        })?;

        Ok(updated.into())
    }

    fn set_variant_status(
        &self,
        id: &str,
        status: EntityStatus,
    ) -> RepositoryResult<ProductVariant> {
        use crate::models::product::ProductVariant as DbVariant;

        let mut conn = self.pool().get()?;
        let updated = diesel::update(product_variants::table.find(id))
            .set((
                product_variants::status.eq(status.as_str()),
                product_variants::updated_at.eq(Utc::now().naive_utc()),
            ))
            .get_result::<DbVariant>(&mut conn)?;

        Ok(updated.into())
    }
}
