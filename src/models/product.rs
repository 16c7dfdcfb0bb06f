use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::{
    Product as DomainProduct, ProductMedia as DomainProductMedia,
    ProductVariant as DomainProductVariant,
};
use crate::domain::types::{EntityStatus, MediaKind};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::products)]
/// Diesel model for [`crate::domain::product::Product`].
pub struct Product {
    pub id: String,
    pub category_id: String,
    pub name: String,
    pub slug: String,
    pub flp_type: Option<String>,
    pub protection: Option<String>,
    pub gas_group: Option<String>,
    pub material: Option<String>,
    pub finish: Option<String>,
    pub hardware: Option<String>,
    pub hsn_code: Option<String>,
    /// JSON-encoded array of zone labels.
    pub zones: String,
    pub short_desc: Option<String>,
    pub long_desc: Option<String>,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
    pub deleted_by: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::products)]
/// Insertable form of [`Product`].
pub struct NewProduct<'a> {
    pub id: String,
    pub category_id: &'a str,
    pub name: &'a str,
    pub slug: &'a str,
    pub flp_type: Option<&'a str>,
    pub protection: Option<&'a str>,
    pub gas_group: Option<&'a str>,
    pub material: Option<&'a str>,
    pub finish: Option<&'a str>,
    pub hardware: Option<&'a str>,
    pub hsn_code: Option<&'a str>,
    pub zones: String,
    pub short_desc: Option<&'a str>,
    pub long_desc: Option<&'a str>,
    pub status: &'a str,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub created_by: Option<&'a str>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::products)]
#[diesel(treat_none_as_null = true)]
/// Data used when updating a [`Product`] record.
pub struct UpdateProduct<'a> {
    pub category_id: &'a str,
    pub name: &'a str,
    pub slug: &'a str,
    pub flp_type: Option<&'a str>,
    pub protection: Option<&'a str>,
    pub gas_group: Option<&'a str>,
    pub material: Option<&'a str>,
    pub finish: Option<&'a str>,
    pub hardware: Option<&'a str>,
    pub hsn_code: Option<&'a str>,
    pub zones: String,
    pub short_desc: Option<&'a str>,
    pub long_desc: Option<&'a str>,
    pub status: &'a str,
    pub updated_at: NaiveDateTime,
    pub updated_by: Option<&'a str>,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::product_variants)]
/// Diesel model for [`crate::domain::product::ProductVariant`].
pub struct ProductVariant {
    pub id: String,
    pub product_id: String,
    pub variant: String,
    pub sku: String,
    pub type_number: Option<String>,
    pub rating: Option<String>,
    pub terminals: Option<String>,
    pub gasket: Option<String>,
    pub mounting: Option<String>,
    pub cable_entry: Option<String>,
    pub earthing: Option<String>,
    pub cutout_size: Option<String>,
    pub plate_size: Option<String>,
    pub size: Option<String>,
    pub glass: Option<String>,
    pub wire_guard: Option<String>,
    pub rpm: Option<String>,
    pub kw: Option<String>,
    pub horse_power: Option<String>,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::product_variants)]
/// Insertable form of [`ProductVariant`].
pub struct NewProductVariant<'a> {
    pub id: String,
    pub product_id: &'a str,
    pub variant: &'a str,
    pub sku: &'a str,
    pub type_number: Option<&'a str>,
    pub rating: Option<&'a str>,
    pub terminals: Option<&'a str>,
    pub gasket: Option<&'a str>,
    pub mounting: Option<&'a str>,
    pub cable_entry: Option<&'a str>,
    pub earthing: Option<&'a str>,
    pub cutout_size: Option<&'a str>,
    pub plate_size: Option<&'a str>,
    pub size: Option<&'a str>,
    pub glass: Option<&'a str>,
    pub wire_guard: Option<&'a str>,
    pub rpm: Option<&'a str>,
    pub kw: Option<&'a str>,
    pub horse_power: Option<&'a str>,
    pub status: &'a str,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::product_variants)]
#[diesel(treat_none_as_null = true)]
/// Data used when updating a [`ProductVariant`] record.
pub struct UpdateProductVariant<'a> {
    pub variant: &'a str,
    pub sku: &'a str,
    pub type_number: Option<&'a str>,
    pub rating: Option<&'a str>,
    pub terminals: Option<&'a str>,
    pub gasket: Option<&'a str>,
    pub mounting: Option<&'a str>,
    pub cable_entry: Option<&'a str>,
    pub earthing: Option<&'a str>,
    pub cutout_size: Option<&'a str>,
    pub plate_size: Option<&'a str>,
    pub size: Option<&'a str>,
    pub glass: Option<&'a str>,
    pub wire_guard: Option<&'a str>,
    pub rpm: Option<&'a str>,
    pub kw: Option<&'a str>,
    pub horse_power: Option<&'a str>,
    pub status: &'a str,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::product_media)]
pub struct ProductMedia {
    pub id: String,
    pub variant_id: String,
    pub kind: String,
    pub url: String,
    pub title: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::product_media)]
pub struct NewProductMedia<'a> {
    pub id: String,
    pub variant_id: &'a str,
    pub kind: &'a str,
    pub url: &'a str,
    pub title: Option<&'a str>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::product_components)]
pub struct ProductComponent {
    pub id: String,
    pub item: String,
    pub unit: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::product_components)]
pub struct NewProductComponent<'a> {
    pub id: String,
    pub item: &'a str,
    pub unit: Option<&'a str>,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Insertable)]
#[diesel(table_name = crate::schema::variant_components)]
/// Join row attaching a [`ProductComponent`] to a variant.
pub struct VariantComponent {
    pub id: String,
    pub variant_id: String,
    pub component_id: String,
}

fn decode_zones(raw: &str) -> Vec<String> {
    serde_json::from_str(raw).unwrap_or_default()
}

pub fn encode_zones(zones: &[String]) -> String {
    serde_json::to_string(zones).unwrap_or_else(|_| "[]".to_string())
}

impl From<Product> for DomainProduct {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            category_id: product.category_id,
            name: product.name,
            slug: product.slug,
            flp_type: product.flp_type,
            protection: product.protection,
            gas_group: product.gas_group,
            material: product.material,
            finish: product.finish,
            hardware: product.hardware,
            hsn_code: product.hsn_code,
            zones: decode_zones(&product.zones),
            short_desc: product.short_desc,
            long_desc: product.long_desc,
            status: EntityStatus::from(product.status.as_str()),
            created_at: product.created_at,
            updated_at: product.updated_at,
            deleted_at: product.deleted_at,
            created_by: product.created_by,
            updated_by: product.updated_by,
            deleted_by: product.deleted_by,
        }
    }
}

impl From<ProductVariant> for DomainProductVariant {
    fn from(variant: ProductVariant) -> Self {
        Self {
            id: variant.id,
            product_id: variant.product_id,
            variant: variant.variant,
            sku: variant.sku,
            type_number: variant.type_number,
            rating: variant.rating,
            terminals: variant.terminals,
            gasket: variant.gasket,
            mounting: variant.mounting,
            cable_entry: variant.cable_entry,
            earthing: variant.earthing,
            cutout_size: variant.cutout_size,
            plate_size: variant.plate_size,
            size: variant.size,
            glass: variant.glass,
            wire_guard: variant.wire_guard,
            rpm: variant.rpm,
            kw: variant.kw,
            horse_power: variant.horse_power,
            status: EntityStatus::from(variant.status.as_str()),
            created_at: variant.created_at,
            updated_at: variant.updated_at,
        }
    }
}

impl From<ProductMedia> for DomainProductMedia {
    fn from(media: ProductMedia) -> Self {
        Self {
            id: media.id,
            variant_id: media.variant_id,
            kind: MediaKind::from(media.kind.as_str()),
            url: media.url,
            title: media.title,
            created_at: media.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zones_round_trip_through_json() {
        let zones = vec!["Zone 1".to_string(), "Zone 2".to_string()];
        assert_eq!(decode_zones(&encode_zones(&zones)), zones);
        assert!(decode_zones("not json").is_empty());
    }
}
