use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{EntityStatus, MediaKind, normalize_slug};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
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
    /// Hazardous-area zones the product is certified for.
    pub zones: Vec<String>,
    pub short_desc: Option<String>,
    pub long_desc: Option<String>,
    pub status: EntityStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
    pub deleted_by: Option<String>,
}

fn clean(value: Option<String>) -> Option<String> {
    value.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewProduct {
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
    pub zones: Vec<String>,
    pub short_desc: Option<String>,
    pub long_desc: Option<String>,
    pub status: EntityStatus,
}

impl NewProduct {
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        category_id: String,
        name: String,
        slug: String,
        flp_type: Option<String>,
        protection: Option<String>,
        gas_group: Option<String>,
        material: Option<String>,
        finish: Option<String>,
        hardware: Option<String>,
        hsn_code: Option<String>,
        zones: Vec<String>,
        short_desc: Option<String>,
        long_desc: Option<String>,
        status: EntityStatus,
    ) -> Self {
        Self {
            category_id,
            name: name.trim().to_string(),
            slug: normalize_slug(&slug),
            flp_type: clean(flp_type),
            protection: clean(protection),
            gas_group: clean(gas_group),
            material: clean(material),
            finish: clean(finish),
            hardware: clean(hardware),
            hsn_code: clean(hsn_code),
            zones: zones
                .into_iter()
                .map(|z| z.trim().to_string())
                .filter(|z| !z.is_empty())
                .collect(),
            short_desc: clean(short_desc),
            long_desc: clean(long_desc),
            status,
        }
    }
}

/// Field set shared by product updates; ids are immutable.
pub type UpdateProduct = NewProduct;

/// Projection backing the products list view.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ProductSummary {
    pub id: String,
    pub name: String,
    pub hsn_code: Option<String>,
    pub category_id: String,
    pub category_name: String,
    pub variant_count: i64,
    pub status: EntityStatus,
    pub deleted_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
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
    pub status: EntityStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Scalar fields of a variant as submitted by the form, before the media and
/// component rows are attached.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct VariantFields {
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
    pub status: EntityStatus,
}

impl VariantFields {
    /// Trims every optional attribute, dropping the ones left blank.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            variant: self.variant.trim().to_string(),
            sku: self.sku.trim().to_string(),
            type_number: clean(self.type_number),
            rating: clean(self.rating),
            terminals: clean(self.terminals),
            gasket: clean(self.gasket),
            mounting: clean(self.mounting),
            cable_entry: clean(self.cable_entry),
            earthing: clean(self.earthing),
            cutout_size: clean(self.cutout_size),
            plate_size: clean(self.plate_size),
            size: clean(self.size),
            glass: clean(self.glass),
            wire_guard: clean(self.wire_guard),
            rpm: clean(self.rpm),
            kw: clean(self.kw),
            horse_power: clean(self.horse_power),
            status: self.status,
        }
    }
}

/// New variant together with its media and component rows, written in one
/// transaction.
#[derive(Clone, Debug, Deserialize)]
pub struct NewProductVariant {
    pub product_id: String,
    pub fields: VariantFields,
    pub media: Vec<MediaEntry>,
    pub components: Vec<ComponentEntry>,
}

/// Variant update; `media` and `components` are the source of truth for the
/// attached rows (entries with an id are kept, the rest replaced).
#[derive(Clone, Debug, Deserialize)]
pub struct UpdateProductVariant {
    pub id: String,
    pub product_id: String,
    pub fields: VariantFields,
    pub media: Vec<MediaEntry>,
    pub components: Vec<ComponentEntry>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ProductMedia {
    pub id: String,
    pub variant_id: String,
    pub kind: MediaKind,
    pub url: String,
    pub title: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Media row as submitted: `{url, title}` from the upload service, plus the
/// row id when the file was already attached.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct MediaEntry {
    pub id: Option<String>,
    pub kind: MediaKind,
    pub url: String,
    pub title: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ProductComponent {
    pub id: String,
    /// Id of the join row linking the component to a variant.
    pub link_id: String,
    pub item: String,
    pub unit: Option<String>,
}

/// Bill-of-material row as submitted; `id` refers to the join row.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ComponentEntry {
    pub id: Option<String>,
    pub item: String,
    pub unit: Option<String>,
}

/// A variant with everything attached to it, as shown on the product page.
#[derive(Clone, Debug, Serialize)]
pub struct VariantDetail {
    pub variant: ProductVariant,
    pub images: Vec<ProductMedia>,
    pub drawings: Vec<ProductMedia>,
    pub components: Vec<ProductComponent>,
}
