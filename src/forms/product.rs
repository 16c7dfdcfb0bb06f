use serde::Deserialize;
use validator::{Validate, ValidateUrl, ValidationError};

use crate::domain::product::{
    ComponentEntry, MediaEntry, NewProduct, NewProductVariant, UpdateProduct, UpdateProductVariant,
    VariantFields,
};
use crate::domain::types::{EntityStatus, MediaKind};

fn validate_zones(zones: &Vec<String>) -> Result<(), ValidationError> {
    let mut seen = Vec::new();
    for zone in zones {
        let zone = zone.trim().to_lowercase();
        if zone.is_empty() {
            continue;
        }
        if seen.contains(&zone) {
            return Err(ValidationError::new("duplicate_zone"));
        }
        seen.push(zone);
    }
    if seen.is_empty() {
        return Err(ValidationError::new("zones_required"));
    }
    Ok(())
}

fn validate_media_urls(urls: &Vec<String>) -> Result<(), ValidationError> {
    for url in urls {
        if !url.is_empty() && !url.validate_url() {
            return Err(ValidationError::new("url"));
        }
    }
    Ok(())
}

#[derive(Deserialize, Validate)]
/// Form data for creating a product.
pub struct AddProductForm {
    #[validate(length(min = 1))]
    pub category_id: String,
    #[validate(length(min = 2, max = 180))]
    pub name: String,
    #[validate(length(min = 2, max = 200))]
    pub slug: String,
    #[validate(length(max = 120))]
    pub flp_type: Option<String>,
    #[validate(length(max = 120))]
    pub protection: Option<String>,
    #[validate(length(max = 120))]
    pub gas_group: Option<String>,
    #[validate(length(max = 120))]
    pub material: Option<String>,
    #[validate(length(max = 120))]
    pub finish: Option<String>,
    #[validate(length(max = 120))]
    pub hardware: Option<String>,
    #[validate(length(max = 20))]
    pub hsn_code: Option<String>,
    #[serde(default)]
    #[validate(custom(function = validate_zones))]
    pub zones: Vec<String>,
    #[validate(length(max = 300))]
    pub short_desc: Option<String>,
    #[validate(length(max = 10000))]
    pub long_desc: Option<String>,
    #[serde(default)]
    pub status: String,
}

#[derive(Deserialize, Validate)]
/// Form data for updating an existing product.
pub struct SaveProductForm {
    pub id: String,
    #[validate(length(min = 1))]
    pub category_id: String,
    #[validate(length(min = 2, max = 180))]
    pub name: String,
    #[validate(length(min = 2, max = 200))]
    pub slug: String,
    #[validate(length(max = 120))]
    pub flp_type: Option<String>,
    #[validate(length(max = 120))]
    pub protection: Option<String>,
    #[validate(length(max = 120))]
    pub gas_group: Option<String>,
    #[validate(length(max = 120))]
    pub material: Option<String>,
    #[validate(length(max = 120))]
    pub finish: Option<String>,
    #[validate(length(max = 120))]
    pub hardware: Option<String>,
    #[validate(length(max = 20))]
    pub hsn_code: Option<String>,
    #[serde(default)]
    #[validate(custom(function = validate_zones))]
    pub zones: Vec<String>,
    #[validate(length(max = 300))]
    pub short_desc: Option<String>,
    #[validate(length(max = 10000))]
    pub long_desc: Option<String>,
    #[serde(default)]
    pub status: String,
}

impl From<&AddProductForm> for NewProduct {
    fn from(form: &AddProductForm) -> Self {
        NewProduct::new(
            form.category_id.clone(),
            form.name.clone(),
            form.slug.clone(),
            form.flp_type.clone(),
            form.protection.clone(),
            form.gas_group.clone(),
            form.material.clone(),
            form.finish.clone(),
            form.hardware.clone(),
            form.hsn_code.clone(),
            form.zones.clone(),
            form.short_desc.clone(),
            form.long_desc.clone(),
            EntityStatus::from(form.status.as_str()),
        )
    }
}

impl From<&SaveProductForm> for UpdateProduct {
    fn from(form: &SaveProductForm) -> Self {
        UpdateProduct::new(
            form.category_id.clone(),
            form.name.clone(),
            form.slug.clone(),
            form.flp_type.clone(),
            form.protection.clone(),
            form.gas_group.clone(),
            form.material.clone(),
            form.finish.clone(),
            form.hardware.clone(),
            form.hsn_code.clone(),
            form.zones.clone(),
            form.short_desc.clone(),
            form.long_desc.clone(),
            EntityStatus::from(form.status.as_str()),
        )
    }
}

/// Form data for creating or updating a product variant.
///
/// Media and component rows come in as parallel arrays (one entry per repeated
/// form field), so the body has to be parsed with `serde_html_form`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct SaveVariantForm {
    #[serde(default)]
    pub id: String,
    #[validate(length(min = 1))]
    pub product_id: String,
    #[validate(length(min = 2, max = 180))]
    pub variant: String,
    #[serde(default)]
    #[validate(length(max = 80))]
    pub sku: String,
    #[validate(length(max = 120))]
    pub type_number: Option<String>,
    #[validate(length(max = 120))]
    pub rating: Option<String>,
    #[validate(length(max = 120))]
    pub terminals: Option<String>,
    #[validate(length(max = 120))]
    pub gasket: Option<String>,
    #[validate(length(max = 120))]
    pub mounting: Option<String>,
    #[validate(length(max = 120))]
    pub cable_entry: Option<String>,
    #[validate(length(max = 120))]
    pub earthing: Option<String>,
    #[validate(length(max = 120))]
    pub cutout_size: Option<String>,
    #[validate(length(max = 120))]
    pub plate_size: Option<String>,
    #[validate(length(max = 120))]
    pub size: Option<String>,
    #[validate(length(max = 120))]
    pub glass: Option<String>,
    #[validate(length(max = 120))]
    pub wire_guard: Option<String>,
    #[validate(length(max = 120))]
    pub rpm: Option<String>,
    #[validate(length(max = 120))]
    pub kw: Option<String>,
    #[validate(length(max = 120))]
    pub horse_power: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub media_id: Vec<String>,
    #[serde(default)]
    pub media_kind: Vec<String>,
    #[serde(default)]
    #[validate(custom(function = validate_media_urls))]
    pub media_url: Vec<String>,
    #[serde(default)]
    pub media_title: Vec<String>,
    #[serde(default)]
    pub component_id: Vec<String>,
    #[serde(default)]
    pub component_item: Vec<String>,
    #[serde(default)]
    pub component_unit: Vec<String>,
}

fn entry_id(raw: Option<&String>) -> Option<String> {
    raw.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

impl SaveVariantForm {
    fn fields(&self) -> VariantFields {
        VariantFields {
            variant: self.variant.clone(),
            sku: self.sku.clone(),
            type_number: self.type_number.clone(),
            rating: self.rating.clone(),
            terminals: self.terminals.clone(),
            gasket: self.gasket.clone(),
            mounting: self.mounting.clone(),
            cable_entry: self.cable_entry.clone(),
            earthing: self.earthing.clone(),
            cutout_size: self.cutout_size.clone(),
            plate_size: self.plate_size.clone(),
            size: self.size.clone(),
            glass: self.glass.clone(),
            wire_guard: self.wire_guard.clone(),
            rpm: self.rpm.clone(),
            kw: self.kw.clone(),
            horse_power: self.horse_power.clone(),
            status: EntityStatus::from(self.status.as_str()),
        }
        .normalized()
    }

    /// Zips the parallel media arrays, skipping rows without a url.
    pub fn media_entries(&self) -> Vec<MediaEntry> {
        self.media_url
            .iter()
            .enumerate()
            .filter(|(_, url)| !url.trim().is_empty())
            .map(|(idx, url)| MediaEntry {
                id: entry_id(self.media_id.get(idx)),
                kind: MediaKind::from(
                    self.media_kind.get(idx).map(String::as_str).unwrap_or(""),
                ),
                url: url.trim().to_string(),
                title: self
                    .media_title
                    .get(idx)
                    .map(|t| t.trim().to_string())
                    .filter(|t| !t.is_empty()),
            })
            .collect()
    }

    /// Zips the parallel component arrays, skipping rows without an item.
    pub fn component_entries(&self) -> Vec<ComponentEntry> {
        self.component_item
            .iter()
            .enumerate()
            .filter(|(_, item)| !item.trim().is_empty())
            .map(|(idx, item)| ComponentEntry {
                id: entry_id(self.component_id.get(idx)),
                item: item.trim().to_string(),
                unit: self
                    .component_unit
                    .get(idx)
                    .map(|u| u.trim().to_string())
                    .filter(|u| !u.is_empty()),
            })
            .collect()
    }

    pub fn to_new_variant(&self) -> NewProductVariant {
        NewProductVariant {
            product_id: self.product_id.clone(),
            fields: self.fields(),
            media: self.media_entries(),
            components: self.component_entries(),
        }
    }

    pub fn to_update_variant(&self) -> UpdateProductVariant {
        UpdateProductVariant {
            id: self.id.clone(),
            product_id: self.product_id.clone(),
            fields: self.fields(),
            media: self.media_entries(),
            components: self.component_entries(),
        }
    }
}
