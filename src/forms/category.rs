use serde::Deserialize;
use validator::Validate;

use crate::domain::category::{NewCategory, UpdateCategory};
use crate::domain::types::EntityStatus;

#[derive(Deserialize, Validate)]
/// Form data for creating a category.
pub struct AddCategoryForm {
    #[validate(length(min = 2, max = 100))]
    pub name: String,
    #[validate(length(min = 2, max = 120))]
    pub slug: String,
    #[validate(length(max = 500))]
    pub description: Option<String>,
    #[serde(default)]
    pub status: String,
}

#[derive(Deserialize, Validate)]
/// Form data for updating an existing category.
pub struct SaveCategoryForm {
    pub id: String,
    #[validate(length(min = 2, max = 100))]
    pub name: String,
    #[validate(length(min = 2, max = 120))]
    pub slug: String,
    #[validate(length(max = 500))]
    pub description: Option<String>,
    #[serde(default)]
    pub status: String,
}

impl From<&AddCategoryForm> for NewCategory {
    fn from(form: &AddCategoryForm) -> Self {
        NewCategory::new(
            form.name.clone(),
            form.slug.clone(),
            form.description.clone(),
            EntityStatus::from(form.status.as_str()),
        )
    }
}

impl From<&SaveCategoryForm> for UpdateCategory {
    fn from(form: &SaveCategoryForm) -> Self {
        UpdateCategory::new(
            form.name.clone(),
            form.slug.clone(),
            form.description.clone(),
            EntityStatus::from(form.status.as_str()),
        )
    }
}
