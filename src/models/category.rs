use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::category::Category as DomainCategory;
use crate::domain::types::EntityStatus;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::categories)]
/// Diesel model for [`crate::domain::category::Category`].
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
    pub deleted_by: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::categories)]
/// Insertable form of [`Category`].
pub struct NewCategory<'a> {
    pub id: String,
    pub name: &'a str,
    pub slug: &'a str,
    pub description: Option<&'a str>,
    pub status: &'a str,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub created_by: Option<&'a str>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::categories)]
#[diesel(treat_none_as_null = true)]
/// Data used when updating a [`Category`] record.
pub struct UpdateCategory<'a> {
    pub name: &'a str,
    pub slug: &'a str,
    pub description: Option<&'a str>,
    pub status: &'a str,
    pub updated_at: NaiveDateTime,
    pub updated_by: Option<&'a str>,
}

impl From<Category> for DomainCategory {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            slug: category.slug,
            description: category.description,
            status: EntityStatus::from(category.status.as_str()),
            created_at: category.created_at,
            updated_at: category.updated_at,
            deleted_at: category.deleted_at,
            created_by: category.created_by,
            updated_by: category.updated_by,
            deleted_by: category.deleted_by,
        }
    }
}
