use chrono::Utc;
use diesel::prelude::*;
use diesel::sqlite::Sqlite;
use uuid::Uuid;

use crate::domain::category::{Category, NewCategory, UpdateCategory};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    CategoryListQuery, CategoryReader, CategorySort, CategoryWriter, DieselRepository, SortDir,
    TrashFilter,
};
use crate::schema::categories;

/// Applies the AND-composed list filters. Generic over the select clause so
/// the same predicate serves both the page fetch and the count.
fn apply_filters<'a, ST>(
    mut q: categories::BoxedQuery<'a, Sqlite, ST>,
    query: &CategoryListQuery,
) -> categories::BoxedQuery<'a, Sqlite, ST> {
    match query.opts.trash {
        TrashFilter::Exclude => q = q.filter(categories::deleted_at.is_null()),
        TrashFilter::Only => q = q.filter(categories::deleted_at.is_not_null()),
        TrashFilter::Include => {}
    }

    if let Some(term) = &query.opts.search {
        // SQLite LIKE is case-insensitive for ASCII.
        let pattern = format!("%{term}%");
        q = q.filter(
            categories::name
                .like(pattern.clone())
                .or(categories::slug.like(pattern.clone()))
                .or(categories::description.like(pattern)),
        );
    }

    if let Some(status) = query.opts.status.as_status() {
        q = q.filter(categories::status.eq(status.as_str()));
    }

    q
}

impl CategoryReader for DieselRepository {
    fn get_category_by_id(&self, id: &str) -> RepositoryResult<Option<Category>> {
        use crate::models::category::Category as DbCategory;

        let mut conn = self.pool().get()?;
        let category = categories::table
            .find(id)
            .select(DbCategory::as_select())
            .first::<DbCategory>(&mut conn)
            .optional()?;

        Ok(category.map(Into::into))
    }

    fn list_categories(&self, query: CategoryListQuery) -> RepositoryResult<(usize, Vec<Category>)> {
        use crate::models::category::Category as DbCategory;

        let mut conn = self.pool().get()?;

        let mut items_query = apply_filters(
            categories::table
                .select(DbCategory::as_select())
                .into_boxed(),
            &query,
        );

        items_query = match (query.sort, query.opts.dir) {
            (CategorySort::Name, SortDir::Asc) => items_query.order(categories::name.asc()),
            (CategorySort::Name, SortDir::Desc) => items_query.order(categories::name.desc()),
            (CategorySort::Status, SortDir::Asc) => items_query.order(categories::status.asc()),
            (CategorySort::Status, SortDir::Desc) => items_query.order(categories::status.desc()),
            (CategorySort::CreatedAt, SortDir::Asc) => {
                items_query.order(categories::created_at.asc())
            }
            (CategorySort::CreatedAt, SortDir::Desc) => {
                items_query.order(categories::created_at.desc())
            }
        };

        let items = items_query
            .limit(query.opts.limit())
            .offset(query.opts.offset())
            .load::<DbCategory>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect::<Vec<Category>>();

        let total: i64 =
            apply_filters(categories::table.count().into_boxed(), &query).get_result(&mut conn)?;

        Ok((total as usize, items))
    }

    fn list_category_names(&self) -> RepositoryResult<Vec<(String, String)>> {
        let mut conn = self.pool().get()?;
        let names = categories::table
            .filter(categories::deleted_at.is_null())
            .order(categories::name.asc())
            .select((categories::id, categories::name))
            .load::<(String, String)>(&mut conn)?;

        Ok(names)
    }
}

impl CategoryWriter for DieselRepository {
    fn create_category(&self, new: &NewCategory, author: &str) -> RepositoryResult<Category> {
        use crate::models::category::{Category as DbCategory, NewCategory as DbNewCategory};

        let mut conn = self.pool().get()?;
        let now = Utc::now().naive_utc();
        let insertable = DbNewCategory {
            id: Uuid::new_v4().to_string(),
            name: &new.name,
            slug: &new.slug,
            description: new.description.as_deref(),
            status: new.status.as_str(),
            created_at: now,
            updated_at: now,
            created_by: Some(author),
        };

        let created = diesel::insert_into(categories::table)
            .values(&insertable)
            .get_result::<DbCategory>(&mut conn)?;

        Ok(created.into())
    }

    fn update_category(
        &self,
        id: &str,
        updates: &UpdateCategory,
        author: &str,
    ) -> RepositoryResult<Category> {
        use crate::models::category::{Category as DbCategory, UpdateCategory as DbUpdateCategory};

        let mut conn = self.pool().get()?;
        let changeset = DbUpdateCategory {
            name: &updates.name,
            slug: &updates.slug,
            description: updates.description.as_deref(),
            status: updates.status.as_str(),
            updated_at: Utc::now().naive_utc(),
            updated_by: Some(author),
        };

        let updated = diesel::update(categories::table.find(id))
            .set(&changeset)
            .get_result::<DbCategory>(&mut conn)?;

        Ok(updated.into())
    }

    fn soft_delete_category(&self, id: &str, author: &str) -> RepositoryResult<()> {
        let mut conn = self.pool().get()?;
        let now = Utc::now().naive_utc();

        let affected = diesel::update(categories::table.find(id))
            .set((
                categories::deleted_at.eq(Some(now)),
                categories::deleted_by.eq(Some(author)),
                categories::updated_at.eq(now),
            ))
            .execute(&mut conn)?;

        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    fn restore_category(&self, id: &str, author: &str) -> RepositoryResult<()> {
        let mut conn = self.pool().get()?;
        let now = Utc::now().naive_utc();

        let affected = diesel::update(categories::table.find(id))
            .set((
                categories::deleted_at.eq(None::<chrono::NaiveDateTime>),
                categories::deleted_by.eq(None::<String>),
                categories::updated_at.eq(now),
                categories::updated_by.eq(Some(author)),
            ))
            .execute(&mut conn)?;

        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
