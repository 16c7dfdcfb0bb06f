use chrono::Utc;
use diesel::prelude::*;
use diesel::sqlite::Sqlite;
use uuid::Uuid;

use crate::domain::customer::{Customer, NewCustomer, UpdateCustomer};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    CustomerListQuery, CustomerReader, CustomerSort, CustomerWriter, DieselRepository, SortDir,
    TrashFilter,
};
use crate::schema::customers;

fn apply_filters<'a, ST>(
    mut q: customers::BoxedQuery<'a, Sqlite, ST>,
    query: &CustomerListQuery,
) -> customers::BoxedQuery<'a, Sqlite, ST> {
    match query.opts.trash {
        TrashFilter::Exclude => q = q.filter(customers::deleted_at.is_null()),
        TrashFilter::Only => q = q.filter(customers::deleted_at.is_not_null()),
        TrashFilter::Include => {}
    }

    if let Some(term) = &query.opts.search {
        let pattern = format!("%{term}%");
        q = q.filter(
            customers::company_name
                .like(pattern.clone())
                .or(customers::company_email.like(pattern.clone()))
                .or(customers::company_phone.like(pattern.clone()))
                .or(customers::gstin.like(pattern.clone()))
                .or(customers::city.like(pattern)),
        );
    }

    if let Some(city) = &query.city {
        // LIKE without wildcards: case-insensitive exact match.
        q = q.filter(customers::city.like(city.clone()));
    }

    if let Some(status) = query.opts.status.as_status() {
        q = q.filter(customers::status.eq(status.as_str()));
    }

    q
}

impl CustomerReader for DieselRepository {
    fn get_customer_by_id(&self, id: &str) -> RepositoryResult<Option<Customer>> {
        use crate::models::customer::Customer as DbCustomer;

        let mut conn = self.pool().get()?;
        let customer = customers::table
            .find(id)
            .select(DbCustomer::as_select())
            .first::<DbCustomer>(&mut conn)
            .optional()?;

        Ok(customer.map(Into::into))
    }

    fn list_customers(&self, query: CustomerListQuery) -> RepositoryResult<(usize, Vec<Customer>)> {
        use crate::models::customer::Customer as DbCustomer;

        let mut conn = self.pool().get()?;

        let mut items_query = apply_filters(
            customers::table.select(DbCustomer::as_select()).into_boxed(),
            &query,
        );

        items_query = match (query.sort, query.opts.dir) {
            (CustomerSort::CompanyName, SortDir::Asc) => {
                items_query.order(customers::company_name.asc())
            }
            (CustomerSort::CompanyName, SortDir::Desc) => {
                items_query.order(customers::company_name.desc())
            }
            (CustomerSort::City, SortDir::Asc) => items_query.order(customers::city.asc()),
            (CustomerSort::City, SortDir::Desc) => items_query.order(customers::city.desc()),
            (CustomerSort::CreatedAt, SortDir::Asc) => {
                items_query.order(customers::created_at.asc())
            }
            (CustomerSort::CreatedAt, SortDir::Desc) => {
                items_query.order(customers::created_at.desc())
            }
        };

        let items = items_query
            .limit(query.opts.limit())
            .offset(query.opts.offset())
            .load::<DbCustomer>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect::<Vec<Customer>>();

        let total: i64 =
            apply_filters(customers::table.count().into_boxed(), &query).get_result(&mut conn)?;

        Ok((total as usize, items))
    }
}

impl CustomerWriter for DieselRepository {
    fn create_customer(&self, new: &NewCustomer, author: &str) -> RepositoryResult<Customer> {
        use crate::models::customer::{Customer as DbCustomer, NewCustomer as DbNewCustomer};

        let mut conn = self.pool().get()?;
        let now = Utc::now().naive_utc();
        let insertable = DbNewCustomer {
            id: Uuid::new_v4().to_string(),
            company_name: &new.company_name,
            company_email: new.company_email.as_deref(),
            company_phone: new.company_phone.as_deref(),
            address_line1: &new.address_line1,
            address_line2: new.address_line2.as_deref(),
            city: &new.city,
            state: &new.state,
            country: &new.country,
            pincode: &new.pincode,
            gstin: new.gstin.as_deref(),
            status: new.status.as_str(),
            created_at: now,
            updated_at: now,
            created_by: Some(author),
        };

        let created = diesel::insert_into(customers::table)
            .values(&insertable)
            .get_result::<DbCustomer>(&mut conn)?;

        Ok(created.into())
    }

    fn update_customer(
        &self,
        id: &str,
        updates: &UpdateCustomer,
        author: &str,
    ) -> RepositoryResult<Customer> {
        use crate::models::customer::{Customer as DbCustomer, UpdateCustomer as DbUpdateCustomer};

        let mut conn = self.pool().get()?;
        let changeset = DbUpdateCustomer {
            company_name: &updates.company_name,
            company_email: updates.company_email.as_deref(),
            company_phone: updates.company_phone.as_deref(),
            address_line1: &updates.address_line1,
            address_line2: updates.address_line2.as_deref(),
            city: &updates.city,
            state: &updates.state,
            country: &updates.country,
            pincode: &updates.pincode,
            gstin: updates.gstin.as_deref(),
            status: updates.status.as_str(),
            updated_at: Utc::now().naive_utc(),
            updated_by: Some(author),
        };

        let updated = diesel::update(customers::table.find(id))
            .set(&changeset)
            .get_result::<DbCustomer>(&mut conn)?;

        Ok(updated.into())
    }

    fn soft_delete_customer(&self, id: &str, author: &str) -> RepositoryResult<()> {
        let mut conn = self.pool().get()?;
        let now = Utc::now().naive_utc();

        let affected = diesel::update(customers::table.find(id))
            .set((
                customers::deleted_at.eq(Some(now)),
                customers::deleted_by.eq(Some(author)),
                customers::updated_at.eq(now),
            ))
            .execute(&mut conn)?;

        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    fn restore_customer(&self, id: &str, author: &str) -> RepositoryResult<()> {
        let mut conn = self.pool().get()?;
        let now = Utc::now().naive_utc();

        let affected = diesel::update(customers::table.find(id))
            .set((
                customers::deleted_at.eq(None::<chrono::NaiveDateTime>),
                customers::deleted_by.eq(None::<String>),
                customers::updated_at.eq(now),
                customers::updated_by.eq(Some(author)),
            ))
            .execute(&mut conn)?;

        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
