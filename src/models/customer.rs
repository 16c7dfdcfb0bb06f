use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::customer::Customer as DomainCustomer;
use crate::domain::types::EntityStatus;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::customers)]
/// Diesel model for [`crate::domain::customer::Customer`].
pub struct Customer {
    pub id: String,
    pub company_name: String,
    pub company_email: Option<String>,
    pub company_phone: Option<String>,
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub city: String,
    pub state: String,
    pub country: String,
    pub pincode: String,
    pub gstin: Option<String>,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
    pub deleted_by: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::customers)]
/// Insertable form of [`Customer`].
pub struct NewCustomer<'a> {
    pub id: String,
    pub company_name: &'a str,
    pub company_email: Option<&'a str>,
    pub company_phone: Option<&'a str>,
    pub address_line1: &'a str,
    pub address_line2: Option<&'a str>,
    pub city: &'a str,
    pub state: &'a str,
    pub country: &'a str,
    pub pincode: &'a str,
    pub gstin: Option<&'a str>,
    pub status: &'a str,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub created_by: Option<&'a str>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::customers)]
#[diesel(treat_none_as_null = true)]
/// Data used when updating a [`Customer`] record.
pub struct UpdateCustomer<'a> {
    pub company_name: &'a str,
    pub company_email: Option<&'a str>,
    pub company_phone: Option<&'a str>,
    pub address_line1: &'a str,
    pub address_line2: Option<&'a str>,
    pub city: &'a str,
    pub state: &'a str,
    pub country: &'a str,
    pub pincode: &'a str,
    pub gstin: Option<&'a str>,
    pub status: &'a str,
    pub updated_at: NaiveDateTime,
    pub updated_by: Option<&'a str>,
}

impl From<Customer> for DomainCustomer {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            company_name: customer.company_name,
            company_email: customer.company_email,
            company_phone: customer.company_phone,
            address_line1: customer.address_line1,
            address_line2: customer.address_line2,
            city: customer.city,
            state: customer.state,
            country: customer.country,
            pincode: customer.pincode,
            gstin: customer.gstin,
            status: EntityStatus::from(customer.status.as_str()),
            created_at: customer.created_at,
            updated_at: customer.updated_at,
            deleted_at: customer.deleted_at,
            created_by: customer.created_by,
            updated_by: customer.updated_by,
            deleted_by: customer.deleted_by,
        }
    }
}
