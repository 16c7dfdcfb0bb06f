use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::EntityStatus;

/// Country stored when the form leaves the field empty.
pub const DEFAULT_COUNTRY: &str = "India";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
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
    pub status: EntityStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
    pub deleted_by: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewCustomer {
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
    pub status: EntityStatus,
}

impl NewCustomer {
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        company_name: String,
        company_email: Option<String>,
        company_phone: Option<String>,
        address_line1: String,
        address_line2: Option<String>,
        city: String,
        state: String,
        country: String,
        pincode: String,
        gstin: Option<String>,
        status: EntityStatus,
    ) -> Self {
        let country = country.trim().to_string();
        Self {
            company_name: company_name.trim().to_string(),
            company_email: company_email
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty()),
            company_phone: company_phone
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            address_line1: address_line1.trim().to_string(),
            address_line2: address_line2
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            city: city.trim().to_string(),
            state: state.trim().to_string(),
            country: if country.is_empty() {
                DEFAULT_COUNTRY.to_string()
            } else {
                country
            },
            pincode: pincode.trim().to_string(),
            gstin: gstin
                .map(|s| s.trim().to_uppercase())
                .filter(|s| !s.is_empty()),
            status,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateCustomer {
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
    pub status: EntityStatus,
}

impl UpdateCustomer {
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        company_name: String,
        company_email: Option<String>,
        company_phone: Option<String>,
        address_line1: String,
        address_line2: Option<String>,
        city: String,
        state: String,
        country: String,
        pincode: String,
        gstin: Option<String>,
        status: EntityStatus,
    ) -> Self {
        let normalized = NewCustomer::new(
            company_name,
            company_email,
            company_phone,
            address_line1,
            address_line2,
            city,
            state,
            country,
            pincode,
            gstin,
            status,
        );
        Self {
            company_name: normalized.company_name,
            company_email: normalized.company_email,
            company_phone: normalized.company_phone,
            address_line1: normalized.address_line1,
            address_line2: normalized.address_line2,
            city: normalized.city,
            state: normalized.state,
            country: normalized.country,
            pincode: normalized.pincode,
            gstin: normalized.gstin,
            status: normalized.status,
        }
    }
}
