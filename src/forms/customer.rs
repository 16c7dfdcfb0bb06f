use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use validator::{Validate, ValidateEmail, ValidationError};

use crate::domain::customer::{NewCustomer, UpdateCustomer};
use crate::domain::types::EntityStatus;

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9+\-()\s]{7,20}$").expect("valid phone regex")
});
static PINCODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[1-9][0-9]{5}$").expect("valid pincode regex"));
static GSTIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{2}[A-Z]{5}[0-9]{4}[A-Z]{1}[1-9A-Z]{1}Z[0-9A-Z]{1}$")
        .expect("valid GSTIN regex")
});

/// Optional fields arrive as empty strings from the form, so the stock
/// validators cannot be applied directly.
fn optional_email(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || value.validate_email() {
        Ok(())
    } else {
        Err(ValidationError::new("email"))
    }
}

fn optional_phone(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || PHONE_RE.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::new("phone"))
    }
}

fn optional_gstin(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || GSTIN_RE.is_match(&value.to_uppercase()) {
        Ok(())
    } else {
        Err(ValidationError::new("gstin"))
    }
}

fn optional_country(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || (2..=80).contains(&value.chars().count()) {
        Ok(())
    } else {
        Err(ValidationError::new("country"))
    }
}

#[derive(Deserialize, Validate)]
/// Form data for creating a customer.
pub struct AddCustomerForm {
    #[validate(length(min = 2, max = 160))]
    pub company_name: String,
    #[serde(default)]
    #[validate(custom(function = optional_email))]
    pub company_email: String,
    #[serde(default)]
    #[validate(custom(function = optional_phone))]
    pub company_phone: String,
    #[validate(length(min = 3, max = 200))]
    pub address_line1: String,
    #[serde(default)]
    #[validate(length(max = 200))]
    pub address_line2: String,
    #[validate(length(min = 2, max = 80))]
    pub city: String,
    #[validate(length(min = 2, max = 80))]
    pub state: String,
    #[serde(default)]
    #[validate(custom(function = optional_country))]
    pub country: String,
    #[validate(regex(path = *PINCODE_RE))]
    pub pincode: String,
    #[serde(default)]
    #[validate(custom(function = optional_gstin))]
    pub gstin: String,
    #[serde(default)]
    pub status: String,
}

#[derive(Deserialize, Validate)]
/// Form data for updating an existing customer.
pub struct SaveCustomerForm {
    pub id: String,
    #[validate(length(min = 2, max = 160))]
    pub company_name: String,
    #[serde(default)]
    #[validate(custom(function = optional_email))]
    pub company_email: String,
    #[serde(default)]
    #[validate(custom(function = optional_phone))]
    pub company_phone: String,
    #[validate(length(min = 3, max = 200))]
    pub address_line1: String,
    #[serde(default)]
    #[validate(length(max = 200))]
    pub address_line2: String,
    #[validate(length(min = 2, max = 80))]
    pub city: String,
    #[validate(length(min = 2, max = 80))]
    pub state: String,
    #[serde(default)]
    #[validate(custom(function = optional_country))]
    pub country: String,
    #[validate(regex(path = *PINCODE_RE))]
    pub pincode: String,
    #[serde(default)]
    #[validate(custom(function = optional_gstin))]
    pub gstin: String,
    #[serde(default)]
    pub status: String,
}

impl From<&AddCustomerForm> for NewCustomer {
    fn from(form: &AddCustomerForm) -> Self {
        NewCustomer::new(
            form.company_name.clone(),
            Some(form.company_email.clone()),
            Some(form.company_phone.clone()),
            form.address_line1.clone(),
            Some(form.address_line2.clone()),
            form.city.clone(),
            form.state.clone(),
            form.country.clone(),
            form.pincode.clone(),
            Some(form.gstin.clone()),
            EntityStatus::from(form.status.as_str()),
        )
    }
}

impl From<&SaveCustomerForm> for UpdateCustomer {
    fn from(form: &SaveCustomerForm) -> Self {
        UpdateCustomer::new(
            form.company_name.clone(),
            Some(form.company_email.clone()),
            Some(form.company_phone.clone()),
            form.address_line1.clone(),
            Some(form.address_line2.clone()),
            form.city.clone(),
            form.state.clone(),
            form.country.clone(),
            form.pincode.clone(),
            Some(form.gstin.clone()),
            EntityStatus::from(form.status.as_str()),
        )
    }
}
