//! Request validation: required fields, formats, and ranges.

use crate::error::AppError;
use crate::models::{CreateOrderRequest, CustomerRequest, MenuItemRequest, RestaurantRequest};
use regex::Regex;
use rust_decimal::Decimal;

const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

/// Largest menu price `NUMERIC(10, 2)` holds.
pub fn max_price() -> Decimal {
    Decimal::new(99_999_999_99, 2)
}

/// Largest order total `NUMERIC(12, 2)` holds.
pub fn max_order_total() -> Decimal {
    Decimal::new(9_999_999_999_99, 2)
}

/// Implemented by every request body that creates or replaces a row.
pub trait Validate {
    fn validate(&self) -> Result<(), AppError>;
}

pub struct RequestValidator;

impl RequestValidator {
    /// Present and not only whitespace.
    pub fn required(field: &str, value: &str) -> Result<(), AppError> {
        if value.trim().is_empty() {
            return Err(AppError::Validation(format!("{} is required", field)));
        }
        Self::text(field, Some(value))
    }

    /// PostgreSQL text cannot store NUL.
    pub fn text(field: &str, value: Option<&str>) -> Result<(), AppError> {
        if value.is_some_and(|v| v.contains('\0')) {
            return Err(AppError::Validation(format!("{} must not contain NUL characters", field)));
        }
        Ok(())
    }

    pub fn email(field: &str, value: &str) -> Result<(), AppError> {
        let re = Regex::new(EMAIL_PATTERN)
            .map_err(|_| AppError::Validation(format!("invalid pattern for {}", field)))?;
        if !re.is_match(value.trim()) {
            return Err(AppError::Validation(format!("{} must be a valid email", field)));
        }
        Ok(())
    }

    /// Optional email: absent or blank is fine, anything else must be well formed.
    pub fn optional_email(field: &str, value: Option<&str>) -> Result<(), AppError> {
        match value {
            Some(v) if !v.trim().is_empty() => Self::email(field, v),
            _ => Ok(()),
        }
    }

    pub fn positive_id(field: &str, value: i64) -> Result<(), AppError> {
        if value <= 0 {
            return Err(AppError::Validation(format!("{} must be a positive integer", field)));
        }
        Ok(())
    }

    pub fn positive_quantity(field: &str, value: i32) -> Result<(), AppError> {
        if value <= 0 {
            return Err(AppError::Validation(format!("{} must be greater than 0", field)));
        }
        Ok(())
    }

    pub fn positive_price(field: &str, value: Option<Decimal>) -> Result<(), AppError> {
        match value {
            None => Err(AppError::Validation(format!("{} is required", field))),
            Some(p) if p <= Decimal::ZERO => {
                Err(AppError::Validation(format!("{} must be greater than 0", field)))
            }
            Some(p) if p.scale() > 2 => Err(AppError::Validation(format!(
                "{} must have at most 2 decimal places",
                field
            ))),
            Some(p) if p > max_price() => Err(AppError::Validation(format!(
                "{} must be at most {}",
                field,
                max_price()
            ))),
            Some(_) => Ok(()),
        }
    }
}

impl Validate for RestaurantRequest {
    fn validate(&self) -> Result<(), AppError> {
        RequestValidator::required("name", &self.name)?;
        RequestValidator::text("address", self.address.as_deref())?;
        RequestValidator::text("phone", self.phone.as_deref())?;
        RequestValidator::text("cuisine_type", self.cuisine_type.as_deref())?;
        RequestValidator::optional_email("email", self.email.as_deref())
    }
}

impl Validate for MenuItemRequest {
    fn validate(&self) -> Result<(), AppError> {
        RequestValidator::positive_id("restaurant_id", self.restaurant_id)?;
        RequestValidator::required("name", &self.name)?;
        RequestValidator::text("description", self.description.as_deref())?;
        RequestValidator::text("category", self.category.as_deref())?;
        RequestValidator::positive_price("price", self.price)
    }
}

impl Validate for CustomerRequest {
    fn validate(&self) -> Result<(), AppError> {
        RequestValidator::required("name", &self.name)?;
        RequestValidator::required("email", &self.email)?;
        RequestValidator::text("phone", self.phone.as_deref())?;
        RequestValidator::text("address", self.address.as_deref())?;
        RequestValidator::email("email", &self.email)
    }
}

impl Validate for CreateOrderRequest {
    fn validate(&self) -> Result<(), AppError> {
        RequestValidator::positive_id("customer_id", self.customer_id)?;
        RequestValidator::positive_id("restaurant_id", self.restaurant_id)?;
        RequestValidator::text("delivery_address", self.delivery_address.as_deref())?;
        RequestValidator::text("notes", self.notes.as_deref())?;
        if self.items.is_empty() {
            return Err(AppError::Validation("items must contain at least one line".into()));
        }
        for (i, line) in self.items.iter().enumerate() {
            RequestValidator::positive_id(&format!("items[{}].menu_item_id", i), line.menu_item_id)?;
            RequestValidator::positive_quantity(&format!("items[{}].quantity", i), line.quantity)?;
        }
        Ok(())
    }
}
