//! Field-level validation for inbound payloads

use std::borrow::Cow;

use rust_decimal::Decimal;
use serde::Serialize;
use validator::{Validate, ValidationError, ValidationErrors};

pub const MIN_PRICE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);
pub const MAX_PRICE: Decimal = Decimal::from_parts(99_999, 0, 0, false, 2);
/// Decimal places the `NUMERIC(6,2)` price column keeps.
pub const PRICE_SCALE: u32 = 2;

/// One failed rule on one field. `field` uses the wire (camelCase) name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Runs every declared rule on `input` and flattens the failures, sorted by field.
pub fn validate_input<T: Validate>(input: &T) -> Result<(), Vec<FieldError>> {
    match input.validate() {
        Ok(()) => Ok(()),
        Err(errors) => Err(flatten(&errors)),
    }
}

fn flatten(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut flattened: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = camel_case(&field.to_string());
            errs.iter().map(move |e| FieldError {
                field: field.clone(),
                message: e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value ({})", e.code)),
            })
        })
        .collect();
    flattened.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.message.cmp(&b.message)));
    flattened
}

fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for c in field.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

pub(crate) fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if *price < MIN_PRICE || *price > MAX_PRICE {
        let mut error = ValidationError::new("range");
        error.message = Some(Cow::from("Price must be between 0.01 and 999.99"));
        return Err(error);
    }
    if price.normalize().scale() > PRICE_SCALE {
        let mut error = ValidationError::new("scale");
        error.message = Some(Cow::from("Price cannot have more than 2 decimal places"));
        return Err(error);
    }
    Ok(())
}

/// Required strings may not be whitespace only, since trimming would empty them.
pub(crate) fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("required");
        error.message = Some(Cow::from("Value is required"));
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("dietary_tag"), "dietaryTag");
        assert_eq!(camel_case("name"), "name");
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        assert!(validate_price(&Decimal::new(1, 2)).is_ok());
        assert!(validate_price(&Decimal::new(99999, 2)).is_ok());
        assert!(validate_price(&Decimal::ZERO).is_err());
        assert!(validate_price(&Decimal::new(100000, 2)).is_err());
        assert!(validate_price(&Decimal::new(-5, 0)).is_err());
    }

    #[test]
    fn test_price_rejects_sub_cent_precision() {
        assert!(validate_price(&Decimal::new(12999, 3)).is_err());
        assert!(validate_price(&Decimal::new(12990, 3)).is_ok());
        assert!(validate_price(&Decimal::new(125, 1)).is_ok());
    }

    #[test]
    fn test_not_blank() {
        assert!(validate_not_blank("Soup").is_ok());
        assert!(validate_not_blank(" \t\r\n").is_err());
        assert!(validate_not_blank("").is_err());
    }
}
