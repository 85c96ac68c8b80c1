use sea_orm::Order;

use crate::error::{ApiError, FieldError};

/// Records a missing value against `param` and passes presence through, so a
/// handler can accumulate every failure before rejecting the request.
pub fn require<T>(
    errors: &mut Vec<FieldError>,
    param: &'static str,
    value: Option<T>,
) -> Option<T> {
    if value.is_none() {
        errors.push(FieldError::required(param));
    }
    value
}

/// Same as [`require`], with the non-empty-after-trim rule applied to text
/// fields on write routes.
pub fn require_text(
    errors: &mut Vec<FieldError>,
    param: &'static str,
    value: Option<String>,
) -> Option<String> {
    match value {
        Some(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                errors.push(FieldError::required(param));
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        None => {
            errors.push(FieldError::required(param));
            None
        }
    }
}

/// Whitelisted sort-direction token. Anything that is not `asc` or `desc` is
/// rejected up front; the token itself never reaches statement text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn parse(token: &str) -> Result<Self, ApiError> {
        match token.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(ApiError::validation(vec![FieldError::new(
                "sorting",
                "must be asc or desc",
            )])),
        }
    }

    pub fn order(self) -> Order {
        match self {
            Self::Asc => Order::Asc,
            Self::Desc => Order::Desc,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_tokens_are_whitelisted() {
        assert_eq!(SortDirection::parse("asc").unwrap(), SortDirection::Asc);
        assert_eq!(SortDirection::parse(" DESC ").unwrap(), SortDirection::Desc);
        assert!(SortDirection::parse("; DROP TABLE orders; --").is_err());
        assert!(SortDirection::parse("ascending").is_err());
    }

    #[test]
    fn blank_text_is_rejected() {
        let mut errors = Vec::new();
        assert!(require_text(&mut errors, "COMPANY_NAME", Some("   ".to_string())).is_none());
        assert!(require_text(&mut errors, "COMPANY_CITY", None).is_none());
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].param, "COMPANY_NAME");
    }

    #[test]
    fn present_text_is_trimmed() {
        let mut errors = Vec::new();
        let value = require_text(&mut errors, "CONAME", Some(" Foodies ".to_string()));
        assert_eq!(value.as_deref(), Some("Foodies"));
        assert!(errors.is_empty());
    }
}
