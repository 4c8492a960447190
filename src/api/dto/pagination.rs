//! Pagination query parameters for the list endpoint.

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};

/// Default page size when `size` is omitted.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Largest accepted page size.
pub const MAX_PAGE_SIZE: u32 = 1000;

/// `?page=&size=` query parameters.
///
/// Uses `serde_with` to parse numbers from query strings.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct ListQueryParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub size: Option<u32>,
}

impl ListQueryParams {
    /// Validates the parameters and applies defaults.
    ///
    /// # Defaults
    ///
    /// - `page`: 0 (pages are 0-indexed)
    /// - `size`: 20
    ///
    /// # Returns
    ///
    /// `(page, size)`; `size` is between 1 and 1000.
    pub fn validate_and_get_page(&self) -> Result<(u32, u32), String> {
        let page = self.page.unwrap_or(0);
        let size = self.size.unwrap_or(DEFAULT_PAGE_SIZE);

        if !(1..=MAX_PAGE_SIZE).contains(&size) {
            return Err(format!("Page size must be between 1 and {MAX_PAGE_SIZE}"));
        }

        Ok((page, size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: Option<u32>, size: Option<u32>) -> ListQueryParams {
        ListQueryParams { page, size }
    }

    #[test]
    fn test_defaults() {
        assert_eq!(params(None, None).validate_and_get_page().unwrap(), (0, 20));
    }

    #[test]
    fn test_explicit_values() {
        assert_eq!(
            params(Some(3), Some(50)).validate_and_get_page().unwrap(),
            (3, 50)
        );
    }

    #[test]
    fn test_size_bounds() {
        assert!(params(None, Some(0)).validate_and_get_page().is_err());
        assert!(params(None, Some(1)).validate_and_get_page().is_ok());
        assert!(params(None, Some(1000)).validate_and_get_page().is_ok());
        assert!(params(None, Some(1001)).validate_and_get_page().is_err());
    }

    #[test]
    fn test_parse_from_strings() {
        let p: ListQueryParams = serde_json::from_str(r#"{"page": "2", "size": "5"}"#).unwrap();
        assert_eq!(p.page, Some(2));
        assert_eq!(p.size, Some(5));
    }
}
