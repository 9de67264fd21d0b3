//! Pagination query parameters.

use url::Url;

use crate::Error;

/// Page window for list endpoints. Both values are 1-indexed and must be
/// strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    pub page: i64,
    pub per_page: i64,
}

impl PageParams {
    pub fn new(page: i64, per_page: i64) -> Self {
        Self { page, per_page }
    }

    /// Appends `page` and `per_page` to the URL, preserving parameters
    /// already present. Rejects non-positive values before any request
    /// is sent, naming the offending field.
    pub fn add_to_url(&self, url: &mut Url) -> Result<(), Error> {
        if self.page <= 0 {
            return Err(Error::Validation("page must be greater than 0".into()));
        }
        if self.per_page <= 0 {
            return Err(Error::Validation("per_page must be greater than 0".into()));
        }
        url.query_pairs_mut()
            .append_pair("page", &self.page.to_string())
            .append_pair("per_page", &self.per_page.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::PageParams;
    use crate::Error;

    fn base() -> Url {
        Url::parse("https://example.org/v2/countries?format=json").unwrap()
    }

    #[test]
    fn appends_page_and_per_page() {
        let mut url = base();
        PageParams::new(2, 50).add_to_url(&mut url).unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.org/v2/countries?format=json&page=2&per_page=50"
        );
    }

    #[test]
    fn rejects_non_positive_page() {
        for page in [0, -1] {
            let mut url = base();
            let err = PageParams::new(page, 50).add_to_url(&mut url).unwrap_err();
            match err {
                Error::Validation(msg) => assert!(msg.contains("page"), "message: {msg}"),
                other => panic!("expected validation error, got {other:?}"),
            }
        }
    }

    #[test]
    fn rejects_non_positive_per_page() {
        let mut url = base();
        let err = PageParams::new(1, 0).add_to_url(&mut url).unwrap_err();
        match err {
            Error::Validation(msg) => assert!(msg.contains("per_page"), "message: {msg}"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn rejected_params_leave_url_untouched() {
        let mut url = base();
        let before = url.to_string();
        let _ = PageParams::new(0, 0).add_to_url(&mut url);
        assert_eq!(url.to_string(), before);
    }
}
