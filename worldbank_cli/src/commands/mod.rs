pub mod countries;
pub mod income_levels;
pub mod indicators;
pub mod languages;
pub mod lending_types;
pub mod regions;
pub mod sources;
pub mod topics;
pub mod values;

use worldbank_api::PageParams;

/// Builds page params from optional CLI flags. Absent flags leave
/// pagination to the API defaults; a lone flag fills the other side in.
pub(crate) fn page_params(page: Option<i64>, per_page: Option<i64>) -> Option<PageParams> {
    match (page, per_page) {
        (None, None) => None,
        (page, per_page) => Some(PageParams::new(page.unwrap_or(1), per_page.unwrap_or(50))),
    }
}
