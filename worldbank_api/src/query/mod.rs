mod pages;
pub use self::pages::PageParams;

mod date;
pub use self::date::Granularity;

mod filter;
pub use self::filter::{CountryFilter, Filter, Frequency, MostRecentValues};
