mod client;
mod errors;
mod format;
mod query;
pub mod types;

pub use self::client::Client;
pub use self::errors::{Error, ErrorMessage, ErrorResponse};
pub use self::format::OutputFormat;
pub use self::query::{CountryFilter, Filter, Frequency, Granularity, MostRecentValues, PageParams};
