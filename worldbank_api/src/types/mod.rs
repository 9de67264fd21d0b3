mod meta;
pub use self::meta::{PageSummary, PageSummaryWithLastUpdated, PageSummaryWithSource};

mod country;
pub use self::country::{CodeRef, Country};

mod region;
pub use self::region::Region;

mod source;
pub use self::source::Source;

mod topic;
pub use self::topic::Topic;

mod indicator;
pub use self::indicator::{IdAndValue, Indicator};

mod indicator_value;
pub use self::indicator_value::{IndicatorValue, IndicatorValueWithFootnote};

mod income_level;
pub use self::income_level::IncomeLevel;

mod lending_type;
pub use self::lending_type::LendingType;

mod language;
pub use self::language::Language;
