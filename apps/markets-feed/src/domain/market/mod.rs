//! Market quote domain: requests, display records, series math and
//! the closed enumerations validated at the configuration boundary.

mod currency;
mod duration;
mod record;
mod request;
pub mod series;
mod sort;

pub use currency::display_symbol;
pub use duration::LookbackDuration;
pub use record::{Market, MarketList};
pub use request::MarketRequest;
pub use sort::SortPolicy;
