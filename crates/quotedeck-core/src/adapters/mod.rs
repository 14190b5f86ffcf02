//! Provider adapters.

mod finnhub;

pub use finnhub::FinnhubAdapter;
