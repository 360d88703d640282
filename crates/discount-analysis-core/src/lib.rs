pub mod error;
pub mod pricing;
pub mod types;

#[cfg(feature = "scenarios")]
pub mod scenarios;

#[cfg(feature = "report")]
pub mod report;

#[cfg(feature = "market")]
pub mod market;

pub use error::DiscountError;
pub use types::*;

/// Standard result type for all discount-analysis operations
pub type DiscountResult<T> = Result<T, DiscountError>;
