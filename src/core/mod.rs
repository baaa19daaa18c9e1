pub mod aggregate;
pub mod export;
pub mod log;
pub mod logbook;
pub mod period;

pub use aggregate::{AggregateResult, aggregate};
pub use period::{DateRange, PeriodKey, resolve};
