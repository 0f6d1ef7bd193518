//! Cash-flow forecasting: scheduled-transaction expansion over a bounded
//! horizon into bucketed running-balance series

mod engine;
mod points;

pub use engine::{CashFlowForecaster, ForecastConfig};
pub use points::{AccountFilter, ForecastDataPoint, ForecastPeriod, FutureTransaction};
