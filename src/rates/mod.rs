//! Frequency and rate conversion supplying the per-step math for projections

mod frequency;
mod periodic;

pub use frequency::{advance_date, day_label, month_label, periods_per_year};
pub use periodic::{periodic_rate, round_cents};
