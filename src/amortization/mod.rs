//! Debt amortization: historical principal/interest reconstruction and
//! forward projection to payoff

mod engine;
mod schedule;
mod state;

pub use engine::{
    DebtProjector, ProjectorConfig, BALANCE_EPSILON, MAX_DISPLAY_POINTS, MAX_PROJECTION_STEPS,
};
pub use schedule::{PayoffProjection, PayoffScheduleItem};
