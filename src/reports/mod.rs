//! Reports module for Kakeibo
//!
//! The analytics engine: pure derivations from a transaction list to the
//! category rollups, goal rankings, balance forecast, budget score and
//! advisory shown on the dashboard.

pub mod advisory;
pub mod aggregate;
pub mod dashboard;
pub mod forecast;
pub mod ranking;
pub mod score;

pub use advisory::{Advisory, Severity};
pub use aggregate::{Aggregates, CategoryAggregate};
pub use dashboard::{derive_dashboard, Dashboard};
pub use forecast::{Forecast, ForecastPoint, PointValue};
pub use ranking::{category_highlights, primary_goal, rank_goals, Goal};
pub use score::{Grade, ScoreResult};
