pub mod aggregate;
pub mod estimate;
pub mod line;
pub mod locate;
pub mod outcome;

pub use aggregate::aggregate;
pub use estimate::{estimate, run_estimator};
pub use line::classify_line;
pub use locate::locate_numbers;
pub use outcome::{
    CategoryOutcome, ChartSeries, DashboardResult, EmissionResult, Estimate, EstimateResult,
    UsageTally,
};
