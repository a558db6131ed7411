pub mod daily;
pub mod weekly;

pub use daily::aggregate_daily;
pub use weekly::aggregate_weekly;
