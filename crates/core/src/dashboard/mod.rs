//! Report orchestration and memoization.

pub mod cache;
pub mod service;
pub mod types;


pub use cache::DashboardCache;
pub use service::DashboardService;
pub use types::DashboardReport;
