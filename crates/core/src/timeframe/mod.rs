//! Calendar-aligned reporting windows.

pub mod window;

pub use window::{ReportingWindow, Timeframe, WindowPair};
