pub mod bar;
pub mod geo;
pub mod line;
pub mod scatter;
pub mod spec;
pub mod stats;
pub mod update;

pub use spec::{ChartSpec, ColorScale};
pub use update::{build_dashboard, DashboardUpdate};
