pub mod chart_geometry;
pub mod daily_stats;
pub mod dashboard_snapshot;
