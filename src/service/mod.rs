pub mod aggregation_service_impl;
pub mod chart_service_impl;
pub mod query_service_impl;
