//! Request middleware applied by the router.

pub mod hit_counter;
pub mod request_metrics;
