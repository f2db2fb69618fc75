//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Request handling produces:
//!     → hits.rs (domain hit counter behind /admin/metrics)
//!     → metrics.rs (operational counters for Prometheus scrape)
//!
//! Consumers:
//!     → Admin metrics page (hit count, resettable)
//!     → Metrics endpoint (Prometheus scrape, separate listener)
//! ```
//!
//! # Design Decisions
//! - The hit counter is owned state injected through AppState, not a global
//! - Metric updates are cheap (atomic increments)
//! - The Prometheus exporter is optional and never blocks API traffic

pub mod hits;
pub mod metrics;

pub use hits::HitCounter;
