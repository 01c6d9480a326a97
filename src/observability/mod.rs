//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! evaluator + request observer produce:
//!     → logging.rs (structured tracing events)
//!     → metrics.rs (counters, histograms)
//!
//! Sinks:
//!     → console (human-readable)
//!     → <log_dir>/app (JSON, everything below error level)
//!     → <log_dir>/err (JSON, error level only)
//!     → Prometheus scrape endpoint (optional)
//! ```
//!
//! # Design Decisions
//! - Failure events are routed by level, so the error sink needs no
//!   cooperation from call sites beyond using `error!`
//! - Metrics are no-ops until an exporter is installed

pub mod logging;
pub mod metrics;
