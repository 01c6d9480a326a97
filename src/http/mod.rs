//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, layers)
//!     → request.rs (x-request-id assigned/propagated)
//!     → middleware/observer.rs (client identity, timing, outcome logging)
//!     → handlers.rs (decode body, call Evaluator)
//!     → error.rs (uniform JSON body for rejected payloads)
//!     → Send to client
//! ```

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod request;
pub mod server;

pub use error::ApiError;
pub use middleware::observer::{client_identity, observe_request, ClientIdentity};
pub use request::{RequestIdExt, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
