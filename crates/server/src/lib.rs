//! Converter Server - HTTP REST API for the personalization content converter
//!
//! Exposes the UO, DY, IS and Common translators over HTTP. Each endpoint
//! decodes the body as its input document, runs exactly one translator and
//! replies with `{"request": <input>, "response": <output>}`.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `GET /` - API information
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe
//! - `GET /metrics` - Prometheus metrics
//! - `POST /translate/request/uo-to-common`
//! - `POST /translate/request/common-to-uo`
//! - `POST /translate/request/dy-to-common`
//! - `POST /translate/request/common-to-dy`
//! - `POST /translate/response/common-to-is`
//! - `POST /translate/response/is-to-common`
//!
//! Errors are JSON: `{"error": {"code": "BAD_REQUEST", "message": "..."}}`.
//!
//! # Configuration
//!
//! [`ServerConfig::load`] reads `.env`, an optional `server.{toml,yaml,json}`
//! file and `CONVERTER_SERVER__*` environment variables, e.g.
//! `CONVERTER_SERVER__PORT=9000`.

pub mod config;
pub mod error;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
