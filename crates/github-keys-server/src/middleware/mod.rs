//! Middleware stack para el servidor HTTP.
//!
//! - `AccessLogLayer`: asigna X-Request-Id y emite una linea de access log por request

mod access_log;

pub use access_log::{AccessLogLayer, AccessLogMiddleware, REQUEST_ID_HEADER};
