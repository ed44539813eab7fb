//! Per-endpoint access log lines.
//!
//! Every handler calls one of these before touching the service, producing
//! `<METHOD> <URI> just accessed!` with an optional ` Parameter: <value>`.

use std::fmt::Display;

use axum::http::{Method, Uri};
use tracing::info;

pub fn accessed(method: &Method, uri: &Uri) {
    info!("{} {} just accessed!", method, uri.path());
}

pub fn accessed_with<P: Display>(method: &Method, uri: &Uri, parameter: P) {
    info!(
        "{} {} just accessed! Parameter: {}",
        method,
        uri.path(),
        parameter
    );
}
