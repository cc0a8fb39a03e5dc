//! Account service host resolution
//!
//! Priority: explicit value > `TIDEMARK_HOST` environment variable >
//! built-in default.

use std::env;

/// Built-in default account service endpoint
pub const DEFAULT_HOST: &str = "https://api.tidemark.sh";

/// Environment variable overriding the default host
pub const HOST_ENV: &str = "TIDEMARK_HOST";

/// Resolve the account service host.
///
/// An explicit value always wins; an empty environment override is
/// ignored rather than producing an unusable empty host.
pub fn resolve_host(explicit: Option<&str>) -> String {
    if let Some(host) = explicit {
        return host.to_string();
    }
    match env::var(HOST_ENV) {
        Ok(host) if !host.is_empty() => host,
        _ => DEFAULT_HOST.to_string(),
    }
}
