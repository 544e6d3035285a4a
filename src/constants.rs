//! Application constants
//!
//! Endpoint, limits and defaults shared by the fetch path and the terminal UI.

/// Search endpoint with the fixed order, sort, site, answer and filter
/// parameters. The encoded query is appended as the `q` value.
pub const SEARCH_URL: &str = "https://api.stackexchange.com/2.3/search/advanced?order=desc&sort=votes&site=stackoverflow&answers=1&filter=sh-X*VEiDQuCRN)Ihmxav)p(5ge10gJpN5y&q=";

/// Maximum number of questions kept from a search response.
pub const RESPONSE_LIMIT: usize = 5;

/// Value sent in the `User-Agent` header.
pub const USER_AGENT: &str = concat!("duckoverflow/", env!("CARGO_PKG_VERSION"));

/// Wrap width used when the terminal size cannot be queried.
pub const FALLBACK_WIDTH: usize = 80;

/// Environment variable holding the `tracing` filter directives.
pub const LOG_ENV: &str = "DUCKOVERFLOW_LOG";

/// Filter used when `LOG_ENV` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "warn";
