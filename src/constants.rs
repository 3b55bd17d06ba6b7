//! Configuration constants for deb-depgraph
//!
//! This module contains the constants used throughout the application.
//! Values that users commonly change are exposed as CLI flags and config file
//! keys instead.

use std::time::Duration;

/// Progress spinner configuration
pub mod progress {
    use super::*;

    /// Duration between spinner updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames shown while the index is fetched and parsed
    pub const SPINNER_FRAMES: &[&str] = &["📦 ", "📦·", "📦∙", "📦•", "📦∙", "📦·", "✓"];
}

/// Output formatting configuration
pub mod output {
    /// Default report format when not specified
    pub const DEFAULT_FORMAT: &str = "human";

    /// Default graph format when not specified
    pub const DEFAULT_GRAPH_FORMAT: &str = "tree";
}

/// Graph construction configuration
pub mod graph {
    /// Separator between package names in a cycle path
    pub const CYCLE_SEPARATOR: &str = " -> ";

    /// Depth used when neither the CLI nor the config file sets one
    pub const DEFAULT_MAX_DEPTH: usize = 10;

    /// Smallest accepted maximum depth
    pub const MIN_MAX_DEPTH: usize = 1;

    /// Largest accepted maximum depth
    pub const MAX_MAX_DEPTH: usize = 100;
}

/// Remote index retrieval configuration
pub mod http {
    use super::*;

    /// Timeout for the whole index download
    pub const TIMEOUT: Duration = Duration::from_secs(120);

    /// User agent sent with every request
    pub const USER_AGENT: &str = concat!("deb-depgraph/", env!("CARGO_PKG_VERSION"));
}

/// Logging configuration
pub mod logging {
    /// Environment variable holding the tracing filter directives
    pub const FILTER_ENV: &str = "DEB_DEPGRAPH_LOG";

    /// Environment variable selecting `compact` or `json` log output
    pub const FORMAT_ENV: &str = "DEB_DEPGRAPH_LOG_FORMAT";

    /// Filter applied when the environment does not provide one
    pub const DEFAULT_FILTER: &str = "deb_depgraph=warn";
}
