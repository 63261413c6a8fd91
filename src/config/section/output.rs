//! `output` and `adapter` settings.
//!
//! ```toml
//! output = "static"          # static | server | hybrid
//! adapter = "node"           # required by server and hybrid
//! ```

use crate::config::{Choice, ConfigDiagnostics, FieldPath};
use serde::Serialize;

/// Generation strategy handed to the build pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Every page is rendered to HTML at build time.
    #[default]
    Static,
    /// Pages are rendered per request by a server runtime.
    Server,
    /// Server runtime, but pages prerender unless they opt out.
    Hybrid,
}

impl OutputMode {
    pub const FIELD: FieldPath = FieldPath::new("output");
    pub const ADAPTER: FieldPath = FieldPath::new("adapter");

    /// Whether the build emits a server entry point.
    pub const fn server_runtime(self) -> bool {
        !matches!(self, Self::Static)
    }

    /// Whether a page without an explicit opt-out is rendered at build time.
    pub const fn prerender_default(self) -> bool {
        !matches!(self, Self::Server)
    }

    /// Check the adapter against the output mode.
    pub fn validate_adapter(self, adapter: Option<&str>, diag: &mut ConfigDiagnostics) {
        match (self, adapter) {
            (Self::Static, Some(name)) => diag.warn(
                Self::ADAPTER,
                format!("adapter '{name}' is ignored because output is \"static\""),
            ),
            (Self::Server | Self::Hybrid, None) => diag.error_with_hint(
                Self::ADAPTER,
                format!("output \"{}\" needs a server adapter", self.name()),
                "set `adapter`, e.g. \"node\", or use output = \"static\"",
            ),
            (_, Some(name)) if name.trim().is_empty() => {
                diag.error(Self::ADAPTER, "adapter name must not be empty")
            }
            _ => {}
        }
    }
}

impl Choice for OutputMode {
    const VARIANTS: &'static [&'static str] = &["static", "server", "hybrid"];

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "static" => Some(Self::Static),
            "server" => Some(Self::Server),
            "hybrid" => Some(Self::Hybrid),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Server => "server",
            Self::Hybrid => "hybrid",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_default_is_static() {
        let config = test_parse_config("");
        assert_eq!(config.output, OutputMode::Static);
    }

    #[test]
    fn test_mode_parsing() {
        for (input, expected) in [
            ("static", OutputMode::Static),
            ("server", OutputMode::Server),
            ("hybrid", OutputMode::Hybrid),
        ] {
            let config = test_parse_config(&format!("output = \"{input}\""));
            assert_eq!(config.output, expected, "failed for {input}");
        }
    }

    #[test]
    fn test_serialized_name_matches_config_name() {
        for mode in [OutputMode::Static, OutputMode::Server, OutputMode::Hybrid] {
            assert_eq!(serde_json::to_value(mode).unwrap(), mode.name());
        }
        for format in [crate::config::BuildFormat::File, crate::config::BuildFormat::Directory] {
            assert_eq!(serde_json::to_value(format).unwrap(), format.name());
        }
    }

    #[test]
    fn test_runtime_flags() {
        assert!(!OutputMode::Static.server_runtime());
        assert!(OutputMode::Static.prerender_default());
        assert!(OutputMode::Server.server_runtime());
        assert!(!OutputMode::Server.prerender_default());
        assert!(OutputMode::Hybrid.server_runtime());
        assert!(OutputMode::Hybrid.prerender_default());
    }

    #[test]
    fn test_adapter_rules() {
        let mut diag = ConfigDiagnostics::new();
        OutputMode::Static.validate_adapter(Some("node"), &mut diag);
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);

        let mut diag = ConfigDiagnostics::new();
        OutputMode::Server.validate_adapter(None, &mut diag);
        assert_eq!(diag.errors()[0].field, OutputMode::ADAPTER);

        let mut diag = ConfigDiagnostics::new();
        OutputMode::Hybrid.validate_adapter(Some("node"), &mut diag);
        assert!(diag.into_result().is_ok());
    }
}
