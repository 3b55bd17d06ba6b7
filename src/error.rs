use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid config file '{file}'")]
#[diagnostic(
    code(deb_depgraph::config_parse_error),
    help("Check the TOML near the highlighted position; accepted keys are package_name, repository_url, local, version and max_depth")
)]
pub struct ConfigParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("problem here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: toml::de::Error,
}

#[derive(Error, Debug, Diagnostic)]
pub enum DepGraphError {
    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(deb_depgraph::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    ConfigParseError(Box<ConfigParseError>),

    #[error("Failed to read the package index")]
    #[diagnostic(
        code(deb_depgraph::index_read_error),
        help("The index must be a complete, UTF-8 encoded Packages file")
    )]
    IndexReadError {
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to fetch '{url}'")]
    #[diagnostic(
        code(deb_depgraph::http_error),
        help("Check the repository URL and your network connection")
    )]
    HttpError {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Server returned HTTP {status} for '{url}'")]
    #[diagnostic(
        code(deb_depgraph::http_status),
        help("Point --repository at a Packages or Packages.gz file")
    )]
    HttpStatus { url: String, status: u16 },

    #[error("Package '{name}' not found{}", version_suffix(.version))]
    #[diagnostic(
        code(deb_depgraph::package_not_found),
        help("Check the package name; names are case-sensitive")
    )]
    PackageNotFound {
        name: String,
        version: Option<String>,
    },

    #[error("JSON serialization error")]
    #[diagnostic(
        code(deb_depgraph::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(deb_depgraph::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(deb_depgraph::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(deb_depgraph::config_error),
        help("Check your command arguments and configuration file")
    )]
    ConfigurationError { message: String },
}

fn version_suffix(version: &Option<String>) -> String {
    version
        .as_deref()
        .map(|v| format!(" (version {v})"))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use std::io;

    use miette::NamedSource;

    use super::*;

    #[test]
    fn test_config_parse_error_display() {
        let source_code = "max_depth = = 3";
        let toml_err = toml::from_str::<toml::Value>(source_code).unwrap_err();

        let error = ConfigParseError {
            file: "depgraph.toml".to_string(),
            source_code: NamedSource::new("depgraph.toml", source_code.to_string()),
            span: Some((12, 1).into()),
            source: toml_err,
        };

        assert_eq!(
            error.to_string(),
            "Invalid config file 'depgraph.toml'"
        );
    }

    #[test]
    fn test_file_read_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error = DepGraphError::FileReadError {
            path: PathBuf::from("/tmp/Packages"),
            source: io_err,
        };

        assert_eq!(error.to_string(), "Failed to read file '/tmp/Packages'");
    }

    #[test]
    fn test_package_not_found_with_and_without_version() {
        let error = DepGraphError::PackageNotFound {
            name: "curl".to_string(),
            version: None,
        };
        assert_eq!(error.to_string(), "Package 'curl' not found");

        let error = DepGraphError::PackageNotFound {
            name: "curl".to_string(),
            version: Some("7.88.1-10".to_string()),
        };
        assert_eq!(
            error.to_string(),
            "Package 'curl' not found (version 7.88.1-10)"
        );
    }

    #[test]
    fn test_http_status_error() {
        let error = DepGraphError::HttpStatus {
            url: "http://archive.example/Packages".to_string(),
            status: 404,
        };

        assert_eq!(
            error.to_string(),
            "Server returned HTTP 404 for 'http://archive.example/Packages'"
        );
    }

    #[test]
    fn test_configuration_error() {
        let error = DepGraphError::ConfigurationError {
            message: "max_depth must be between 1 and 100".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Configuration error: max_depth must be between 1 and 100"
        );
    }

    #[test]
    fn test_error_codes() {
        use miette::Diagnostic;

        let error = DepGraphError::IndexReadError {
            source: io::Error::new(io::ErrorKind::InvalidData, "stream did not contain valid UTF-8"),
        };

        assert!(error.code().is_some());
        assert!(error.help().is_some());
    }

    #[test]
    fn test_error_conversion_from_io() {
        let io_err = io::Error::other("some io error");
        let err: DepGraphError = io_err.into();

        match err {
            DepGraphError::Io(_) => {}
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_error_conversion_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{invalid json}").unwrap_err();
        let err: DepGraphError = json_err.into();

        match err {
            DepGraphError::Json(_) => {}
            _ => panic!("Expected Json variant"),
        }
    }
}
