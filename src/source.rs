//! Opening a Packages index from disk or over HTTP

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::PathBuf;

use flate2::read::GzDecoder;
use tracing::debug;

use crate::constants::http::{TIMEOUT, USER_AGENT};
use crate::core::SourceMode;
use crate::error::DepGraphError;

/// Where the Packages index comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSource {
    locator: String,
    mode: SourceMode,
}

impl IndexSource {
    pub fn new(locator: impl Into<String>, mode: SourceMode) -> Self {
        Self {
            locator: locator.into(),
            mode,
        }
    }

    pub fn locator(&self) -> &str {
        &self.locator
    }

    pub fn mode(&self) -> SourceMode {
        self.mode
    }

    /// Whether the stream has to be gunzipped before parsing
    pub fn is_compressed(&self) -> bool {
        self.locator.ends_with(".gz")
    }

    /// Open the index as a line-oriented reader.
    ///
    /// Remote indexes are fetched with a single blocking GET. The body is
    /// streamed, not buffered in memory up front.
    pub fn open(&self) -> Result<Box<dyn BufRead>, DepGraphError> {
        let raw: Box<dyn Read> = match self.mode {
            SourceMode::Local => Box::new(self.open_file()?),
            SourceMode::Remote => Box::new(self.fetch()?),
        };

        let reader: Box<dyn Read> = if self.is_compressed() {
            debug!(locator = %self.locator, "decompressing gzip index");
            Box::new(GzDecoder::new(raw))
        } else {
            raw
        };

        Ok(Box::new(BufReader::new(reader)))
    }

    fn open_file(&self) -> Result<File, DepGraphError> {
        debug!(path = %self.locator, "opening local index");
        File::open(&self.locator).map_err(|source| DepGraphError::FileReadError {
            path: PathBuf::from(&self.locator),
            source,
        })
    }

    fn fetch(&self) -> Result<reqwest::blocking::Response, DepGraphError> {
        let http_error = |source| DepGraphError::HttpError {
            url: self.locator.clone(),
            source,
        };

        let client = reqwest::blocking::Client::builder()
            .timeout(TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .map_err(http_error)?;

        debug!(url = %self.locator, "fetching remote index");
        let response = client.get(&self.locator).send().map_err(http_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(DepGraphError::HttpStatus {
                url: self.locator.clone(),
                status: status.as_u16(),
            });
        }

        Ok(response)
    }
}
