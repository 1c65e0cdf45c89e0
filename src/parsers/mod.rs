pub mod html;
pub mod json;
pub mod text;

#[cfg(test)]
mod tests;

use crate::errors::ScoutError;
use crate::results::RawJobRecord;
use std::path::Path;

/// Formats a saved input file can come in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// A saved search result page
    Html,
    /// A JSON array of records dumped by another collaborator
    Json,
}

impl InputFormat {
    /// Determines the input format from the file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "html" | "htm" => {
                ::log::debug!("Reading as HTML: {}", path.display());
                Some(InputFormat::Html)
            }
            "json" => {
                ::log::debug!("Reading as JSON: {}", path.display());
                Some(InputFormat::Json)
            }
            _ => None,
        }
    }
}

/// Turns input content into raw job records
pub struct Parser;

impl Parser {
    /// Parse content of a known format
    ///
    /// HTML extraction never fails: missing fields become the sentinel and a
    /// page without cards yields nothing. JSON has to be well formed.
    pub fn parse(content: &str, format: InputFormat) -> Result<Vec<RawJobRecord>, ScoutError> {
        match format {
            InputFormat::Html => Ok(html::parse(content)),
            InputFormat::Json => json::parse(content),
        }
    }

    /// Determine the format from the path and then parse
    pub fn parse_from_path(content: &str, path: &Path) -> Result<Vec<RawJobRecord>, ScoutError> {
        match InputFormat::from_path(path) {
            Some(format) => Self::parse(content, format),
            None => Err(ScoutError::Configuration(format!(
                "unsupported input file: {}",
                path.display()
            ))),
        }
    }
}
