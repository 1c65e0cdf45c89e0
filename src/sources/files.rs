use crate::errors::ScoutError;
use crate::parsers::{InputFormat, Parser};
use crate::results::RawJobRecord;
use crate::sources::RecordSource;
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

/// Saved result pages (HTML) and record dumps (JSON) on disk
///
/// Each file is one page. Directories are expanded one level, in file name
/// order, keeping only supported extensions.
#[derive(Debug)]
pub struct FileSource {
    name: String,
    files: VecDeque<PathBuf>,
    max_pages: Option<usize>,
    pages_read: usize,
}

impl FileSource {
    /// Resolve the inputs. A missing path is reported here, before any
    /// record is processed.
    pub fn new(name: &str, inputs: &[PathBuf]) -> Result<Self, ScoutError> {
        let mut files = VecDeque::new();
        for input in inputs {
            if input.is_dir() {
                files.extend(list_dir(input)?);
            } else if input.is_file() {
                files.push_back(input.clone());
            } else {
                return Err(ScoutError::Configuration(format!(
                    "input not found: {}",
                    input.display()
                )));
            }
        }

        ::log::debug!("Source '{}' has {} input files", name, files.len());
        Ok(Self {
            name: name.to_string(),
            files,
            max_pages: None,
            pages_read: 0,
        })
    }

    /// Stop after `max_pages` files, as a search stops after its last
    /// requested result page
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = Some(max_pages);
        self
    }

    /// Number of files not read yet
    pub fn remaining(&self) -> usize {
        self.files.len()
    }

    fn read(path: &Path) -> Result<Vec<RawJobRecord>, ScoutError> {
        let content = fs::read_to_string(path)?;
        Parser::parse_from_path(&content, path)
    }
}

fn list_dir(dir: &Path) -> Result<Vec<PathBuf>, ScoutError> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && InputFormat::from_path(&path).is_some() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

impl RecordSource for FileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn next_page(&mut self) -> Option<Vec<RawJobRecord>> {
        while let Some(path) = self.files.pop_front() {
            if self.max_pages.is_some_and(|max| self.pages_read >= max) {
                ::log::info!(
                    "Source '{}' reached its page limit, {} files left unread",
                    self.name,
                    self.files.len() + 1
                );
                self.files.clear();
                return None;
            }
            self.pages_read += 1;

            match Self::read(&path) {
                Ok(records) if records.is_empty() => {
                    ::log::info!("No job cards in {}, skipping", path.display());
                }
                Ok(records) => {
                    ::log::debug!("Read {} records from {}", records.len(), path.display());
                    return Some(records);
                }
                Err(e) => {
                    ::log::warn!("Skipping {}: {}", path.display(), e);
                }
            }
        }
        None
    }
}
