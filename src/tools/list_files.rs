//! Tool for listing directory contents
//!
//! This module implements the list_files MCP tool, which enumerates the
//! entries of a directory that match a glob pattern.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use chrono::{DateTime, Local};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;
use tracing::debug;

use crate::envelope::{Envelope, ToolFailure};

/// Parameters for listing files
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct FileListRequest {
    /// Directory to list files from
    #[serde(default = "default_directory")]
    pub directory: String,
    /// File pattern to match
    #[serde(default = "default_pattern")]
    pub pattern: String,
}

fn default_directory() -> String {
    ".".to_string()
}

fn default_pattern() -> String {
    "*".to_string()
}

impl Default for FileListRequest {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            pattern: default_pattern(),
        }
    }
}

/// A single matched entry
///
/// Size and modification time are only reported for regular files.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileEntry {
    pub name: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,
    pub is_file: bool,
}

/// Response from listing a directory
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileListing {
    pub directory: String,
    pub pattern: String,
    pub files: Vec<FileEntry>,
    pub count: usize,
}

/// Failures while walking the matched entries
#[derive(Error, Debug)]
enum ListingError {
    #[error("invalid pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("unsupported pattern '{0}': patterns must be non-empty and relative to the directory")]
    UnsupportedPattern(String),

    #[error("{0}")]
    Glob(#[from] glob::GlobError),

    #[error("{0}")]
    Io(#[from] io::Error),
}

/// List the entries of a directory matching a glob pattern
pub fn list_files(request: &FileListRequest) -> Envelope<FileListing> {
    // An empty directory means the current one
    let directory = if request.directory.is_empty() {
        Path::new(".")
    } else {
        Path::new(&request.directory)
    };

    if !directory.exists() {
        return Envelope::Error(
            ToolFailure::new(format!("Directory does not exist: {}", request.directory))
                .with("directory", json!(request.directory)),
        );
    }

    if !directory.is_dir() {
        return Envelope::Error(
            ToolFailure::new(format!("Path is not a directory: {}", request.directory))
                .with("directory", json!(request.directory)),
        );
    }

    match collect_entries(directory, &request.pattern) {
        Ok(files) => Envelope::Success(FileListing {
            directory: request.directory.clone(),
            pattern: request.pattern.clone(),
            count: files.len(),
            files,
        }),
        Err(e) => Envelope::Error(
            ToolFailure::new(format!("File listing error: {}", e))
                .with("directory", json!(request.directory))
                .with("pattern", json!(request.pattern)),
        ),
    }
}

/// Expand `pattern` relative to `directory` and describe every match
fn collect_entries(directory: &Path, pattern: &str) -> Result<Vec<FileEntry>, ListingError> {
    if !is_contained(pattern) {
        return Err(ListingError::UnsupportedPattern(pattern.to_string()));
    }

    // Only the pattern may contain wildcards; the directory is taken literally
    let base = glob::Pattern::escape(&directory.to_string_lossy());
    let full_pattern = Path::new(&base).join(pattern);

    let mut files = Vec::new();
    for matched in glob::glob(&full_pattern.to_string_lossy())? {
        let path = match matched {
            Ok(path) => path,
            Err(e) if e.error().kind() == io::ErrorKind::PermissionDenied => {
                debug!("Skipping unreadable path {}: {}", e.path().display(), e.error());
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        if let Some(entry) = describe(path)? {
            files.push(entry);
        }
    }

    debug!("Matched {} entries for {}", files.len(), full_pattern.display());
    Ok(files)
}

/// Whether every match of `pattern` stays inside the listed directory
fn is_contained(pattern: &str) -> bool {
    let path = Path::new(pattern);
    !pattern.is_empty()
        && path
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

/// Build the entry for one matched path
///
/// Symlinks are followed; dangling links are neither files nor directories
/// and are skipped.
fn describe(path: PathBuf) -> Result<Option<FileEntry>, ListingError> {
    let metadata = match fs::metadata(&path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let display_path = path.to_string_lossy().into_owned();

    if metadata.is_file() {
        let modified: DateTime<Local> = metadata.modified()?.into();
        Ok(Some(FileEntry {
            name,
            path: display_path,
            size: Some(metadata.len()),
            modified: Some(modified.to_rfc3339()),
            is_file: true,
        }))
    } else if metadata.is_dir() {
        Ok(Some(FileEntry {
            name,
            path: display_path,
            size: None,
            modified: None,
            is_file: false,
        }))
    } else {
        Ok(None)
    }
}
