//! File storage interface
//!
//! Files live under a per-user prefix, `users/{user_id}/{folder}`, in the
//! hosted bucket. This module provides the path and MIME helpers plus the
//! [`FileStorage`] trait a provider client implements.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Fallback MIME type for unknown extensions
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    /// No file at the given path
    #[error("File not found: {0}")]
    NotFound(String),

    /// File name is empty or contains a path separator
    #[error("Invalid file name: {0:?}")]
    InvalidFileName(String),

    /// Folder name is not one of the known folders
    #[error("Unknown storage folder: {0}")]
    UnknownFolder(String),

    /// Caller may not touch this path
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Provider could not be reached
    #[error("Network error: {0}")]
    Network(String),

    /// Any other provider failure
    #[error("Storage provider error: {0}")]
    Provider(String),
}

/// Result type for storage operations
pub type Result<T> = std::result::Result<T, StorageError>;

/// Top-level folders inside a user's prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageFolder {
    /// Scanned and uploaded documents
    Documents,
    /// Invoice PDFs
    Invoices,
    /// Estimate PDFs
    Estimates,
    /// Contracts
    Contracts,
    /// Profile images
    Profiles,
}

impl StorageFolder {
    /// Every folder
    pub const ALL: [StorageFolder; 5] = [
        StorageFolder::Documents,
        StorageFolder::Invoices,
        StorageFolder::Estimates,
        StorageFolder::Contracts,
        StorageFolder::Profiles,
    ];

    /// Folder name in the bucket
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageFolder::Documents => "documents",
            StorageFolder::Invoices => "invoices",
            StorageFolder::Estimates => "estimates",
            StorageFolder::Contracts => "contracts",
            StorageFolder::Profiles => "profiles",
        }
    }
}

impl fmt::Display for StorageFolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StorageFolder {
    type Err = StorageError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        StorageFolder::ALL
            .into_iter()
            .find(|folder| folder.as_str() == s)
            .ok_or_else(|| StorageError::UnknownFolder(s.to_string()))
    }
}

/// Prefix for a user's folder: `users/{user_id}/{folder}`
pub fn user_storage_path(user_id: &str, folder: StorageFolder) -> String {
    format!("users/{}/{}", user_id, folder)
}

/// Lowercased text after the last dot, or empty when there is none
pub fn file_extension(file_name: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((_, ext)) => ext.to_lowercase(),
        None => String::new(),
    }
}

/// MIME type for an extension (case-insensitive)
pub fn mime_type_for(extension: &str) -> &'static str {
    match extension.to_lowercase().as_str() {
        "pdf" => "application/pdf",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "xls" => "application/vnd.ms-excel",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "txt" => "text/plain",
        _ => DEFAULT_MIME_TYPE,
    }
}

/// Append `_{timestamp}` before the extension
pub fn unique_file_name(original: &str, timestamp_millis: u64) -> String {
    match original.rsplit_once('.') {
        Some((stem, ext)) => format!("{}_{}.{}", stem, timestamp_millis, ext),
        None => format!("{}_{}", original, timestamp_millis),
    }
}

/// Human-readable size with two decimals, e.g. `1.50 KB`
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
    if bytes == 0 {
        return "0 B".to_string();
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.2} {}", value, UNITS[unit])
}

/// Reject names that would escape the folder
pub fn validate_file_name(file_name: &str) -> Result<()> {
    if file_name.trim().is_empty()
        || file_name.contains('/')
        || file_name.contains('\\')
        || file_name == ".."
    {
        return Err(StorageError::InvalidFileName(file_name.to_string()));
    }
    Ok(())
}

/// Metadata for a stored file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredFile {
    /// File name inside the folder
    pub name: String,
    /// Full path in the bucket
    pub path: String,
    /// Size in bytes
    pub size: u64,
    /// MIME type
    pub content_type: String,
    /// Public URL, when the bucket exposes one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_url: Option<String>,
}

impl StoredFile {
    /// Human-readable size
    pub fn display_size(&self) -> String {
        format_file_size(self.size)
    }
}

/// Client for the hosted file bucket
///
/// Uploads overwrite an existing file with the same name.
#[async_trait]
pub trait FileStorage: Send + Sync {
    /// Store `bytes` as `file_name` and return its metadata
    async fn upload(
        &self,
        user_id: &str,
        folder: StorageFolder,
        file_name: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<StoredFile>;

    /// Fetch a file's contents
    async fn download(
        &self,
        user_id: &str,
        folder: StorageFolder,
        file_name: &str,
    ) -> Result<Vec<u8>>;

    /// List files in a folder
    async fn list(&self, user_id: &str, folder: StorageFolder) -> Result<Vec<StoredFile>>;

    /// Remove a file
    async fn delete(&self, user_id: &str, folder: StorageFolder, file_name: &str) -> Result<()>;
}
