//! System abstraction for filesystem operations
//!
//! This module provides a trait-based abstraction over the two filesystem
//! operations a minify run performs, enabling testing and dry-run mode.

use crate::error::{Error, Result};
use shrink_core::path::AbsPath;
use std::fs;
use std::sync::Mutex;

/// Abstraction over filesystem operations
///
/// Implementations must be shareable across worker threads.
/// - `RealSystem`: Actual filesystem operations
/// - `DryRunSystem`: Reads for real, records writes without executing them
pub trait System: Send + Sync {
    /// Read a file's contents
    fn read_file(&self, path: &AbsPath) -> Result<Vec<u8>>;

    /// Replace a file's contents
    fn write_file(&self, path: &AbsPath, content: &[u8]) -> Result<()>;
}

/// Real filesystem implementation
pub struct RealSystem;

impl System for RealSystem {
    fn read_file(&self, path: &AbsPath) -> Result<Vec<u8>> {
        fs::read(path.as_path()).map_err(|e| Error::FileRead {
            path: path.clone(),
            source: e,
        })
    }

    fn write_file(&self, path: &AbsPath, content: &[u8]) -> Result<()> {
        // Truncate and rewrite in place; permissions of the existing file are kept
        fs::write(path.as_path(), content).map_err(|e| Error::FileWrite {
            path: path.clone(),
            source: e,
        })
    }
}

/// Dry-run system that records writes without executing them
#[derive(Debug, Default)]
pub struct DryRunSystem {
    operations: Mutex<Vec<Operation>>,
}

/// A write that would be performed on the filesystem
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Write a file
    WriteFile {
        /// Target file
        path: AbsPath,
        /// Bytes that would be written
        size: usize,
    },
}

impl DryRunSystem {
    /// Create a new dry-run system
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the list of operations that would be performed
    pub fn operations(&self) -> Vec<Operation> {
        self.operations
            .lock()
            .map(|ops| ops.clone())
            .unwrap_or_default()
    }

    fn record(&self, op: Operation) {
        if let Ok(mut ops) = self.operations.lock() {
            ops.push(op);
        }
    }
}

impl System for DryRunSystem {
    fn read_file(&self, path: &AbsPath) -> Result<Vec<u8>> {
        RealSystem.read_file(path)
    }

    fn write_file(&self, path: &AbsPath, content: &[u8]) -> Result<()> {
        self.record(Operation::WriteFile {
            path: path.clone(),
            size: content.len(),
        });
        Ok(())
    }
}
