//! HTML file discovery
//!
//! [`discover`] walks the root recursively and returns every file whose name
//! ends with `.html` (case-sensitive), including symlinks to files. Directories
//! and other files are never opened.

use crate::error::{Error, Result};
use shrink_core::path::{AbsPath, RelPath};
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// File name suffix that selects a file for minification
pub const HTML_SUFFIX: &str = ".html";

/// An HTML file found under the root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlFile {
    /// Absolute location on disk
    pub path: AbsPath,

    /// Location relative to the root
    pub rel_path: RelPath,
}

/// Whether a file name selects the file for minification
///
/// ```
/// use shrink_engine::entry::is_html_name;
/// use std::ffi::OsStr;
///
/// assert!(is_html_name(OsStr::new("index.html")));
/// assert!(!is_html_name(OsStr::new("INDEX.HTML")));
/// assert!(!is_html_name(OsStr::new("page.htm")));
/// ```
pub fn is_html_name(name: &std::ffi::OsStr) -> bool {
    name.as_encoded_bytes().ends_with(HTML_SUFFIX.as_bytes())
}

fn is_html_file(entry: &DirEntry) -> bool {
    if !is_html_name(entry.file_name()) {
        return false;
    }

    let file_type = entry.file_type();
    if file_type.is_symlink() {
        // Dangling links stay in so reading them reports the error
        return entry.path().metadata().map_or(true, |meta| meta.is_file());
    }
    file_type.is_file()
}

/// Enumerate HTML files under `root`
///
/// Order is depth-first with entries sorted by file name inside each
/// directory, so repeated runs visit files in the same sequence. Symlinked
/// directories are not descended into; symlinked files are returned under the
/// link's own path.
///
/// # Errors
///
/// Returns an error if:
/// - The root does not exist or cannot be accessed
/// - The root is not a directory
/// - A directory below the root cannot be read
pub fn discover(root: &Path) -> Result<Vec<HtmlFile>> {
    let root_abs = AbsPath::canonicalize(root).map_err(|e| match e {
        shrink_core::Error::Io(source) => Error::RootNotFound {
            path: root.to_path_buf(),
            source,
        },
        other => other.into(),
    })?;

    if !root_abs.as_path().is_dir() {
        return Err(Error::RootNotDirectory {
            path: root.to_path_buf(),
        });
    }

    let walker = WalkDir::new(root_abs.as_path())
        .follow_links(false)
        .sort_by_file_name();

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| Error::DirectoryRead {
            path: e
                .path()
                .map_or_else(|| root.to_path_buf(), Path::to_path_buf),
            source: e,
        })?;

        if !is_html_file(&entry) {
            continue;
        }

        let path = AbsPath::new(entry.into_path())?;
        let rel_path = path.strip_prefix(&root_abs)?;
        files.push(HtmlFile { path, rel_path });
    }

    tracing::debug!(root = %root.display(), count = files.len(), "Discovered HTML files");
    Ok(files)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn rel_paths(files: &[HtmlFile]) -> Vec<String> {
        files.iter().map(|f| f.rel_path.to_string()).collect()
    }

    #[test]
    fn test_discover_selects_html_only() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::write(root.join("index.html"), "<p>a</p>").unwrap();
        fs::write(root.join("notes.txt"), "text").unwrap();
        fs::write(root.join("old.htm"), "<p>b</p>").unwrap();
        fs::write(root.join("UPPER.HTML"), "<p>c</p>").unwrap();
        fs::write(root.join("index.html.bak"), "<p>d</p>").unwrap();

        let files = discover(root).unwrap();
        assert_eq!(rel_paths(&files), vec!["index.html"]);
    }

    #[test]
    fn test_discover_recurses_without_depth_limit() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        let deep = root.join("a/b/c/d/e");
        fs::create_dir_all(&deep).unwrap();
        fs::write(root.join("top.html"), "").unwrap();
        fs::write(deep.join("deep.html"), "").unwrap();

        let files = discover(root).unwrap();
        assert_eq!(files.len(), 2);
        let depths: Vec<_> = files.iter().map(|f| f.rel_path.depth()).collect();
        assert!(depths.contains(&0));
        assert!(depths.contains(&5));
    }

    #[test]
    fn test_discover_skips_directories_named_html() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::create_dir(root.join("pages.html")).unwrap();
        fs::write(root.join("pages.html").join("inner.html"), "").unwrap();

        let files = discover(root).unwrap();
        assert_eq!(rel_paths(&files), vec!["pages.html/inner.html"]);
    }

    #[test]
    fn test_discover_is_sorted() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        for name in ["z.html", "a.html", "m.html"] {
            fs::write(root.join(name), "").unwrap();
        }

        let first = discover(root).unwrap();
        let second = discover(root).unwrap();
        assert_eq!(first, second);
        assert_eq!(rel_paths(&first), vec!["a.html", "m.html", "z.html"]);
    }

    #[test]
    fn test_discover_missing_root() {
        let temp = TempDir::new().unwrap();
        let err = discover(&temp.path().join("data")).unwrap_err();
        assert!(matches!(err, Error::RootNotFound { .. }));
    }

    #[test]
    fn test_discover_root_is_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("index.html");
        fs::write(&file, "").unwrap();

        let err = discover(&file).unwrap_err();
        assert!(matches!(err, Error::RootNotDirectory { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_discover_includes_linked_files() {
        use std::os::unix::fs::symlink;

        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::create_dir(root.join("real")).unwrap();
        fs::write(root.join("real/page.src"), "<p>a</p>").unwrap();
        fs::write(root.join("real/inner.html"), "<p>b</p>").unwrap();
        symlink(root.join("real/page.src"), root.join("link.html")).unwrap();
        symlink(root.join("real"), root.join("linked-dir.html")).unwrap();
        symlink(root.join("real/page.src"), root.join("link.txt")).unwrap();

        let files = discover(root).unwrap();
        assert_eq!(rel_paths(&files), vec!["link.html", "real/inner.html"]);
        assert_eq!(files[0].path.as_path(), root.canonicalize().unwrap().join("link.html"));
    }

    #[cfg(unix)]
    #[test]
    fn test_discover_keeps_dangling_link() {
        use std::os::unix::fs::symlink;

        let temp = TempDir::new().unwrap();
        symlink(temp.path().join("gone"), temp.path().join("broken.html")).unwrap();

        let files = discover(temp.path()).unwrap();
        assert_eq!(rel_paths(&files), vec!["broken.html"]);
    }

    #[test]
    fn test_discover_empty_root() {
        let temp = TempDir::new().unwrap();
        assert!(discover(temp.path()).unwrap().is_empty());
    }
}
