//! The hosts file store.
//!
//! Every operation reconstructs the file content from disk, computes the
//! complete new content in memory and only then writes it back. Nothing is
//! cached between operations; the file is the single source of truth.

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use focus_blocks::{parse_domains, rewrite};
use fs2::FileExt;

use crate::{Error, Result};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Debug, Clone, Copy)]
enum LockMode {
    Shared,
    Exclusive,
}

/// Advisory lock held on the store's file until dropped.
struct LockGuard<'a> {
    file: &'a File,
}

impl Drop for LockGuard<'_> {
    fn drop(&mut self) {
        let _ = FileExt::unlock(self.file);
    }
}

/// Open handle to a hosts file and the managed block inside it.
///
/// The handle is held for the lifetime of the store and released on drop.
/// Operations take an advisory lock for their duration, which keeps two
/// `focusmode` processes apart but does not stop editors that ignore locks.
#[derive(Debug)]
pub struct HostsStore {
    file: File,
    path: PathBuf,
}

impl HostsStore {
    /// Open (creating if missing) the hosts file at `path` for reading and writing.
    ///
    /// A newly created file is readable and writable by its owner only.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let mut options = OpenOptions::new();
        options.read(true).write(true).create(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let file = options.open(&path).map_err(|e| Error::io(&path, e))?;
        tracing::debug!(path = %path.display(), "Opened hosts file");

        Ok(Self { file, path })
    }

    /// Path the store was opened with.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Domains currently in the managed block, in file order.
    pub fn list(&self) -> Result<Vec<String>> {
        let _lock = self.lock(LockMode::Shared)?;
        let domains = parse_domains(&self.read_content()?);
        tracing::debug!(count = domains.len(), "Listed managed domains");
        Ok(domains)
    }

    /// Replace the entire managed block with `domains`.
    ///
    /// This never merges: callers wanting append semantics must fetch the
    /// current list with [`HostsStore::list`] and pass the combined list.
    pub fn replace<S: AsRef<str>>(&self, domains: &[S]) -> Result<()> {
        let _lock = self.lock(LockMode::Exclusive)?;
        let content = self.read_content()?;
        self.write_content(&rewrite(&content, domains))?;
        tracing::debug!(count = domains.len(), "Replaced managed block");
        Ok(())
    }

    /// Remove every occurrence of `domain` from the managed block.
    ///
    /// # Errors
    /// Returns `Error::EmptyBlacklist` when the block has no domains and
    /// `Error::DomainNotFound` when `domain` is absent. The file is left
    /// untouched in both cases.
    pub fn delete(&self, domain: &str) -> Result<()> {
        let _lock = self.lock(LockMode::Exclusive)?;
        let content = self.read_content()?;

        let current = parse_domains(&content);
        if current.is_empty() {
            return Err(Error::EmptyBlacklist);
        }

        let before = current.len();
        let remaining: Vec<String> = current.into_iter().filter(|d| d != domain).collect();
        if remaining.len() == before {
            return Err(Error::DomainNotFound {
                domain: domain.to_string(),
            });
        }

        self.write_content(&rewrite(&content, &remaining))?;
        tracing::debug!(
            domain,
            removed = before - remaining.len(),
            "Deleted domain from managed block"
        );
        Ok(())
    }

    /// Empty the managed block, leaving the two markers adjacent.
    pub fn clear(&self) -> Result<()> {
        let empty: [&str; 0] = [];
        self.replace(&empty)
    }

    /// Flush and release the file handle.
    ///
    /// Dropping the store also releases the handle; `close` additionally
    /// reports a failed flush.
    pub fn close(self) -> Result<()> {
        self.file.sync_all().map_err(|e| Error::io(&self.path, e))?;
        tracing::debug!(path = %self.path.display(), "Closed hosts file");
        Ok(())
    }

    fn lock(&self, mode: LockMode) -> Result<LockGuard<'_>> {
        let locked = match mode {
            LockMode::Shared => FileExt::lock_shared(&self.file),
            LockMode::Exclusive => FileExt::lock_exclusive(&self.file),
        };
        locked.map_err(|_| Error::LockFailed {
            path: self.path.clone(),
        })?;
        Ok(LockGuard { file: &self.file })
    }

    /// Read the whole file from the start, without a leading byte-order mark.
    fn read_content(&self) -> Result<String> {
        let mut file = &self.file;
        file.seek(SeekFrom::Start(0))
            .map_err(|e| Error::io(&self.path, e))?;

        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)
            .map_err(|e| Error::io(&self.path, e))?;

        let text = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes);
        std::str::from_utf8(text)
            .map(str::to_owned)
            .map_err(|source| Error::Decode {
                path: self.path.clone(),
                source,
            })
    }

    /// Overwrite the whole file with `content` and cut off anything after it.
    fn write_content(&self, content: &str) -> Result<()> {
        let mut file = &self.file;
        file.seek(SeekFrom::Start(0))
            .map_err(|e| Error::io(&self.path, e))?;
        file.write_all(content.as_bytes())
            .map_err(|e| Error::io(&self.path, e))?;
        file.set_len(content.len() as u64)
            .map_err(|e| Error::io(&self.path, e))?;
        file.sync_all().map_err(|e| Error::io(&self.path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_creates_missing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("hosts");

        let store = HostsStore::open(&path).unwrap();
        assert!(path.exists());
        assert_eq!(store.path(), path.as_path());
    }

    #[test]
    fn test_read_strips_bom() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("hosts");
        std::fs::write(&path, b"\xEF\xBB\xBF#focusmode:start\n127.0.0.1 a.com\n#focusmode:end\n")
            .unwrap();

        let store = HostsStore::open(&path).unwrap();
        assert_eq!(store.list().unwrap(), vec!["a.com"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_created_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let path = temp.path().join("hosts");
        HostsStore::open(&path).unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o077, 0);
    }
}
