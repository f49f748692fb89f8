/// Uploaded-image storage
///
/// Writes project gallery uploads into a fixed directory under the public
/// static root, keyed by a sanitized filename. A short content-hash prefix
/// keeps two uploads that share a name from silently overwriting each other.

use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

/// Disk-backed store for uploaded project images
#[derive(Debug, Clone)]
pub struct ImageStore {
    /// Upload directory, created at startup
    dir: PathBuf,
}

impl ImageStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Persist one uploaded blob, returning the stored filename
    ///
    /// Blobs with an empty client filename are skipped, not errors (a file
    /// input submitted without a selection arrives as an empty part). The
    /// client filename is reduced to a safe stem and extension before being
    /// used as a path component.
    pub fn save(&self, client_filename: &str, bytes: &[u8]) -> std::io::Result<Option<String>> {
        if client_filename.is_empty() {
            return Ok(None);
        }

        let stored = stored_filename(client_filename, bytes);
        let path = self.dir.join(&stored);
        std::fs::write(&path, bytes)?;

        tracing::debug!("Stored upload {} as {}", client_filename, stored);
        Ok(Some(stored))
    }

    /// Best-effort unlink of a stored file, used when a project is deleted
    ///
    /// A missing file is not an error; anything else is logged and swallowed
    /// since the database row is already gone.
    pub fn remove(&self, stored_filename: &str) {
        // Stored names are generated by us, but never join anything that
        // could climb out of the upload directory.
        if stored_filename.contains(['/', '\\']) || stored_filename.contains("..") {
            tracing::warn!("Refusing to remove suspicious filename: {}", stored_filename);
            return;
        }

        match std::fs::remove_file(self.dir.join(stored_filename)) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!("Failed to remove {}: {}", stored_filename, e),
        }
    }
}

/// Build the on-disk name: {hash8}-{sanitized stem}.{sanitized extension}
fn stored_filename(client_filename: &str, bytes: &[u8]) -> String {
    let digest = format!("{:x}", Sha256::digest(bytes));
    let prefix = &digest[..8];

    let stem = sanitize_stem(client_filename);
    match sanitize_extension(client_filename) {
        Some(ext) => format!("{prefix}-{stem}.{ext}"),
        None => format!("{prefix}-{stem}"),
    }
}

/// Reduce the client filename to a safe stem: no directory components, only
/// alphanumerics plus '-' and '_', bounded length
fn sanitize_stem(filename: &str) -> String {
    let stem = Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image");

    let cleaned: String = stem
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '-' || *c == '_')
        .take(50)
        .collect::<String>()
        .to_lowercase();

    if cleaned.is_empty() {
        "image".to_string()
    } else {
        cleaned
    }
}

/// Keep the extension only when it is plain alphanumeric
fn sanitize_extension(filename: &str) -> Option<String> {
    let ext = Path::new(filename).extension().and_then(|s| s.to_str())?;
    if ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(ext.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("novaverse-test-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn path_traversal_is_stripped() {
        let stored = stored_filename("../../etc/passwd", b"x");
        assert!(!stored.contains('/'));
        assert!(!stored.contains(".."));
        assert!(stored.ends_with("-passwd"));
    }

    #[test]
    fn unsafe_characters_are_dropped() {
        let stored = stored_filename("my photo (1)!.PNG", b"x");
        let name = stored.split_once('-').unwrap().1;
        assert_eq!(name, "myphoto1.png");
    }

    #[test]
    fn same_name_different_content_gets_distinct_names() {
        let a = stored_filename("a.png", b"first");
        let b = stored_filename("a.png", b"second");
        assert_ne!(a, b);
        assert!(a.ends_with("-a.png"));
        assert!(b.ends_with("-a.png"));
    }

    #[test]
    fn empty_filename_is_skipped() {
        let store = ImageStore::new(scratch_dir("empty"));
        assert_eq!(store.save("", b"data").unwrap(), None);
    }

    #[test]
    fn save_writes_and_remove_unlinks() {
        let dir = scratch_dir("roundtrip");
        let store = ImageStore::new(&dir);

        let stored = store.save("a.png", b"pixels").unwrap().unwrap();
        assert!(dir.join(&stored).is_file());

        store.remove(&stored);
        assert!(!dir.join(&stored).exists());

        // Removing again is harmless
        store.remove(&stored);
    }
}
