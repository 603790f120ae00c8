use std::{
    io,
    path::{Path, PathBuf},
    time::SystemTime,
};

/// Final component of a client-supplied file name, splitting on `/` and on
/// backslashes. `None` when nothing usable is left (`""`, `"."`, `".."`,
/// `"dir/"`).
pub fn client_file_name(name: &str) -> Option<&str> {
    name.rsplit(['/', '\\'])
        .next()
        .map(str::trim)
        .filter(|base| !base.is_empty() && *base != "." && *base != "..")
}

/// A flat working directory for files that only live for one request.
///
/// Names are reduced to their final path component so callers cannot write
/// or read outside the root.
#[derive(Debug, Clone)]
pub struct ScratchDir {
    root: PathBuf,
}

#[derive(Debug, Clone)]
pub struct ScratchEntry {
    pub name: String,
    pub path: PathBuf,
    pub size: u64,
    pub created: SystemTime,
}

impl ScratchDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub async fn ensure(&self) -> io::Result<()> {
        tokio::fs::create_dir_all(&self.root).await
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        let component = Path::new(name)
            .file_name()
            .map(|value| value.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        self.root.join(component)
    }

    pub async fn write(&self, name: &str, bytes: &[u8]) -> io::Result<PathBuf> {
        let path = self.path_for(name);
        tokio::fs::write(&path, bytes).await?;
        Ok(path)
    }

    /// Returns `false` when there was nothing to remove.
    pub async fn remove(&self, path: &Path) -> io::Result<bool> {
        match tokio::fs::remove_file(path).await {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Exact-name lookup; names containing path segments never match.
    pub async fn find(&self, name: &str) -> Option<PathBuf> {
        let candidate = self.path_for(name);
        if candidate.file_name().map(|value| value != name).unwrap_or(true) {
            return None;
        }
        match tokio::fs::metadata(&candidate).await {
            Ok(metadata) if metadata.is_file() => Some(candidate),
            _ => None,
        }
    }

    pub async fn list_prefixed(&self, prefix: &str) -> io::Result<Vec<ScratchEntry>> {
        let mut entries = Vec::new();
        let mut dir = tokio::fs::read_dir(&self.root).await?;
        while let Some(entry) = dir.next_entry().await? {
            let name = entry.file_name().to_string_lossy().into_owned();
            if !name.starts_with(prefix) {
                continue;
            }
            let metadata = entry.metadata().await?;
            if !metadata.is_file() {
                continue;
            }
            let created = metadata
                .created()
                .or_else(|_| metadata.modified())
                .unwrap_or(SystemTime::UNIX_EPOCH);
            entries.push(ScratchEntry {
                name,
                path: entry.path(),
                size: metadata.len(),
                created,
            });
        }
        entries.sort_by(|left, right| left.name.cmp(&right.name));
        Ok(entries)
    }
}
