pub mod format;
pub mod table;

pub use format::{format_signed, Currency};
pub use table::Table;

/// Fresh, empty directory under the system temp dir for chart output in
/// tests. Removed again when the guard is dropped.
#[cfg(test)]
pub struct ScratchDir(std::path::PathBuf);

#[cfg(test)]
impl ScratchDir {
    pub fn path(&self) -> &std::path::Path {
        &self.0
    }
}

#[cfg(test)]
impl std::ops::Deref for ScratchDir {
    type Target = std::path::Path;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
impl AsRef<std::path::Path> for ScratchDir {
    fn as_ref(&self) -> &std::path::Path {
        &self.0
    }
}

#[cfg(test)]
impl From<&ScratchDir> for std::path::PathBuf {
    fn from(dir: &ScratchDir) -> Self {
        dir.0.clone()
    }
}

#[cfg(test)]
impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.0);
    }
}

#[cfg(test)]
pub fn scratch_dir(name: &str) -> ScratchDir {
    let dir = std::env::temp_dir().join(format!("tickerboard-{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    ScratchDir(dir)
}
