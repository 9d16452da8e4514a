// Scratch file allocation for downloaded resources
// NamedTempFile removes itself on drop, which covers error exit paths too

use std::io;

use tempfile::{Builder, NamedTempFile};

/// Suffix that marks our scratch files in the temp dir
pub const SCRATCH_SUFFIX: &str = ".urltitle";

/// Allocate a fresh scratch file in the system temp dir
pub fn scratch_file() -> io::Result<NamedTempFile> {
    Builder::new().suffix(SCRATCH_SUFFIX).tempfile()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removed_on_drop() {
        let file = scratch_file().unwrap();
        let path = file.path().to_path_buf();
        assert!(path.exists());
        drop(file);
        assert!(!path.exists());
    }

    #[test]
    fn test_suffix() {
        let file = scratch_file().unwrap();
        let name = file
            .path()
            .file_name()
            .unwrap()
            .to_string_lossy()
            .to_string();
        assert!(name.ends_with(SCRATCH_SUFFIX));
    }
}
