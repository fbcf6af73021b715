//! Atomic file output.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::Result;

/// Write `contents` to `path` through a temporary file in the same directory.
///
/// Readers never observe a half-written file: the target either keeps its
/// previous content or gets the new content in full.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    write_atomic_all(&[(path, contents)])
}

/// Write several files, renaming none of them into place until every one
/// has been staged.
///
/// A failure while staging (missing directory, full disk) leaves all
/// targets untouched.
pub fn write_atomic_all(files: &[(&Path, &str)]) -> Result<()> {
    let mut staged = Vec::with_capacity(files.len());
    for &(path, contents) in files {
        staged.push((path, stage(path, contents)?, contents.len()));
    }

    for (path, file, len) in staged {
        file.persist(path).map_err(|e| e.error)?;
        tracing::debug!("Wrote {} ({} bytes)", path.display(), len);
    }
    Ok(())
}

fn stage(path: &Path, contents: &str) -> Result<NamedTempFile> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn writes_new_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.xml");
        write_atomic(&path, "<table/>").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<table/>");
    }

    #[test]
    fn replaces_existing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.xml");
        fs::write(&path, "old").unwrap();
        write_atomic(&path, "new").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn leaves_no_temporary_files_behind() {
        let temp = TempDir::new().unwrap();
        write_atomic(&temp.path().join("a.txt"), "a").unwrap();
        let names: Vec<_> = fs::read_dir(temp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("a.txt")]);
    }

    #[test]
    fn write_all_touches_nothing_when_one_target_fails() {
        let temp = TempDir::new().unwrap();
        let good = temp.path().join("build.xml");
        let bad = temp.path().join("missing").join("test.xml");
        fs::write(&good, "old").unwrap();

        assert!(write_atomic_all(&[(good.as_path(), "new"), (bad.as_path(), "new")]).is_err());
        assert_eq!(fs::read_to_string(&good).unwrap(), "old");
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 1);
    }

    #[test]
    fn write_all_writes_every_file() {
        let temp = TempDir::new().unwrap();
        let a = temp.path().join("a.xml");
        let b = temp.path().join("b.xml");
        write_atomic_all(&[(a.as_path(), "A"), (b.as_path(), "B")]).unwrap();
        assert_eq!(fs::read_to_string(&a).unwrap(), "A");
        assert_eq!(fs::read_to_string(&b).unwrap(), "B");
    }

    #[test]
    fn missing_parent_directory_is_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing").join("out.xml");
        assert!(write_atomic(&path, "x").is_err());
    }
}
