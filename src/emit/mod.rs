use anyhow::{anyhow, Result};
use fs_err as fs;
use std::path::{Component, Path, PathBuf};
use tempfile::NamedTempFile;

use crate::scaffold::FileMapping;

#[derive(Debug, Clone)]
pub struct EmitSummary {
    pub created: usize,
    pub bytes_written: u64,
    pub paths: Vec<PathBuf>,
}

/// True when `path` stays beneath the directory it is joined to: non-empty,
/// relative, and built from plain segments only. Remote backends supply
/// mapping keys, so `..` and absolute paths must not reach `Path::join`.
fn is_normal_relative(path: &str) -> bool {
    !path.is_empty()
        && Path::new(path)
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
}

/// Write every entry of the mapping under `root`, creating parent
/// directories as needed. Keys are checked up front so a bad key fails the
/// whole write before any file lands. Writes go through a temp file and
/// persist so a half-written file never lands at its final path.
pub fn write_mapping(root: &Path, files: &FileMapping) -> Result<EmitSummary> {
    let mut sum = EmitSummary { created: 0, bytes_written: 0, paths: Vec::new() };

    for rel in files.keys() {
        if !is_normal_relative(rel) {
            return Err(anyhow!("refusing to write outside the output directory: {rel}"));
        }
    }

    fs::create_dir_all(root)?;
    for (rel, content) in files {
        let abs = root.join(rel);
        if let Some(parent) = abs.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp = NamedTempFile::new_in(abs.parent().unwrap_or(root))?;
        fs::write(tmp.path(), content)?;
        tmp.persist(&abs)?;

        sum.created += 1;
        sum.bytes_written += content.len() as u64;
        sum.paths.push(abs);
    }

    Ok(sum)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_nested_paths_and_reports_totals() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut files = FileMapping::new();
        files.insert("package.json".into(), "{}".into());
        files.insert("app/root.jsx".into(), "export default function App() {}".into());
        files.insert("components/PolarisProvider.jsx".into(), "// provider".into());

        let sum = write_mapping(dir.path(), &files).expect("writes");
        assert_eq!(sum.created, 3);
        assert_eq!(
            sum.bytes_written,
            files.values().map(|c| c.len() as u64).sum::<u64>()
        );

        let root = fs::read_to_string(dir.path().join("app/root.jsx")).expect("reads back");
        assert_eq!(root, "export default function App() {}");
    }

    #[test]
    fn parent_escape_keys_are_rejected_before_writing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let out = dir.path().join("out");
        let mut files = FileMapping::new();
        files.insert("good.txt".into(), "ok".into());
        files.insert("../escaped.txt".into(), "not ok".into());

        let err = write_mapping(&out, &files).unwrap_err();
        assert!(err.to_string().contains("../escaped.txt"));
        // Nothing may land anywhere, inside or outside the root.
        assert!(!dir.path().join("escaped.txt").exists());
        assert!(!out.join("good.txt").exists());
    }

    #[test]
    fn absolute_and_empty_keys_are_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        for key in ["/tmp/escaped.txt", "", "a/../../b.txt"] {
            let mut files = FileMapping::new();
            files.insert(key.into(), "x".into());
            assert!(write_mapping(dir.path(), &files).is_err(), "key {key:?} must fail");
        }
    }

    #[test]
    fn rewrites_existing_files_in_place() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut files = FileMapping::new();
        files.insert("README.md".into(), "first".into());
        write_mapping(dir.path(), &files).expect("first write");

        files.insert("README.md".into(), "second".into());
        write_mapping(dir.path(), &files).expect("second write");
        let text = fs::read_to_string(dir.path().join("README.md")).expect("reads");
        assert_eq!(text, "second");
    }
}
