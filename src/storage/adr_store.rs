//! ADR directory scanning
//!
//! ADRs live as `*.md` files directly inside one directory (`doc/adr/` by
//! convention). Files are parsed in sorted path order and numbered as they
//! succeed.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::domain::ProjectConfig;
use crate::parser::parse_adr_file;

/// Result of building a collection
#[derive(Debug, Clone, Default)]
pub struct BuildReport {
    pub project: ProjectConfig,

    /// Files that had no top-level heading, in the order they were met
    pub skipped: Vec<PathBuf>,
}

/// Read-only view of a directory of ADR files
pub struct AdrStore {
    dir: PathBuf,
}

impl AdrStore {
    /// Creates a store for the given directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the directory being scanned
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Lists candidate markdown files, sorted by path.
    ///
    /// Only regular files directly in the directory are returned; hidden
    /// files are ignored. A missing directory has no candidates.
    pub fn candidate_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        if !self.dir.is_dir() {
            return Ok(files);
        }

        for entry in fs::read_dir(&self.dir)
            .with_context(|| format!("Failed to read directory: {}", self.dir.display()))?
        {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            let hidden = path
                .file_name()
                .is_some_and(|name| name.to_string_lossy().starts_with('.'));

            if !hidden && path.extension().is_some_and(|e| e == "md") && path.is_file() {
                files.push(path);
            }
        }

        files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
        Ok(files)
    }

    /// Parses every candidate into a project.
    ///
    /// Files without a title are reported in [`BuildReport::skipped`] and do
    /// not consume an index. Read failures abort the build.
    pub fn build(&self, project_title: &str) -> Result<BuildReport> {
        let mut report = BuildReport {
            project: ProjectConfig::new(project_title),
            skipped: Vec::new(),
        };

        for path in self.candidate_files()? {
            match parse_adr_file(&path)? {
                Some(parsed) => {
                    report.project.push(parsed);
                }
                None => report.skipped.push(path),
            }
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AdrStatus;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn missing_directory_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = AdrStore::new(dir.path().join("doc").join("adr"));

        let report = store.build("demo").unwrap();
        assert!(report.project.is_empty());
        assert!(report.skipped.is_empty());
        assert_eq!(report.project.project_title, "demo");
    }

    #[test]
    fn empty_directory_is_empty() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "README.txt", "# Not markdown\n");

        let report = AdrStore::new(dir.path()).build("demo").unwrap();
        assert!(report.project.is_empty());
    }

    #[test]
    fn candidates_are_sorted_and_filtered() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "0002-b.md", "# B\n");
        write(dir.path(), "0010-j.md", "# J\n");
        write(dir.path(), "0001-a.md", "# A\n");
        write(dir.path(), ".draft.md", "# Draft\n");
        write(dir.path(), "notes.txt", "# Notes\n");
        fs::create_dir_all(dir.path().join("archive.md")).unwrap();
        fs::create_dir_all(dir.path().join("old")).unwrap();
        write(&dir.path().join("old"), "0000-old.md", "# Old\n");

        let names: Vec<_> = AdrStore::new(dir.path())
            .candidate_files()
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, vec!["0001-a.md", "0002-b.md", "0010-j.md"]);
    }

    #[test]
    fn unparseable_files_do_not_consume_indexes() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "0001-a.md", "# A\n");
        write(dir.path(), "0002-notes.md", "Just some notes.\n");
        write(dir.path(), "0003-c.md", "# C\n\n## Status\n\nRejected\n");
        write(dir.path(), "0004-template.md", "## Status\n\nAccepted\n");
        write(dir.path(), "0005-e.md", "# E\n");

        let report = AdrStore::new(dir.path()).build("demo").unwrap();

        let refs: Vec<_> = report.project.records.iter().map(|r| r.adr_ref.as_str()).collect();
        assert_eq!(refs, vec!["0001-a", "0003-c", "0005-e"]);

        let indexes: Vec<_> = report.project.records.iter().map(|r| r.index).collect();
        assert_eq!(indexes, vec![0, 1, 2]);

        let skipped: Vec<_> = report
            .skipped
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(skipped, vec!["0002-notes.md", "0004-template.md"]);
    }

    #[test]
    fn end_to_end_two_records() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "0001-a.md", "# Title A\n\n## Status\n\nAccepted\n");
        write(dir.path(), "0002-b.md", "# Title B\n\n[see A](0001-a.md)\n");

        let report = AdrStore::new(dir.path()).build("demo").unwrap();
        assert_eq!(report.project.records.len(), 2);

        let a = &report.project.records[0];
        assert_eq!(a.adr_ref, "0001-a");
        assert_eq!(a.title, "Title A");
        assert_eq!(a.status, AdrStatus::Accepted);

        let b = &report.project.records[1];
        assert_eq!(b.adr_ref, "0002-b");
        assert_eq!(b.index, 1);
        assert_eq!(b.status, AdrStatus::Unknown);
        assert!(b.body.contains("href=\"#0001-a\""));
    }

    #[test]
    fn read_failure_aborts_build() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "0001-a.md", "# A\n");
        fs::write(dir.path().join("0002-b.md"), [0xff, 0xfe, 0x00, 0x23]).unwrap();

        let err = AdrStore::new(dir.path()).build("demo").unwrap_err();
        assert!(format!("{:#}", err).contains("0002-b.md"));
    }
}
