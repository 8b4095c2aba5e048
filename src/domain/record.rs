//! ADR records and the project they belong to

use std::path::Path;

use serde::Serialize;

use super::status::AdrStatus;

/// Turns a file name or link target into a record ref.
///
/// Only the final extension of the basename is removed. The result is used
/// as an element id and in selectors, so `0001-use-markdown.md` must become
/// `0001-use-markdown` rather than keep its dot.
pub fn normalize_ref(name: &str) -> String {
    Path::new(name)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// An ADR that parsed successfully but has not yet been placed in a collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAdr {
    pub adr_ref: String,
    pub title: String,
    pub status: AdrStatus,
    pub body: String,
}

impl ParsedAdr {
    /// Assigns the record its position in the collection
    pub fn into_record(self, index: usize) -> AdrRecord {
        AdrRecord {
            index,
            adr_ref: self.adr_ref,
            title: self.title,
            status: self.status,
            body: self.body,
        }
    }
}

/// One architecture decision record as shown on the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdrRecord {
    /// Position among the successfully parsed files
    pub index: usize,

    /// Anchor id, the file name without extension
    #[serde(rename = "ref")]
    pub adr_ref: String,

    /// Text of the first top-level heading
    pub title: String,

    pub status: AdrStatus,

    /// Rendered HTML with ADR links pointing at in-page anchors
    #[serde(skip_serializing)]
    pub body: String,
}

/// Everything the page renderer needs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectConfig {
    pub project_title: String,
    pub records: Vec<AdrRecord>,
}

impl ProjectConfig {
    pub fn new(project_title: impl Into<String>) -> Self {
        Self {
            project_title: project_title.into(),
            records: Vec::new(),
        }
    }

    /// Appends a parsed ADR under the next free index
    pub fn push(&mut self, parsed: ParsedAdr) -> &AdrRecord {
        let index = self.records.len();
        self.records.push(parsed.into_record(index));
        &self.records[index]
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn parsed(adr_ref: &str) -> ParsedAdr {
        ParsedAdr {
            adr_ref: adr_ref.to_string(),
            title: format!("Title {}", adr_ref),
            status: AdrStatus::Unknown,
            body: String::new(),
        }
    }

    #[test]
    fn normalize_strips_final_extension() {
        assert_eq!(normalize_ref("0001-use-markdown.md"), "0001-use-markdown");
        assert_eq!(normalize_ref("a.b.c.md"), "a.b.c");
        assert_eq!(normalize_ref("README"), "README");
    }

    #[test]
    fn normalize_uses_basename() {
        assert_eq!(normalize_ref("../adr/0002-b.md"), "0002-b");
        assert_eq!(normalize_ref("doc/adr/0003-c.markdown"), "0003-c");
    }

    #[test]
    fn normalize_keeps_leading_dot() {
        assert_eq!(normalize_ref(".hidden"), ".hidden");
    }

    #[test]
    fn push_assigns_contiguous_indexes() {
        let mut project = ProjectConfig::new("demo");
        project.push(parsed("0001-a"));
        project.push(parsed("0003-c"));
        let third = project.push(parsed("0007-g"));
        assert_eq!(third.index, 2);

        let indexes: Vec<_> = project.records.iter().map(|r| r.index).collect();
        assert_eq!(indexes, vec![0, 1, 2]);
        assert_eq!(project.records[1].adr_ref, "0003-c");
    }

    #[test]
    fn record_serializes_without_body() {
        let mut adr = parsed("0001-a");
        adr.body = "<h1>Title</h1>".to_string();
        let json = serde_json::to_value(adr.into_record(0)).unwrap();
        assert_eq!(json["ref"], "0001-a");
        assert_eq!(json["status"], "unknown");
        assert_eq!(json["index"], 0);
        assert!(json.get("body").is_none());
    }

    proptest! {
        #[test]
        fn normalize_drops_only_last_extension(
            stem in "[a-z0-9-]{1,12}(\\.[a-z0-9]{1,4}){0,2}",
            ext in "[a-z]{1,8}",
        ) {
            prop_assert_eq!(normalize_ref(&format!("{}.{}", stem, ext)), stem);
        }
    }
}
