//! HTML page rendering
//!
//! One page per project. Each record is a `<details>` element whose `id` is
//! the record ref, so the `#ref` links produced by the parser land on it.
//! Record bodies are already HTML and are inserted unescaped; titles and the
//! project name are escaped by maud.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::domain::{AdrRecord, ProjectConfig};

const STYLE: &str = r#"
body { font-family: -apple-system, "Segoe UI", Helvetica, Arial, sans-serif; margin: 0; background: #f6f8fa; color: #24292f; }
main { max-width: 960px; margin: 0 auto; padding: 2rem 1rem; }
header h1 { margin-bottom: 0.25rem; }
header p { margin-top: 0; color: #57606a; }
details.adr { background: #fff; border: 1px solid #d0d7de; border-left-width: 6px; border-radius: 6px; margin: 0.5rem 0; }
details.adr > summary { cursor: pointer; padding: 0.75rem 1rem; display: flex; justify-content: space-between; gap: 1rem; }
details.adr[open] > summary { border-bottom: 1px solid #d0d7de; }
.adr-body { padding: 0 1.5rem 1rem; }
.badge { font-size: 0.75rem; text-transform: uppercase; padding: 0.15rem 0.5rem; border-radius: 1rem; color: #fff; align-self: center; }
.status-accepted { border-left-color: #2da44e; } .badge.status-accepted { background: #2da44e; }
.status-amended { border-left-color: #8c959f; } .badge.status-amended { background: #8c959f; }
.status-superceded { border-left-color: #8c959f; } .badge.status-superceded { background: #57606a; }
.status-pending { border-left-color: #bf8700; } .badge.status-pending { background: #bf8700; }
.status-rejected { border-left-color: #cf222e; } .badge.status-rejected { background: #cf222e; }
.status-unknown { border-left-color: #d0d7de; } .badge.status-unknown { background: #6e7781; }
.status-amended > summary, .status-superceded > summary { color: #57606a; }
.empty { color: #57606a; font-style: italic; }
"#;

// Opens the record named by the URL fragment, including after in-page link clicks.
const SCRIPT: &str = r#"
function openTarget() {
  var id = decodeURIComponent(window.location.hash.slice(1));
  if (!id) { return; }
  var target = document.getElementById(id);
  if (target && target.tagName === "DETAILS") {
    target.open = true;
    target.scrollIntoView();
  }
}
window.addEventListener("hashchange", openTarget);
openTarget();
"#;

/// Renders the whole page as a string
pub fn render_page(project: &ProjectConfig) -> String {
    page(project).into_string()
}

fn page(project: &ProjectConfig) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (project.project_title) " - Architecture Decision Records" }
                style { (PreEscaped(STYLE)) }
            }
            body {
                main {
                    header {
                        h1 { (project.project_title) }
                        p { "Architecture Decision Records" }
                    }
                    @if project.is_empty() {
                        p class="empty" { "No architecture decision records found." }
                    }
                    @for record in &project.records {
                        (record_entry(record))
                    }
                }
                script { (PreEscaped(SCRIPT)) }
            }
        }
    }
}

fn record_entry(record: &AdrRecord) -> Markup {
    let status = record.status.as_str();

    html! {
        details id=(record.adr_ref) class={ "adr status-" (status) } data-index=(record.index) {
            summary {
                span class="adr-title" { (record.title) }
                span class={ "badge status-" (status) } { (status) }
            }
            div class="adr-body" {
                (PreEscaped(record.body.as_str()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AdrStatus, ParsedAdr};

    fn project_with(records: &[(&str, &str, AdrStatus, &str)]) -> ProjectConfig {
        let mut project = ProjectConfig::new("payments");
        for (adr_ref, title, status, body) in records {
            project.push(ParsedAdr {
                adr_ref: adr_ref.to_string(),
                title: title.to_string(),
                status: *status,
                body: body.to_string(),
            });
        }
        project
    }

    #[test]
    fn empty_project_renders() {
        let html = render_page(&ProjectConfig::new("payments"));
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<h1>payments</h1>"));
        assert!(html.contains("No architecture decision records found."));
    }

    #[test]
    fn records_are_anchored_by_ref() {
        let project = project_with(&[
            ("0001-a", "Title A", AdrStatus::Accepted, "<p>a</p>"),
            ("0002-b", "Title B", AdrStatus::Unknown, "<p><a href=\"#0001-a\">see A</a></p>"),
        ]);
        let html = render_page(&project);

        assert!(html.contains("id=\"0001-a\""));
        assert!(html.contains("class=\"adr status-accepted\""));
        assert!(html.contains("data-index=\"1\""));
        assert!(html.contains("<a href=\"#0001-a\">see A</a>"));
        assert!(!html.contains("No architecture decision records found."));
        assert!(html.find("Title A").unwrap() < html.find("Title B").unwrap());
    }

    #[test]
    fn titles_are_escaped() {
        let project = project_with(&[("0001-a", "Use <iframe> & friends", AdrStatus::Pending, "")]);
        let html = render_page(&project);

        assert!(html.contains("Use &lt;iframe&gt; &amp; friends"));
        assert!(html.contains("badge status-pending"));
    }
}
