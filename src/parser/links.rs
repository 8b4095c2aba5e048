//! Link rewriting for the combined page
//!
//! ADRs link to each other by relative path (`0002-use-postgres.md`,
//! `../adr/0002-use-postgres.md`). Once every record sits on one page those
//! paths no longer resolve, so they are turned into `#<ref>` anchors.

use url::Url;

use crate::domain::normalize_ref;

/// Base that scheme-relative and path-relative targets are resolved against
const RESOLVE_BASE: &str = "file:///";

/// Rewrites a link target in place.
///
/// Empty targets and targets with a network host are left alone. Anything
/// else becomes `#` followed by the normalized basename of its path, with
/// any query or fragment dropped first. A target that is only a fragment
/// is normalized whole. The anchor is not checked against the known refs.
pub fn rewrite_link_target(target: &mut String) {
    if target.is_empty() || has_host(target) {
        return;
    }

    let path = match target.split(['#', '?']).next() {
        Some(path) if !path.is_empty() => path,
        _ => target.as_str(),
    };
    let anchor = normalize_ref(path);
    *target = format!("#{}", anchor);
}

/// Returns true if the target names a network host.
///
/// Relative targets are resolved against a hostless `file:///` base, so
/// only `scheme://host` and `//host` forms report a host.
fn has_host(target: &str) -> bool {
    let Ok(base) = Url::parse(RESOLVE_BASE) else {
        return false;
    };

    Url::options()
        .base_url(Some(&base))
        .parse(target)
        .is_ok_and(|url| url.host().is_some())
}
