//! Provider special cases: host aliases and path-layout rewrites.
//!
//! The set of hosting providers needing special handling is small and
//! closed, so both cases are plain lookup tables rather than anything
//! pluggable:
//!
//! - short host aliases (`github:owner/repo`) expand to the provider's
//!   canonical domain;
//! - Azure DevOps separates project path from repository name with a
//!   literal `_git` path segment, which is dropped from the canonical name.
//!
//! GitHub, GitLab, and Bitbucket style hierarchies, including arbitrarily
//! deep GitLab subgroups, need no rewriting and pass through unchanged.

/// Short alias tokens usable in place of a host, and their canonical domains.
const HOST_ALIASES: &[(&str, &str)] = &[
    ("github", "github.com"),
    ("gitlab", "gitlab.com"),
    ("bitbucket", "bitbucket.org"),
];

/// Azure DevOps marker segment between project path and repository name.
const AZURE_DEVOPS_MARKER: &str = "_git";

/// Expands a bare host alias to its canonical domain.
///
/// Unknown hosts pass through unchanged; the alias table is exact-match
/// only, so `github.com` is never re-expanded.
pub(crate) fn expand_host_alias(host: &str) -> &str {
    HOST_ALIASES
        .iter()
        .find(|(alias, _)| *alias == host)
        .map_or(host, |(_, canonical)| canonical)
}

/// Removes provider marker segments from a path, preserving the order of
/// the surrounding segments.
pub(crate) fn strip_path_markers(segments: Vec<String>) -> Vec<String> {
    segments
        .into_iter()
        .filter(|segment| segment != AZURE_DEVOPS_MARKER)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_known_aliases() {
        assert_eq!(expand_host_alias("github"), "github.com");
        assert_eq!(expand_host_alias("gitlab"), "gitlab.com");
        assert_eq!(expand_host_alias("bitbucket"), "bitbucket.org");
    }

    #[test]
    fn test_unknown_host_passes_through() {
        assert_eq!(expand_host_alias("github.com"), "github.com");
        assert_eq!(expand_host_alias("my-host.internal"), "my-host.internal");
    }

    #[test]
    fn test_strip_azure_marker_preserves_order() {
        let segments = vec![
            "organization".to_string(),
            "project".to_string(),
            "_git".to_string(),
            "repository".to_string(),
        ];
        assert_eq!(
            strip_path_markers(segments),
            vec!["organization", "project", "repository"]
        );
    }

    #[test]
    fn test_strip_leaves_plain_paths_alone() {
        let segments = vec!["sourcegraph".to_string(), "ui".to_string(), "cody".to_string()];
        assert_eq!(strip_path_markers(segments), vec!["sourcegraph", "ui", "cody"]);
    }
}
