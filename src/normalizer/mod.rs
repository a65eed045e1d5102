//! Clone-URL to codebase-name normalization.
//!
//! A codebase name is the canonical `host[:port]/path/to/repo` identifier
//! for a repository, independent of the protocol or credentials used to
//! clone it. The same repository cloned as
//! `git@github.com:sourcegraph/sourcegraph.git`,
//! `ssh://git@github.com/sourcegraph/sourcegraph`, or
//! `https://github.com/sourcegraph/sourcegraph` normalizes to the single
//! name `github.com/sourcegraph/sourcegraph`, making it usable as a stable
//! identifier or cache key.
//!
//! ## Normalization Rules
//!
//! 1. **Scheme**: recognized transports (`ssh`, `git`, `http`, `https`)
//!    parse by URL rules; schemeless input must be scp-like shorthand or a
//!    known host alias. The scheme never appears in the output.
//! 2. **Credentials**: any `user[:pass]@` portion is dropped.
//! 3. **Port**: URL-syntax inputs normalize to their hostname, port
//!    discarded; scp-like shorthand keeps an explicit port. A port is
//!    never inferred or defaulted.
//! 4. **Suffix**: one trailing `.git` is stripped from the final segment.
//! 5. **Providers**: the Azure DevOps `_git` marker segment is removed;
//!    all other path hierarchies pass through with order preserved.
//!
//! Normalization is a pure function: no I/O, no state, identical input
//! always yields identical output.

mod parser;
mod providers;

use crate::error::InvalidUrlError;

const GIT_SUFFIX: &str = ".git";

/// Converts a git clone URL to its canonical codebase name.
///
/// Best-effort variant of [`codebase_name_or_error`]: any failure collapses
/// to `None`, for call sites that tolerate an unknown codebase.
///
/// # Examples
///
/// ```
/// use codebase_name::codebase_name;
///
/// assert_eq!(
///     codebase_name("git@github.com:sourcegraph/sourcegraph.git").as_deref(),
///     Some("github.com/sourcegraph/sourcegraph")
/// );
/// assert_eq!(codebase_name("github.com/foo/bar"), None);
/// ```
pub fn codebase_name(raw_url: &str) -> Option<String> {
    codebase_name_or_error(raw_url).ok()
}

/// Converts a git clone URL to its canonical codebase name.
///
/// # Errors
///
/// Returns [`InvalidUrlError`] when the input matches none of the
/// recognized git URL shapes, or lacks a host or path after extraction.
/// The error message carries the raw input for diagnostics.
///
/// # Examples
///
/// ```
/// use codebase_name::codebase_name_or_error;
///
/// let name = codebase_name_or_error("https://dev.azure.com/org/project/_git/repo")?;
/// assert_eq!(name, "dev.azure.com/org/project/repo");
/// # Ok::<(), codebase_name::InvalidUrlError>(())
/// ```
pub fn codebase_name_or_error(raw_url: &str) -> Result<String, InvalidUrlError> {
    let remote = parser::parse_remote(raw_url)?;

    let mut segments = providers::strip_path_markers(remote.segments);

    if let Some(last) = segments.last_mut() {
        if let Some(stripped) = last.strip_suffix(GIT_SUFFIX) {
            *last = stripped.to_string();
        }
    }
    segments.retain(|segment| !segment.is_empty());

    if segments.is_empty() {
        tracing::debug!(url = raw_url, "clone URL has no usable path segments");
        return Err(InvalidUrlError::new(raw_url));
    }

    let mut name = remote.host;
    if let Some(port) = remote.port {
        name.push(':');
        name.push_str(&port.to_string());
    }
    for segment in &segments {
        name.push('/');
        name.push_str(segment);
    }

    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_git_suffix_once() {
        assert_eq!(
            codebase_name("git@github.com:foo/bar.git.git").as_deref(),
            Some("github.com/foo/bar.git")
        );
    }

    #[test]
    fn test_keeps_dots_in_repo_name() {
        assert_eq!(
            codebase_name("git@github.com:philipp-spiess/philippspiess.com.git").as_deref(),
            Some("github.com/philipp-spiess/philippspiess.com")
        );
    }

    #[test]
    fn test_rejects_path_that_is_only_git_suffix() {
        assert!(codebase_name("git@github.com:.git").is_none());
    }

    #[test]
    fn test_error_variant_reports_raw_input() {
        let err = codebase_name_or_error("invalid").unwrap_err();
        assert!(err.to_string().contains("invalid"));
    }
}
