//! Repository clone-URL computation
//!
//! Gradeable subdirectories are templates: they may be absolute paths, full
//! URLs, or fragments relative to the configured VCS base, and may carry
//! `{$gradeable_id}`, `{$user_id}` and `{$team_id}` tokens filled in per
//! viewer. Server-filesystem paths under `<submitty_path>/vcs` are rewritten
//! to the public VCS URL so the emitted clone command works off-server.

use sub_core::config::CourseConfig;
use sub_core::paths::join_paths;
use sub_models::Gradeable;

/// Named substitution fields for a repository URL template
#[derive(Debug, Clone, Copy)]
pub struct RepoUrlFields<'a> {
    pub gradeable_id: &'a str,
    pub user_id: &'a str,
    pub team_id: &'a str,
}

/// Compute the clone URL for a gradeable's repository as seen by one viewer.
pub fn repository_url(
    config: &CourseConfig,
    gradeable: &Gradeable,
    fields: RepoUrlFields<'_>,
) -> String {
    let subdirectory = gradeable.subdirectory.as_str();

    // Absolute paths and full URLs are taken verbatim; anything else hangs
    // off the configured base, joined as a URL or a path to match the base.
    let vcs_path = if subdirectory.contains("://") || subdirectory.starts_with('/') {
        subdirectory.to_string()
    } else if config.vcs_base_url.contains("://") {
        format!(
            "{}/{}",
            config.vcs_base_url.trim_end_matches('/'),
            subdirectory
        )
    } else {
        join_paths(&[&config.vcs_base_url, subdirectory])
    };

    let internal_prefix = join_paths(&[&config.submitty_path, "vcs"]);
    let repo = vcs_path
        .replace("{$gradeable_id}", fields.gradeable_id)
        .replace("{$user_id}", fields.user_id)
        .replace(&internal_prefix, &config.vcs_url)
        .replace("{$team_id}", fields.team_id);

    tracing::debug!(gradeable = %gradeable.id, %repo, "computed repository url");
    repo
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELDS: RepoUrlFields<'static> = RepoUrlFields {
        gradeable_id: "hw01",
        user_id: "smithj",
        team_id: "t42",
    };

    fn config() -> CourseConfig {
        CourseConfig {
            vcs_base_url: "https://git.example.com".to_string(),
            submitty_path: "/var/local/submit".to_string(),
            vcs_url: "https://vcs.example.com/course".to_string(),
            ..CourseConfig::default()
        }
    }

    fn repo_gradeable(subdirectory: &str) -> Gradeable {
        Gradeable::new("hw01", "Homework 1").with_repository(subdirectory)
    }

    #[test]
    fn test_absolute_subdirectory_used_verbatim() {
        let url = repository_url(&config(), &repo_gradeable("/abs/path"), FIELDS);
        assert_eq!(url, "/abs/path");
    }

    #[test]
    fn test_url_subdirectory_used_verbatim() {
        let url = repository_url(
            &config(),
            &repo_gradeable("https://github.com/example/repo"),
            FIELDS,
        );
        assert_eq!(url, "https://github.com/example/repo");
    }

    #[test]
    fn test_relative_subdirectory_joined_to_url_base() {
        let url = repository_url(&config(), &repo_gradeable("hw01/team"), FIELDS);
        assert_eq!(url, "https://git.example.com/hw01/team");
    }

    #[test]
    fn test_relative_subdirectory_joined_to_path_base() {
        let mut config = config();
        config.vcs_base_url = "/var/local/submit/vcs/".to_string();
        let url = repository_url(&config, &repo_gradeable("hw01"), FIELDS);
        // Joined as a path, then rewritten onto the public VCS URL.
        assert_eq!(url, "https://vcs.example.com/course/hw01");
    }

    #[test]
    fn test_placeholders_substituted() {
        let url = repository_url(
            &config(),
            &repo_gradeable("{$gradeable_id}/{$user_id}/{$team_id}"),
            FIELDS,
        );
        assert_eq!(url, "https://git.example.com/hw01/smithj/t42");
    }
}
