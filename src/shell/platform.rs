//! Platform detection.

/// Environment variables set by common CI services.
const CI_VARIABLES: &[&str] = &[
    "CI",
    "JENKINS_URL",
    "BUILD_ID",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "TEAMCITY_VERSION",
];

/// Check if running under a CI service.
pub fn is_ci() -> bool {
    is_ci_with_env(|key| std::env::var(key))
}

/// Check for CI using a custom env var lookup (for tests).
pub fn is_ci_with_env<F>(env_fn: F) -> bool
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    CI_VARIABLES.iter().any(|var| env_fn(var).is_ok())
}
