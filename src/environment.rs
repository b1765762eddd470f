use crate::consts::cli_consts::{DASHBOARD_SUMMARY_PATH, LOCAL_API_URL, LOGOUT_PATH};
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// The backend the dashboard talks to.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// Backend running locally in development mode.
    #[default]
    Local,
    /// Any other deployment, addressed by its base URL.
    Custom { api_url: String },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid API URL '{0}': expected \"local\" or an http(s):// URL")]
pub struct InvalidEnvironment(pub String);

impl Environment {
    /// Returns the base URL of the backend, without a trailing slash.
    pub fn api_url(&self) -> String {
        match self {
            Environment::Local => LOCAL_API_URL.to_string(),
            Environment::Custom { api_url } => api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Joins a path onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url(), path.trim_start_matches('/'))
    }

    pub fn dashboard_summary_url(&self) -> String {
        self.endpoint(DASHBOARD_SUMMARY_PATH)
    }

    /// Where the "Log out" action sends the user.
    pub fn logout_url(&self) -> String {
        self.endpoint(LOGOUT_PATH)
    }

    /// Picks the first non-blank source: command-line flag, environment
    /// variable, config file. Falls back to [`Environment::Local`].
    pub fn resolve(
        flag: Option<&str>,
        env_var: Option<&str>,
        config: Option<&str>,
    ) -> Result<Self, InvalidEnvironment> {
        [flag, env_var, config]
            .into_iter()
            .flatten()
            .find(|value| !value.trim().is_empty())
            .map_or(Ok(Environment::Local), |value| value.parse())
    }
}

impl FromStr for Environment {
    type Err = InvalidEnvironment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("local") {
            return Ok(Environment::Local);
        }
        let lower = trimmed.to_lowercase();
        let has_host = ["http://", "https://"]
            .iter()
            .any(|scheme| lower.starts_with(scheme) && lower.len() > scheme.len());
        if has_host {
            Ok(Environment::Custom {
                api_url: trimmed.trim_end_matches('/').to_string(),
            })
        } else {
            Err(InvalidEnvironment(s.to_string()))
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Custom { api_url } => write!(f, "{}", api_url),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.api_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_local_case_insensitively() {
        assert_eq!("LOCAL".parse::<Environment>(), Ok(Environment::Local));
        assert_eq!(" local ".parse::<Environment>(), Ok(Environment::Local));
    }

    #[test]
    fn parses_urls_and_strips_trailing_slash() {
        let env: Environment = "https://grades.example.edu/".parse().unwrap();
        assert_eq!(
            env,
            Environment::Custom {
                api_url: "https://grades.example.edu".to_string()
            }
        );
        assert_eq!(
            env.dashboard_summary_url(),
            "https://grades.example.edu/api/dashboard"
        );
        assert_eq!(env.logout_url(), "https://grades.example.edu/logout");
    }

    #[test]
    fn rejects_values_without_scheme_or_host() {
        assert!("grades.example.edu".parse::<Environment>().is_err());
        assert!("http://".parse::<Environment>().is_err());
        assert!("ftp://grades".parse::<Environment>().is_err());
    }

    #[test]
    fn resolve_prefers_flag_then_env_then_config() {
        let flag = Environment::resolve(
            Some("http://flag:1"),
            Some("http://env:2"),
            Some("http://config:3"),
        );
        assert_eq!(flag.unwrap().api_url(), "http://flag:1");

        let env = Environment::resolve(None, Some("http://env:2"), Some("http://config:3"));
        assert_eq!(env.unwrap().api_url(), "http://env:2");

        let config = Environment::resolve(None, Some("  "), Some("http://config:3"));
        assert_eq!(config.unwrap().api_url(), "http://config:3");

        assert_eq!(Environment::resolve(None, None, None), Ok(Environment::Local));
    }

    #[test]
    fn resolve_reports_invalid_winner() {
        let err = Environment::resolve(Some("not a url"), None, Some("http://ok")).unwrap_err();
        assert_eq!(err, InvalidEnvironment("not a url".to_string()));
    }

    #[test]
    fn local_points_at_development_server() {
        assert_eq!(
            Environment::Local.dashboard_summary_url(),
            "http://localhost:5000/api/dashboard"
        );
    }
}
