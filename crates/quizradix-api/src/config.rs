/// Location of the backend REST API. The base URL is baked in at build time
/// via `QUIZRADIX_API_BASE` and defaults to the local development backend.
/// Values are public; never put secrets here.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub base_url: String,
}

const DEFAULT_API_BASE: &str = "http://localhost:4000";

impl ApiConfig {
    pub fn load() -> Self {
        let base = option_env!("QUIZRADIX_API_BASE").unwrap_or(DEFAULT_API_BASE);
        Self {
            base_url: base.trim().to_string(),
        }
    }

    /// Joins the base URL and an endpoint path, tolerating stray slashes on
    /// either side.
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim().trim_start_matches('/');

        if base.is_empty() {
            format!("/{path}")
        } else {
            format!("{base}/{path}")
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::load()
    }
}

#[cfg(test)]
mod tests {
    use super::ApiConfig;

    #[test]
    fn endpoint_joins_base_and_path() {
        let config = ApiConfig {
            base_url: "http://localhost:4000".into(),
        };
        assert_eq!(
            config.endpoint("api/auth/login"),
            "http://localhost:4000/api/auth/login"
        );
    }

    #[test]
    fn endpoint_tolerates_stray_slashes() {
        let config = ApiConfig {
            base_url: "http://localhost:4000/".into(),
        };
        assert_eq!(
            config.endpoint("/api/otp/sendotp"),
            "http://localhost:4000/api/otp/sendotp"
        );
    }

    #[test]
    fn endpoint_with_empty_base_stays_relative() {
        let config = ApiConfig {
            base_url: String::new(),
        };
        assert_eq!(config.endpoint("api/auth/register"), "/api/auth/register");
    }
}
