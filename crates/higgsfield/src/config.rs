/// Default base URL of the Higgsfield platform.
pub const DEFAULT_BASE_URL: &str = "https://platform.higgsfield.ai";

/// Credentials and endpoint for the Higgsfield platform.
#[derive(Debug, Clone)]
pub struct HiggsfieldConfig {
    /// Base URL, overridable for local stubs via `HIGGSFIELD_BASE_URL`.
    pub base_url: String,
    pub api_key: String,
    pub api_secret: String,
}

impl HiggsfieldConfig {
    /// Load the platform configuration from environment variables.
    ///
    /// | Env Var                 | Default                          |
    /// |-------------------------|----------------------------------|
    /// | `HIGGSFIELD_BASE_URL`   | `https://platform.higgsfield.ai` |
    /// | `HIGGSFIELD_API_KEY`    | required                         |
    /// | `HIGGSFIELD_API_SECRET` | required                         |
    ///
    /// Returns an error when either secret is missing; startup must fail
    /// fast rather than discover the gap on the first submission.
    pub fn from_env() -> Result<Self, String> {
        let base_url =
            std::env::var("HIGGSFIELD_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());

        let api_key = std::env::var("HIGGSFIELD_API_KEY")
            .map_err(|_| "HIGGSFIELD_API_KEY must be set".to_string())?;
        let api_secret = std::env::var("HIGGSFIELD_API_SECRET")
            .map_err(|_| "HIGGSFIELD_API_SECRET must be set".to_string())?;

        Ok(Self {
            base_url,
            api_key,
            api_secret,
        })
    }
}
