use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

/// Runtime configuration, resolved once in `main` and threaded into the
/// state explicitly. Plain environment variables override the defaults;
/// `dotenvy` loads a local `.env` file before this runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub listen_addr: String,
    pub loglevel: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:users.db".to_string(),
            gemini_api_key: String::new(),
            gemini_model: "gemini-1.5-flash-latest".to_string(),
            listen_addr: "0.0.0.0:5000".to_string(),
            loglevel: "info".to_string(),
        }
    }
}

impl Config {
    /// Merge defaults with `DATABASE_URL`, `GEMINI_API_KEY`, `GEMINI_MODEL`,
    /// `LISTEN_ADDR` and `LOGLEVEL` from the environment.
    pub fn from_env() -> Result<Self, figment::Error> {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::raw().only(&[
                "database_url",
                "gemini_api_key",
                "gemini_model",
                "listen_addr",
                "loglevel",
            ]))
            .extract()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_values() {
        let cfg = Config::default();
        assert_eq!(cfg.database_url, "sqlite:users.db");
        assert_eq!(cfg.gemini_model, "gemini-1.5-flash-latest");
        assert_eq!(cfg.listen_addr, "0.0.0.0:5000");
        assert_eq!(cfg.loglevel, "info");
        assert!(cfg.gemini_api_key.is_empty());
    }
}
