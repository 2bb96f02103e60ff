use secrecy::SecretString;
use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_conn_string: String,
    pub mongo_db_name: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub auth0_domain: String,
    pub api_audience: String,
    /// HS256 secret for local development; unset in production, where tokens
    /// are verified against the tenant's published signing keys.
    pub auth_dev_secret: Option<SecretString>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            mongo_conn_string: env::var("MONGO_CONN_STRING")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            mongo_db_name: env::var("MONGO_DB_NAME")
                .unwrap_or_else(|_| "quizbar-local".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            auth0_domain: env::var("AUTH0_DOMAIN")
                .unwrap_or_else(|_| "dev-tenant.example.auth0.com".to_string()),
            api_audience: env::var("API_AUDIENCE").unwrap_or_else(|_| "drinks-api".to_string()),
            auth_dev_secret: env::var("AUTH_DEV_SECRET").ok().map(SecretString::from),
        }
    }

    /// Token issuer for this tenant. Auth0 mints `iss` with a trailing slash.
    pub fn issuer(&self) -> String {
        format!("https://{}/", self.auth0_domain)
    }

    pub fn jwks_url(&self) -> String {
        format!("https://{}/.well-known/jwks.json", self.auth0_domain)
    }

    /// Validate that production-critical configuration is set
    /// Panics if the deployment is still on development defaults
    pub fn validate_for_production(&self) {
        if self.auth_dev_secret.is_some() {
            panic!(
                "FATAL: AUTH_DEV_SECRET is set! Unset it in production so tokens are verified against the tenant signing keys."
            );
        }

        if self.auth0_domain == "dev-tenant.example.auth0.com" {
            panic!("FATAL: AUTH0_DOMAIN is using default value! Set AUTH0_DOMAIN environment variable.");
        }

        if self.api_audience.is_empty() {
            panic!("FATAL: API_AUDIENCE is empty! Set API_AUDIENCE environment variable.");
        }
    }

    #[cfg(any(test, feature = "test-support"))]
    pub fn test_config() -> Self {
        Self {
            mongo_conn_string: "mongodb://localhost:27017".to_string(),
            mongo_db_name: "quizbar-test".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            auth0_domain: "test-tenant.example.auth0.com".to_string(),
            api_audience: "drinks-api".to_string(),
            auth_dev_secret: Some(SecretString::from("unit-test-secret".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_with_defaults() {
        let config = Config::from_env();

        // Should use env vars if set, or fall back to defaults
        assert!(!config.mongo_conn_string.is_empty());
        assert!(!config.mongo_db_name.is_empty());
        assert!(!config.api_audience.is_empty());
    }

    #[test]
    fn test_issuer_carries_a_trailing_slash() {
        let config = Config::test_config();

        assert_eq!(config.issuer(), "https://test-tenant.example.auth0.com/");
        assert_eq!(
            config.jwks_url(),
            "https://test-tenant.example.auth0.com/.well-known/jwks.json"
        );
    }

    #[test]
    #[should_panic(expected = "AUTH_DEV_SECRET")]
    fn test_production_refuses_the_dev_secret() {
        let mut config = Config::test_config();
        config.auth0_domain = "real-tenant.auth0.com".to_string();
        config.validate_for_production();
    }

    #[test]
    #[should_panic(expected = "AUTH0_DOMAIN")]
    fn test_production_refuses_the_default_tenant() {
        let mut config = Config::test_config();
        config.auth_dev_secret = None;
        config.auth0_domain = "dev-tenant.example.auth0.com".to_string();
        config.validate_for_production();
    }
}
