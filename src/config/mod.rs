use once_cell::sync::Lazy;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone)]
pub struct AppSettings {
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone)]
pub struct SecurityConfig {
    pub jwt_secret: String,
    pub jwt_expiry_hours: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let port = env::var("APP_PORT")
            .ok()
            .or_else(|| env::var("PORT").ok())
            .and_then(|v| v.parse().ok())
            .unwrap_or(8080);

        let url = env::var("DATABASE_URL").unwrap_or_default();
        let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let jwt_secret = env::var("JWT_SECRET").unwrap_or_default();
        let jwt_expiry_hours = env::var("JWT_EXPIRY_HOURS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(24);

        Self {
            app: AppSettings { port },
            database: DatabaseConfig {
                url,
                max_connections,
            },
            security: SecurityConfig {
                jwt_secret,
                jwt_expiry_hours,
            },
        }
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_url_comes_from_env() {
        env::set_var("DATABASE_URL", "postgres://cfg-test@localhost/cfg");
        let cfg = AppConfig::from_env();
        assert_eq!(cfg.database.url, "postgres://cfg-test@localhost/cfg");
        env::remove_var("DATABASE_URL");
    }
}
