use std::env;

const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_path: String,
    pub log_dir: String,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        // Load .env file if exists
        dotenvy::dotenv().ok();

        let port = parse_port(env::var("PORT").ok().as_deref());

        let database_path =
            env::var("DATABASE_PATH").unwrap_or_else(|_| "dispatch.db".to_string());

        let log_dir = env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string());

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            port,
            database_path,
            log_dir,
            log_level,
        })
    }

    pub fn server_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn parse_port(raw: Option<&str>) -> u16 {
    raw.and_then(|p| p.trim().parse().ok()).unwrap_or(DEFAULT_PORT)
}
