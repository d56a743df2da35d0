use std::env;
use std::net::SocketAddr;

pub mod cors;
pub mod security;

pub use cors::create_cors_layer;
pub use security::create_security_headers_layer;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub static_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: parse_port(env::var("PORT").ok().as_deref()),
            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| DEFAULT_STATIC_DIR.to_string()),
        }
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: DEFAULT_STATIC_DIR.to_string(),
        }
    }
}

fn parse_port(raw: Option<&str>) -> u16 {
    match raw.map(str::trim) {
        None | Some("") => DEFAULT_PORT,
        Some(value) => value.parse().unwrap_or_else(|e| {
            tracing::warn!("Config: Invalid PORT '{}': {}, using {}", value, e, DEFAULT_PORT);
            DEFAULT_PORT
        }),
    }
}
