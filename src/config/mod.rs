use tracing::warn;

pub const DEFAULT_SERVER_ADDR: &str = "127.0.0.1:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub server_addr: String,
    pub seed_orders: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_addr: DEFAULT_SERVER_ADDR.into(),
            seed_orders: true,
        }
    }
}

impl Config {
    /// Reads `SERVER_ADDR` and `SEED_ORDERS`; call after `dotenv()`.
    pub fn from_env() -> Self {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    pub fn from_lookup<F: Fn(&str) -> Option<String>>(get: F) -> Self {
        let defaults = Self::default();
        let seed_orders = match get("SEED_ORDERS") {
            None => defaults.seed_orders,
            Some(raw) => parse_bool(&raw).unwrap_or_else(|| {
                warn!(value = %raw, "invalid SEED_ORDERS, using default");
                defaults.seed_orders
            }),
        };
        Self {
            server_addr: get("SERVER_ADDR").unwrap_or(defaults.server_addr),
            seed_orders,
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}
