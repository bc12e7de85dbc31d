pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_PAYMENT_API_URL: &str = "http://localhost:3000/api";
pub const DEFAULT_PROJECT_ROOT: &str = ".";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_addr: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_defaults_when_unset() {
        let cfg = AppConfig::from_lookup(|_| None);
        assert_eq!(cfg.bind_addr, "0.0.0.0:3000");
    }

    #[test]
    fn bind_addr_from_variable() {
        let cfg = AppConfig::from_lookup(|key| (key == "BIND_ADDR").then(|| "127.0.0.1:4000".to_string()));
        assert_eq!(cfg.bind_addr, "127.0.0.1:4000");
    }
}
