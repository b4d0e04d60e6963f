use std::env;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub service_host: String,
    pub service_port: u16,
    /// Page size used when a list request carries no `count`
    pub list_default_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            service_host: "127.0.0.1".to_string(),
            service_port: 9000,
            list_default_count: 10,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let defaults = Config::default();

        let service_host = env::var("SERVICE_HOST").unwrap_or(defaults.service_host);

        let service_port = match env::var("SERVICE_PORT") {
            Ok(port) => port
                .parse::<u16>()
                .context("SERVICE_PORT must be a valid port number (0-65535)")?,
            Err(_) => defaults.service_port,
        };

        let list_default_count = match env::var("LIST_DEFAULT_COUNT") {
            Ok(count) => count
                .parse::<usize>()
                .context("LIST_DEFAULT_COUNT must be a non-negative integer")?,
            Err(_) => defaults.list_default_count,
        };

        Ok(Config {
            service_host,
            service_port,
            list_default_count,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Service listening on: {}", self.bind_addr());
        tracing::info!("  Default list page size: {}", self.list_default_count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, MutexGuard};

    // Tests in this module share the process environment
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env_vars() -> MutexGuard<'static, ()> {
        let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        unsafe {
            env::remove_var("SERVICE_HOST");
            env::remove_var("SERVICE_PORT");
            env::remove_var("LIST_DEFAULT_COUNT");
        }
        guard
    }

    #[test]
    fn test_config_with_all_vars() {
        let _guard = clear_env_vars();
        unsafe {
            env::set_var("SERVICE_HOST", "0.0.0.0");
            env::set_var("SERVICE_PORT", "8080");
            env::set_var("LIST_DEFAULT_COUNT", "25");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.service_host, "0.0.0.0");
        assert_eq!(config.service_port, 8080);
        assert_eq!(config.list_default_count, 25);
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_config_with_defaults() {
        let _guard = clear_env_vars();

        let config = Config::from_env().unwrap();

        assert_eq!(config.service_host, "127.0.0.1");
        assert_eq!(config.service_port, 9000);
        assert_eq!(config.list_default_count, 10);
    }

    #[test]
    fn test_invalid_port() {
        let _guard = clear_env_vars();
        unsafe {
            env::set_var("SERVICE_PORT", "not-a-number");
        }

        let result = Config::from_env();
        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.to_string().contains("SERVICE_PORT"));
    }

    #[test]
    fn test_port_out_of_range() {
        let _guard = clear_env_vars();
        unsafe {
            env::set_var("SERVICE_PORT", "99999");
        }

        let result = Config::from_env();
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_list_default_count() {
        let _guard = clear_env_vars();
        unsafe {
            env::set_var("LIST_DEFAULT_COUNT", "-3");
        }

        let error = Config::from_env().unwrap_err();
        assert!(error.to_string().contains("LIST_DEFAULT_COUNT"));
    }
}
