use std::net::SocketAddr;

use crate::server::error::config::ConfigError;

/// Records listed per page for each entity list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageSizes {
    pub stores: u64,
    pub widgets: u64,
    pub inventories: u64,
    /// Shared by every complex app list
    pub complex: u64,
}

impl Default for PageSizes {
    fn default() -> Self {
        Self {
            stores: 10,
            widgets: 10,
            inventories: 10,
            complex: 5,
        }
    }
}

/// Superuser created at startup when both credentials are configured.
#[derive(Clone, Debug)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

pub struct Config {
    pub database_url: String,
    pub valkey_url: String,
    pub listen_addr: SocketAddr,
    pub page_sizes: PageSizes,
    pub admin: Option<AdminCredentials>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = PageSizes::default();

        let admin = admin_credentials(
            std::env::var("ADMIN_USERNAME").ok(),
            std::env::var("ADMIN_PASSWORD").ok(),
        )?;

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            valkey_url: required("VALKEY_URL")?,
            listen_addr: parse_or("LISTEN_ADDR", SocketAddr::from(([0, 0, 0, 0], 8080)))?,
            page_sizes: PageSizes {
                stores: page_size_or("STORES_PER_PAGE", defaults.stores)?,
                widgets: page_size_or("WIDGETS_PER_PAGE", defaults.widgets)?,
                inventories: page_size_or("INVENTORIES_PER_PAGE", defaults.inventories)?,
                complex: page_size_or("COMPLEX_PER_PAGE", defaults.complex)?,
            },
            admin,
        })
    }
}

fn admin_credentials(
    username: Option<String>,
    password: Option<String>,
) -> Result<Option<AdminCredentials>, ConfigError> {
    match (username, password) {
        (Some(username), Some(password)) => Ok(Some(AdminCredentials { username, password })),
        (None, None) => Ok(None),
        (Some(_), None) => Err(ConfigError::PartialAdminCredentials {
            set: "ADMIN_USERNAME",
            missing: "ADMIN_PASSWORD",
        }),
        (None, Some(_)) => Err(ConfigError::PartialAdminCredentials {
            set: "ADMIN_PASSWORD",
            missing: "ADMIN_USERNAME",
        }),
    }
}

fn required(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}

fn parse_or<T>(var: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(var) {
        Ok(value) => value.parse::<T>().map_err(|e| ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}

fn page_size_or(var: &str, default: u64) -> Result<u64, ConfigError> {
    let size = parse_or(var, default)?;

    if size == 0 {
        return Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: "page size must be greater than zero".to_string(),
        });
    }

    Ok(size)
}
