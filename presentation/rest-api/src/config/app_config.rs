use std::env;

use anyhow::Context;
use poem::middleware::Cors;

use super::{auth_config::AuthConfig, cors_config, lifecycle_config::LifecycleConfig};

/// Everything the catalog server needs before it accepts traffic.
pub struct AppConfig {
    pub bind_address: String,
    pub cors: Cors,
    pub lifecycle: LifecycleConfig,
    pub auth: AuthConfig,
}

impl AppConfig {
    /// Environment variables:
    /// - SERVICE_IP: Interface to bind (default: "127.0.0.1")
    /// - SERVICE_PORT: TCP port to bind (default: 8080)
    ///
    /// CORS, auth and lifecycle settings are read by their own modules.
    ///
    /// # Errors
    /// Fails on a non-numeric port or a missing JWT_SECRET.
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_address = bind_address(
            env::var("SERVICE_IP").ok().as_deref(),
            env::var("SERVICE_PORT").ok().as_deref(),
        )?;
        let auth = AuthConfig::from_env().context("JWT_SECRET must be set")?;

        Ok(Self {
            bind_address,
            cors: cors_config::init_cors(),
            lifecycle: LifecycleConfig::from_env(),
            auth,
        })
    }
}

fn bind_address(ip: Option<&str>, port: Option<&str>) -> anyhow::Result<String> {
    let ip = ip.map(str::trim).filter(|s| !s.is_empty()).unwrap_or("127.0.0.1");
    let port = match port.map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => raw
            .parse::<u16>()
            .with_context(|| format!("SERVICE_PORT is not a valid port: {raw}"))?,
        None => 8080,
    };

    Ok(format!("{ip}:{port}"))
}
