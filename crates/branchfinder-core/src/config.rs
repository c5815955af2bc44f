use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable is optional; defaults match the stock Philippines-wide map
/// view and the local data server.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_f64_in =
        |var: &str, default: &str, min: f64, max: f64| -> Result<f64, ConfigError> {
            let value: f64 = parse_as(var, &or_default(var, default))?;
            if value.is_finite() && (min..=max).contains(&value) {
                Ok(value)
            } else {
                Err(invalid(var, format!("must be between {min} and {max}")))
            }
        };

    let env = parse_environment(&or_default("BRANCHFINDER_ENV", "development"))?;
    let log_level = or_default("BRANCHFINDER_LOG_LEVEL", "info");
    let bind_addr: SocketAddr = parse_as(
        "BRANCHFINDER_BIND_ADDR",
        &or_default("BRANCHFINDER_BIND_ADDR", "0.0.0.0:3000"),
    )?;
    let data_url = or_default(
        "BRANCHFINDER_DATA_URL",
        "http://localhost:3000/branchLocator.json",
    );
    let data_path = lookup("BRANCHFINDER_DATA_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);
    let static_dir = PathBuf::from(or_default("BRANCHFINDER_STATIC_DIR", "./public"));

    let request_timeout_secs: u64 = parse_as(
        "BRANCHFINDER_REQUEST_TIMEOUT_SECS",
        &or_default("BRANCHFINDER_REQUEST_TIMEOUT_SECS", "30"),
    )?;
    let user_agent = or_default("BRANCHFINDER_USER_AGENT", "branchfinder/0.1 (branch-locator)");

    let default_center_lat = parse_f64_in("BRANCHFINDER_DEFAULT_LAT", "13.0", -90.0, 90.0)?;
    let default_center_lng = parse_f64_in("BRANCHFINDER_DEFAULT_LNG", "122.0", -180.0, 180.0)?;
    let default_zoom: u8 = parse_as(
        "BRANCHFINDER_DEFAULT_ZOOM",
        &or_default("BRANCHFINDER_DEFAULT_ZOOM", "6"),
    )?;
    let detail_zoom: u8 = parse_as(
        "BRANCHFINDER_DETAIL_ZOOM",
        &or_default("BRANCHFINDER_DETAIL_ZOOM", "15"),
    )?;
    let marker_limit: usize = parse_as(
        "BRANCHFINDER_MARKER_LIMIT",
        &or_default("BRANCHFINDER_MARKER_LIMIT", "100"),
    )?;
    let bounds_padding: f64 = parse_as(
        "BRANCHFINDER_BOUNDS_PADDING",
        &or_default("BRANCHFINDER_BOUNDS_PADDING", "0.1"),
    )?;
    if !bounds_padding.is_finite() || bounds_padding < 0.0 {
        return Err(invalid(
            "BRANCHFINDER_BOUNDS_PADDING",
            "must be a non-negative number".to_string(),
        ));
    }

    Ok(AppConfig {
        env,
        log_level,
        bind_addr,
        data_url,
        data_path,
        static_dir,
        request_timeout_secs,
        user_agent,
        default_center_lat,
        default_center_lng,
        default_zoom,
        detail_zoom,
        marker_limit,
        bounds_padding,
    })
}

fn parse_as<T>(var: &str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s.trim() {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "BRANCHFINDER_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
