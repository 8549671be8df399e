use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, fmt};

const OWN_CRATES: [&str; 2] = ["zenith_core", "zenith_client"];

/// Директива фильтра: свои крейты на `level`, зависимости (`reqwest`,
/// `hyper`) не громче `warn`.
fn default_directive(level: &str) -> String {
    let level = level.trim();
    let mut directive = String::from("warn");
    for krate in OWN_CRATES {
        directive.push_str(&format!(",{krate}={level}"));
    }
    directive
}

/// Включает журнал в stderr. `RUST_LOG` имеет приоритет над `default_level`.
pub fn init_logging(default_level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive(default_level)))
        .unwrap_or_else(|_| EnvFilter::new(default_directive("info")));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .try_init()
        .map_err(|e| anyhow::anyhow!("{e}"))
        .context("failed to init zenith client logging")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_directive_scopes_level_to_own_crates() {
        assert_eq!(
            default_directive(" debug "),
            "warn,zenith_core=debug,zenith_client=debug"
        );
    }
}
