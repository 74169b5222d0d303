//! Logging initialization

use std::str::FromStr;
use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Human-readable output for development
    #[default]
    Development,
    /// JSON structured output for production
    Production,
    /// Test capture mode for deterministic testing
    Test,
}

impl FromStr for Profile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Profile::Development),
            "production" | "prod" => Ok(Profile::Production),
            "test" => Ok(Profile::Test),
            other => Err(format!("unknown log profile '{}'", other)),
        }
    }
}

const DEV_FILTER: &str = "landreg_core=debug,landreg_store=debug,landreg_cli=debug";
const PROD_FILTER: &str = "landreg_core=info,landreg_store=info,landreg_cli=info";

static INIT_ONCE: Once = Once::new();

/// Initialize the logging facility
///
/// Call once at startup; later calls are ignored. `RUST_LOG` overrides the
/// profile's default filter.
///
/// - **Development**: human-readable logs at debug level
/// - **Production**: JSON logs at info level
/// - **Test**: bare registry; use `init_test_capture()` to record events
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| match profile {
        Profile::Development => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEV_FILTER)),
                )
                .with_writer(std::io::stderr)
                .init();
        }
        Profile::Production => {
            tracing_subscriber::fmt()
                .json()
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new(PROD_FILTER)),
                )
                .with_writer(std::io::stderr)
                .init();
        }
        Profile::Test => {
            tracing_subscriber::registry().init();
        }
    });
}
