//! Process-wide logger.
//!
//! # Responsibilities
//! - Establish one `Logger` per process, before the first record is written
//! - Offer free functions that log through it
//!
//! # Design Decisions
//! - Write-once (`OnceLock`): readers never see a partially built logger
//! - Explicit `init` reports configuration errors to the caller
//! - Without `init`, first use resolves from the environment and a missing
//!   service name panics: logging without a service identity is not allowed

use std::io;
use std::sync::OnceLock;

use crate::config::{ChillogConfig, ConfigError};
use crate::fields::Fields;
use crate::level::Level;
use crate::logger::Logger;

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Error returned when the global logger was already set.
#[derive(Debug, thiserror::Error)]
#[error("global logger is already initialized")]
pub struct AlreadyInitialized;

/// Initialize the global logger from the environment using the default config.
pub fn init() -> Result<&'static Logger, InitError> {
    init_from(&ChillogConfig::default())
}

/// Initialize the global logger from the environment using `config`.
pub fn init_from(config: &ChillogConfig) -> Result<&'static Logger, InitError> {
    let logger = Logger::from_env(config)?;
    Ok(init_with(logger)?)
}

/// Install an already built logger as the global one.
pub fn init_with(logger: Logger) -> Result<&'static Logger, AlreadyInitialized> {
    LOGGER.set(logger).map_err(|_| AlreadyInitialized)?;
    tracing::debug!("Global logger initialized");
    LOGGER.get().ok_or(AlreadyInitialized)
}

/// The global logger, if it has been initialized.
pub fn try_logger() -> Option<&'static Logger> {
    LOGGER.get()
}

/// The global logger, initializing it from the environment on first use.
///
/// # Panics
/// If the service name variable is unset. The process must not emit
/// records without a service identity.
pub fn logger() -> &'static Logger {
    LOGGER.get_or_init(|| match Logger::from_env(&ChillogConfig::default()) {
        Ok(logger) => logger,
        Err(err) => panic!("chillog: {err}"),
    })
}

/// Errors from [`init`] and [`init_from`].
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    AlreadyInitialized(#[from] AlreadyInitialized),
}

/// Log through the global logger.
pub fn log(
    level: Level,
    short_message: &str,
    full_message: Option<&str>,
    fields: &Fields,
) -> io::Result<()> {
    logger().log(level, short_message, full_message, fields)
}

macro_rules! global_level_fns {
    ($($level:ident => $plain:ident, $pairs:ident, $fields:ident;)*) => {
        $(
            #[doc = concat!("Log a short message at `", stringify!($level), "` through the global logger.")]
            pub fn $plain(short_message: &str) -> io::Result<()> {
                logger().$plain(short_message)
            }

            #[doc = concat!("Log at `", stringify!($level), "` with a flat key/value slice through the global logger.")]
            pub fn $pairs<P: AsRef<str>>(
                short_message: &str,
                full_message: Option<&str>,
                pairs: &[P],
            ) -> io::Result<()> {
                logger().$pairs(short_message, full_message, pairs)
            }

            #[doc = concat!("Log at `", stringify!($level), "` with extra fields through the global logger.")]
            pub fn $fields(
                short_message: &str,
                full_message: Option<&str>,
                fields: &Fields,
            ) -> io::Result<()> {
                logger().$fields(short_message, full_message, fields)
            }
        )*
    };
}

global_level_fns! {
    Alert => alert, alert_pairs, alert_fields;
    Critical => critical, critical_pairs, critical_fields;
    Error => error, error_pairs, error_fields;
    Warning => warning, warning_pairs, warning_fields;
    Notice => notice, notice_pairs, notice_fields;
    Informational => info, info_pairs, info_fields;
    Debug => debug, debug_pairs, debug_fields;
}
