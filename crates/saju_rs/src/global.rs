//! Process-wide engine singleton.

use std::sync::OnceLock;

use saju_calendar::SolarTermCache;
use tracing::info;

use crate::builder::SajuProfileBuilder;
use crate::config::SajuConfig;
use crate::error::ProfileError;

/// Global engine state: configuration plus a builder over a shared cache.
pub(crate) struct GlobalEngine {
    pub(crate) config: SajuConfig,
    pub(crate) builder: SajuProfileBuilder<SolarTermCache>,
}

static ENGINE: OnceLock<GlobalEngine> = OnceLock::new();

/// Initialize the global engine. May be called once per process.
///
/// Years in `config.cache.warm_years` are computed before this returns.
pub fn init(config: SajuConfig) -> Result<(), ProfileError> {
    config.validate()?;
    if ENGINE.get().is_some() {
        return Err(ProfileError::AlreadyInitialized);
    }
    let builder = SajuProfileBuilder::new(SolarTermCache::new())
        .options(config.options)
        .derive_config(config.derive);
    if let Some((start, end)) = config.cache.warm_years {
        builder.source().warm(start..=end)?;
    }
    ENGINE
        .set(GlobalEngine { config, builder })
        .map_err(|_| ProfileError::AlreadyInitialized)?;
    info!(
        month_convention = ?config.options.month_convention,
        zi_hour = ?config.options.zi_hour,
        spirit_basis = ?config.derive.spirit_basis,
        "saju engine initialized"
    );
    Ok(())
}

/// Whether [`init`] has completed.
pub fn is_initialized() -> bool {
    ENGINE.get().is_some()
}

pub(crate) fn engine() -> Result<&'static GlobalEngine, ProfileError> {
    ENGINE.get().ok_or(ProfileError::NotInitialized)
}
