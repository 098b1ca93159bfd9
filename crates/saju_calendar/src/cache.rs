//! Read-through, per-year memo of solar-term tables.
//!
//! The map lock is held only long enough to fetch a year's slot; the
//! computation itself runs inside that slot's `OnceLock`, so concurrent
//! requests for the same year wait for one computation instead of
//! repeating it, and requests for other years proceed in parallel.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, OnceLock};

use tracing::{debug, trace};

use crate::error::CalendarError;
use crate::term_table::{SolarTermTable, solar_terms_for_year};

/// Anything that can hand out a year's solar-term table.
pub trait SolarTermSource: Send + Sync {
    fn terms_for_year(&self, year: i32) -> Result<Arc<SolarTermTable>, CalendarError>;
}

impl<S: SolarTermSource + ?Sized> SolarTermSource for Arc<S> {
    fn terms_for_year(&self, year: i32) -> Result<Arc<SolarTermTable>, CalendarError> {
        (**self).terms_for_year(year)
    }
}

impl<S: SolarTermSource + ?Sized> SolarTermSource for &S {
    fn terms_for_year(&self, year: i32) -> Result<Arc<SolarTermTable>, CalendarError> {
        (**self).terms_for_year(year)
    }
}

type Slot = Arc<OnceLock<Result<Arc<SolarTermTable>, CalendarError>>>;
type ComputeFn = dyn Fn(i32) -> Result<SolarTermTable, CalendarError> + Send + Sync;

/// Snapshot of cache activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    /// Requests answered from an already-filled slot.
    pub hits: u64,
    /// Tables (or errors) actually computed.
    pub computations: u64,
    /// Years with a slot in the map.
    pub years: usize,
}

/// Memoising [`SolarTermSource`] backed by [`solar_terms_for_year`].
///
/// Errors are memoised too: an unsupported year is reported from the
/// cache on every later request without recomputation.
pub struct SolarTermCache {
    slots: Mutex<HashMap<i32, Slot>>,
    compute: Box<ComputeFn>,
    hits: AtomicU64,
    computations: AtomicU64,
}

impl SolarTermCache {
    pub fn new() -> Self {
        Self::with_compute(solar_terms_for_year)
    }

    /// Cache over a custom table generator.
    pub fn with_compute(
        compute: impl Fn(i32) -> Result<SolarTermTable, CalendarError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
            compute: Box::new(compute),
            hits: AtomicU64::new(0),
            computations: AtomicU64::new(0),
        }
    }

    fn slot(&self, year: i32) -> Slot {
        // Poisoning cannot leave the map half-updated.
        let mut slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
        Arc::clone(slots.entry(year).or_default())
    }

    /// Compute the tables for `years` ahead of use.
    pub fn warm(&self, years: impl IntoIterator<Item = i32>) -> Result<(), CalendarError> {
        for year in years {
            self.terms_for_year(year)?;
        }
        Ok(())
    }

    pub fn stats(&self) -> CacheStats {
        let years = self.slots.lock().map(|s| s.len()).unwrap_or_else(|e| e.into_inner().len());
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            computations: self.computations.load(Ordering::Relaxed),
            years,
        }
    }
}

impl Default for SolarTermCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SolarTermCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SolarTermCache")
            .field("stats", &self.stats())
            .finish_non_exhaustive()
    }
}

impl SolarTermSource for SolarTermCache {
    fn terms_for_year(&self, year: i32) -> Result<Arc<SolarTermTable>, CalendarError> {
        let slot = self.slot(year);
        let mut computed = false;
        let result = slot.get_or_init(|| {
            computed = true;
            self.computations.fetch_add(1, Ordering::Relaxed);
            debug!(year, "solar-term cache miss");
            (self.compute)(year).map(Arc::new)
        });
        if !computed {
            self.hits.fetch_add(1, Ordering::Relaxed);
            trace!(year, "solar-term cache hit");
        }
        result.clone()
    }
}
