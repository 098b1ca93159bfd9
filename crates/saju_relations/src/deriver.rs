//! Symbolic relations derived from four pillars.

use serde::{Deserialize, Serialize};

use saju_cycle::{Element, FourPillars, PillarMap, PillarPosition, Polarity, Stem};

use crate::elements::ElementBalance;
use crate::interactions::{BranchInteraction, pillar_interactions};
use crate::shen_sha::{ShenSha, SpiritBasis, pillar_shen_sha};
use crate::spirits::{SpiritMarker, pillar_spirits};
use crate::ten_gods::{TenGod, ten_god};

/// Options for [`RelationalDeriver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeriveConfig {
    pub spirit_basis: SpiritBasis,
}

/// Everything derived from a [`FourPillars`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relations {
    pub hidden_stems: PillarMap<&'static [Stem]>,
    /// Stem Ten Gods; the day stem is the Day Master and maps to `None`.
    pub ten_gods: PillarMap<Option<TenGod>>,
    /// Ten God of each branch's primary hidden stem.
    pub branch_ten_gods: PillarMap<TenGod>,
    /// Strongest clash/harm marker of each pillar's branch.
    pub twelve_spirits: PillarMap<Option<SpiritMarker>>,
    /// Trine spirits from the configured basis; the basis pillar maps to `None`.
    pub shen_sha: PillarMap<Option<ShenSha>>,
    pub branch_interactions: Vec<BranchInteraction>,
    pub main_element: Element,
    pub secondary_element: Option<Element>,
    pub yin_yang: Polarity,
    pub element_balance: ElementBalance,
}

/// Pure function from pillars to [`Relations`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RelationalDeriver {
    config: DeriveConfig,
}

impl RelationalDeriver {
    pub fn new(config: DeriveConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> DeriveConfig {
        self.config
    }

    pub fn derive(&self, pillars: &FourPillars) -> Relations {
        let dm = pillars.day_master();
        let balance = ElementBalance::of(pillars);
        Relations {
            hidden_stems: pillars.branches().map(|b| b.hidden_stems()),
            ten_gods: PillarMap::from_fn(|pos| {
                (pos != PillarPosition::Day).then(|| ten_god(dm, pillars.get(pos).stem()))
            }),
            branch_ten_gods: pillars
                .branches()
                .map(|b| ten_god(dm, b.primary_hidden_stem())),
            twelve_spirits: pillar_spirits(pillars),
            shen_sha: pillar_shen_sha(pillars, self.config.spirit_basis),
            branch_interactions: pillar_interactions(pillars),
            main_element: dm.element(),
            secondary_element: balance.secondary(dm.element()),
            yin_yang: dm.polarity(),
            element_balance: balance,
        }
    }
}

/// [`RelationalDeriver::derive`] with the default configuration.
pub fn derive(pillars: &FourPillars) -> Relations {
    RelationalDeriver::default().derive(pillars)
}
