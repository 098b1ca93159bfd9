//! Twelve Spirits markers from the six-clash (六沖) and six-harm (六害)
//! tables.
//!
//! The marker of two branches is a symmetric function of the pair. A
//! pillar's marker is the strongest one its branch forms with any other
//! pillar's branch; a clash outranks a harm.

use saju_cycle::{ALL_POSITIONS, Branch, FourPillars, PillarMap};

/// Marker between two branches, ordered by strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SpiritMarker {
    /// 六害
    Harm,
    /// 六沖
    Clash,
}

impl SpiritMarker {
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Harm => "六害",
            Self::Clash => "六沖",
        }
    }

    pub const fn korean(self) -> &'static str {
        match self {
            Self::Harm => "육해",
            Self::Clash => "육충",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Harm => "harm",
            Self::Clash => "clash",
        }
    }
}

/// Clash partner of each branch (opposite on the circle).
#[rustfmt::skip]
const SIX_CLASH: [u8; 12] = [6, 7, 8, 9, 10, 11, 0, 1, 2, 3, 4, 5];

/// Harm partner of each branch: 子未 丑午 寅巳 卯辰 申亥 酉戌.
#[rustfmt::skip]
const SIX_HARM: [u8; 12] = [7, 6, 5, 4, 3, 2, 1, 0, 11, 10, 9, 8];

/// Marker formed by two branches, if any. Symmetric and total.
pub fn spirit_marker(a: Branch, b: Branch) -> Option<SpiritMarker> {
    let (a, b) = (a.index() as usize, b.index() as usize);
    if SIX_CLASH[a] as usize == b {
        Some(SpiritMarker::Clash)
    } else if SIX_HARM[a] as usize == b {
        Some(SpiritMarker::Harm)
    } else {
        None
    }
}

/// Strongest marker of each pillar's branch against the other three.
pub fn pillar_spirits(pillars: &FourPillars) -> PillarMap<Option<SpiritMarker>> {
    let branches = pillars.branches();
    PillarMap::from_fn(|pos| {
        ALL_POSITIONS
            .iter()
            .filter(|other| **other != pos)
            .filter_map(|other| spirit_marker(*branches.get(pos), *branches.get(*other)))
            .max()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use saju_cycle::ALL_BRANCHES;

    #[test]
    fn symmetric_over_all_pairs() {
        for a in ALL_BRANCHES {
            for b in ALL_BRANCHES {
                assert_eq!(spirit_marker(a, b), spirit_marker(b, a), "{a}{b}");
            }
        }
    }

    #[test]
    fn every_branch_has_one_clash_and_one_harm() {
        for a in ALL_BRANCHES {
            let clashes = ALL_BRANCHES
                .iter()
                .filter(|b| spirit_marker(a, **b) == Some(SpiritMarker::Clash))
                .count();
            let harms = ALL_BRANCHES
                .iter()
                .filter(|b| spirit_marker(a, **b) == Some(SpiritMarker::Harm))
                .count();
            assert_eq!((clashes, harms), (1, 1), "{a}");
        }
    }

    #[test]
    fn known_pairs() {
        assert_eq!(spirit_marker(Branch::Zi, Branch::Wu), Some(SpiritMarker::Clash));
        assert_eq!(spirit_marker(Branch::Zi, Branch::Wei), Some(SpiritMarker::Harm));
        assert_eq!(spirit_marker(Branch::You, Branch::Xu), Some(SpiritMarker::Harm));
        assert_eq!(spirit_marker(Branch::Zi, Branch::Yin), None);
        assert_eq!(spirit_marker(Branch::Yin, Branch::Zi), None);
        assert_eq!(spirit_marker(Branch::Wu, Branch::Wu), None);
    }

    #[test]
    fn clash_outranks_harm() {
        // 子 clashes 午 (day) and harms 未 (hour).
        let fp = FourPillars::new(
            "甲子".parse().unwrap(),
            "丙寅".parse().unwrap(),
            "庚午".parse().unwrap(),
            "癸未".parse().unwrap(),
        );
        let m = pillar_spirits(&fp);
        assert_eq!(m.year, Some(SpiritMarker::Clash));
        assert_eq!(m.month, None);
        assert_eq!(m.day, Some(SpiritMarker::Clash));
        assert_eq!(m.hour, Some(SpiritMarker::Harm));
    }
}
