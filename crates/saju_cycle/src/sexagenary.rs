//! The sexagenary cycle (六十甲子).
//!
//! Every cyclic offset in the engine (years from 1984 甲子, days from the
//! reference epoch, month and hour stems) goes through [`cycle_wrap`].

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::branch::Branch;
use crate::error::ParseCycleError;
use crate::stem::Stem;

/// Euclidean remainder of `value` modulo `modulus`, always in `0..modulus`.
///
/// `modulus` must be positive.
pub const fn cycle_wrap(value: i64, modulus: i64) -> i64 {
    ((value % modulus) + modulus) % modulus
}

/// A stem-branch pair of matching polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pillar {
    stem: Stem,
    branch: Branch,
}

/// 甲子, cycle index 0.
pub const JIA_ZI: Pillar = Pillar {
    stem: Stem::Jia,
    branch: Branch::Zi,
};

impl Pillar {
    /// Pair a stem with a branch; `None` unless their polarities match.
    pub const fn new(stem: Stem, branch: Branch) -> Option<Self> {
        if stem.index() % 2 == branch.index() % 2 {
            Some(Self { stem, branch })
        } else {
            None
        }
    }

    /// Pillar at a cycle index, wrapping modulo 60.
    pub const fn from_cycle_index(index: i64) -> Self {
        let i = cycle_wrap(index, 60);
        Self {
            stem: Stem::from_index((i % 10) as u8),
            branch: Branch::from_index((i % 12) as u8),
        }
    }

    /// Position in the cycle, 0 (甲子) to 59 (癸亥).
    pub const fn cycle_index(self) -> u8 {
        let s = self.stem.index() as i64;
        let b = self.branch.index() as i64;
        cycle_wrap(6 * s - 5 * b, 60) as u8
    }

    pub const fn stem(self) -> Stem {
        self.stem
    }

    pub const fn branch(self) -> Branch {
        self.branch
    }

    /// The pillar `n` positions later in the cycle (negative `n` steps back).
    pub const fn advance(self, n: i64) -> Self {
        Self::from_cycle_index(self.cycle_index() as i64 + cycle_wrap(n, 60))
    }

    /// Forward distance from `other` to `self` along the cycle, in `0..60`.
    pub const fn offset_from(self, other: Pillar) -> u8 {
        cycle_wrap(self.cycle_index() as i64 - other.cycle_index() as i64, 60) as u8
    }

    /// Hangul reading, e.g. `계사`.
    pub fn korean(self) -> String {
        format!("{}{}", self.stem.korean(), self.branch.korean())
    }

    /// Romanised form, e.g. `Gui-Si`.
    pub fn romanized(self) -> String {
        format!("{}-{}", self.stem.name(), self.branch.name())
    }
}

impl Display for Pillar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}

impl FromStr for Pillar {
    type Err = ParseCycleError;

    /// Accepts two hanja or hangul symbols (`"癸巳"`, `"계사"`) or a
    /// hyphenated romanisation (`"Gui-Si"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (stem_text, branch_text) = match s.split_once('-') {
            Some(pair) => pair,
            None => {
                let mut chars = s.char_indices();
                match (chars.next(), chars.next(), chars.next()) {
                    (Some(_), Some((split, _)), None) => s.split_at(split),
                    _ => return Err(ParseCycleError::Malformed(s.to_string())),
                }
            }
        };
        let stem: Stem = stem_text.parse()?;
        let branch: Branch = branch_text.parse()?;
        Self::new(stem, branch).ok_or(ParseCycleError::MixedPolarity {
            stem: stem.hanja(),
            branch: branch.hanja(),
        })
    }
}
