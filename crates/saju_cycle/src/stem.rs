//! The ten Heavenly Stems (天干).

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::element::{Element, Polarity};
use crate::error::ParseCycleError;
use crate::sexagenary::cycle_wrap;

/// The 10 heavenly stems, 甲 through 癸.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in order (0 = 甲).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

const STEM_HANJA: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];
const STEM_PINYIN: [&str; 10] = [
    "Jia", "Yi", "Bing", "Ding", "Wu", "Ji", "Geng", "Xin", "Ren", "Gui",
];
const STEM_KOREAN: [&str; 10] = ["갑", "을", "병", "정", "무", "기", "경", "신", "임", "계"];

impl Stem {
    /// 0-based index (甲=0 .. 癸=9).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Stem for an index, wrapping modulo 10.
    pub const fn from_index(index: u8) -> Self {
        ALL_STEMS[(index % 10) as usize]
    }

    pub const fn hanja(self) -> &'static str {
        STEM_HANJA[self.index() as usize]
    }

    /// Romanised (pinyin) name.
    pub const fn name(self) -> &'static str {
        STEM_PINYIN[self.index() as usize]
    }

    pub const fn korean(self) -> &'static str {
        STEM_KOREAN[self.index() as usize]
    }

    /// 甲乙 Wood, 丙丁 Fire, 戊己 Earth, 庚辛 Metal, 壬癸 Water.
    pub const fn element(self) -> Element {
        Element::from_index(self.index() / 2)
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self.index())
    }

    /// The stem `n` steps later in the cycle (negative `n` steps back).
    pub fn advance(self, n: i64) -> Self {
        Self::from_index(cycle_wrap(i64::from(self.index()) + cycle_wrap(n, 10), 10) as u8)
    }
}

impl Display for Stem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.hanja())
    }
}

impl FromStr for Stem {
    type Err = ParseCycleError;

    /// Accepts hanja, hangul or pinyin (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ALL_STEMS
            .iter()
            .copied()
            .find(|stem| {
                stem.hanja() == s || stem.korean() == s || stem.name().eq_ignore_ascii_case(s)
            })
            .ok_or_else(|| ParseCycleError::UnknownStem(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_roundtrip() {
        for (i, stem) in ALL_STEMS.iter().enumerate() {
            assert_eq!(stem.index() as usize, i);
            assert_eq!(Stem::from_index(i as u8), *stem);
        }
    }

    #[test]
    fn elements_and_polarity() {
        assert_eq!(Stem::Jia.element(), Element::Wood);
        assert_eq!(Stem::Ding.element(), Element::Fire);
        assert_eq!(Stem::Ji.element(), Element::Earth);
        assert_eq!(Stem::Geng.element(), Element::Metal);
        assert_eq!(Stem::Gui.element(), Element::Water);
        assert_eq!(Stem::Jia.polarity(), Polarity::Yang);
        assert_eq!(Stem::Gui.polarity(), Polarity::Yin);
    }

    #[test]
    fn advance_wraps_both_ways() {
        assert_eq!(Stem::Gui.advance(1), Stem::Jia);
        assert_eq!(Stem::Jia.advance(-1), Stem::Gui);
        assert_eq!(Stem::Bing.advance(-23), Stem::Gui);
        assert_eq!(Stem::Bing.advance(10_000_000), Stem::Bing);
    }

    #[test]
    fn parse_all_spellings() {
        assert_eq!("癸".parse::<Stem>().unwrap(), Stem::Gui);
        assert_eq!("계".parse::<Stem>().unwrap(), Stem::Gui);
        assert_eq!("gui".parse::<Stem>().unwrap(), Stem::Gui);
        assert!("X".parse::<Stem>().is_err());
    }
}
