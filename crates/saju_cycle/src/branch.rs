//! The twelve Earthly Branches (地支) and their hidden stems (支藏干).

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::element::{Element, Polarity};
use crate::error::ParseCycleError;
use crate::sexagenary::cycle_wrap;
use crate::stem::Stem;

/// The 12 earthly branches, 子 through 亥.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in order (0 = 子).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

const BRANCH_HANJA: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];
const BRANCH_PINYIN: [&str; 12] = [
    "Zi", "Chou", "Yin", "Mao", "Chen", "Si", "Wu", "Wei", "Shen", "You", "Xu", "Hai",
];
const BRANCH_KOREAN: [&str; 12] = [
    "자", "축", "인", "묘", "진", "사", "오", "미", "신", "유", "술", "해",
];
const BRANCH_ANIMAL: [&str; 12] = [
    "Rat", "Ox", "Tiger", "Rabbit", "Dragon", "Snake", "Horse", "Goat", "Monkey", "Rooster",
    "Dog", "Pig",
];

/// Element index per branch.
const BRANCH_ELEMENT: [u8; 12] = [4, 2, 0, 0, 2, 1, 1, 2, 3, 3, 2, 4];

use Stem::*;

/// Hidden stems per branch, primary (本氣) first.
#[rustfmt::skip]
static HIDDEN_STEMS: [&[Stem]; 12] = [
    &[Gui],            // 子
    &[Ji, Gui, Xin],   // 丑
    &[Jia, Bing, Wu],  // 寅
    &[Yi],             // 卯
    &[Wu, Yi, Gui],    // 辰
    &[Bing, Geng, Wu], // 巳
    &[Ding, Ji],       // 午
    &[Ji, Ding, Yi],   // 未
    &[Geng, Ren, Wu],  // 申
    &[Xin],            // 酉
    &[Wu, Xin, Ding],  // 戌
    &[Ren, Jia],       // 亥
];

impl Branch {
    /// 0-based index (子=0 .. 亥=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Branch for an index, wrapping modulo 12.
    pub const fn from_index(index: u8) -> Self {
        ALL_BRANCHES[(index % 12) as usize]
    }

    pub const fn hanja(self) -> &'static str {
        BRANCH_HANJA[self.index() as usize]
    }

    /// Romanised (pinyin) name.
    pub const fn name(self) -> &'static str {
        BRANCH_PINYIN[self.index() as usize]
    }

    pub const fn korean(self) -> &'static str {
        BRANCH_KOREAN[self.index() as usize]
    }

    /// Zodiac animal.
    pub const fn animal(self) -> &'static str {
        BRANCH_ANIMAL[self.index() as usize]
    }

    pub const fn element(self) -> Element {
        Element::from_index(BRANCH_ELEMENT[self.index() as usize])
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self.index())
    }

    /// Hidden stems, primary first (1 to 3 entries).
    pub fn hidden_stems(self) -> &'static [Stem] {
        HIDDEN_STEMS[self.index() as usize]
    }

    /// The primary hidden stem (本氣).
    pub fn primary_hidden_stem(self) -> Stem {
        HIDDEN_STEMS[self.index() as usize][0]
    }

    /// The branch `n` steps later in the cycle (negative `n` steps back).
    pub fn advance(self, n: i64) -> Self {
        Self::from_index(cycle_wrap(i64::from(self.index()) + cycle_wrap(n, 12), 12) as u8)
    }
}

impl Display for Branch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.hanja())
    }
}

impl FromStr for Branch {
    type Err = ParseCycleError;

    /// Accepts hanja, hangul or pinyin (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ALL_BRANCHES
            .iter()
            .copied()
            .find(|b| b.hanja() == s || b.korean() == s || b.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseCycleError::UnknownBranch(s.to_string()))
    }
}
