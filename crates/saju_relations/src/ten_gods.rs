//! Ten Gods (十神): each stem classified against the Day Master.
//!
//! The class depends on the element step from the Day Master to the other
//! stem along the generating cycle and on whether their polarities match.

use saju_cycle::Stem;

/// The ten relationships of a stem to the Day Master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TenGod {
    /// 比肩: same element, same polarity.
    BiJian,
    /// 劫財: same element, opposite polarity.
    JieCai,
    /// 食神: Day Master generates, same polarity.
    ShiShen,
    /// 傷官: Day Master generates, opposite polarity.
    ShangGuan,
    /// 偏財: Day Master overcomes, same polarity.
    PianCai,
    /// 正財: Day Master overcomes, opposite polarity.
    ZhengCai,
    /// 七殺 (偏官): overcomes the Day Master, same polarity.
    QiSha,
    /// 正官: overcomes the Day Master, opposite polarity.
    ZhengGuan,
    /// 偏印: generates the Day Master, same polarity.
    PianYin,
    /// 正印: generates the Day Master, opposite polarity.
    ZhengYin,
}

/// Indexed by `[element step][polarity differs]`.
#[rustfmt::skip]
const TEN_GOD_TABLE: [[TenGod; 2]; 5] = [
    [TenGod::BiJian,  TenGod::JieCai],
    [TenGod::ShiShen, TenGod::ShangGuan],
    [TenGod::PianCai, TenGod::ZhengCai],
    [TenGod::QiSha,   TenGod::ZhengGuan],
    [TenGod::PianYin, TenGod::ZhengYin],
];

/// Ten God of `other` relative to `day_master`. Total over all stem pairs.
pub fn ten_god(day_master: Stem, other: Stem) -> TenGod {
    let step = day_master.element().steps_to(other.element());
    let differs = day_master.polarity() != other.polarity();
    TEN_GOD_TABLE[step as usize][usize::from(differs)]
}

impl TenGod {
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::BiJian => "比肩",
            Self::JieCai => "劫財",
            Self::ShiShen => "食神",
            Self::ShangGuan => "傷官",
            Self::PianCai => "偏財",
            Self::ZhengCai => "正財",
            Self::QiSha => "七殺",
            Self::ZhengGuan => "正官",
            Self::PianYin => "偏印",
            Self::ZhengYin => "正印",
        }
    }

    pub const fn korean(self) -> &'static str {
        match self {
            Self::BiJian => "비견",
            Self::JieCai => "겁재",
            Self::ShiShen => "식신",
            Self::ShangGuan => "상관",
            Self::PianCai => "편재",
            Self::ZhengCai => "정재",
            Self::QiSha => "편관",
            Self::ZhengGuan => "정관",
            Self::PianYin => "편인",
            Self::ZhengYin => "정인",
        }
    }

    /// English gloss.
    pub const fn name(self) -> &'static str {
        match self {
            Self::BiJian => "Friend",
            Self::JieCai => "Rob Wealth",
            Self::ShiShen => "Eating God",
            Self::ShangGuan => "Hurting Officer",
            Self::PianCai => "Indirect Wealth",
            Self::ZhengCai => "Direct Wealth",
            Self::QiSha => "Seven Killings",
            Self::ZhengGuan => "Direct Officer",
            Self::PianYin => "Indirect Resource",
            Self::ZhengYin => "Direct Resource",
        }
    }
}
