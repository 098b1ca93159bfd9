//! Trine-anchored spirits (十二神煞, here `ShenSha`).
//!
//! Each branch is marked relative to the trine (三合) group of a basis
//! branch. The group's 地殺 sits on its first branch (申 for 申子辰, 巳 for
//! 巳酉丑, 寅 for 寅午戌, 亥 for 亥卯未) and the rest follow in branch order.

use serde::{Deserialize, Serialize};

use saju_cycle::{Branch, FourPillars, PillarMap, PillarPosition};

/// The twelve trine spirits in cycle order from 地殺.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShenSha {
    DiSha,
    NianSha,
    YueSha,
    WangShenSha,
    JiangXingSha,
    PanAnSha,
    YiMaSha,
    LiuHaiSha,
    HuaGaiSha,
    JieSha,
    ZaiSha,
    TianSha,
}

/// All 12 trine spirits in order (0 = 地殺).
pub const ALL_SHEN_SHA: [ShenSha; 12] = [
    ShenSha::DiSha,
    ShenSha::NianSha,
    ShenSha::YueSha,
    ShenSha::WangShenSha,
    ShenSha::JiangXingSha,
    ShenSha::PanAnSha,
    ShenSha::YiMaSha,
    ShenSha::LiuHaiSha,
    ShenSha::HuaGaiSha,
    ShenSha::JieSha,
    ShenSha::ZaiSha,
    ShenSha::TianSha,
];

#[rustfmt::skip]
const SHEN_SHA_HANJA: [&str; 12] = [
    "地殺", "年殺", "月殺", "亡身殺", "將星殺", "攀鞍殺",
    "驛馬殺", "六害殺", "華蓋殺", "劫殺", "災殺", "天殺",
];

#[rustfmt::skip]
const SHEN_SHA_KOREAN: [&str; 12] = [
    "지살", "연살", "월살", "망신살", "장성살", "반안살",
    "역마살", "육해살", "화개살", "겁살", "재살", "천살",
];

/// 地殺 branch index per `basis mod 4`.
const GROUP_START: [u8; 4] = [8, 5, 2, 11];

impl ShenSha {
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn hanja(self) -> &'static str {
        SHEN_SHA_HANJA[self.index() as usize]
    }

    pub const fn korean(self) -> &'static str {
        SHEN_SHA_KOREAN[self.index() as usize]
    }
}

/// Spirit marking `target` relative to `basis`'s trine group.
pub fn shen_sha(basis: Branch, target: Branch) -> ShenSha {
    let start = GROUP_START[(basis.index() % 4) as usize];
    ALL_SHEN_SHA[((target.index() + 12 - start) % 12) as usize]
}

/// Which pillar's branch anchors the trine spirits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpiritBasis {
    #[default]
    Year,
    Day,
}

impl SpiritBasis {
    pub const fn position(self) -> PillarPosition {
        match self {
            Self::Year => PillarPosition::Year,
            Self::Day => PillarPosition::Day,
        }
    }
}

/// Trine spirit of every pillar's branch; the basis pillar itself maps
/// to `None`.
pub fn pillar_shen_sha(
    pillars: &FourPillars,
    basis: SpiritBasis,
) -> PillarMap<Option<ShenSha>> {
    let anchor = basis.position();
    let basis_branch = pillars.get(anchor).branch();
    PillarMap::from_fn(|pos| {
        (pos != anchor).then(|| shen_sha(basis_branch, pillars.get(pos).branch()))
    })
}
