//! The 24 solar terms (二十四節氣).
//!
//! Ordinal 0 is 立春 (Li Chun) at apparent solar longitude 315°; each
//! following term lies 15° further along the ecliptic. Even ordinals are
//! the 12 Jie (節) month boundaries, odd ordinals the 12 Qi (中氣) mid terms.

/// The 24 solar terms in order from Li Chun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum SolarTerm {
    LiChun,
    YuShui,
    JingZhe,
    ChunFen,
    QingMing,
    GuYu,
    LiXia,
    XiaoMan,
    MangZhong,
    XiaZhi,
    XiaoShu,
    DaShu,
    LiQiu,
    ChuShu,
    BaiLu,
    QiuFen,
    HanLu,
    ShuangJiang,
    LiDong,
    XiaoXue,
    DaXue,
    DongZhi,
    XiaoHan,
    DaHan,
}

/// All 24 terms in ordinal order (0 = 立春).
pub const ALL_SOLAR_TERMS: [SolarTerm; 24] = [
    SolarTerm::LiChun,
    SolarTerm::YuShui,
    SolarTerm::JingZhe,
    SolarTerm::ChunFen,
    SolarTerm::QingMing,
    SolarTerm::GuYu,
    SolarTerm::LiXia,
    SolarTerm::XiaoMan,
    SolarTerm::MangZhong,
    SolarTerm::XiaZhi,
    SolarTerm::XiaoShu,
    SolarTerm::DaShu,
    SolarTerm::LiQiu,
    SolarTerm::ChuShu,
    SolarTerm::BaiLu,
    SolarTerm::QiuFen,
    SolarTerm::HanLu,
    SolarTerm::ShuangJiang,
    SolarTerm::LiDong,
    SolarTerm::XiaoXue,
    SolarTerm::DaXue,
    SolarTerm::DongZhi,
    SolarTerm::XiaoHan,
    SolarTerm::DaHan,
];

const TERM_NAMES: [&str; 24] = [
    "LiChun",
    "YuShui",
    "JingZhe",
    "ChunFen",
    "QingMing",
    "GuYu",
    "LiXia",
    "XiaoMan",
    "MangZhong",
    "XiaZhi",
    "XiaoShu",
    "DaShu",
    "LiQiu",
    "ChuShu",
    "BaiLu",
    "QiuFen",
    "HanLu",
    "ShuangJiang",
    "LiDong",
    "XiaoXue",
    "DaXue",
    "DongZhi",
    "XiaoHan",
    "DaHan",
];

#[rustfmt::skip]
const TERM_HANJA: [&str; 24] = [
    "立春", "雨水", "驚蟄", "春分", "淸明", "穀雨",
    "立夏", "小滿", "芒種", "夏至", "小暑", "大暑",
    "立秋", "處暑", "白露", "秋分", "寒露", "霜降",
    "立冬", "小雪", "大雪", "冬至", "小寒", "大寒",
];

#[rustfmt::skip]
const TERM_KOREAN: [&str; 24] = [
    "입춘", "우수", "경칩", "춘분", "청명", "곡우",
    "입하", "소만", "망종", "하지", "소서", "대서",
    "입추", "처서", "백로", "추분", "한로", "상강",
    "입동", "소설", "대설", "동지", "소한", "대한",
];

impl SolarTerm {
    /// 0-based ordinal (立春=0 .. 大寒=23).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Term for an ordinal, wrapping modulo 24.
    pub const fn from_index(index: u8) -> Self {
        ALL_SOLAR_TERMS[(index % 24) as usize]
    }

    /// Romanised (pinyin) name.
    pub const fn name(self) -> &'static str {
        TERM_NAMES[self.index() as usize]
    }

    pub const fn hanja(self) -> &'static str {
        TERM_HANJA[self.index() as usize]
    }

    pub const fn korean(self) -> &'static str {
        TERM_KOREAN[self.index() as usize]
    }

    /// Apparent solar longitude of the term, degrees in [0, 360).
    pub const fn longitude_deg(self) -> f64 {
        ((315 + 15 * self.index() as u32) % 360) as f64
    }

    /// True for the 12 Jie (節) terms that open a solar month.
    pub const fn is_jie(self) -> bool {
        self.index() % 2 == 0
    }

    /// True for the 12 Qi (中氣) mid-month terms.
    pub const fn is_qi(self) -> bool {
        !self.is_jie()
    }

    /// Solar month offset from the 寅 month (0 for 立春/雨水 .. 11 for 小寒/大寒).
    pub const fn month_offset(self) -> u8 {
        self.index() / 2
    }

    /// The term 15° later (大寒 wraps to 立春).
    pub const fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }
}
