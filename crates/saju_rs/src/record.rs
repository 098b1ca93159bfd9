//! Serializable profile record.
//!
//! Symbols are written as hanja (`"丙"`, `"午"`, `"正官"`, `"六沖"`, `"地殺"`),
//! elements and polarity by English name (`"Fire"`, `"Yang"`), and branch
//! relations in lower case (`"clash"`). Field names are camelCase.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use saju_calendar::{LunarDate, SolarTermMoment};
use saju_cycle::{ALL_ELEMENTS, Pillar, PillarMap, Stem};
use saju_relations::{BranchInteraction, ElementBalance};

use crate::profile::SajuProfile;

/// One pillar with the hidden stems of its branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PillarRecord {
    pub stem: String,
    pub branch: String,
    pub full_stem_branch: String,
    pub hidden_stems: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PillarsRecord {
    pub year: PillarRecord,
    pub month: PillarRecord,
    pub day: PillarRecord,
    pub hour: PillarRecord,
}

/// Per-pillar values where any slot may be absent; absent slots are
/// omitted from the output.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PillarEntries {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hour: Option<String>,
}

impl PillarEntries {
    fn from_map<T>(map: &PillarMap<Option<T>>, text: impl Fn(&T) -> &'static str) -> Self {
        let entry = |v: &Option<T>| v.as_ref().map(|t| text(t).to_owned());
        Self {
            year: entry(&map.year),
            month: entry(&map.month),
            day: entry(&map.day),
            hour: entry(&map.hour),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LunarDateRecord {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub is_leap_month: bool,
}

impl From<LunarDate> for LunarDateRecord {
    fn from(d: LunarDate) -> Self {
        Self {
            year: d.year,
            month: d.month,
            day: d.day,
            is_leap_month: d.is_leap_month,
        }
    }
}

/// Character counts per element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementBalanceRecord {
    pub wood: u8,
    pub fire: u8,
    pub earth: u8,
    pub metal: u8,
    pub water: u8,
}

impl From<&ElementBalance> for ElementBalanceRecord {
    fn from(b: &ElementBalance) -> Self {
        let [wood, fire, earth, metal, water] = ALL_ELEMENTS.map(|e| b.count(e));
        Self {
            wood,
            fire,
            earth,
            metal,
            water,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchInteractionRecord {
    pub first: String,
    pub second: String,
    pub relations: Vec<String>,
}

impl From<&BranchInteraction> for BranchInteractionRecord {
    fn from(i: &BranchInteraction) -> Self {
        Self {
            first: i.first.name().to_owned(),
            second: i.second.name().to_owned(),
            relations: i.relations.iter().map(|r| r.name().to_owned()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolarTermRecord {
    pub name: String,
    pub hanja: String,
    pub utc: DateTime<Utc>,
}

impl From<&SolarTermMoment> for SolarTermRecord {
    fn from(m: &SolarTermMoment) -> Self {
        Self {
            name: m.term.name().to_owned(),
            hanja: m.term.hanja().to_owned(),
            utc: m.utc,
        }
    }
}

/// Flat, JSON-ready view of a [`SajuProfile`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    pub pillars: PillarsRecord,
    pub main_element: String,
    pub secondary_element: Option<String>,
    pub yin_yang: String,
    /// The day stem is the Day Master and has no entry.
    pub ten_gods: PillarEntries,
    pub branch_ten_gods: PillarEntries,
    /// Pillars without a clash or harm have no entry.
    pub twelve_spirits: PillarEntries,
    /// Trine spirits; the basis pillar has no entry.
    pub shen_sha: PillarEntries,
    pub lunar_date: LunarDateRecord,
    pub element_balance: ElementBalanceRecord,
    pub branch_interactions: Vec<BranchInteractionRecord>,
    pub month_term: SolarTermRecord,
}

impl ProfileRecord {
    pub fn from_profile(profile: &SajuProfile) -> Self {
        let pillars = profile.pillars().as_map();
        let hidden = profile.hidden_stems();
        let pillar = |p: &Pillar, stems: &[Stem]| PillarRecord {
            stem: p.stem().hanja().to_owned(),
            branch: p.branch().hanja().to_owned(),
            full_stem_branch: p.to_string(),
            hidden_stems: stems.iter().map(|s| s.hanja().to_owned()).collect(),
        };
        let branch_ten_gods = profile.branch_ten_gods().map(|g| Some(*g));

        Self {
            pillars: PillarsRecord {
                year: pillar(&pillars.year, hidden.year),
                month: pillar(&pillars.month, hidden.month),
                day: pillar(&pillars.day, hidden.day),
                hour: pillar(&pillars.hour, hidden.hour),
            },
            main_element: profile.main_element().name().to_owned(),
            secondary_element: profile.secondary_element().map(|e| e.name().to_owned()),
            yin_yang: profile.yin_yang().name().to_owned(),
            ten_gods: PillarEntries::from_map(profile.ten_gods(), |g| g.hanja()),
            branch_ten_gods: PillarEntries::from_map(&branch_ten_gods, |g| g.hanja()),
            twelve_spirits: PillarEntries::from_map(profile.twelve_spirits(), |m| m.hanja()),
            shen_sha: PillarEntries::from_map(profile.shen_sha(), |s| s.hanja()),
            lunar_date: profile.lunar_date().into(),
            element_balance: profile.element_balance().into(),
            branch_interactions: profile
                .branch_interactions()
                .iter()
                .map(BranchInteractionRecord::from)
                .collect(),
            month_term: profile.month_term().into(),
        }
    }
}
