//! The assembled profile: pillars, calendar context and relations.

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use saju_calendar::{LunarDate, SolarTermMoment};
use saju_cycle::{Element, FourPillars, PillarMap, Polarity, Stem};
use saju_pillars::PillarReading;
use saju_relations::{
    BranchInteraction, ElementBalance, Relations, ShenSha, SpiritMarker, TenGod,
};

use crate::error::ProfileError;
use crate::record::ProfileRecord;

/// A complete four-pillars profile for one instant. Read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct SajuProfile {
    timestamp: DateTime<FixedOffset>,
    reading: PillarReading,
    lunar_date: LunarDate,
    relations: Relations,
}

impl SajuProfile {
    pub(crate) fn new(
        timestamp: DateTime<FixedOffset>,
        reading: PillarReading,
        lunar_date: LunarDate,
        relations: Relations,
    ) -> Self {
        Self {
            timestamp,
            reading,
            lunar_date,
            relations,
        }
    }

    /// The instant the profile was computed for, with its original offset.
    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    pub fn pillars(&self) -> &FourPillars {
        &self.reading.pillars
    }

    pub fn reading(&self) -> &PillarReading {
        &self.reading
    }

    pub fn relations(&self) -> &Relations {
        &self.relations
    }

    /// Gregorian year whose 立春 opened the profile's sexagenary year.
    pub fn sexagenary_year(&self) -> i32 {
        self.reading.sexagenary_year
    }

    /// The Jie term governing the month pillar.
    pub fn month_term(&self) -> &SolarTermMoment {
        &self.reading.month_term
    }

    pub fn next_term(&self) -> &SolarTermMoment {
        &self.reading.next_term
    }

    /// Wall-clock (or local mean) time behind the day and hour pillars.
    pub fn local_datetime(&self) -> NaiveDateTime {
        self.reading.local_datetime
    }

    pub fn lunar_date(&self) -> LunarDate {
        self.lunar_date
    }

    pub fn day_master(&self) -> Stem {
        self.reading.pillars.day_master()
    }

    pub fn hidden_stems(&self) -> &PillarMap<&'static [Stem]> {
        &self.relations.hidden_stems
    }

    pub fn ten_gods(&self) -> &PillarMap<Option<TenGod>> {
        &self.relations.ten_gods
    }

    pub fn branch_ten_gods(&self) -> &PillarMap<TenGod> {
        &self.relations.branch_ten_gods
    }

    pub fn twelve_spirits(&self) -> &PillarMap<Option<SpiritMarker>> {
        &self.relations.twelve_spirits
    }

    pub fn shen_sha(&self) -> &PillarMap<Option<ShenSha>> {
        &self.relations.shen_sha
    }

    pub fn branch_interactions(&self) -> &[BranchInteraction] {
        &self.relations.branch_interactions
    }

    pub fn main_element(&self) -> Element {
        self.relations.main_element
    }

    pub fn secondary_element(&self) -> Option<Element> {
        self.relations.secondary_element
    }

    pub fn yin_yang(&self) -> Polarity {
        self.relations.yin_yang
    }

    pub fn element_balance(&self) -> &ElementBalance {
        &self.relations.element_balance
    }

    /// Plain serializable form of the profile.
    pub fn to_record(&self) -> ProfileRecord {
        ProfileRecord::from_profile(self)
    }

    pub fn to_json(&self) -> Result<String, ProfileError> {
        Ok(serde_json::to_string(&self.to_record())?)
    }

    pub fn to_json_pretty(&self) -> Result<String, ProfileError> {
        Ok(serde_json::to_string_pretty(&self.to_record())?)
    }
}
