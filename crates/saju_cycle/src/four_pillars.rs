//! The four pillars of a reading and per-pillar containers.

use std::fmt::{Display, Formatter};
use std::ops::Index;

use crate::branch::Branch;
use crate::sexagenary::Pillar;
use crate::stem::Stem;

/// One of the four pillar slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
}

/// All positions in reading order.
pub const ALL_POSITIONS: [PillarPosition; 4] = [
    PillarPosition::Year,
    PillarPosition::Month,
    PillarPosition::Day,
    PillarPosition::Hour,
];

impl PillarPosition {
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
        }
    }

    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Year => "年柱",
            Self::Month => "月柱",
            Self::Day => "日柱",
            Self::Hour => "時柱",
        }
    }
}

/// One value per pillar slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PillarMap<T> {
    pub year: T,
    pub month: T,
    pub day: T,
    pub hour: T,
}

impl<T> PillarMap<T> {
    /// Build a map by evaluating `f` at every position.
    pub fn from_fn(mut f: impl FnMut(PillarPosition) -> T) -> Self {
        Self {
            year: f(PillarPosition::Year),
            month: f(PillarPosition::Month),
            day: f(PillarPosition::Day),
            hour: f(PillarPosition::Hour),
        }
    }

    pub fn get(&self, position: PillarPosition) -> &T {
        match position {
            PillarPosition::Year => &self.year,
            PillarPosition::Month => &self.month,
            PillarPosition::Day => &self.day,
            PillarPosition::Hour => &self.hour,
        }
    }

    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> PillarMap<U> {
        PillarMap {
            year: f(&self.year),
            month: f(&self.month),
            day: f(&self.day),
            hour: f(&self.hour),
        }
    }

    /// `(position, value)` pairs in reading order.
    pub fn iter(&self) -> impl Iterator<Item = (PillarPosition, &T)> {
        ALL_POSITIONS.into_iter().map(move |p| (p, self.get(p)))
    }
}

impl<T> Index<PillarPosition> for PillarMap<T> {
    type Output = T;

    fn index(&self, position: PillarPosition) -> &T {
        self.get(position)
    }
}

/// Year, month, day and hour pillars of one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FourPillars {
    pillars: PillarMap<Pillar>,
}

impl FourPillars {
    pub const fn new(year: Pillar, month: Pillar, day: Pillar, hour: Pillar) -> Self {
        Self {
            pillars: PillarMap {
                year,
                month,
                day,
                hour,
            },
        }
    }

    pub const fn year(&self) -> Pillar {
        self.pillars.year
    }

    pub const fn month(&self) -> Pillar {
        self.pillars.month
    }

    pub const fn day(&self) -> Pillar {
        self.pillars.day
    }

    pub const fn hour(&self) -> Pillar {
        self.pillars.hour
    }

    pub fn get(&self, position: PillarPosition) -> Pillar {
        *self.pillars.get(position)
    }

    /// The day stem (日干), the reference point of every relation.
    pub const fn day_master(&self) -> Stem {
        self.pillars.day.stem()
    }

    pub fn as_map(&self) -> &PillarMap<Pillar> {
        &self.pillars
    }

    pub fn stems(&self) -> PillarMap<Stem> {
        self.pillars.map(|p| p.stem())
    }

    pub fn branches(&self) -> PillarMap<Branch> {
        self.pillars.map(|p| p.branch())
    }

    pub fn iter(&self) -> impl Iterator<Item = (PillarPosition, Pillar)> + '_ {
        self.pillars.iter().map(|(pos, p)| (pos, *p))
    }
}

impl Display for FourPillars {
    /// Year, month, day, hour separated by spaces, e.g. `癸卯 甲寅 丙午 戊子`.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.year(),
            self.month(),
            self.day(),
            self.hour()
        )
    }
}
