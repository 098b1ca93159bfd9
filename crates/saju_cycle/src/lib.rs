//! Symbolic building blocks of the sexagenary (干支) system.
//!
//! This crate provides:
//! - The five elements and yin/yang polarity
//! - The 10 heavenly stems and 12 earthly branches (with hidden stems)
//! - Validated stem-branch [`Pillar`]s and the 60-position cycle arithmetic
//! - [`FourPillars`] and per-slot [`PillarMap`] containers
//!
//! Polarity follows index parity: even stems and branches are Yang.

pub mod branch;
pub mod element;
pub mod error;
pub mod four_pillars;
pub mod sexagenary;
pub mod stem;

pub use branch::{ALL_BRANCHES, Branch};
pub use element::{ALL_ELEMENTS, Element, Polarity};
pub use error::ParseCycleError;
pub use four_pillars::{ALL_POSITIONS, FourPillars, PillarMap, PillarPosition};
pub use sexagenary::{JIA_ZI, Pillar, cycle_wrap};
pub use stem::{ALL_STEMS, Stem};
