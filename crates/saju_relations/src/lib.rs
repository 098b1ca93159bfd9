//! Relations read off a set of four pillars.
//!
//! This crate provides:
//! - Ten Gods (十神) of stems and of branches' primary hidden stems
//! - Pairwise branch interactions (合沖害破刑)
//! - Twelve Spirits markers from the six-clash and six-harm tables
//! - Trine spirits (神煞) from a year or day basis
//! - Element balance with main and secondary elements
//!
//! Everything here is a pure function of the pillars.

pub mod deriver;
pub mod elements;
pub mod interactions;
pub mod shen_sha;
pub mod spirits;
pub mod ten_gods;

pub use deriver::{DeriveConfig, RelationalDeriver, Relations, derive};
pub use elements::ElementBalance;
pub use interactions::{
    BranchInteraction, BranchRelation, PILLAR_PAIRS, branch_relations, pillar_interactions,
};
pub use shen_sha::{ALL_SHEN_SHA, ShenSha, SpiritBasis, pillar_shen_sha, shen_sha};
pub use spirits::{SpiritMarker, pillar_spirits, spirit_marker};
pub use ten_gods::{TenGod, ten_god};
