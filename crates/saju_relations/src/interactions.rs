//! Pairwise earthly-branch interactions (合沖害破刑).

use saju_cycle::{Branch, FourPillars, PillarPosition};

/// One kind of interaction between two branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BranchRelation {
    /// 六合
    Combination,
    /// 六沖
    Clash,
    /// 六害
    Harm,
    /// 破
    Destruction,
    /// 刑 (including self-punishment of 辰午酉亥)
    Punishment,
}

impl BranchRelation {
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Combination => "合",
            Self::Clash => "沖",
            Self::Harm => "害",
            Self::Destruction => "破",
            Self::Punishment => "刑",
        }
    }

    pub const fn korean(self) -> &'static str {
        match self {
            Self::Combination => "합",
            Self::Clash => "충",
            Self::Harm => "해",
            Self::Destruction => "파",
            Self::Punishment => "형",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Combination => "combination",
            Self::Clash => "clash",
            Self::Harm => "harm",
            Self::Destruction => "destruction",
            Self::Punishment => "punishment",
        }
    }
}

/// Destruction partner of each branch.
const DESTRUCTION_PARTNER: [u8; 12] = [9, 4, 11, 6, 1, 8, 3, 10, 5, 0, 7, 2];

/// Bitmask of branches each branch punishes: 寅巳申, 丑戌未, 子卯, and
/// 辰午酉亥 on themselves.
#[rustfmt::skip]
const PUNISHMENT_MASK: [u16; 12] = [
    1 << 3,              // 子 ↔ 卯
    1 << 7 | 1 << 10,    // 丑 ↔ 未 戌
    1 << 5 | 1 << 8,     // 寅 ↔ 巳 申
    1 << 0,              // 卯 ↔ 子
    1 << 4,              // 辰 self
    1 << 2 | 1 << 8,     // 巳 ↔ 寅 申
    1 << 6,              // 午 self
    1 << 1 | 1 << 10,    // 未 ↔ 丑 戌
    1 << 2 | 1 << 5,     // 申 ↔ 寅 巳
    1 << 9,              // 酉 self
    1 << 1 | 1 << 7,     // 戌 ↔ 丑 未
    1 << 11,             // 亥 self
];

/// All interactions between two branches, in [`BranchRelation`] order.
/// Symmetric in its arguments.
pub fn branch_relations(a: Branch, b: Branch) -> Vec<BranchRelation> {
    let (x, y) = (a.index(), b.index());
    let sum = (x + y) % 12;
    let diff = (x + 12 - y) % 12;
    let mut out = Vec::new();
    if sum == 1 {
        out.push(BranchRelation::Combination);
    }
    if diff == 6 {
        out.push(BranchRelation::Clash);
    }
    if sum == 7 {
        out.push(BranchRelation::Harm);
    }
    if DESTRUCTION_PARTNER[x as usize] == y {
        out.push(BranchRelation::Destruction);
    }
    if PUNISHMENT_MASK[x as usize] & (1 << y) != 0 {
        out.push(BranchRelation::Punishment);
    }
    out
}

/// Interactions found between two pillars' branches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchInteraction {
    pub first: PillarPosition,
    pub second: PillarPosition,
    pub relations: Vec<BranchRelation>,
}

/// The six unordered pillar pairs, in reading order.
pub const PILLAR_PAIRS: [(PillarPosition, PillarPosition); 6] = [
    (PillarPosition::Year, PillarPosition::Month),
    (PillarPosition::Year, PillarPosition::Day),
    (PillarPosition::Year, PillarPosition::Hour),
    (PillarPosition::Month, PillarPosition::Day),
    (PillarPosition::Month, PillarPosition::Hour),
    (PillarPosition::Day, PillarPosition::Hour),
];

/// Interactions over the six pillar pairs; pairs with none are omitted.
pub fn pillar_interactions(pillars: &FourPillars) -> Vec<BranchInteraction> {
    PILLAR_PAIRS
        .iter()
        .filter_map(|&(first, second)| {
            let relations =
                branch_relations(pillars.get(first).branch(), pillars.get(second).branch());
            (!relations.is_empty()).then_some(BranchInteraction {
                first,
                second,
                relations,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use saju_cycle::ALL_BRANCHES;

    #[test]
    fn symmetric_over_all_pairs() {
        for a in ALL_BRANCHES {
            for b in ALL_BRANCHES {
                assert_eq!(branch_relations(a, b), branch_relations(b, a), "{a}{b}");
            }
        }
    }

    #[test]
    fn six_of_each_pairwise_kind() {
        let count = |rel: BranchRelation| {
            let mut n = 0;
            for (i, a) in ALL_BRANCHES.iter().enumerate() {
                for b in &ALL_BRANCHES[i + 1..] {
                    if branch_relations(*a, *b).contains(&rel) {
                        n += 1;
                    }
                }
            }
            n
        };
        assert_eq!(count(BranchRelation::Combination), 6);
        assert_eq!(count(BranchRelation::Clash), 6);
        assert_eq!(count(BranchRelation::Harm), 6);
        assert_eq!(count(BranchRelation::Destruction), 6);
    }

    #[test]
    fn known_pairs() {
        use Branch::*;
        assert_eq!(branch_relations(Zi, Chou), vec![BranchRelation::Combination]);
        assert_eq!(branch_relations(Zi, Wu), vec![BranchRelation::Clash]);
        assert_eq!(branch_relations(Zi, Wei), vec![BranchRelation::Harm]);
        assert_eq!(branch_relations(Zi, You), vec![BranchRelation::Destruction]);
        assert_eq!(branch_relations(Zi, Mao), vec![BranchRelation::Punishment]);
        // 寅巳: harm and punishment; 巳申: combination, destruction, punishment
        assert_eq!(
            branch_relations(Yin, Si),
            vec![BranchRelation::Harm, BranchRelation::Punishment]
        );
        assert_eq!(
            branch_relations(Si, Shen),
            vec![
                BranchRelation::Combination,
                BranchRelation::Destruction,
                BranchRelation::Punishment
            ]
        );
        assert_eq!(branch_relations(Wu, Wu), vec![BranchRelation::Punishment]);
        assert!(branch_relations(Zi, Zi).is_empty());
    }

    #[test]
    fn interactions_over_pillars() {
        let fp = FourPillars::new(
            "甲子".parse().unwrap(),
            "丙午".parse().unwrap(),
            "乙丑".parse().unwrap(),
            "丙子".parse().unwrap(),
        );
        let got = pillar_interactions(&fp);
        let pairs: Vec<_> = got.iter().map(|i| (i.first, i.second)).collect();
        assert_eq!(
            pairs,
            vec![
                (PillarPosition::Year, PillarPosition::Month),
                (PillarPosition::Year, PillarPosition::Day),
                (PillarPosition::Month, PillarPosition::Day),
                (PillarPosition::Month, PillarPosition::Hour),
                (PillarPosition::Day, PillarPosition::Hour),
            ]
        );
        assert_eq!(got[0].relations, vec![BranchRelation::Clash]);
    }
}
