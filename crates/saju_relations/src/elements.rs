//! Elemental balance of the eight visible characters.

use saju_cycle::{ALL_ELEMENTS, Element, FourPillars};

/// Count of each element over four stems and four branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ElementBalance {
    counts: [u8; 5],
}

impl ElementBalance {
    pub fn of(pillars: &FourPillars) -> Self {
        let mut counts = [0u8; 5];
        for (_, p) in pillars.iter() {
            counts[p.stem().element().index() as usize] += 1;
            counts[p.branch().element().index() as usize] += 1;
        }
        Self { counts }
    }

    pub fn count(&self, element: Element) -> u8 {
        self.counts[element.index() as usize]
    }

    /// `(element, count)` in generating order from Wood.
    pub fn iter(&self) -> impl Iterator<Item = (Element, u8)> + '_ {
        ALL_ELEMENTS.iter().map(|e| (*e, self.count(*e)))
    }

    /// Elements with a count of zero.
    pub fn missing(&self) -> Vec<Element> {
        self.iter().filter(|(_, n)| *n == 0).map(|(e, _)| e).collect()
    }

    /// The most frequent element other than `main`, scanning in generating
    /// order from `main` so the first of tied elements wins. `None` when
    /// only `main` is present.
    pub fn secondary(&self, main: Element) -> Option<Element> {
        let mut best: Option<(Element, u8)> = None;
        for step in 1..5 {
            let e = Element::from_index(main.index() + step);
            let n = self.count(e);
            if n > 0 && best.is_none_or(|(_, b)| n > b) {
                best = Some((e, n));
            }
        }
        best.map(|(e, _)| e)
    }
}
