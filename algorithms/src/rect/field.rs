
use {
    crate::rect::Rectangle,
    ahash::AHashSet,
    log::{debug, trace},
};

/// The remaining area of a field, stored as a set of pairwise disjoint rectangles.
///
/// Rectangles are never modified in place. Removing an area replaces every affected
/// rectangle by the pieces that remain of it.
#[derive(Clone, Debug, Default)]
pub struct RectangleField {
    rects: AHashSet<Rectangle>,
}

impl From<Rectangle> for RectangleField {
    fn from(rect: Rectangle) -> Self {
        Self::new([rect])
    }
}

impl RectangleField {
    /// Creates a field covering the given rectangles.
    ///
    /// The rectangles must not overlap.
    pub fn new(seeds: impl IntoIterator<Item = Rectangle>) -> Self {
        Self {
            rects: seeds.into_iter().collect(),
        }
    }

    pub fn rectangles(&self) -> impl Iterator<Item = &Rectangle> {
        self.rects.iter()
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    pub fn contains(&self, rect: &Rectangle) -> bool {
        self.rects.contains(rect)
    }

    pub fn total_area(&self) -> u128 {
        Rectangle::calculate_area(&self.rects)
    }

    pub fn remove(&mut self, rect: &Rectangle) {
        let hits = self.intersecting_rectangles(rect);
        trace!("Removing {} from {} rectangles", rect, hits.len());
        for hit in hits {
            self.rects.remove(&hit);
            self.rects.extend(hit.remove(rect));
        }
    }

    pub fn remove_all<'a, I>(&mut self, rects: I)
    where
        I: IntoIterator<Item = &'a Rectangle>,
    {
        for rect in rects {
            self.remove(rect);
        }
        debug!("{} rectangles remain after removal", self.rects.len());
    }

    pub fn intersecting_rectangles(&self, target: &Rectangle) -> AHashSet<Rectangle> {
        self.rects
            .iter()
            .filter(|r| r.intersection(target).is_some())
            .copied()
            .collect()
    }

    /// Partitions the rectangles into maximal groups that are connected by alignment.
    ///
    /// Two rectangles end up in the same group iff there is a chain of rectangles
    /// between them in which each neighbor aligns with the next.
    pub fn adjacent_sets(&self) -> Vec<AHashSet<Rectangle>> {
        let rects: Vec<_> = self.rects.iter().copied().collect();
        let mut groups = DisjointSets::new(rects.len());
        for (i, a) in rects.iter().enumerate() {
            for (j, b) in rects.iter().enumerate().skip(i + 1) {
                if a.aligns_with(b) {
                    groups.union(i, j);
                }
            }
        }
        let mut slots = vec![None; rects.len()];
        let mut res: Vec<AHashSet<Rectangle>> = vec![];
        for (i, rect) in rects.iter().enumerate() {
            let root = groups.find(i);
            let slot = *slots[root].get_or_insert_with(|| {
                res.push(AHashSet::new());
                res.len() - 1
            });
            res[slot].insert(*rect);
        }
        debug!("{} rectangles form {} groups", rects.len(), res.len());
        res
    }

    /// The areas of the groups returned by `adjacent_sets` in ascending order.
    pub fn grouped_areas(&self) -> Vec<u128> {
        let mut areas: Vec<_> = self
            .adjacent_sets()
            .iter()
            .map(Rectangle::calculate_area)
            .collect();
        areas.sort_unstable();
        areas
    }

    pub fn sorted_areas_as_string(&self) -> String {
        let areas: Vec<_> = self.grouped_areas().iter().map(|a| a.to_string()).collect();
        areas.join(" ")
    }
}

struct DisjointSets {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DisjointSets {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }

    fn find(&mut self, mut i: usize) -> usize {
        let mut root = i;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        while self.parent[i] != root {
            let next = self.parent[i];
            self.parent[i] = root;
            i = next;
        }
        root
    }

    fn union(&mut self, a: usize, b: usize) {
        let mut a = self.find(a);
        let mut b = self.find(b);
        if a == b {
            return;
        }
        if self.size[a] < self.size[b] {
            std::mem::swap(&mut a, &mut b);
        }
        self.parent[b] = a;
        self.size[a] += self.size[b];
    }
}
