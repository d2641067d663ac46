//! # Point Set
//!
//! An ordered collection of points, deduplicated by coordinate.
//!
//! Invariants:
//! - No two points share the same (x, y)
//! - Inserting at an occupied coordinate is a no-op: the first point wins,
//!   label included
//! - Traversal order is fixed by the set's [`Order`]
//!
//! Every operation is a linear scan. Sets here hold a few dozen points
//! (one map worth of antennas), and the resolver's cost model depends on it.
//!
//! Mutation comes in two shapes. The value-returning form consumes the set
//! and hands back the new one:
//!
//! ```
//! use antenna_map::PointSet;
//! let set = PointSet::new().insert('A', 1, 0).insert('0', 2, 1);
//! let set = set.remove(2, 1);
//! assert_eq!(set.len(), 1);
//! ```
//!
//! The `_mut` wrappers do the same in place.

use serde::ser::{Serialize, Serializer};
use tracing::debug;

use super::point::Point;

/// Traversal order policy of a [`PointSet`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Order {
    /// Non-decreasing by x, ties broken by non-decreasing y
    #[default]
    Sorted,
    /// Most recently inserted first
    Stack,
}

/// Diagnostic produced while pruning a set against another
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    /// An antenna was removed because an effect covers its cell
    Removed { label: char, x: usize, y: usize },
    /// The effect set was empty, nothing was removed
    NoEffects,
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::Removed { label, x, y } => write!(
                f,
                "[REMOVED] Antenna {} at ({},{}) sits on an effect location",
                label, x, y
            ),
            Notice::NoEffects => write!(f, "[WARNING] Effect list is empty - nothing removed"),
        }
    }
}

/// Ordered, coordinate-deduplicated set of points
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PointSet {
    points: Vec<Point>,
    order: Order,
}

impl PointSet {
    /// Create an empty sorted set
    pub fn new() -> Self {
        Self::with_order(Order::Sorted)
    }

    /// Create an empty set with the given order policy
    pub fn with_order(order: Order) -> Self {
        Self {
            points: Vec::new(),
            order,
        }
    }

    pub fn order(&self) -> Order {
        self.order
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate in the set's traversal order
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Points as a slice, in traversal order
    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    /// True iff a point occupies (x, y)
    pub fn contains(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_some()
    }

    /// The point at (x, y), if any
    pub fn get(&self, x: usize, y: usize) -> Option<&Point> {
        self.points.iter().find(|p| p.is_at(x, y))
    }

    /// Insert a point, returning the updated set
    ///
    /// If (x, y) is already occupied the set comes back unchanged.
    pub fn insert(mut self, label: char, x: usize, y: usize) -> Self {
        self.insert_mut(label, x, y);
        self
    }

    /// In-place insert. Returns true when a point was added.
    pub fn insert_mut(&mut self, label: char, x: usize, y: usize) -> bool {
        self.push(Point::new(label, x, y))
    }

    /// In-place insert of an existing point. Returns true when it was added.
    pub fn push(&mut self, point: Point) -> bool {
        if self.points.iter().any(|p| p.same_location(&point)) {
            return false;
        }

        let at = match self.order {
            // First position whose coordinate is not less than the new one
            Order::Sorted => self
                .points
                .iter()
                .position(|p| p.coord() >= point.coord())
                .unwrap_or(self.points.len()),
            Order::Stack => 0,
        };
        self.points.insert(at, point);
        true
    }

    /// Remove the point at (x, y), returning the updated set
    ///
    /// Absent coordinates leave the set unchanged.
    pub fn remove(mut self, x: usize, y: usize) -> Self {
        self.remove_mut(x, y);
        self
    }

    /// In-place remove. Returns the detached point, if there was one.
    pub fn remove_mut(&mut self, x: usize, y: usize) -> Option<Point> {
        let at = self.points.iter().position(|p| p.is_at(x, y))?;
        Some(self.points.remove(at))
    }

    /// Remove every antenna whose cell is also present in `effects`
    ///
    /// Points labeled `#` are never removed. One [`Notice::Removed`] is
    /// produced per removal; an empty `effects` yields a single
    /// [`Notice::NoEffects`] and no removals. Pruning an empty set produces
    /// no notices at all.
    pub fn remove_where(mut self, effects: &PointSet) -> (Self, Vec<Notice>) {
        let notices = self.remove_where_mut(effects);
        (self, notices)
    }

    /// In-place form of [`PointSet::remove_where`]
    pub fn remove_where_mut(&mut self, effects: &PointSet) -> Vec<Notice> {
        let mut notices = Vec::new();
        if self.is_empty() {
            return notices;
        }
        if effects.is_empty() {
            debug!("effect list is empty, no antennas removed");
            notices.push(Notice::NoEffects);
            return notices;
        }

        // The cursor only advances past kept points; after a removal the
        // successor has already shifted into the current slot.
        let mut i = 0;
        while i < self.points.len() {
            let current = self.points[i];
            if !current.is_effect() && effects.contains(current.x(), current.y()) {
                debug!(
                    label = %current.label(),
                    x = current.x(),
                    y = current.y(),
                    "removed antenna on effect location"
                );
                notices.push(Notice::Removed {
                    label: current.label(),
                    x: current.x(),
                    y: current.y(),
                });
                self.points.remove(i);
            } else {
                i += 1;
            }
        }
        notices
    }

    /// One display line per point, in traversal order
    pub fn render(&self) -> Vec<String> {
        self.points.iter().map(|p| p.to_string()).collect()
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl Extend<Point> for PointSet {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        for point in iter {
            self.push(point);
        }
    }
}

impl FromIterator<Point> for PointSet {
    /// Collects into a sorted set; later duplicates are dropped
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        let mut set = PointSet::new();
        set.extend(iter);
        set
    }
}

impl Serialize for PointSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.points.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(set: &PointSet) -> Vec<(usize, usize)> {
        set.iter().map(|p| p.coord()).collect()
    }

    #[test]
    fn test_empty_set() {
        let set = PointSet::new();
        assert!(set.is_empty());
        assert_eq!(set.order(), Order::Sorted);
        assert!(!set.contains(0, 0));
        assert!(set.render().is_empty());
    }

    #[test]
    fn test_insert_keeps_sorted_order() {
        let set = PointSet::new()
            .insert('A', 5, 6)
            .insert('B', 0, 11)
            .insert('C', 5, 2)
            .insert('D', 10, 0)
            .insert('E', 0, 3);

        assert_eq!(coords(&set), vec![(0, 3), (0, 11), (5, 2), (5, 6), (10, 0)]);
    }

    #[test]
    fn test_duplicate_insert_first_wins() {
        let mut set = PointSet::new().insert('A', 2, 2);
        assert!(!set.insert_mut('Z', 2, 2));
        let set = set.insert('#', 2, 2);

        assert_eq!(set.len(), 1);
        assert_eq!(set.get(2, 2).map(|p| p.label()), Some('A'));
    }

    #[test]
    fn test_push_rejects_same_location_any_label() {
        let mut set = PointSet::new();
        assert!(set.push(Point::new('A', 4, 4)));
        assert!(!set.push(Point::effect(4, 4)));
        assert!(set.push(Point::effect(4, 5)));
        assert_eq!(set.render(), vec!["Antenna: A (4, 4)", "Effect: # (4, 5)"]);
    }

    #[test]
    fn test_stack_order_prepends() {
        let set = PointSet::with_order(Order::Stack)
            .insert('A', 5, 6)
            .insert('B', 0, 1)
            .insert('C', 9, 9)
            .insert('D', 0, 1);

        assert_eq!(coords(&set), vec![(9, 9), (0, 1), (5, 6)]);
        assert_eq!(set.get(0, 1).map(|p| p.label()), Some('B'));
    }

    #[test]
    fn test_remove_present() {
        let mut set = PointSet::new().insert('A', 1, 1).insert('B', 2, 2);
        let removed = set.remove_mut(1, 1);
        assert_eq!(removed, Some(Point::new('A', 1, 1)));
        assert_eq!(coords(&set), vec![(2, 2)]);

        let set = set.remove(2, 2);
        assert!(set.is_empty());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        for order in [Order::Sorted, Order::Stack] {
            let set = PointSet::with_order(order)
                .insert('A', 1, 1)
                .insert('B', 0, 4)
                .insert('C', 3, 0);
            let before = set.clone();

            let after = set.remove(7, 7).remove(1, 0);
            assert_eq!(after, before);
        }
    }

    #[test]
    fn test_sorted_after_mixed_operations() {
        let mut set = PointSet::new();
        let ops = [(3, 2), (5, 6), (2, 8), (0, 11), (10, 10), (5, 0), (2, 2)];
        for (i, (x, y)) in ops.iter().enumerate() {
            set.insert_mut('O', *x, *y);
            if i % 3 == 2 {
                set.remove_mut(ops[i - 1].0, ops[i - 1].1);
            }
        }

        let seen = coords(&set);
        let mut sorted = seen.clone();
        sorted.sort();
        assert_eq!(seen, sorted);
    }

    #[test]
    fn test_remove_where_removes_covered_antennas() {
        let antennas = PointSet::new()
            .insert('A', 1, 1)
            .insert('B', 2, 2)
            .insert('C', 3, 3)
            .insert('D', 4, 4);
        let effects = PointSet::new()
            .insert('#', 2, 2)
            .insert('#', 3, 3)
            .insert('#', 9, 9);

        let (antennas, notices) = antennas.remove_where(&effects);

        assert_eq!(coords(&antennas), vec![(1, 1), (4, 4)]);
        assert_eq!(
            notices,
            vec![
                Notice::Removed { label: 'B', x: 2, y: 2 },
                Notice::Removed { label: 'C', x: 3, y: 3 },
            ]
        );
    }

    #[test]
    fn test_remove_where_adjacent_removals_in_stack_order() {
        let mut antennas = PointSet::with_order(Order::Stack)
            .insert('A', 1, 1)
            .insert('B', 2, 2)
            .insert('C', 3, 3);
        let effects: PointSet = [Point::effect(1, 1), Point::effect(2, 2), Point::effect(3, 3)]
            .into_iter()
            .collect();

        let notices = antennas.remove_where_mut(&effects);
        assert!(antennas.is_empty());
        assert_eq!(notices.len(), 3);
        assert_eq!(notices[0], Notice::Removed { label: 'C', x: 3, y: 3 });
    }

    #[test]
    fn test_remove_where_skips_effect_labels() {
        let set = PointSet::new().insert('#', 2, 2).insert('A', 3, 3);
        let effects = PointSet::new().insert('#', 2, 2).insert('#', 3, 3);

        let (set, notices) = set.remove_where(&effects);
        assert_eq!(coords(&set), vec![(2, 2)]);
        assert_eq!(notices.len(), 1);
    }

    #[test]
    fn test_remove_where_empty_effects_single_notice() {
        let set = PointSet::new().insert('A', 1, 1).insert('B', 2, 2);
        let before = set.clone();

        let (set, notices) = set.remove_where(&PointSet::new());
        assert_eq!(set, before);
        assert_eq!(notices, vec![Notice::NoEffects]);
    }

    #[test]
    fn test_remove_where_on_empty_set() {
        let effects = PointSet::new().insert('#', 0, 0);
        let (set, notices) = PointSet::new().remove_where(&effects);
        assert!(set.is_empty());
        assert!(notices.is_empty());
    }

    #[test]
    fn test_render_lines_follow_traversal_order() {
        let set = PointSet::new().insert('#', 4, 0).insert('A', 1, 2);
        assert_eq!(set.render(), vec!["Antenna: A (1, 2)", "Effect: # (4, 0)"]);

        let stack = PointSet::with_order(Order::Stack).insert('#', 4, 0).insert('A', 1, 2);
        assert_eq!(stack.render(), vec!["Antenna: A (1, 2)", "Effect: # (4, 0)"]);

        let stack = PointSet::with_order(Order::Stack).insert('A', 1, 2).insert('#', 4, 0);
        assert_eq!(stack.render(), vec!["Effect: # (4, 0)", "Antenna: A (1, 2)"]);
    }

    #[test]
    fn test_from_iter_dedups() {
        let set: PointSet = vec![Point::new('A', 1, 1), Point::new('B', 1, 1), Point::new('C', 0, 5)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(1, 1).map(|p| p.label()), Some('A'));
        assert_eq!(coords(&set), vec![(0, 5), (1, 1)]);
    }

    #[test]
    fn test_notice_display() {
        let removed = Notice::Removed { label: 'O', x: 3, y: 2 };
        assert_eq!(
            removed.to_string(),
            "[REMOVED] Antenna O at (3,2) sits on an effect location"
        );
        assert!(Notice::NoEffects.to_string().starts_with("[WARNING]"));
    }

    #[test]
    fn test_serialize_as_sequence() {
        let set = PointSet::new().insert('A', 1, 0);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"[{"label":"A","x":1,"y":0}]"#);
    }
}
