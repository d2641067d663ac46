//! # Effect Resolution
//!
//! Derives effect locations from antennas that share a frequency.
//!
//! For every ordered pair (a1, a2) of distinct antennas with the same label:
//!
//! ```text
//! d  = a2 - a1
//! P1 = a1 - d        (beyond a1, away from a2)
//! P2 = a2 + d        (beyond a2, away from a1)
//! ```
//!
//! The pair only counts when `d` is aligned (see [`Alignment`]). If either
//! candidate lands on any antenna, both are discarded. Otherwise each candidate
//! inside the domain is added as a `#` point.
//!
//! Each unordered pair is visited twice, once per direction. The collision
//! test is all-or-nothing per visit, so the two visits can disagree.

use tracing::debug;

use super::config::ResolverConfig;
use super::point::{Point, EFFECT_LABEL};
use super::point_set::PointSet;

/// How a displacement between two antennas lines up
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    /// Same column (dx == 0)
    Vertical,
    /// Same row (dy == 0)
    Horizontal,
    /// |dx| == |dy|
    Diagonal,
    /// One axis is n times the other, n in {2, 3}
    Harmonic(u8),
}

impl Alignment {
    /// Classify a displacement, testing in the order the checks short-circuit
    ///
    /// # Example
    /// ```
    /// use antenna_map::Alignment;
    /// assert_eq!(Alignment::classify(0, 3), Some(Alignment::Vertical));
    /// assert_eq!(Alignment::classify(-4, 2), Some(Alignment::Harmonic(2)));
    /// assert_eq!(Alignment::classify(2, 5), None);
    /// ```
    pub fn classify(dx: i128, dy: i128) -> Option<Self> {
        let (adx, ady) = (dx.abs(), dy.abs());
        if dx == 0 {
            Some(Alignment::Vertical)
        } else if dy == 0 {
            Some(Alignment::Horizontal)
        } else if adx == ady {
            Some(Alignment::Diagonal)
        } else if adx == 2 * ady || 2 * adx == ady {
            Some(Alignment::Harmonic(2))
        } else if adx == 3 * ady || 3 * adx == ady {
            Some(Alignment::Harmonic(3))
        } else {
            None
        }
    }
}

/// Candidate effect cells for the ordered pair (a1, a2), or None when unaligned
///
/// Arithmetic is done in `i128`, wide enough for any pair of `usize`
/// coordinates and their extrapolations.
pub fn candidates(a1: &Point, a2: &Point) -> Option<[(i128, i128); 2]> {
    let (x1, y1) = (a1.x() as i128, a1.y() as i128);
    let (x2, y2) = (a2.x() as i128, a2.y() as i128);
    let (dx, dy) = (x2 - x1, y2 - y1);

    Alignment::classify(dx, dy)?;
    Some([(x1 - dx, y1 - dy), (x2 + dx, y2 + dy)])
}

/// True when any antenna occupies one of the candidate cells
fn collides(antennas: &PointSet, cells: &[(i128, i128); 2]) -> bool {
    antennas.iter().any(|p| {
        let at = (p.x() as i128, p.y() as i128);
        at == cells[0] || at == cells[1]
    })
}

/// Computes effect locations for a set of antennas
#[derive(Clone, Debug, Default)]
pub struct EffectResolver {
    config: ResolverConfig,
}

impl EffectResolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve the effect set for `antennas`
    ///
    /// Pure: the result depends only on the labels and coordinates in
    /// `antennas`. Zero or one antenna yields an empty set.
    pub fn resolve(&self, antennas: &PointSet) -> PointSet {
        let mut effects = PointSet::with_order(self.config.order);
        let points = antennas.as_slice();
        let mut aligned = 0usize;
        let mut blocked = 0usize;

        for (i, a1) in points.iter().enumerate() {
            for (j, a2) in points.iter().enumerate() {
                if i == j || a1.label() != a2.label() {
                    continue;
                }
                let Some(cells) = candidates(a1, a2) else {
                    continue;
                };
                aligned += 1;

                if collides(antennas, &cells) {
                    blocked += 1;
                    continue;
                }

                for (cx, cy) in cells {
                    let Some((x, y)) = self.config.bounds.admit(cx, cy) else {
                        continue;
                    };
                    if !effects.contains(x, y) {
                        debug!(x, y, label = %a1.label(), "effect location");
                        effects.insert_mut(EFFECT_LABEL, x, y);
                    }
                }
            }
        }

        debug!(
            antennas = points.len(),
            aligned,
            blocked,
            effects = effects.len(),
            "resolved effects"
        );
        effects
    }
}

/// Resolve with the default configuration
pub fn resolve(antennas: &PointSet) -> PointSet {
    EffectResolver::default().resolve(antennas)
}
