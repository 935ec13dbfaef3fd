#![forbid(unsafe_code)]

//! Orbital layout of the active node's children.
//!
//! Coordinates are percentages of a square container: `(0, 0)` is the
//! top-left corner, `(50, 50)` the center. Children sit on a circle of
//! radius [`ORBIT_RADIUS`] around the center, the first one straight up,
//! the rest clockwise at equal angular spacing.

/// Diameter of the center bubble, in percent of the container side.
pub const CENTER_DIAMETER: f64 = 40.0;

/// Radius of the orbit ring, in percent of the container side.
pub const ORBIT_RADIUS: f64 = CENTER_DIAMETER / 2.0;

/// Angle of the first child, in degrees (straight up).
pub const START_ANGLE_DEG: f64 = -90.0;

const CENTER: f64 = 50.0;

/// Size class of the child bubbles, picked from the sibling count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChildSize {
    /// Up to 5 children.
    Large,
    /// 6 to 8 children.
    Medium,
    /// More than 8 children.
    Small,
}

impl ChildSize {
    /// Size class for `count` siblings.
    #[must_use]
    pub const fn for_count(count: usize) -> Self {
        match count {
            0..=5 => Self::Large,
            6..=8 => Self::Medium,
            _ => Self::Small,
        }
    }

    /// Bubble diameter in percent of the container side.
    #[must_use]
    pub const fn diameter(self) -> f64 {
        match self {
            Self::Large => 22.0,
            Self::Medium => 15.0,
            Self::Small => 10.0,
        }
    }
}

/// Angle of child `index` out of `count`, in degrees.
#[must_use]
pub fn orbit_angle(index: usize, count: usize) -> f64 {
    if count == 0 {
        return START_ANGLE_DEG;
    }
    START_ANGLE_DEG + (360.0 / count as f64) * index as f64
}

/// Placement of one child on the ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitPosition {
    /// Index among the siblings.
    pub index: usize,
    /// Angle in degrees, measured clockwise from the positive x axis.
    pub angle_deg: f64,
    /// Center x, percent.
    pub x: f64,
    /// Center y, percent.
    pub y: f64,
}

/// Positions and size class for `n > 0` children.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitLayout {
    radius: f64,
    size: ChildSize,
    positions: Vec<OrbitPosition>,
}

impl OrbitLayout {
    /// Layout for `count` children on the default ring. `None` when there
    /// are no children.
    #[must_use]
    pub fn compute(count: usize) -> Option<Self> {
        Self::with_radius(count, ORBIT_RADIUS)
    }

    /// Layout for `count` children on a ring of the given radius.
    #[must_use]
    pub fn with_radius(count: usize, radius: f64) -> Option<Self> {
        if count == 0 {
            return None;
        }
        let positions = (0..count)
            .map(|index| {
                let angle_deg = orbit_angle(index, count);
                let rad = angle_deg.to_radians();
                OrbitPosition {
                    index,
                    angle_deg,
                    x: CENTER + radius * rad.cos(),
                    y: CENTER + radius * rad.sin(),
                }
            })
            .collect();
        Some(Self {
            radius,
            size: ChildSize::for_count(count),
            positions,
        })
    }

    /// Ring radius in percent.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Size class shared by every child.
    #[must_use]
    pub fn size(&self) -> ChildSize {
        self.size
    }

    /// Child positions in sibling order.
    #[must_use]
    pub fn positions(&self) -> &[OrbitPosition] {
        &self.positions
    }

    /// Number of children laid out.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always false: empty layouts are not constructed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Index of the child whose center is closest to `(x, y)`.
    ///
    /// Ties go to the lower index.
    #[must_use]
    pub fn nearest(&self, x: f64, y: f64) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for pos in &self.positions {
            let d = (pos.x - x).powi(2) + (pos.y - y).powi(2);
            if best.is_none_or(|(_, bd)| d < bd) {
                best = Some((pos.index, d));
            }
        }
        best.map(|(i, _)| i)
    }
}
