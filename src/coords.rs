//! Pure coordinate math shared by the program grid and the memory grid:
//! axial/cubic conversion, the program grid's row-major index, the memory
//! grid's ring-ordered radial index, and a handful of small helpers.

use std::{fmt, ops::{Add, AddAssign, Sub, SubAssign}};

/// An axial coordinate pair `(p, q)`. The third cubic component
/// `z = -p - q` is always derived, never stored.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct PointAxial(pub isize, pub isize);

impl PointAxial {
    /// The derived cubic triple `(x, y, z) = (p, q, -p-q)`.
    pub fn cubic(self) -> (isize, isize, isize) {
        let PointAxial(p, q) = self;
        (p, q, -p - q)
    }

    /// `(|x|+|y|+|z|)/2`, the hex-distance from the origin.
    pub fn ring(self) -> usize {
        let (x, y, z) = self.cubic();
        ((x.abs() + y.abs() + z.abs()) / 2) as usize
    }
}

impl Add for PointAxial {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        PointAxial(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl AddAssign for PointAxial {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
        self.1 += rhs.1;
    }
}

impl Sub for PointAxial {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        PointAxial(self.0 - rhs.0, self.1 - rhs.1)
    }
}

impl SubAssign for PointAxial {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
        self.1 -= rhs.1;
    }
}

impl fmt::Display for PointAxial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

/// One of the three cubic axes that a memory-cell edge can be indexed by.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Index into a cubic triple: `X -> 0, Y -> 1, Z -> 2`.
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Inverse of `index`.
    pub fn from_index(i: usize) -> Axis {
        match i % 3 {
            0 => Axis::X,
            1 => Axis::Y,
            _ => Axis::Z,
        }
    }

    /// The axis reached by stepping `delta` sextants around (`+1` or `-1`).
    pub fn shifted(self, delta: isize) -> Axis {
        Axis::from_index(mathematical_mod(self.index() as isize + delta, 3) as usize)
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        })
    }
}

/// Euclidean-style modulus: the result always has the sign of `b`
/// (or is zero), unlike Rust's `%` which follows the sign of `a`.
pub fn mathematical_mod(a: isize, b: isize) -> isize {
    let r = a % b;
    if r != 0 && (r < 0) != (b < 0) {
        r + b
    } else {
        r
    }
}

/// Number of cells in a regular side-`side` hexagon (a centered hexagonal
/// number): `3*side*(side-1) + 1`.
pub fn hex_area(side: usize) -> usize {
    3 * side * side.saturating_sub(1) + 1
}

/// Row-major index of `(p, q)` within a padded side-`side` program hexagon,
/// or `None` if the coordinate falls outside it.
///
/// `index = 3*side*(side-1)/2 + q + (-z)*(2*side-1) + z*(|z|+1)/2`
/// where `z = -p - q`, defined only when the coordinate's ring is
/// `<= side - 1`.
pub fn axial_to_program_index(p: isize, q: isize, side: usize) -> Option<usize> {
    let point = PointAxial(p, q);
    let (_, _, z) = point.cubic();
    let r = side as isize;
    if point.ring() > side.saturating_sub(1) {
        return None;
    }
    let idx = 3 * r * (r - 1) / 2 + q + (-z) * (2 * r - 1) + z * (z.abs() + 1) / 2;
    Some(idx as usize)
}

/// Ring-ordered radial index of `(p, q)`: ring 0 is the origin; ring `r >= 1`
/// starts at `3*r*(r-1)+1` and enumerates its `6r` cells clockwise starting
/// from the cell with `x <= 0, y < 0`. A total function over all axial
/// coordinates.
pub fn axial_to_radial_index(p: isize, q: isize) -> usize {
    let point = PointAxial(p, q);
    let r = point.ring();
    if r == 0 {
        return 0;
    }
    let (x, y, z) = point.cubic();
    let ri = r as isize;
    let base = 3 * ri * (ri - 1) + 1;
    // Six sextants, checked in priority order so that the corner cells
    // (which satisfy two adjacent predicates) resolve to a single index.
    let (segment, offset) = if z == ri && x > -ri {
        (0, -x)
    } else if x == -ri && z > 0 {
        (1, ri - z)
    } else if y == ri && x > -ri {
        (2, x + ri)
    } else if z == -ri && x < ri {
        (3, x)
    } else if x == ri && z < 0 {
        (4, z + ri)
    } else {
        debug_assert!(y == -ri && x > 0);
        (5, ri - x)
    };
    (base + segment * ri + offset) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn hex_area_matches_formula() {
        assert_eq!(hex_area(1), 1);
        assert_eq!(hex_area(2), 7);
        assert_eq!(hex_area(3), 19);
    }

    #[test]
    fn program_index_is_bijective_for_each_side() {
        for side in 1..=6usize {
            let mut seen = HashSet::new();
            let mut count = 0;
            for p in -(side as isize - 1)..=(side as isize - 1) {
                for q in -(side as isize - 1)..=(side as isize - 1) {
                    if let Some(idx) = axial_to_program_index(p, q, side) {
                        assert!(idx < hex_area(side));
                        assert!(seen.insert(idx), "duplicate index {idx} at side {side}");
                        count += 1;
                    }
                }
            }
            assert_eq!(count, hex_area(side));
        }
    }

    #[test]
    fn radial_index_is_bijective_and_ring_ordered() {
        let mut seen = HashSet::new();
        let mut points = Vec::new();
        for p in -6..=6isize {
            for q in -6..=6isize {
                if PointAxial(p, q).ring() <= 6 {
                    points.push((p, q));
                }
            }
        }
        for &(p, q) in &points {
            let idx = axial_to_radial_index(p, q);
            assert!(seen.insert(idx), "duplicate radial index for ({p}, {q})");
        }
        for &(a, b) in &points {
            for &(c, d) in &points {
                let ring_a = PointAxial(a, b).ring();
                let ring_c = PointAxial(c, d).ring();
                if ring_a < ring_c {
                    assert!(axial_to_radial_index(a, b) < axial_to_radial_index(c, d));
                }
            }
        }
    }

    #[test]
    fn radial_index_of_origin_is_zero() {
        assert_eq!(axial_to_radial_index(0, 0), 0);
    }

    #[test]
    fn radial_index_covers_all_six_corners_of_a_ring() {
        let r = 4isize;
        let corners = [
            (0, -r), (-r, 0), (-r, r), (0, r), (r, 0), (r, -r),
        ];
        let base = 3 * r * (r - 1) + 1;
        let expected: Vec<isize> = (0..6).map(|s| base + s * r).collect();
        for (i, &(p, q)) in corners.iter().enumerate() {
            assert_eq!(axial_to_radial_index(p, q) as isize, expected[i]);
        }
    }

    #[test]
    fn mathematical_mod_follows_sign_of_divisor() {
        assert_eq!(mathematical_mod(-1, 6), 5);
        assert_eq!(mathematical_mod(7, 6), 1);
        assert_eq!(mathematical_mod(-7, 6), 5);
        assert_eq!(mathematical_mod(0, 6), 0);
    }
}
