use std::fmt;

use crate::coords::{axial_to_radial_index, hex_area, Axis, PointAxial};

/// Which side of the memory pointer's current edge to look at or move to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    fn delta(self) -> isize {
        match self {
            Side::Left => -1,
            Side::Right => 1,
        }
    }
}

/// Which endpoint of an undirected edge the memory pointer currently sits at.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Orientation {
    In,
    Out,
}

/// A directed edge of the memory grid: an axial cell, one of its three
/// edges, and which endpoint is "current".
#[derive(Clone, Copy, Debug)]
pub struct MemoryPointer {
    pub p: isize,
    pub q: isize,
    pub axis: Axis,
    pub orientation: Orientation,
}

impl MemoryPointer {
    /// The initial memory pointer: `(0, 0, Z, OUT)`.
    pub fn origin() -> MemoryPointer {
        MemoryPointer { p: 0, q: 0, axis: Axis::Z, orientation: Orientation::Out }
    }

    /// Returns the `(p, q, axis)` that `side` would move to, without
    /// mutating this pointer.
    pub fn neighbor_position(&self, side: Side) -> (isize, isize, Axis) {
        let neighbor_axis = self.axis.shifted(side.delta());
        match self.orientation {
            Orientation::In => (self.p, self.q, neighbor_axis),
            Orientation::Out => {
                let (np, nq) = shift_cell(self.p, self.q, self.axis, neighbor_axis);
                (np, nq, neighbor_axis)
            }
        }
    }

    /// Moves this pointer to the edge on `side`.
    pub fn move_side(&mut self, side: Side) {
        let (p, q, axis) = self.neighbor_position(side);
        self.orientation = match self.orientation {
            Orientation::Out => Orientation::In,
            Orientation::In => Orientation::Out,
        };
        self.p = p;
        self.q = q;
        self.axis = axis;
    }

    /// Flips `IN <-> OUT` without changing which edge is current.
    pub fn reverse(&mut self) {
        self.orientation = match self.orientation {
            Orientation::In => Orientation::Out,
            Orientation::Out => Orientation::In,
        };
    }

    /// `reverse(); move(RIGHT); reverse()`.
    pub fn back_left(&mut self) {
        self.reverse();
        self.move_side(Side::Right);
        self.reverse();
    }

    /// `reverse(); move(LEFT); reverse()`.
    pub fn back_right(&mut self) {
        self.reverse();
        self.move_side(Side::Left);
        self.reverse();
    }
}

/// Adds `+1` to the cubic component named by `axis` and `-1` to the one
/// named by `neighbor_axis`, returning the resulting axial coordinate
/// (the third cubic component stays implicit).
fn shift_cell(p: isize, q: isize, axis: Axis, neighbor_axis: Axis) -> (isize, isize) {
    let mut cubic = [p, q, -p - q];
    cubic[axis.index()] += 1;
    cubic[neighbor_axis.index()] -= 1;
    (cubic[0], cubic[1])
}

/// One hexagonal memory cell: three signed integer edges, one per cubic axis.
#[derive(Clone, Copy, Default)]
struct MemCell {
    x: i64,
    y: i64,
    z: i64,
}

impl MemCell {
    fn edge(&self, axis: Axis) -> i64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    fn edge_mut(&mut self, axis: Axis) -> &mut i64 {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        }
    }
}

/// A lazily-growing hexagonal grid of memory cells, indexed by the
/// ring-ordered radial index of their axial coordinate.
pub struct MemoryGrid {
    rings: usize,
    cells: Vec<MemCell>,
}

impl MemoryGrid {
    pub fn new() -> MemoryGrid {
        MemoryGrid { rings: 1, cells: vec![MemCell::default(); hex_area(1)] }
    }

    /// Grows the backing storage, one ring at a time, until `(p, q)` is
    /// representable.
    pub fn ensure_capacity(&mut self, p: isize, q: isize) {
        while PointAxial(p, q).ring() >= self.rings {
            self.rings += 1;
            self.cells.resize(hex_area(self.rings), MemCell::default());
        }
    }

    /// Reads the edge at `(p, q, axis)` without growing the grid; cells
    /// that haven't been allocated yet are implicitly zero.
    pub fn peek(&self, p: isize, q: isize, axis: Axis) -> i64 {
        let idx = axial_to_radial_index(p, q);
        self.cells.get(idx).map_or(0, |cell| cell.edge(axis))
    }

    /// Mutable access to the edge at `(p, q, axis)`, growing the grid first
    /// if necessary.
    pub fn edge_mut(&mut self, p: isize, q: isize, axis: Axis) -> &mut i64 {
        self.ensure_capacity(p, q);
        let idx = axial_to_radial_index(p, q);
        self.cells[idx].edge_mut(axis)
    }

    /// The edge currently under `mp`.
    pub fn current(&self, mp: &MemoryPointer) -> i64 {
        self.peek(mp.p, mp.q, mp.axis)
    }

    /// Mutable access to the edge currently under `mp`.
    pub fn current_mut(&mut self, mp: &MemoryPointer) -> &mut i64 {
        self.edge_mut(mp.p, mp.q, mp.axis)
    }

    /// The edge that would become current if `mp` moved to `side`, without
    /// moving it.
    pub fn neighbor(&self, mp: &MemoryPointer, side: Side) -> i64 {
        let (p, q, axis) = mp.neighbor_position(side);
        self.peek(p, q, axis)
    }
}

impl fmt::Display for MemoryGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rings {
            for q in -(r as isize)..=(r as isize) {
                for p in -(r as isize)..=(r as isize) {
                    if PointAxial(p, q).ring() != r {
                        continue;
                    }
                    writeln!(
                        f,
                        "({p}, {q}) X={} Y={} Z={}",
                        self.peek(p, q, Axis::X),
                        self.peek(p, q, Axis::Y),
                        self.peek(p, q, Axis::Z),
                    )?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_is_self_inverse() {
        let mut mp = MemoryPointer::origin();
        let before = (mp.p, mp.q, mp.orientation);
        mp.reverse();
        mp.reverse();
        assert_eq!((mp.p, mp.q, mp.orientation), before);
    }

    #[test]
    fn back_left_matches_its_definition() {
        let mut mp = MemoryPointer::origin();
        mp.move_side(Side::Left);
        let snapshot = (mp.p, mp.q, mp.axis.index(), mp.orientation);
        let mut control = MemoryPointer {
            p: snapshot.0,
            q: snapshot.1,
            axis: Axis::from_index(snapshot.2),
            orientation: snapshot.3,
        };
        mp.back_left();
        control.reverse();
        control.move_side(Side::Right);
        control.reverse();
        assert_eq!(
            (mp.p, mp.q, mp.axis.index(), mp.orientation),
            (control.p, control.q, control.axis.index(), control.orientation)
        );
    }

    #[test]
    fn growing_preserves_existing_edges() {
        let mut grid = MemoryGrid::new();
        *grid.edge_mut(0, 0, Axis::X) = 42;
        grid.ensure_capacity(5, 0);
        assert_eq!(grid.peek(0, 0, Axis::X), 42);
    }

    #[test]
    fn unallocated_cells_read_as_zero() {
        let grid = MemoryGrid::new();
        assert_eq!(grid.peek(10, -3, Axis::Y), 0);
    }
}
