use crate::{coords::PointAxial, direction::Direction};

/// One of the six instruction pointers.
pub struct InstructionPointer {
    pub pos: PointAxial,
    pub dir: Direction,
    /// Set by `$`; causes the next instruction to be skipped rather than
    /// executed (the advance step still happens).
    pub skip_next: bool,
}

impl InstructionPointer {
    pub fn new(pos: PointAxial, dir: Direction) -> InstructionPointer {
        InstructionPointer { pos, dir, skip_next: false }
    }

    /// Moves this IP one cell along `dir`, reflecting off the hexagon's
    /// rim if necessary. `side` is the program's side length; `current_edge`
    /// is the value under the memory pointer at the moment of the step,
    /// consulted only to break ties at corners.
    pub fn advance(&mut self, side: usize, current_edge: i64) {
        let PointAxial(p, q) = self.pos;
        let vector = self.dir.to_vector();
        let (np, nq) = (p + vector.0, q + vector.1);
        let nr = -np - nq;
        let limit = 2 * (side as isize - 1);
        if np.abs() + nq.abs() + nr.abs() <= limit {
            self.pos = PointAxial(np, nq);
            return;
        }
        self.pos = reflect(p, q, np, nq, nr, current_edge);
    }
}

/// The six-clause reflection-axis rule from the execution engine's edge
/// handling. `(np, nq, nr)` is the tentative (out-of-bounds) cubic position
/// the IP tried to step to; `(p, q)` is its pre-step position, which gets
/// reflected across the chosen axis.
fn reflect(p: isize, q: isize, np: isize, nq: isize, nr: isize, current_edge: i64) -> PointAxial {
    let positive = current_edge > 0;
    enum Axis { X, Y, Z }
    let axis = if np == 0 {
        if positive { Axis::Y } else { Axis::Z }
    } else if nq == 0 {
        if positive { Axis::Z } else { Axis::X }
    } else if nr == 0 {
        if positive { Axis::X } else { Axis::Y }
    } else if nq * nr > 0 {
        Axis::X
    } else if nr * np > 0 {
        Axis::Y
    } else {
        Axis::Z
    };
    match axis {
        Axis::X => PointAxial(-p, p + q),
        Axis::Y => PointAxial(p + q, -q),
        Axis::Z => PointAxial(-q, -p),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction;

    /// An IP placed anywhere strictly inside a side-`side` hexagon never
    /// leaves it after one `advance`.
    #[test]
    fn advance_from_the_interior_stays_in_bounds() {
        let side = 4usize;
        let limit = 2 * (side as isize - 1);
        let dirs = [Direction::NW, Direction::NE, Direction::E, Direction::SE, Direction::SW, Direction::W];
        for p in -3..=3isize {
            for q in -3..=3isize {
                let r = -p - q;
                if p.abs() + q.abs() + r.abs() > limit - 2 {
                    continue; // keep well clear of the rim for this check
                }
                for &d in &dirs {
                    let mut ip = InstructionPointer::new(PointAxial(p, q), d);
                    ip.advance(side, 0);
                    let PointAxial(np, nq) = ip.pos;
                    let nr = -np - nq;
                    assert!(np.abs() + nq.abs() + nr.abs() <= limit);
                }
            }
        }
    }

    #[test]
    fn reflection_off_each_corner_stays_in_bounds() {
        let side = 5usize;
        let s = side as isize - 1;
        let corners = [
            PointAxial(0, -s),
            PointAxial(-s, 0),
            PointAxial(-s, s),
            PointAxial(0, s),
            PointAxial(s, 0),
            PointAxial(s, -s),
        ];
        let dirs = [Direction::NW, Direction::NE, Direction::E, Direction::SE, Direction::SW, Direction::W];
        let limit = 2 * s;
        let mut saw_a_reflection = false;
        for &pos in &corners {
            for &dir in &dirs {
                let PointAxial(p, q) = pos;
                let vector = dir.to_vector();
                let (np, nq) = (p + vector.0, q + vector.1);
                let nr = -np - nq;
                if np.abs() + nq.abs() + nr.abs() <= limit {
                    continue; // this direction doesn't leave the hexagon from here
                }
                saw_a_reflection = true;
                for &edge in &[-1i64, 1] {
                    let mut ip = InstructionPointer::new(pos, dir);
                    ip.advance(side, edge);
                    let PointAxial(rp, rq) = ip.pos;
                    let rr = -rp - rq;
                    assert!(
                        rp.abs() + rq.abs() + rr.abs() <= limit,
                        "corner {pos} dir {dir} edge {edge} escaped to {}",
                        ip.pos
                    );
                }
            }
        }
        assert!(saw_a_reflection, "test setup didn't actually exercise any corner reflection");
    }
}
