use std::fmt;

use crate::coords::PointAxial;
use Direction::*;
use Redirect::*;

/// Subset of instructions that change the direction of the current IP.
#[derive(Clone, Copy)]
pub enum Redirect {
    MirrorHori,
    MirrorVert,
    MirrorForw,
    MirrorBack,
    BranchLeft,
    BranchRight,
}

/// Possible directions of travel for an instruction pointer.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    NW,
    NE,
    E,
    SE,
    SW,
    W,
}

impl Direction {
    /// One grid step of movement in this direction.
    pub fn to_vector(&self) -> PointAxial {
        match self {
            NW => PointAxial(0, -1),
            NE => PointAxial(-1, 0),
            E => PointAxial(-1, 1),
            SE => PointAxial(0, 1),
            SW => PointAxial(1, 0),
            W => PointAxial(1, -1),
        }
    }
}

/// Returns the deflected `Direction` for an IP traveling `dir` that hits a
/// `redir` instruction. `positive` is whether the current memory edge is
/// `> 0`, consulted only by the two branching mirrors.
pub fn redirect(dir: Direction, redir: Redirect, positive: bool) -> Direction {
    match (dir, redir) {
        (NW, MirrorForw) => E,
        (NE, MirrorForw) => NE,
        (E, MirrorForw) => NW,
        (SE, MirrorForw) => W,
        (SW, MirrorForw) => SW,
        (W, MirrorForw) => SE,

        (NW, MirrorBack) => NW,
        (NE, MirrorBack) => W,
        (E, MirrorBack) => SW,
        (SE, MirrorBack) => SE,
        (SW, MirrorBack) => E,
        (W, MirrorBack) => NE,

        (NW, MirrorHori) => SW,
        (NE, MirrorHori) => SE,
        (E, MirrorHori) => E,
        (SE, MirrorHori) => NE,
        (SW, MirrorHori) => NW,
        (W, MirrorHori) => W,

        (NW, MirrorVert) => NE,
        (NE, MirrorVert) => NW,
        (E, MirrorVert) => W,
        (SE, MirrorVert) => SW,
        (SW, MirrorVert) => SE,
        (W, MirrorVert) => E,

        (NW, BranchLeft) => W,
        (NE, BranchLeft) => SW,
        (E, BranchLeft) => if positive { SE } else { NE },
        (SE, BranchLeft) => NW,
        (SW, BranchLeft) => W,
        (W, BranchLeft) => E,

        (NW, BranchRight) => SE,
        (NE, BranchRight) => E,
        (E, BranchRight) => W,
        (SE, BranchRight) => E,
        (SW, BranchRight) => NE,
        (W, BranchRight) => if positive { NW } else { SW },
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", match self {
            NW => "NW",
            NE => "NE",
            E => "E",
            SE => "SE",
            SW => "SW",
            W => "W",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Direction; 6] = [NW, NE, E, SE, SW, W];

    #[test]
    fn horizontal_and_vertical_mirrors_are_involutions() {
        for &d in &ALL {
            let once = redirect(d, MirrorHori, true);
            let twice = redirect(once, MirrorHori, true);
            assert_eq!(d, twice);
        }
        for &d in &ALL {
            let once = redirect(d, MirrorVert, true);
            let twice = redirect(once, MirrorVert, true);
            assert_eq!(d, twice);
        }
    }

    #[test]
    fn forward_and_back_slash_mirrors_are_involutions() {
        for &d in &ALL {
            let once = redirect(d, MirrorForw, true);
            let twice = redirect(once, MirrorForw, true);
            assert_eq!(d, twice);
        }
        for &d in &ALL {
            let once = redirect(d, MirrorBack, true);
            let twice = redirect(once, MirrorBack, true);
            assert_eq!(d, twice);
        }
    }

    #[test]
    fn branch_mirrors_pick_direction_from_edge_sign() {
        assert_eq!(redirect(E, BranchLeft, true), SE);
        assert_eq!(redirect(E, BranchLeft, false), NE);
        assert_eq!(redirect(W, BranchRight, true), NW);
        assert_eq!(redirect(W, BranchRight, false), SW);
    }
}
