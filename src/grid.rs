use std::{fmt, str::FromStr};

use crate::{
    coords::{axial_to_program_index, hex_area, PointAxial},
    direction::Redirect,
    Error,
};
use Op::*;

/// The immutable, fully-padded regular hexagon of source instructions.
///
/// Built once by the loader (`FromStr`) and never mutated afterwards; the
/// engine only ever calls `get`.
pub struct ProgramGrid {
    side: usize,
    cells: Vec<(Op, bool)>,
}

impl ProgramGrid {
    /// Creates an empty (all-`Nop`) grid of the given side length.
    pub fn new(side: usize) -> ProgramGrid {
        ProgramGrid { side, cells: vec![(Nop, false); hex_area(side)] }
    }

    /// The hexagon's side length.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Returns the `Op` and debug flag at the given axial coordinates.
    ///
    /// Panics if `coords` falls outside the hexagon; callers (the engine
    /// and its reflection logic) are responsible for only ever asking
    /// about in-bounds cells.
    pub fn get(&self, coords: PointAxial) -> (Op, bool) {
        let PointAxial(p, q) = coords;
        let idx = axial_to_program_index(p, q, self.side)
            .expect("program grid queried out of bounds");
        self.cells[idx]
    }
}

/// Enumeration of all Hexagony commands.
#[derive(Clone, Copy)]
pub enum Op {
    /// Does nothing
    Nop,
    /// Terminates the program
    Terminate,
    /// Sets the current edge to a letter's ASCII code
    Letter(u8),
    /// Appends a decimal digit: `edge := 10*edge + sign(edge)*digit`
    Digit(u8),
    /// Increments the current edge
    Increment,
    /// Decrements the current edge
    Decrement,
    /// Sets the current edge to the sum of the left and right neighbours
    Add,
    /// Sets the current edge to the difference of the left and right neighbours (`left - right`)
    Subtract,
    /// Sets the current edge to the product of the left and right neighbours
    Multiply,
    /// Sets the current edge to the quotient of the left and right neighbours, truncated toward zero
    Divide,
    /// Sets the current edge to `left % right` (sign follows the dividend)
    Modulo,
    /// Negates the current edge
    Negate,
    /// Reads a byte from STDIN into the current edge (-1 on EOF)
    ReadByte,
    /// Reads a signed decimal integer from STDIN into the current edge (0 on immediate EOF)
    ReadInt,
    /// Writes the current edge, mod 256, to STDOUT as a byte
    WriteByte,
    /// Writes the current edge's decimal representation to STDOUT
    WriteInt,
    /// Sets the active IP's `skip_next` flag
    Jump,
    /// Deflects the active IP's direction
    Redir(Redirect),
    /// Switches to the previous IP
    IPPrev,
    /// Switches to the next IP
    IPNext,
    /// Switches to the IP with the index of the current memory edge mod 6
    IPSelect,
    /// Moves the MP to its left neighbour edge
    MPLeft,
    /// Moves the MP to its right neighbour edge
    MPRight,
    /// Moves the MP backwards and to the left
    MPBackLeft,
    /// Moves the MP backwards and to the right
    MPBackRight,
    /// Reverses the MP's orientation
    MPReverse,
    /// Moves the MP right if the current edge is positive, left otherwise
    MPBranch,
    /// Copies the right neighbour into the current edge if positive, the left neighbour otherwise
    MemCopy,
}

impl FromStr for ProgramGrid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        // Find the side of the smallest regular hexagon that will contain the code.
        let src_size = s.chars().filter(|&c| !c.is_whitespace() && c != '`').count();
        let side = (1..).find(|&n| hex_area(n) >= src_size).unwrap();
        let mut grid = ProgramGrid::new(side);
        let mut next = 0usize;
        let mut debug = false;
        for c in s.chars() {
            if c.is_whitespace() {
                continue;
            }
            if c == '`' {
                debug = true;
                continue;
            }
            let op = match c {
                '.' => Nop,
                '@' => Terminate,
                'a'..='z' | 'A'..='Z' => Letter(c as u8),
                '0'..='9' => Digit(c as u8 - b'0'),
                ')' => Increment,
                '(' => Decrement,
                '+' => Add,
                '-' => Subtract,
                '*' => Multiply,
                ':' => Divide,
                '%' => Modulo,
                '~' => Negate,
                ',' => ReadByte,
                '?' => ReadInt,
                ';' => WriteByte,
                '!' => WriteInt,
                '$' => Jump,
                '_' => Redir(Redirect::MirrorHori),
                '|' => Redir(Redirect::MirrorVert),
                '/' => Redir(Redirect::MirrorForw),
                '\\' => Redir(Redirect::MirrorBack),
                '<' => Redir(Redirect::BranchLeft),
                '>' => Redir(Redirect::BranchRight),
                '[' => IPPrev,
                ']' => IPNext,
                '#' => IPSelect,
                '{' => MPLeft,
                '}' => MPRight,
                '"' => MPBackLeft,
                '\'' => MPBackRight,
                '=' => MPReverse,
                '^' => MPBranch,
                '&' => MemCopy,
                // Unrecognized glyphs load as silent no-ops (spec §7).
                _ => Nop,
            };
            grid.cells[next] = (op, debug);
            debug = false;
            next += 1;
        }
        // Remaining cells (if the source was shorter than the padded
        // hexagon) keep their default `(Nop, false)`.
        Ok(grid)
    }
}

impl fmt::Display for ProgramGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.side as isize - 1;
        for q in -s..=s {
            let p_min = (-s).max(-s - q);
            let p_max = s.min(s - q);
            let row_len = (p_max - p_min + 1) as usize;
            write!(f, "{}", " ".repeat(2 * self.side - 1 - row_len))?;
            for p in p_min..=p_max {
                let (op, dbg) = self.get(PointAxial(p, q));
                write!(f, "{}{}", if dbg { '`' } else { ' ' }, op)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", match self {
            Nop => '.',
            Terminate => '@',
            Letter(b) => *b as char,
            Digit(d) => (*d + b'0') as char,
            Increment => ')',
            Decrement => '(',
            Add => '+',
            Subtract => '-',
            Multiply => '*',
            Divide => ':',
            Modulo => '%',
            Negate => '~',
            ReadByte => ',',
            ReadInt => '?',
            WriteByte => ';',
            WriteInt => '!',
            Jump => '$',
            Redir(Redirect::MirrorHori) => '_',
            Redir(Redirect::MirrorVert) => '|',
            Redir(Redirect::MirrorForw) => '/',
            Redir(Redirect::MirrorBack) => '\\',
            Redir(Redirect::BranchLeft) => '<',
            Redir(Redirect::BranchRight) => '>',
            IPPrev => '[',
            IPNext => ']',
            IPSelect => '#',
            MPLeft => '{',
            MPRight => '}',
            MPBackLeft => '"',
            MPBackRight => '\'',
            MPReverse => '=',
            MPBranch => '^',
            MemCopy => '&',
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_short_source_with_nops() {
        let grid: ProgramGrid = "abc".parse().unwrap();
        assert_eq!(grid.side(), 2);
        match grid.get(PointAxial(0, -1)) {
            (Letter(b'a'), false) => {}
            _ => panic!("expected 'a' at the top corner"),
        }
        match grid.get(PointAxial(-1, 0)) {
            (Letter(b'b'), false) => {}
            _ => panic!("expected 'b'"),
        }
        match grid.get(PointAxial(1, -1)) {
            (Letter(b'c'), false) => {}
            _ => panic!("expected 'c'"),
        }
        match grid.get(PointAxial(0, 0)) {
            (Nop, false) => {}
            _ => panic!("expected padding no-op"),
        }
    }

    #[test]
    fn backtick_marks_the_next_non_whitespace_instruction() {
        let grid: ProgramGrid = "` a@".parse().unwrap();
        match grid.get(PointAxial(0, -1)) {
            (Letter(b'a'), true) => {}
            _ => panic!("expected debug-flagged 'a'"),
        }
        match grid.get(PointAxial(-1, 0)) {
            (Terminate, false) => {}
            _ => panic!("expected plain '@'"),
        }
    }

    #[test]
    fn unrecognized_character_loads_as_a_no_op() {
        let grid: ProgramGrid = "λ@".parse().unwrap();
        match grid.get(PointAxial(0, -1)) {
            (Nop, false) => {}
            _ => panic!("unrecognized glyph should load as Nop"),
        }
    }
}
