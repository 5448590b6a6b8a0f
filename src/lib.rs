use std::io::{self, Read, Write};
use std::iter::Peekable;

use coords::mathematical_mod;
use direction::redirect;
use error::Error;
use grid::{Op, ProgramGrid};
use ip::InstructionPointer;
use memory::{MemoryGrid, MemoryPointer, Side};

pub mod coords;
pub mod debugger;
pub mod direction;
pub mod error;
pub mod grid;
pub mod ip;
pub mod memory;

/// Returns a `String` rendering of an empty `ProgramGrid` with the given
/// side length (the `-g` CLI mode).
pub fn source_template(side: usize) -> String {
    if side == 0 {
        String::new()
    } else {
        ProgramGrid::new(side).to_string()
    }
}

/// Parses and runs a string slice of Hexagony source code to completion,
/// reading STDIN and writing STDOUT.
///
/// If `start_stepping` is set, the engine enters single-step (debugger)
/// mode from tick zero, regardless of whether the first instruction is
/// itself flagged with a backtick.
pub fn run(src: &str, start_stepping: bool) -> Result<(), Error> {
    Engine::new(src, start_stepping, io::stdin(), io::stdout())?.run()
}

/// Owns all interpreter state: the immutable program grid, the memory
/// grid, the six instruction pointers and which one is active, the memory
/// pointer, and the blocking byte I/O streams. Generic over the I/O types
/// so tests can swap in an in-memory `Cursor`/`Vec<u8>` instead of the real
/// STDIN/STDOUT the CLI uses.
struct Engine<R: Read, W: Write> {
    grid: ProgramGrid,
    mem: MemoryGrid,
    mp: MemoryPointer,
    ips: [InstructionPointer; 6],
    active: usize,
    force_debug: bool,
    tick: u64,
    input: Peekable<io::Bytes<R>>,
    output: W,
}

impl<R: Read, W: Write> Engine<R, W> {
    fn new(src: &str, start_stepping: bool, input: R, output: W) -> Result<Self, Error> {
        let grid: ProgramGrid = src.parse()?;
        let side = grid.side() as isize;
        use crate::coords::PointAxial;
        use direction::Direction::*;
        let ips = [
            InstructionPointer::new(PointAxial(0, -(side - 1)), E),
            InstructionPointer::new(PointAxial(-(side - 1), 0), SE),
            InstructionPointer::new(PointAxial(-(side - 1), side - 1), SW),
            InstructionPointer::new(PointAxial(0, side - 1), W),
            InstructionPointer::new(PointAxial(side - 1, 0), NW),
            InstructionPointer::new(PointAxial(side - 1, -(side - 1)), NE),
        ];
        Ok(Engine {
            grid,
            mem: MemoryGrid::new(),
            mp: MemoryPointer::origin(),
            ips,
            active: 0,
            force_debug: start_stepping,
            tick: 0,
            input: input.bytes().peekable(),
            output,
        })
    }

    /// Runs until a `@` halt or a debugger quit.
    fn run(&mut self) -> Result<(), Error> {
        loop {
            if self.ips[self.active].skip_next {
                self.ips[self.active].skip_next = false;
                self.advance_active();
                self.tick = self.tick.wrapping_add(1);
                continue;
            }

            let (op, flagged) = self.grid.get(self.ips[self.active].pos);
            if flagged || self.force_debug {
                match debugger::breakpoint(&self.grid, &self.mem, &self.ips, self.active, &self.mp, self.tick) {
                    debugger::Action::Step => self.force_debug = true,
                    debugger::Action::Continue => self.force_debug = false,
                    debugger::Action::Quit => return Ok(()),
                }
            }
            log::trace!("tick {} ip{} {}", self.tick, self.active, self.ips[self.active].pos);

            if self.dispatch(op)? {
                return Ok(()); // halted via `@`, before the advance step
            }

            self.advance_active();
            self.tick = self.tick.wrapping_add(1);
        }
    }

    /// Executes one instruction's effect. Returns `Ok(true)` if the program
    /// should halt (i.e. `@` was executed) without advancing further.
    fn dispatch(&mut self, op: Op) -> Result<bool, Error> {
        match op {
            Op::Nop => {}
            Op::Terminate => return Ok(true),
            Op::Letter(b) => *self.mem.current_mut(&self.mp) = b as i64,
            Op::Digit(d) => {
                let cur = self.mem.current(&self.mp);
                let sign: i64 = if cur < 0 { -1 } else { 1 };
                let next = cur.wrapping_mul(10).wrapping_add(sign.wrapping_mul(d as i64));
                *self.mem.current_mut(&self.mp) = next;
            }
            Op::Increment => {
                let m = self.mem.current_mut(&self.mp);
                *m = m.wrapping_add(1);
            }
            Op::Decrement => {
                let m = self.mem.current_mut(&self.mp);
                *m = m.wrapping_sub(1);
            }
            Op::Add => self.binary_op(i64::wrapping_add),
            Op::Subtract => self.binary_op(i64::wrapping_sub),
            Op::Multiply => self.binary_op(i64::wrapping_mul),
            Op::Divide => {
                if self.mem.neighbor(&self.mp, Side::Right) == 0 {
                    return Err(Error::DivisionByZero);
                }
                self.binary_op(i64::wrapping_div);
            }
            Op::Modulo => {
                if self.mem.neighbor(&self.mp, Side::Right) == 0 {
                    return Err(Error::ModuloByZero);
                }
                self.binary_op(i64::wrapping_rem);
            }
            Op::Negate => {
                let m = self.mem.current_mut(&self.mp);
                *m = m.wrapping_neg();
            }
            Op::ReadByte => {
                let v = self.read_byte()?;
                *self.mem.current_mut(&self.mp) = v;
            }
            Op::ReadInt => {
                let v = self.read_int()?;
                *self.mem.current_mut(&self.mp) = v;
            }
            Op::WriteByte => {
                let byte = self.mem.current(&self.mp).rem_euclid(256) as u8;
                self.output.write_all(&[byte])?;
            }
            Op::WriteInt => {
                write!(self.output, "{}", self.mem.current(&self.mp))?;
                self.output.flush()?;
            }
            Op::Jump => self.ips[self.active].skip_next = true,
            Op::Redir(r) => {
                let positive = self.mem.current(&self.mp) > 0;
                let ip = &mut self.ips[self.active];
                ip.dir = redirect(ip.dir, r, positive);
            }
            Op::IPPrev => self.active = (self.active + 5) % 6,
            Op::IPNext => self.active = (self.active + 1) % 6,
            Op::IPSelect => {
                let v = self.mem.current(&self.mp);
                self.active = mathematical_mod(v as isize, 6) as usize;
            }
            Op::MPLeft => self.mp.move_side(Side::Left),
            Op::MPRight => self.mp.move_side(Side::Right),
            Op::MPBackLeft => self.mp.back_left(),
            Op::MPBackRight => self.mp.back_right(),
            Op::MPReverse => self.mp.reverse(),
            Op::MPBranch => {
                if self.mem.current(&self.mp) > 0 {
                    self.mp.move_side(Side::Right);
                } else {
                    self.mp.move_side(Side::Left);
                }
            }
            Op::MemCopy => {
                let v = if self.mem.current(&self.mp) > 0 {
                    self.mem.neighbor(&self.mp, Side::Right)
                } else {
                    self.mem.neighbor(&self.mp, Side::Left)
                };
                *self.mem.current_mut(&self.mp) = v;
            }
        }
        Ok(false)
    }

    /// Sets the current edge to `op(left, right)`.
    fn binary_op(&mut self, op: fn(i64, i64) -> i64) {
        let left = self.mem.neighbor(&self.mp, Side::Left);
        let right = self.mem.neighbor(&self.mp, Side::Right);
        *self.mem.current_mut(&self.mp) = op(left, right);
    }

    fn advance_active(&mut self) {
        let current_edge = self.mem.current(&self.mp);
        let side = self.grid.side();
        self.ips[self.active].advance(side, current_edge);
    }

    fn read_byte(&mut self) -> Result<i64, Error> {
        match self.input.next() {
            Some(b) => Ok(b? as i64),
            None => Ok(-1),
        }
    }

    fn read_int(&mut self) -> Result<i64, Error> {
        let mut val: i64 = 0;
        let mut sign: i64 = 1;
        let mut found = false;
        while let Some(b) = self.input.next() {
            match b? {
                b'+' => {
                    found = true;
                    break;
                }
                b'-' => {
                    sign = -1;
                    found = true;
                    break;
                }
                d @ b'0'..=b'9' => {
                    val = val.wrapping_mul(10).wrapping_add((d - b'0') as i64);
                    found = true;
                    break;
                }
                _ => continue,
            }
        }
        if !found {
            return Ok(0);
        }
        while let Some(Ok(d @ b'0'..=b'9')) = self.input.peek() {
            let digit = (*d - b'0') as i64;
            val = val.wrapping_mul(10).wrapping_add(digit);
            self.input.next();
        }
        Ok(val.wrapping_mul(sign))
    }
}
