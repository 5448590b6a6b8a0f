//! The step-wise debugger: renders engine state and prompts for a command
//! whenever a breakpoint is hit (either a flagged cell or single-step mode).

use std::io::{self, Write};

use crate::{
    coords::{Axis, PointAxial},
    grid::ProgramGrid,
    ip::InstructionPointer,
    memory::{MemoryGrid, MemoryPointer},
};

/// How many rings around the memory pointer to render.
const MEMORY_NEIGHBORHOOD: isize = 4;

/// What the user asked the engine to do.
pub enum Action {
    /// Switch into single-step mode: break before every instruction.
    Step,
    /// Leave single-step mode and run until the next flagged cell.
    Continue,
    /// Halt the program immediately.
    Quit,
}

/// Renders the current engine state (program grid, all six IPs, the memory
/// pointer and a neighborhood of the memory grid around it) and blocks on a
/// single-character command; anything other than `s`/`c`/`q` re-prompts.
pub fn breakpoint(
    grid: &ProgramGrid,
    mem: &MemoryGrid,
    ips: &[InstructionPointer; 6],
    active: usize,
    mp: &MemoryPointer,
    tick: u64,
) -> Action {
    println!("\n-- tick {tick} --");
    println!("{grid}");
    println!("instruction pointers:");
    for (i, ip) in ips.iter().enumerate() {
        let marker = if i == active { '!' } else { ' ' };
        println!("{marker} {i}: {} facing {}", ip.pos, ip.dir);
    }
    println!(
        "memory pointer: ({}, {}) axis={} orientation={:?}, current edge = {}",
        mp.p, mp.q, mp.axis, mp.orientation, mem.current(mp)
    );
    println!("memory neighborhood (radius {MEMORY_NEIGHBORHOOD}):");
    for q in -MEMORY_NEIGHBORHOOD..=MEMORY_NEIGHBORHOOD {
        for p in -MEMORY_NEIGHBORHOOD..=MEMORY_NEIGHBORHOOD {
            if PointAxial(p, q).ring() as isize > MEMORY_NEIGHBORHOOD {
                continue;
            }
            let (x, y, z) = (mem.peek(p, q, Axis::X), mem.peek(p, q, Axis::Y), mem.peek(p, q, Axis::Z));
            if x != 0 || y != 0 || z != 0 {
                println!("  ({p}, {q}): X={x} Y={y} Z={z}");
            }
        }
    }

    loop {
        print!("(s)tep, (c)ontinue, (q)uit> ");
        if io::stdout().flush().is_err() {
            return Action::Quit;
        }
        let mut line = String::new();
        if io::stdin().read_line(&mut line).unwrap_or(0) == 0 {
            // EOF on the controlling terminal behaves like an explicit quit.
            return Action::Quit;
        }
        match line.trim().chars().next() {
            Some('s') => return Action::Step,
            Some('c') => return Action::Continue,
            Some('q') => return Action::Quit,
            _ => continue,
        }
    }
}
