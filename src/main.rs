use std::fs;
use std::path::Path;
use std::process::ExitCode;

use clap::clap_app;
use hexagony::error::Error;

fn main() -> ExitCode {
    env_logger::init();

    let matches = clap_app!(hexagony =>
        (version: "0.1.0")
        (@group mode +required =>
            (@arg grid: -g --grid [N] "Prints an empty hex grid of side-length N")
            (@arg FILE: "Path to a source file to run")
        )
        (@arg step: -s --step "Starts the debugger in single-step mode from the first tick")
    ).get_matches();

    if matches.is_present("grid") {
        return match matches.value_of("grid") {
            Some(n) => report(print_grid(n)),
            None => {
                eprintln!("-g/--grid requires a side length, e.g. -g 10");
                ExitCode::FAILURE
            }
        };
    }

    match matches.value_of("FILE") {
        Some(path) => report(run_file(path, matches.is_present("step"))),
        None => {
            eprintln!("no source file given");
            ExitCode::FAILURE
        }
    }
}

fn report(result: Result<(), Error>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn print_grid(n: &str) -> Result<(), Error> {
    let side: usize = n.parse()?;
    print!("{}", hexagony::source_template(side));
    Ok(())
}

fn run_file(path: &str, step: bool) -> Result<(), Error> {
    let src = fs::read_to_string(Path::new(path))?;
    hexagony::run(&src, step)
}
