use std::{
    fs::File,
    io::{self, BufWriter, Write},
};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use mopsolver::{CLIArgs, Solution};

fn main() -> Result<()> {
    env_logger::init();
    let args = CLIArgs::parse();
    let mut grid = match &args.input_path {
        Some(path) => mopsolver::read_grid_from_path(path)?,
        None => mopsolver::read_grid(io::stdin().lock())
            .context("Failed to read grid from standard input.")?,
    };
    info!("Read a grid of {}x{}.", grid.row_n(), grid.col_n());

    let mut output: Box<dyn Write> = match &args.output_path {
        Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
            format!("Failed to create given output file({}).", path.display())
        })?)),
        None => Box::new(io::stdout().lock()),
    };

    if args.display {
        write!(output, "{}", grid)?;
    }

    if args.steps || args.path {
        let solution = mopsolver::solve(&mut grid).context("Failed to solve given grid.")?;
        info!("Search finished, solved: {}.", solution.is_solved());
        if args.steps {
            match solution {
                Solution::Solved(path) => {
                    writeln!(output, "Solution in {} steps.", path.step_n())?
                }
                Solution::Unsoluble => writeln!(output, "No solution.")?,
            }
        }
    }

    if args.path {
        write!(output, "{}", grid)?;
    }

    output.flush().context("Failed to flush output.")?;
    Ok(())
}
