//! Console front end: scramble a box, solve it, and replay the move list
//! with a colored rendering of the grid after every toggle.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use clap::Parser;
use colored::Colorize;
use log::warn;

use securebox::params::{MAX_GRID_DIM, MIN_GRID_DIM};
use securebox::{solve, KeystreamRng, SecureBox, SolvePlan};

#[derive(Debug, Parser)]
#[command(name = "securebox", about = "Scramble a trinary lock box and unlock it move by move")]
struct Args {
    /// Grid width (1-10)
    width: usize,

    /// Grid height (1-10)
    height: usize,

    /// Seed phrase for a reproducible scramble; omitted means OS entropy
    #[arg(long)]
    seed: Option<String>,

    /// Print the solve plan as JSON instead of replaying it
    #[arg(long)]
    json: bool,

    /// Wait for Enter between toggles
    #[arg(long)]
    step: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if !(MIN_GRID_DIM..=MAX_GRID_DIM).contains(&args.width)
        || !(MIN_GRID_DIM..=MAX_GRID_DIM).contains(&args.height)
    {
        bail!("please use dimensions between {MIN_GRID_DIM} and {MAX_GRID_DIM}");
    }

    let mut rng = match &args.seed {
        Some(phrase) => KeystreamRng::from_seed_material(phrase.as_bytes()),
        None => KeystreamRng::from_entropy().context("seeding the scramble generator")?,
    };
    let mut grid = SecureBox::scrambled(args.width, args.height, &mut rng);

    let plan = solve(&grid)?;
    if !plan.full_rank {
        warn!(
            "the {}x{} toggle operator is rank deficient; hand-crafted states may stay locked",
            args.width, args.height
        );
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    display(&grid, "Initial SecureBox State");
    replay(&mut grid, &plan, args.step)?;
    display(&grid, "Final SecureBox State");

    if grid.is_locked() {
        println!("{}", "BOX: LOCKED!".red().bold());
        std::process::exit(1);
    }
    println!("{}", "BOX: OPENED!".green().bold());
    Ok(())
}

/// Applies the plan one toggle at a time, rendering after each, and stops
/// early once the box opens.
fn replay(grid: &mut SecureBox, plan: &SolvePlan, step: bool) -> Result<()> {
    let mut step_no = 1;
    for mv in &plan.moves {
        for _ in 0..mv.count {
            println!(
                "{}",
                format!("Step {step_no}: Toggle({}, {})", mv.x, mv.y).magenta().bold()
            );
            grid.toggle(mv.x, mv.y);
            display(grid, "SecureBox State After Toggle");
            step_no += 1;

            if !grid.is_locked() {
                return Ok(());
            }
            if step {
                wait_for_enter()?;
            }
        }
    }
    Ok(())
}

fn display(grid: &SecureBox, title: &str) {
    println!("\n{}", title.cyan().bold());
    println!("{}", "=".repeat(title.len()));

    // Column headers
    print!("   ");
    for x in 0..grid.width() {
        print!("{x:>3}");
    }
    println!();

    // Grid with row headers, color coded: green=0, yellow=1, red=2
    let state = grid.state();
    for (y, row) in state.to_vectors().into_iter().enumerate() {
        print!("{y:>2} ");
        for cell in row {
            let rendered = format!("[{}]", cell.0);
            let painted = match cell.0 {
                0 => rendered.green(),
                1 => rendered.yellow(),
                _ => rendered.red(),
            };
            print!("{painted}");
        }
        println!();
    }

    println!(
        "\nLegend: {} {} {}",
        "[0]=Unlocked".green(),
        "[1]=Partial".yellow(),
        "[2]=Locked".red()
    );
    let status = if grid.is_locked() {
        "LOCKED".red()
    } else {
        "UNLOCKED".green()
    };
    println!("Status: {status}\n");
}

fn wait_for_enter() -> Result<()> {
    print!("{}", "Press Enter to continue...".cyan());
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(())
}
