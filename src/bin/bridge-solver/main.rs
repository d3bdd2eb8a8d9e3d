//! bridge-solver - CLI driver for the double-dummy solver.
//!
//! Reads a YAML document containing one or more deal records, solves each
//! deal's full 4x5 (leader x trump) matrix, prints it, and — if a deal
//! embeds an oracle `result` matrix — reports the first (leader, trump)
//! position where the computed table disagrees.
//!
//! Usage: bridge-solver <deals.yaml>

use anyhow::{Context, Result};
use bridge_solver::deal::DealInput;
use bridge_solver::result::{first_mismatch, solve_deal};
use bridge_solver::types::{side_letter, suit_name, NUM_SIDES, NUM_SUITS};
use clap::Parser;
use std::fs;

#[derive(Parser)]
#[command(name = "bridge-solver")]
#[command(about = "Double-dummy solver: exhaustive minimax over a deal's 20 (leader, trump) combinations")]
#[command(version)]
struct Args {
    /// YAML file containing a sequence of deal records.
    input: String,

    /// Exit with a non-zero status on the first oracle mismatch.
    #[arg(long)]
    check: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("reading {:?}", args.input))?;

    let deals: Vec<DealInput> = serde_yaml::from_str(&text)
        .with_context(|| format!("parsing deal records in {:?}", args.input))?;

    let mut mismatches = 0usize;
    for (i, input) in deals.into_iter().enumerate() {
        log::info!("solving deal {}", i + 1);
        let oracle = input.oracle().with_context(|| format!("deal {}", i + 1))?;
        let state = input
            .into_state()
            .with_context(|| format!("validating deal {}", i + 1))?;

        let matrix = solve_deal(&state);
        print_matrix(i + 1, &matrix);

        if let Some(oracle) = oracle {
            match first_mismatch(&matrix, &oracle) {
                None => println!("  matches embedded result"),
                Some((leader, trump)) => {
                    mismatches += 1;
                    println!(
                        "  MISMATCH at leader={} trump={}: computed={} expected={}",
                        side_letter(leader),
                        suit_name(trump),
                        matrix[leader][trump],
                        oracle[leader][trump]
                    );
                }
            }
        }
    }

    if args.check && mismatches > 0 {
        anyhow::bail!("{mismatches} deal(s) mismatched their embedded result");
    }

    Ok(())
}

fn print_matrix(deal_number: usize, matrix: &bridge_solver::ResultMatrix) {
    println!("Deal {deal_number}:");
    print!("       ");
    for trump in 0..=NUM_SUITS {
        print!("{:>4}", suit_name(trump));
    }
    println!();
    for leader in 0..NUM_SIDES {
        print!("    {}  ", side_letter(leader));
        for trump in 0..=NUM_SUITS {
            print!("{:>4}", matrix[leader][trump]);
        }
        println!();
    }
}
