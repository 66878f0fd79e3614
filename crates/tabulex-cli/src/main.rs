use std::env;
use std::fs;
use std::process;

use anyhow::{Context, Result};
use tabulex_solver::{two_phase_solve, LpProblem, SolverError};

mod render;

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut show_tables = false;
    let mut input: Option<&str> = None;

    for arg in &args[1..] {
        match arg.as_str() {
            "--tables" => show_tables = true,
            "-h" | "--help" => {
                print_usage(&args[0]);
                return;
            }
            other => {
                if input.is_some() {
                    print_usage(&args[0]);
                    process::exit(1);
                }
                input = Some(other);
            }
        }
    }

    let input = match input {
        Some(input) => input,
        None => {
            print_usage(&args[0]);
            process::exit(1);
        }
    };

    if let Err(err) = run(input, show_tables) {
        eprintln!("Error: {:#}", err);
        // Errores de validación del problema: código 2; el resto: 1
        let code = if err.downcast_ref::<SolverError>().is_some() {
            2
        } else {
            1
        };
        process::exit(code);
    }
}

fn run(input: &str, show_tables: bool) -> Result<()> {
    // Un argumento que termina en .json es un archivo; si no, JSON inline
    let text = if input.ends_with(".json") {
        fs::read_to_string(input).with_context(|| format!("cannot read '{}'", input))?
    } else {
        input.to_string()
    };

    let problem: LpProblem = serde_json::from_str(&text).context("invalid problem JSON")?;
    let result = two_phase_solve(&problem)?;

    if show_tables {
        print!("{}", render::render_result(&result));
    } else {
        println!("{}", serde_json::to_string_pretty(&result)?);
    }

    Ok(())
}

fn print_usage(program_name: &str) {
    eprintln!("Tabulex CLI - Tabular Simplex Solver");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  {} <problem.json>             # Solve and print the result JSON", program_name);
    eprintln!("  {} '<json>'                   # Same, with the problem passed inline", program_name);
    eprintln!("  {} <problem.json> --tables    # Render the tableau trace as text", program_name);
    eprintln!();
    eprintln!("Problem format:");
    eprintln!("  {{\"problem_type\": \"maximization\", \"C\": [3, 5],");
    eprintln!("   \"LI\": [[1, 0], [0, 2], [3, 2]], \"LD\": [4, 12, 18],");
    eprintln!("   \"O\": [\"<=\", \"<=\", \"<=\"]}}");
}
