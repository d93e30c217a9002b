mod commands;
mod output;

use clap::{Parser, Subcommand};
use helioplan_core::PlanOptions;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "helioplan",
    version,
    about = "Stringing planner for PV design reports"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract a design report (PDF or plain text) into structured data (without planning)
    Extract {
        /// Path to PDF or text report
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        format: String,

        /// Write the extraction to a JSON file
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Build a stringing plan from a report (PDF, text or pre-extracted JSON)
    Plan {
        /// Path to PDF, text or pre-extracted JSON file; omit to plan from raw counts
        input_file: Option<PathBuf>,

        /// MPPT channels per inverter
        #[arg(short, long)]
        mppt: u32,

        /// Strings actually wired, when the as-built count differs from the report
        #[arg(long)]
        strings_used: Option<u32>,

        /// Populate exactly this many string columns per inverter
        #[arg(long)]
        strings_to_fill: Option<u32>,

        /// Panel count (required without an input file)
        #[arg(long)]
        panels: Option<u32>,

        /// Inverter count (required without an input file)
        #[arg(long)]
        inverters: Option<u32>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        format: String,

        /// Write the plan to a JSON file
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            input_file,
            format,
            output,
        } => commands::extract::run(input_file, &format, output),
        Commands::Plan {
            input_file,
            mppt,
            strings_used,
            strings_to_fill,
            panels,
            inverters,
            format,
            output,
        } => {
            let options = PlanOptions {
                mppt_per_inverter: mppt,
                strings_used,
                strings_to_fill,
            };
            commands::plan::run(input_file, options, panels, inverters, &format, output)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
