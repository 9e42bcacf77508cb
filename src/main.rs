use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::info;

use cluetrail::error::Result;
use cluetrail::hunt::{format_group_sheet, format_master_sheet, generate_hunt};
use cluetrail::store::{read_clue_pool, sample_clue_rows, JsonWorkbook, Workbook};

/// Generate per-group scavenger hunt trails from a shared clue pool.
#[derive(Debug, Parser)]
#[command(name = "cluetrail", version, about)]
struct Args {
    /// Number of groups
    #[arg(long)]
    groups: usize,

    /// Directory holding the workbook tables
    #[arg(long)]
    workbook: PathBuf,

    /// Name of the input table with clues
    #[arg(long, default_value = "Clues")]
    input_table: String,

    /// Random seed for reproducible results
    #[arg(long)]
    seed: Option<u64>,
}

fn init_logging() {
    env_logger::init();
}

fn run(args: &Args) -> Result<()> {
    let mut workbook = JsonWorkbook::open(&args.workbook)?;

    if !workbook.table_exists(&args.input_table) {
        workbook.write_table(&args.input_table, &sample_clue_rows())?;
        println!(
            "Table '{}' not found; created it with sample clues.",
            args.input_table
        );
        println!("Populate it with your own clues and run again.");
        println!(
            "Format: column A = clue/question, column B = answer/location/person, \
             column C = type (Person/Place)"
        );
        return Ok(());
    }

    info!("Reading clues from table '{}'", args.input_table);
    let clues = read_clue_pool(&workbook, &args.input_table)?;
    println!("Found {} clues", clues.len());

    println!("Generating hunt for {} groups...", args.groups);
    let sequences = generate_hunt(&clues, args.groups, args.seed)?;

    workbook.write_table("Master", &format_master_sheet(&sequences))?;

    for (group, steps) in &sequences {
        workbook.write_table(&format!("Group {}", group), &format_group_sheet(*group, steps))?;
    }

    println!();
    println!(
        "Scavenger hunt generated in {}",
        workbook.dir().display()
    );
    println!();
    println!("Instructions:");
    println!("1. Print the 'Master' table for the hunt organizer");
    println!("2. For each group table:");
    println!("   - Print the table");
    println!("   - Give the first row (first clue) to the group at the start");
    println!("   - Hide the remaining clues at the locations in the 'Location' column");

    Ok(())
}

fn main() {
    init_logging();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
