//! # faqbot Programs Command
//!
//! File: cli/src/commands/programs.rs
//!
//! ## Overview
//!
//! Lists the training programs the chatbot knows about, either as a table or
//! as JSON. Given a program ID it shows that single record in full.
//!
//! ## Examples
//!
//! ```bash
//! faqbot programs            # table of all programs
//! faqbot programs P002       # details of one program
//! faqbot programs --json     # machine-readable output
//! ```
//!
use crate::core::error::{FaqbotError, Result};
use crate::faq::dataset::{self, Program};
use anyhow::Context;
use clap::Parser;
use tracing::info;

/// # Programs Command Arguments (`ProgramsArgs`)
#[derive(Parser, Debug)]
pub struct ProgramsArgs {
    /// Show only the program with this ID (case-insensitive, e.g. `P001`).
    pub id: Option<String>,

    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// # Handle Programs Command (`handle_programs`)
///
/// ## Errors
///
/// Returns `FaqbotError::ProgramNotFound` if `id` matches no program.
pub async fn handle_programs(args: ProgramsArgs) -> Result<()> {
    info!("Handling programs command...");

    match args.id {
        Some(id) => {
            let program = dataset::find_program(&id)
                .ok_or_else(|| FaqbotError::ProgramNotFound { id: id.clone() })?;
            if args.json {
                let json = serde_json::to_string_pretty(program)
                    .context("Failed to serialize program")?;
                println!("{}", json);
            } else {
                print!("{}", render_details(program));
            }
        }
        None => {
            let programs = dataset::programs();
            if args.json {
                let json = serde_json::to_string_pretty(programs)
                    .context("Failed to serialize programs")?;
                println!("{}", json);
            } else {
                print!("{}", render_table(programs));
            }
        }
    }
    Ok(())
}

/// Renders an ID | Name | Mode table followed by a count line.
fn render_table(programs: &[Program]) -> String {
    let name_width = programs
        .iter()
        .map(|p| p.program_name.len())
        .max()
        .unwrap_or(10)
        .clamp(10, 40);

    let mut out = String::new();
    out.push_str(&format!("{:<5} | {:<width$} | Mode\n", "ID", "Name", width = name_width));
    out.push_str(&format!("{:-<5}-+-{:-<width$}-+-{:-<30}\n", "", "", "", width = name_width));
    for program in programs {
        out.push_str(&format!(
            "{:<5} | {:<width$} | {}\n",
            program.program_id,
            program.program_name,
            program.mode,
            width = name_width
        ));
    }
    out.push_str(&format!("\nFound {} program(s).\n", programs.len()));
    out.push_str("Use 'faqbot programs <ID>' for details.\n");
    out
}

fn render_details(program: &Program) -> String {
    format!(
        "{} ({})\n  Duration:      {}\n  Mode:          {}\n  Certification: {}\n  Mentors:       {}\n",
        program.program_name,
        program.program_id,
        program.duration,
        program.mode,
        program.certification,
        program.mentors_coaches.join(", ")
    )
}
