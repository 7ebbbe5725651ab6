//! # faqbot Program Dataset
//!
//! File: cli/src/faq/dataset.rs
//!
//! ## Overview
//!
//! The fixed list of training programs the chatbot knows about. The records
//! are compiled into the binary as a `static` slice, so they exist for the
//! whole lifetime of the process and can never be mutated. There is no
//! loading step and therefore no failure mode.
//!
//! ## Examples
//!
//! ```rust
//! for program in dataset::programs() {
//!     println!("{} - {}", program.program_id, program.program_name);
//! }
//!
//! let masterclass = dataset::find_program("P003");
//! ```
//!
use serde::Serialize;

/// One offered training program.
///
/// All fields borrow `'static` data because every record lives in the
/// [`PROGRAMS`] table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Program {
    /// Unique, stable identifier (never reused).
    pub program_id: &'static str,
    /// Display name.
    pub program_name: &'static str,
    /// Free-text duration description.
    pub duration: &'static str,
    /// Free-text delivery mode description.
    pub mode: &'static str,
    /// Free-text certification description.
    pub certification: &'static str,
    /// Ordered role/title strings of the people running the program.
    pub mentors_coaches: &'static [&'static str],
}

/// The program table, in display order. `program_id` must stay unique.
static PROGRAMS: &[Program] = &[
    Program {
        program_id: "P001",
        program_name: "Leadership Essentials Program",
        duration: "4 weeks (incl. 2 full-day sessions)",
        mode: "Online",
        certification: "Certificate of completion",
        mentors_coaches: &["Program faculty", "Guest leaders / coaches"],
    },
    Program {
        program_id: "P002",
        program_name: "100 Board Members Program",
        duration: "6 months (online cohort)",
        mode: "Online",
        certification: "Certificate of completion; membership benefits",
        mentors_coaches: &["Senior leaders", "Board coaches"],
    },
    Program {
        program_id: "P003",
        program_name: "2-Day Leadership Masterclass",
        duration: "2 days (short masterclass / workshop)",
        mode: "Online or Live workshops (batch dependent)",
        certification: "Certificate of participation",
        mentors_coaches: &["Program faculty", "Guest leaders"],
    },
];

/// Returns every program in dataset order.
pub fn programs() -> &'static [Program] {
    PROGRAMS
}

/// Looks up a program by its identifier. Matching ignores ASCII case so
/// `p002` finds `P002`.
pub fn find_program(program_id: &str) -> Option<&'static Program> {
    PROGRAMS
        .iter()
        .find(|p| p.program_id.eq_ignore_ascii_case(program_id))
}
