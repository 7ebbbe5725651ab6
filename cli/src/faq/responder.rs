//! # faqbot Responder
//!
//! File: cli/src/faq/responder.rs
//!
//! ## Overview
//!
//! Maps a free-text question to an answer. The question is lowercased and
//! checked against an ordered table of topics; the first topic with a keyword
//! contained in the question wins and renders one line per program. Matching
//! is raw substring containment, so "certificates" also matches the
//! "certificate" keyword and "coaching" matches "coach".
//!
//! Priority order (first match wins):
//! 1. `programs`
//! 2. `duration`
//! 3. `online`, `offline`, `mode`
//! 4. `certificate`, `certificates`
//! 5. `mentor`, `coach`
//!
//! Anything else yields [`FALLBACK_ANSWER`].
//!
//! ## Examples
//!
//! ```rust
//! let answer = responder::find_answer("How long is each program's duration?");
//! assert!(answer.starts_with("- Leadership Essentials Program: 4 weeks"));
//! ```
//!
use super::dataset::{self, Program};

/// Returned when no topic keyword appears in the question.
pub const FALLBACK_ANSWER: &str =
    "Sorry, I can only answer about programs, duration, mode, certificates, or mentors.";

/// A question category the chatbot can answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Programs,
    Duration,
    Mode,
    Certification,
    Mentors,
}

impl Topic {
    /// Topics in matching priority order.
    pub const PRIORITY: [Topic; 5] = [
        Topic::Programs,
        Topic::Duration,
        Topic::Mode,
        Topic::Certification,
        Topic::Mentors,
    ];

    /// Lowercase substrings that select this topic.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Topic::Programs => &["programs"],
            Topic::Duration => &["duration"],
            Topic::Mode => &["online", "offline", "mode"],
            Topic::Certification => &["certificate", "certificates"],
            Topic::Mentors => &["mentor", "coach"],
        }
    }

    /// Renders the answer line for a single program.
    fn render_line(self, program: &Program) -> String {
        match self {
            Topic::Programs => format!("- {}", program.program_name),
            Topic::Duration => format!("- {}: {}", program.program_name, program.duration),
            Topic::Mode => format!("- {}: {}", program.program_name, program.mode),
            Topic::Certification => {
                format!("- {}: {}", program.program_name, program.certification)
            }
            Topic::Mentors => format!(
                "- {}: {}",
                program.program_name,
                program.mentors_coaches.join(", ")
            ),
        }
    }

    /// Renders one line per program, joined by `\n` with no trailing newline.
    pub fn render(self, programs: &[Program]) -> String {
        programs
            .iter()
            .map(|p| self.render_line(p))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Returns the highest-priority topic whose keyword appears in `question`,
/// ignoring case.
pub fn classify(question: &str) -> Option<Topic> {
    let text = question.to_lowercase();
    Topic::PRIORITY
        .into_iter()
        .find(|topic| topic.keywords().iter().any(|kw| text.contains(kw)))
}

/// # Find Answer (`find_answer`)
///
/// Answers `question` from the program dataset. Total over all inputs: the
/// empty string and questions without a known keyword both produce
/// [`FALLBACK_ANSWER`].
pub fn find_answer(question: &str) -> String {
    match classify(question) {
        Some(topic) => topic.render(dataset::programs()),
        None => FALLBACK_ANSWER.to_string(),
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_programs_lists_names_only() {
        assert_eq!(
            find_answer("Which programs do you offer?"),
            "- Leadership Essentials Program\n- 100 Board Members Program\n- 2-Day Leadership Masterclass"
        );
    }

    #[test]
    fn test_duration() {
        let answer = find_answer("What is the duration?");
        let lines: Vec<_> = answer.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "- Leadership Essentials Program: 4 weeks (incl. 2 full-day sessions)"
        );
        assert_eq!(lines[1], "- 100 Board Members Program: 6 months (online cohort)");
        assert_eq!(
            lines[2],
            "- 2-Day Leadership Masterclass: 2 days (short masterclass / workshop)"
        );
    }

    #[test]
    fn test_programs_beats_duration() {
        assert_eq!(
            find_answer("duration of all programs"),
            find_answer("programs")
        );
        assert_eq!(classify("duration of all programs"), Some(Topic::Programs));
    }

    #[test]
    fn test_mode_keywords() {
        let expected = "- Leadership Essentials Program: Online\n\
                        - 100 Board Members Program: Online\n\
                        - 2-Day Leadership Masterclass: Online or Live workshops (batch dependent)";
        assert_eq!(find_answer("Is it online?"), expected);
        assert_eq!(find_answer("offline classes?"), expected);
        assert_eq!(find_answer("delivery mode"), expected);
    }

    #[test]
    fn test_certificate_substring_match() {
        let answer = find_answer("Do I get certificates?");
        assert!(answer.starts_with("- Leadership Essentials Program: Certificate of completion\n"));
        assert!(answer.ends_with("- 2-Day Leadership Masterclass: Certificate of participation"));
        // "certification" does not contain "certificate".
        assert_eq!(find_answer("certification?"), FALLBACK_ANSWER);
    }

    #[test]
    fn test_mentors() {
        assert_eq!(
            find_answer("What are the mentors for each program?"),
            "- Leadership Essentials Program: Program faculty, Guest leaders / coaches\n\
             - 100 Board Members Program: Senior leaders, Board coaches\n\
             - 2-Day Leadership Masterclass: Program faculty, Guest leaders"
        );
        assert_eq!(classify("any coaching?"), Some(Topic::Mentors));
    }

    #[test]
    fn test_duration_outranks_mode() {
        assert_eq!(classify("online duration"), Some(Topic::Duration));
        assert_eq!(find_answer("online duration"), find_answer("duration"));
    }

    #[test]
    fn test_mode_outranks_mentors() {
        // "online" appears before "coach" in priority.
        assert_eq!(classify("online coach"), Some(Topic::Mode));
    }

    #[test]
    fn test_certificate_outranks_mentors() {
        assert_eq!(classify("coach certificate"), Some(Topic::Certification));
        assert_eq!(find_answer("coach certificate"), find_answer("certificate"));
    }

    #[test]
    fn test_fallback() {
        assert_eq!(find_answer(""), FALLBACK_ANSWER);
        assert_eq!(find_answer("what is the price?"), FALLBACK_ANSWER);
        // Singular "program" is not a keyword.
        assert_eq!(find_answer("tell me about the program"), FALLBACK_ANSWER);
        assert_eq!(classify(""), None);
    }

    #[test]
    fn test_case_insensitive() {
        let lower = find_answer("programs");
        assert_eq!(find_answer("PROGRAMS"), lower);
        assert_eq!(find_answer("Programs"), lower);
    }

    #[test]
    fn test_no_trailing_newline() {
        for topic in Topic::PRIORITY {
            let answer = topic.render(dataset::programs());
            assert!(!answer.ends_with('\n'), "{:?} answer ends with newline", topic);
            assert_eq!(answer.lines().count(), dataset::programs().len());
        }
    }
}
