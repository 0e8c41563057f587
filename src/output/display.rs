//! Display functions for command results

use super::formatters::{colored_mark, describe_present, describe_slots};
use crate::commands::Explanation;
use crate::core::decode_marks;
use colored::Colorize;

/// Print the decoded history, the constraints and the solution pattern
pub fn print_explanation(explanation: &Explanation) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("{}", "Attempts".bright_cyan().bold());
    println!("{}", "─".repeat(60).cyan());

    for attempt in &explanation.attempts {
        let tiles: Vec<String> = decode_marks(attempt)
            .iter()
            .map(|m| format!(" {} ", colored_mark(m)))
            .collect();
        println!("  {:<14} {}", attempt, tiles.join(""));
    }

    let constraints = &explanation.constraints;
    let found: String = (1..=explanation.pattern.word_length())
        .map(|p| constraints.found_at(p).unwrap_or('_'))
        .collect();
    let missing: String = constraints.missing().iter().collect();

    println!("\n📊 {}", "Constraints:".bright_cyan().bold());
    println!("   Found:    {}", found.green().bold());
    println!("   Present:  {}", describe_present(constraints).yellow());
    println!("   Missing:  {}", missing.bright_black());

    println!("\n🔎 {}", "Solution pattern:".bright_cyan().bold());
    println!("   {}", explanation.pattern.to_string().bright_yellow());
    for line in describe_slots(&explanation.pattern) {
        println!("   {line}");
    }
    if !explanation.pattern.is_satisfiable() {
        println!(
            "   {}",
            "Some position admits no letter: the attempts contradict each other.".red()
        );
    }

    let played: Vec<&str> = explanation.played.iter().map(String::as_str).collect();
    println!("\n📝 Words played: {}", played.join(", "));
}

/// Print a reply as-is
pub fn print_reply(reply: &str) {
    println!("{reply}");
}
