use linkbrief_core::SummarizationRecord;
use owo_colors::OwoColorize;

use crate::VERSION;

/// Print a styled banner for verbose mode
pub fn print_banner() {
    eprintln!(
        "\n{} {} {}",
        "Linkbrief".bold().bright_blue(),
        "v".dimmed(),
        VERSION.dimmed()
    );
    eprintln!("{}", "Summarization-ready content from web pages\n".dimmed());
}

/// Print a styled step message
pub fn print_step(step: usize, total: usize, message: &str) {
    eprintln!("{} {}", format!("[{}/{}]", step, total).dimmed(), message.bright_cyan());
}

/// Print a success message
pub fn print_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message.bright_green());
}

/// Print extraction details summary
pub fn print_record_details(record: &SummarizationRecord) {
    let stats = &record.content_stats;

    eprintln!("\n{}", "═".repeat(60).dimmed());
    eprintln!("{}", "Extraction Details".bold().cyan());
    eprintln!("{}", "═".repeat(60).dimmed());
    if !record.title.is_empty() {
        eprintln!("  {} {}", "Title:".dimmed(), record.title.bright_white());
    }
    eprintln!("  {} {}", "Words:".dimmed(), stats.word_count.to_string().bright_white());
    eprintln!(
        "  {} {} min",
        "Reading time:".dimmed(),
        stats.estimated_reading_time.to_string().bright_white()
    );
    eprintln!(
        "  {} {}",
        "Headings:".dimmed(),
        record.headings_hierarchy.len().to_string().bright_white()
    );
    eprintln!(
        "  {} {}\n",
        "Tables:".dimmed(),
        record.table_summaries.len().to_string().bright_white()
    );
}

/// Format file size for display
pub fn format_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = 1024 * KB;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
