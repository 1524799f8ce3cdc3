use pdf2quiz_core::model::ParsedBank;
use pdf2quiz_core::rewrite::RewriteSummary;
use pdf2quiz_core::stats::BankStats;
use std::path::Path;

pub fn print_parse_summary(bank: &ParsedBank, out_path: &Path) {
    println!(
        "Parsed {} question(s), written to {}",
        bank.records.len(),
        out_path.display()
    );
    for w in &bank.warnings {
        eprintln!("  warning: {w}");
    }
}

pub fn print_stats(stats: &BankStats) {
    print!("{}", format_stats(stats));
}

/// Skipped chunks, one per line.
pub fn print_skipped(bank: &ParsedBank) {
    println!("  Extracted text:   {} chars", bank.text_chars);
    println!("  Skipped chunks:   {}", bank.skipped.len());
    for s in &bank.skipped {
        println!("    #{:<6} topic {:<3} {}", s.id, s.topic, s.reason);
    }
}

pub fn format_stats(stats: &BankStats) -> String {
    let mut out = format!("\n  Questions:        {}\n", stats.total);
    out.push_str(&format!(
        "  With explanation: {} / {}\n",
        stats.with_explanation, stats.total
    ));

    if !stats.by_topic.is_empty() {
        out.push_str("\n  By topic:\n");
        for (topic, count) in &stats.by_topic {
            out.push_str(&format!("    Topic {:<4} {:>5}\n", topic, count));
        }
    }

    if !stats.by_option_count.is_empty() {
        out.push_str("\n  By option count:\n");
        for (options, count) in &stats.by_option_count {
            out.push_str(&format!("    {} options {:>5}\n", options, count));
        }
    }
    out
}

pub fn print_rewrite_summary(ruleset: &str, summary: &RewriteSummary, out_path: &Path) {
    println!("=== {ruleset} ===\n");
    println!("  Processed: {}", summary.processed);
    println!("  Updated:   {}", summary.updated);
    println!("\nWritten to {}", out_path.display());
}

pub fn print_index_summary(names: &[String], manifest: &Path) {
    println!("Indexed {} bank(s) into {}", names.len(), manifest.display());
    for name in names {
        println!("  {name}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_format_stats() {
        let stats = BankStats {
            total: 3,
            by_topic: BTreeMap::from([(1, 2), (2, 1)]),
            with_explanation: 1,
            by_option_count: BTreeMap::from([(4, 3)]),
        };
        let text = format_stats(&stats);
        assert!(text.contains("Questions:        3"));
        assert!(text.contains("With explanation: 1 / 3"));
        assert!(text.contains("Topic 1        2"));
        assert!(text.contains("4 options     3"));
    }

    #[test]
    fn test_format_stats_empty_bank() {
        let text = format_stats(&BankStats::default());
        assert!(text.contains("Questions:        0"));
        assert!(!text.contains("By topic"));
    }
}
