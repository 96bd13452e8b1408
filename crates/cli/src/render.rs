//! Plain-text rendering of a consolidation report.
//!
//! Consumes the report structure as-is; nothing is re-derived here beyond
//! display formatting (truncation, alignment, the numeric summary).

use std::fmt::Write as _;

use curator_analysis::{ConsolidateRecommendation, ConsolidationReport, KeepRecommendation, format_price};
use curator_catalog::Product;

const LINE_WIDTH: usize = 100;
const NAME_WIDTH: usize = 45;

pub fn render_report(report: &ConsolidationReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", "=".repeat(LINE_WIDTH));
    let _ = writeln!(out, "{:^width$}", "PRODUCT CONSOLIDATION RECOMMENDATIONS", width = LINE_WIDTH);
    let _ = writeln!(out, "{}", "=".repeat(LINE_WIDTH));
    let _ = writeln!(out);

    render_keep(&mut out, &report.keep);
    render_consolidate(&mut out, &report.consolidate);
    render_archive(&mut out, &report.archive);
    render_summary(&mut out, report);

    out
}

fn render_keep(out: &mut String, keep: &[KeepRecommendation]) {
    if keep.is_empty() {
        return;
    }
    let _ = writeln!(out, "KEEP AS-IS ({} products):", keep.len());
    let mut sorted: Vec<&KeepRecommendation> = keep.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));
    for item in sorted {
        let _ = writeln!(
            out,
            "  - {:<name_width$} score {:>3} | {:<20} | {}",
            truncate(&item.name, NAME_WIDTH),
            item.score,
            item.display_price,
            item.reasons.join(", "),
            name_width = NAME_WIDTH,
        );
    }
    let _ = writeln!(out);
}

fn render_consolidate(out: &mut String, consolidate: &[ConsolidateRecommendation]) {
    if consolidate.is_empty() {
        return;
    }
    let _ = writeln!(out, "CONSOLIDATE ({} groups):", consolidate.len());
    let _ = writeln!(out, "  (keep the best variant, add its missing prices, archive the rest)");
    let _ = writeln!(out);
    let mut sorted: Vec<&ConsolidateRecommendation> = consolidate.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));
    for item in sorted {
        let missing: Vec<&str> = item
            .all_distinct_prices
            .iter()
            .filter(|p| !item.keep_current_prices.contains(p))
            .map(String::as_str)
            .collect();

        let _ = writeln!(out, "  {}:", truncate(&item.name, NAME_WIDTH));
        let _ = writeln!(out, "    keep: {} (score {})", short_id(&item.keep.id), item.keep_score);
        let _ = writeln!(out, "      reasons: {}", join_or_none(&item.keep_reasons));
        let _ = writeln!(out, "      current prices: {}", join_or_none(&item.keep_current_prices));
        let _ = writeln!(out, "      prices to add: {}", join_or_none(&missing));
        let _ = writeln!(out, "    archive ({} variants):", item.archive_candidates.len());
        for candidate in &item.archive_candidates {
            let _ = writeln!(
                out,
                "      - {} | {}",
                short_id(&candidate.id),
                format_price(candidate.first_price()),
            );
        }
        let _ = writeln!(out);
    }
}

fn render_archive(out: &mut String, archive: &[Product]) {
    if archive.is_empty() {
        return;
    }
    let _ = writeln!(out, "ARCHIVE DUPLICATES ({} products):", archive.len());
    let mut sorted: Vec<&Product> = archive.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));
    for product in sorted {
        let _ = writeln!(
            out,
            "  - {:<name_width$} | {}",
            truncate(&product.name, NAME_WIDTH),
            format_price(product.first_price()),
            name_width = NAME_WIDTH,
        );
    }
    let _ = writeln!(out);
}

fn render_summary(out: &mut String, report: &ConsolidationReport) {
    let active = report.keep.len() + report.consolidate.len();
    let reduction = report.archive.len() + report.consolidate.len();

    let _ = writeln!(out, "{}", "=".repeat(LINE_WIDTH));
    let _ = writeln!(out, "SUMMARY:");
    let _ = writeln!(out, "  products to keep:        {}", report.keep.len());
    let _ = writeln!(out, "  products to consolidate: {}", report.consolidate.len());
    let _ = writeln!(out, "  products to archive:     {}", report.archive.len());
    let _ = writeln!(out, "  active after consolidation: {active}");
    let _ = writeln!(out, "  reduction: {} products -> {}", reduction, report.consolidate.len());
    let _ = writeln!(out, "{}", "=".repeat(LINE_WIDTH));
}

fn short_id(id: &str) -> String {
    if id.chars().count() <= 8 {
        id.to_string()
    } else {
        let head: String = id.chars().take(8).collect();
        format!("{head}...")
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{head}...")
    }
}

fn join_or_none<S: AsRef<str>>(items: &[S]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use curator_analysis::analyze;
    use curator_catalog::Catalog;

    fn sample_report() -> ConsolidationReport {
        let catalog = Catalog::from_json_str(
            r#"{"items": [
                {"id": "solo-product-0001", "name": "Desk",
                 "prices": [{"amount_type": "fixed", "price_amount": 1999}]},
                {"id": "free-chair-000001", "name": "Chair",
                 "prices": [{"amount_type": "free"}]},
                {"id": "paid-chair-000001", "name": "Chair",
                 "prices": [{"amount_type": "fixed", "price_amount": 999}]},
                {"id": "lamp-a-0000000001", "name": "Lamp",
                 "prices": [{"amount_type": "free"}]},
                {"id": "lamp-b-0000000001", "name": "Lamp",
                 "prices": [{"amount_type": "free"}]}
            ]}"#,
        )
        .unwrap();
        analyze(&catalog, Utc::now())
    }

    #[test]
    fn renders_all_sections_and_summary() {
        let text = render_report(&sample_report());
        assert!(text.contains("KEEP AS-IS (2 products):"));
        assert!(text.contains("CONSOLIDATE (1 groups):"));
        assert!(text.contains("ARCHIVE DUPLICATES (1 products):"));
        assert!(text.contains("prices to add: FREE"));
        assert!(text.contains("active after consolidation: 3"));
        assert!(text.contains("reduction: 2 products -> 1"));
    }

    #[test]
    fn ids_are_truncated_for_display() {
        let text = render_report(&sample_report());
        assert!(text.contains("free-cha...") || text.contains("paid-cha..."));
        assert!(!text.contains("paid-chair-000001 |"));
    }

    #[test]
    fn empty_report_renders_summary_only() {
        let text = render_report(&ConsolidationReport::default());
        assert!(!text.contains("KEEP AS-IS"));
        assert!(!text.contains("CONSOLIDATE"));
        assert!(!text.contains("ARCHIVE DUPLICATES"));
        assert!(text.contains("products to keep:        0"));
    }

    #[test]
    fn truncate_keeps_short_strings_intact() {
        assert_eq!(truncate("Chair", 45), "Chair");
        assert_eq!(short_id("abc"), "abc");
        assert_eq!(short_id("0123456789abcdef"), "01234567...");
    }
}
