use owo_colors::OwoColorize;
use std::io::IsTerminal;

use crate::scoring::RegionRanking;
use crate::template::Template;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format the ranking as an aligned table: rank, score, region.
/// Rank column fits "99.", score column is right-aligned to the widest score.
pub fn format_ranking_table(ranking: &[RegionRanking], use_colors: bool) -> String {
    if ranking.is_empty() {
        return "No regions scored.".to_string();
    }

    let score_width = ranking
        .iter()
        .map(|r| r.overall_score.to_string().len())
        .max()
        .unwrap_or(1);

    ranking
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let index_str = format!("{:>2}.", idx + 1);
            let score_str = format!("{:>width$}", entry.overall_score, width = score_width);

            if use_colors {
                format!(
                    "{} {}  {}",
                    index_str.dimmed(),
                    score_str.bold(),
                    entry.region.cyan()
                )
            } else {
                format!("{} {}  {}", index_str, score_str, entry.region)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the ranking as tab-separated values for scripting
/// Columns: region, overall score (no headers, no colors)
pub fn format_tsv(ranking: &[RegionRanking]) -> String {
    ranking
        .iter()
        .map(|entry| format!("{}\t{}", entry.region, entry.overall_score))
        .collect::<Vec<_>>()
        .join("\n")
}

/// List every parsed event year with its slots, one line per year
pub fn format_template(template: &Template, use_colors: bool) -> String {
    let mut lines = Vec::new();

    for (event, years) in template.iter() {
        if use_colors {
            lines.push(format!("{}", event.label().bold()));
        } else {
            lines.push(event.label().to_string());
        }

        if years.is_empty() {
            lines.push("  (no years)".to_string());
        }
        for (year, slots) in years {
            lines.push(format!("  {} ({:>2} slots): {}", year, slots.len(), slots));
        }
    }

    if lines.is_empty() {
        return "Template is empty.".to_string();
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::standings::EventKind;
    use crate::template::parse_cell;
    use std::collections::BTreeMap;

    fn ranking() -> Vec<RegionRanking> {
        vec![
            RegionRanking {
                region: "LCK".to_string(),
                overall_score: 112,
            },
            RegionRanking {
                region: "LPL".to_string(),
                overall_score: 98,
            },
        ]
    }

    #[test]
    fn test_table_empty() {
        assert_eq!(format_ranking_table(&[], false), "No regions scored.");
    }

    #[test]
    fn test_table_aligns_scores() {
        let table = format_ranking_table(&ranking(), false);
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines[0], " 1. 112  LCK");
        assert_eq!(lines[1], " 2.  98  LPL");
    }

    #[test]
    fn test_tsv() {
        assert_eq!(format_tsv(&ranking()), "LCK\t112\nLPL\t98");
        assert_eq!(format_tsv(&[]), "");
    }

    #[test]
    fn test_format_template() {
        let mut template = Template::new();
        let mut years = BTreeMap::new();
        years.insert(2019, parse_cell("1/2/3-4/5-8").unwrap());
        template.set_event(EventKind::Worlds, years);

        let text = format_template(&template, false);
        assert!(text.starts_with("Worlds"));
        assert!(text.contains("2019 ( 4 slots): 1 / 2 / 3-4 / 5-8"));
    }

    #[test]
    fn test_format_empty_template() {
        assert_eq!(format_template(&Template::new(), false), "Template is empty.");
    }
}
