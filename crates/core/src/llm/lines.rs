use crate::domain::recommendation::RecommendationRecord;

/// Outcome of parsing one model reply: the records that matched the required
/// line format, plus the raw lines that did not. Skipped lines are diagnostic
/// only and must never reach user-facing output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedReply {
    pub records: Vec<RecommendationRecord>,
    pub skipped: Vec<String>,
}

/// Parses a plain-text reply of `Ticker: .., Name: .., Link: ..` lines.
///
/// One pass, in order. Blank lines are dropped silently. A line is skipped
/// (kept verbatim in `skipped`) when it has fewer than three `", "`-separated
/// parts or when any part lacks a `": "` separator. Parts beyond the third
/// are ignored. The split is purely syntactic: a comma-space inside a name or
/// link value truncates that value. Inherited limitation, kept as is.
pub fn parse_reply(text: &str) -> ParsedReply {
    let mut records = Vec::new();
    let mut skipped = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split(", ").collect();
        if parts.len() < 3 || !parts.iter().all(|part| part.contains(": ")) {
            skipped.push(line.to_string());
            continue;
        }

        match (
            field_value(parts[0]),
            field_value(parts[1]),
            field_value(parts[2]),
        ) {
            (Some(ticker), Some(name), Some(link)) => {
                records.push(RecommendationRecord { ticker, name, link });
            }
            // Unreachable after the separator check above; kept so a bad
            // positional split degrades to a skip instead of a panic.
            _ => skipped.push(line.to_string()),
        }
    }

    ParsedReply { records, skipped }
}

fn field_value(part: &str) -> Option<String> {
    part.splitn(2, ": ")
        .nth(1)
        .map(|value| value.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(ticker: &str, name: &str, link: &str) -> RecommendationRecord {
        RecommendationRecord {
            ticker: ticker.to_string(),
            name: name.to_string(),
            link: link.to_string(),
        }
    }

    #[test]
    fn parses_well_formed_line() {
        let parsed = parse_reply("Ticker: ABC, Name: Example Fund, Link: http://x.test");
        assert_eq!(
            parsed.records,
            vec![record("ABC", "Example Fund", "http://x.test")]
        );
        assert!(parsed.skipped.is_empty());
    }

    #[test]
    fn blank_lines_produce_nothing() {
        let parsed = parse_reply("\n   \n\t\n");
        assert!(parsed.records.is_empty());
        assert!(parsed.skipped.is_empty());
    }

    #[test]
    fn garbage_line_is_skipped_verbatim() {
        let parsed = parse_reply("garbage text");
        assert!(parsed.records.is_empty());
        assert_eq!(parsed.skipped, vec!["garbage text".to_string()]);
    }

    #[test]
    fn extra_parts_are_ignored() {
        let parsed = parse_reply("Ticker: A, Name: B, Link: C, Extra: D");
        assert_eq!(parsed.records, vec![record("A", "B", "C")]);
        assert!(parsed.skipped.is_empty());
    }

    #[test]
    fn extra_part_without_separator_skips_the_line() {
        // The separator check covers every part, not just the first three.
        let parsed = parse_reply("Ticker: A, Name: B, Link: C, trailing note");
        assert!(parsed.records.is_empty());
        assert_eq!(parsed.skipped.len(), 1);
    }

    #[test]
    fn two_parts_are_not_enough() {
        let parsed = parse_reply("Ticker: A, Name: B");
        assert!(parsed.records.is_empty());
        assert_eq!(parsed.skipped, vec!["Ticker: A, Name: B".to_string()]);
    }

    #[test]
    fn values_are_trimmed() {
        let parsed = parse_reply("Ticker:  SPY , Name:  SPDR S&P 500 , Link:  https://ssga.com ");
        assert_eq!(
            parsed.records,
            vec![record("SPY", "SPDR S&P 500", "https://ssga.com")]
        );
    }

    #[test]
    fn only_first_separator_splits_a_field() {
        let parsed = parse_reply("Ticker: X, Name: Fund: The Sequel, Link: http://x.test");
        assert_eq!(parsed.records[0].name, "Fund: The Sequel");
    }

    #[test]
    fn comma_space_inside_a_value_truncates_it() {
        // Documented limitation of the comma-space protocol.
        let parsed = parse_reply("Ticker: X, Name: Big, Bold Fund, Link: L");
        assert!(parsed.records.is_empty());
        assert_eq!(parsed.skipped.len(), 1);
    }

    #[test]
    fn interleaved_lines_keep_relative_order_and_counts() {
        let text = "\
Ticker: AAA, Name: Fund A, Link: http://a.test
not a record
Ticker: BBB, Name: Fund B, Link: http://b.test

still not a record
Ticker: CCC, Name: Fund C, Link: http://c.test";

        let parsed = parse_reply(text);
        assert_eq!(parsed.records.len(), 3);
        assert_eq!(parsed.skipped.len(), 2);
        assert_eq!(parsed.records[0].ticker, "AAA");
        assert_eq!(parsed.records[1].ticker, "BBB");
        assert_eq!(parsed.records[2].ticker, "CCC");
        assert_eq!(parsed.skipped[0], "not a record");
        assert_eq!(parsed.skipped[1], "still not a record");
    }

    #[test]
    fn parsing_is_idempotent() {
        let text = "Ticker: AAA, Name: Fund A, Link: http://a.test\ngarbage\n";
        assert_eq!(parse_reply(text), parse_reply(text));
    }
}
