/// How many parsed/ignored tokens the page will render as chips.
pub const CHIP_CAP: usize = 12;
/// How many ignored tokens are spelled out before the list is elided.
pub const IGNORED_SHOWN: usize = 6;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LinkParse {
    /// Distinct http(s) tokens in first-occurrence order.
    pub valid: Vec<String>,
    /// Everything else, in order, duplicates included.
    pub invalid: Vec<String>,
}

pub fn has_http_scheme(token: &str) -> bool {
    let head: String = token.chars().take(8).collect::<String>().to_ascii_lowercase();
    head.starts_with("http://") || head.starts_with("https://")
}

/// Splits the raw links text on runs of whitespace and/or commas, then
/// partitions the tokens into valid http(s) links (deduplicated) and
/// ignored leftovers.
pub fn split_link_tokens(raw: &str) -> LinkParse {
    let mut parse = LinkParse::default();
    for token in raw.split(|c: char| c.is_whitespace() || c == ',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        if has_http_scheme(token) {
            if !parse.valid.iter().any(|v| v == token) {
                parse.valid.push(token.to_string());
            }
        } else {
            parse.invalid.push(token.to_string());
        }
    }
    parse
}

impl LinkParse {
    pub fn chips(&self) -> &[String] {
        &self.valid[..self.valid.len().min(CHIP_CAP)]
    }

    pub fn ignored(&self) -> &[String] {
        &self.invalid[..self.invalid.len().min(CHIP_CAP)]
    }

    /// The "Ignored: a, b, c…" text for the helper banner.
    pub fn ignored_summary(&self) -> String {
        let shown = self.ignored();
        let mut summary = shown
            .iter()
            .take(IGNORED_SHOWN)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        if shown.len() > IGNORED_SHOWN {
            summary.push('…');
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_commas_whitespace_and_newlines() {
        let parse =
            split_link_tokens("https://a.com, https://b.com\nnot-a-link https://a.com");
        assert_eq!(parse.valid, vec!["https://a.com", "https://b.com"]);
        assert_eq!(parse.invalid, vec!["not-a-link"]);
    }

    #[test]
    fn dedupes_valid_preserving_first_occurrence_order() {
        let parse = split_link_tokens("https://b.com https://a.com https://b.com https://a.com");
        assert_eq!(parse.valid, vec!["https://b.com", "https://a.com"]);
    }

    #[test]
    fn scheme_match_is_case_insensitive() {
        let parse = split_link_tokens("HTTPS://A.com Http://b.com htt://c.com");
        assert_eq!(parse.valid, vec!["HTTPS://A.com", "Http://b.com"]);
        assert_eq!(parse.invalid, vec!["htt://c.com"]);
    }

    #[test]
    fn empty_and_separator_only_input_yields_nothing() {
        assert_eq!(split_link_tokens(""), LinkParse::default());
        assert_eq!(split_link_tokens(" ,, \n\t ,"), LinkParse::default());
    }

    #[test]
    fn invalid_tokens_keep_duplicates() {
        let parse = split_link_tokens("foo foo bar");
        assert_eq!(parse.invalid, vec!["foo", "foo", "bar"]);
    }

    #[test]
    fn ignored_summary_elides_past_six() {
        let raw = "a b c d e f g h";
        let parse = split_link_tokens(raw);
        assert_eq!(parse.ignored_summary(), "a, b, c, d, e, f…");

        let parse = split_link_tokens("a b");
        assert_eq!(parse.ignored_summary(), "a, b");
    }

    #[test]
    fn chips_cap_at_twelve() {
        let raw = (0..20)
            .map(|i| format!("https://site{i}.com"))
            .collect::<Vec<_>>()
            .join(" ");
        let parse = split_link_tokens(&raw);
        assert_eq!(parse.valid.len(), 20);
        assert_eq!(parse.chips().len(), CHIP_CAP);
    }
}
