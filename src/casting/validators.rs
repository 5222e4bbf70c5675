use chrono::{Datelike, Local, NaiveDate};

pub const MESSAGE_MAX: usize = 280;
pub const MIN_LINKS: usize = 3;
pub const MAX_LINKS: usize = 6;
pub const ADULT_AGE: i32 = 18;

/// Loose syntactic check: something before an `@`, a `.` somewhere inside
/// the domain part. Deliverability is the backend's problem.
pub fn email_ok(v: &str) -> bool {
    let v = v.trim();
    match v.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain
                    .char_indices()
                    .any(|(i, c)| c == '.' && i > 0 && i < domain.len() - 1)
        }
        None => false,
    }
}

pub fn url_ok(v: &str) -> bool {
    let v = v.trim();
    v.strip_prefix("http://")
        .or_else(|| v.strip_prefix("https://"))
        .map_or(false, |rest| !rest.is_empty())
}

/// Optional phone: empty passes; otherwise the value must contain a run of
/// at least 7 characters drawn from digits, spaces, parentheses, `+`, `-`.
pub fn phone_ok(v: &str) -> bool {
    if v.trim().is_empty() {
        return true;
    }
    let mut run = 0usize;
    for c in v.chars() {
        if c.is_ascii_digit() || matches!(c, '+' | '(' | ')' | '-' | ' ') {
            run += 1;
            if run >= 7 {
                return true;
            }
        } else {
            run = 0;
        }
    }
    false
}

pub fn name_ok(v: &str) -> bool {
    v.trim().chars().count() > 1
}

pub fn message_ok(v: &str) -> bool {
    v.chars().count() <= MESSAGE_MAX
}

pub fn parse_dob(dob: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(dob.trim(), "%Y-%m-%d").ok()
}

/// Whole years elapsed between `dob` and `today`, by year/month/day
/// comparison rather than day-count division.
pub fn age_on(dob: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - dob.year();
    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        age -= 1;
    }
    age
}

/// Age today, or 0 when the field is empty or unparseable.
pub fn age_from_dob(dob: &str) -> i32 {
    parse_dob(dob)
        .map(|d| age_on(d, Local::now().date_naive()))
        .unwrap_or(0)
}

pub fn is_adult(dob: &str) -> bool {
    age_from_dob(dob) >= ADULT_AGE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_requires_at_and_dotted_domain() {
        assert!(email_ok("jane@x.com"));
        assert!(email_ok("  jane.doe@mail.example.org "));
        assert!(!email_ok("jane"));
        assert!(!email_ok("jane@"));
        assert!(!email_ok("@x.com"));
        assert!(!email_ok("jane@x"));
        assert!(!email_ok("jane@.com"));
        assert!(!email_ok("jane@x."));
    }

    #[test]
    fn url_requires_http_scheme() {
        assert!(url_ok("http://example.com"));
        assert!(url_ok("https://example.com/p/1"));
        assert!(!url_ok("ftp://example.com"));
        assert!(!url_ok("example.com"));
        assert!(!url_ok("https://"));
        assert!(!url_ok(""));
    }

    #[test]
    fn phone_is_optional_but_checked_when_present() {
        assert!(phone_ok(""));
        assert!(phone_ok("   "));
        assert!(phone_ok("+91 95103 94742"));
        assert!(phone_ok("(022) 555-0199"));
        assert!(phone_ok("9510394"));
        assert!(!phone_ok("12345"));
        assert!(!phone_ok("call me"));
    }

    #[test]
    fn name_needs_more_than_one_char() {
        assert!(name_ok("Jo"));
        assert!(name_ok("  Jane Doe  "));
        assert!(!name_ok("J"));
        assert!(!name_ok("   "));
        assert!(!name_ok(""));
    }

    #[test]
    fn message_capped_at_280_chars() {
        assert!(message_ok(""));
        assert!(message_ok(&"x".repeat(MESSAGE_MAX)));
        assert!(!message_ok(&"x".repeat(MESSAGE_MAX + 1)));
    }

    #[test]
    fn age_boundary_is_exact_to_the_day() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        let exactly_18 = NaiveDate::from_ymd_opt(2008, 8, 6).unwrap();
        let one_day_short = NaiveDate::from_ymd_opt(2008, 8, 7).unwrap();
        assert_eq!(age_on(exactly_18, today), 18);
        assert_eq!(age_on(one_day_short, today), 17);
    }

    #[test]
    fn age_handles_month_rollover() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        let later_month = NaiveDate::from_ymd_opt(2000, 12, 1).unwrap();
        let earlier_month = NaiveDate::from_ymd_opt(2000, 2, 1).unwrap();
        assert_eq!(age_on(later_month, today), 25);
        assert_eq!(age_on(earlier_month, today), 26);
    }

    #[test]
    fn unparseable_dob_reads_as_age_zero() {
        assert_eq!(age_from_dob(""), 0);
        assert_eq!(age_from_dob("not-a-date"), 0);
        assert_eq!(age_from_dob("31-12-1990"), 0);
    }

    #[test]
    fn clearly_adult_and_minor_dates() {
        assert!(is_adult("1990-05-04"));
        assert!(!is_adult("2020-01-01"));
        assert!(!is_adult(""));
    }
}
