use regex::{Captures, Regex};
use std::sync::LazyLock;

use super::{Extraction, parse_length};
use crate::core::CountryRecord;

// Country(name: "afghanistan", code: "+93", flag: "🇦🇫", min: 9, max: 9)
// Fields are positional: reordered or renamed fields do not match.
// Lengths are ASCII digits and must fit in a u64.
const COUNTRY_CALL_PATTERN: &str = concat!(
    r#"Country\s*\(\s*"#,
    r#"name:\s*"(?<name>[^"]+)",\s*"#,
    r#"code:\s*"(?<code>[^"]+)",\s*"#,
    r#"flag:\s*"(?<flag>[^"]+)",\s*"#,
    r#"min:\s*(?<min>[0-9]+),\s*"#,
    r#"max:\s*(?<max>[0-9]+)\s*\)"#,
);

static COUNTRY_CALL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(COUNTRY_CALL_PATTERN).unwrap());

// Anything that opens a `Country(name:` call, well-formed or not.
static COUNTRY_CANDIDATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"Country\s*\(\s*name\s*:"#).unwrap());

/// Extract all `Country(...)` records from Dart source text.
pub fn extract_dart_countries(source: &str) -> Extraction {
    let records = COUNTRY_CALL_REGEX
        .captures_iter(source)
        .filter_map(|caps| to_record(&caps))
        .collect();

    Extraction {
        records,
        candidates: COUNTRY_CANDIDATE_REGEX.find_iter(source).count(),
    }
}

fn to_record(caps: &Captures) -> Option<CountryRecord> {
    let min = parse_length(&caps["min"])?;
    let max = parse_length(&caps["max"])?;
    let record = CountryRecord::new(&caps["name"], &caps["code"], min, max);
    Some(record.with_flag(&caps["flag"]))
}
