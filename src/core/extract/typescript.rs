use regex::{Captures, Regex};
use std::sync::LazyLock;

use super::{Extraction, parse_length};
use crate::core::CountryRecord;

// {"name": "afghanistan", "code": "+93", "min": 9, "max": 9, "flag": "🇦🇫"}
// Keys may be quoted or bare so generated listings read back the same way.
// Lengths are ASCII digits and must fit in a u64.
const COUNTRY_OBJECT_PATTERN: &str = concat!(
    r#"\{\s*"#,
    r#"(?:"name"|name):\s*"(?<name>[^"]+)",\s*"#,
    r#"(?:"code"|code):\s*"(?<code>[^"]+)",\s*"#,
    r#"(?:"min"|min):\s*(?<min>[0-9]+),\s*"#,
    r#"(?:"max"|max):\s*(?<max>[0-9]+)"#,
    r#"(?:,\s*(?:"flag"|flag):\s*"(?<flag>[^"]+)")?\s*\}"#,
);

static COUNTRY_OBJECT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(COUNTRY_OBJECT_PATTERN).unwrap());

// An object literal whose first key is `name` with a string value.
// The value quote keeps `interface Country { name: string; ... }` out.
static COUNTRY_CANDIDATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\{\s*(?:"name"|name)\s*:\s*""#).unwrap());

/// Extract all country object literals from TypeScript source text.
///
/// A trailing `flag` field is optional; records without one have `flag: None`.
pub fn extract_ts_countries(source: &str) -> Extraction {
    let records = COUNTRY_OBJECT_REGEX
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
    let mut record = CountryRecord::new(&caps["name"], &caps["code"], min, max);
    record.flag = caps.name("flag").map(|m| m.as_str().to_string());
    Some(record)
}
