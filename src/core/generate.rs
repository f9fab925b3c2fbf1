//! TypeScript listing generation.

use std::fmt::Write as _;

use anyhow::{Result, bail};

use crate::core::CountryRecord;

const LISTING_HEADER: &str = "\
export interface Country {
  name: string;
  code: string;
  min: number;
  max: number;
  flag: string;
}

export const countries: Country[] = [
";

const LISTING_FOOTER: &str = "];\n";

/// Render records as a TypeScript `countries` array with a flag on every entry.
///
/// Flags come from the records themselves. A record without one is an error,
/// since the generated interface declares `flag` as required.
pub fn render_listing(records: &[CountryRecord]) -> Result<String> {
    let mut out = String::from(LISTING_HEADER);

    for record in records {
        let Some(flag) = record.flag.as_deref() else {
            bail!("Country '{}' has no flag", record.name);
        };
        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "  {{ name: \"{}\", code: \"{}\", min: {}, max: {}, flag: \"{}\" }},",
            record.name, record.code, record.min, record.max, flag
        );
    }

    out.push_str(LISTING_FOOTER);
    Ok(out)
}
