use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::*;

#[test]
fn test_sync_reports_and_writes_listing() -> Result<()> {
    let test = CliTest::with_project(DART_LISTING, TS_LISTING, MOBILE_STRINGS, WEB_MESSAGES_EN)?;

    let (code, stdout, _) = run(&mut test.sync_command())?;

    assert_eq!(code, 0);
    assert_eq!(
        stdout,
        "Mobile listing countries found: 3\n\
         Web listing countries found: 2\n\
         Missing in mobile translations: [\"andorra\"]\n\
         Missing in web translations: []\n\
         ✓ Generated new_countries.ts\n"
    );
    assert_eq!(
        test.read_file(OUTPUT)?,
        r#"export interface Country {
  name: string;
  code: string;
  min: number;
  max: number;
  flag: string;
}

export const countries: Country[] = [
  { name: "afghanistan", code: "+93", min: 9, max: 9, flag: "🇦🇫" },
  { name: "andorra", code: "+376", min: 6, max: 9, flag: "🇦🇩" },
  { name: "chad", code: "+235", min: 8, max: 8, flag: "🇹🇩" },
];
"#
    );

    Ok(())
}

#[test]
fn test_sync_is_default_command() -> Result<()> {
    let test = CliTest::with_project(DART_LISTING, TS_LISTING, MOBILE_STRINGS, WEB_MESSAGES_EN)?;

    let (code, stdout, _) = run(&mut test.command())?;

    assert_eq!(code, 0);
    assert!(stdout.ends_with("✓ Generated new_countries.ts\n"));
    assert!(test.root().join(OUTPUT).exists());

    Ok(())
}

#[test]
fn test_sync_does_not_touch_sources() -> Result<()> {
    let test = CliTest::with_project(DART_LISTING, TS_LISTING, MOBILE_STRINGS, WEB_MESSAGES_EN)?;

    run(&mut test.sync_command())?;

    assert_eq!(test.read_file(MOBILE_LISTING)?, DART_LISTING);
    assert_eq!(test.read_file(WEB_LISTING)?, TS_LISTING);

    Ok(())
}

#[test]
fn test_sync_empty_listings() -> Result<()> {
    let dart = "// no countries yet\n";
    let ts = "export const countries = [];\n";
    let test = CliTest::with_project(dart, ts, "{}", "{}")?;

    let (code, stdout, _) = run(&mut test.sync_command())?;

    assert_eq!(code, 0);
    assert_eq!(
        stdout,
        "Mobile listing countries found: 0\n\
         Web listing countries found: 0\n\
         Missing in mobile translations: []\n\
         Missing in web translations: []\n\
         ✓ Generated new_countries.ts\n"
    );
    let output = test.read_file(OUTPUT)?;
    assert!(output.ends_with("export const countries: Country[] = [\n];\n"));

    Ok(())
}

#[test]
fn test_sync_missing_input_fails_without_output() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(MOBILE_LISTING, DART_LISTING)?;
    test.write_file(WEB_LISTING, TS_LISTING)?;
    test.write_file(MOBILE_MESSAGES, MOBILE_STRINGS)?;

    let (code, stdout, stderr) = run(&mut test.sync_command())?;

    assert_eq!(code, 2);
    assert_eq!(
        stdout,
        "Mobile listing countries found: 3\n\
         Web listing countries found: 2\n"
    );
    assert!(stderr.starts_with("Error: Failed to read message file"));
    assert!(stderr.contains("en.json"));
    assert!(!test.root().join(OUTPUT).exists());

    Ok(())
}

#[test]
fn test_sync_malformed_messages_fail() -> Result<()> {
    let mobile_strings = "{ \"countries\": ";
    let test = CliTest::with_project(DART_LISTING, TS_LISTING, mobile_strings, WEB_MESSAGES_EN)?;

    let (code, stdout, stderr) = run(&mut test.sync_command())?;

    assert_eq!(code, 2);
    assert!(stdout.ends_with("Web listing countries found: 2\n"));
    assert!(stderr.starts_with("Error: Failed to parse message file"));
    assert!(!test.root().join(OUTPUT).exists());

    Ok(())
}

#[test]
fn test_sync_with_config_paths() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".dialsyncrc.json",
        r#"{
          "mobileListing": "app/countries.dart",
          "webListing": "web/countries.ts",
          "mobileMessages": "app/strings.json",
          "webMessages": "web/en.json",
          "output": "out/countries.ts"
        }"#,
    )?;
    test.write_file("app/countries.dart", DART_LISTING)?;
    test.write_file("web/countries.ts", TS_LISTING)?;
    test.write_file("app/strings.json", MOBILE_STRINGS)?;
    test.write_file("web/en.json", r#"{ "countries": { "chad": "Chad" } }"#)?;

    let (code, stdout, _) = run(&mut test.sync_command())?;

    assert_eq!(code, 0);
    assert!(stdout.contains("Missing in web translations: [\"afghanistan\", \"andorra\"]\n"));
    assert!(stdout.ends_with("✓ Generated out/countries.ts\n"));
    let output = test.read_file("out/countries.ts")?;
    assert!(output.contains("flag: \"🇹🇩\""));

    Ok(())
}

#[test]
fn test_sync_verbose_reports_dropped_records() -> Result<()> {
    let dart = r#"
  Country(name: "afghanistan", code: "+93", flag: "🇦🇫", min: 9, max: 9),
  Country(name: "andorra", flag: "🇦🇩", code: "+376", min: 6, max: 9),
"#;
    let test = CliTest::with_project(dart, TS_LISTING, MOBILE_STRINGS, WEB_MESSAGES_EN)?;

    let (code, stdout, stderr) = run(test.sync_command().arg("--verbose"))?;

    assert_eq!(code, 0);
    assert!(stdout.starts_with("Mobile listing countries found: 1\n"));
    assert!(stderr.contains("note: mobile listing: 1 of 2 candidate records extracted\n"));
    let warning = "warning: 1 record in mobile listing did not match the expected format\n";
    assert!(stderr.contains(warning));

    Ok(())
}

#[test]
fn test_generated_listing_reads_back_as_web_listing() -> Result<()> {
    let test = CliTest::with_project(DART_LISTING, TS_LISTING, MOBILE_STRINGS, WEB_MESSAGES_EN)?;
    run(&mut test.sync_command())?;

    let generated = test.read_file(OUTPUT)?;
    test.write_file(WEB_LISTING, &generated)?;

    let (code, stdout, _) = run(&mut test.sync_command())?;

    assert_eq!(code, 0);
    assert!(stdout.contains("Web listing countries found: 3\n"));
    assert_eq!(test.read_file(OUTPUT)?, generated);

    Ok(())
}
