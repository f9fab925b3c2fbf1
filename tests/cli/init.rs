use anyhow::Result;

use crate::*;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout, _) = run(test.command().arg("init"))?;

    assert_eq!(code, 0);
    assert_eq!(stdout, "✓ Created .dialsyncrc.json\n");

    let config: serde_json::Value = serde_json::from_str(&test.read_file(".dialsyncrc.json")?)?;
    assert_eq!(config["mobileListing"], MOBILE_LISTING);
    assert_eq!(config["webListing"], WEB_LISTING);
    assert_eq!(config["mobileMessages"], MOBILE_MESSAGES);
    assert_eq!(config["webMessages"], WEB_MESSAGES);
    assert_eq!(config["output"], OUTPUT);

    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".dialsyncrc.json", "{}")?;

    let (code, _, stderr) = run(test.command().arg("init"))?;

    assert_eq!(code, 2);
    assert_eq!(stderr, "Error: .dialsyncrc.json already exists\n");
    assert_eq!(test.read_file(".dialsyncrc.json")?, "{}");

    Ok(())
}
