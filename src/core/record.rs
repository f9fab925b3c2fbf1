/// One entry of a country calling code listing.
///
/// Both listings are extracted into this shape. Records from the mobile
/// listing always carry a flag; records from the web listing may not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryRecord {
    /// Canonical lowercase name, used as the key into translation files.
    pub name: String,
    /// Calling code as written in the source (e.g. `+93`).
    pub code: String,
    pub flag: Option<String>,
    /// Minimum local number length. Not checked against `max`.
    pub min: u64,
    pub max: u64,
}

impl CountryRecord {
    pub fn new(name: impl Into<String>, code: impl Into<String>, min: u64, max: u64) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            flag: None,
            min,
            max,
        }
    }

    pub fn with_flag(mut self, flag: impl Into<String>) -> Self {
        self.flag = Some(flag.into());
        self
    }
}
