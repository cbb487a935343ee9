use std::sync::Arc;

/// A selectable country with its flag glyph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    pub name: String,
    pub flag: String,
}

impl Country {
    pub fn new(name: impl Into<String>, flag: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            flag: flag.into(),
        }
    }
}

const BUILT_IN: &[(&str, &str)] = &[
    ("United States", "🇺🇸"),
    ("Canada", "🇨🇦"),
    ("United Kingdom", "🇬🇧"),
    ("Australia", "🇦🇺"),
    ("Germany", "🇩🇪"),
    ("France", "🇫🇷"),
    ("Spain", "🇪🇸"),
    ("Italy", "🇮🇹"),
    ("Netherlands", "🇳🇱"),
    ("Sweden", "🇸🇪"),
    ("Norway", "🇳🇴"),
    ("Denmark", "🇩🇰"),
    ("Finland", "🇫🇮"),
    ("Switzerland", "🇨🇭"),
    ("Austria", "🇦🇹"),
    ("Belgium", "🇧🇪"),
    ("Ireland", "🇮🇪"),
    ("Portugal", "🇵🇹"),
    ("Japan", "🇯🇵"),
    ("South Korea", "🇰🇷"),
    ("Singapore", "🇸🇬"),
    ("New Zealand", "🇳🇿"),
    ("India", "🇮🇳"),
    ("Brazil", "🇧🇷"),
    ("Mexico", "🇲🇽"),
    ("Argentina", "🇦🇷"),
    ("Chile", "🇨🇱"),
    ("Colombia", "🇨🇴"),
    ("South Africa", "🇿🇦"),
    ("China", "🇨🇳"),
    ("Russia", "🇷🇺"),
    ("Turkey", "🇹🇷"),
    ("Israel", "🇮🇱"),
    ("United Arab Emirates", "🇦🇪"),
    ("Saudi Arabia", "🇸🇦"),
    ("Egypt", "🇪🇬"),
    ("Nigeria", "🇳🇬"),
    ("Kenya", "🇰🇪"),
    ("Ghana", "🇬🇭"),
    ("Other", "🌍"),
];

/// Immutable list of countries offered by the country picker.
///
/// Passed into the form rather than read from a global, so a host can swap in
/// a localized or trimmed list. Clones share the same backing slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryTable {
    countries: Arc<[Country]>,
}

impl Default for CountryTable {
    fn default() -> Self {
        Self::new(
            BUILT_IN
                .iter()
                .map(|(name, flag)| Country::new(*name, *flag))
                .collect(),
        )
    }
}

impl CountryTable {
    pub fn new(countries: Vec<Country>) -> Self {
        Self {
            countries: countries.into(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Country> {
        self.countries.iter()
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Find a country by its exact name.
    pub fn find(&self, name: &str) -> Option<&Country> {
        self.countries.iter().find(|c| c.name == name)
    }

    /// Flag glyph for the named country, if it is in the table.
    pub fn flag_for(&self, name: &str) -> Option<&str> {
        self.find(name).map(|c| c.flag.as_str())
    }
}
