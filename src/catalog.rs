//! The country catalog.
//!
//! A [`Catalog`] is validated once when it is built and is read-only
//! afterwards. The built-in one lives in a process-wide `LazyLock`; callers
//! that bring their own data go through [`CatalogBuilder`].

pub mod data;

use crate::{
    country::Country,
    lang::{LANG_TABLE, primary_subtag},
    resolver,
};
use data::COUNTRIES;
use std::{
    collections::HashMap,
    sync::LazyLock,
};
use thiserror::Error;
use tracing::debug;

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::from_builtin_data().expect("built-in catalog data is invalid – this is a bug")
});

/// Fatal configuration errors, raised while a catalog is built and never per guess.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("country #{0} has an empty code")]
    MissingCode(usize),

    #[error("country `{0}` has an empty name")]
    MissingName(String),

    #[error("duplicate country code `{0}`")]
    DuplicateCode(String),

    #[error("country `{code}` has invalid coordinates ({latitude}, {longitude})")]
    InvalidCoordinates {
        code: String,
        latitude: f64,
        longitude: f64,
    },

    #[error("`{lang}` name table refers to unknown country `{code}`")]
    UnknownTranslation { lang: String, code: String },
}

type NameMap = HashMap<String, String>;

#[derive(Debug, Clone)]
pub struct Catalog {
    countries: Vec<Country>,
    index: HashMap<String, usize>,
    names: HashMap<String, NameMap>,
}

impl Catalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Every country and territory the game ships with, plus the French,
    /// Hungarian and Dutch name tables.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    fn from_builtin_data() -> Result<Catalog, CatalogError> {
        let mut builder = Catalog::builder();
        for r in COUNTRIES {
            builder = builder.country(Country::new(r.code, r.latitude, r.longitude, r.name));
        }
        for (lang, table) in LANG_TABLE.entries() {
            builder = builder.names(lang, table.entries().map(|(code, name)| (*code, *name)));
        }
        builder.build()
    }

    #[inline]
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Country> {
        self.countries.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Case-insensitive lookup by code.
    pub fn get(&self, code: &str) -> Option<&Country> {
        self.index
            .get(&code.trim().to_ascii_uppercase())
            .map(|&i| &self.countries[i])
    }

    /// Languages that have a name table, sorted.
    pub fn languages(&self) -> Vec<&str> {
        let mut langs: Vec<&str> = self.names.keys().map(String::as_str).collect();
        langs.sort_unstable();
        langs
    }

    /// Display names for `lang` (any tag form: `"fr"`, `"fr-FR"`).
    pub fn names_for(&self, lang: &str) -> LocalizedNames<'_> {
        LocalizedNames {
            table: self.names.get(&primary_subtag(lang)),
        }
    }

    pub fn localized_name<'a>(&'a self, country: &'a Country, lang: &str) -> &'a str {
        self.names_for(lang).name_of(country)
    }

    /// See [`resolver::resolve`].
    pub fn resolve(&self, guess: &str, lang: &str) -> Option<&Country> {
        resolver::resolve(guess, lang, self)
    }

    /// A new catalog keeping only `codes`, in catalog order. Unknown codes are
    /// ignored; translations of the kept countries are carried over.
    pub fn restricted_to<I, S>(&self, codes: I) -> Catalog
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut keep = vec![false; self.countries.len()];
        for code in codes {
            if let Some(&i) = self.index.get(&code.as_ref().trim().to_ascii_uppercase()) {
                keep[i] = true;
            }
        }

        let countries: Vec<Country> = self
            .countries
            .iter()
            .zip(&keep)
            .filter(|(_, k)| **k)
            .map(|(c, _)| c.clone())
            .collect();
        let index = index_of(&countries);
        let names = self
            .names
            .iter()
            .map(|(lang, table)| {
                let kept = table
                    .iter()
                    .filter(|(code, _)| index.contains_key(*code))
                    .map(|(code, name)| (code.clone(), name.clone()))
                    .collect();
                (lang.clone(), kept)
            })
            .collect();

        Catalog {
            countries,
            index,
            names,
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Country;
    type IntoIter = std::slice::Iter<'a, Country>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn index_of(countries: &[Country]) -> HashMap<String, usize> {
    countries
        .iter()
        .enumerate()
        .map(|(i, c)| (c.code().to_string(), i))
        .collect()
}

/// One language's view of the catalog names.
#[derive(Debug, Clone, Copy)]
pub struct LocalizedNames<'a> {
    table: Option<&'a NameMap>,
}

impl<'a> LocalizedNames<'a> {
    /// Translated name, or the country's default name when the language or
    /// the entry is missing.
    pub fn name_of(&self, country: &'a Country) -> &'a str {
        self.table
            .and_then(|t| t.get(country.code()))
            .map(String::as_str)
            .unwrap_or_else(|| country.name())
    }
}

#[derive(Debug, Default)]
pub struct CatalogBuilder {
    countries: Vec<Country>,
    names: Vec<(String, Vec<(String, String)>)>,
}

impl CatalogBuilder {
    pub fn country(mut self, country: Country) -> Self {
        self.countries.push(country);
        self
    }

    pub fn countries<I: IntoIterator<Item = Country>>(mut self, countries: I) -> Self {
        self.countries.extend(countries);
        self
    }

    /// Adds (or extends) the name table for `lang`, keyed by country code.
    pub fn names<I, K, V>(mut self, lang: &str, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(code, name)| (code.as_ref().trim().to_ascii_uppercase(), name.into()))
            .collect();
        self.names.push((primary_subtag(lang), entries));
        self
    }

    pub fn build(self) -> Result<Catalog, CatalogError> {
        for (i, c) in self.countries.iter().enumerate() {
            if c.code().is_empty() {
                return Err(CatalogError::MissingCode(i));
            }
            if c.name().trim().is_empty() {
                return Err(CatalogError::MissingName(c.code().to_string()));
            }
            if !c.position().is_valid() {
                return Err(CatalogError::InvalidCoordinates {
                    code: c.code().to_string(),
                    latitude: c.latitude(),
                    longitude: c.longitude(),
                });
            }
        }

        let index = index_of(&self.countries);
        if index.len() != self.countries.len() {
            let mut seen = std::collections::HashSet::new();
            let dup = self
                .countries
                .iter()
                .find(|c| !seen.insert(c.code()))
                .map(|c| c.code().to_string())
                .unwrap_or_default();
            return Err(CatalogError::DuplicateCode(dup));
        }

        let mut names: HashMap<String, NameMap> = HashMap::new();
        for (lang, entries) in self.names {
            let table = names.entry(lang.clone()).or_default();
            for (code, name) in entries {
                if !index.contains_key(&code) {
                    return Err(CatalogError::UnknownTranslation { lang, code });
                }
                if name.trim().is_empty() {
                    return Err(CatalogError::MissingName(code));
                }
                table.insert(code, name);
            }
        }

        debug!(
            countries = self.countries.len(),
            languages = names.len(),
            "country catalog loaded"
        );

        Ok(Catalog {
            countries: self.countries,
            index,
            names,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> Catalog {
        Catalog::builder()
            .country(Country::new("FR", 46.2, 2.2, "France"))
            .country(Country::new("es", 40.4, -3.7, "Spain"))
            .names("fr", [("FR", "France"), ("es", "Espagne")])
            .names("hu-HU", [("FR", "Franciaország")])
            .build()
            .unwrap()
    }

    #[test]
    fn test_builtin_loads() {
        let catalog = Catalog::builtin();
        assert!(catalog.len() > 240);
        assert_eq!(catalog.languages(), ["fr", "hu", "nl"]);
        assert_eq!(catalog.get("fr").unwrap().name(), "France");
    }

    #[test]
    fn test_builtin_coordinates_are_valid() {
        for c in Catalog::builtin() {
            assert!(c.position().is_valid(), "{c}");
        }
    }

    #[test]
    fn test_get_is_case_insensitive() {
        let catalog = small();
        assert_eq!(catalog.get("ES").unwrap().name(), "Spain");
        assert_eq!(catalog.get("es").unwrap().name(), "Spain");
        assert!(catalog.get("DE").is_none());
    }

    #[test]
    fn test_localized_name_falls_back() {
        let catalog = small();
        let spain = catalog.get("ES").unwrap();
        let france = catalog.get("FR").unwrap();
        assert_eq!(catalog.localized_name(spain, "fr"), "Espagne");
        assert_eq!(catalog.localized_name(spain, "fr-BE"), "Espagne");
        assert_eq!(catalog.localized_name(france, "hu"), "Franciaország");
        // hu has no entry for ES
        assert_eq!(catalog.localized_name(spain, "hu"), "Spain");
        // unknown language
        assert_eq!(catalog.localized_name(spain, "de"), "Spain");
        assert_eq!(catalog.localized_name(spain, "en"), "Spain");
    }

    #[test]
    fn test_duplicate_code() {
        let err = Catalog::builder()
            .country(Country::new("FR", 46.2, 2.2, "France"))
            .country(Country::new("fr", 0.0, 0.0, "Also France"))
            .build()
            .unwrap_err();
        assert_eq!(err, CatalogError::DuplicateCode("FR".into()));
    }

    #[test]
    fn test_invalid_coordinates() {
        let err = Catalog::builder()
            .country(Country::new("XX", 91.0, 0.0, "Nowhere"))
            .build()
            .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidCoordinates { ref code, .. } if code == "XX"));

        let err = Catalog::builder()
            .country(Country::new("XY", f64::NAN, 0.0, "Nowhere"))
            .build()
            .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidCoordinates { .. }));
    }

    #[test]
    fn test_missing_fields() {
        let err = Catalog::builder()
            .country(Country::new("  ", 0.0, 0.0, "Blank"))
            .build()
            .unwrap_err();
        assert_eq!(err, CatalogError::MissingCode(0));

        let err = Catalog::builder()
            .country(Country::new("XX", 0.0, 0.0, ""))
            .build()
            .unwrap_err();
        assert_eq!(err, CatalogError::MissingName("XX".into()));
    }

    #[test]
    fn test_translation_for_unknown_country() {
        let err = Catalog::builder()
            .country(Country::new("FR", 46.2, 2.2, "France"))
            .names("nl", [("DE", "Duitsland")])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            CatalogError::UnknownTranslation {
                lang: "nl".into(),
                code: "DE".into()
            }
        );
    }

    #[test]
    fn test_restricted_to() {
        let catalog = Catalog::builtin().restricted_to(["es", "FR", "zz"]);
        let codes: Vec<_> = catalog.iter().map(Country::code).collect();
        assert_eq!(codes, ["ES", "FR"]);
        let spain = catalog.get("ES").unwrap();
        assert_eq!(catalog.localized_name(spain, "nl"), "Spanje");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CatalogError::DuplicateCode("FR".into()).to_string(),
            "duplicate country code `FR`"
        );
    }
}
