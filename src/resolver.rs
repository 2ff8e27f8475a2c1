//! Free-text input → catalog entry.

use crate::{catalog::Catalog, country::Country, normalizer::normalize};
use tracing::trace;

/// Finds the country whose localized name (for `lang`, falling back to the
/// default name) normalizes to the same string as `guess`.
///
/// Ties are broken by catalog order. Input that normalizes to nothing never
/// matches.
pub fn resolve<'c>(guess: &str, lang: &str, catalog: &'c Catalog) -> Option<&'c Country> {
    let wanted = normalize(guess);
    if wanted.is_empty() {
        return None;
    }
    let names = catalog.names_for(lang);
    let found = catalog
        .iter()
        .find(|c| normalize(names.name_of(c)) == wanted);
    trace!(guess, lang, normalized = %wanted, found = found.map(Country::code), "resolve");
    found
}

/// Localized names containing `input` once both are normalized, sorted by
/// their normalized form.
///
/// Used to drive the autocomplete list under the guess input.
pub fn suggest<'c>(input: &str, lang: &str, catalog: &'c Catalog) -> Vec<&'c str> {
    let wanted = normalize(input);
    if wanted.is_empty() {
        return Vec::new();
    }
    let names = catalog.names_for(lang);
    let mut hits: Vec<(String, &'c str)> = catalog
        .iter()
        .map(|c| names.name_of(c))
        .filter_map(|name| {
            let key = normalize(name);
            key.contains(&*wanted).then(|| (key.into_owned(), name))
        })
        .collect();
    hits.sort_unstable();
    hits.into_iter().map(|(_, name)| name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{lang::all_langs, normalizer::normalize};

    fn small() -> Catalog {
        Catalog::builder()
            .country(Country::new("FR", 46.2, 2.2, "France"))
            .country(Country::new("ES", 40.4, -3.7, "Spain"))
            .country(Country::new("CI", 7.539989, -5.54708, "Côte d'Ivoire"))
            .names("fr", [("ES", "Espagne")])
            .build()
            .unwrap()
    }

    #[test]
    fn test_exact_and_variants() {
        let catalog = small();
        for input in ["Spain", "spain", "SPAIN", " s p a i n ", "Spa-in"] {
            assert_eq!(resolve(input, "en", &catalog).unwrap().code(), "ES", "{input}");
        }
        for input in ["Côte d'Ivoire", "cote divoire", "COTE-D'IVOIRE"] {
            assert_eq!(resolve(input, "en", &catalog).unwrap().code(), "CI", "{input}");
        }
    }

    #[test]
    fn test_uses_active_language() {
        let catalog = small();
        assert_eq!(resolve("Espagne", "fr", &catalog).unwrap().code(), "ES");
        assert!(resolve("Spain", "fr", &catalog).is_none());
        assert!(resolve("Espagne", "en", &catalog).is_none());
        // fr has no entry for France: default name applies
        assert_eq!(resolve("france", "fr", &catalog).unwrap().code(), "FR");
    }

    #[test]
    fn test_miss() {
        let catalog = small();
        assert!(resolve("Atlantis", "en", &catalog).is_none());
        assert!(resolve("", "en", &catalog).is_none());
        assert!(resolve(" - ", "en", &catalog).is_none());
        // prefixes are not matches
        assert!(resolve("Spa", "en", &catalog).is_none());
    }

    #[test]
    fn test_first_in_catalog_order_wins() {
        let catalog = Catalog::builder()
            .country(Country::new("AA", 0.0, 0.0, "Twin"))
            .country(Country::new("BB", 1.0, 1.0, "twin"))
            .build()
            .unwrap();
        assert_eq!(resolve("TWIN", "en", &catalog).unwrap().code(), "AA");
    }

    #[test]
    fn test_every_builtin_name_resolves_to_itself() {
        let catalog = Catalog::builtin();
        for lang in all_langs() {
            let names = catalog.names_for(lang.code());
            for country in catalog {
                let name = names.name_of(country);
                let found = resolve(name, lang.code(), catalog).unwrap();
                assert_eq!(found.code(), country.code(), "{}: {name}", lang.code());
                let shouted = name.to_uppercase();
                assert_eq!(resolve(&shouted, lang.code(), catalog), Some(found));
            }
        }
    }

    #[test]
    fn test_builtin_localized_lookups() {
        let catalog = Catalog::builtin();
        assert_eq!(resolve("magyarorszag", "hu", catalog).unwrap().code(), "HU");
        assert_eq!(resolve("Pays Bas", "fr-FR", catalog).unwrap().code(), "NL");
        assert_eq!(resolve("ijsland", "nl", catalog).unwrap().code(), "IS");
        assert_eq!(resolve("etats unis", "fr", catalog).unwrap().code(), "US");
        // hu has no table entry for Åland: default name applies
        assert_eq!(resolve("aland islands", "hu", catalog).unwrap().code(), "AX");
    }

    #[test]
    fn test_suggest() {
        let catalog = Catalog::builtin();
        let hits = suggest("guinea", "en", catalog);
        assert_eq!(
            hits,
            ["Equatorial Guinea", "Guinea", "Guinea-Bissau", "Papua New Guinea"]
        );
        assert!(suggest("", "en", catalog).is_empty());
        assert!(suggest("zzzz", "en", catalog).is_empty());
        for name in suggest("ile", "fr", catalog) {
            assert!(normalize(name).contains("ile"));
        }
    }
}
