use crate::domain::model::{Country, CountryName, Currency, Flags};

/// Embedded directory served when every live `/all` attempt fails.
/// Fixed set of eight records spread across regions, versioned with
/// the code.
pub fn fallback_countries() -> Vec<Country> {
    vec![
        country(
            "Indonesia",
            "Republic of Indonesia",
            &["Jakarta"],
            "Asia",
            "South-Eastern Asia",
            273_523_615,
            "id",
            &[("ind", "Indonesian")],
            &[("IDR", "Indonesian rupiah", "Rp")],
            "IDN",
        ),
        country(
            "United States",
            "United States of America",
            &["Washington, D.C."],
            "Americas",
            "North America",
            329_484_123,
            "us",
            &[("eng", "English")],
            &[("USD", "United States dollar", "$")],
            "USA",
        ),
        country(
            "United Kingdom",
            "United Kingdom of Great Britain and Northern Ireland",
            &["London"],
            "Europe",
            "Northern Europe",
            67_886_011,
            "gb",
            &[("eng", "English")],
            &[("GBP", "British pound", "£")],
            "GBR",
        ),
        country(
            "Japan",
            "Japan",
            &["Tokyo"],
            "Asia",
            "Eastern Asia",
            125_836_021,
            "jp",
            &[("jpn", "Japanese")],
            &[("JPY", "Japanese yen", "¥")],
            "JPN",
        ),
        country(
            "Germany",
            "Federal Republic of Germany",
            &["Berlin"],
            "Europe",
            "Central Europe",
            83_783_942,
            "de",
            &[("deu", "German")],
            &[("EUR", "Euro", "€")],
            "DEU",
        ),
        country(
            "Australia",
            "Commonwealth of Australia",
            &["Canberra"],
            "Oceania",
            "Australia and New Zealand",
            25_687_041,
            "au",
            &[("eng", "English")],
            &[("AUD", "Australian dollar", "$")],
            "AUS",
        ),
        country(
            "Brazil",
            "Federative Republic of Brazil",
            &["Brasília"],
            "Americas",
            "South America",
            215_313_498,
            "br",
            &[("por", "Portuguese")],
            &[("BRL", "Brazilian real", "R$")],
            "BRA",
        ),
        country(
            "South Africa",
            "Republic of South Africa",
            &["Cape Town", "Pretoria", "Bloemfontein"],
            "Africa",
            "Southern Africa",
            59_308_690,
            "za",
            &[("eng", "English"), ("afr", "Afrikaans")],
            &[("ZAR", "South African rand", "R")],
            "ZAF",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn country(
    common: &str,
    official: &str,
    capitals: &[&str],
    region: &str,
    subregion: &str,
    population: u64,
    flag_code: &str,
    languages: &[(&str, &str)],
    currencies: &[(&str, &str, &str)],
    cca3: &str,
) -> Country {
    Country {
        name: CountryName {
            common: common.to_string(),
            official: official.to_string(),
        },
        capital: capitals.iter().map(|c| c.to_string()).collect(),
        region: region.to_string(),
        subregion: subregion.to_string(),
        population,
        area: None,
        flags: Flags {
            png: format!("https://flagcdn.com/w320/{}.png", flag_code),
            svg: format!("https://flagcdn.com/{}.svg", flag_code),
        },
        languages: languages
            .iter()
            .map(|(code, name)| (code.to_string(), name.to_string()))
            .collect(),
        currencies: currencies
            .iter()
            .map(|(code, name, symbol)| {
                (
                    code.to_string(),
                    Currency {
                        name: name.to_string(),
                        symbol: Some(symbol.to_string()),
                    },
                )
            })
            .collect(),
        cca3: cca3.to_string(),
        borders: None,
        timezones: None,
        demonyms: None,
        idd: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn has_exactly_eight_records_with_unique_codes() {
        let countries = fallback_countries();
        assert_eq!(countries.len(), 8);

        let codes: HashSet<&str> = countries.iter().map(|c| c.cca3.as_str()).collect();
        assert_eq!(codes.len(), 8);
        assert!(codes.contains("IDN"));
        assert!(codes.contains("ZAF"));
    }

    #[test]
    fn records_are_well_formed() {
        for country in fallback_countries() {
            assert!(!country.name.common.is_empty());
            assert!(!country.capital.is_empty());
            assert!(country.population > 0);
            assert!(!country.languages.is_empty());
            assert!(!country.currencies.is_empty());
            assert_eq!(country.cca3.len(), 3);
        }
    }
}
