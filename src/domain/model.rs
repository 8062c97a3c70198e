use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One country as returned by the upstream API.
///
/// Everything beyond `name` and `cca3` is defaulted: the `fields=`
/// projection on `/all` and the legacy API root both omit attributes,
/// and a record must still deserialize from those reduced bodies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Country {
    pub name: CountryName,
    #[serde(default)]
    pub capital: Vec<String>,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub subregion: String,
    #[serde(default)]
    pub population: u64,
    pub area: Option<f64>,
    #[serde(default)]
    pub flags: Flags,
    #[serde(default)]
    pub languages: HashMap<String, String>,
    #[serde(default)]
    pub currencies: HashMap<String, Currency>,
    #[serde(default)]
    pub cca3: String,
    pub borders: Option<Vec<String>>,
    pub timezones: Option<Vec<String>>,
    pub demonyms: Option<HashMap<String, Demonym>>,
    pub idd: Option<Idd>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryName {
    pub common: String,
    #[serde(default)]
    pub official: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Flags {
    #[serde(default)]
    pub png: String,
    #[serde(default)]
    pub svg: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Currency {
    pub name: String,
    pub symbol: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Demonym {
    #[serde(default)]
    pub f: String,
    #[serde(default)]
    pub m: String,
}

/// International dialing information: root prefix plus suffixes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Idd {
    #[serde(default)]
    pub root: String,
    #[serde(default)]
    pub suffixes: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_reduced_projection() {
        // The fields= projection drops most attributes.
        let body = r#"{"name":{"common":"Japan","official":"Japan"},"cca3":"JPN"}"#;
        let country: Country = serde_json::from_str(body).unwrap();

        assert_eq!(country.name.common, "Japan");
        assert_eq!(country.cca3, "JPN");
        assert!(country.capital.is_empty());
        assert_eq!(country.population, 0);
        assert!(country.area.is_none());
        assert!(country.currencies.is_empty());
    }

    #[test]
    fn deserializes_full_record() {
        let body = r#"{
            "name": {"common": "Indonesia", "official": "Republic of Indonesia"},
            "capital": ["Jakarta"],
            "region": "Asia",
            "subregion": "South-Eastern Asia",
            "population": 273523615,
            "area": 1904569.0,
            "flags": {"png": "https://flagcdn.com/w320/id.png", "svg": "https://flagcdn.com/id.svg"},
            "languages": {"ind": "Indonesian"},
            "currencies": {"IDR": {"name": "Indonesian rupiah", "symbol": "Rp"}},
            "cca3": "IDN",
            "borders": ["MYS", "PNG", "TLS"],
            "timezones": ["UTC+07:00", "UTC+08:00", "UTC+09:00"],
            "demonyms": {"eng": {"f": "Indonesian", "m": "Indonesian"}},
            "idd": {"root": "+6", "suffixes": ["2"]}
        }"#;
        let country: Country = serde_json::from_str(body).unwrap();

        assert_eq!(country.capital, vec!["Jakarta"]);
        assert_eq!(country.population, 273_523_615);
        assert_eq!(country.area, Some(1_904_569.0));
        assert_eq!(
            country.currencies.get("IDR").unwrap().symbol.as_deref(),
            Some("Rp")
        );
        assert_eq!(country.borders.as_ref().unwrap().len(), 3);
        assert_eq!(country.idd.as_ref().unwrap().root, "+6");
    }
}
