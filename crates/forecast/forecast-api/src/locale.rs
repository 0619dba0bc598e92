//! Output languages.

use std::fmt;
use std::str::FromStr;

use forecast_spi::ForecastError;
use serde::{Deserialize, Serialize};

/// Language used to render anomaly descriptions and recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Turkish, the language of the established output texts
    #[default]
    Tr,
    En,
}

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Locale::Tr => "tr",
            Locale::En => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tr" | "tr-tr" | "turkish" => Ok(Locale::Tr),
            "en" | "en-us" | "en-gb" | "english" => Ok(Locale::En),
            other => Err(ForecastError::UnknownLocale(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_locale() {
        assert_eq!("tr".parse::<Locale>().unwrap(), Locale::Tr);
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!(" en-GB ".parse::<Locale>().unwrap(), Locale::En);
        assert!("de".parse::<Locale>().is_err());
    }

    #[test]
    fn test_display_matches_code() {
        assert_eq!(Locale::Tr.to_string(), "tr");
        assert_eq!(Locale::En.to_string(), "en");
    }
}
