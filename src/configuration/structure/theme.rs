use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};


/// Themes shipped with flatpickr.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ThemeChoice {
    Dark,
    MaterialBlue,
    MaterialGreen,
    MaterialRed,
    MaterialOrange,
    Airbnb,
    Confetti,
}

impl ThemeChoice {
    pub const ALL: [ThemeChoice; 7] = [
        ThemeChoice::Dark,
        ThemeChoice::MaterialBlue,
        ThemeChoice::MaterialGreen,
        ThemeChoice::MaterialRed,
        ThemeChoice::MaterialOrange,
        ThemeChoice::Airbnb,
        ThemeChoice::Confetti,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeChoice::Dark => "dark",
            ThemeChoice::MaterialBlue => "material_blue",
            ThemeChoice::MaterialGreen => "material_green",
            ThemeChoice::MaterialRed => "material_red",
            ThemeChoice::MaterialOrange => "material_orange",
            ThemeChoice::Airbnb => "airbnb",
            ThemeChoice::Confetti => "confetti",
        }
    }
}

impl Display for ThemeChoice {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_match_serde_names() {
        for theme in ThemeChoice::ALL {
            let parsed: ThemeChoice = toml::Value::String(theme.as_str().to_string())
                .try_into()
                .unwrap();

            assert_eq!(parsed, theme);
        }
    }

    #[test]
    fn unknown_theme_is_rejected() {
        let parsed = toml::Value::String("solarized".to_string()).try_into::<ThemeChoice>();
        assert!(parsed.is_err());
    }
}
