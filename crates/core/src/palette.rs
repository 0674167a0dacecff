//! Colours for type badges and stat bars.

use serde::Serialize;

/// Named colours; renderers map them onto whatever their output supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Swatch {
    Gray,
    DarkGray,
    Slate,
    Red,
    DarkRed,
    Orange,
    Yellow,
    Gold,
    Brown,
    Green,
    LightGreen,
    Blue,
    LightBlue,
    Indigo,
    DarkIndigo,
    Purple,
    DarkPurple,
    Pink,
    LightPink,
}

impl Swatch {
    /// RGB triple for 24-bit terminals.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Gray => (156, 163, 175),
            Self::DarkGray => (31, 41, 55),
            Self::Slate => (107, 114, 128),
            Self::Red => (239, 68, 68),
            Self::DarkRed => (185, 28, 28),
            Self::Orange => (249, 115, 22),
            Self::Yellow => (250, 204, 21),
            Self::Gold => (202, 138, 4),
            Self::Brown => (133, 77, 14),
            Self::Green => (34, 197, 94),
            Self::LightGreen => (74, 222, 128),
            Self::Blue => (59, 130, 246),
            Self::LightBlue => (191, 219, 254),
            Self::Indigo => (129, 140, 248),
            Self::DarkIndigo => (67, 56, 202),
            Self::Purple => (168, 85, 247),
            Self::DarkPurple => (126, 34, 206),
            Self::Pink => (236, 72, 153),
            Self::LightPink => (249, 168, 212),
        }
    }
}

/// Badge colour for an elemental type. Unknown types are slate.
pub fn type_swatch(type_name: &str) -> Swatch {
    match type_name {
        "normal" => Swatch::Gray,
        "fire" => Swatch::Red,
        "water" => Swatch::Blue,
        "electric" => Swatch::Yellow,
        "grass" => Swatch::Green,
        "ice" => Swatch::LightBlue,
        "fighting" => Swatch::DarkRed,
        "poison" => Swatch::Purple,
        "ground" => Swatch::Gold,
        "flying" => Swatch::Indigo,
        "psychic" => Swatch::Pink,
        "bug" => Swatch::LightGreen,
        "rock" => Swatch::Brown,
        "ghost" => Swatch::DarkPurple,
        "dragon" => Swatch::DarkIndigo,
        "dark" => Swatch::DarkGray,
        "steel" => Swatch::Slate,
        "fairy" => Swatch::LightPink,
        _ => Swatch::Slate,
    }
}

/// Bar colour for a stat. Unknown stats are slate.
pub fn stat_swatch(stat_name: &str) -> Swatch {
    match stat_name {
        "hp" => Swatch::Red,
        "attack" => Swatch::Orange,
        "defense" => Swatch::Blue,
        "special-attack" => Swatch::Purple,
        "special-defense" => Swatch::Green,
        "speed" => Swatch::Yellow,
        _ => Swatch::Slate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_types() {
        assert_eq!(type_swatch("fire"), Swatch::Red);
        assert_eq!(type_swatch("dragon"), Swatch::DarkIndigo);
    }

    #[test]
    fn test_unknown_falls_back_to_slate() {
        assert_eq!(type_swatch("stellar"), Swatch::Slate);
        assert_eq!(stat_swatch("accuracy"), Swatch::Slate);
        assert_eq!(type_swatch("steel"), Swatch::Slate);
    }

    #[test]
    fn test_stats() {
        assert_eq!(stat_swatch("special-defense"), Swatch::Green);
        assert_eq!(stat_swatch("speed"), Swatch::Yellow);
    }
}
