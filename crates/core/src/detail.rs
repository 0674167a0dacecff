//! Detail records for a single Pokémon and the values a detail page shows.

use serde::{Deserialize, Serialize};

/// Highest base stat value; stat bars are drawn relative to it.
pub const MAX_BASE_STAT: u32 = 255;

/// Number of moves a detail page lists by default.
pub const SIGNATURE_MOVE_COUNT: usize = 6;

/// A named link to another API resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// Sprite URLs. Only the official artwork is consumed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: OtherSprites,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<ArtworkSprites>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworkSprites {
    #[serde(default)]
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonType {
    #[serde(default)]
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonAbility {
    pub ability: NamedResource,
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default)]
    pub slot: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    #[serde(default)]
    pub effort: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonMove {
    pub r#move: NamedResource,
}

/// The subset of the detail endpoint the browser renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonDetail {
    pub id: u32,
    pub name: String,
    /// Decimetres
    #[serde(default)]
    pub height: u32,
    /// Hectograms
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub base_experience: Option<u32>,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub is_default: bool,
    pub species: NamedResource,
    #[serde(default)]
    pub sprites: Sprites,
    #[serde(default)]
    pub types: Vec<PokemonType>,
    #[serde(default)]
    pub abilities: Vec<PokemonAbility>,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub moves: Vec<PokemonMove>,
}

/// One row of the base stats panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatLine {
    pub key: String,
    pub label: String,
    pub value: u32,
    /// Bar width in percent of [`MAX_BASE_STAT`], capped at 100
    pub percent: f64,
}

impl PokemonDetail {
    /// Official artwork, if the API has one.
    pub fn artwork_url(&self) -> Option<&str> {
        self.sprites
            .other
            .official_artwork
            .as_ref()
            .and_then(|art| art.front_default.as_deref())
    }

    /// Height in metres.
    pub fn height_m(&self) -> f64 {
        f64::from(self.height) / 10.0
    }

    /// Weight in kilograms.
    pub fn weight_kg(&self) -> f64 {
        f64::from(self.weight) / 10.0
    }

    /// Type names in slot order.
    pub fn type_names(&self) -> Vec<&str> {
        let mut types: Vec<&PokemonType> = self.types.iter().collect();
        types.sort_by_key(|t| t.slot);
        types.into_iter().map(|t| t.kind.name.as_str()).collect()
    }

    /// Stat rows with bar percentages.
    pub fn stat_lines(&self) -> Vec<StatLine> {
        self.stats
            .iter()
            .map(|s| StatLine {
                key: s.stat.name.clone(),
                label: prettify(&s.stat.name),
                value: s.base_stat,
                percent: stat_percent(s.base_stat),
            })
            .collect()
    }

    /// The first `count` moves, prettified.
    pub fn signature_moves(&self, count: usize) -> Vec<String> {
        self.moves
            .iter()
            .take(count)
            .map(|m| prettify(&m.r#move.name))
            .collect()
    }

    /// `(label, hidden)` for each ability.
    pub fn ability_labels(&self) -> Vec<(String, bool)> {
        self.abilities
            .iter()
            .map(|a| (prettify(&a.ability.name), a.is_hidden))
            .collect()
    }
}

/// Width of a stat bar, in percent of the highest possible base stat.
pub fn stat_percent(base: u32) -> f64 {
    (f64::from(base) / f64::from(MAX_BASE_STAT) * 100.0).min(100.0)
}

/// Turn an API slug into a label: the first `-` becomes a space.
///
/// Only the first hyphen is replaced, so `"special-attack"` reads
/// `"special attack"` while `"soft-boiled-egg"` keeps its second hyphen.
pub fn prettify(slug: &str) -> String {
    slug.replacen('-', " ", 1)
}

/// Capitalize the first letter of every space-separated word.
pub fn capitalize(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
pub(crate) mod fixtures {
    /// Trimmed response of `GET /pokemon/25`.
    pub const PIKACHU_JSON: &str = r#"{
        "id": 25,
        "name": "pikachu",
        "height": 4,
        "weight": 60,
        "base_experience": 112,
        "order": 35,
        "is_default": true,
        "species": {"name": "pikachu", "url": "https://pokeapi.co/api/v2/pokemon-species/25/"},
        "sprites": {
            "front_default": "https://example.test/25.png",
            "other": {
                "official-artwork": {"front_default": "https://example.test/artwork/25.png"},
                "home": {"front_default": null}
            }
        },
        "types": [{"slot": 1, "type": {"name": "electric", "url": "https://pokeapi.co/api/v2/type/13/"}}],
        "abilities": [
            {"ability": {"name": "static", "url": ""}, "is_hidden": false, "slot": 1},
            {"ability": {"name": "lightning-rod", "url": ""}, "is_hidden": true, "slot": 3}
        ],
        "stats": [
            {"base_stat": 35, "effort": 0, "stat": {"name": "hp", "url": ""}},
            {"base_stat": 55, "effort": 0, "stat": {"name": "attack", "url": ""}},
            {"base_stat": 40, "effort": 0, "stat": {"name": "defense", "url": ""}},
            {"base_stat": 50, "effort": 0, "stat": {"name": "special-attack", "url": ""}},
            {"base_stat": 50, "effort": 0, "stat": {"name": "special-defense", "url": ""}},
            {"base_stat": 90, "effort": 2, "stat": {"name": "speed", "url": ""}}
        ],
        "moves": [
            {"move": {"name": "mega-punch", "url": ""}},
            {"move": {"name": "pay-day", "url": ""}},
            {"move": {"name": "thunder-punch", "url": ""}},
            {"move": {"name": "slam", "url": ""}},
            {"move": {"name": "mega-kick", "url": ""}},
            {"move": {"name": "headbutt", "url": ""}},
            {"move": {"name": "body-slam", "url": ""}}
        ]
    }"#;
}

#[cfg(test)]
mod tests {
    use super::fixtures::PIKACHU_JSON;
    use super::*;

    fn pikachu() -> PokemonDetail {
        serde_json::from_str(PIKACHU_JSON).unwrap()
    }

    #[test]
    fn test_deserialize_detail() {
        let p = pikachu();
        assert_eq!(p.id, 25);
        assert_eq!(p.species.name, "pikachu");
        assert_eq!(p.artwork_url(), Some("https://example.test/artwork/25.png"));
        assert_eq!(p.type_names(), vec!["electric"]);
    }

    #[test]
    fn test_physical_traits() {
        let p = pikachu();
        assert!((p.height_m() - 0.4).abs() < 1e-9);
        assert!((p.weight_kg() - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_only_six_moves() {
        let moves = pikachu().signature_moves(SIGNATURE_MOVE_COUNT);
        assert_eq!(moves.len(), 6);
        assert_eq!(moves[0], "mega punch");
        assert!(!moves.contains(&"body slam".to_string()));
    }

    #[test]
    fn test_stat_lines() {
        let lines = pikachu().stat_lines();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[3].label, "special attack");
        assert!((lines[5].percent - 90.0 / 255.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_stat_percent_is_capped() {
        assert!((stat_percent(255) - 100.0).abs() < 1e-9);
        assert!((stat_percent(300) - 100.0).abs() < 1e-9);
        assert_eq!(stat_percent(0), 0.0);
    }

    #[test]
    fn test_abilities_keep_hidden_flag() {
        let labels = pikachu().ability_labels();
        assert_eq!(labels[1], ("lightning rod".to_string(), true));
    }

    #[test]
    fn test_prettify_replaces_first_hyphen_only() {
        assert_eq!(prettify("special-attack"), "special attack");
        assert_eq!(prettify("soft-boiled-egg"), "soft boiled-egg");
        assert_eq!(prettify("tackle"), "tackle");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("special attack"), "Special Attack");
        assert_eq!(capitalize("mr-mime"), "Mr-mime");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_missing_artwork_is_none() {
        let mut p = pikachu();
        p.sprites = Sprites::default();
        assert!(p.artwork_url().is_none());
    }
}
