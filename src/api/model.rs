// Typed models of the two PokeAPI payloads the gallery consumes:
// the collection listing and the per-item detail record.

use serde::Deserialize;

/// One entry of the collection listing: a name plus its detail URL.
#[derive(Debug, Deserialize, Clone)]
pub struct PokemonRef {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PokemonList {
    pub count: u64,
    pub results: Vec<PokemonRef>,
}

/// Detail record for a single Pokémon. Immutable once fetched.
#[derive(Debug, Deserialize, Clone)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    /// Decimetres, as served by the API.
    pub height: u32,
    /// Hectograms, as served by the API.
    pub weight: u32,
    /// Nullable upstream (e.g. some alternate forms).
    pub base_experience: Option<u32>,
    #[serde(default)]
    pub sprites: Sprites,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    #[serde(default)]
    pub stats: Vec<StatSlot>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Sprites {
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: OtherSprites,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: ArtworkSprites,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ArtworkSprites {
    pub front_default: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TypeSlot {
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedRef,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AbilitySlot {
    pub ability: NamedRef,
    #[serde(default)]
    pub is_hidden: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StatSlot {
    pub base_stat: u32,
    pub stat: NamedRef,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NamedRef {
    pub name: String,
}

impl Pokemon {
    /// Best raster sprite URL: official artwork first, plain front sprite as
    /// fallback. (The dream_world art the web original prefers is SVG, which
    /// the image decoder cannot handle.)
    pub fn sprite_url(&self) -> Option<&str> {
        self.sprites
            .other
            .official_artwork
            .front_default
            .as_deref()
            .or(self.sprites.front_default.as_deref())
    }

    /// Base value of the "speed" stat, if present.
    pub fn speed(&self) -> Option<u32> {
        self.stats
            .iter()
            .find(|s| s.stat.name == "speed")
            .map(|s| s.base_stat)
    }

    /// Name of the first listed ability, if any.
    pub fn first_ability(&self) -> Option<&str> {
        self.abilities.first().map(|a| a.ability.name.as_str())
    }

    /// Name of the primary (slot 1) type, if any.
    pub fn primary_type(&self) -> Option<&str> {
        self.types.first().map(|t| t.kind.name.as_str())
    }
}

#[cfg(test)]
impl Pokemon {
    /// Minimal well-formed record for tests.
    pub(crate) fn sample(id: u32, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            height: 7,
            weight: 69,
            base_experience: Some(64),
            sprites: Sprites {
                front_default: Some(format!("https://img.example/{id}.png")),
                other: OtherSprites::default(),
            },
            types: vec![TypeSlot {
                slot: 1,
                kind: NamedRef {
                    name: "grass".to_string(),
                },
            }],
            abilities: vec![AbilitySlot {
                ability: NamedRef {
                    name: "overgrow".to_string(),
                },
                is_hidden: false,
            }],
            stats: Vec::new(),
        }
    }

    pub(crate) fn set_speed(&mut self, value: u32) {
        self.stats.push(StatSlot {
            base_stat: value,
            stat: NamedRef {
                name: "speed".to_string(),
            },
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DETAIL_FIXTURE: &str = r#"{
        "id": 4,
        "name": "charmander",
        "height": 6,
        "weight": 85,
        "base_experience": 62,
        "sprites": {
            "front_default": "https://raw.example/sprites/4.png",
            "other": {
                "dream_world": { "front_default": "https://raw.example/dw/4.svg" },
                "official-artwork": { "front_default": "https://raw.example/art/4.png" }
            }
        },
        "types": [
            { "slot": 1, "type": { "name": "fire", "url": "https://pokeapi.co/api/v2/type/10/" } }
        ],
        "abilities": [
            { "ability": { "name": "blaze", "url": "" }, "is_hidden": false, "slot": 1 },
            { "ability": { "name": "solar-power", "url": "" }, "is_hidden": true, "slot": 3 }
        ],
        "stats": [
            { "base_stat": 39, "effort": 0, "stat": { "name": "hp", "url": "" } },
            { "base_stat": 65, "effort": 1, "stat": { "name": "speed", "url": "" } }
        ]
    }"#;

    #[test]
    fn parses_detail_record() {
        let p: Pokemon = serde_json::from_str(DETAIL_FIXTURE).unwrap();
        assert_eq!(p.id, 4);
        assert_eq!(p.name, "charmander");
        assert_eq!(p.height, 6);
        assert_eq!(p.weight, 85);
        assert_eq!(p.base_experience, Some(62));
        assert_eq!(p.sprite_url(), Some("https://raw.example/art/4.png"));
        assert_eq!(p.speed(), Some(65));
        assert_eq!(p.first_ability(), Some("blaze"));
        assert_eq!(p.primary_type(), Some("fire"));
    }

    #[test]
    fn parses_listing() {
        let json = r#"{
            "count": 1302,
            "next": "https://pokeapi.co/api/v2/pokemon?offset=24&limit=24",
            "previous": null,
            "results": [
                { "name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/" },
                { "name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/" }
            ]
        }"#;
        let list: PokemonList = serde_json::from_str(json).unwrap();
        assert_eq!(list.count, 1302);
        assert_eq!(list.results.len(), 2);
        assert_eq!(list.results[0].name, "bulbasaur");
    }

    #[test]
    fn sprite_url_falls_back_to_front_default() {
        let json = r#"{
            "id": 132, "name": "ditto", "height": 3, "weight": 40,
            "base_experience": null,
            "sprites": { "front_default": "https://raw.example/sprites/132.png", "other": {} },
            "types": [ { "slot": 1, "type": { "name": "normal" } } ],
            "abilities": [], "stats": []
        }"#;
        let p: Pokemon = serde_json::from_str(json).unwrap();
        assert_eq!(p.sprite_url(), Some("https://raw.example/sprites/132.png"));
        assert_eq!(p.base_experience, None);
        assert_eq!(p.speed(), None);
        assert_eq!(p.first_ability(), None);
    }
}
