//! Catalog entries and their positional ids.

use crate::error::{Error, Result};
use pokedex_search::Searchable;
use serde::{Deserialize, Serialize};

/// Base URL of the official artwork sprites, keyed by id.
pub const ARTWORK_BASE_URL: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork";

/// A `{name, url}` pair as returned by the catalog endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub name: String,
    pub url: String,
}

/// One page of the catalog endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogPage {
    /// Total number of records the API knows about
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<CatalogRecord>,
}

/// A listed entry with its 1-based position in the fetched list as id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CatalogEntry {
    id: u32,
    name: String,
    source_url: String,
}

impl CatalogEntry {
    /// Create an entry. Ids start at 1 and names cannot be blank.
    pub fn new(id: u32, name: impl Into<String>, source_url: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if id == 0 {
            return Err(Error::malformed_record("catalog ids start at 1"));
        }
        if name.trim().is_empty() {
            return Err(Error::malformed_record(format!("entry {id} has an empty name")));
        }

        Ok(Self {
            id,
            name,
            source_url: source_url.into(),
        })
    }

    /// Number entries by fetch order, starting at 1.
    ///
    /// Ids come from position alone; whatever identifier the source URL
    /// carries is ignored.
    pub fn enrich(records: Vec<CatalogRecord>) -> Result<Vec<Self>> {
        records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                let id = u32::try_from(index + 1)
                    .map_err(|_| Error::malformed_record("catalog too large"))?;
                Self::new(id, record.name, record.url)
            })
            .collect()
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    /// Official artwork for this id.
    pub fn artwork_url(&self) -> String {
        artwork_url(self.id)
    }

    /// `#001` style number.
    pub fn display_number(&self) -> String {
        display_number(self.id)
    }

    /// Route of this entry's detail page.
    pub fn detail_path(&self) -> String {
        format!("/pokemon/{}", self.id)
    }
}

impl Searchable for CatalogEntry {
    fn search_key(&self) -> &str {
        &self.name
    }
}

/// Official artwork URL for an id.
pub fn artwork_url(id: u32) -> String {
    format!("{ARTWORK_BASE_URL}/{id}.png")
}

/// Zero-padded `#NNN` number for an id.
pub fn display_number(id: u32) -> String {
    format!("#{id:03}")
}
