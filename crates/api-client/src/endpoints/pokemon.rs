//! Per-entry detail endpoint

use crate::client::PokeApiClient;
use crate::error::ApiResult;
use pokedex_core::detail::PokemonDetail;
use pokedex_core::view::DetailView;

/// Detail API
pub struct PokemonApi {
    client: PokeApiClient,
}

impl PokemonApi {
    pub(crate) fn new(client: PokeApiClient) -> Self {
        Self { client }
    }

    /// Path of the detail record for `id`
    #[must_use]
    pub fn detail_path(id: u32) -> String {
        format!("pokemon/{id}")
    }

    /// Fetch the full record for one id
    pub async fn get(&self, id: u32) -> ApiResult<PokemonDetail> {
        self.client.get(&Self::detail_path(id)).await
    }

    /// Fetch one id and collapse any failure into a not-found page
    pub async fn detail_view(&self, id: u32) -> DetailView {
        DetailView::from_fetch(id, self.get(id).await)
    }
}
