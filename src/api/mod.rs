// PokeAPI client: fetch the collection listing and every per-item detail
// record, plus sprite images for the cards.
// Public API:
//   - fetch_catalog(limit) -> Result<Vec<Pokemon>, ApiError>
//   - fetch_sprite(url) -> Result<(w, h, rgba), ApiError>
//
// The aggregate is all-or-nothing: one failing detail fetch discards the
// whole batch rather than surfacing a partial list.

use std::future::Future;

use lazy_static::lazy_static;
use thiserror::Error;

pub mod model;
pub use model::{Pokemon, PokemonList, PokemonRef};

pub const BASE_URL: &str = "https://pokeapi.co/api/v2/pokemon";

/// How many entries the gallery requests from the listing endpoint.
pub const CATALOG_LIMIT: u32 = 24;

lazy_static! {
    static ref CLIENT: reqwest::Client = reqwest::Client::builder()
        .user_agent(concat!("pokedeck/", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("http client");
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("http status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("image decode error for {url}: {source}")]
    Decode {
        url: String,
        source: image::ImageError,
    },
}

/// Fetch the listing and fan out one detail request per entry.
pub async fn fetch_catalog(limit: u32) -> Result<Vec<Pokemon>, ApiError> {
    let list = fetch_list(limit).await?;
    log::info!("listing ok: {} of {} entries", list.results.len(), list.count);
    fetch_all_details(list.results, fetch_detail).await
}

async fn fetch_list(limit: u32) -> Result<PokemonList, ApiError> {
    let url = format!("{BASE_URL}?limit={limit}");
    log::debug!("fetch_list: GET {url}");
    let resp = CLIENT.get(&url).send().await?.error_for_status()?;
    Ok(resp.json().await?)
}

async fn fetch_detail(reference: PokemonRef) -> Result<Pokemon, ApiError> {
    log::debug!("fetch_detail: GET {} ({})", reference.url, reference.name);
    let resp = CLIENT.get(&reference.url).send().await?.error_for_status()?;
    Ok(resp.json().await?)
}

/// Run per-entry detail fetches concurrently and join them with
/// all-or-nothing semantics: the first error fails the aggregate.
/// Generic over the fetch fn so the join semantics are testable offline.
async fn fetch_all_details<F, Fut>(
    refs: Vec<PokemonRef>,
    fetch: F,
) -> Result<Vec<Pokemon>, ApiError>
where
    F: Fn(PokemonRef) -> Fut,
    Fut: Future<Output = Result<Pokemon, ApiError>>,
{
    futures::future::try_join_all(refs.into_iter().map(fetch)).await
}

/// Download a sprite and return RGBA8 bytes plus dimensions.
pub async fn fetch_sprite(url: &str) -> Result<(usize, usize, Vec<u8>), ApiError> {
    log::debug!("fetch_sprite: GET {url}");
    let resp = CLIENT
        .get(url)
        .header("Accept", "image/png,image/jpeg,image/gif,image/webp")
        .send()
        .await?;

    let status = resp.status();
    if !status.is_success() {
        log::warn!("fetch_sprite: http status {} for {url}", status.as_u16());
        return Err(ApiError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let bytes = resp.bytes().await?;
    let img = image::load_from_memory(&bytes).map_err(|e| {
        log::warn!("fetch_sprite: decode error for {url}: {e}");
        ApiError::Decode {
            url: url.to_string(),
            source: e,
        }
    })?;
    let rgba = img.to_rgba8();
    let (w, h) = rgba.dimensions();
    Ok((w as usize, h as usize, rgba.into_raw()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refs(n: u32) -> Vec<PokemonRef> {
        (1..=n)
            .map(|i| PokemonRef {
                name: format!("mon-{i}"),
                url: format!("https://pokeapi.example/pokemon/{i}/"),
            })
            .collect()
    }

    fn id_of(reference: &PokemonRef) -> u32 {
        reference
            .url
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap()
            .parse()
            .unwrap()
    }

    #[tokio::test]
    async fn aggregates_all_details_in_listing_order() {
        let out = fetch_all_details(refs(5), |r| async move {
            Ok(Pokemon::sample(id_of(&r), &r.name))
        })
        .await
        .unwrap();

        assert_eq!(out.len(), 5);
        let ids: Vec<u32> = out.iter().map(|p| p.id).collect();
        assert_eq!(ids, [1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn single_failure_discards_whole_batch() {
        let res = fetch_all_details(refs(5), |r| async move {
            let id = id_of(&r);
            if id == 3 {
                Err(ApiError::Status {
                    status: 500,
                    url: r.url.clone(),
                })
            } else {
                Ok(Pokemon::sample(id, &r.name))
            }
        })
        .await;

        let err = res.unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 500, .. }));
    }

    #[tokio::test]
    async fn empty_listing_yields_empty_aggregate() {
        let out = fetch_all_details(Vec::new(), |r| async move {
            Ok(Pokemon::sample(id_of(&r), &r.name))
        })
        .await
        .unwrap();
        assert!(out.is_empty());
    }
}
