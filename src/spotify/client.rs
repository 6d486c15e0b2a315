use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::{
    collection::{Page, PlaylistApi},
    config,
    error::RemoteError,
    types::{
        AddItemsRequest, Credential, Item, PlaylistDetailsResponse, PlaylistTracksResponse,
        RemoveItemsRequest, ReorderItemsRequest, TrackUri,
    },
};

/// HTTP transport for the Spotify Web API.
///
/// Holds the bearer credential it was built with and attaches it to every
/// request. The credential is never refreshed here; an expired one surfaces
/// as a 401 [`RemoteError`].
pub struct SpotifyApi {
    http: Client,
    base_url: String,
    credential: Credential,
}

impl SpotifyApi {
    pub fn new(base_url: impl Into<String>, credential: Credential) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credential,
        }
    }

    /// Uses the API url from the configuration.
    pub fn from_env(credential: Credential) -> Self {
        Self::new(config::spotify_apiurl(), credential)
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn tracks_url(&self, collection_id: &str) -> String {
        self.url(&format!("/playlists/{id}/tracks", id = collection_id))
    }

    pub(crate) fn get(&self, url: &str) -> RequestBuilder {
        self.http.get(url)
    }

    /// Sends `request` with the bearer header and turns a non-success status
    /// into [`RemoteError::Status`], keeping body and `Retry-After`.
    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Response, RemoteError> {
        let response = request
            .bearer_auth(self.credential.expose())
            .send()
            .await?;

        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status().as_u16();
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok());
        let body = response.text().await.unwrap_or_default();

        Err(RemoteError::Status {
            status,
            body,
            retry_after,
        })
    }

    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, RemoteError> {
        let response = self.send(request).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| RemoteError::Decode(e.to_string()))
    }

    async fn page(&self, url: &str) -> Result<Page, RemoteError> {
        let res: PlaylistTracksResponse = self.send_json(self.get(url)).await?;
        Ok(Page {
            items: res.items.into_iter().map(Item::from).collect(),
            next: res.next,
            total: res.total.map(|t| t as usize),
        })
    }
}

#[async_trait]
impl PlaylistApi for SpotifyApi {
    async fn item_count(&self, collection_id: &str) -> Result<usize, RemoteError> {
        let url = self.url(&format!(
            "/playlists/{id}?fields=tracks.total",
            id = collection_id
        ));
        let res: PlaylistDetailsResponse = self.send_json(self.get(&url)).await?;
        Ok(res.tracks.total as usize)
    }

    async fn first_page(&self, collection_id: &str, limit: usize) -> Result<Page, RemoteError> {
        let url = format!(
            "{tracks}?limit={limit}",
            tracks = self.tracks_url(collection_id),
            limit = limit
        );
        self.page(&url).await
    }

    async fn next_page(&self, next: &str) -> Result<Page, RemoteError> {
        self.page(next).await
    }

    async fn add_items(
        &self,
        collection_id: &str,
        uris: &[String],
        position: usize,
    ) -> Result<(), RemoteError> {
        let body = AddItemsRequest {
            uris: uris.to_vec(),
            position,
        };
        self.send(self.http.post(self.tracks_url(collection_id)).json(&body))
            .await?;
        Ok(())
    }

    async fn remove_items(&self, collection_id: &str, uris: &[String]) -> Result<(), RemoteError> {
        let body = RemoveItemsRequest {
            tracks: uris
                .iter()
                .map(|uri| TrackUri { uri: uri.clone() })
                .collect(),
        };
        self.send(self.http.delete(self.tracks_url(collection_id)).json(&body))
            .await?;
        Ok(())
    }

    async fn reorder(
        &self,
        collection_id: &str,
        range_start: usize,
        insert_before: usize,
    ) -> Result<(), RemoteError> {
        let body = ReorderItemsRequest {
            range_start,
            insert_before,
        };
        self.send(self.http.put(self.tracks_url(collection_id)).json(&body))
            .await?;
        Ok(())
    }
}
