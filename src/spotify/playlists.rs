use crate::{
    error::RemoteError,
    spotify::SpotifyApi,
    types::{CurrentUser, GetUserPlaylistsResponse, Playlist},
};

impl SpotifyApi {
    pub async fn current_user(&self) -> Result<CurrentUser, RemoteError> {
        let url = self.url("/me");
        self.send_json(self.get(&url)).await
    }

    /// Playlists owned by the current user. Followed and collaborative
    /// playlists owned by someone else are left out since they cannot be
    /// reordered.
    pub async fn owned_playlists(&self) -> Result<Vec<Playlist>, RemoteError> {
        let user = self.current_user().await?;

        let mut playlists = Vec::new();
        let mut next = Some(self.url("/me/playlists?limit=50"));

        while let Some(url) = next {
            let res: GetUserPlaylistsResponse = self.send_json(self.get(&url)).await?;
            playlists.extend(res.items.into_iter().filter(|p| p.owner.id == user.id));
            next = res.next;
        }

        Ok(playlists)
    }
}
