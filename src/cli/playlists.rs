use tabled::Table;

use crate::{
    cli::{connect, spinner},
    error, info,
    types::{PlaylistTableRow, TrackTableRow},
    utils,
};

pub async fn list_playlists() {
    let client = match connect(true).await {
        Ok(client) => client,
        Err(e) => error!("{}", e),
    };

    let pb = spinner("Fetching your playlists...".to_string());
    let result = client.api().inner().owned_playlists().await;
    pb.finish_and_clear();

    let mut playlists = match result {
        Ok(playlists) => playlists,
        Err(e) => error!("Failed to fetch playlists: {}", e),
    };

    if playlists.is_empty() {
        info!("You do not own any playlists.");
        return;
    }

    playlists.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    let rows: Vec<PlaylistTableRow> = playlists
        .into_iter()
        .map(|p| PlaylistTableRow {
            name: p.name,
            tracks: p.tracks.total,
            id: p.id,
        })
        .collect();

    println!("{}", Table::new(rows));
}

pub async fn list_tracks(playlist_id: String) {
    let client = match connect(true).await {
        Ok(client) => client,
        Err(e) => error!("{}", e),
    };

    let pb = spinner(format!("Fetching tracks of {}...", playlist_id));
    let result = client.fetch_all(&playlist_id).await;
    pb.finish_and_clear();

    let items = match result {
        Ok(items) => items,
        Err(e) => error!("Failed to fetch tracks: {}", e),
    };

    if items.is_empty() {
        info!("Playlist {} is empty.", playlist_id);
        return;
    }

    let rows: Vec<TrackTableRow> = items
        .into_iter()
        .enumerate()
        .map(|(position, item)| TrackTableRow {
            position: position + 1,
            name: if item.name.is_empty() {
                "(unavailable)".to_string()
            } else {
                item.name
            },
            artist: item.artist,
            length: utils::format_track_length(item.duration_ms),
        })
        .collect();

    println!("{}", Table::new(rows));
}
