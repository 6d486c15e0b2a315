use tabled::Table;

use crate::{
    cli::{connect, spinner},
    dedupe, error, info,
    types::DuplicateTableRow,
    utils, warning,
};

pub async fn duplicates(playlist_id: String, remove: bool) {
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

    let groups = dedupe::find_duplicates(&items);
    if groups.is_empty() {
        info!("No duplicate tracks in playlist {}.", playlist_id);
        return;
    }

    let extra: usize = groups.iter().map(|g| g.extra_copies()).sum();
    let rows: Vec<DuplicateTableRow> = groups
        .into_iter()
        .map(|g| DuplicateTableRow {
            length: utils::format_track_length(g.duration_ms),
            positions: g
                .positions
                .iter()
                .map(|p| (p + 1).to_string())
                .collect::<Vec<_>>()
                .join(", "),
            name: g.name,
            artist: g.artist,
        })
        .collect();

    println!("{}", Table::new(rows));
    info!("{} extra copies found.", extra);

    if remove {
        warning!("Removing duplicates is not supported yet. The playlist was not changed.");
    }
}
