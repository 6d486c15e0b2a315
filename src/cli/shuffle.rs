use crate::{
    cli::{connect, spinner},
    error,
    error::ShuffleError,
    shuffle::{Strategy, run as run_shuffle},
    success, utils, warning,
};

pub async fn shuffle(playlist_id: String, strategy: Strategy, retry: bool) {
    let client = match connect(retry).await {
        Ok(client) => client,
        Err(e) => error!("{}", e),
    };

    let pb = spinner(format!(
        "Shuffling playlist {} ({} strategy)...",
        playlist_id, strategy
    ));
    let result = run_shuffle(&client, &playlist_id, strategy).await;
    pb.finish_and_clear();

    match result {
        Ok(report) => success!(
            "Shuffled {} tracks in {} with {} remote changes.",
            report.items,
            utils::format_elapsed(report.elapsed),
            report.mutations
        ),
        Err(e @ ShuffleError::PartialShuffle { .. }) => {
            warning!("The playlist was only partly processed and is not in a consistent state.");
            if strategy == Strategy::Snapshot {
                warning!("Tracks removed before the failure may be missing. Check the playlist.");
            }
            error!("{}", e);
        }
        Err(e) => error!("{}", e),
    }
}
