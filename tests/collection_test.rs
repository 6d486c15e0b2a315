mod common;

use std::sync::Arc;

use common::{Call, Kind, StubPlaylist, track, tracks};
use spotshuffle::{collection::RemoteCollectionClient, error::RemoteError};

const PLAYLIST: &str = "pl";

fn client(stub: &Arc<StubPlaylist>) -> RemoteCollectionClient<Arc<StubPlaylist>> {
    RemoteCollectionClient::new(Arc::clone(stub))
}

#[tokio::test]
async fn test_fetch_all_concatenates_pages_in_order() {
    let stub = Arc::new(StubPlaylist::with_items(tracks(237)));

    let items = client(&stub).fetch_all(PLAYLIST).await.unwrap();

    assert_eq!(items, tracks(237));
    let calls = stub.calls();
    assert_eq!(calls.len(), 3);
    assert_eq!(calls[0], Call::FirstPage { limit: 100 });
    assert_eq!(calls[1], Call::NextPage("stub:100:100".to_string()));
    assert_eq!(calls[2], Call::NextPage("stub:200:100".to_string()));
}

#[tokio::test]
async fn test_fetch_all_empty_playlist() {
    let stub = Arc::new(StubPlaylist::default());

    let items = client(&stub).fetch_all(PLAYLIST).await.unwrap();

    assert!(items.is_empty());
    assert_eq!(stub.calls(), vec![Call::FirstPage { limit: 100 }]);
}

#[tokio::test]
async fn test_fetch_all_surfaces_failed_page() {
    let stub = Arc::new(StubPlaylist::with_items(tracks(237)));
    stub.fail_on(Kind::Page, 2, 500);

    let err = client(&stub).fetch_all(PLAYLIST).await.unwrap_err();

    match err {
        RemoteError::Status { status, body, .. } => {
            assert_eq!(status, 500);
            assert!(body.contains("500"));
        }
        other => panic!("Expected status error, got {:?}", other),
    }
    assert_eq!(stub.count_of(Kind::Page), 2);
}

#[tokio::test]
async fn test_append_batch_splits_into_chunks_of_100() {
    let stub = Arc::new(StubPlaylist::default());
    let items = tracks(250);

    let calls = client(&stub).append_batch(PLAYLIST, &items, 0).await.unwrap();

    assert_eq!(calls, 3);
    let adds: Vec<(usize, usize)> = stub
        .calls()
        .into_iter()
        .filter_map(|call| match call {
            Call::Add { uris, position } => Some((position, uris.len())),
            _ => None,
        })
        .collect();
    assert_eq!(adds, vec![(0, 100), (100, 100), (200, 50)]);
    assert_eq!(stub.items(), items);
}

#[tokio::test]
async fn test_append_batch_honors_start_position() {
    let stub = Arc::new(StubPlaylist::with_items(vec![track("a"), track("z")]));
    let items = vec![track("b"), track("c")];

    client(&stub).append_batch(PLAYLIST, &items, 1).await.unwrap();

    assert_eq!(stub.names(), vec!["a", "b", "c", "z"]);
}

#[tokio::test]
async fn test_append_batch_stops_at_failing_chunk() {
    let stub = Arc::new(StubPlaylist::default());
    stub.fail_on(Kind::Add, 2, 502);

    let err = client(&stub)
        .append_batch(PLAYLIST, &tracks(250), 0)
        .await
        .unwrap_err();

    assert_eq!(err.completed_calls, 1);
    assert_eq!(err.source.status(), Some(502));
    assert_eq!(stub.count_of(Kind::Add), 2);
    // first chunk stays, no rollback
    assert_eq!(stub.items().len(), 100);
}

#[tokio::test]
async fn test_append_batch_with_no_items_makes_no_calls() {
    let stub = Arc::new(StubPlaylist::default());

    let calls = client(&stub).append_batch(PLAYLIST, &[], 0).await.unwrap();

    assert_eq!(calls, 0);
    assert!(stub.calls().is_empty());
}

#[tokio::test]
async fn test_remove_all_deletes_until_first_page_is_empty() {
    let stub = Arc::new(StubPlaylist::with_items(tracks(150)));

    let deletes = client(&stub).remove_all(PLAYLIST).await.unwrap();

    assert!(deletes >= 2);
    assert_eq!(deletes, stub.count_of(Kind::Remove));
    assert!(stub.items().is_empty());
    assert_eq!(stub.calls().last(), Some(&Call::FirstPage { limit: 100 }));

    for call in stub.calls() {
        if let Call::Remove { uris } = call {
            assert!(uris.len() <= 100);
        }
    }
}

#[tokio::test]
async fn test_remove_all_tolerates_duplicate_uris() {
    let mut items = tracks(120);
    items.push(track("t0000"));
    items.insert(50, track("t0003"));
    let stub = Arc::new(StubPlaylist::with_items(items));

    client(&stub).remove_all(PLAYLIST).await.unwrap();

    assert!(stub.items().is_empty());
    let first_delete = stub
        .calls()
        .into_iter()
        .find_map(|call| match call {
            Call::Remove { uris } => Some(uris),
            _ => None,
        })
        .unwrap();
    let mut unique = first_delete.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), first_delete.len(), "a delete carries each uri once");
}

#[tokio::test]
async fn test_remove_all_detects_stalled_deletes() {
    let stub = Arc::new(StubPlaylist::with_items(tracks(10)));
    stub.ignore_removes();

    let err = client(&stub).remove_all(PLAYLIST).await.unwrap_err();

    assert_eq!(err.completed_calls, 1);
    assert!(matches!(err.source, RemoteError::Stalled { .. }));
}

#[tokio::test]
async fn test_remove_all_reports_failed_delete() {
    let stub = Arc::new(StubPlaylist::with_items(tracks(150)));
    stub.fail_on(Kind::Remove, 2, 403);

    let err = client(&stub).remove_all(PLAYLIST).await.unwrap_err();

    assert_eq!(err.completed_calls, 1);
    assert_eq!(err.source.status(), Some(403));
    assert_eq!(stub.items().len(), 50);
}

#[tokio::test]
async fn test_reorder_pair_moves_before_target() {
    let stub = Arc::new(StubPlaylist::with_items(vec![
        track("a"),
        track("b"),
        track("c"),
        track("d"),
    ]));
    let client = client(&stub);

    client.reorder_pair(PLAYLIST, 3, 1).await.unwrap();
    assert_eq!(stub.names(), vec!["a", "d", "b", "c"]);

    client.reorder_pair(PLAYLIST, 0, 4).await.unwrap();
    assert_eq!(stub.names(), vec!["d", "b", "c", "a"]);

    assert_eq!(
        stub.calls(),
        vec![
            Call::Reorder {
                range_start: 3,
                insert_before: 1
            },
            Call::Reorder {
                range_start: 0,
                insert_before: 4
            },
        ]
    );
}
