use std::future::Future;

use crate::error::TileLoadError;
use crate::grid::TileId;

/// Outcome of one pass over the ordered tile list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreloadReport {
    pub loaded: Vec<TileId>,
    pub failed: Vec<TileId>,
}

/// Fetch tiles strictly one at a time, in the given order.
///
/// Each fetch is awaited before the next one starts. A failure is handed to
/// `on_failed` and the pass moves on; nothing is retried.
pub async fn preload_in_order<F, Fut>(
    order: Vec<TileId>,
    mut fetch: F,
    mut on_loaded: impl FnMut(TileId),
    mut on_failed: impl FnMut(&TileLoadError),
) -> PreloadReport
where
    F: FnMut(TileId) -> Fut,
    Fut: Future<Output = Result<(), TileLoadError>>,
{
    let mut report = PreloadReport::default();
    for id in order {
        match fetch(id).await {
            Ok(()) => {
                on_loaded(id);
                report.loaded.push(id);
            }
            Err(err) => {
                on_failed(&err);
                report.failed.push(id);
            }
        }
    }
    report
}
