// crates/runtime_history/src/lib.rs
use std::sync::mpsc::{Receiver, Sender};
use std::thread::{self, JoinHandle};

use bus::{CoreCommand, CoreEvent};
use core_types::{PageId, RequestId};
use omnibox::HistoryHit;

mod memory;

pub use memory::InMemoryHistory;

/// A history index the runtime can query. Treated as a black box: it gets
/// the raw typed text and answers with hits carrying match offsets.
pub trait HistorySource: Send + 'static {
    fn search(&mut self, query: &str) -> Result<Vec<HistoryHit>, String>;
}

struct PendingSearch {
    page_id: PageId,
    request_id: RequestId,
    query: String,
}

/// Serves `HistorySearch` commands on a dedicated thread.
///
/// Commands queued while a search runs are coalesced: per page only the
/// newest search is executed, since the UI discards older answers anyway.
/// The thread exits when either channel is closed.
pub fn start_history_runtime<S: HistorySource>(
    mut source: S,
    cmd_rx: Receiver<CoreCommand>,
    evt_tx: Sender<CoreEvent>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        while let Ok(cmd) = cmd_rx.recv() {
            let mut queue: Vec<PendingSearch> = Vec::new();
            for cmd in std::iter::once(cmd).chain(cmd_rx.try_iter()) {
                match cmd {
                    CoreCommand::HistorySearch {
                        page_id,
                        request_id,
                        query,
                    } => {
                        let next = PendingSearch {
                            page_id,
                            request_id,
                            query,
                        };
                        match queue.iter_mut().find(|p| p.page_id == page_id) {
                            Some(slot) => {
                                log::trace!(
                                    target: "history",
                                    "page {page_id}: #{} superseded by #{request_id}",
                                    slot.request_id
                                );
                                *slot = next;
                            }
                            None => queue.push(next),
                        }
                    }
                    CoreCommand::CancelHistorySearch {
                        page_id,
                        request_id,
                    } => {
                        queue.retain(|p| !(p.page_id == page_id && p.request_id == request_id));
                    }
                }
            }

            for search in queue {
                let evt = match source.search(&search.query) {
                    Ok(hits) => CoreEvent::HistoryResults {
                        page_id: search.page_id,
                        request_id: search.request_id,
                        hits,
                    },
                    Err(error) => CoreEvent::HistoryError {
                        page_id: search.page_id,
                        request_id: search.request_id,
                        error,
                    },
                };
                if evt_tx.send(evt).is_err() {
                    return;
                }
            }
        }
    })
}
