use core_types::{PageId, RequestId};
use omnibox::HistoryHit;
use std::sync::mpsc::{self, Receiver, Sender};

#[derive(Debug)]
pub enum CoreCommand {
    // Address field -> history index
    HistorySearch {
        page_id: PageId,
        request_id: RequestId,
        query: String,
    },
    CancelHistorySearch {
        page_id: PageId,
        request_id: RequestId,
    },
}

#[derive(Debug)]
pub enum CoreEvent {
    // History index -> UI
    HistoryResults {
        page_id: PageId,
        request_id: RequestId,
        hits: Vec<HistoryHit>,
    },
    HistoryError {
        page_id: PageId,
        request_id: RequestId,
        error: String,
    },
}

impl CoreEvent {
    pub fn page_id(&self) -> PageId {
        match self {
            CoreEvent::HistoryResults { page_id, .. } | CoreEvent::HistoryError { page_id, .. } => {
                *page_id
            }
        }
    }
}

pub struct Bus {
    pub cmd_tx: Sender<CoreCommand>,
    pub evt_rx: Receiver<CoreEvent>,
    pub evt_tx: Sender<CoreEvent>, // shareable for runtimes
}

impl Bus {
    /// Creates the UI side of the bus and the command receiver for the runtime.
    pub fn channel() -> (Self, Receiver<CoreCommand>) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (evt_tx, evt_rx) = mpsc::channel();
        (
            Self {
                cmd_tx,
                evt_rx,
                evt_tx,
            },
            cmd_rx,
        )
    }
}
