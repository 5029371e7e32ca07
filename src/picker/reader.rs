use std::{
    fs,
    path::PathBuf,
    sync::{
        mpsc::{self, Receiver, Sender},
        Arc, Mutex,
    },
    thread,
};

use anyhow::{Context, Result};

use super::{selection_channel, ImageBytes, ReadBarrier};

struct ReadRequest {
    index: usize,
    path: PathBuf,
}

struct ReadStatus {
    index: usize,
    path: PathBuf,
    result: Result<Vec<u8>>,
}

/// Reads every path on up to `parallel` worker threads and blocks until all of
/// them have settled. Unreadable files are logged and left out.
pub fn read_all(paths: Vec<PathBuf>, parallel: usize) -> Vec<ImageBytes> {
    let (sender, pending) = selection_channel();
    let mut barrier = ReadBarrier::new(paths.len(), sender);
    if paths.is_empty() {
        return pending.wait();
    }

    let (request_tx, request_rx) = mpsc::channel();
    let (status_tx, status_rx) = mpsc::channel();
    let rx = Arc::new(Mutex::new(request_rx));
    for _ in 0..parallel.clamp(1, paths.len()) {
        spawn_reader_thread(rx.clone(), status_tx.clone());
    }
    drop(status_tx);

    for (index, path) in paths.into_iter().enumerate() {
        if request_tx.send(ReadRequest { index, path }).is_err() {
            break;
        }
    }
    drop(request_tx);

    collect(&mut barrier, status_rx);
    pending.wait()
}

fn collect(barrier: &mut ReadBarrier, status_rx: Receiver<ReadStatus>) {
    while barrier.remaining() > 0 {
        let Ok(status) = status_rx.recv() else {
            // Every worker is gone; settle what never reported back.
            tracing::warn!("{} reads never finished", barrier.remaining());
            while barrier.remaining() > 0 {
                barrier.settle(usize::MAX, None);
            }
            return;
        };
        let label = status.path.display().to_string();
        barrier.settle_read(status.index, &label, status.result);
    }
}

fn spawn_reader_thread(rx: Arc<Mutex<Receiver<ReadRequest>>>, tx: Sender<ReadStatus>) {
    thread::spawn(move || loop {
        let req = {
            let Ok(lock) = rx.lock() else { break };
            match lock.recv() {
                Ok(req) => req,
                Err(_) => break,
            }
        };

        let result = fs::read(&req.path)
            .with_context(|| format!("Unable to read {}", req.path.display()));
        if tx
            .send(ReadStatus {
                index: req.index,
                path: req.path,
                result,
            })
            .is_err()
        {
            break;
        }
    });
}
