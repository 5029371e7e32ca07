use gallerypicker::picker::{selection_channel, ReadBarrier};

mod common;
use common::bytes;

#[test]
fn pending_selection_resolves_exactly_once() {
    let (sender, mut pending) = selection_channel();
    assert_eq!(pending.poll(), None);
    assert!(!pending.is_resolved());

    sender.complete(vec![bytes(b"a")]);
    let images = pending.poll().expect("resolved");
    assert_eq!(images.len(), 1);
    assert!(pending.is_resolved());
    assert_eq!(pending.poll(), None);
}

#[test]
fn dropped_sender_resolves_empty() {
    let (sender, mut pending) = selection_channel();
    drop(sender);
    assert_eq!(pending.poll(), Some(Vec::new()));
    assert_eq!(pending.poll(), None);
}

#[test]
fn wait_blocks_until_completion() {
    let (sender, pending) = selection_channel();
    let handle = std::thread::spawn(move || {
        std::thread::sleep(std::time::Duration::from_millis(20));
        sender.complete(vec![bytes(b"x"), bytes(b"y")]);
    });
    let images = pending.wait();
    handle.join().unwrap();
    assert_eq!(images.len(), 2);
}

#[test]
fn barrier_releases_after_last_settlement() {
    let (sender, mut pending) = selection_channel();
    let mut barrier = ReadBarrier::new(3, sender);

    assert!(!barrier.settle(2, Some(bytes(b"c"))));
    assert_eq!(pending.poll(), None);
    assert!(!barrier.settle(1, None));
    assert_eq!(barrier.remaining(), 1);
    assert!(barrier.settle(0, Some(bytes(b"a"))));

    let images = pending.poll().expect("released");
    let contents: Vec<&[u8]> = images.iter().map(|b| &**b).collect();
    assert_eq!(contents, vec![&b"a"[..], &b"c"[..]]);
}

#[test]
fn barrier_with_no_reads_releases_immediately() {
    let (sender, mut pending) = selection_channel();
    let _barrier = ReadBarrier::new(0, sender);
    assert_eq!(pending.poll(), Some(Vec::new()));
}

#[test]
fn barrier_ignores_settlements_after_release() {
    let (sender, mut pending) = selection_channel();
    let mut barrier = ReadBarrier::new(1, sender);
    assert!(barrier.settle(0, None));
    assert!(!barrier.settle(1, Some(bytes(b"late"))));
    assert_eq!(pending.poll(), Some(Vec::new()));
}

#[test]
fn settle_read_keeps_empty_files_and_drops_failures() {
    let (sender, mut pending) = selection_channel();
    let mut barrier = ReadBarrier::new(3, sender);

    assert!(!barrier.settle_read(0, "empty.png", Ok::<_, std::io::Error>(Vec::new())));
    assert!(!barrier.settle_read(
        1,
        "gone.png",
        Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone")),
    ));
    assert!(barrier.settle_read(2, "cat.png", Ok::<_, std::io::Error>(b"cat".to_vec())));

    let images = pending.poll().expect("released");
    let contents: Vec<&[u8]> = images.iter().map(|b| &**b).collect();
    assert_eq!(contents, vec![&b""[..], &b"cat"[..]]);
}

#[test]
fn settle_read_accepts_infallible_reads() {
    let (sender, mut pending) = selection_channel();
    let mut barrier = ReadBarrier::new(1, sender);
    assert!(barrier.settle_read(0, "photo.webp", Ok::<_, std::convert::Infallible>(vec![1, 2])));
    assert_eq!(pending.poll().map(|images| images.len()), Some(1));
}
