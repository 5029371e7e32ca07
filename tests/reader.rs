use gallerypicker::picker::reader::read_all;
use tempfile::tempdir;

mod common;
use common::{write_bytes, PNG_2X2};

#[test]
fn reads_every_file_in_selection_order() {
    let tmp = tempdir().unwrap();
    let mut paths = Vec::new();
    for idx in 0..6u8 {
        let path = tmp.path().join(format!("{idx}.png"));
        write_bytes(&path, &[idx; 4]);
        paths.push(path);
    }

    let images = read_all(paths, 3);
    assert_eq!(images.len(), 6);
    for (idx, image) in images.iter().enumerate() {
        assert_eq!(&**image, &[idx as u8; 4]);
    }
}

#[test]
fn unreadable_files_are_dropped() {
    let tmp = tempdir().unwrap();
    let good = tmp.path().join("good.png");
    write_bytes(&good, &PNG_2X2);
    let missing = tmp.path().join("missing.png");
    let directory = tmp.path().join("folder.png");
    std::fs::create_dir(&directory).unwrap();

    let images = read_all(vec![missing, good, directory], 2);
    assert_eq!(images.len(), 1);
    assert_eq!(&*images[0], PNG_2X2.as_slice());
}

#[test]
fn empty_selection_reads_nothing() {
    assert!(read_all(Vec::new(), 4).is_empty());
}

#[test]
fn zero_parallelism_still_reads() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("one.jpg");
    write_bytes(&path, b"jpeg");
    assert_eq!(read_all(vec![path], 0).len(), 1);
}

#[test]
fn empty_files_are_kept() {
    let tmp = tempdir().unwrap();
    let empty = tmp.path().join("empty.png");
    write_bytes(&empty, &[]);

    let images = read_all(vec![empty], 1);
    assert_eq!(images.len(), 1);
    assert!(images[0].is_empty());
}
