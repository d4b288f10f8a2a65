//! Concurrent read access to the status table.

use std::thread;

use hmmbind_errors::{lookup, table, BindingError, UNKNOWN_STATUS};

#[test]
fn lookups_agree_across_threads() {
    let expected: Vec<&str> = (-2..32).map(lookup).collect();

    thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                s.spawn(|| {
                    (0..100)
                        .map(|_| (-2..32).map(lookup).collect::<Vec<_>>())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for handle in handles {
            for round in handle.join().unwrap() {
                assert_eq!(round, expected);
            }
        }
    });
}

#[test]
fn table_is_unchanged_after_reads() {
    let before = table().to_vec();
    thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                for e in table() {
                    assert_eq!(lookup(e.code), e.description);
                }
                assert_eq!(lookup(-1), UNKNOWN_STATUS);
            });
        }
    });
    assert_eq!(table(), before.as_slice());
}

#[test]
fn errors_cross_threads() {
    let err = thread::spawn(|| BindingError::unexpected(7, "p7_Pipeline"))
        .join()
        .unwrap();
    assert_eq!(
        err.to_string(),
        "p7_Pipeline failed with error 7: file format not correctly detected"
    );
}
