//! Racing creators and concurrent readers on the process-wide handle.

use std::sync::{Arc, Barrier};
use std::thread;

use devgpio_common::pin::{Board, PinError, global};

#[test]
fn exactly_one_creator_wins_and_readers_agree() {
    const THREADS: usize = 8;
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                let board = Board::ALL[i % Board::ALL.len()];
                barrier.wait();
                global::try_create(board).map(|r| r.board())
            })
        })
        .collect();

    let results: Vec<Result<Board, PinError>> =
        handles.into_iter().map(|h| h.join().unwrap()).collect();

    let winners: Vec<Board> = results.iter().filter_map(|r| r.clone().ok()).collect();
    assert_eq!(winners.len(), 1, "results: {results:?}");
    let winner = winners[0];

    for result in &results {
        if let Err(err) = result {
            assert!(
                matches!(err, PinError::AlreadyCreated { existing, .. } if *existing == winner),
                "unexpected error {err:?}"
            );
        }
    }

    // Every reader sees the winner's table.
    let probe = match winner {
        Board::RaspiBRev2 => ("P1-26", 7),
        Board::RaspiBPlus => ("J8-36", 16),
        Board::BeagleBoneBlack => ("USR2", 55),
    };
    let readers: Vec<_> = (0..THREADS)
        .map(|_| thread::spawn(move || global::resolve(probe.0)))
        .collect();
    for reader in readers {
        assert_eq!(reader.join().unwrap(), Ok(probe.1));
    }
}
