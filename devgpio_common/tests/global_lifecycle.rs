//! Process-wide registry lifecycle.
//!
//! Runs as its own test binary, so this is the only code touching the
//! handle in the process. Kept as a single test to make the ordering
//! explicit.

use std::io;
use std::sync::{Arc, Mutex};

use devgpio_common::pin::{Board, PinError, global};

/// In-memory log sink for a scoped subscriber.
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn create_once_then_read_everywhere() {
    // Nothing exists yet.
    assert!(!global::exists());
    assert!(matches!(global::instance(), Err(PinError::Uninitialized)));
    assert_eq!(global::resolve("P1-08"), Err(PinError::Uninitialized));
    // Querying does not construct implicitly.
    assert!(!global::exists());

    let registry = global::create(Board::RaspiBRev2);
    assert_eq!(registry.board(), Board::RaspiBRev2);
    assert!(global::exists());

    assert_eq!(global::resolve("P1-08"), Ok(14));
    assert_eq!(global::resolve("GPIO14"), Ok(14));
    assert_eq!(global::resolve("14"), Ok(14));

    // A second creation with another board is refused...
    let err = global::try_create(Board::BeagleBoneBlack).unwrap_err();
    assert_eq!(
        err,
        PinError::AlreadyCreated {
            existing: Board::RaspiBRev2,
            requested: Board::BeagleBoneBlack,
        }
    );

    // ...and the tolerant form is a no-op returning the first instance,
    // with a warning naming both boards.
    let logs = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer({
            let logs = logs.clone();
            move || logs.clone()
        })
        .with_ansi(false)
        .finish();
    let again = tracing::subscriber::with_default(subscriber, || {
        global::create(Board::BeagleBoneBlack)
    });
    assert!(std::ptr::eq(registry, again));

    let output = logs.contents();
    assert!(output.contains("WARN"), "{output}");
    assert!(output.contains("instance already created"), "{output}");
    assert!(
        output.contains("raspi_b_rev2 (requested beaglebone_black)"),
        "{output}"
    );
    assert_eq!(global::instance().unwrap().board(), Board::RaspiBRev2);

    // Still the Rev2 table, not the BeagleBone one.
    assert_eq!(
        global::resolve("USR0"),
        Err(PinError::Unresolved("USR0".to_string()))
    );
    assert_eq!(global::resolve("P5-04"), Ok(29));
}
