//! Start-up through a config file, as the embedding process does it.
//!
//! The registry is per process, so the whole sequence lives in one test.

use std::io::Write;

use devgpio_common::pin::{Board, Namespace, global};
use devgpio_lookup::{LookupConfig, LookupCore, LookupError};
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn config_selects_board_and_first_init_wins() {
    let file = write_config(
        r#"[shared]
service_name = "devgpio-startup-test"

[gpio]
board = "raspi_bp"
pins = ["J8-08", "GPIO21", "0"]
"#,
    );

    let config = LookupCore::load_config(file.path()).unwrap();
    let mut core = LookupCore::new(config).unwrap();
    assert!(matches!(core.resolve_all(&["J8-08"]), Err(LookupError::Pin(_))));
    assert!(!global::exists());

    let registry = core.init().unwrap();
    assert_eq!(registry.board(), Board::RaspiBPlus);
    assert!(global::exists());

    let reports = core.resolve_all(&["J8-27", "GPIO0", "0", "P1-08"]).unwrap();
    let pins: Vec<_> = reports.iter().map(|r| r.pin).collect();
    assert_eq!(pins, vec![Some(0), Some(0), Some(0), None]);
    assert_eq!(reports[0].namespace, Some(Namespace::Key));

    // A later core asking for another board reuses the existing registry,
    // so its BeagleBone pins are reported as unknown.
    let mut late = LookupCore::new(LookupConfig::for_board(Board::RaspiBRev2))
        .unwrap()
        .with_board_override(Board::BeagleBoneBlack);
    assert_eq!(late.init().unwrap().board(), Board::RaspiBPlus);

    let mut bbb = LookupConfig::for_board(Board::BeagleBoneBlack);
    bbb.gpio.pins = vec!["USR0".into(), "J8-40".into(), "led1".into()];
    let mut mismatched = LookupCore::new(bbb).unwrap();
    match mismatched.init() {
        Err(LookupError::Pins(failed)) => assert_eq!(failed, vec!["USR0", "led1"]),
        other => panic!("expected Pins error, got {other:?}"),
    }
    assert_eq!(global::instance().unwrap().board(), Board::RaspiBPlus);
}
