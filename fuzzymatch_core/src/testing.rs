//! Log capture for asserting on diagnostic output in tests

use std::cell::RefCell;
use std::sync::Once;

use log::{LevelFilter, Log, Metadata, Record};

thread_local! {
    static RECORDS: RefCell<Vec<String>> = RefCell::new(Vec::new());
}

/// Records every message on the thread that emitted it
struct Capture;

impl Log for Capture {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        RECORDS.with(|records| records.borrow_mut().push(record.args().to_string()));
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture;

/// Run `f` and return what it logged on the current thread, at any level.
pub(crate) fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, Vec<String>) {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        log::set_logger(&CAPTURE).expect("a logger was installed before the capture");
        log::set_max_level(LevelFilter::Trace);
    });

    RECORDS.with(|records| records.borrow_mut().clear());
    let value = f();
    let lines = RECORDS.with(|records| records.borrow_mut().drain(..).collect());
    (value, lines)
}
