use crate::engine::RuleEngine;
use spfsandbox_types::Outcome;
use std::cell::RefCell;
use std::rc::Rc;

pub type CallLog = Rc<RefCell<Vec<&'static str>>>;

/// Build an engine by importing each `(outcome, ranges)` batch in order.
pub fn engine_with(batches: Vec<(Outcome, Vec<&str>)>) -> RuleEngine {
    let mut engine = RuleEngine::new();
    for (outcome, ranges) in batches {
        engine.import(ranges, outcome);
    }
    engine
}

pub fn call_log() -> CallLog {
    Rc::new(RefCell::new(Vec::new()))
}

/// A listener that appends `name` to the returned log on every call.
pub fn recorder(name: &'static str) -> (CallLog, impl FnMut() + 'static) {
    let log = call_log();
    let sink = log.clone();
    (log, move || sink.borrow_mut().push(name))
}
