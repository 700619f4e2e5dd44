/// Lookup of structured log entries in the recorded events
use sale_common::StructuredLog;
use soroban_sdk::testutils::Events;
use soroban_sdk::{Env, Symbol, TryFromVal};

/// First log entry published under `level` for `operation`, if any.
pub fn find_structured_log(env: &Env, level: Symbol, operation: Symbol) -> Option<StructuredLog> {
    for event in env.events().all().iter() {
        if event.1.len() < 2 {
            continue;
        }
        let event_level = match Symbol::try_from_val(env, &event.1.get(1).unwrap()) {
            Ok(level) => level,
            Err(_) => continue,
        };
        if event_level != level {
            continue;
        }
        if let Ok(log) = StructuredLog::try_from_val(env, &event.2) {
            if log.operation == operation {
                return Some(log);
            }
        }
    }
    None
}
