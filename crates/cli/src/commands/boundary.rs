use handoff_core::next_sunday_at_0800;
use serde::Serialize;

use super::{parse_instant, serialize_payload, CommandResult, INSTANT_FORMAT};

#[derive(Debug, Serialize)]
struct BoundaryPayload {
    command: String,
    status: String,
    at: String,
    boundary: String,
}

pub fn run(at: &str) -> CommandResult {
    let instant = match parse_instant(at) {
        Ok(instant) => instant,
        Err(error) => {
            return CommandResult::failure("boundary", "invalid_timestamp", error.to_string(), 2)
        }
    };

    let boundary = next_sunday_at_0800(instant);
    let payload = BoundaryPayload {
        command: "boundary".to_string(),
        status: "ok".to_string(),
        at: instant.format(INSTANT_FORMAT).to_string(),
        boundary: boundary.format(INSTANT_FORMAT).to_string(),
    };

    CommandResult { exit_code: 0, output: serialize_payload(payload) }
}
