use chrono::{Datelike, Timelike};
use handoff_core::is_within_creation_window;
use serde::Serialize;

use super::{parse_instant, serialize_payload, CommandResult, INSTANT_FORMAT};

#[derive(Debug, Serialize)]
struct WindowPayload {
    command: String,
    status: String,
    at: String,
    day_of_week: u32,
    hour: u32,
    in_window: bool,
}

pub fn run(at: &str) -> CommandResult {
    let instant = match parse_instant(at) {
        Ok(instant) => instant,
        Err(error) => {
            return CommandResult::failure("window", "invalid_timestamp", error.to_string(), 2)
        }
    };

    let day_of_week = instant.weekday().num_days_from_sunday();
    let hour = instant.hour();
    let payload = WindowPayload {
        command: "window".to_string(),
        status: "ok".to_string(),
        at: instant.format(INSTANT_FORMAT).to_string(),
        day_of_week,
        hour,
        in_window: is_within_creation_window(day_of_week, hour),
    };

    CommandResult { exit_code: 0, output: serialize_payload(payload) }
}
