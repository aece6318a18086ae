//! Turn protocol for the `bt-bot` binary.
//!
//! The engine writes one map per turn, terminated by a line starting with
//! `go`. The bot answers with one `source destination ships` line per order
//! followed by `go`.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use pw_bot::{Bot, TurnReport};
use pw_core::GameState;
use tracing::{debug, error};

pub const END_OF_TURN: &str = "go";

/// Play one turn from raw map text and build the response block.
///
/// A map that fails to parse is logged and answered with no orders.
pub fn respond(bot: &mut Bot<GameState>, text: &str) -> (String, Option<TurnReport>) {
    let mut response = String::new();
    let report = match text.parse::<GameState>() {
        Ok(mut world) => {
            let report = bot.play_turn(&mut world);
            for order in world.take_orders() {
                response.push_str(&format!("{order}\n"));
            }
            Some(report)
        }
        Err(err) => {
            error!(%err, "malformed turn, sending no orders");
            None
        }
    };
    response.push_str(END_OF_TURN);
    response.push('\n');
    (response, report)
}

/// Serve turns until `input` is exhausted. Returns the number of turns
/// answered.
pub fn run<R, O>(
    bot: &mut Bot<GameState>,
    input: R,
    output: &mut O,
    mut reports: Option<&mut dyn Write>,
) -> Result<u64>
where
    R: BufRead,
    O: Write,
{
    let mut map = String::new();
    let mut turns = 0;

    for line in input.lines() {
        let line = line.context("Failed to read turn input")?;
        if !line.starts_with(END_OF_TURN) {
            map.push_str(&line);
            map.push('\n');
            continue;
        }

        let (response, report) = respond(bot, &map);
        output
            .write_all(response.as_bytes())
            .and_then(|_| output.flush())
            .context("Failed to write orders")?;

        if let (Some(sink), Some(report)) = (reports.as_mut(), report.as_ref()) {
            write_report(&mut **sink, report)?;
        }

        map.clear();
        turns += 1;
    }

    if !map.trim().is_empty() {
        debug!(bytes = map.len(), "input ended mid-turn");
    }
    Ok(turns)
}

/// Append `report` as one JSON line.
pub fn write_report(sink: &mut dyn Write, report: &TurnReport) -> Result<()> {
    serde_json::to_writer(&mut *sink, report).context("Failed to serialize turn report")?;
    sink.write_all(b"\n")
        .and_then(|_| sink.flush())
        .context("Failed to write turn report")?;
    Ok(())
}
