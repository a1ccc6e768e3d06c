// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! A line-based front end for the converter.
//!
//! Type `ontario HH:MM` or `sydney HH:MM` to convert a time, `reset` to go back
//! to the current time, and end the input (Ctrl-D) to quit. Both zones are
//! printed after every change, including the once-a-minute refresh.
//!
//! Engine events are logged to stderr so they do not mix with the display.

use std::io;

use anyhow::Context as _;
use futures::stream::{self, Stream};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::Level;
use tzbridge::{Clock, DisplayState, Event, Session, Zone};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    let session = Session::new(Clock::new_system())?;

    let mut read_failure = None;
    let events = input_events(BufReader::new(tokio::io::stdin()), &mut read_failure);
    session.run(events, render).await;

    if let Some(err) = read_failure {
        return Err(err).context("failed to read from stdin");
    }

    Ok(())
}

/// Turns input lines into events until the input ends.
///
/// Lines that are not valid UTF-8 are skipped. A read error ends the stream
/// and is stored in `failure`.
fn input_events<R>(reader: R, failure: &mut Option<io::Error>) -> impl Stream<Item = Event>
where
    R: AsyncBufRead + Unpin,
{
    stream::unfold((reader.split(b'\n'), failure), |(mut lines, failure)| async move {
        loop {
            match lines.next_segment().await {
                Ok(Some(bytes)) => {
                    if let Some(event) = decode_line(&bytes) {
                        return Some((event, (lines, failure)));
                    }
                }
                Ok(None) => return None,
                Err(err) => {
                    *failure = Some(err);
                    return None;
                }
            }
        }
    })
}

fn decode_line(bytes: &[u8]) -> Option<Event> {
    match std::str::from_utf8(bytes) {
        Ok(line) => parse_line(line),
        Err(err) => {
            tracing::event!(
                name: "tzbridge.input",
                Level::WARN,
                len = bytes.len(),
                error = %err,
                "skipped an input line that is not valid UTF-8"
            );
            None
        }
    }
}

fn parse_line(line: &str) -> Option<Event> {
    let mut words = line.split_whitespace();

    let event = match (words.next()?.to_ascii_lowercase().as_str(), words.next()) {
        ("ontario", text) => Event::edit(Zone::Ontario, text.unwrap_or_default()),
        ("sydney", text) => Event::edit(Zone::Sydney, text.unwrap_or_default()),
        ("reset", None) => Event::Reset,
        _ => {
            eprintln!("expected `ontario HH:MM`, `sydney HH:MM` or `reset`");
            return None;
        }
    };

    Some(event)
}

fn render(state: &DisplayState) {
    println!();
    for zone in Zone::ALL {
        println!("{:<18} {}", zone.display_name(), state.display(zone));
    }
}
