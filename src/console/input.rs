use crate::domain::device::DeviceId;
use crate::domain::events::Event;
use crate::domain::surface::{ControlId, ControlInput};
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc::Sender;
use tracing::{debug, info, instrument, warn};

const USAGE: &str = "press <control> | slide <control> <value> | remove <device> | list | quit";

/// Reads commands line by line and forwards them to the event loop. The panel is closed when the
/// input ends or `quit` is entered.
#[instrument(skip_all)]
pub async fn listen<R: AsyncBufRead + Unpin>(reader: R, tx: Sender<Event>) {
    info!("⌨️ Commands: {}", USAGE);
    let mut lines = reader.lines();

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                warn!("⚠️ Unable to read input: {}", e);
                break;
            }
        };

        match parse_command(&line) {
            Ok(Some(event)) => {
                let closed = event == Event::Closed;
                if tx.send(event).await.is_err() || closed {
                    return;
                }
            }
            Ok(None) => {}
            Err(e) => warn!("⚠️ {}, expected {}", e, USAGE),
        }
    }

    debug!("Input ended, closing the panel");
    tx.send(Event::Closed).await.unwrap_or_default();
}

pub fn parse_command(line: &str) -> Result<Option<Event>, CommandError> {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(None);
    };

    let event = match command {
        "press" => Event::ControlActivated {
            control: ControlId(parse_number(words.next(), "control")?),
            input: ControlInput::Press,
        },
        "slide" => {
            let control = ControlId(parse_number(words.next(), "control")?);
            let value = words.next().ok_or(CommandError::MissingArgument("value"))?;
            Event::ControlActivated {
                control,
                input: ControlInput::Slide(value.to_string()),
            }
        }
        "remove" => Event::RemoveDevice(DeviceId(parse_number(words.next(), "device")?)),
        "list" => Event::ListDevices,
        "quit" | "exit" => Event::Closed,
        other => return Err(CommandError::UnknownCommand(other.to_string())),
    };

    Ok(Some(event))
}

fn parse_number<T: std::str::FromStr>(word: Option<&str>, name: &'static str) -> Result<T, CommandError> {
    let word = word.ok_or(CommandError::MissingArgument(name))?;
    word.parse().map_err(|_| CommandError::InvalidArgument {
        name,
        value: word.to_string(),
    })
}

#[derive(Error, Debug, PartialEq)]
pub enum CommandError {
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
    #[error("missing {0}")]
    MissingArgument(&'static str),
    #[error("invalid {name} '{value}'")]
    InvalidArgument { name: &'static str, value: String },
}
