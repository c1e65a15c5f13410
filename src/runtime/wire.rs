//! Line-oriented JSON wire format.
//!
//! Inbound frames arrive one per line and are decoded into [`AppEvent`]s.
//! Outbound frames carry one saved surface diff for one client.

use crate::app::args::ArgumentSet;
use crate::app::event::{AppEvent, ClientId, Interaction, ANONYMOUS_USER};
use crate::ui::{CardOp, SurfaceDiff};
use chrono::{DateTime, Local};
use rand::RngExt;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tracing::warn;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed frame: {0}")]
    Json(#[from] serde_json::Error),

    #[error("client id must not be empty")]
    EmptyClientId,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum InboundFrame {
    Interact {
        #[serde(default)]
        client: Option<String>,
        #[serde(default)]
        user: Option<String>,
        #[serde(default)]
        args: ArgumentSet,
    },
    Close {
        client: String,
    },
}

/// Decode one input line. Blank lines yield `Ok(None)`.
pub fn decode_line(line: &str) -> Result<Option<AppEvent>, DecodeError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let event = match serde_json::from_str::<InboundFrame>(line)? {
        InboundFrame::Interact { client, user, args } => {
            if client.as_deref().is_some_and(|id| id.trim().is_empty()) {
                return Err(DecodeError::EmptyClientId);
            }
            let user_id = user
                .filter(|u| !u.trim().is_empty())
                .unwrap_or_else(|| ANONYMOUS_USER.to_string());
            AppEvent::Interaction(Interaction {
                client_id: client,
                user_id,
                args,
            })
        }
        InboundFrame::Close { client } => {
            if client.trim().is_empty() {
                return Err(DecodeError::EmptyClientId);
            }
            AppEvent::ClientClosed { client_id: client }
        }
    };
    Ok(Some(event))
}

/// Reads frames line by line until EOF and forwards the decoded events.
/// Bad lines are logged and skipped. Always ends with `AppEvent::Shutdown`.
pub async fn pump_input<R>(reader: R, tx: mpsc::UnboundedSender<AppEvent>)
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => match decode_line(&line) {
                Ok(Some(event)) => {
                    if tx.send(event).is_err() {
                        return;
                    }
                }
                Ok(None) => {}
                Err(e) => warn!("dropping input frame: {}", e),
            },
            Ok(None) => break,
            Err(e) => {
                warn!("input closed: {}", e);
                break;
            }
        }
    }
    let _ = tx.send(AppEvent::Shutdown);
}

/// Random 128-bit id for clients that did not name themselves, e.g.
/// `tab-1f0c...`. Callers still check it against live clients.
pub fn generate_client_id() -> ClientId {
    let n: u128 = rand::rng().random();
    format!("tab-{:032x}", n)
}

#[derive(Debug, Clone, Serialize)]
pub struct OutboundFrame {
    pub client: ClientId,
    pub route: String,
    pub seq: u64,
    pub pushed_at: DateTime<Local>,
    pub ops: Vec<CardOp>,
}

impl OutboundFrame {
    pub fn new(client: &str, route: &str, diff: SurfaceDiff) -> Self {
        Self {
            client: client.to_string(),
            route: route.to_string(),
            seq: diff.seq,
            pushed_at: Local::now(),
            ops: diff.ops,
        }
    }
}
