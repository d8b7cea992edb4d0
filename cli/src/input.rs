//! Turn stdin lines into composer events.
//!
//! - `/quit`          leave the session
//! - `/to <id>`       address the next messages to user `<id>`
//! - `/open <id>`     switch to the conversation with user `<id>` (drops the draft)
//! - `/draft <text>`  type without sending (shows as typing to the peer)
//! - anything else    type the line, then submit it

use pychat::session::UiEvent;

pub fn parse_line(line: &str) -> Vec<UiEvent> {
    let line = line.trim_end_matches(['\r', '\n']);

    if line.trim() == "/quit" {
        return vec![UiEvent::Quit];
    }
    if let Some(id) = line.strip_prefix("/to ") {
        return vec![UiEvent::SelectRecipient(id.trim().to_owned())];
    }
    if let Some(id) = line.strip_prefix("/open ") {
        return vec![UiEvent::OpenConversation(id.trim().to_owned())];
    }
    if let Some(text) = line.strip_prefix("/draft ") {
        return vec![UiEvent::Input(text.to_owned())];
    }
    if line.is_empty() {
        return vec![UiEvent::Submit];
    }
    vec![UiEvent::Input(line.to_owned()), UiEvent::Submit]
}

#[cfg(test)]
#[path = "input_test.rs"]
mod tests;
