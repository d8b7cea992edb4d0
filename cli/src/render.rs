//! Line-oriented renderer for a terminal.
//!
//! Typing and presence lines are printed only when the visible state
//! changes, so repeated `user_status` events leave the output untouched.

use std::collections::{BTreeMap, HashMap};
use std::io::Write;

use pychat::events::{ChatMessage, TypingUser, UserStatus};
use pychat::renderer::Renderer;

pub struct TerminalRenderer<W> {
    out: W,
    typing: BTreeMap<i64, String>,
    presence: HashMap<i64, bool>,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, typing: BTreeMap::new(), presence: HashMap::new() }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: &str) {
        if let Err(error) = writeln!(self.out, "{text}").and_then(|()| self.out.flush()) {
            tracing::warn!(%error, "terminal write failed");
        }
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn append_message(&mut self, message: &ChatMessage) {
        let mut text = String::new();
        if let Some(time) = message.timestamp.as_deref().and_then(clock_time) {
            text.push_str(&format!("[{time}] "));
        }
        text.push_str(&format!("{}: {}", message.sender_name, message.content));
        if let Some(url) = &message.media_url {
            text.push_str(&format!(" ({}: {url})", message.media_type));
        }
        self.line(&text);
    }

    fn show_typing(&mut self, user: &TypingUser) {
        let name = display_name(user);
        if self.typing.insert(user.user_id, name.clone()).is_none() {
            self.line(&format!("* {name} is typing..."));
        }
    }

    fn hide_typing(&mut self, user: &TypingUser) {
        if let Some(name) = self.typing.remove(&user.user_id) {
            self.line(&format!("* {name} stopped typing"));
        }
    }

    fn update_status(&mut self, status: &UserStatus) {
        if self.presence.insert(status.user_id, status.online) == Some(status.online) {
            return;
        }
        let state = if status.online { "online" } else { "offline" };
        self.line(&format!("* user {} is {state}", status.user_id));
    }
}

fn display_name(user: &TypingUser) -> String {
    user.username
        .clone()
        .unwrap_or_else(|| format!("user {}", user.user_id))
}

/// `HH:MM` out of an ISO-8601 timestamp such as `2024-05-01T13:07:22.5`.
fn clock_time(timestamp: &str) -> Option<&str> {
    let (_, time) = timestamp.split_once('T')?;
    time.get(..5)
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
