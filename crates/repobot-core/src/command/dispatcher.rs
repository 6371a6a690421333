//! Command classification by leading token.
//!
//! Dispatch is a single flat step: the first matching token wins and
//! anything else is dropped. No state is carried between events.

use repobot_types::chat::ChatEvent;

use super::{SEARCH_COMMAND, TREND_COMMAND};

/// Which handler an event was routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Search,
    Trend,
}

impl std::fmt::Display for CommandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandKind::Search => write!(f, "search"),
            CommandKind::Trend => write!(f, "trend"),
        }
    }
}

/// A routed command with the text its handler consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// The full message text; the extractor validates the token itself.
    Search(String),
    /// The free-text topic after `/trend`, trimmed. May be empty.
    Trend(String),
}

impl Command {
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::Search(_) => CommandKind::Search,
            Command::Trend(_) => CommandKind::Trend,
        }
    }
}

/// Route an event by its command prefix.
///
/// The prefix is matched on the text as received, so leading whitespace
/// means "not a command". Returns `None` for anything that is not a known
/// command.
pub fn dispatch(event: &ChatEvent) -> Option<Command> {
    let text = event.raw_text();

    if text.starts_with(SEARCH_COMMAND) {
        Some(Command::Search(text.to_string()))
    } else if let Some(rest) = text.strip_prefix(TREND_COMMAND) {
        Some(Command::Trend(rest.trim().to_string()))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_prefix_routes_to_search() {
        let event = ChatEvent::new(1, "/search dblab lang:go");
        assert_eq!(
            dispatch(&event),
            Some(Command::Search("/search dblab lang:go".to_string()))
        );
    }

    #[test]
    fn trend_prefix_routes_to_trend_with_trimmed_topic() {
        let event = ChatEvent::new(1, "/trend   golang  ");
        assert_eq!(dispatch(&event), Some(Command::Trend("golang".to_string())));
    }

    #[test]
    fn bare_trend_has_empty_topic() {
        let event = ChatEvent::new(1, "/trend");
        let command = dispatch(&event).unwrap();
        assert_eq!(command, Command::Trend(String::new()));
        assert_eq!(command.kind(), CommandKind::Trend);
    }

    #[test]
    fn unknown_command_is_dropped() {
        assert_eq!(dispatch(&ChatEvent::new(1, "/unknown foo")), None);
        assert_eq!(dispatch(&ChatEvent::new(1, "hello there")), None);
        assert_eq!(dispatch(&ChatEvent::new(1, "")), None);
    }

    #[test]
    fn prefix_must_be_at_start() {
        assert_eq!(dispatch(&ChatEvent::new(1, "please /search dblab")), None);
    }

    #[test]
    fn leading_whitespace_is_not_a_command() {
        assert_eq!(dispatch(&ChatEvent::new(1, " /search dblab")), None);
        assert_eq!(dispatch(&ChatEvent::new(1, "\n/trend")), None);
    }
}
