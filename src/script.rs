//! Host input commands
//!
//! The native host reads one command per line:
//!
//! ```text
//! press <key>
//! release <key>
//! tap <key>        # press then release
//! wait <frames>
//! ```
//!
//! Blank lines and `#` comments are ignored.

use core::fmt;

use crate::sim::{Key, KeyEvent};

/// One parsed input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Event(KeyEvent),
    /// Press immediately followed by release
    Tap(Key),
    /// Hold back the remaining commands for this many frames
    Wait(u32),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScriptError {
    UnknownVerb(String),
    UnknownKey(String),
    MissingArgument { verb: &'static str },
    InvalidFrameCount(String),
    TrailingInput(String),
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownVerb(verb) => write!(f, "unknown command `{verb}`"),
            Self::UnknownKey(key) => write!(f, "unknown key `{key}`"),
            Self::MissingArgument { verb } => write!(f, "`{verb}` needs an argument"),
            Self::InvalidFrameCount(raw) => write!(f, "invalid frame count `{raw}`"),
            Self::TrailingInput(rest) => write!(f, "unexpected trailing input `{rest}`"),
        }
    }
}

impl std::error::Error for ScriptError {}

impl Command {
    /// Parse one line. `Ok(None)` for blank lines and comments.
    pub fn parse(line: &str) -> Result<Option<Self>, ScriptError> {
        let line = line.split('#').next().unwrap_or_default().trim();
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };

        let command = match verb.to_lowercase().as_str() {
            "press" => Command::Event(KeyEvent::Pressed(parse_key(words.next(), "press")?)),
            "release" => Command::Event(KeyEvent::Released(parse_key(words.next(), "release")?)),
            "tap" => Command::Tap(parse_key(words.next(), "tap")?),
            "wait" => {
                let raw = words
                    .next()
                    .ok_or(ScriptError::MissingArgument { verb: "wait" })?;
                let frames = raw
                    .parse()
                    .map_err(|_| ScriptError::InvalidFrameCount(raw.to_string()))?;
                Command::Wait(frames)
            }
            _ => return Err(ScriptError::UnknownVerb(verb.to_string())),
        };

        let rest: Vec<&str> = words.collect();
        if !rest.is_empty() {
            return Err(ScriptError::TrailingInput(rest.join(" ")));
        }
        Ok(Some(command))
    }
}

fn parse_key(word: Option<&str>, verb: &'static str) -> Result<Key, ScriptError> {
    let word = word.ok_or(ScriptError::MissingArgument { verb })?;
    Key::from_name(word).ok_or_else(|| ScriptError::UnknownKey(word.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            Command::parse("press space"),
            Ok(Some(Command::Event(KeyEvent::Pressed(Key::Fire))))
        );
        assert_eq!(
            Command::parse("  RELEASE Left "),
            Ok(Some(Command::Event(KeyEvent::Released(Key::Left))))
        );
        assert_eq!(Command::parse("tap enter"), Ok(Some(Command::Tap(Key::Confirm))));
        assert_eq!(Command::parse("wait 30 # half a second"), Ok(Some(Command::Wait(30))));
        assert_eq!(Command::parse(""), Ok(None));
        assert_eq!(Command::parse("# comment"), Ok(None));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Command::parse("jump"),
            Err(ScriptError::UnknownVerb("jump".to_string()))
        );
        assert_eq!(
            Command::parse("press f13"),
            Err(ScriptError::UnknownKey("f13".to_string()))
        );
        assert_eq!(
            Command::parse("press"),
            Err(ScriptError::MissingArgument { verb: "press" })
        );
        assert_eq!(
            Command::parse("wait soon"),
            Err(ScriptError::InvalidFrameCount("soon".to_string()))
        );
        assert_eq!(
            Command::parse("tap r now"),
            Err(ScriptError::TrailingInput("now".to_string()))
        );
        assert_eq!(
            ScriptError::UnknownKey("f13".to_string()).to_string(),
            "unknown key `f13`"
        );
    }
}
