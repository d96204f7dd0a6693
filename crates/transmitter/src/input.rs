use std::num::ParseIntError;

use shared::protocol::{
    AsciiCommand, Command, DPadCommand, DPadDirection, JoystickCommand, RotaryCommand,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("empty input, nothing to send")]
    Empty,
    #[error("joystick input wants exactly two comma-separated axes, got {0}")]
    AxisCount(usize),
    #[error("bad {axis} {token:?}: {source}")]
    BadAxis {
        axis: &'static str,
        token: String,
        source: ParseIntError,
    },
    #[error("bad rotary value {token:?}: {source}")]
    BadRotary {
        token: String,
        source: ParseIntError,
    },
}

/// Turns one console line into a command, stamped with `id`.
///
/// Grammar, first match wins:
/// - `<x>,<y>` joystick axes
/// - `up` | `right` | `down` | `left` d-pad press
/// - `rot <value>` rotary reading
/// - anything else: ASCII command from the first character of the line
pub fn parse_line(line: &str, id: u8) -> Result<Command, ParseError> {
    let line = line.trim();

    if line.contains(',') {
        return parse_joystick(line, id);
    }

    if let Some(direction) = parse_direction(line) {
        return Ok(Command::DPad(DPadCommand::new(id, direction)));
    }

    let mut words = line.split_whitespace();
    if let (Some(keyword), Some(token)) = (words.next(), words.next())
        && keyword.eq_ignore_ascii_case("rot")
    {
        let value = token.parse().map_err(|source| ParseError::BadRotary {
            token: token.to_owned(),
            source,
        })?;
        return Ok(Command::Rotary(RotaryCommand::new(id, value)));
    }

    match line.chars().next() {
        Some(ch) => Ok(Command::Ascii(AsciiCommand::new(id, ch))),
        None => Err(ParseError::Empty),
    }
}

fn parse_joystick(line: &str, id: u8) -> Result<Command, ParseError> {
    let tokens: Vec<&str> = line.split(',').map(str::trim).collect();
    if tokens.len() != 2 {
        return Err(ParseError::AxisCount(tokens.len()));
    }
    let x = parse_axis("x axis", tokens[0])?;
    let y = parse_axis("y axis", tokens[1])?;
    Ok(Command::Joystick(JoystickCommand::new(id, x, y)))
}

fn parse_axis(axis: &'static str, token: &str) -> Result<u32, ParseError> {
    token.parse().map_err(|source| ParseError::BadAxis {
        axis,
        token: token.to_owned(),
        source,
    })
}

fn parse_direction(line: &str) -> Option<DPadDirection> {
    if line.eq_ignore_ascii_case("up") {
        Some(DPadDirection::Up)
    } else if line.eq_ignore_ascii_case("right") {
        Some(DPadDirection::Right)
    } else if line.eq_ignore_ascii_case("down") {
        Some(DPadDirection::Down)
    } else if line.eq_ignore_ascii_case("left") {
        Some(DPadDirection::Left)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_character_becomes_ascii() {
        let cmd = parse_line("Q", 0).unwrap();
        assert_eq!(cmd, Command::Ascii(AsciiCommand::new(0, 'Q')));
    }

    #[test]
    fn longer_text_is_truncated_to_first_character() {
        let cmd = parse_line("quit now", 3).unwrap();
        assert_eq!(cmd, Command::Ascii(AsciiCommand::new(3, 'q')));
    }

    #[test]
    fn comma_pair_becomes_joystick() {
        let cmd = parse_line("5,120", 0).unwrap();
        assert_eq!(cmd, Command::Joystick(JoystickCommand::new(0, 5, 120)));

        // Whitespace around the axes is tolerated.
        let cmd = parse_line(" 1024 , 512 ", 9).unwrap();
        assert_eq!(cmd, Command::Joystick(JoystickCommand::new(9, 1024, 512)));
    }

    #[test]
    fn direction_words_become_dpad() {
        let cmd = parse_line("up", 1).unwrap();
        assert_eq!(cmd, Command::DPad(DPadCommand::new(1, DPadDirection::Up)));

        let cmd = parse_line("LEFT", 1).unwrap();
        assert_eq!(cmd, Command::DPad(DPadCommand::new(1, DPadDirection::Left)));
    }

    #[test]
    fn rot_keyword_becomes_rotary() {
        let cmd = parse_line("rot 512", 2).unwrap();
        assert_eq!(cmd, Command::Rotary(RotaryCommand::new(2, 512)));
    }

    #[test]
    fn malformed_input_is_recoverable() {
        assert!(matches!(parse_line("", 0), Err(ParseError::Empty)));
        assert!(matches!(parse_line("   ", 0), Err(ParseError::Empty)));
        assert!(matches!(
            parse_line("5,", 0),
            Err(ParseError::BadAxis { axis: "y axis", .. })
        ));
        assert!(matches!(
            parse_line("a,b", 0),
            Err(ParseError::BadAxis { axis: "x axis", .. })
        ));
        assert!(matches!(
            parse_line("1,2,3", 0),
            Err(ParseError::AxisCount(3))
        ));
        assert!(matches!(
            parse_line("rot fast", 0),
            Err(ParseError::BadRotary { .. })
        ));
    }
}
