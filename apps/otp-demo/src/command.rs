use anyhow::{anyhow, bail, Result};

/// One line of input to the demo.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Characters typed into the focused slot, one keystroke each.
    Type(String),
    Backspace,
    Next,
    Tap(usize),
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let mut parts = line.split_whitespace();
        let head = parts.next().unwrap_or_default();
        let command = match head {
            "bs" | "backspace" => Command::Backspace,
            "next" => Command::Next,
            "quit" | "exit" => Command::Quit,
            "tap" => {
                let index = parts
                    .next()
                    .ok_or_else(|| anyhow!("tap needs a slot index"))?
                    .parse()?;
                Command::Tap(index)
            }
            _ if head.chars().all(|c| !c.is_ascii_alphabetic()) => Command::Type(line.to_owned()),
            other => bail!("unknown command: {other}"),
        };
        Ok(Some(command))
    }
}
