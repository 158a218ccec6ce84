/// One line of user input, parsed.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Connect,
    Disconnect,
    From(String),
    To(String),
    Amount(String),
    ToAmount(String),
    Flip,
    Refresh,
    Status,
    Swap,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Option<Command> {
        let mut parts = line.split_whitespace();
        let verb = parts.next()?.to_ascii_lowercase();
        let arg = parts.next().map(|s| s.to_string());
        if parts.next().is_some() {
            return None;
        }
        match (verb.as_str(), arg) {
            ("connect", None) => Some(Command::Connect),
            ("disconnect", None) => Some(Command::Disconnect),
            ("from", Some(symbol)) => Some(Command::From(symbol)),
            ("to", Some(symbol)) => Some(Command::To(symbol)),
            ("amount", Some(value)) => Some(Command::Amount(value)),
            ("toamount", Some(value)) => Some(Command::ToAmount(value)),
            ("flip", None) => Some(Command::Flip),
            ("refresh", None) => Some(Command::Refresh),
            ("status", None) => Some(Command::Status),
            ("swap", None) => Some(Command::Swap),
            ("help", None) => Some(Command::Help),
            ("quit", None) | ("exit", None) => Some(Command::Quit),
            _ => None,
        }
    }
}
