use std::fmt;

/// Errors raised for values that are not Base64 symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolError {
    /// A symbol value outside `0..=64`
    InvalidSymbol { value: u8, position: usize },
    /// A pair code that does not split into two symbol values
    InvalidPair { value: u16, position: usize },
}

impl SymbolError {
    pub fn invalid_symbol(value: u8, position: usize) -> Self {
        SymbolError::InvalidSymbol { value, position }
    }

    pub fn invalid_pair(value: u16, position: usize) -> Self {
        SymbolError::InvalidPair { value, position }
    }

    /// Index into the input at which the bad value was found.
    pub fn position(&self) -> usize {
        match self {
            SymbolError::InvalidSymbol { position, .. } | SymbolError::InvalidPair { position, .. } => {
                *position
            }
        }
    }

    /// The `error:`/`hint:` message, with ANSI styling when `color` is set.
    pub fn render(&self, color: bool) -> String {
        let (headline, hint) = match self {
            SymbolError::InvalidSymbol { value, position } => (
                format!("invalid symbol {} at position {}", value, position),
                "symbol values must be in 0..=64 (64 is the '=' pad)",
            ),
            SymbolError::InvalidPair { value, position } => (
                format!("invalid pair code {} at position {}", value, position),
                "pair codes combine two symbols as low | high << 6",
            ),
        };

        format!("{} {}\n{} {}", label("error:", color), headline, label("hint:", color), hint)
    }
}

impl fmt::Display for SymbolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(should_use_color()))
    }
}

impl std::error::Error for SymbolError {}

/// Default colour choice for `Display`: stderr is a terminal and `NO_COLOR` is unset.
pub fn should_use_color() -> bool {
    use std::io::IsTerminal;
    std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal()
}

fn label(text: &str, color: bool) -> String {
    match (color, text) {
        (false, _) => text.to_string(),
        (true, "error:") => format!("\x1b[1;31m{}\x1b[0m", text),
        (true, _) => format!("\x1b[1;36m{}\x1b[0m", text),
    }
}

/// Error when a character class name is not recognised
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownClassError {
    pub name: String,
    pub suggestion: Option<String>,
}

impl UnknownClassError {
    pub fn new(name: impl Into<String>, suggestion: Option<String>) -> Self {
        Self {
            name: name.into(),
            suggestion,
        }
    }

    /// The `error:`/`hint:` message, with ANSI styling when `color` is set.
    pub fn render(&self, color: bool) -> String {
        let mut out = format!(
            "{} character class '{}' not found\n",
            label("error:", color),
            self.name
        );

        if let Some(suggestion) = &self.suggestion {
            out.push_str(&format!("{} did you mean '{}'?\n", label("hint:", color), suggestion));
        }

        let command = if color {
            "\x1b[1m`vec64 classes`\x1b[0m"
        } else {
            "`vec64 classes`"
        };
        out.push_str(&format!("      run {} to see all classes", command));
        out
    }
}

impl fmt::Display for UnknownClassError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(should_use_color()))
    }
}

impl std::error::Error for UnknownClassError {}

/// Number of single-character edits turning `from` into `to`.
fn edit_distance(from: &str, to: &str) -> usize {
    let to: Vec<char> = to.chars().collect();
    // row[j] is the distance from the prefix of `from` seen so far to to[..j]
    let mut row: Vec<usize> = (0..=to.len()).collect();

    for (i, a) in from.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;

        for (j, &b) in to.iter().enumerate() {
            let replace = diagonal + usize::from(a != b);
            diagonal = row[j + 1];
            row[j + 1] = replace.min(row[j] + 1).min(diagonal + 1);
        }
    }

    row[to.len()]
}

/// Find the closest matching name, if any is within a couple of edits
pub fn find_closest_name(name: &str, available: &[String]) -> Option<String> {
    let threshold = if name.len() < 5 { 2 } else { 3 };

    available
        .iter()
        .map(|candidate| (edit_distance(name, candidate), candidate))
        .filter(|(distance, _)| *distance <= threshold)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, candidate)| candidate.clone())
}
