//! Shell-like tokenizer for argument strings read from the configuration.
//!
//! The grammar is deliberately small: single quotes, double quotes, and a
//! handful of backslash escapes inside quotes. Nothing is ever rejected;
//! malformed input such as an unterminated quote degrades to the closest
//! reasonable reading.

/// Quoting state of the scan cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Outside any quotes (initial state).
    Unquoted,
    /// Inside `'...'`.
    SingleQuoted,
    /// Inside `"..."`.
    DoubleQuoted,
}

/// Effect of feeding one character to the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emit {
    /// Append the character to the pending token.
    Push(char),
    /// Append the escaped character; the lookahead is consumed.
    PushEscaped(char),
    /// Whitespace between tokens.
    Delimit,
    /// An opening quote. The pending token now exists even if empty.
    Open,
    /// A closing quote. The pending token is emitted even if empty.
    Close,
}

/// Compute the transition for `ch` in `mode`, given the next character.
///
/// Returns the mode after the character and what the scan loop should do
/// with the pending token.
#[must_use]
pub const fn step(mode: Mode, ch: char, lookahead: Option<char>) -> (Mode, Emit) {
    match mode {
        Mode::Unquoted => match ch {
            ' ' | '\t' | '\r' | '\n' => (Mode::Unquoted, Emit::Delimit),
            '\'' => (Mode::SingleQuoted, Emit::Open),
            '"' => (Mode::DoubleQuoted, Emit::Open),
            // backslash outside quotes is literal
            _ => (Mode::Unquoted, Emit::Push(ch)),
        },
        Mode::SingleQuoted => match (ch, lookahead) {
            ('\'', _) => (Mode::Unquoted, Emit::Close),
            ('\\', Some('\'')) => (Mode::SingleQuoted, Emit::PushEscaped('\'')),
            _ => (Mode::SingleQuoted, Emit::Push(ch)),
        },
        Mode::DoubleQuoted => match (ch, lookahead) {
            ('"', _) => (Mode::Unquoted, Emit::Close),
            ('\\', Some(next @ ('"' | '\\'))) => (Mode::DoubleQuoted, Emit::PushEscaped(next)),
            _ => (Mode::DoubleQuoted, Emit::Push(ch)),
        },
    }
}

/// Split an argument string into tokens.
///
/// Whitespace-only input produces no tokens, while an explicitly quoted
/// empty string (`""` or `''`) produces one empty token. An unterminated
/// quote is treated as if it were closed at the end of input.
///
/// ```
/// use jar_launcher::tokenize;
///
/// let tokens = tokenize(r#"-Xmx512m "-Dpath=C:\Program Files" ''"#);
/// assert_eq!(tokens, ["-Xmx512m", r"-Dpath=C:\Program Files", ""]);
/// ```
#[must_use]
pub fn tokenize(input: &str) -> Vec<String> {
    Tokenizer::default().run(input)
}

#[derive(Default)]
struct Tokenizer {
    tokens: Vec<String>,
    pending: String,
    quoted: bool,
}

impl Tokenizer {
    fn run(mut self, input: &str) -> Vec<String> {
        let mut mode = Mode::Unquoted;
        let mut chars = input.chars().peekable();

        while let Some(ch) = chars.next() {
            let (next_mode, emit) = step(mode, ch, chars.peek().copied());
            mode = next_mode;

            match emit {
                Emit::Push(c) => self.pending.push(c),
                Emit::PushEscaped(c) => {
                    chars.next();
                    self.pending.push(c);
                }
                Emit::Delimit => {
                    if !self.pending.is_empty() || self.quoted {
                        self.flush();
                    }
                }
                Emit::Open => self.quoted = true,
                Emit::Close => self.flush(),
            }
        }

        if !self.pending.is_empty() || self.quoted {
            self.flush();
        }

        self.tokens
    }

    fn flush(&mut self) {
        self.tokens.push(std::mem::take(&mut self.pending));
        self.quoted = false;
    }
}
