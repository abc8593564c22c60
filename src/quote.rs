//! Renders an argument vector as a single human-readable command line.
//!
//! The output is for diagnostics only. It follows a target platform's
//! native quoting grammar rather than the tokenizer's, so it is never fed
//! back into [`tokenize`](crate::tokenize).

/// Quoting convention for one target platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotePolicy {
    /// Any of these characters forces the argument to be wrapped.
    pub must_quote: &'static [char],
    /// Character placed around a wrapped argument.
    pub quote: char,
    /// Replacement for an embedded `quote` character inside the wrapping.
    pub embedded_quote: &'static str,
    /// Replacements for other characters inside the wrapping.
    pub escapes: &'static [(char, &'static str)],
}

impl QuotePolicy {
    /// Windows `CommandLineToArgvW`-style display: embedded double quotes
    /// are doubled and backslashes pass through untouched.
    pub const WINDOWS: Self = Self {
        must_quote: &[' ', '\t', '"', '\n', '\r', '&', '|', '<', '>', '(', ')', ';'],
        quote: '"',
        embedded_quote: "\"\"",
        escapes: &[('\t', "\\t"), ('\r', "\\r"), ('\n', "\\n")],
    };

    /// POSIX `sh` display: single-quote wrapping, `'` closed and re-opened.
    pub const POSIX: Self = Self {
        must_quote: &[
            ' ', '\t', '\n', '\r', '"', '\'', '\\', '&', '|', '<', '>', '(', ')', ';', '$', '`',
            '*', '?', '[', ']', '#', '~', '{', '}', '!',
        ],
        quote: '\'',
        embedded_quote: "'\\''",
        escapes: &[],
    };

    fn needs_quoting(&self, arg: &str) -> bool {
        arg.contains(self.must_quote)
    }

    fn escape(&self, ch: char) -> Option<&'static str> {
        if ch == self.quote {
            return Some(self.embedded_quote);
        }
        self.escapes
            .iter()
            .find_map(|&(c, replacement)| (c == ch).then_some(replacement))
    }
}

impl Default for QuotePolicy {
    fn default() -> Self {
        Self::WINDOWS
    }
}

/// Quote a single argument for display using the Windows convention.
///
/// ```
/// use jar_launcher::quote_arg;
///
/// assert_eq!(quote_arg("app.jar"), "app.jar");
/// assert_eq!(quote_arg("my app.jar"), r#""my app.jar""#);
/// assert_eq!(quote_arg(r#"say "hi""#), r#""say ""hi""""#);
/// ```
#[must_use]
pub fn quote_arg(arg: &str) -> String {
    quote_arg_with(&QuotePolicy::WINDOWS, arg)
}

/// Quote a single argument for display using `policy`.
#[must_use]
pub fn quote_arg_with(policy: &QuotePolicy, arg: &str) -> String {
    if arg.is_empty() {
        return [policy.quote, policy.quote].iter().collect();
    }
    if !policy.needs_quoting(arg) {
        return arg.to_string();
    }

    let mut out = String::with_capacity(arg.len() + 2);
    out.push(policy.quote);
    for ch in arg.chars() {
        if let Some(replacement) = policy.escape(ch) {
            out.push_str(replacement);
            continue;
        }
        out.push(ch);
    }
    out.push(policy.quote);
    out
}

/// Quote every argument with the Windows convention and join them with
/// single spaces.
#[must_use]
pub fn join_quoted<S: AsRef<str>>(args: &[S]) -> String {
    join_quoted_with(&QuotePolicy::WINDOWS, args)
}

/// Quote every argument with `policy` and join them with single spaces.
#[must_use]
pub fn join_quoted_with<S: AsRef<str>>(policy: &QuotePolicy, args: &[S]) -> String {
    let mut out = String::new();
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&quote_arg_with(policy, arg.as_ref()));
    }
    out
}
