//! Tokenizer behaviour on realistic configuration strings and edge cases.

mod common;

use common::assert_tokens;
use jar_launcher::tokenize;

// -----------------------------------------------------------
// Basic splitting.
// -----------------------------------------------------------

#[test]
fn empty_input() {
    assert!(tokenize("").is_empty());
}

#[test]
fn only_whitespace() {
    assert!(tokenize("   \t  \n  ").is_empty());
    assert!(tokenize("\r\n").is_empty());
}

#[test]
fn simple_tokens() {
    assert_tokens("arg1 arg2 arg3", &["arg1", "arg2", "arg3"]);
}

#[test]
fn multiple_spaces() {
    assert_tokens("arg1    arg2     arg3", &["arg1", "arg2", "arg3"]);
}

#[test]
fn tabs_and_spaces() {
    assert_tokens("arg1\t\targ2  \t arg3", &["arg1", "arg2", "arg3"]);
}

#[test]
fn leading_and_trailing_spaces() {
    assert_tokens("  arg1  arg2  ", &["arg1", "arg2"]);
}

#[test]
fn newlines_delimit() {
    assert_tokens("a\nb\r\nc", &["a", "b", "c"]);
}

// -----------------------------------------------------------
// Quoting.
// -----------------------------------------------------------

#[test]
fn double_quoted_string() {
    assert_tokens(
        r#"arg1 "arg with spaces" arg3"#,
        &["arg1", "arg with spaces", "arg3"],
    );
}

#[test]
fn single_quoted_string() {
    assert_tokens(
        "arg1 'arg with spaces' arg3",
        &["arg1", "arg with spaces", "arg3"],
    );
}

#[test]
fn mixed_quotes() {
    assert_tokens(
        r#"arg1 "double quoted" 'single quoted' normal"#,
        &["arg1", "double quoted", "single quoted", "normal"],
    );
}

#[test]
fn quoted_empty_strings() {
    assert_tokens(r#""""#, &[""]);
    assert_tokens("''", &[""]);
    assert_tokens(r#"arg1 "" '' arg4"#, &["arg1", "", "", "arg4"]);
}

#[test]
fn quoted_empty_differs_from_empty_input() {
    assert_eq!(tokenize(r#""""#).len(), 1);
    assert_eq!(tokenize("").len(), 0);
}

#[test]
fn nested_different_quotes() {
    assert_tokens(r#""outer 'inner' quote""#, &["outer 'inner' quote"]);
    assert_tokens(r#"'outer "inner" quote'"#, &[r#"outer "inner" quote"#]);
}

#[test]
fn prefix_before_quote_joins_token() {
    assert_tokens(r#"-Dname="My App""#, &["-Dname=My App"]);
}

// -----------------------------------------------------------
// Escapes.
// -----------------------------------------------------------

#[test]
fn escaped_quotes_in_double_quotes() {
    assert_tokens(
        r#""escaped \"quote\" inside""#,
        &[r#"escaped "quote" inside"#],
    );
}

#[test]
fn escaped_quotes_in_single_quotes() {
    assert_tokens(r"'escaped \'quote\' inside'", &["escaped 'quote' inside"]);
}

#[test]
fn backslash_before_quote() {
    assert_tokens(r#""path\\with\"quote""#, &[r#"path\with"quote"#]);
}

#[test]
fn quoted_windows_path_keeps_backslashes() {
    assert_tokens(
        r#""-Djava.library.path=C:\Program Files\Java\libs""#,
        &[r"-Djava.library.path=C:\Program Files\Java\libs"],
    );
}

#[test]
fn unquoted_backslash_is_literal() {
    assert_tokens(r"C:\temp\x \n", &[r"C:\temp\x", r"\n"]);
    assert_tokens(r#"a\"b"#, &[r"a\b"]);
}

#[test]
fn lone_backslash_in_single_quotes() {
    assert_tokens(r"'a\b\'", &[r"a\b'"]);
}

#[test]
fn trailing_backslash_in_double_quotes() {
    assert_tokens(r#""abc\"#, &[r"abc\"]);
}

// -----------------------------------------------------------
// Malformed input is tolerated.
// -----------------------------------------------------------

#[test]
fn unterminated_double_quote() {
    assert_tokens(r#"arg1 "unterminated quote"#, &["arg1", "unterminated quote"]);
}

#[test]
fn unterminated_single_quote() {
    assert_tokens("arg1 'unterminated quote", &["arg1", "unterminated quote"]);
}

#[test]
fn unterminated_empty_quote() {
    assert_tokens(r#"arg1 ""#, &["arg1", ""]);
}

#[test]
fn complex_jvm_args() {
    assert_tokens(
        r#"-Xmx512m "-Djava.library.path=./libs with spaces" -Dfile.encoding=UTF-8"#,
        &[
            "-Xmx512m",
            "-Djava.library.path=./libs with spaces",
            "-Dfile.encoding=UTF-8",
        ],
    );
}
