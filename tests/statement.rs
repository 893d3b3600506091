use tmtheme::error::WordsError;
use tmtheme::statement::{CommentStatement, SetOptionFlags, SetOptionStatement};
use tmtheme::{ParseError, Statement};

fn set_option(flags: SetOptionFlags, option: &str, value: Option<&str>) -> Statement {
    Statement::SetOption(SetOptionStatement {
        flags,
        option: option.to_string(),
        value: value.map(|v| v.to_string()),
    })
}

#[test]
fn blank_lines_parse_as_blank() {
    for line in ["", "  ", "\t", "   \t  "] {
        assert_eq!(Statement::parse(line).unwrap(), Statement::Blank, "line {line:?}");
    }
}

#[test]
fn comment_lines_parse_with_trimmed_message() {
    let cases = [
        ("# This is a comment", "This is a comment"),
        ("#  This is a comment", "This is a comment"),
        ("#  This is a comment ", "This is a comment"),
        ("#This is a comment", "This is a comment"),
        ("#This is a comment  ", "This is a comment"),
        ("  # This is a comment", "This is a comment"),
        ("  #This is a comment  ", "This is a comment"),
        ("# it's a comment", "it's a comment"),
        ("#", ""),
        ("   #", ""),
        ("#    ", ""),
    ];

    for (line, message) in cases {
        assert_eq!(
            Statement::parse(line).unwrap(),
            Statement::Comment(CommentStatement {
                message: message.to_string()
            }),
            "line {line:?}"
        );
    }
}

#[test]
fn set_commands_parse_as_option_assignments() {
    let plain = SetOptionFlags::default();
    let windowed = SetOptionFlags {
        window: true,
        ..SetOptionFlags::default()
    };

    let cases = [
        ("set foo bar", set_option(plain.clone(), "foo", Some("bar"))),
        ("set-option foo bar", set_option(plain.clone(), "foo", Some("bar"))),
        ("  set-window-option foo bar", set_option(windowed.clone(), "foo", Some("bar"))),
        ("set -w foo bar", set_option(windowed.clone(), "foo", Some("bar"))),
    ];

    for (line, expected) in cases {
        assert_eq!(Statement::parse(line).unwrap(), expected, "line {line:?}");
    }
}

#[test]
fn set_window_option_matches_explicit_w_flag() {
    assert_eq!(
        Statement::parse("set-window-option myopt foo").unwrap(),
        Statement::parse("set -w myopt foo").unwrap()
    );
}

#[test]
fn unrecognized_lines_are_unsupported_statements() {
    let cases = [
        "has-session -t other:3",
        "  has-session -t x",
        "new-session",
        "setx foo bar",
    ];

    for line in cases {
        assert_eq!(
            Statement::parse(line),
            Err(ParseError::UnsupportedStatement(line.to_string())),
            "line {line:?}"
        );
    }
}

#[test]
fn unsupported_statement_preserves_the_untrimmed_line() {
    let line = "  has-session -t other:3  ";
    assert_eq!(
        Statement::parse(line),
        Err(ParseError::UnsupportedStatement(line.to_string()))
    );
}

#[test]
fn missing_option_argument_is_terminal() {
    assert_eq!(Statement::parse("set -gu"), Err(ParseError::NoOptionArgument));
    assert_eq!(Statement::parse("set"), Err(ParseError::NoOptionArgument));
    assert_eq!(Statement::parse("set-option -g"), Err(ParseError::NoOptionArgument));
}

#[test]
fn flag_errors_are_terminal() {
    assert_eq!(Statement::parse("set -gx foo"), Err(ParseError::UnknownFlag('x')));
    assert_eq!(Statement::parse("set -t"), Err(ParseError::MissingFlagArgument('t')));
}

#[test]
fn broken_quoting_on_a_set_line_is_terminal() {
    assert_eq!(
        Statement::parse("set foo 'bar"),
        Err(ParseError::Words(WordsError::UnterminatedSingleQuote))
    );
    assert_eq!(
        Statement::parse(r#"set foo "bar"#),
        Err(ParseError::Words(WordsError::UnterminatedDoubleQuote))
    );
}

#[test]
fn broken_quoting_on_an_unknown_command_surfaces_the_tokenizer_error() {
    // Blank and comment both reject; the option-assignment grammar is the
    // one that tokenizes and reports what is actually wrong.
    assert_eq!(
        Statement::parse("'wat"),
        Err(ParseError::Words(WordsError::UnterminatedSingleQuote))
    );
}

#[test]
fn error_messages_match_the_documented_wording() {
    assert_eq!(
        Statement::parse("set -gu").unwrap_err().to_string(),
        "No option argument given"
    );
    assert_eq!(
        Statement::parse("has-session").unwrap_err().to_string(),
        "Unsupported statement: has-session"
    );
}
