//! A [`GraphQLTokenSource`](super::GraphQLTokenSource) that lexes from a
//! `&str` input.
//!
//! Token values borrow directly from the source string. Positions track both
//! UTF-8 character columns (for display) and UTF-16 code unit columns (for
//! editor integrations).
//!
//! ```rust
//! use gqlrun_parser::token::GraphQLTokenKind;
//! use gqlrun_parser::token_source::StrGraphQLTokenSource;
//!
//! let kinds: Vec<_> = StrGraphQLTokenSource::new("{ name }")
//!     .map(|token| token.kind)
//!     .collect();
//! assert_eq!(kinds.len(), 4);
//! assert_eq!(kinds[0], GraphQLTokenKind::CurlyBraceOpen);
//! assert_eq!(kinds[3], GraphQLTokenKind::Eof);
//! ```

use crate::smallvec;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::GraphQLErrorNote;
use crate::GraphQLSourceSpan;
use crate::SourcePosition;
use std::path::Path;

pub struct StrGraphQLTokenSource<'src> {
    source: &'src str,

    /// The remaining text to lex is `&source[curr_byte_offset..]`.
    curr_byte_offset: usize,
    curr_line: usize,
    curr_col_utf8: usize,
    curr_col_utf16: usize,

    /// Set after `\r` so that a following `\n` does not count as a second
    /// line break.
    last_char_was_cr: bool,

    /// Whether the EOF token has been emitted.
    finished: bool,

    file_path: Option<&'src Path>,
}

impl<'src> StrGraphQLTokenSource<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            curr_byte_offset: 0,
            curr_line: 0,
            curr_col_utf8: 0,
            curr_col_utf16: 0,
            last_char_was_cr: false,
            finished: false,
            file_path: None,
        }
    }

    /// Creates a token source whose spans carry `path`.
    pub fn with_file_path(source: &'src str, path: &'src Path) -> Self {
        Self {
            file_path: Some(path),
            ..Self::new(source)
        }
    }

    fn remaining(&self) -> &'src str {
        &self.source[self.curr_byte_offset..]
    }

    fn curr_position(&self) -> SourcePosition {
        SourcePosition::new(
            self.curr_line,
            self.curr_col_utf8,
            self.curr_col_utf16,
            self.curr_byte_offset,
        )
    }

    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn peek_char_nth(&self, n: usize) -> Option<char> {
        self.remaining().chars().nth(n)
    }

    /// Consumes the next character and updates position tracking.
    ///
    /// `\n`, `\r`, and `\r\n` each count as one line break.
    fn consume(&mut self) -> Option<char> {
        let ch = self.peek_char()?;

        match ch {
            '\n' if self.last_char_was_cr => {
                self.last_char_was_cr = false;
            },
            '\n' | '\r' => {
                self.curr_line += 1;
                self.curr_col_utf8 = 0;
                self.curr_col_utf16 = 0;
                self.last_char_was_cr = ch == '\r';
            },
            _ => {
                self.curr_col_utf8 += 1;
                self.curr_col_utf16 += ch.len_utf16();
                self.last_char_was_cr = false;
            },
        }

        self.curr_byte_offset += ch.len_utf8();
        Some(ch)
    }

    fn make_span(&self, start: SourcePosition) -> GraphQLSourceSpan {
        let end = self.curr_position();
        match self.file_path {
            Some(path) => GraphQLSourceSpan::with_file(start, end, path.to_path_buf()),
            None => GraphQLSourceSpan::new(start, end),
        }
    }

    fn punctuator(
        &mut self,
        start: SourcePosition,
        kind: GraphQLTokenKind<'src>,
    ) -> GraphQLToken<'src> {
        self.consume();
        GraphQLToken::new(kind, self.make_span(start))
    }

    fn next_token(&mut self) -> GraphQLToken<'src> {
        self.skip_ignored();
        let start = self.curr_position();

        match self.peek_char() {
            None => GraphQLToken::new(GraphQLTokenKind::Eof, self.make_span(start)),
            Some('!') => self.punctuator(start, GraphQLTokenKind::Bang),
            Some('$') => self.punctuator(start, GraphQLTokenKind::Dollar),
            Some('&') => self.punctuator(start, GraphQLTokenKind::Ampersand),
            Some('(') => self.punctuator(start, GraphQLTokenKind::ParenOpen),
            Some(')') => self.punctuator(start, GraphQLTokenKind::ParenClose),
            Some(':') => self.punctuator(start, GraphQLTokenKind::Colon),
            Some('=') => self.punctuator(start, GraphQLTokenKind::Equals),
            Some('@') => self.punctuator(start, GraphQLTokenKind::At),
            Some('[') => self.punctuator(start, GraphQLTokenKind::SquareBracketOpen),
            Some(']') => self.punctuator(start, GraphQLTokenKind::SquareBracketClose),
            Some('{') => self.punctuator(start, GraphQLTokenKind::CurlyBraceOpen),
            Some('}') => self.punctuator(start, GraphQLTokenKind::CurlyBraceClose),
            Some('|') => self.punctuator(start, GraphQLTokenKind::Pipe),
            Some('.') => self.lex_ellipsis(start),
            Some('"') => self.lex_string(start),
            Some(c) if is_name_start(c) => self.lex_name(start),
            Some(c) if c == '-' || c.is_ascii_digit() => self.lex_number(start),
            Some(_) => self.lex_invalid_character(start),
        }
    }

    /// Skips whitespace, line terminators, commas, the BOM, and `#` comments.
    fn skip_ignored(&mut self) {
        while let Some(ch) = self.peek_char() {
            match ch {
                ' ' | '\t' | '\n' | '\r' | ',' | '\u{FEFF}' => {
                    self.consume();
                },
                '#' => {
                    while let Some(ch) = self.peek_char() {
                        if ch == '\n' || ch == '\r' {
                            break;
                        }
                        self.consume();
                    }
                },
                _ => break,
            }
        }
    }

    /// `...` must be written without interior whitespace.
    fn lex_ellipsis(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let mut dots = 0;
        while dots < 3 && self.peek_char() == Some('.') {
            self.consume();
            dots += 1;
        }
        let span = self.make_span(start);
        if dots == 3 {
            return GraphQLToken::new(GraphQLTokenKind::Ellipsis, span);
        }

        let kind = if dots == 2 {
            GraphQLTokenKind::error(
                "Unexpected `..` (use `...` for spread operator)",
                smallvec![GraphQLErrorNote::help(
                    "Add one more `.` to form the spread operator `...`"
                )],
            )
        } else {
            GraphQLTokenKind::error("Unexpected `.`", smallvec![])
        };
        GraphQLToken::new(kind, span)
    }

    /// Names match `/[_A-Za-z][_0-9A-Za-z]*/`. `true`, `false`, and `null` are
    /// emitted as distinct token kinds.
    fn lex_name(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let name_start = self.curr_byte_offset;
        self.consume();
        while self.peek_char().is_some_and(is_name_continue) {
            self.consume();
        }

        let name = &self.source[name_start..self.curr_byte_offset];
        let kind = match name {
            "true" => GraphQLTokenKind::True,
            "false" => GraphQLTokenKind::False,
            "null" => GraphQLTokenKind::Null,
            _ => GraphQLTokenKind::name_borrowed(name),
        };
        GraphQLToken::new(kind, self.make_span(start))
    }

    fn consume_digits(&mut self) -> usize {
        let mut count = 0;
        while self.peek_char().is_some_and(|ch| ch.is_ascii_digit()) {
            self.consume();
            count += 1;
        }
        count
    }

    /// Lexes an integer or float literal:
    /// `-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?`
    fn lex_number(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let num_start = self.curr_byte_offset;
        let mut is_float = false;

        if self.peek_char() == Some('-') {
            self.consume();
        }

        match self.peek_char() {
            Some('0') => {
                self.consume();
                if self.peek_char().is_some_and(|ch| ch.is_ascii_digit()) {
                    return self.lex_number_error(
                        start,
                        num_start,
                        "Invalid number: leading zeros are not allowed",
                    );
                }
            },
            Some(ch) if ch.is_ascii_digit() => {
                self.consume_digits();
            },
            _ => {
                return GraphQLToken::new(
                    GraphQLTokenKind::error("Unexpected `-`", smallvec![]),
                    self.make_span(start),
                );
            },
        }

        if self.peek_char() == Some('.')
            && self.peek_char_nth(1).is_some_and(|ch| ch.is_ascii_digit())
        {
            is_float = true;
            self.consume();
            self.consume_digits();
        }

        if let Some('e' | 'E') = self.peek_char() {
            is_float = true;
            self.consume();
            if let Some('+' | '-') = self.peek_char() {
                self.consume();
            }
            if self.consume_digits() == 0 {
                return self.lex_number_error(
                    start,
                    num_start,
                    "Invalid number: exponent must have at least one digit",
                );
            }
        }

        // A number may not be immediately followed by a name character or
        // a dot (e.g. `123abc`, `1.`).
        if self
            .peek_char()
            .is_some_and(|ch| ch == '.' || is_name_start(ch))
        {
            return self.lex_number_error(
                start,
                num_start,
                "Invalid number: unexpected character after numeric literal",
            );
        }

        let num_text = &self.source[num_start..self.curr_byte_offset];
        let kind = if is_float {
            GraphQLTokenKind::float_value_borrowed(num_text)
        } else {
            GraphQLTokenKind::int_value_borrowed(num_text)
        };
        GraphQLToken::new(kind, self.make_span(start))
    }

    fn lex_number_error(
        &mut self,
        start: SourcePosition,
        num_start: usize,
        message: &str,
    ) -> GraphQLToken<'src> {
        while self
            .peek_char()
            .is_some_and(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '.' | '+' | '-' | '_'))
        {
            self.consume();
        }
        let invalid_text = &self.source[num_start..self.curr_byte_offset];
        GraphQLToken::new(
            GraphQLTokenKind::error(
                format!("{message}: `{invalid_text}`"),
                smallvec![GraphQLErrorNote::spec(
                    "https://spec.graphql.org/October2021/#sec-Int-Value"
                )],
            ),
            self.make_span(start),
        )
    }

    fn lex_string(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let str_start = self.curr_byte_offset;
        if self.remaining().starts_with("\"\"\"") {
            return self.lex_block_string(start, str_start);
        }

        self.consume();
        loop {
            match self.peek_char() {
                None => {
                    return GraphQLToken::new(
                        GraphQLTokenKind::error(
                            "Unterminated string literal",
                            smallvec![GraphQLErrorNote::help("Add closing `\"`")],
                        ),
                        self.make_span(start),
                    );
                },
                Some('\n') | Some('\r') => {
                    return GraphQLToken::new(
                        GraphQLTokenKind::error(
                            "Unterminated string literal",
                            smallvec![
                                GraphQLErrorNote::general(
                                    "Single-line strings cannot contain unescaped newlines"
                                ),
                                GraphQLErrorNote::help(
                                    "Use a block string (triple quotes) for multi-line strings"
                                ),
                            ],
                        ),
                        self.make_span(start),
                    );
                },
                Some('"') => {
                    self.consume();
                    break;
                },
                Some('\\') => {
                    self.consume();
                    if self.peek_char().is_some_and(|ch| ch != '\n' && ch != '\r') {
                        self.consume();
                    }
                },
                Some(_) => {
                    self.consume();
                },
            }
        }

        let text = &self.source[str_start..self.curr_byte_offset];
        GraphQLToken::new(
            GraphQLTokenKind::string_value_borrowed(text),
            self.make_span(start),
        )
    }

    fn lex_block_string(
        &mut self,
        start: SourcePosition,
        str_start: usize,
    ) -> GraphQLToken<'src> {
        for _ in 0..3 {
            self.consume();
        }

        loop {
            let rest = self.remaining();
            if rest.is_empty() {
                return GraphQLToken::new(
                    GraphQLTokenKind::error(
                        "Unterminated block string",
                        smallvec![GraphQLErrorNote::help("Add closing `\"\"\"`")],
                    ),
                    self.make_span(start),
                );
            }
            if rest.starts_with("\\\"\"\"") {
                for _ in 0..4 {
                    self.consume();
                }
            } else if rest.starts_with("\"\"\"") {
                for _ in 0..3 {
                    self.consume();
                }
                break;
            } else {
                self.consume();
            }
        }

        let text = &self.source[str_start..self.curr_byte_offset];
        GraphQLToken::new(
            GraphQLTokenKind::string_value_borrowed(text),
            self.make_span(start),
        )
    }

    fn lex_invalid_character(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let description = match self.consume() {
            Some(ch) => describe_char(ch),
            None => "end of input".to_string(),
        };
        GraphQLToken::new(
            GraphQLTokenKind::error(
                format!("Unexpected character {description}"),
                smallvec![],
            ),
            self.make_span(start),
        )
    }
}

impl<'src> Iterator for StrGraphQLTokenSource<'src> {
    type Item = GraphQLToken<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if matches!(token.kind, GraphQLTokenKind::Eof) {
            self.finished = true;
        }
        Some(token)
    }
}

fn is_name_start(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

fn is_name_continue(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphanumeric()
}

/// Printable characters are shown in backticks; invisible ones also get
/// their code point.
fn describe_char(ch: char) -> String {
    if ch.is_control() || (ch.is_whitespace() && ch != ' ') {
        format!("`{}` (U+{:04X})", ch.escape_debug(), ch as u32)
    } else {
        format!("`{ch}`")
    }
}
