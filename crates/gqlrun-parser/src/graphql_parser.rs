//! Recursive descent parser for GraphQL executable documents.
//!
//! [`GraphQLParser`] works with any token source implementing
//! [`GraphQLTokenSource`]. Each grammar rule has a `parse_*` method returning
//! `Result<AstNode, GraphQLParseError>`; the first error aborts the parse, so
//! callers never observe a partially built document.
//!
//! The parser holds exactly one token of lookahead (`current`). Lexer error
//! tokens are turned into parse errors at the moment they would become the
//! current token, so a grammar error earlier in the document is always
//! reported first.

use crate::ast;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token_source::GraphQLTokenSource;
use crate::token_source::StrGraphQLTokenSource;
use crate::GraphQLParseError;
use crate::GraphQLParseErrorKind;
use crate::GraphQLSourceSpan;
use crate::GraphQLTokenStream;
use crate::SourcePosition;
use crate::ValueParsingError;
use smallvec::SmallVec;
use std::borrow::Cow;
use std::path::Path;

type Result<T> = std::result::Result<T, GraphQLParseError>;

/// Context in which a delimiter was opened, for unclosed-delimiter errors.
#[derive(Debug, Clone, Copy)]
enum DelimiterContext {
    SelectionSet,
    FieldArguments,
    DirectiveArguments,
    VariableDefinitions,
    ListType,
    ListValue,
    ObjectValue,
}

impl DelimiterContext {
    fn description(&self) -> &'static str {
        match self {
            DelimiterContext::SelectionSet => "selection set",
            DelimiterContext::FieldArguments => "field arguments",
            DelimiterContext::DirectiveArguments => "directive arguments",
            DelimiterContext::VariableDefinitions => "variable definitions",
            DelimiterContext::ListType => "list type annotation",
            DelimiterContext::ListValue => "list value",
            DelimiterContext::ObjectValue => "object value",
        }
    }

    fn opener(&self) -> &'static str {
        match self {
            DelimiterContext::SelectionSet | DelimiterContext::ObjectValue => "{",
            DelimiterContext::FieldArguments
            | DelimiterContext::DirectiveArguments
            | DelimiterContext::VariableDefinitions => "(",
            DelimiterContext::ListType | DelimiterContext::ListValue => "[",
        }
    }
}

#[derive(Debug, Clone)]
struct OpenDelimiter {
    span: GraphQLSourceSpan,
    context: DelimiterContext,
}

/// Whether `$variable` references are allowed in the value being parsed.
#[derive(Clone, Copy, Debug, PartialEq)]
enum ConstContext {
    AllowVariables,
    VariableDefaultValue,
    VariableDirective,
}

impl ConstContext {
    fn description(&self) -> &'static str {
        match self {
            ConstContext::AllowVariables => "this position",
            ConstContext::VariableDefaultValue => "variable default values",
            ConstContext::VariableDirective => "variable definition directives",
        }
    }
}

/// Keywords that begin type-system definitions, which have no place in a
/// request document.
const TYPE_SYSTEM_KEYWORDS: &[&str] = &[
    "directive",
    "enum",
    "extend",
    "input",
    "interface",
    "scalar",
    "schema",
    "type",
    "union",
];

/// A recursive descent parser for GraphQL executable documents.
///
/// ```
/// use gqlrun_parser::ast;
/// use gqlrun_parser::GraphQLParser;
///
/// let doc = GraphQLParser::new("query { hero { name } }")
///     .parse_executable_document()
///     .unwrap();
/// assert!(matches!(doc.definitions[0], ast::Definition::Operation(_)));
/// ```
pub struct GraphQLParser<'src, TTokenSource: GraphQLTokenSource<'src>> {
    token_stream: GraphQLTokenStream<'src, TTokenSource>,

    /// The single token of lookahead. Never a lexer error token.
    current: GraphQLToken<'src>,

    /// A lexer error hit while loading the first token.
    initial_error: Option<GraphQLParseError>,

    /// End position of the most recently consumed token. Used to close node
    /// spans and to anchor end-of-input errors.
    prev_end: SourcePosition,

    delimiter_stack: SmallVec<[OpenDelimiter; 8]>,

    /// Shared nesting counter for selection sets, list/object values, and
    /// list types.
    recursion_depth: usize,
}

impl<'src> GraphQLParser<'src, StrGraphQLTokenSource<'src>> {
    /// Creates a new parser from a string-like source.
    pub fn new<S: AsRef<str> + ?Sized>(source: &'src S) -> Self {
        Self::from_token_source(StrGraphQLTokenSource::new(source.as_ref()))
    }

    /// Creates a parser whose error spans carry `path`.
    pub fn with_file_path<S: AsRef<str> + ?Sized>(
        source: &'src S,
        path: &'src Path,
    ) -> Self {
        Self::from_token_source(StrGraphQLTokenSource::with_file_path(
            source.as_ref(),
            path,
        ))
    }
}

impl<'src, TTokenSource: GraphQLTokenSource<'src>> GraphQLParser<'src, TTokenSource> {
    /// Maximum nesting depth for recursive constructs. Far beyond any
    /// realistic request while keeping adversarial `[[[[...` inputs from
    /// overflowing the stack.
    const MAX_RECURSION_DEPTH: usize = 64;

    pub fn from_token_source(token_source: TTokenSource) -> Self {
        let mut token_stream = GraphQLTokenStream::new(token_source);
        let first = Self::pull_token(&mut token_stream, &SourcePosition::zero());
        let (current, initial_error) = if first.kind.is_error() {
            let eof = GraphQLToken::new(
                GraphQLTokenKind::Eof,
                GraphQLSourceSpan::point(first.span.end_exclusive.clone()),
            );
            (eof, Some(Self::lexer_error(first)))
        } else {
            (first, None)
        };

        Self {
            token_stream,
            current,
            initial_error,
            prev_end: SourcePosition::zero(),
            delimiter_stack: SmallVec::new(),
            recursion_depth: 0,
        }
    }

    /// Parses an executable document (operations and fragments).
    ///
    /// Returns the first error encountered; no partial document is produced.
    pub fn parse_executable_document(mut self) -> Result<ast::Document<'src>> {
        if let Some(err) = self.initial_error.take() {
            return Err(err);
        }

        let start = self.current.span.clone();
        let mut definitions = vec![];
        while !self.at(&GraphQLTokenKind::Eof) {
            definitions.push(self.parse_definition()?);
        }

        if definitions.is_empty() {
            return Err(GraphQLParseError::new(
                "a GraphQL document must contain at least one operation or fragment",
                start,
                GraphQLParseErrorKind::InvalidEmptyConstruct {
                    construct: "document".to_string(),
                },
            ));
        }

        Ok(ast::Document {
            definitions,
            span: self.span_from(&start),
        })
    }

    // =========================================================================
    // Token handling
    // =========================================================================

    /// Pulls the next token from `token_stream`, synthesizing `Eof` if the
    /// source ran dry without emitting one.
    fn pull_token(
        token_stream: &mut GraphQLTokenStream<'src, TTokenSource>,
        fallback_pos: &SourcePosition,
    ) -> GraphQLToken<'src> {
        match token_stream.consume() {
            Some(token) => token,
            None => GraphQLToken::new(
                GraphQLTokenKind::Eof,
                GraphQLSourceSpan::point(fallback_pos.clone()),
            ),
        }
    }

    fn lexer_error(token: GraphQLToken<'src>) -> GraphQLParseError {
        match token.kind {
            GraphQLTokenKind::Error { message, error_notes } => {
                GraphQLParseError::from_lexer_error(message, token.span, error_notes)
            },
            other => GraphQLParseError::new(
                format!("unexpected `{}`", other.describe()),
                token.span,
                GraphQLParseErrorKind::LexerError,
            ),
        }
    }

    /// Consumes the current token and loads the next one.
    fn advance(&mut self) -> Result<GraphQLToken<'src>> {
        if matches!(self.current.kind, GraphQLTokenKind::Eof) {
            return Err(self.unexpected(&[]));
        }
        let next = Self::pull_token(
            &mut self.token_stream,
            &self.current.span.end_exclusive,
        );
        if next.kind.is_error() {
            return Err(Self::lexer_error(next));
        }
        self.prev_end = self.current.span.end_exclusive.clone();
        Ok(std::mem::replace(&mut self.current, next))
    }

    fn at(&self, kind: &GraphQLTokenKind<'_>) -> bool {
        self.current.kind == *kind
    }

    fn at_keyword(&self, keyword: &str) -> bool {
        matches!(&self.current.kind, GraphQLTokenKind::Name(name) if name == keyword)
    }

    /// Consumes the current token if it is `kind`.
    fn eat(&mut self, kind: &GraphQLTokenKind<'_>) -> Result<bool> {
        if self.at(kind) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn expect(&mut self, kind: &GraphQLTokenKind<'_>) -> Result<GraphQLToken<'src>> {
        if self.at(kind) {
            self.advance()
        } else {
            let expected = kind.describe();
            Err(self.unexpected(&[expected.as_str()]))
        }
    }

    fn expect_keyword(&mut self, keyword: &str) -> Result<GraphQLToken<'src>> {
        if self.at_keyword(keyword) {
            self.advance()
        } else {
            Err(self.unexpected(&[keyword]))
        }
    }

    /// Whether the current token can be read as a name. `true`, `false`, and
    /// `null` are lexed separately but are still valid names outside of value
    /// position.
    fn at_name(&self) -> bool {
        matches!(
            self.current.kind,
            GraphQLTokenKind::Name(_)
                | GraphQLTokenKind::True
                | GraphQLTokenKind::False
                | GraphQLTokenKind::Null
        )
    }

    fn expect_name(&mut self) -> Result<ast::Name<'src>> {
        if !self.at_name() {
            return Err(self.unexpected(&["name"]));
        }
        let token = self.advance()?;
        let value = match token.kind {
            GraphQLTokenKind::Name(name) => name,
            GraphQLTokenKind::True => Cow::Borrowed("true"),
            GraphQLTokenKind::False => Cow::Borrowed("false"),
            _ => Cow::Borrowed("null"),
        };
        Ok(ast::Name {
            span: token.span,
            value,
        })
    }

    /// Builds an error describing the current token as unexpected.
    ///
    /// At end of input with a delimiter still open, this reports the unclosed
    /// delimiter and points a note at where it was opened.
    fn unexpected(&self, expected: &[&str]) -> GraphQLParseError {
        let expected: Vec<String> = expected.iter().map(|s| s.to_string()).collect();
        let expected_desc = match expected.as_slice() {
            [] => String::new(),
            [only] => format!("expected `{only}`, "),
            many => format!(
                "expected one of {}, ",
                many.iter()
                    .map(|s| format!("`{s}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
        };

        if matches!(self.current.kind, GraphQLTokenKind::Eof) {
            let span = self.eof_span();
            if let Some(open) = self.delimiter_stack.last() {
                let mut err = GraphQLParseError::new(
                    format!(
                        "{expected_desc}found end of input (unclosed `{}` in {})",
                        open.context.opener(),
                        open.context.description(),
                    ),
                    span,
                    GraphQLParseErrorKind::UnclosedDelimiter {
                        delimiter: open.context.opener().to_string(),
                    },
                );
                err.add_note_with_span("opened here", open.span.clone());
                return err;
            }
            return GraphQLParseError::new(
                format!("{expected_desc}found end of input"),
                span,
                GraphQLParseErrorKind::UnexpectedEof { expected },
            );
        }

        let found = self.current.kind.describe();
        GraphQLParseError::new(
            format!("{expected_desc}found `{found}`"),
            self.current.span.clone(),
            GraphQLParseErrorKind::UnexpectedToken { expected, found },
        )
    }

    fn eof_span(&self) -> GraphQLSourceSpan {
        let mut span = GraphQLSourceSpan::point(self.prev_end.clone());
        span.file_path = self.current.span.file_path.clone();
        span
    }

    /// A span from the start of `start` to the end of the last consumed
    /// token.
    fn span_from(&self, start: &GraphQLSourceSpan) -> GraphQLSourceSpan {
        GraphQLSourceSpan {
            start_inclusive: start.start_inclusive.clone(),
            end_exclusive: self.prev_end.clone(),
            file_path: start.file_path.clone(),
        }
    }

    fn open_delimiter(
        &mut self,
        kind: &GraphQLTokenKind<'_>,
        context: DelimiterContext,
    ) -> Result<GraphQLSourceSpan> {
        let token = self.expect(kind)?;
        self.delimiter_stack.push(OpenDelimiter {
            span: token.span.clone(),
            context,
        });
        Ok(token.span)
    }

    fn close_delimiter(&mut self, kind: &GraphQLTokenKind<'_>) -> Result<()> {
        self.expect(kind)?;
        self.delimiter_stack.pop();
        Ok(())
    }

    fn enter_recursion(&mut self) -> Result<()> {
        self.recursion_depth += 1;
        if self.recursion_depth > Self::MAX_RECURSION_DEPTH {
            return Err(GraphQLParseError::new(
                format!(
                    "document nesting exceeds the maximum depth of {}",
                    Self::MAX_RECURSION_DEPTH,
                ),
                self.current.span.clone(),
                GraphQLParseErrorKind::NestingTooDeep,
            ));
        }
        Ok(())
    }

    fn exit_recursion(&mut self) {
        self.recursion_depth = self.recursion_depth.saturating_sub(1);
    }

    fn empty_construct(
        &self,
        construct: &str,
        open_span: &GraphQLSourceSpan,
    ) -> GraphQLParseError {
        let mut err = GraphQLParseError::new(
            format!("{construct} cannot be empty"),
            open_span.to(&self.current.span),
            GraphQLParseErrorKind::InvalidEmptyConstruct {
                construct: construct.to_string(),
            },
        );
        if construct != "selection set" {
            err.add_help(format!("omit the {construct} entirely if there are none"));
        }
        err
    }

    // =========================================================================
    // Definitions
    // =========================================================================

    fn parse_definition(&mut self) -> Result<ast::Definition<'src>> {
        if self.at(&GraphQLTokenKind::CurlyBraceOpen) {
            return Ok(ast::Definition::Operation(
                self.parse_operation_definition()?,
            ));
        }

        let keyword = match &self.current.kind {
            GraphQLTokenKind::Name(name) => Some(name.to_string()),
            _ => None,
        };
        match keyword.as_deref() {
            Some("query" | "mutation" | "subscription") => Ok(
                ast::Definition::Operation(self.parse_operation_definition()?),
            ),
            Some("fragment") => Ok(ast::Definition::Fragment(
                self.parse_fragment_definition()?,
            )),
            Some(kw) if TYPE_SYSTEM_KEYWORDS.contains(&kw) => {
                let mut err = GraphQLParseError::new(
                    format!("type-system definition `{kw}` is not allowed in a request document"),
                    self.current.span.clone(),
                    GraphQLParseErrorKind::TypeSystemDefinition {
                        keyword: kw.to_string(),
                    },
                );
                err.add_help(
                    "request documents may only contain operations and fragments",
                );
                Err(err)
            },
            _ => Err(self.unexpected(&[
                "{",
                "query",
                "mutation",
                "subscription",
                "fragment",
            ])),
        }
    }

    fn parse_operation_definition(&mut self) -> Result<ast::OperationDefinition<'src>> {
        let start = self.current.span.clone();

        if self.at(&GraphQLTokenKind::CurlyBraceOpen) {
            let selection_set = self.parse_selection_set()?;
            return Ok(ast::OperationDefinition {
                directives: vec![],
                name: None,
                operation_kind: ast::OperationKind::Query,
                selection_set,
                span: self.span_from(&start),
                variable_definitions: vec![],
            });
        }

        let keyword = self.expect_name()?;
        let operation_kind = match ast::OperationKind::from_keyword(keyword.as_str()) {
            Some(kind) => kind,
            None => {
                return Err(GraphQLParseError::new(
                    format!("expected an operation type, found `{keyword}`"),
                    keyword.span,
                    GraphQLParseErrorKind::UnexpectedToken {
                        expected: vec![
                            "query".to_string(),
                            "mutation".to_string(),
                            "subscription".to_string(),
                        ],
                        found: keyword.value.to_string(),
                    },
                ));
            },
        };

        let name = if self.at_name() {
            Some(self.expect_name()?)
        } else {
            None
        };
        let variable_definitions = if self.at(&GraphQLTokenKind::ParenOpen) {
            self.parse_variable_definitions()?
        } else {
            vec![]
        };
        let directives = self.parse_directives(ConstContext::AllowVariables)?;
        let selection_set = self.parse_selection_set()?;

        Ok(ast::OperationDefinition {
            directives,
            name,
            operation_kind,
            selection_set,
            span: self.span_from(&start),
            variable_definitions,
        })
    }

    fn parse_variable_definitions(&mut self) -> Result<Vec<ast::VariableDefinition<'src>>> {
        let open_span = self.open_delimiter(
            &GraphQLTokenKind::ParenOpen,
            DelimiterContext::VariableDefinitions,
        )?;
        if self.at(&GraphQLTokenKind::ParenClose) {
            return Err(self.empty_construct("variable definitions", &open_span));
        }

        let mut defs = vec![];
        while !self.at(&GraphQLTokenKind::ParenClose) {
            defs.push(self.parse_variable_definition()?);
        }
        self.close_delimiter(&GraphQLTokenKind::ParenClose)?;
        Ok(defs)
    }

    fn parse_variable_definition(&mut self) -> Result<ast::VariableDefinition<'src>> {
        let start = self.current.span.clone();
        let name = self.parse_variable_name()?;
        self.expect(&GraphQLTokenKind::Colon)?;
        let var_type = self.parse_type_annotation()?;
        let default_value = if self.eat(&GraphQLTokenKind::Equals)? {
            Some(self.parse_value(ConstContext::VariableDefaultValue)?)
        } else {
            None
        };
        let directives = self.parse_directives(ConstContext::VariableDirective)?;

        Ok(ast::VariableDefinition {
            default_value,
            directives,
            name,
            span: self.span_from(&start),
            var_type,
        })
    }

    /// `$name`, returning a `Name` whose span covers the `$`.
    fn parse_variable_name(&mut self) -> Result<ast::Name<'src>> {
        let dollar = self.expect(&GraphQLTokenKind::Dollar)?;
        let name = self.expect_name()?;
        Ok(ast::Name {
            span: dollar.span.to(&name.span),
            value: name.value,
        })
    }

    fn parse_fragment_definition(&mut self) -> Result<ast::FragmentDefinition<'src>> {
        let start = self.expect_keyword("fragment")?.span;
        if self.at_keyword("on") {
            let mut err = GraphQLParseError::new(
                "fragment name cannot be `on`",
                self.current.span.clone(),
                GraphQLParseErrorKind::ReservedName {
                    name: "on".to_string(),
                },
            );
            err.add_help("give the fragment a name: `fragment MyFragment on Type`");
            return Err(err);
        }
        let name = self.expect_name()?;
        self.expect_keyword("on")?;
        let type_condition = self.expect_name()?;
        let directives = self.parse_directives(ConstContext::AllowVariables)?;
        let selection_set = self.parse_selection_set()?;

        Ok(ast::FragmentDefinition {
            directives,
            name,
            selection_set,
            span: self.span_from(&start),
            type_condition,
        })
    }

    // =========================================================================
    // Selections
    // =========================================================================

    fn parse_selection_set(&mut self) -> Result<ast::SelectionSet<'src>> {
        self.enter_recursion()?;
        let result = self.parse_selection_set_impl();
        self.exit_recursion();
        result
    }

    fn parse_selection_set_impl(&mut self) -> Result<ast::SelectionSet<'src>> {
        let open_span = self.open_delimiter(
            &GraphQLTokenKind::CurlyBraceOpen,
            DelimiterContext::SelectionSet,
        )?;
        if self.at(&GraphQLTokenKind::CurlyBraceClose) {
            return Err(self.empty_construct("selection set", &open_span));
        }

        let mut selections = vec![];
        while !self.at(&GraphQLTokenKind::CurlyBraceClose) {
            selections.push(self.parse_selection()?);
        }
        self.close_delimiter(&GraphQLTokenKind::CurlyBraceClose)?;

        Ok(ast::SelectionSet {
            selections,
            span: self.span_from(&open_span),
        })
    }

    fn parse_selection(&mut self) -> Result<ast::Selection<'src>> {
        if !self.at(&GraphQLTokenKind::Ellipsis) {
            if !self.at_name() {
                return Err(self.unexpected(&["name", "...", "}"]));
            }
            return Ok(ast::Selection::Field(self.parse_field()?));
        }

        let start = self.advance()?.span;
        if self.at_keyword("on") {
            self.advance()?;
            let type_condition = self.expect_name()?;
            return Ok(ast::Selection::InlineFragment(
                self.parse_inline_fragment_rest(start, Some(type_condition))?,
            ));
        }
        if self.at_name() {
            let name = self.expect_name()?;
            let directives = self.parse_directives(ConstContext::AllowVariables)?;
            return Ok(ast::Selection::FragmentSpread(ast::FragmentSpread {
                directives,
                name,
                span: self.span_from(&start),
            }));
        }
        if self.at(&GraphQLTokenKind::At) || self.at(&GraphQLTokenKind::CurlyBraceOpen) {
            return Ok(ast::Selection::InlineFragment(
                self.parse_inline_fragment_rest(start, None)?,
            ));
        }
        Err(self.unexpected(&["on", "name", "@", "{"]))
    }

    fn parse_inline_fragment_rest(
        &mut self,
        start: GraphQLSourceSpan,
        type_condition: Option<ast::Name<'src>>,
    ) -> Result<ast::InlineFragment<'src>> {
        let directives = self.parse_directives(ConstContext::AllowVariables)?;
        let selection_set = self.parse_selection_set()?;
        Ok(ast::InlineFragment {
            directives,
            selection_set,
            span: self.span_from(&start),
            type_condition,
        })
    }

    fn parse_field(&mut self) -> Result<ast::Field<'src>> {
        let first = self.expect_name()?;
        let start = first.span.clone();
        let (alias, name) = if self.eat(&GraphQLTokenKind::Colon)? {
            (Some(first), self.expect_name()?)
        } else {
            (None, first)
        };

        let arguments = if self.at(&GraphQLTokenKind::ParenOpen) {
            self.parse_arguments(DelimiterContext::FieldArguments, ConstContext::AllowVariables)?
        } else {
            vec![]
        };
        let directives = self.parse_directives(ConstContext::AllowVariables)?;
        let selection_set = if self.at(&GraphQLTokenKind::CurlyBraceOpen) {
            Some(self.parse_selection_set()?)
        } else {
            None
        };

        Ok(ast::Field {
            alias,
            arguments,
            directives,
            name,
            selection_set,
            span: self.span_from(&start),
        })
    }

    fn parse_arguments(
        &mut self,
        delimiter_context: DelimiterContext,
        const_context: ConstContext,
    ) -> Result<Vec<ast::Argument<'src>>> {
        let open_span = self.open_delimiter(&GraphQLTokenKind::ParenOpen, delimiter_context)?;
        if self.at(&GraphQLTokenKind::ParenClose) {
            return Err(self.empty_construct("argument list", &open_span));
        }

        let mut arguments = vec![];
        while !self.at(&GraphQLTokenKind::ParenClose) {
            let name = self.expect_name()?;
            if !self.at(&GraphQLTokenKind::Colon) {
                let mut err = self.unexpected(&[":"]);
                err.add_help(format!("arguments are written as `{name}: value`"));
                return Err(err);
            }
            self.advance()?;
            let value = self.parse_value(const_context)?;
            arguments.push(ast::Argument {
                span: self.span_from(&name.span),
                name,
                value,
            });
        }
        self.close_delimiter(&GraphQLTokenKind::ParenClose)?;
        Ok(arguments)
    }

    fn parse_directives(
        &mut self,
        const_context: ConstContext,
    ) -> Result<Vec<ast::DirectiveAnnotation<'src>>> {
        let mut directives = vec![];
        while self.at(&GraphQLTokenKind::At) {
            let start = self.advance()?.span;
            let name = self.expect_name()?;
            let arguments = if self.at(&GraphQLTokenKind::ParenOpen) {
                self.parse_arguments(DelimiterContext::DirectiveArguments, const_context)?
            } else {
                vec![]
            };
            directives.push(ast::DirectiveAnnotation {
                arguments,
                name,
                span: self.span_from(&start),
            });
        }
        Ok(directives)
    }

    // =========================================================================
    // Type annotations
    // =========================================================================

    fn parse_type_annotation(&mut self) -> Result<ast::TypeAnnotation<'src>> {
        self.enter_recursion()?;
        let result = self.parse_type_annotation_impl();
        self.exit_recursion();
        result
    }

    fn parse_type_annotation_impl(&mut self) -> Result<ast::TypeAnnotation<'src>> {
        if self.at(&GraphQLTokenKind::SquareBracketOpen) {
            let open_span = self.open_delimiter(
                &GraphQLTokenKind::SquareBracketOpen,
                DelimiterContext::ListType,
            )?;
            let element_type = self.parse_type_annotation()?;
            self.close_delimiter(&GraphQLTokenKind::SquareBracketClose)?;
            let nullable = !self.eat(&GraphQLTokenKind::Bang)?;
            return Ok(ast::TypeAnnotation::List(ast::ListTypeAnnotation {
                element_type: Box::new(element_type),
                nullable,
                span: self.span_from(&open_span),
            }));
        }

        if !matches!(self.current.kind, GraphQLTokenKind::Name(_)) {
            return Err(self.unexpected(&["type name", "["]));
        }
        let name = self.expect_name()?;
        let nullable = !self.eat(&GraphQLTokenKind::Bang)?;
        Ok(ast::TypeAnnotation::Named(ast::NamedTypeAnnotation {
            span: self.span_from(&name.span),
            name,
            nullable,
        }))
    }

    // =========================================================================
    // Values
    // =========================================================================

    fn parse_value(&mut self, const_context: ConstContext) -> Result<ast::Value<'src>> {
        match &self.current.kind {
            GraphQLTokenKind::Dollar => {
                if const_context != ConstContext::AllowVariables {
                    let mut err = GraphQLParseError::new(
                        format!(
                            "variables are not allowed in {}",
                            const_context.description(),
                        ),
                        self.current.span.clone(),
                        GraphQLParseErrorKind::UnexpectedToken {
                            expected: vec!["constant value".to_string()],
                            found: "$".to_string(),
                        },
                    );
                    err.add_help("use a literal value here");
                    return Err(err);
                }
                Ok(ast::Value::Variable(self.parse_variable_name()?))
            },
            GraphQLTokenKind::IntValue(_) => {
                let token = self.advance()?;
                match token.kind.parse_int_value() {
                    Some(Ok(value)) => Ok(ast::Value::Int {
                        span: token.span,
                        value,
                    }),
                    _ => Err(Self::invalid_value(
                        &token,
                        ValueParsingError::Int(token.kind.describe()),
                        "integer literal does not fit in 64 bits",
                    )),
                }
            },
            GraphQLTokenKind::FloatValue(_) => {
                let token = self.advance()?;
                match token.kind.parse_float_value() {
                    Some(Ok(value)) if value.is_finite() => Ok(ast::Value::Float {
                        span: token.span,
                        value,
                    }),
                    _ => Err(Self::invalid_value(
                        &token,
                        ValueParsingError::Float(token.kind.describe()),
                        "float literal must be finite",
                    )),
                }
            },
            GraphQLTokenKind::StringValue(_) => {
                let token = self.advance()?;
                match token.kind.parse_string_value() {
                    Some(Ok(value)) => Ok(ast::Value::String {
                        span: token.span,
                        value: Cow::Owned(value),
                    }),
                    Some(Err(err)) => {
                        let message = err.to_string();
                        Err(Self::invalid_value(
                            &token,
                            ValueParsingError::String(err),
                            &message,
                        ))
                    },
                    None => Err(self.unexpected(&["string"])),
                }
            },
            GraphQLTokenKind::True | GraphQLTokenKind::False => {
                let token = self.advance()?;
                Ok(ast::Value::Boolean {
                    value: matches!(token.kind, GraphQLTokenKind::True),
                    span: token.span,
                })
            },
            GraphQLTokenKind::Null => {
                let token = self.advance()?;
                Ok(ast::Value::Null { span: token.span })
            },
            GraphQLTokenKind::Name(_) => Ok(ast::Value::Enum(self.expect_name()?)),
            GraphQLTokenKind::SquareBracketOpen => {
                self.enter_recursion()?;
                let result = self.parse_list_value(const_context);
                self.exit_recursion();
                result
            },
            GraphQLTokenKind::CurlyBraceOpen => {
                self.enter_recursion()?;
                let result = self.parse_object_value(const_context);
                self.exit_recursion();
                result
            },
            _ => Err(self.unexpected(&["value"])),
        }
    }

    fn invalid_value(
        token: &GraphQLToken<'src>,
        error: ValueParsingError,
        message: &str,
    ) -> GraphQLParseError {
        GraphQLParseError::with_notes(
            format!("invalid value `{}`: {message}", token.kind.describe()),
            token.span.clone(),
            GraphQLParseErrorKind::InvalidValue(error),
            SmallVec::new(),
        )
    }

    fn parse_list_value(&mut self, const_context: ConstContext) -> Result<ast::Value<'src>> {
        let open_span = self.open_delimiter(
            &GraphQLTokenKind::SquareBracketOpen,
            DelimiterContext::ListValue,
        )?;
        let mut values = vec![];
        while !self.at(&GraphQLTokenKind::SquareBracketClose) {
            values.push(self.parse_value(const_context)?);
        }
        self.close_delimiter(&GraphQLTokenKind::SquareBracketClose)?;
        Ok(ast::Value::List {
            span: self.span_from(&open_span),
            values,
        })
    }

    fn parse_object_value(&mut self, const_context: ConstContext) -> Result<ast::Value<'src>> {
        let open_span = self.open_delimiter(
            &GraphQLTokenKind::CurlyBraceOpen,
            DelimiterContext::ObjectValue,
        )?;
        let mut fields = vec![];
        while !self.at(&GraphQLTokenKind::CurlyBraceClose) {
            let name = self.expect_name()?;
            self.expect(&GraphQLTokenKind::Colon)?;
            let value = self.parse_value(const_context)?;
            fields.push(ast::ObjectField {
                span: self.span_from(&name.span),
                name,
                value,
            });
        }
        self.close_delimiter(&GraphQLTokenKind::CurlyBraceClose)?;
        Ok(ast::Value::Object {
            fields,
            span: self.span_from(&open_span),
        })
    }
}
