use crate::GraphQLErrorNoteKind;
use crate::GraphQLSourceSpan;
use crate::SmallVec;

/// An error note providing additional context about an error.
///
/// Notes augment the primary error message with explanatory context,
/// actionable suggestions, spec references, or related source locations
/// (e.g. where an unclosed delimiter was opened).
#[derive(Debug, Clone, PartialEq)]
pub struct GraphQLErrorNote {
    /// Selects the `note:`/`help:`/`spec:` prefix this note renders with.
    pub kind: GraphQLErrorNoteKind,

    /// The note text, or a specification URL for [`GraphQLErrorNoteKind::Spec`].
    pub message: String,

    /// Optional span pointing to a related location.
    ///
    /// [`GraphQLParseError::format_detailed`](crate::GraphQLParseError::format_detailed)
    /// renders a one-line snippet marking this location.
    pub span: Option<GraphQLSourceSpan>,
}

impl GraphQLErrorNote {
    /// A general note with no related location.
    pub fn general(message: impl Into<String>) -> Self {
        Self {
            kind: GraphQLErrorNoteKind::General,
            message: message.into(),
            span: None,
        }
    }

    /// A general note pointing at a related location, such as the `{` an
    /// unclosed selection set was opened with.
    pub fn general_with_span(
        message: impl Into<String>,
        span: GraphQLSourceSpan,
    ) -> Self {
        Self {
            kind: GraphQLErrorNoteKind::General,
            message: message.into(),
            span: Some(span),
        }
    }

    /// A suggestion for fixing the error.
    pub fn help(message: impl Into<String>) -> Self {
        Self {
            kind: GraphQLErrorNoteKind::Help,
            message: message.into(),
            span: None,
        }
    }

    /// A link to the relevant section of the GraphQL specification.
    pub fn spec(url: impl Into<String>) -> Self {
        Self {
            kind: GraphQLErrorNoteKind::Spec,
            message: url.into(),
            span: None,
        }
    }
}

/// Most errors carry 0-2 notes, so these are kept inline.
pub type GraphQLErrorNotes = SmallVec<[GraphQLErrorNote; 2]>;
