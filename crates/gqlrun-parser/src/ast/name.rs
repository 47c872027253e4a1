use crate::GraphQLSourceSpan;
use std::borrow::Cow;

/// A GraphQL [name](https://spec.graphql.org/October2021/#sec-Names)
/// (identifier), used for field names, aliases, argument names, variable
/// names, fragment names, type conditions, directive names, and enum values.
#[derive(Clone, Debug, PartialEq)]
pub struct Name<'src> {
    pub span: GraphQLSourceSpan,
    pub value: Cow<'src, str>,
}

impl Name<'_> {
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for Name<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}
