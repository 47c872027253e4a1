use crate::execution::ErrorKind;
use crate::execution::GraphQLError;
use gqlrun_parser::ast;
use indexmap::IndexMap;
use std::collections::HashSet;

/// Fields of one selection set grouped by response key, in first-seen order.
/// Each group holds every field selected under that key.
pub(crate) type GroupedFields<'a> = IndexMap<&'a str, Vec<&'a ast::Field<'a>>>;

/// Flattens `selection_sets` for an object of type `type_name`, splicing in
/// fragment spreads and inline fragments whose type condition applies.
///
/// Unknown fragments are skipped here; [`validate_fragment_spreads`] reports
/// them. A fragment is entered at most once per call, which also stops
/// fragment cycles.
pub(crate) fn collect_fields<'a>(
    document: &'a ast::Document<'a>,
    type_name: &str,
    selection_sets: &[&'a ast::SelectionSet<'a>],
) -> GroupedFields<'a> {
    let mut fields = GroupedFields::new();
    let mut visited_fragments = HashSet::new();
    for selection_set in selection_sets {
        collect_fields_impl(
            document,
            type_name,
            selection_set,
            &mut visited_fragments,
            &mut fields,
        );
    }
    fields
}

fn collect_fields_impl<'a>(
    document: &'a ast::Document<'a>,
    type_name: &str,
    selection_set: &'a ast::SelectionSet<'a>,
    visited_fragments: &mut HashSet<&'a str>,
    fields: &mut GroupedFields<'a>,
) {
    for selection in &selection_set.selections {
        match selection {
            ast::Selection::Field(field) => {
                fields.entry(field.response_key()).or_default().push(field);
            },

            ast::Selection::InlineFragment(inline) => {
                let applies = inline
                    .type_condition
                    .as_ref()
                    .is_none_or(|condition| condition.as_str() == type_name);
                if applies {
                    collect_fields_impl(
                        document,
                        type_name,
                        &inline.selection_set,
                        visited_fragments,
                        fields,
                    );
                }
            },

            ast::Selection::FragmentSpread(spread) => {
                let name = spread.name.as_str();
                if !visited_fragments.insert(name) {
                    continue;
                }
                let Some(fragment) = document.fragment(name) else {
                    continue;
                };
                if fragment.type_condition.as_str() == type_name {
                    collect_fields_impl(
                        document,
                        type_name,
                        &fragment.selection_set,
                        visited_fragments,
                        fields,
                    );
                }
            },
        }
    }
}

/// Problems with the fragment spreads reachable from an operation.
#[derive(Debug, Default)]
pub(crate) struct FragmentSpreadErrors {
    /// Fragments that spread themselves, directly or through other fragments
    /// or nested fields. An operation with a cycle cannot be executed.
    pub(crate) cycles: Vec<GraphQLError>,
    pub(crate) unknown: Vec<GraphQLError>,
}

/// Reports every spread of an undefined fragment and every fragment cycle
/// reachable from `operation`. Each cycle is reported once, at the spread
/// that closes it.
pub(crate) fn validate_fragment_spreads<'a>(
    document: &'a ast::Document<'a>,
    operation: &'a ast::OperationDefinition<'a>,
) -> FragmentSpreadErrors {
    let mut errors = FragmentSpreadErrors::default();
    let mut checked = HashSet::new();
    let mut stack = vec![];
    validate_selection_set(
        document,
        &operation.selection_set,
        &mut stack,
        &mut checked,
        &mut errors,
    );
    errors
}

fn validate_selection_set<'a>(
    document: &'a ast::Document<'a>,
    selection_set: &'a ast::SelectionSet<'a>,
    stack: &mut Vec<&'a str>,
    checked: &mut HashSet<&'a str>,
    errors: &mut FragmentSpreadErrors,
) {
    for selection in &selection_set.selections {
        match selection {
            ast::Selection::Field(field) => {
                if let Some(nested) = &field.selection_set {
                    validate_selection_set(document, nested, stack, checked, errors);
                }
            },

            ast::Selection::InlineFragment(inline) => {
                validate_selection_set(
                    document,
                    &inline.selection_set,
                    stack,
                    checked,
                    errors,
                );
            },

            ast::Selection::FragmentSpread(spread) => {
                let name = spread.name.as_str();
                if let Some(cycle_start) = stack.iter().position(|entered| *entered == name) {
                    let cycle = stack[cycle_start..]
                        .iter()
                        .chain(std::iter::once(&name))
                        .map(|frag| format!("`{frag}`"))
                        .collect::<Vec<_>>()
                        .join(" -> ");
                    errors.cycles.push(GraphQLError::new(
                        ErrorKind::Validation,
                        format!("Fragment `{name}` spreads itself: {cycle}"),
                    ).at(&spread.span));
                    continue;
                }
                if checked.contains(name) {
                    continue;
                }
                let Some(fragment) = document.fragment(name) else {
                    errors.unknown.push(GraphQLError::new(
                        ErrorKind::Validation,
                        format!("Unknown fragment `{name}`"),
                    ).at(&spread.span));
                    continue;
                };

                stack.push(name);
                validate_selection_set(
                    document,
                    &fragment.selection_set,
                    stack,
                    checked,
                    errors,
                );
                stack.pop();
                checked.insert(name);
            },
        }
    }
}
