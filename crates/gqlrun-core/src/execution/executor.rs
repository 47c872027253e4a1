use crate::execution::ErrorKind;
use crate::execution::ExecutionResponse;
use crate::execution::GraphQLError;
use crate::execution::PathSegment;
use crate::execution::ResolverContext;
use crate::execution::SchemaRequestContext;
use crate::execution::Variables;
use crate::execution::field_collection;
use crate::execution::variable_coercion;
use crate::execution::variable_coercion::CoercedVariables;
use crate::execution::variable_coercion::VariableLookup;
use crate::schema::OperationDefinition;
use crate::schema::OperationType;
use crate::schema::PropertyDefinition;
use crate::schema::Schema;
use crate::schema::TypeDefinition;
use crate::types::TypeAnnotation;
use crate::value::InputValue;
use crate::value::ObjectRef;
use crate::value::ResolvedValue;
use crate::value::ResponseValue;
use crate::value::ScalarValue;
use futures::FutureExt;
use futures::future;
use futures::future::BoxFuture;
use gqlrun_parser::ast;
use indexmap::IndexMap;
use std::any::Any;
use std::sync::Arc;
use tracing::debug;
use tracing::trace;
use tracing::warn;

/// A non-null position ended up `null`; the nearest nullable ancestor must
/// become `null` instead. The error explaining why has already been recorded.
#[derive(Debug)]
struct PropagateNull;

/// The outcome of completing one field or list item, with every error raised
/// underneath it.
type Completion = (Result<ResponseValue, PropagateNull>, Vec<GraphQLError>);

fn null_or_propagate(
    type_annotation: &TypeAnnotation,
) -> Result<ResponseValue, PropagateNull> {
    if type_annotation.nullable() {
        Ok(ResponseValue::Null)
    } else {
        Err(PropagateNull)
    }
}

fn child_path(path: &[PathSegment], segment: PathSegment) -> Vec<PathSegment> {
    let mut child = Vec::with_capacity(path.len() + 1);
    child.extend_from_slice(path);
    child.push(segment);
    child
}

/// Executes request documents against one [`Schema`].
///
/// An `Executor` holds nothing but a reference to the schema, so any number
/// of executions may run against the same schema at once.
#[derive(Clone, Copy, Debug)]
pub struct Executor<'schema> {
    schema: &'schema Schema,
}

impl<'schema> Executor<'schema> {
    /// Executes one operation of `document`.
    ///
    /// `operation_name` picks the operation when the document has more than
    /// one. Problems with the request as a whole (operation selection,
    /// variable values) produce `data: null` and no resolver runs. Field-level
    /// problems are collected into `errors` while sibling fields continue.
    pub async fn execute(
        &self,
        document: &ast::Document<'_>,
        operation_name: Option<&str>,
        variables: &Variables,
        context: SchemaRequestContext,
    ) -> ExecutionResponse {
        let operation = match select_operation(document, operation_name) {
            Ok(operation) => operation,
            Err(err) => return ExecutionResponse::rejected(vec![err]),
        };
        let operation_type = match operation.operation_kind {
            ast::OperationKind::Query => OperationType::Query,
            ast::OperationKind::Mutation => OperationType::Mutation,
            ast::OperationKind::Subscription => {
                return ExecutionResponse::rejected(vec![GraphQLError::new(
                    ErrorKind::Validation,
                    "Subscription operations are not supported",
                ).at(&operation.span)]);
            },
        };
        if context.deadline().is_some() && tokio::runtime::Handle::try_current().is_err() {
            return ExecutionResponse::rejected(vec![GraphQLError::new(
                ErrorKind::Cancellation,
                "A request deadline can only be enforced inside a Tokio runtime",
            )]);
        }
        debug!(
            operation = operation.name_str().unwrap_or("<anonymous>"),
            operation_type = %operation_type,
            "selected operation",
        );

        let variables = match variable_coercion::coerce_variable_values(
            self.schema,
            operation,
            variables,
        ) {
            Ok(variables) => variables,
            Err(errors) => {
                debug!(error_count = errors.len(), "variable coercion failed");
                return ExecutionResponse::rejected(errors);
            },
        };
        debug!(variable_count = variables.len(), "coerced variables");

        let fragment_errors = field_collection::validate_fragment_spreads(document, operation);
        if !fragment_errors.cycles.is_empty() {
            debug!(cycle_count = fragment_errors.cycles.len(), "fragment cycles found");
            return ExecutionResponse::rejected(fragment_errors.cycles);
        }
        let mut errors = fragment_errors.unknown;
        let execution = ExecutionContext {
            document,
            request: Arc::new(context),
            schema: self.schema,
            variables,
        };
        let (data, field_errors) = execution.execute_root(operation, operation_type).await;
        errors.extend(field_errors);

        ExecutionResponse { data, errors }
    }

    pub fn new(schema: &'schema Schema) -> Self {
        Self { schema }
    }
}

fn select_operation<'a>(
    document: &'a ast::Document<'a>,
    operation_name: Option<&str>,
) -> Result<&'a ast::OperationDefinition<'a>, GraphQLError> {
    let mut operations = document.operations();
    match operation_name {
        Some(name) => operations
            .find(|op| op.name_str() == Some(name))
            .ok_or_else(|| GraphQLError::new(
                ErrorKind::Validation,
                format!("Unknown operation named `{name}`"),
            )),
        None => match (operations.next(), operations.next()) {
            (Some(operation), None) => Ok(operation),
            (None, _) => Err(GraphQLError::new(
                ErrorKind::Validation,
                "The document does not contain any operations",
            )),
            (Some(_), Some(_)) => Err(GraphQLError::new(
                ErrorKind::Validation,
                "An operation name is required when the document contains \
                more than one operation",
            )),
        },
    }
}

/// The resolvable side of a field: either a property of some object type or
/// a root operation.
enum FieldTarget<'a> {
    Operation(&'a OperationDefinition),
    Property {
        instance: ObjectRef,
        property: &'a PropertyDefinition,
    },
}

/// Read-only state shared by every field of one execution.
struct ExecutionContext<'a> {
    document: &'a ast::Document<'a>,
    request: Arc<SchemaRequestContext>,
    schema: &'a Schema,
    variables: CoercedVariables<'a>,
}

impl<'a> ExecutionContext<'a> {
    /// Binds the arguments of `field` against the declared `arguments`.
    /// Declared arguments that are absent (or bound to an absent variable)
    /// are left out of the result.
    fn bind_arguments(
        &self,
        arguments: &IndexMap<String, TypeAnnotation>,
        field: &'a ast::Field<'a>,
        owner: &str,
        path: &[PathSegment],
    ) -> Result<IndexMap<String, InputValue>, Vec<GraphQLError>> {
        let mut bound = IndexMap::new();
        let mut errors = vec![];
        let error = |message: String, span: &gqlrun_parser::GraphQLSourceSpan| {
            GraphQLError::new(ErrorKind::Validation, message)
                .at(span)
                .with_path(path.to_vec())
        };

        for arg in &field.arguments {
            if !arguments.contains_key(arg.name.as_str()) {
                errors.push(error(
                    format!("Unknown argument `{}` on {owner}", arg.name),
                    &arg.span,
                ));
            }
        }

        for (name, type_annotation) in arguments {
            let Some(arg) = field.argument(name) else {
                if !type_annotation.nullable() {
                    errors.push(error(
                        format!(
                            "Missing required argument `{name}` of type \
                            `{type_annotation}` on {owner}",
                        ),
                        &field.span,
                    ));
                }
                continue;
            };

            if let ast::Value::Variable(var_name) = &arg.value
                && matches!(self.variables.get(var_name.as_str()), VariableLookup::Absent)
            {
                if !type_annotation.nullable() {
                    errors.push(error(
                        format!(
                            "Argument `{name}` of {owner} requires a value, but \
                            variable `${var_name}` was not provided",
                        ),
                        &arg.span,
                    ));
                }
                continue;
            }

            match variable_coercion::coerce_literal(
                self.schema,
                &arg.value,
                type_annotation,
                &self.variables,
            ) {
                Ok(value) => {
                    bound.insert(name.clone(), value);
                },
                Err(message) => errors.push(error(
                    format!("Invalid value for argument `{name}` of {owner}: {message}"),
                    &arg.span,
                )),
            }
        }

        if errors.is_empty() {
            Ok(bound)
        } else {
            Err(errors)
        }
    }

    /// Shapes `resolved` according to `type_annotation`, recursing into list
    /// items and object selection sets.
    fn complete_value<'f>(
        &'f self,
        type_annotation: &'a TypeAnnotation,
        resolved: ResolvedValue,
        fields: &'f [&'a ast::Field<'a>],
        owner: &'f str,
        path: Vec<PathSegment>,
    ) -> BoxFuture<'f, Completion> {
        async move {
            let field = fields[0];
            let shape_error = |message: String| {
                GraphQLError::new(ErrorKind::Resolver, message)
                    .at(&field.span)
                    .with_path(path.clone())
            };

            if resolved.is_null() {
                if type_annotation.nullable() {
                    return (Ok(ResponseValue::Null), vec![]);
                }
                let err = GraphQLError::new(
                    ErrorKind::NullPropagation,
                    format!("Cannot return null for non-nullable field {owner}"),
                ).at(&field.span).with_path(path.clone());
                return (Err(PropagateNull), vec![err]);
            }

            match type_annotation {
                TypeAnnotation::List(list) => {
                    let ResolvedValue::List(items) = resolved else {
                        let err = shape_error(format!(
                            "{owner} is declared as `{type_annotation}` but its \
                            resolver did not return a list",
                        ));
                        return (null_or_propagate(type_annotation), vec![err]);
                    };

                    let inner = list.inner_type_annotation();
                    let completions = future::join_all(
                        items.into_iter().enumerate().map(|(index, item)| {
                            let item_path = child_path(&path, PathSegment::Index(index));
                            self.complete_value(inner, item, fields, owner, item_path)
                        }),
                    ).await;

                    let mut errors = vec![];
                    let mut values = Vec::with_capacity(completions.len());
                    let mut propagate = false;
                    for (result, item_errors) in completions {
                        errors.extend(item_errors);
                        match result {
                            Ok(value) => values.push(value),
                            Err(PropagateNull) => propagate = true,
                        }
                    }
                    if propagate {
                        (null_or_propagate(type_annotation), errors)
                    } else {
                        (Ok(ResponseValue::List(values)), errors)
                    }
                },

                TypeAnnotation::Named(named) => {
                    if let Some(kind) = named.scalar_kind() {
                        let shaped = match resolved {
                            ResolvedValue::Scalar(scalar) => {
                                let found = scalar.kind();
                                kind.widen(scalar).ok_or_else(|| format!(
                                    "{owner} is declared as `{type_annotation}` but its \
                                    resolver returned a {found}",
                                ))
                            },
                            _ => Err(format!(
                                "{owner} is declared as `{type_annotation}` but its \
                                resolver did not return a scalar",
                            )),
                        };
                        return match shaped {
                            Ok(scalar) => (Ok(ResponseValue::Scalar(scalar)), vec![]),
                            Err(message) => {
                                (null_or_propagate(type_annotation), vec![shape_error(message)])
                            },
                        };
                    }

                    if let Some(enum_def) = self.schema.enum_definition(named.name()) {
                        let entry = match resolved {
                            ResolvedValue::Enum(entry)
                            | ResolvedValue::Scalar(ScalarValue::String(entry)) => Some(entry),
                            _ => None,
                        };
                        return match entry {
                            Some(entry) if enum_def.contains(&entry) => {
                                (Ok(ResponseValue::Enum(entry)), vec![])
                            },
                            Some(entry) => (
                                null_or_propagate(type_annotation),
                                vec![shape_error(format!(
                                    "`{entry}` is not a member of enum `{}`",
                                    enum_def.name(),
                                ))],
                            ),
                            None => (
                                null_or_propagate(type_annotation),
                                vec![shape_error(format!(
                                    "{owner} is declared as `{type_annotation}` but its \
                                    resolver did not return an enum entry",
                                ))],
                            ),
                        };
                    }

                    let Some(type_def) = self.schema.type_definition(named.name()) else {
                        let err = shape_error(format!(
                            "`{}` is not a registered type",
                            named.name(),
                        ));
                        return (null_or_propagate(type_annotation), vec![err]);
                    };
                    let ResolvedValue::Object(instance) = resolved else {
                        let err = shape_error(format!(
                            "{owner} is declared as `{type_annotation}` but its \
                            resolver did not return an object",
                        ));
                        return (null_or_propagate(type_annotation), vec![err]);
                    };
                    if Any::type_id(&*instance) != type_def.rust_type_id() {
                        let err = shape_error(format!(
                            "{owner} is declared as `{type_annotation}` but its \
                            resolver returned an object that is not a `{}`",
                            type_def.rust_type_name(),
                        ));
                        return (null_or_propagate(type_annotation), vec![err]);
                    }

                    let selection_sets = fields
                        .iter()
                        .filter_map(|field| field.selection_set.as_ref())
                        .collect::<Vec<_>>();
                    let (result, errors) = self
                        .execute_selection_set(type_def, instance, &selection_sets, path)
                        .await;
                    match result {
                        Ok(value) => (Ok(value), errors),
                        Err(PropagateNull) => (null_or_propagate(type_annotation), errors),
                    }
                },
            }
        }.boxed()
    }

    /// Resolves one field (or root operation) and completes its value.
    fn execute_field<'f>(
        &'f self,
        owner: String,
        target: FieldTarget<'a>,
        fields: Vec<&'a ast::Field<'a>>,
        path: Vec<PathSegment>,
    ) -> BoxFuture<'f, Completion> {
        async move {
            let field = fields[0];
            let (type_annotation, arguments, accessible): (
                &'a TypeAnnotation,
                &'a IndexMap<String, TypeAnnotation>,
                bool,
            ) = match &target {
                &FieldTarget::Operation(operation) => (
                    operation.type_annotation(),
                    operation.arguments(),
                    operation.is_accessible(&self.request),
                ),
                &FieldTarget::Property { ref instance, property } => (
                    property.type_annotation(),
                    property.arguments(),
                    property.is_accessible(&**instance, &self.request),
                ),
            };
            trace!(field = %owner, path = ?path, "resolving field");

            if !accessible {
                let err = GraphQLError::new(
                    ErrorKind::Authorization,
                    format!("Not authorized to access {owner}"),
                ).at(&field.span).with_path(path);
                return (null_or_propagate(type_annotation), vec![err]);
            }

            if let Some(err) = self.check_subselection(type_annotation, field, &owner, &path) {
                return (null_or_propagate(type_annotation), vec![err]);
            }

            let arguments = match self.bind_arguments(arguments, field, &owner, &path) {
                Ok(arguments) => arguments,
                Err(errors) => return (null_or_propagate(type_annotation), errors),
            };

            let resolver_context = ResolverContext::new(arguments, self.request.clone());
            let resolver_future = match target {
                FieldTarget::Operation(operation) => operation.resolve(resolver_context),
                FieldTarget::Property { instance, property } => {
                    property.resolve(instance, resolver_context)
                },
            };
            let outcome = match self.request.deadline() {
                Some(deadline) => {
                    match tokio::time::timeout_at(deadline, resolver_future).await {
                        Ok(outcome) => outcome,
                        Err(_elapsed) => {
                            warn!(field = %owner, path = ?path, "request deadline expired; resolver cancelled");
                            let err = GraphQLError::new(
                                ErrorKind::Cancellation,
                                format!("Resolving {owner} was cancelled: the request deadline expired"),
                            ).at(&field.span).with_path(path);
                            return (null_or_propagate(type_annotation), vec![err]);
                        },
                    }
                },
                None => resolver_future.await,
            };
            let resolved = match outcome {
                Ok(resolved) => resolved,
                Err(field_err) => {
                    let err = GraphQLError::new(ErrorKind::Resolver, field_err.message())
                        .at(&field.span)
                        .with_path(path);
                    return (null_or_propagate(type_annotation), vec![err]);
                },
            };

            self.complete_value(type_annotation, resolved, &fields, &owner, path).await
        }.boxed()
    }

    /// Object-typed fields need a selection set; scalar and enum fields must
    /// not have one.
    fn check_subselection(
        &self,
        type_annotation: &TypeAnnotation,
        field: &ast::Field<'_>,
        owner: &str,
        path: &[PathSegment],
    ) -> Option<GraphQLError> {
        let is_leaf = type_annotation.is_scalar() || type_annotation.is_enum();
        let message = match (is_leaf, &field.selection_set) {
            (true, Some(_)) => format!(
                "{owner} has leaf type `{type_annotation}` and must not have a \
                selection of subfields",
            ),
            (false, None) => format!(
                "{owner} has object type `{type_annotation}` and must have a \
                selection of subfields",
            ),
            _ => return None,
        };
        Some(
            GraphQLError::new(ErrorKind::Validation, message)
                .at(&field.span)
                .with_path(path.to_vec()),
        )
    }

    /// Executes the root selection set. Query fields resolve concurrently;
    /// mutation fields resolve one at a time in document order.
    async fn execute_root(
        &self,
        operation: &'a ast::OperationDefinition<'a>,
        operation_type: OperationType,
    ) -> (ResponseValue, Vec<GraphQLError>) {
        let root_type_name = operation_type.root_type_name();
        let grouped = field_collection::collect_fields(
            self.document,
            root_type_name,
            &[&operation.selection_set],
        );
        let operations = match operation_type {
            OperationType::Mutation => &self.schema.mutations,
            OperationType::Query => &self.schema.queries,
        };

        let mut errors = vec![];
        let mut pending = vec![];
        for (response_key, fields) in grouped {
            let field = fields[0];
            let path = vec![PathSegment::Field(response_key.to_string())];
            let name = field.name.as_str();
            if name == "__typename" {
                pending.push((response_key, typename_completion(root_type_name)));
                continue;
            }
            let Some(operation_def) = operations.get(name) else {
                errors.push(GraphQLError::new(
                    ErrorKind::Validation,
                    format!("Cannot query field `{name}` on type `{root_type_name}`"),
                ).at(&field.span));
                continue;
            };
            let owner = format!("{operation_type} {name}");
            pending.push((
                response_key,
                self.execute_field(owner, FieldTarget::Operation(operation_def), fields, path),
            ));
        }

        let (keys, futures): (Vec<_>, Vec<_>) = pending.into_iter().unzip();
        let completions = match operation_type {
            OperationType::Query => future::join_all(futures).await,
            OperationType::Mutation => {
                let mut completions = Vec::with_capacity(futures.len());
                for future in futures {
                    let completion = future.await;
                    let nulled_root = completion.0.is_err();
                    completions.push(completion);
                    if nulled_root {
                        debug!("mutation field nulled the response; skipping later mutations");
                        break;
                    }
                }
                completions
            },
        };

        let (result, field_errors) = assemble_object(keys, completions);
        errors.extend(field_errors);
        match result {
            Ok(data) => (data, errors),
            Err(PropagateNull) => (ResponseValue::Null, errors),
        }
    }

    /// Executes the selection sets of one object-typed field against
    /// `instance`, resolving sibling fields concurrently.
    fn execute_selection_set<'f>(
        &'f self,
        type_def: &'a TypeDefinition,
        instance: ObjectRef,
        selection_sets: &[&'a ast::SelectionSet<'a>],
        path: Vec<PathSegment>,
    ) -> BoxFuture<'f, Completion> {
        let grouped = field_collection::collect_fields(
            self.document,
            type_def.name(),
            selection_sets,
        );
        async move {
            let mut errors = vec![];
            let mut pending = vec![];
            for (response_key, fields) in grouped {
                let field = fields[0];
                let field_path = child_path(&path, PathSegment::Field(response_key.to_string()));
                let name = field.name.as_str();
                if name == "__typename" {
                    pending.push((response_key, typename_completion(type_def.name())));
                    continue;
                }
                let Some(property) = type_def.property(name) else {
                    errors.push(GraphQLError::new(
                        ErrorKind::Validation,
                        format!("Cannot query field `{name}` on type `{}`", type_def.name()),
                    ).at(&field.span));
                    continue;
                };
                let owner = format!("{}.{name}", type_def.name());
                let target = FieldTarget::Property {
                    instance: instance.clone(),
                    property,
                };
                pending.push((
                    response_key,
                    self.execute_field(owner, target, fields, field_path),
                ));
            }

            let (keys, futures): (Vec<_>, Vec<_>) = pending.into_iter().unzip();
            let completions = future::join_all(futures).await;
            let (result, field_errors) = assemble_object(keys, completions);
            errors.extend(field_errors);
            (result, errors)
        }.boxed()
    }
}

fn typename_completion<'f>(type_name: &str) -> BoxFuture<'f, Completion> {
    let value = ResponseValue::Scalar(ScalarValue::String(type_name.to_string()));
    future::ready((Ok(value), vec![])).boxed()
}

/// Builds an object from per-key completions. Any key that propagated null
/// makes the whole object propagate null.
fn assemble_object(keys: Vec<&str>, completions: Vec<Completion>) -> Completion {
    let mut errors = vec![];
    let mut object = IndexMap::with_capacity(keys.len());
    let mut propagate = false;
    for (key, (result, field_errors)) in keys.into_iter().zip(completions) {
        errors.extend(field_errors);
        match result {
            Ok(value) => {
                object.insert(key.to_string(), value);
            },
            Err(PropagateNull) => propagate = true,
        }
    }
    if propagate {
        (Err(PropagateNull), errors)
    } else {
        (Ok(ResponseValue::Object(object)), errors)
    }
}
