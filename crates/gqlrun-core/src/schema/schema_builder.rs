use crate::names;
use crate::schema::EnumDefinition;
use crate::schema::OperationBuilder;
use crate::schema::OperationDefinition;
use crate::schema::OperationType;
use crate::schema::Schema;
use crate::schema::TypeBuilder;
use crate::schema::TypeDefinition;
use crate::types::NamedTypeAnnotation;
use crate::types::ScalarKind;
use crate::types::TypeAnnotation;
use crate::types::TypeExpressionError;
use indexmap::IndexMap;
use indexmap::IndexSet;
use std::any::Any;
use std::any::TypeId;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// A type reference recorded while registering a field, argument, or
/// operation, checked for closure by [`SchemaBuilder::build`].
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct RequestedType {
    pub(crate) is_argument: bool,
    pub(crate) referenced_by: String,
    pub(crate) type_annotation: TypeAnnotation,
}

/// Parses `type_expr` against the enums registered so far and records it.
pub(crate) fn request_type(
    enums: &IndexMap<String, EnumDefinition>,
    requested_types: &mut Vec<RequestedType>,
    type_expr: &str,
    referenced_by: String,
    is_argument: bool,
) -> Result<TypeAnnotation> {
    let type_annotation = TypeAnnotation::parse(type_expr, |name| enums.contains_key(name))
        .map_err(|err| SchemaBuildError::InvalidTypeExpression {
            err,
            referenced_by: referenced_by.clone(),
        })?;
    requested_types.push(RequestedType {
        is_argument,
        referenced_by,
        type_annotation: type_annotation.clone(),
    });
    Ok(type_annotation)
}

/// Records argument `name` of `owner` (e.g. `Human.friends`).
pub(crate) fn declare_argument(
    enums: &IndexMap<String, EnumDefinition>,
    arguments: &mut IndexMap<String, TypeAnnotation>,
    requested_types: &mut Vec<RequestedType>,
    owner: &str,
    name: &str,
    type_expr: &str,
) -> Result<()> {
    check_name(name, "argument")?;
    if arguments.contains_key(name) {
        return Err(SchemaBuildError::DuplicateArgumentRegistration {
            argument_name: name.to_string(),
            owner: owner.to_string(),
        });
    }
    let type_annotation = request_type(
        enums,
        requested_types,
        type_expr,
        format!("argument {name} of {owner}"),
        true,
    )?;
    arguments.insert(name.to_string(), type_annotation);
    Ok(())
}

/// Rejects names that are not GraphQL names or that use the reserved `__`
/// prefix.
pub(crate) fn check_name(name: &str, kind: &'static str) -> Result<()> {
    if !names::is_valid_name(name) || names::is_reserved_name(name) {
        return Err(SchemaBuildError::InvalidName {
            kind,
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Utility for building a [`Schema`].
///
/// Registration methods consume and return the builder so registrations
/// chain with `?`:
///
/// ```
/// use gqlrun_core::SchemaBuilder;
///
/// struct Droid { name: String }
///
/// # fn main() -> Result<(), gqlrun_core::SchemaBuildError> {
/// let schema = SchemaBuilder::new()
///     .register_enum("Episode", ["NEWHOPE", "EMPIRE", "JEDI"])?
///     .register_type::<Droid, _>("Droid", |droid| {
///         droid.bind("name", "String!", |d: &Droid| d.name.clone())?;
///         Ok(())
///     })?
///     .register_query("droid", "Droid", |op| {
///         op.resolver(|_ctx| async {
///             Ok::<_, gqlrun_core::FieldError>(gqlrun_core::value::ResolvedValue::object(Droid {
///                 name: "R2-D2".to_string(),
///             }))
///         });
///         Ok(())
///     })?
///     .build()?;
/// assert!(schema.queries().contains_key("droid"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    enums: IndexMap<String, EnumDefinition>,
    mutations: IndexMap<String, OperationDefinition>,
    queries: IndexMap<String, OperationDefinition>,
    requested_types: Vec<RequestedType>,
    types: IndexMap<String, TypeDefinition>,
}

impl SchemaBuilder {
    /// Checks that every recorded type reference resolves, in the order the
    /// references were declared, and produces the immutable [`Schema`].
    pub fn build(self) -> Result<Schema> {
        for requested in &self.requested_types {
            self.check_requested_type(requested)?;
        }

        Ok(Schema {
            enums: self.enums,
            mutations: self.mutations,
            queries: self.queries,
            types: self.types,
        })
    }

    fn check_name_is_free(&self, name: &str) -> Result<()> {
        let conflict =
            if ScalarKind::from_name(name).is_some() {
                Some("built-in scalar")
            } else if self.types.contains_key(name) {
                Some("object type")
            } else if self.enums.contains_key(name) {
                Some("enum")
            } else {
                None
            };
        match conflict {
            Some(existing_kind) => Err(SchemaBuildError::TypeNameConflict {
                existing_kind,
                type_name: name.to_string(),
            }),
            None => Ok(()),
        }
    }

    fn check_requested_type(&self, requested: &RequestedType) -> Result<()> {
        let NamedTypeAnnotation { is_enum, is_scalar, name, .. } =
            requested.type_annotation.innermost_named_type_annotation();
        if *is_scalar || *is_enum {
            return Ok(());
        }

        if self.types.contains_key(name) {
            if requested.is_argument {
                return Err(SchemaBuildError::ObjectTypeAsArgument {
                    referenced_by: requested.referenced_by.clone(),
                    type_name: name.clone(),
                });
            }
            return Ok(());
        }

        if self.enums.contains_key(name) {
            return Err(SchemaBuildError::EnumReferencedBeforeDeclaration {
                enum_name: name.clone(),
                referenced_by: requested.referenced_by.clone(),
            });
        }

        Err(SchemaBuildError::UndefinedType {
            referenced_by: requested.referenced_by.clone(),
            type_name: name.clone(),
        })
    }

    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an enum with the given entry names.
    ///
    /// Enums must be registered before any field, argument, or operation that
    /// refers to them.
    pub fn register_enum<I, S>(mut self, name: &str, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        check_name(name, "enum")?;
        if self.enums.contains_key(name) {
            return Err(SchemaBuildError::DuplicateEnumRegistration {
                enum_name: name.to_string(),
            });
        }
        self.check_name_is_free(name)?;

        let mut entry_set = IndexSet::new();
        for entry in entries {
            let entry = entry.as_ref();
            check_name(entry, "enum entry")?;
            if !entry_set.insert(entry.to_string()) {
                return Err(SchemaBuildError::DuplicateEnumEntry {
                    entry: entry.to_string(),
                    enum_name: name.to_string(),
                });
            }
        }

        self.enums.insert(name.to_string(), EnumDefinition {
            entries: entry_set,
            name: name.to_string(),
            type_annotation: TypeAnnotation::Named(NamedTypeAnnotation {
                is_enum: true,
                is_scalar: false,
                name: name.to_string(),
                nullable: false,
            }),
        });
        Ok(self)
    }

    /// Registers a mutation. See [`SchemaBuilder::register_query`].
    pub fn register_mutation<F>(
        self,
        name: &str,
        type_expr: &str,
        configure: F,
    ) -> Result<Self>
    where
        F: FnOnce(&mut OperationBuilder<'_>) -> Result<()>,
    {
        self.register_operation(OperationType::Mutation, name, type_expr, configure)
    }

    fn register_operation<F>(
        mut self,
        operation_type: OperationType,
        name: &str,
        type_expr: &str,
        configure: F,
    ) -> Result<Self>
    where
        F: FnOnce(&mut OperationBuilder<'_>) -> Result<()>,
    {
        check_name(name, "operation")?;
        let already_registered = match operation_type {
            OperationType::Mutation => self.mutations.contains_key(name),
            OperationType::Query => self.queries.contains_key(name),
        };
        if already_registered {
            return Err(match operation_type {
                OperationType::Mutation => SchemaBuildError::DuplicateMutationRegistration {
                    mutation_name: name.to_string(),
                },
                OperationType::Query => SchemaBuildError::DuplicateQueryRegistration {
                    query_name: name.to_string(),
                },
            });
        }

        let mut requested_types = vec![];
        let type_annotation = request_type(
            &self.enums,
            &mut requested_types,
            type_expr,
            format!("{operation_type} {name}"),
            false,
        )?;
        let mut op_builder = OperationBuilder::new(
            &self.enums,
            operation_type,
            name,
        );
        configure(&mut op_builder)?;
        let op_def = op_builder.finish(type_annotation, &mut requested_types)?;

        self.requested_types.extend(requested_types);
        match operation_type {
            OperationType::Mutation => self.mutations.insert(name.to_string(), op_def),
            OperationType::Query => self.queries.insert(name.to_string(), op_def),
        };
        Ok(self)
    }

    /// Registers a query: a root field resolved without an owning instance.
    /// `configure` declares its arguments, access rule, and resolver.
    pub fn register_query<F>(
        self,
        name: &str,
        type_expr: &str,
        configure: F,
    ) -> Result<Self>
    where
        F: FnOnce(&mut OperationBuilder<'_>) -> Result<()>,
    {
        self.register_operation(OperationType::Query, name, type_expr, configure)
    }

    /// Registers an object type whose instances are Rust values of type `T`.
    /// `configure` declares the type's fields.
    pub fn register_type<T, F>(mut self, name: &str, configure: F) -> Result<Self>
    where
        T: Any + Send + Sync,
        F: FnOnce(&mut TypeBuilder<'_, T>) -> Result<()>,
    {
        check_name(name, "type")?;
        if self.types.contains_key(name) {
            return Err(SchemaBuildError::DuplicateTypeRegistration {
                type_name: name.to_string(),
            });
        }
        self.check_name_is_free(name)?;

        let mut type_builder = TypeBuilder::<T>::new(&self.enums, name);
        configure(&mut type_builder)?;
        let (properties, requested_types) = type_builder.finish();

        self.requested_types.extend(requested_types);
        self.types.insert(name.to_string(), TypeDefinition {
            name: name.to_string(),
            properties,
            rust_type_id: TypeId::of::<T>(),
            rust_type_name: std::any::type_name::<T>(),
            type_annotation: TypeAnnotation::Named(NamedTypeAnnotation {
                is_enum: false,
                is_scalar: false,
                name: name.to_string(),
                nullable: false,
            }),
        });
        Ok(self)
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error("Argument `{argument_name}` of {owner} was declared more than once")]
    DuplicateArgumentRegistration {
        argument_name: String,
        owner: String,
    },

    #[error("Enum `{enum_name}` declares the entry `{entry}` more than once")]
    DuplicateEnumEntry {
        entry: String,
        enum_name: String,
    },

    #[error("Enum `{enum_name}` was registered more than once")]
    DuplicateEnumRegistration {
        enum_name: String,
    },

    #[error("Field `{field_name}` of type `{type_name}` was registered more than once")]
    DuplicateFieldRegistration {
        field_name: String,
        type_name: String,
    },

    #[error("Mutation `{mutation_name}` was registered more than once")]
    DuplicateMutationRegistration {
        mutation_name: String,
    },

    #[error("Query `{query_name}` was registered more than once")]
    DuplicateQueryRegistration {
        query_name: String,
    },

    #[error("Type `{type_name}` was registered more than once")]
    DuplicateTypeRegistration {
        type_name: String,
    },

    #[error(
        "{referenced_by} refers to enum `{enum_name}` before it was \
        registered; register enums before anything that uses them"
    )]
    EnumReferencedBeforeDeclaration {
        enum_name: String,
        referenced_by: String,
    },

    #[error("`{name}` is not a valid {kind} name")]
    InvalidName {
        kind: &'static str,
        name: String,
    },

    #[error("Invalid type for {referenced_by}: {err}")]
    InvalidTypeExpression {
        err: TypeExpressionError,
        referenced_by: String,
    },

    #[error("{owner} has no resolver")]
    MissingResolver {
        owner: String,
    },

    #[error(
        "{referenced_by} has object type `{type_name}`, but arguments must be \
        scalars, enums, or lists of those"
    )]
    ObjectTypeAsArgument {
        referenced_by: String,
        type_name: String,
    },

    #[error("`{type_name}` is already the name of a {existing_kind}")]
    TypeNameConflict {
        existing_kind: &'static str,
        type_name: String,
    },

    #[error("Type `{type_name}` is referenced by {referenced_by} but was never registered")]
    UndefinedType {
        referenced_by: String,
        type_name: String,
    },
}
