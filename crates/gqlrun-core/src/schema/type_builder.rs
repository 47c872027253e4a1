use crate::execution::FieldError;
use crate::execution::ResolverContext;
use crate::execution::SchemaRequestContext;
use crate::schema::EnumDefinition;
use crate::schema::PropertyAccessRule;
use crate::schema::PropertyDefinition;
use crate::schema::PropertyResolver;
use crate::schema::SchemaBuildError;
use crate::schema::schema_builder;
use crate::schema::schema_builder::RequestedType;
use crate::types::TypeAnnotation;
use crate::value::ObjectRef;
use crate::value::ResolvedValue;
use futures::FutureExt;
use futures::TryFutureExt;
use futures::future;
use indexmap::IndexMap;
use std::any::Any;
use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;

type Result<T> = std::result::Result<T, SchemaBuildError>;

fn wrong_instance_error<T>(owner: &str) -> FieldError {
    FieldError::new(format!(
        "{owner} was resolved on an instance that is not a `{}`",
        std::any::type_name::<T>(),
    ))
}

/// Declares the fields of an object type whose instances are `T`s. Handed to
/// the configurator passed to
/// [`SchemaBuilder::register_type`](crate::SchemaBuilder::register_type).
pub struct TypeBuilder<'b, T> {
    enums: &'b IndexMap<String, EnumDefinition>,
    properties: IndexMap<String, PropertyDefinition>,
    requested_types: Vec<RequestedType>,
    type_name: String,
    _instance: PhantomData<fn(&T)>,
}

impl<'b, T: Any + Send + Sync> TypeBuilder<'b, T> {
    /// Declares a field whose value is read straight off the instance.
    pub fn bind<R, G>(&mut self, name: &str, type_expr: &str, getter: G) -> Result<&mut Self>
    where
        G: Fn(&T) -> R + Send + Sync + 'static,
        R: Into<ResolvedValue> + 'static,
    {
        self.bind_impl(name, type_expr, getter, None)
    }

    /// Like [`TypeBuilder::bind`], gated by `access_rule`.
    pub fn bind_with<R, G, A>(
        &mut self,
        name: &str,
        type_expr: &str,
        getter: G,
        access_rule: A,
    ) -> Result<&mut Self>
    where
        G: Fn(&T) -> R + Send + Sync + 'static,
        R: Into<ResolvedValue> + 'static,
        A: Fn(&T, &SchemaRequestContext) -> bool + Send + Sync + 'static,
    {
        self.bind_impl(name, type_expr, getter, Some(wrap_access_rule(access_rule)))
    }

    fn bind_impl<R, G>(
        &mut self,
        name: &str,
        type_expr: &str,
        getter: G,
        access_rule: Option<PropertyAccessRule>,
    ) -> Result<&mut Self>
    where
        G: Fn(&T) -> R + Send + Sync + 'static,
        R: Into<ResolvedValue> + 'static,
    {
        let owner = self.check_new_field(name)?;
        let type_annotation = schema_builder::request_type(
            self.enums,
            &mut self.requested_types,
            type_expr,
            owner.clone(),
            false,
        )?;
        let resolver: PropertyResolver = Arc::new(move |instance: ObjectRef, _ctx: ResolverContext| {
            let value = instance
                .downcast_ref::<T>()
                .map(|inst| -> ResolvedValue { getter(inst).into() })
                .ok_or_else(|| wrong_instance_error::<T>(&owner));
            future::ready(value).boxed()
        });
        self.properties.insert(name.to_string(), PropertyDefinition {
            access_rule,
            arguments: IndexMap::new(),
            name: name.to_string(),
            resolver,
            type_annotation,
        });
        Ok(self)
    }

    fn check_new_field(&self, name: &str) -> Result<String> {
        schema_builder::check_name(name, "field")?;
        if self.properties.contains_key(name) {
            return Err(SchemaBuildError::DuplicateFieldRegistration {
                field_name: name.to_string(),
                type_name: self.type_name.clone(),
            });
        }
        Ok(format!("{}.{name}", self.type_name))
    }

    pub(super) fn finish(
        self,
    ) -> (IndexMap<String, PropertyDefinition>, Vec<RequestedType>) {
        (self.properties, self.requested_types)
    }

    pub(super) fn new(
        enums: &'b IndexMap<String, EnumDefinition>,
        type_name: &str,
    ) -> Self {
        Self {
            enums,
            properties: IndexMap::new(),
            requested_types: vec![],
            type_name: type_name.to_string(),
            _instance: PhantomData,
        }
    }

    /// Declares a field computed by an explicit resolver. `configure` must
    /// call [`PropertyBuilder::resolver`] and may declare arguments and an
    /// access rule.
    pub fn property<F>(&mut self, name: &str, type_expr: &str, configure: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut PropertyBuilder<'_, T>) -> Result<()>,
    {
        let owner = self.check_new_field(name)?;
        let type_annotation = schema_builder::request_type(
            self.enums,
            &mut self.requested_types,
            type_expr,
            owner.clone(),
            false,
        )?;

        let mut prop_builder = PropertyBuilder {
            access_rule: None,
            arguments: IndexMap::new(),
            enums: self.enums,
            owner,
            requested_types: &mut self.requested_types,
            resolver: None,
            _instance: PhantomData,
        };
        configure(&mut prop_builder)?;
        let PropertyBuilder { access_rule, arguments, owner, resolver, .. } = prop_builder;
        let resolver = resolver.ok_or(SchemaBuildError::MissingResolver { owner })?;

        self.properties.insert(name.to_string(), PropertyDefinition {
            access_rule,
            arguments,
            name: name.to_string(),
            resolver,
            type_annotation,
        });
        Ok(self)
    }
}

/// Declares the arguments, access rule, and resolver of one field. Handed to
/// the configurator passed to [`TypeBuilder::property`].
pub struct PropertyBuilder<'b, T> {
    access_rule: Option<PropertyAccessRule>,
    arguments: IndexMap<String, TypeAnnotation>,
    enums: &'b IndexMap<String, EnumDefinition>,
    owner: String,
    requested_types: &'b mut Vec<RequestedType>,
    resolver: Option<PropertyResolver>,
    _instance: PhantomData<fn(&T)>,
}

impl<T: Any + Send + Sync> PropertyBuilder<'_, T> {
    /// When `rule` returns `false` the field resolves to `null` with an
    /// authorization error and the resolver is not called.
    pub fn access_rule<A>(&mut self, rule: A) -> &mut Self
    where
        A: Fn(&T, &SchemaRequestContext) -> bool + Send + Sync + 'static,
    {
        self.access_rule = Some(wrap_access_rule(rule));
        self
    }

    /// Declares an argument. Read it in the resolver with
    /// [`ResolverContext::argument`].
    pub fn argument(&mut self, name: &str, type_expr: &str) -> Result<&mut Self> {
        schema_builder::declare_argument(
            self.enums,
            &mut self.arguments,
            self.requested_types,
            &self.owner,
            name,
            type_expr,
        )?;
        Ok(self)
    }

    pub fn resolver<F, Fut, R>(&mut self, resolver: F) -> &mut Self
    where
        F: Fn(Arc<T>, ResolverContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = std::result::Result<R, FieldError>> + Send + 'static,
        R: Into<ResolvedValue> + 'static,
    {
        let owner = self.owner.clone();
        let resolver: PropertyResolver = Arc::new(move |instance: ObjectRef, ctx: ResolverContext| {
            match instance.downcast::<T>() {
                Ok(inst) => resolver(inst, ctx)
                    .map_ok(|value| -> ResolvedValue { value.into() })
                    .boxed(),
                Err(_) => future::ready(Err(wrong_instance_error::<T>(&owner))).boxed(),
            }
        });
        self.resolver = Some(resolver);
        self
    }
}

fn wrap_access_rule<T, A>(rule: A) -> PropertyAccessRule
where
    T: Any + Send + Sync,
    A: Fn(&T, &SchemaRequestContext) -> bool + Send + Sync + 'static,
{
    Arc::new(move |instance: &(dyn Any + Send + Sync), ctx: &SchemaRequestContext| {
        instance.downcast_ref::<T>().is_some_and(|inst| rule(inst, ctx))
    })
}
