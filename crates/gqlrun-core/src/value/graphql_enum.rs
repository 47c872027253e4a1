/// A Rust enum exposed as a GraphQL enum.
///
/// ```
/// use gqlrun_core::value::GraphQLEnum;
///
/// #[derive(Clone, Copy)]
/// enum Episode { NewHope, Empire, Jedi }
///
/// impl GraphQLEnum for Episode {
///     const ENTRIES: &'static [&'static str] = &["NEWHOPE", "EMPIRE", "JEDI"];
///
///     fn entry_name(&self) -> &'static str {
///         Self::ENTRIES[*self as usize]
///     }
/// }
/// ```
pub trait GraphQLEnum {
    /// Every entry name, in declaration order. Suitable for passing straight
    /// to [`SchemaBuilder::register_enum`](crate::SchemaBuilder::register_enum).
    const ENTRIES: &'static [&'static str];

    /// The name of the entry this value represents.
    fn entry_name(&self) -> &'static str;
}
