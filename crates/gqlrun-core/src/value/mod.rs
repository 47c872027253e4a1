//! Values flowing through execution: what resolvers return
//! ([`ResolvedValue`]), coerced arguments ([`InputValue`]), and the shaped
//! response tree ([`ResponseValue`]).

mod graphql_enum;
mod input_value;
mod resolved_value;
mod response_value;
mod scalar_value;

pub use graphql_enum::GraphQLEnum;
pub use input_value::FromInputValue;
pub use input_value::InputValue;
pub use resolved_value::ObjectRef;
pub use resolved_value::ResolvedValue;
pub use response_value::ResponseValue;
pub use scalar_value::ScalarValue;
