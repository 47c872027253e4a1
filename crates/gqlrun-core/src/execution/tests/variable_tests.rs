use crate::FieldError;
use crate::ResolverContext;
use crate::Schema;
use crate::SchemaBuildError;
use crate::SchemaRequestContext;
use crate::execution::ErrorKind;
use crate::test::execute_blocking;
use crate::test::star_wars::StarWarsData;
use crate::test::star_wars::star_wars_schema;
use crate::value::InputValue;
use crate::value::ResponseValue;
use crate::value::ScalarValue;
use serde_json::json;
use std::sync::Arc;

type Result<T> = std::result::Result<T, SchemaBuildError>;

fn star_wars() -> Schema {
    star_wars_schema(Arc::new(StarWarsData::new())).expect("fixture schema builds")
}

/// A schema whose `echo` query returns the debug rendering of its `value`
/// argument, declared with `arg_type`.
fn echo_schema(arg_type: &str) -> Result<Schema> {
    Schema::builder()
        .register_enum("Episode", ["NEWHOPE", "EMPIRE", "JEDI"])?
        .register_query("echo", "String", |op| {
            op.argument("value", arg_type)?
                .resolver(|ctx: ResolverContext| {
                    let rendered = ctx.arguments().get("value").map(|value| format!("{value:?}"));
                    async move { Ok::<_, FieldError>(rendered) }
                });
            Ok(())
        })?
        .build()
}

fn echo(schema: &Schema, var_type: &str, variables: serde_json::Value) -> crate::ExecutionResponse {
    let query = format!("query Echo($v: {var_type}) {{ echo(value: $v) }}");
    execute_blocking(schema, &query, variables, SchemaRequestContext::new())
}

fn echoed(response: &crate::ExecutionResponse) -> Option<&str> {
    match response.data.get("echo") {
        Some(ResponseValue::Scalar(ScalarValue::String(s))) => Some(s),
        _ => None,
    }
}

#[test]
fn enum_variable_from_json_string() {
    let schema = star_wars();
    let response = execute_blocking(
        &schema,
        "query Hero($ep: Episode) { hero(episode: $ep) { name } }",
        json!({ "ep": "EMPIRE" }),
        SchemaRequestContext::new(),
    );

    assert_eq!(response.errors, vec![]);
    assert_eq!(response.data.to_json(), json!({ "hero": { "name": "Luke Skywalker" } }));
}

#[test]
fn default_value_applies_when_variable_is_absent() {
    let schema = star_wars();
    let query = "query Hero($ep: Episode = EMPIRE) { hero(episode: $ep) { name } }";

    let defaulted = execute_blocking(&schema, query, json!({}), SchemaRequestContext::new());
    assert_eq!(defaulted.data.to_json(), json!({ "hero": { "name": "Luke Skywalker" } }));

    let supplied = execute_blocking(&schema, query, json!({ "ep": "JEDI" }), SchemaRequestContext::new());
    assert_eq!(supplied.data.to_json(), json!({ "hero": { "name": "R2-D2" } }));
}

#[test]
fn absent_nullable_variable_leaves_the_argument_unset() {
    let schema = star_wars();
    let response = execute_blocking(
        &schema,
        "query Hero($ep: Episode) { hero(episode: $ep) { name } }",
        json!({}),
        SchemaRequestContext::new(),
    );

    assert_eq!(response.errors, vec![]);
    assert_eq!(response.data.to_json(), json!({ "hero": { "name": "R2-D2" } }));
}

#[test]
fn missing_required_variable_rejects_the_request() {
    let schema = star_wars();
    let response = execute_blocking(
        &schema,
        "query Character($id: String!) { character(id: $id) { name } }",
        json!({}),
        SchemaRequestContext::new(),
    );

    assert_eq!(response.data, ResponseValue::Null);
    assert_eq!(response.errors.len(), 1);
    assert_eq!(response.errors[0].kind(), ErrorKind::Validation);
    assert_eq!(
        response.errors[0].message(),
        "Variable `$id` of required type `String!` was not provided",
    );
}

#[test]
fn every_bad_variable_is_reported() {
    let schema = star_wars();
    let response = execute_blocking(
        &schema,
        "query Q($id: String!, $ep: Episode) { character(id: $id) { name } hero(episode: $ep) { name } }",
        json!({ "ep": "PHANTOM" }),
        SchemaRequestContext::new(),
    );

    assert_eq!(response.data, ResponseValue::Null);
    assert_eq!(response.errors.len(), 2);
    assert!(response.errors[1].message().contains("`PHANTOM` is not a member of enum `Episode`"));
}

#[test]
fn object_typed_variables_are_rejected() {
    let schema = star_wars();
    let response = execute_blocking(
        &schema,
        "query Q($c: Character) { hero { name } }",
        json!({}),
        SchemaRequestContext::new(),
    );

    assert_eq!(response.data, ResponseValue::Null);
    assert!(response.errors[0].message().contains("variables must be scalars, enums, or lists"));
}

#[test]
fn null_for_required_argument_via_absent_variable() {
    let schema = star_wars();
    let response = execute_blocking(
        &schema,
        "query Q($id: String) { character(id: $id) { name } }",
        json!({}),
        SchemaRequestContext::new(),
    );

    assert_eq!(response.data.to_json(), json!({ "character": null }));
    assert_eq!(response.errors.len(), 1);
    assert!(response.errors[0].message().contains("variable `$id` was not provided"));
}

mod coercion {
    use super::*;

    #[test]
    fn int_range_is_checked() -> Result<()> {
        let schema = echo_schema("Int")?;

        let ok = echo(&schema, "Int", json!({ "v": 2147483647 }));
        assert_eq!(echoed(&ok), Some(format!("{:?}", InputValue::Scalar(ScalarValue::Int(i32::MAX))).as_str()));

        let too_big = echo(&schema, "Int", json!({ "v": 2147483648i64 }));
        assert_eq!(too_big.data, ResponseValue::Null);
        assert!(too_big.errors[0].message().contains("does not fit in an Int"));

        Ok(())
    }

    #[test]
    fn float_range_is_checked() -> Result<()> {
        let schema = echo_schema("Float")?;

        let ok = echo(&schema, "Float", json!({ "v": 0.5 }));
        assert_eq!(echoed(&ok), Some(format!("{:?}", InputValue::Scalar(ScalarValue::Float(0.5))).as_str()));

        let overflow = echo(&schema, "Float", json!({ "v": 1e300 }));
        assert_eq!(overflow.data, ResponseValue::Null);
        assert!(overflow.errors[0].message().contains("does not fit in a Float"));

        let inexact = echo(&schema, "Float", json!({ "v": 16777217 }));
        assert_eq!(inexact.data, ResponseValue::Null);
        assert!(inexact.errors[0].message().contains("does not fit in a Float"));

        let exact = echo(&schema, "Float", json!({ "v": 16777216 }));
        assert_eq!(
            echoed(&exact),
            Some(format!("{:?}", InputValue::Scalar(ScalarValue::Float(16_777_216.0))).as_str()),
        );

        Ok(())
    }

    #[test]
    fn long_accepts_large_integers() -> Result<()> {
        let schema = echo_schema("Long")?;
        let response = echo(&schema, "Long", json!({ "v": 9007199254740993i64 }));

        let expected = format!("{:?}", InputValue::Scalar(ScalarValue::Long(9007199254740993)));
        assert_eq!(echoed(&response), Some(expected.as_str()));

        Ok(())
    }

    #[test]
    fn double_accepts_integers() -> Result<()> {
        let schema = echo_schema("Double")?;
        let response = echo(&schema, "Double", json!({ "v": 3 }));

        let expected = format!("{:?}", InputValue::Scalar(ScalarValue::Double(3.0)));
        assert_eq!(echoed(&response), Some(expected.as_str()));

        Ok(())
    }

    #[test]
    fn string_rejects_numbers() -> Result<()> {
        let schema = echo_schema("String")?;
        let response = echo(&schema, "String", json!({ "v": 3 }));

        assert_eq!(response.data, ResponseValue::Null);
        assert_eq!(
            response.errors[0].message(),
            "Variable `$v` got an invalid value: expected String, found the integer 3",
        );

        Ok(())
    }

    #[test]
    fn single_value_is_wrapped_for_list_types() -> Result<()> {
        let schema = echo_schema("[Episode!]")?;
        let response = echo(&schema, "[Episode!]", json!({ "v": "JEDI" }));

        let expected = format!("{:?}", InputValue::List(vec![InputValue::Enum("JEDI".to_string())]));
        assert_eq!(echoed(&response), Some(expected.as_str()));

        Ok(())
    }

    #[test]
    fn lists_are_coerced_element_wise() -> Result<()> {
        let schema = echo_schema("[Int]")?;
        let response = echo(&schema, "[Int]", json!({ "v": [1, null, 3] }));

        let expected = format!("{:?}", InputValue::List(vec![
            InputValue::Scalar(ScalarValue::Int(1)),
            InputValue::Null,
            InputValue::Scalar(ScalarValue::Int(3)),
        ]));
        assert_eq!(echoed(&response), Some(expected.as_str()));

        let bad = echo(&schema, "[Int]", json!({ "v": [1, "two"] }));
        assert_eq!(bad.data, ResponseValue::Null);

        Ok(())
    }

    #[test]
    fn null_is_rejected_for_non_null_element_types() -> Result<()> {
        let schema = echo_schema("[Int!]")?;
        let response = echo(&schema, "[Int!]", json!({ "v": [1, null] }));

        assert_eq!(response.data, ResponseValue::Null);
        assert!(response.errors[0].message().contains("found null"));

        Ok(())
    }

    #[test]
    fn literal_lists_and_defaults() -> Result<()> {
        let schema = echo_schema("[Episode]")?;
        let response = execute_blocking(
            &schema,
            "query { echo(value: [NEWHOPE, JEDI]) }",
            json!(null),
            SchemaRequestContext::new(),
        );

        let expected = format!("{:?}", InputValue::List(vec![
            InputValue::Enum("NEWHOPE".to_string()),
            InputValue::Enum("JEDI".to_string()),
        ]));
        assert_eq!(echoed(&response), Some(expected.as_str()));

        Ok(())
    }

    #[test]
    fn variable_substituted_into_a_wider_argument() -> Result<()> {
        let schema = echo_schema("Double")?;
        let response = echo(&schema, "Int", json!({ "v": 4 }));

        let expected = format!("{:?}", InputValue::Scalar(ScalarValue::Double(4.0)));
        assert_eq!(echoed(&response), Some(expected.as_str()));

        Ok(())
    }
}
