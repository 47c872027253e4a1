use crate::Schema;
use crate::SchemaRequestContext;
use crate::execution::ErrorKind;
use crate::execution::ErrorLocation;
use crate::execution::PathSegment;
use crate::test::execute;
use crate::test::execute_blocking;
use crate::test::star_wars::Episode;
use crate::test::star_wars::Principal;
use crate::test::star_wars::StarWarsData;
use crate::test::star_wars::star_wars_schema;
use crate::value::ResponseValue;
use serde_json::json;
use std::sync::Arc;

fn star_wars() -> Schema {
    star_wars_schema(Arc::new(StarWarsData::new())).expect("fixture schema builds")
}

fn run(schema: &Schema, query: &str) -> crate::ExecutionResponse {
    execute_blocking(schema, query, json!(null), SchemaRequestContext::new())
}

mod queries {
    use super::*;

    #[test]
    fn hero_with_nested_friends() {
        let schema = star_wars();
        let response = run(&schema, "query { hero { name friends { name } } }");

        assert_eq!(response.errors, vec![]);
        assert_eq!(response.data.to_json(), json!({
            "hero": {
                "name": "R2-D2",
                "friends": [
                    { "name": "Luke Skywalker" },
                    { "name": "Han Solo" },
                    { "name": "Leia Organa" },
                ],
            },
        }));
    }

    #[test]
    fn enum_argument_and_enum_list_result() {
        let schema = star_wars();
        let response = run(&schema, "{ hero(episode: EMPIRE) { name appearsIn } }");

        assert_eq!(response.errors, vec![]);
        assert_eq!(response.data.to_json(), json!({
            "hero": {
                "name": "Luke Skywalker",
                "appearsIn": ["NEWHOPE", "EMPIRE", "JEDI"],
            },
        }));
        assert_eq!(
            response.data.get("hero").and_then(|hero| hero.get("appearsIn")),
            Some(&ResponseValue::List(vec![
                ResponseValue::Enum("NEWHOPE".to_string()),
                ResponseValue::Enum("EMPIRE".to_string()),
                ResponseValue::Enum("JEDI".to_string()),
            ])),
        );
    }

    #[test]
    fn response_keys_follow_selection_order_and_aliases() {
        let schema = star_wars();
        let response = run(&schema, r#"{
            leia: character(id: "1003") { name homePlanet id }
            luke: character(id: "1000") { id name }
        }"#);

        assert_eq!(response.errors, vec![]);
        let data = response.data.as_object().unwrap();
        assert_eq!(data.keys().collect::<Vec<_>>(), vec!["leia", "luke"]);
        let leia = data["leia"].as_object().unwrap();
        assert_eq!(leia.keys().collect::<Vec<_>>(), vec!["name", "homePlanet", "id"]);
        let luke = data["luke"].as_object().unwrap();
        assert_eq!(luke.keys().collect::<Vec<_>>(), vec!["id", "name"]);
    }

    #[test]
    fn repeated_field_selections_are_merged() {
        let schema = star_wars();
        let response = run(&schema, r#"{
            character(id: "1002") { name }
            character(id: "1002") { id name }
        }"#);

        assert_eq!(response.errors, vec![]);
        assert_eq!(response.data.to_json(), json!({
            "character": { "name": "Han Solo", "id": "1002" },
        }));
    }

    #[test]
    fn nullable_root_field_may_be_null_without_error() {
        let schema = star_wars();
        let response = run(&schema, r#"{ character(id: "9999") { name } }"#);

        assert_eq!(response.errors, vec![]);
        assert_eq!(response.data.to_json(), json!({ "character": null }));
    }

    #[test]
    fn typename_on_root_and_objects() {
        let schema = star_wars();
        let response = run(&schema, "{ __typename hero { __typename name } }");

        assert_eq!(response.errors, vec![]);
        assert_eq!(response.data.to_json(), json!({
            "__typename": "Query",
            "hero": { "__typename": "Character", "name": "R2-D2" },
        }));
    }

    #[test]
    fn property_arguments_reach_the_resolver() {
        let schema = star_wars();
        let response = run(&schema, r#"{
            character(id: "1000") {
                meters: height
                feet: height(unit: FOOT)
            }
        }"#);

        assert_eq!(response.errors, vec![]);
        assert_eq!(response.data.to_json(), json!({
            "character": { "meters": 1.72, "feet": 1.72 / 0.3048 },
        }));
    }

    #[test]
    fn list_of_objects_root_query() {
        let schema = star_wars();
        let response = run(&schema, "{ characters { id } }");

        assert_eq!(response.errors, vec![]);
        let ids = response.data.to_json()["characters"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["id"].as_str().unwrap().to_string())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["1000", "1001", "1002", "1003", "1004", "2000", "2001"]);
    }
}

mod access_rules {
    use super::*;

    #[test]
    fn denied_field_is_null_with_authorization_error() {
        let schema = star_wars();
        let response = run(&schema, r#"{ character(id: "1001") { name secretBackstory } }"#);

        assert_eq!(response.data.to_json(), json!({
            "character": { "name": "Darth Vader", "secretBackstory": null },
        }));
        assert_eq!(response.errors.len(), 1);
        let err = &response.errors[0];
        assert_eq!(err.kind(), ErrorKind::Authorization);
        assert_eq!(err.message(), "Not authorized to access Character.secretBackstory");
        assert_eq!(err.path(), &[
            PathSegment::from("character"),
            PathSegment::from("secretBackstory"),
        ]);
    }

    #[test]
    fn context_data_grants_access() {
        let schema = star_wars();
        let context = SchemaRequestContext::new().with_data(Principal { is_admin: true });
        let response = execute_blocking(
            &schema,
            r#"{ character(id: "1001") { secretBackstory } }"#,
            json!(null),
            context,
        );

        assert_eq!(response.errors, vec![]);
        assert_eq!(response.data.to_json(), json!({
            "character": { "secretBackstory": "Was once Anakin Skywalker" },
        }));
    }

    #[test]
    fn non_admin_principal_is_denied() {
        let schema = star_wars();
        let context = SchemaRequestContext::new().with_data(Principal { is_admin: false });
        let response = execute_blocking(
            &schema,
            r#"{ character(id: "1000") { secretBackstory } }"#,
            json!(null),
            context,
        );

        assert_eq!(response.data.to_json(), json!({
            "character": { "secretBackstory": null },
        }));
        assert_eq!(response.errors[0].kind(), ErrorKind::Authorization);
    }
}

mod validation {
    use super::*;

    #[test]
    fn unknown_field_is_omitted_and_reported_at_its_location() {
        let schema = star_wars();
        let response = run(&schema, "{\n  hero {\n    name\n    nickname\n  }\n}");

        assert_eq!(response.data.to_json(), json!({ "hero": { "name": "R2-D2" } }));
        assert_eq!(response.errors.len(), 1);
        let err = &response.errors[0];
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.message(), "Cannot query field `nickname` on type `Character`");
        assert_eq!(err.locations(), &[ErrorLocation { line: 4, column: 5 }]);
    }

    #[test]
    fn unknown_root_field() {
        let schema = star_wars();
        let response = run(&schema, "{ villain { name } hero { name } }");

        assert_eq!(response.data.to_json(), json!({ "hero": { "name": "R2-D2" } }));
        assert_eq!(response.errors.len(), 1);
        assert_eq!(response.errors[0].message(), "Cannot query field `villain` on type `Query`");
    }

    #[test]
    fn mutation_fields_are_not_queries() {
        let schema = star_wars();
        let response = run(&schema, "{ createReview(episode: JEDI, stars: 1) { stars } }");

        assert_eq!(response.data.to_json(), json!({}));
        assert_eq!(
            response.errors[0].message(),
            "Cannot query field `createReview` on type `Query`",
        );
    }

    #[test]
    fn object_field_without_selection_set() {
        let schema = star_wars();
        let response = run(&schema, r#"{ character(id: "1000") }"#);

        assert_eq!(response.data.to_json(), json!({ "character": null }));
        assert_eq!(response.errors.len(), 1);
        assert_eq!(response.errors[0].kind(), ErrorKind::Validation);
        assert!(response.errors[0].message().contains("must have a selection of subfields"));
    }

    #[test]
    fn leaf_field_with_selection_set_propagates_through_non_null_parents() {
        let schema = star_wars();
        let response = run(&schema, "{ hero { name { length } } }");

        assert_eq!(response.data, ResponseValue::Null);
        assert_eq!(response.errors.len(), 1);
        assert!(response.errors[0].message().contains("must not have a selection of subfields"));
        assert_eq!(response.errors[0].path(), &[
            PathSegment::from("hero"),
            PathSegment::from("name"),
        ]);
    }

    #[test]
    fn unknown_argument() {
        let schema = star_wars();
        let response = run(&schema, r#"{ character(id: "1000", mood: HAPPY) { name } }"#);

        assert_eq!(response.data.to_json(), json!({ "character": null }));
        assert_eq!(response.errors.len(), 1);
        assert_eq!(
            response.errors[0].message(),
            "Unknown argument `mood` on query character",
        );
    }

    #[test]
    fn missing_required_argument() {
        let schema = star_wars();
        let response = run(&schema, "{ character { name } }");

        assert_eq!(response.data.to_json(), json!({ "character": null }));
        assert_eq!(response.errors.len(), 1);
        assert_eq!(
            response.errors[0].message(),
            "Missing required argument `id` of type `String!` on query character",
        );
        assert_eq!(response.errors[0].path(), &[PathSegment::from("character")]);
    }

    #[test]
    fn mistyped_argument_literal() {
        let schema = star_wars();
        let response = run(&schema, "{ character(id: 1000) { name } }");

        assert_eq!(response.data.to_json(), json!({ "character": null }));
        assert_eq!(response.errors.len(), 1);
        assert_eq!(
            response.errors[0].message(),
            "Invalid value for argument `id` of query character: expected String, \
            found the integer 1000",
        );
    }

    #[test]
    fn unknown_enum_entry_argument() {
        let schema = star_wars();
        let response = run(&schema, "{ hero(episode: PHANTOM) { name } }");

        assert_eq!(response.data, ResponseValue::Null);
        assert_eq!(response.errors.len(), 1);
        assert!(response.errors[0].message().contains("`PHANTOM` is not a member of enum `Episode`"));
    }

    #[test]
    fn undeclared_variable() {
        let schema = star_wars();
        let response = run(&schema, "{ character(id: $who) { name } }");

        assert_eq!(response.data.to_json(), json!({ "character": null }));
        assert_eq!(response.errors.len(), 1);
        assert!(response.errors[0].message().contains("variable `$who` is not defined"));
    }
}

mod operations {
    use super::*;

    const TWO_OPERATIONS: &str = r#"
        query Luke { character(id: "1000") { name } }
        query Leia { character(id: "1003") { name } }
    "#;

    #[tokio::test]
    async fn operation_name_selects_the_operation() {
        let schema = star_wars();
        let response = execute(
            &schema,
            TWO_OPERATIONS,
            Some("Leia"),
            json!(null),
            SchemaRequestContext::new(),
        ).await;

        assert_eq!(response.errors, vec![]);
        assert_eq!(response.data.to_json(), json!({ "character": { "name": "Leia Organa" } }));
    }

    #[tokio::test]
    async fn operation_name_is_required_with_several_operations() {
        let schema = star_wars();
        let response = execute(
            &schema,
            TWO_OPERATIONS,
            None,
            json!(null),
            SchemaRequestContext::new(),
        ).await;

        assert_eq!(response.data, ResponseValue::Null);
        assert_eq!(response.errors.len(), 1);
        assert!(response.errors[0].message().contains("operation name is required"));
    }

    #[tokio::test]
    async fn unknown_operation_name() {
        let schema = star_wars();
        let response = execute(
            &schema,
            TWO_OPERATIONS,
            Some("Han"),
            json!(null),
            SchemaRequestContext::new(),
        ).await;

        assert_eq!(response.data, ResponseValue::Null);
        assert_eq!(response.errors[0].message(), "Unknown operation named `Han`");
    }

    #[test]
    fn fragment_only_document_has_no_operation() {
        let schema = star_wars();
        let response = run(&schema, "fragment F on Character { name }");

        assert_eq!(response.data, ResponseValue::Null);
        assert_eq!(
            response.errors[0].message(),
            "The document does not contain any operations",
        );
    }

    #[test]
    fn subscriptions_are_rejected() {
        let schema = star_wars();
        let response = run(&schema, "subscription { hero { name } }");

        assert_eq!(response.data, ResponseValue::Null);
        assert_eq!(response.errors.len(), 1);
        assert_eq!(response.errors[0].kind(), ErrorKind::Validation);
        assert_eq!(response.errors[0].message(), "Subscription operations are not supported");
    }

    #[test]
    fn mutations_run_serially_in_document_order() {
        let data = Arc::new(StarWarsData::new());
        let schema = star_wars_schema(data.clone()).unwrap();
        let response = run(&schema, r#"mutation {
            first: createReview(episode: JEDI, stars: 5, commentary: "Great") {
                stars
                episode
                commentary
            }
            second: createReview(episode: JEDI, stars: 3) { stars commentary }
        }"#);

        assert_eq!(response.errors, vec![]);
        assert_eq!(response.data.to_json(), json!({
            "first": { "stars": 5, "episode": "JEDI", "commentary": "Great" },
            "second": { "stars": 3, "commentary": null },
        }));
        let stored = data.reviews.lock().unwrap();
        assert_eq!(stored.iter().map(|r| r.stars).collect::<Vec<_>>(), vec![5, 3]);
        assert!(stored.iter().all(|r| r.episode == Episode::Jedi));
    }

    #[test]
    fn mutations_are_visible_to_later_queries() {
        let data = Arc::new(StarWarsData::new());
        let schema = star_wars_schema(data).unwrap();
        run(&schema, "mutation { createReview(episode: EMPIRE, stars: 4) { stars } }");

        let response = run(&schema, "{ reviews(episode: EMPIRE) { stars } jedi: reviews(episode: JEDI) { stars } }");

        assert_eq!(response.errors, vec![]);
        assert_eq!(response.data.to_json(), json!({
            "reviews": [{ "stars": 4 }],
            "jedi": [],
        }));
    }
}

#[test]
fn response_serializes_to_data_and_errors() {
    let schema = star_wars();
    let response = run(&schema, r#"{ character(id: "1001") { secretBackstory } }"#);

    assert_eq!(response.to_json(), json!({
        "data": { "character": { "secretBackstory": null } },
        "errors": [{
            "message": "Not authorized to access Character.secretBackstory",
            "locations": [{ "line": 1, "column": 27 }],
            "path": ["character", "secretBackstory"],
        }],
    }));

    let clean = run(&schema, "{ hero { id } }");
    assert_eq!(clean.to_json(), json!({ "data": { "hero": { "id": "2001" } } }));
}
