use crate::FieldError;
use crate::ResolverContext;
use crate::Schema;
use crate::SchemaRequestContext;
use crate::test::execute_blocking;
use crate::test::star_wars::StarWarsData;
use crate::test::star_wars::star_wars_schema;
use futures::channel::oneshot;
use rayon::prelude::*;
use serde_json::json;
use std::sync::Arc;
use std::sync::Mutex;

#[test]
fn schema_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Schema>();
}

#[test]
fn concurrent_requests_share_one_schema() {
    let schema = star_wars_schema(Arc::new(StarWarsData::new())).unwrap();
    let expected = execute_blocking(
        &schema,
        "{ hero { name friends { name appearsIn } } }",
        json!(null),
        SchemaRequestContext::new(),
    );

    let responses = (0..64)
        .into_par_iter()
        .map(|i| {
            let query = if i % 2 == 0 {
                "{ hero { name friends { name appearsIn } } }"
            } else {
                r#"{ character(id: "1003") { name homePlanet } }"#
            };
            (i, execute_blocking(&schema, query, json!(null), SchemaRequestContext::new()))
        })
        .collect::<Vec<_>>();

    for (i, response) in responses {
        assert_eq!(response.errors, vec![]);
        if i % 2 == 0 {
            assert_eq!(response, expected);
        } else {
            assert_eq!(response.data.to_json(), json!({
                "character": { "name": "Leia Organa", "homePlanet": "Alderaan" },
            }));
        }
    }
}

/// `waiter` only finishes once `signaller` has run, so this completes only
/// if sibling fields are resolved concurrently.
#[test]
fn sibling_fields_resolve_concurrently() {
    let (sender, receiver) = oneshot::channel::<&'static str>();
    let sender = Arc::new(Mutex::new(Some(sender)));
    let receiver = Arc::new(Mutex::new(Some(receiver)));

    let schema = Schema::builder()
        .register_query("waiter", "String", move |op| {
            op.resolver(move |_ctx: ResolverContext| {
                let receiver = receiver.lock().unwrap().take();
                async move {
                    let receiver = receiver.ok_or_else(|| FieldError::new("already waited"))?;
                    receiver.await.map_err(|_| FieldError::new("signaller went away"))
                }
            });
            Ok(())
        })
        .unwrap()
        .register_query("signaller", "String", move |op| {
            op.resolver(move |_ctx: ResolverContext| {
                let sent = sender
                    .lock()
                    .unwrap()
                    .take()
                    .map(|sender| sender.send("go").is_ok());
                async move { Ok::<_, FieldError>(sent.map(|ok| if ok { "sent" } else { "dropped" })) }
            });
            Ok(())
        })
        .unwrap()
        .build()
        .unwrap();

    let response = execute_blocking(
        &schema,
        "{ waiter signaller }",
        json!(null),
        SchemaRequestContext::new(),
    );

    assert_eq!(response.errors, vec![]);
    assert_eq!(response.data.to_json(), json!({ "waiter": "go", "signaller": "sent" }));
}
