use crate::response::Response;
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use std::fmt::Debug;
use tracing::{debug, info};

/// Produces the fixed greeting response.
/// The event and the context are only logged, never read, so any value is accepted.
pub fn handle<E, C>(event: &E, ctx: &C) -> Result<Response, Error>
where
    E: ?Sized + Debug,
    C: ?Sized + Debug,
{
    debug!("Event: {:?}", event);
    debug!("Context: {:?}", ctx);

    Response::greeting()
}

/// The handler passed to `lambda_runtime::run`.
/// The payload is taken as raw JSON so that any event shape, including `null`, deserializes.
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Response, Error> {
    let (event, ctx) = event.into_parts();

    info!("Handler invoked, request ID: {}", ctx.request_id);

    handle(&event, &ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lambda_runtime::Context;
    use serde_json::json;

    const EXPECTED_BODY: &str = r#"{"message": "deploy the image from ECR through lambda", "version": "1.0"}"#;

    #[test]
    fn empty_event_no_context() {
        let resp = handle(&json!({}), &None::<Value>).unwrap();
        assert_eq!(resp.status_code, 200);
        assert_eq!(resp.body, EXPECTED_BODY);
    }

    #[test]
    fn inputs_do_not_change_output() {
        let baseline = handle(&json!({}), &None::<Value>).unwrap();

        let events = [
            json!({"unexpectedKey": 12345}),
            Value::Null,
            json!({"a": {"b": {"c": [1, 2, {"d": "e"}]}}}),
            json!("not a map"),
        ];

        for event in events.iter() {
            let resp = handle(event, &json!({"arbitrary": "metadata"})).unwrap();
            assert_eq!(resp, baseline, "event: {event}");
        }

        // no event at all
        assert_eq!(handle(&(), &()).unwrap(), baseline);
    }

    #[tokio::test]
    async fn lambda_event_is_answered_with_greeting() {
        let event = LambdaEvent::new(json!({"unexpectedKey": 12345}), Context::default());
        let resp = function_handler(event).await.unwrap();

        assert_eq!(resp.status_code, 200);
        assert_eq!(resp.body, EXPECTED_BODY);
    }
}
