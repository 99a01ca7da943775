//! Typed request/response helpers
//!
//! Encode an input, dispatch it through the [`SessionClient`], decode the
//! body into the caller's result type. Session errors pass through as-is.

use crate::{
    Error, Result,
    session::{SessionClient, client::decode_body},
    transport::Transport,
};
use serde::{Serialize, de::DeserializeOwned};

/// POST `input` as JSON to `path` and decode the response as `R`.
pub async fn post_and_decode<R, I, T>(client: &SessionClient<T>, path: &str, input: &I) -> Result<R>
where
    R: DeserializeOwned,
    I: Serialize + ?Sized,
    T: Transport,
{
    let body = serde_json::to_vec(input).map_err(Error::Serialization)?;
    let data = client.post(path, body).await?;
    decode_body(&data)
}

/// GET `path` with `query` and decode the response as `R`.
pub async fn get_and_decode<R, T>(
    client: &SessionClient<T>,
    path: &str,
    query: &[(&str, String)],
) -> Result<R>
where
    R: DeserializeOwned,
    T: Transport,
{
    let data = client.get(path, query).await?;
    decode_body(&data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::mock::RecordingTransport;
    use serde::Deserialize;
    use serde_json::json;
    use std::collections::BTreeMap;
    use std::sync::Arc;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Echo {
        id: u32,
    }

    fn client() -> (Arc<RecordingTransport>, SessionClient<Arc<RecordingTransport>>) {
        let transport = Arc::new(RecordingTransport::new());
        let client = SessionClient::new("http://localhost/api/v1/", Arc::clone(&transport)).unwrap();
        (transport, client)
    }

    #[tokio::test]
    async fn test_post_and_decode() {
        let (transport, client) = client();
        transport.push_json(201, json!({"id": 9}));

        let out: Echo = post_and_decode(&client, "things.json", &json!({"name": "x"}))
            .await
            .unwrap();
        assert_eq!(out, Echo { id: 9 });

        let sent: serde_json::Value =
            serde_json::from_slice(transport.last_request().body.as_ref().unwrap()).unwrap();
        assert_eq!(sent, json!({"name": "x"}));
    }

    #[tokio::test]
    async fn test_get_and_decode_shape_mismatch() {
        let (transport, client) = client();
        transport.push_json(200, json!({"id": "nine"}));

        let err = get_and_decode::<Echo, _>(&client, "things.json", &[])
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Deserialization { ref path, .. } if path == "id"));
    }

    #[tokio::test]
    async fn test_get_and_decode_not_json() {
        let (transport, client) = client();
        transport.push_json(200, json!("<html>"));

        let err = get_and_decode::<Echo, _>(&client, "things.json", &[])
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Deserialization { .. }));
    }

    #[tokio::test]
    async fn test_serialization_failure_sends_nothing() {
        let (transport, client) = client();

        // Map keys must be strings in JSON.
        let mut input = BTreeMap::new();
        input.insert(vec![1u8], 1u8);

        let err = post_and_decode::<Echo, _, _>(&client, "things.json", &input)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_status_error_not_rewrapped() {
        let (transport, client) = client();
        transport.push_status(503);

        let err = get_and_decode::<Echo, _>(&client, "things.json", &[])
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Request { status: 503, .. }));
    }
}
