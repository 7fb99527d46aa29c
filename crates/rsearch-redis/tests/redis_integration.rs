use redis::Value;
use rsearch_client::{ClientOptions, SearchClient};
use rsearch_core::error::Error;
use rsearch_core::types::{Reply, SchemaField};
use rsearch_redis::{reply_from_value, RedisEngine};

#[test]
fn redis_values_map_to_replies() {
    let value = Value::Bulk(vec![
        Value::Int(1),
        Value::Data(b"doc1".to_vec()),
        Value::Data(b"1".to_vec()),
        Value::Bulk(vec![Value::Data(b"title".to_vec()), Value::Data(b"hello".to_vec())]),
    ]);
    assert_eq!(
        reply_from_value(value),
        Reply::Array(vec![
            Reply::Int(1),
            Reply::Str("doc1".into()),
            Reply::Str("1".into()),
            Reply::Array(vec![Reply::Str("title".into()), Reply::Str("hello".into())]),
        ])
    );
    assert_eq!(reply_from_value(Value::Okay), Reply::Str("OK".into()));
    assert_eq!(reply_from_value(Value::Status("QUEUED".into())), Reply::Str("QUEUED".into()));
    assert_eq!(reply_from_value(Value::Nil), Reply::Nil);
}

#[test]
fn invalid_utf8_data_is_kept_as_bytes() {
    let raw = vec![b'a', 0xff, b'b'];
    assert_eq!(reply_from_value(Value::Data(raw.clone())), Reply::Bytes(raw));
    assert_eq!(reply_from_value(Value::Data("héllo".as_bytes().to_vec())), Reply::Str("héllo".into()));
}

#[tokio::test]
async fn redisearch_round_trip() {
    let redis_url = match std::env::var("REDIS_URL_TEST") {
        Ok(u) => u,
        Err(_) => {
            eprintln!("REDIS_URL_TEST not set; skipping redisearch_round_trip");
            return;
        }
    };
    let engine = RedisEngine::connect(&redis_url).await.expect("connect");
    let client = SearchClient::new(engine, ClientOptions::default());
    let index = format!("rsearch_it_{}", std::process::id());

    client
        .create_index(&index, &[SchemaField::new("title", ["TEXT"]), SchemaField::new("body", ["TEXT"])])
        .await
        .expect("create");
    assert!(client.check_index_exists(&index).await);
    let again = client.create_index(&index, &[SchemaField::new("title", ["TEXT"])]).await;
    assert!(matches!(again, Err(Error::AlreadyExists(_))));

    let tokens: Vec<String> = [index.as_str(), "doc1", "1.0", "FIELDS", "title", "fire starter", "body", "flint and steel"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let echoed = client.add_document(tokens.clone()).await.expect("add");
    assert_eq!(echoed, tokens);

    let result = client.search(&index, &["fire"]).await;
    assert!(result.is_ok(), "{:?}", result.error);
    assert_eq!(result.total_count, Some(1));
    let records = result.records.unwrap_or_default();
    assert_eq!(records[0].id, "doc1");
    assert!(records[0].score.is_some());
    assert_eq!(records[0].get("title"), Some("fire starter"));
}
