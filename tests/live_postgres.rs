//! Live integration tests against a real PostgreSQL server.
//!
//! Skipped unless `PG_GATEWAY_TEST_URL` is set to a reachable database URL.
//! The target server must accept TLS connections; the gateway refuses to
//! connect without transport encryption.

use pg_gateway::prelude::*;
use pg_gateway::Page;

fn test_url() -> Option<String> {
    std::env::var("PG_GATEWAY_TEST_URL").ok()
}

#[tokio::test]
async fn statement_round_trip() {
    let Some(url) = test_url() else {
        eprintln!("PG_GATEWAY_TEST_URL not set; skipping live test");
        return;
    };

    let config = GatewayConfig::from_url(&url).unwrap();
    let gateway = StatementGateway::connect(&config).unwrap();

    gateway
        .execute_schema_change(
            "CREATE TABLE IF NOT EXISTS gateway_smoke (id BIGINT PRIMARY KEY, name TEXT)",
            vec![],
        )
        .await
        .unwrap();

    let affected = gateway
        .execute_mutation(
            "INSERT INTO gateway_smoke (id, name) VALUES ($1, $2)",
            vec![1i64.into(), "one".into()],
        )
        .await
        .unwrap();
    assert_eq!(affected, 1);

    let rows = gateway
        .execute_query(
            "SELECT id, name FROM gateway_smoke WHERE id = $1",
            vec![1i64.into()],
            None,
        )
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    let name: String = rows[0].get_value("name").unwrap();
    assert_eq!(name, "one");

    let page = gateway
        .execute_query(
            "SELECT id, name FROM gateway_smoke ORDER BY id",
            vec![],
            Some(Page::first(5)),
        )
        .await
        .unwrap();
    assert!(page.len() <= 5);

    gateway
        .execute_schema_change("DROP TABLE gateway_smoke", vec![])
        .await
        .unwrap();

    gateway.shutdown().await.unwrap();
}

#[tokio::test]
async fn post_shutdown_execution_reports_pool_closed() {
    let Some(url) = test_url() else {
        eprintln!("PG_GATEWAY_TEST_URL not set; skipping live test");
        return;
    };

    let config = GatewayConfig::from_url(&url).unwrap();
    let gateway = StatementGateway::connect(&config).unwrap();

    gateway.shutdown().await.unwrap();

    let err = gateway
        .execute_query("SELECT 1", vec![], None)
        .await
        .unwrap_err();
    assert!(err.is_driver());
}
