use pretty_assertions::assert_eq;
use server::health::health_report;

use crate::common;

#[tokio::test]
async fn test_health_reports_reachable_upstream() {
    let (client, _portal) = common::fake_portal().await;

    let report = health_report(&client).await;

    assert_eq!(report.status, "ok");
    assert_eq!(report.upstream, "reachable (404)");
}

#[tokio::test]
async fn test_health_stays_ok_when_upstream_is_down() {
    let client = common::client_for(&common::dead_origin().await);

    let report = health_report(&client).await;

    assert_eq!(report.status, "ok");
    assert!(report.upstream.starts_with("unreachable"));
}
