#![cfg(feature = "test-utils")]

// End-to-end sync integration tests against a real Neo4j.
//
// Requirements: Docker (for Neo4j via testcontainers)
//
// Run with: cargo test -p trendgraph-graph --features test-utils --test sync_flow_test

use trendgraph_common::{ids, TrendRecord};
use trendgraph_graph::{ensure_constraints, GraphWriter, RelatedKeywordBuilder};

fn ai_trend() -> TrendRecord {
    TrendRecord {
        id: 42,
        keyword: "ai".to_string(),
        approx_traffic: Some(50),
        pub_date: Some("2024-03-01T08:00:00Z".to_string()),
        media_links: Some("- tytuł: AI breakthrough\n - Link: https://www.example.com/a".to_string()),
    }
}

#[tokio::test]
async fn sync_produces_expected_graph() {
    let (_container, client) = trendgraph_graph::testutil::neo4j_container().await;
    ensure_constraints(&client).await;

    let writer = GraphWriter::new(client.clone());
    let trend = ai_trend();
    let articles = writer.sync_trend(&trend, "2024-03-05").await.expect("sync");
    assert_eq!(articles, 1);

    let stats = writer.stats().await.expect("stats");
    assert_eq!(stats.keywords, 1);
    assert_eq!(stats.articles, 1);
    assert_eq!(stats.domains, 1);
    assert_eq!(stats.snapshots, 1);

    // Snapshot is pinned to the pub_date day, article to its URL hash,
    // domain to the www-stripped host.
    let q = neo4rs::query(
        "MATCH (k:Keyword {id: 42})-[:HAS_TREND]->(t:TrendSnapshot)
         MATCH (k)-[:HAS_ARTICLE]->(a:Article)-[:PUBLISHED_ON]->(d:Domain)
         RETURN t.id AS tid, a.id AS aid, d.name AS dname, d.article_count AS count",
    );
    let mut stream = client.inner().execute(q).await.expect("query");
    let row = stream.next().await.expect("stream").expect("row");
    assert_eq!(row.get::<String>("tid").expect("tid"), "42_2024-03-01");
    assert_eq!(
        row.get::<String>("aid").expect("aid"),
        ids::article_id("https://www.example.com/a")
    );
    assert_eq!(row.get::<String>("dname").expect("dname"), "example.com");
    assert_eq!(row.get::<i64>("count").expect("count"), 1);
}

#[tokio::test]
async fn rerun_is_idempotent_except_article_count() {
    let (_container, client) = trendgraph_graph::testutil::neo4j_container().await;
    ensure_constraints(&client).await;

    let writer = GraphWriter::new(client.clone());
    let trend = ai_trend();
    writer.sync_trend(&trend, "2024-03-05").await.expect("first sync");
    let first = writer.stats().await.expect("stats");

    writer.sync_trend(&trend, "2024-03-05").await.expect("second sync");
    let second = writer.stats().await.expect("stats");

    // No duplicate nodes on a re-run...
    assert_eq!(second, first);

    // ...but the domain counter accumulates on every observation.
    let q = neo4rs::query("MATCH (d:Domain {name: 'example.com'}) RETURN d.article_count AS count");
    let mut stream = client.inner().execute(q).await.expect("query");
    let row = stream.next().await.expect("stream").expect("row");
    assert_eq!(row.get::<i64>("count").expect("count"), 2);
}

#[tokio::test]
async fn related_keywords_get_weighted_edge() {
    let (_container, client) = trendgraph_graph::testutil::neo4j_container().await;
    ensure_constraints(&client).await;

    let writer = GraphWriter::new(client.clone());
    let trends = vec![
        TrendRecord {
            id: 1,
            keyword: "rust".to_string(),
            approx_traffic: Some(10),
            pub_date: Some("2024-03-01T00:00:00Z".to_string()),
            media_links: Some("- tytuł: One\n - Link: https://shared.example.com/1".to_string()),
        },
        TrendRecord {
            id: 2,
            keyword: "cargo".to_string(),
            approx_traffic: Some(20),
            pub_date: Some("2024-03-01T00:00:00Z".to_string()),
            media_links: Some("- tytuł: Two\n - Link: https://shared.example.com/2".to_string()),
        },
    ];
    for trend in &trends {
        writer.sync_trend(trend, "2024-03-05").await.expect("sync");
    }

    let related = RelatedKeywordBuilder::new(client.clone());
    let edges = related.build_edges(&trends).await.expect("build edges");
    assert_eq!(edges, 1);

    let q = neo4rs::query(
        "MATCH (:Keyword {id: 1})-[r:RELATED_TO]->(:Keyword {id: 2})
         RETURN r.strength AS strength",
    );
    let mut stream = client.inner().execute(q).await.expect("query");
    let row = stream.next().await.expect("stream").expect("row");
    assert_eq!(row.get::<f64>("strength").expect("strength"), 1.0);
}
