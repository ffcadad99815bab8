use neo4rs::{query, Txn};

use trendgraph_common::{ids, parse_media_links, TrendRecord};

use crate::GraphClient;

/// Write-side wrapper for the graph. Used by the sync binary only.
pub struct GraphWriter {
    client: GraphClient,
}

/// Aggregate node counts, logged at the end of a sync run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GraphStats {
    pub keywords: i64,
    pub articles: i64,
    pub domains: i64,
    pub snapshots: i64,
}

impl GraphWriter {
    pub fn new(client: GraphClient) -> Self {
        Self { client }
    }

    /// Sync one trend inside a single transaction: keyword node, dated
    /// snapshot, and every parseable article with its publishing domain.
    /// A failed write rolls the whole record back and propagates.
    /// Returns the number of articles written.
    pub async fn sync_trend(
        &self,
        trend: &TrendRecord,
        today: &str,
    ) -> Result<usize, neo4rs::Error> {
        let mut txn = self.client.graph.start_txn().await?;
        self.upsert_keyword(&mut txn, trend).await?;
        self.upsert_snapshot(&mut txn, trend, today).await?;
        let articles = self.upsert_articles(&mut txn, trend).await?;
        txn.commit().await?;
        Ok(articles)
    }

    /// Create or update the Keyword node. Attributes are overwritten on
    /// every run, not accumulated.
    pub async fn upsert_keyword(
        &self,
        txn: &mut Txn,
        trend: &TrendRecord,
    ) -> Result<(), neo4rs::Error> {
        let q = query(
            "MERGE (k:Keyword {id: $id})
             SET k.name = $name,
                 k.search_volume = $search_volume,
                 k.traffic = $traffic",
        )
        .param("id", trend.id)
        .param("name", trend.keyword.as_str())
        .param("search_volume", trend.search_volume())
        .param("traffic", trend.traffic_label());

        txn.run(q).await
    }

    /// Create the day's TrendSnapshot and link it to its Keyword. Snapshot
    /// identity is keyword id + calendar day, so a re-run on the same day
    /// overwrites one node instead of stacking new ones.
    pub async fn upsert_snapshot(
        &self,
        txn: &mut Txn,
        trend: &TrendRecord,
        today: &str,
    ) -> Result<(), neo4rs::Error> {
        let date = trend.snapshot_date(today);
        let snapshot_id = ids::snapshot_id(trend.id, &date);

        let q = query(
            "MATCH (k:Keyword {id: $keyword_id})
             MERGE (t:TrendSnapshot {id: $snapshot_id})
             SET t.date = date($date),
                 t.search_volume = $search_volume,
                 t.traffic = $traffic
             MERGE (k)-[:HAS_TREND {date: date($date)}]->(t)",
        )
        .param("keyword_id", trend.id)
        .param("snapshot_id", snapshot_id)
        .param("date", date)
        .param("search_volume", trend.search_volume())
        .param("traffic", trend.traffic_label());

        txn.run(q).await
    }

    /// Create Article and Domain nodes for every parseable media link and
    /// wire them to the Keyword. Domain.article_count counts every processed
    /// article, including re-observations of an existing PUBLISHED_ON edge.
    pub async fn upsert_articles(
        &self,
        txn: &mut Txn,
        trend: &TrendRecord,
    ) -> Result<usize, neo4rs::Error> {
        let links = parse_media_links(trend.media_links.as_deref());

        for link in &links {
            let article_id = ids::article_id(&link.url);

            let article_q = query(
                "MERGE (a:Article {id: $id})
                 SET a.title = $title,
                     a.url = $url
                 WITH a
                 MATCH (k:Keyword {id: $keyword_id})
                 MERGE (k)-[:HAS_ARTICLE {relevance: 1.0}]->(a)",
            )
            .param("id", article_id.as_str())
            .param("title", link.title.as_str())
            .param("url", link.url.as_str())
            .param("keyword_id", trend.id);

            txn.run(article_q).await?;

            let domain_q = query(
                "MERGE (d:Domain {name: $domain})
                 ON CREATE SET d.article_count = 1
                 ON MATCH SET d.article_count = d.article_count + 1
                 WITH d
                 MATCH (a:Article {id: $article_id})
                 MERGE (a)-[:PUBLISHED_ON]->(d)",
            )
            .param("domain", link.source.as_str())
            .param("article_id", article_id.as_str());

            txn.run(domain_q).await?;
        }

        Ok(links.len())
    }

    /// Aggregate node counts for the summary block.
    pub async fn stats(&self) -> Result<GraphStats, neo4rs::Error> {
        let q = query(
            "MATCH (k:Keyword) WITH count(k) AS keywords
             MATCH (a:Article) WITH keywords, count(a) AS articles
             MATCH (d:Domain) WITH keywords, articles, count(d) AS domains
             MATCH (t:TrendSnapshot)
             RETURN keywords, articles, domains, count(t) AS snapshots",
        );

        let mut stream = self.client.graph.execute(q).await?;
        let mut stats = GraphStats::default();
        if let Some(row) = stream.next().await? {
            stats.keywords = row.get("keywords").unwrap_or(0);
            stats.articles = row.get("articles").unwrap_or(0);
            stats.domains = row.get("domains").unwrap_or(0);
            stats.snapshots = row.get("snapshots").unwrap_or(0);
        }
        Ok(stats)
    }
}
