use std::collections::{BTreeMap, HashSet};

use neo4rs::query;
use tracing::info;

use trendgraph_common::{parse_media_links, TrendRecord};

use crate::GraphClient;

/// Minimum shared-domain overlap for a RELATED_TO edge.
const STRENGTH_THRESHOLD: f64 = 0.30;

/// Builds weighted RELATED_TO edges between keywords that share publishing
/// domains. Works off the fetched batch, not the graph.
pub struct RelatedKeywordBuilder {
    client: GraphClient,
}

impl RelatedKeywordBuilder {
    pub fn new(client: GraphClient) -> Self {
        Self { client }
    }

    /// Compute pairwise overlaps and write every edge at or above the
    /// threshold in one final transaction. An edge is only created in the
    /// lower-id to higher-id direction; strength is overwritten on re-runs.
    /// Returns the number of edges written.
    pub async fn build_edges(&self, trends: &[TrendRecord]) -> Result<usize, neo4rs::Error> {
        let pairs = related_pairs(trends);
        info!(
            edges = pairs.len(),
            "Computed keyword pairs above threshold {}", STRENGTH_THRESHOLD
        );

        if pairs.is_empty() {
            return Ok(0);
        }

        let mut txn = self.client.graph.start_txn().await?;
        for (id1, id2, strength) in &pairs {
            let q = query(
                "MATCH (k1:Keyword {id: $id1}), (k2:Keyword {id: $id2})
                 MERGE (k1)-[r:RELATED_TO]->(k2)
                 SET r.strength = $strength",
            )
            .param("id1", *id1)
            .param("id2", *id2)
            .param("strength", *strength);
            txn.run(q).await?;
        }
        txn.commit().await?;

        info!(written = pairs.len(), "RELATED_TO edges written");
        Ok(pairs.len())
    }
}

/// Pairwise shared-domain scan over the batch. Each trend's domain set is
/// recomputed from its media_links blob; for each unordered keyword pair
/// (lower id first), strength = |shared| / max(|d1|, |d2|, 1), kept when it
/// reaches the threshold.
///
/// O(n²) in the batch size, which is acceptable for the 1000-row fetch
/// window. Larger batches would want an inverted domain-to-keyword index.
pub fn related_pairs(trends: &[TrendRecord]) -> Vec<(i64, i64, f64)> {
    let mut keyword_domains: BTreeMap<i64, HashSet<String>> = BTreeMap::new();
    for trend in trends {
        let domains = parse_media_links(trend.media_links.as_deref())
            .into_iter()
            .map(|l| l.source)
            .collect();
        keyword_domains.insert(trend.id, domains);
    }

    let mut pairs = Vec::new();
    for (id1, domains1) in &keyword_domains {
        for (id2, domains2) in keyword_domains.range(*id1 + 1..) {
            let shared = domains1.intersection(domains2).count();
            if shared == 0 {
                continue;
            }
            let strength = shared as f64 / domains1.len().max(domains2.len()).max(1) as f64;
            if strength >= STRENGTH_THRESHOLD {
                pairs.push((*id1, *id2, strength));
            }
        }
    }
    pairs
}
