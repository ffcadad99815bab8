use neo4rs::query;
use tracing::{info, warn};

use crate::GraphClient;

/// Uniqueness constraints pinning the four node identities.
const CONSTRAINTS: [&str; 4] = [
    "CREATE CONSTRAINT keyword_id IF NOT EXISTS FOR (k:Keyword) REQUIRE k.id IS UNIQUE",
    "CREATE CONSTRAINT article_id IF NOT EXISTS FOR (a:Article) REQUIRE a.id IS UNIQUE",
    "CREATE CONSTRAINT domain_name IF NOT EXISTS FOR (d:Domain) REQUIRE d.name IS UNIQUE",
    "CREATE CONSTRAINT snapshot_id IF NOT EXISTS FOR (t:TrendSnapshot) REQUIRE t.id IS UNIQUE",
];

/// Ensure uniqueness constraints exist. Safe to re-run on every startup.
/// Constraint creation is never fatal: "already exists" is skipped quietly,
/// anything else is logged at warn and skipped.
pub async fn ensure_constraints(client: &GraphClient) {
    let g = &client.graph;

    for c in &CONSTRAINTS {
        match g.run(query(c)).await {
            Ok(_) => {
                info!("Ensured constraint: {}", c.chars().take(60).collect::<String>());
            }
            Err(e) => {
                let msg = e.to_string().to_lowercase();
                if msg.contains("already exists") || msg.contains("equivalent") {
                    continue;
                }
                warn!("Constraint creation failed (non-fatal): {e}");
            }
        }
    }
}
