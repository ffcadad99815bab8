use anyhow::Result;
use chrono::Utc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use supabase_client::SupabaseClient;
use trendgraph_common::{Config, TrendRecord};
use trendgraph_graph::{ensure_constraints, GraphClient, GraphWriter, RelatedKeywordBuilder};

/// Upstream table holding trend rows.
const TRENDS_TABLE: &str = "rrs_google_trends";

/// Bounded fetch window: every run re-derives full state from this many
/// newest rows.
const FETCH_LIMIT: u32 = 1000;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    info!("Trend graph sync starting...");

    let config = Config::from_env();

    let supabase = SupabaseClient::new(&config.supabase_url, &config.supabase_key);
    let client = GraphClient::connect(
        &config.neo4j_uri,
        &config.neo4j_user,
        &config.neo4j_password,
        &config.neo4j_database,
    )
    .await?;

    ensure_constraints(&client).await;

    info!(limit = FETCH_LIMIT, "Fetching trends from Supabase...");
    let trends: Vec<TrendRecord> = supabase
        .select_recent(TRENDS_TABLE, "created_at", FETCH_LIMIT)
        .await?;

    if trends.is_empty() {
        info!("No trends found. Exiting.");
        return Ok(());
    }

    // Each trend is one transaction: keyword + snapshot + articles commit
    // atomically, and a write failure aborts the run.
    let today = Utc::now().format("%Y-%m-%d").to_string();
    let writer = GraphWriter::new(client.clone());

    let mut articles_written = 0usize;
    for (i, trend) in trends.iter().enumerate() {
        articles_written += writer.sync_trend(trend, &today).await?;
        if (i + 1) % 100 == 0 {
            info!("Processed {}/{} trends...", i + 1, trends.len());
        }
    }
    info!(
        trends = trends.len(),
        articles = articles_written,
        "Trend sync complete"
    );

    let related = RelatedKeywordBuilder::new(client.clone());
    related.build_edges(&trends).await?;

    let stats = writer.stats().await?;
    info!(
        keywords = stats.keywords,
        articles = stats.articles,
        domains = stats.domains,
        snapshots = stats.snapshots,
        "Graph statistics"
    );

    Ok(())
}
