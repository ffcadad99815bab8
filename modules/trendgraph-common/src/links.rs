use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::types::MediaLink;

// Labels are the Polish ones the upstream feed emits, matched
// case-insensitively.
static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)-\s*tytuł:\s*(.+)").unwrap());
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)-\s*Link:\s*(https?://\S+)").unwrap());

/// Parse the media_links blob of a trend row into article references.
///
/// Entries are separated by blank lines; each needs both a title line and a
/// link line. Entries missing either, or with an unparseable URL, are
/// silently dropped. Empty or absent input yields an empty vec.
pub fn parse_media_links(blob: Option<&str>) -> Vec<MediaLink> {
    let Some(text) = blob else {
        return Vec::new();
    };

    let mut links = Vec::new();
    for entry in text.trim().split("\n\n") {
        let (Some(title), Some(link)) = (TITLE_RE.captures(entry), LINK_RE.captures(entry))
        else {
            continue;
        };

        let url = link[1].to_string();
        let Some(source) = source_domain(&url) else {
            continue;
        };

        links.push(MediaLink {
            title: title[1].trim().to_string(),
            url,
            source,
        });
    }
    links
}

/// Publishing domain of a URL: lowercased host, leading "www." stripped.
fn source_domain(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?.to_ascii_lowercase();
    Some(host.strip_prefix("www.").unwrap_or(&host).to_string())
}
