//! Client for the iFixit 2.0 API.
//!
//! Two operations: device suggestions for a free-text query, and guide
//! retrieval for a device or guide URL. Both return [`GuideDocument`]s with
//! the text flattened so the extraction patterns can run over it. Every call
//! can fail individually; the search driver logs and continues past failed
//! sub-queries.

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::config::IfixitConfig;
use crate::models::GuideDocument;

/// Minimum plausible length for a device URL.
const MIN_URL_LEN: usize = 25;

/// Validate a device URL against the configured iFixit origin.
pub fn validate_device_url(config: &IfixitConfig, url: &str) -> bool {
    let prefix = format!("{}/", config.base_url.trim_end_matches('/'));
    url.starts_with(&prefix) && url.len() >= MIN_URL_LEN.min(prefix.len() + 1)
}

// ─── Suggest endpoint ────────────────────────────────────

#[derive(Deserialize)]
struct SuggestResponse {
    results: Vec<SuggestResult>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct SuggestResult {
    title: String,
    url: String,
    summary: Option<String>,
}

/// Search for devices matching `query`.
///
/// GET `{base}/api/2.0/suggest/{query}?doctypes=device`
pub async fn load_suggestions(
    client: &reqwest::Client,
    config: &IfixitConfig,
    query: &str,
) -> Result<Vec<GuideDocument>> {
    let url = format!(
        "{}/api/2.0/suggest/{}?doctypes=device",
        config.base_url.trim_end_matches('/'),
        urlencoding::encode(query)
    );

    let resp = client
        .get(&url)
        .timeout(std::time::Duration::from_secs(config.timeout_secs))
        .send()
        .await
        .with_context(|| format!("Failed to reach iFixit suggest API for '{query}'"))?;

    if !resp.status().is_success() {
        let status = resp.status();
        anyhow::bail!("iFixit suggest API returned {status} for '{query}'");
    }

    let body: SuggestResponse = resp
        .json()
        .await
        .context("Failed to parse iFixit suggest response")?;

    Ok(body
        .results
        .into_iter()
        .map(|r| GuideDocument {
            content: r.summary.unwrap_or_else(|| r.title.clone()),
            title: r.title,
            source: absolute_url(config, &r.url),
            relevance_score: None,
        })
        .collect())
}

// ─── Guide retrieval ─────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(default)]
struct GuideBody {
    title: String,
    url: String,
    introduction_raw: String,
    conclusion_raw: String,
    steps: Vec<GuideStep>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct GuideStep {
    orderby: u32,
    lines: Vec<GuideLine>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct GuideLine {
    text_raw: String,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct CategoryWiki {
    guides: Vec<CategoryGuideRef>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct CategoryGuideRef {
    guideid: u64,
}

/// Load repair guides for a device or guide URL.
///
/// `/Guide/` and `/Teardown/` URLs resolve to a single guide by trailing id;
/// `/Device/` URLs resolve through the category wiki to its listed guides,
/// bounded by `max_guides_per_device`.
pub async fn load_guides(
    client: &reqwest::Client,
    config: &IfixitConfig,
    device_url: &str,
) -> Result<Vec<GuideDocument>> {
    let path = device_url
        .strip_prefix(config.base_url.trim_end_matches('/'))
        .unwrap_or(device_url);

    if path.starts_with("/Guide/") || path.starts_with("/Teardown/") {
        let id = path
            .rsplit('/')
            .find(|seg| !seg.is_empty() && seg.chars().all(|c| c.is_ascii_digit()))
            .with_context(|| format!("No guide id in URL: {device_url}"))?;
        let guide = fetch_guide(client, config, id).await?;
        return Ok(vec![guide]);
    }

    if let Some(device) = path.strip_prefix("/Device/") {
        let device = device.trim_end_matches('/');
        let ids = fetch_device_guide_ids(client, config, device).await?;

        let mut guides = Vec::new();
        for id in ids.iter().take(config.max_guides_per_device) {
            match fetch_guide(client, config, &id.to_string()).await {
                Ok(guide) => guides.push(guide),
                Err(e) => {
                    tracing::warn!("Skipping guide {id} for device '{device}': {e:#}");
                }
            }
        }
        return Ok(guides);
    }

    anyhow::bail!("Unsupported iFixit URL shape: {device_url}")
}

async fn fetch_device_guide_ids(
    client: &reqwest::Client,
    config: &IfixitConfig,
    device: &str,
) -> Result<Vec<u64>> {
    let url = format!(
        "{}/api/2.0/wikis/CATEGORY/{}",
        config.base_url.trim_end_matches('/'),
        urlencoding::encode(device)
    );

    let resp = client
        .get(&url)
        .timeout(std::time::Duration::from_secs(config.timeout_secs))
        .send()
        .await
        .with_context(|| format!("Failed to reach iFixit wiki API for device '{device}'"))?;

    if !resp.status().is_success() {
        let status = resp.status();
        anyhow::bail!("iFixit wiki API returned {status} for device '{device}'");
    }

    let body: CategoryWiki = resp
        .json()
        .await
        .context("Failed to parse iFixit category wiki response")?;

    Ok(body.guides.into_iter().map(|g| g.guideid).collect())
}

async fn fetch_guide(
    client: &reqwest::Client,
    config: &IfixitConfig,
    guide_id: &str,
) -> Result<GuideDocument> {
    let url = format!(
        "{}/api/2.0/guides/{guide_id}",
        config.base_url.trim_end_matches('/')
    );

    let resp = client
        .get(&url)
        .timeout(std::time::Duration::from_secs(config.timeout_secs))
        .send()
        .await
        .with_context(|| format!("Failed to reach iFixit guide API for guide {guide_id}"))?;

    if !resp.status().is_success() {
        let status = resp.status();
        anyhow::bail!("iFixit guide API returned {status} for guide {guide_id}");
    }

    let body: GuideBody = resp
        .json()
        .await
        .context("Failed to parse iFixit guide response")?;

    Ok(GuideDocument {
        source: absolute_url(config, &body.url),
        content: flatten_guide_text(&body),
        title: body.title,
        relevance_score: None,
    })
}

/// Flatten a guide into plain text with `Step N:` markers so the step
/// extraction patterns apply.
fn flatten_guide_text(guide: &GuideBody) -> String {
    let mut text = String::new();
    if !guide.introduction_raw.is_empty() {
        text.push_str(&guide.introduction_raw);
        text.push('\n');
    }
    for (i, step) in guide.steps.iter().enumerate() {
        let number = if step.orderby > 0 {
            step.orderby
        } else {
            (i + 1) as u32
        };
        let lines: Vec<&str> = step
            .lines
            .iter()
            .map(|l| l.text_raw.as_str())
            .filter(|l| !l.is_empty())
            .collect();
        if !lines.is_empty() {
            text.push_str(&format!("Step {number}: {}\n", lines.join(" ")));
        }
    }
    if !guide.conclusion_raw.is_empty() {
        text.push_str(&guide.conclusion_raw);
        text.push('\n');
    }
    text
}

fn absolute_url(config: &IfixitConfig, url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!(
            "{}/{}",
            config.base_url.trim_end_matches('/'),
            url.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> IfixitConfig {
        IfixitConfig::default()
    }

    #[test]
    fn test_validate_device_url_accepts_device_pages() {
        assert!(validate_device_url(
            &config(),
            "https://www.ifixit.com/Device/iPhone_14"
        ));
    }

    #[test]
    fn test_validate_device_url_rejects_other_origins() {
        assert!(!validate_device_url(
            &config(),
            "https://example.com/Device/iPhone_14"
        ));
    }

    #[test]
    fn test_validate_device_url_rejects_too_short() {
        assert!(!validate_device_url(&config(), "https://www.ifixit.com/"));
    }

    #[test]
    fn test_flatten_guide_text_produces_step_markers() {
        let guide = GuideBody {
            title: "Battery Replacement".to_string(),
            url: "/Guide/test/100".to_string(),
            introduction_raw: "Tools: spudger, driver".to_string(),
            conclusion_raw: "Reassemble in reverse order".to_string(),
            steps: vec![
                GuideStep {
                    orderby: 1,
                    lines: vec![GuideLine {
                        text_raw: "Remove the pentalobe screws".to_string(),
                    }],
                },
                GuideStep {
                    orderby: 2,
                    lines: vec![
                        GuideLine {
                            text_raw: "Heat the lower edge".to_string(),
                        },
                        GuideLine {
                            text_raw: "then pry gently".to_string(),
                        },
                    ],
                },
            ],
        };
        let text = flatten_guide_text(&guide);
        assert!(text.contains("Step 1: Remove the pentalobe screws"));
        assert!(text.contains("Step 2: Heat the lower edge then pry gently"));
        assert!(text.starts_with("Tools: spudger, driver"));
        assert!(text.ends_with("Reassemble in reverse order\n"));
    }

    #[test]
    fn test_absolute_url_resolves_relative_paths() {
        assert_eq!(
            absolute_url(&config(), "/Device/iPhone_14"),
            "https://www.ifixit.com/Device/iPhone_14"
        );
        assert_eq!(
            absolute_url(&config(), "https://www.ifixit.com/Guide/x/1"),
            "https://www.ifixit.com/Guide/x/1"
        );
    }
}
