use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;
use thiserror::Error;

use crate::calculator::constants::*;
use crate::models::{fresh_id, FarmState, Feed, Inputs, Stage};

/// Why a share token could not be turned back into a state.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("token is empty")]
    Empty,

    #[error("not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("payload is not a valid state: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serialize a state into a URL-safe token.
pub fn encode(state: &FarmState) -> String {
    let json = serde_json::to_vec(state).unwrap_or_default();
    URL_SAFE_NO_PAD.encode(json)
}

/// Append the token to `base_url` as a fragment.
pub fn share_link(base_url: &str, state: &FarmState) -> String {
    let base = base_url.split('#').next().unwrap_or(base_url);
    format!("{}#{}", base, encode(state))
}

/// Parse a token (or a full share link) back into a state.
///
/// Accepts both the URL-safe and the standard base64 alphabet, padded or not.
pub fn decode(token: &str) -> Result<FarmState, DecodeError> {
    let fragment = match token.split_once('#') {
        Some((_, fragment)) => fragment,
        None => token,
    };
    let trimmed = fragment.trim().trim_end_matches('=');
    if trimmed.is_empty() {
        return Err(DecodeError::Empty);
    }

    let normalized: String = trimmed
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();

    let bytes = URL_SAFE_NO_PAD.decode(normalized.as_bytes())?;
    from_json_slice(&bytes)
}

/// Parse state JSON, upgrading older payload shapes and filling defaults.
pub fn from_json_slice(bytes: &[u8]) -> Result<FarmState, DecodeError> {
    let raw: RawState = serde_json::from_slice(bytes)?;
    Ok(raw.into_state())
}

// ─────────────────────────────────────────────────────────────────────────────
// Lenient wire shapes
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawState {
    start_weight: Option<f64>,
    target_weight: Option<f64>,
    genetic_price: Option<f64>,
    medicine_cost: Option<f64>,
    management_cost: Option<f64>,
    forecasted_hog_price: Option<f64>,
    stages: Option<Vec<RawStage>>,
}

/// A stage as written by any version: either with a `feeds` list or with
/// a single feed flattened into the stage itself.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawStage {
    name: Option<String>,
    start_weight: Option<f64>,
    end_weight: Option<f64>,
    feeds: Option<Vec<RawFeed>>,
    product_code: Option<String>,
    price_per_bag: Option<f64>,
    fcr: Option<f64>,
    bags_consumed: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFeed {
    id: Option<String>,
    product_code: Option<String>,
    price_per_bag: Option<f64>,
    fcr: Option<f64>,
    bags_consumed: Option<f64>,
}

impl RawState {
    fn into_state(self) -> FarmState {
        let inputs = Inputs {
            start_weight: self.start_weight.unwrap_or(DEFAULT_START_WEIGHT),
            target_weight: self.target_weight.unwrap_or(DEFAULT_TARGET_WEIGHT),
            genetic_price: self.genetic_price.unwrap_or(DEFAULT_GENETIC_PRICE),
            medicine_cost: self.medicine_cost.unwrap_or(DEFAULT_MEDICINE_COST),
            management_cost: self.management_cost.unwrap_or(DEFAULT_MANAGEMENT_COST),
            forecasted_hog_price: self.forecasted_hog_price.unwrap_or(DEFAULT_HOG_PRICE),
        };

        let stages = match self.stages {
            Some(stages) => stages.into_iter().map(RawStage::into_stage).collect(),
            None => FarmState::seed_stages(),
        };

        FarmState { inputs, stages }
    }
}

impl RawStage {
    fn into_stage(self) -> Stage {
        let feeds = match self.feeds {
            Some(feeds) if !feeds.is_empty() => feeds.into_iter().map(RawFeed::into_feed).collect(),
            _ => vec![RawFeed {
                id: None,
                product_code: self.product_code,
                price_per_bag: self.price_per_bag,
                fcr: self.fcr,
                bags_consumed: self.bags_consumed,
            }
            .into_feed()],
        };

        Stage {
            name: self.name.unwrap_or_default(),
            start_weight: self.start_weight.unwrap_or(0.0),
            end_weight: self.end_weight.unwrap_or(0.0),
            feeds,
        }
    }
}

impl RawFeed {
    fn into_feed(self) -> Feed {
        let id = match self.id {
            Some(id) if !id.is_empty() => id,
            _ => fresh_id(),
        };

        Feed {
            id,
            product_code: self.product_code.unwrap_or_default(),
            price_per_bag: self.price_per_bag.unwrap_or(0.0),
            fcr: self.fcr.unwrap_or(0.0),
            bags_consumed: self.bags_consumed.unwrap_or(0.0),
        }
    }
}
