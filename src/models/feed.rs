use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A feed product used within a stage.
///
/// `fcr` is kg of feed per kg of live-weight gain; 0 means unset.
/// `bags_consumed > 0` anywhere switches the calculator to projection mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feed {
    pub id: String,
    pub product_code: String,
    pub price_per_bag: f64,
    pub fcr: f64,
    #[serde(default)]
    pub bags_consumed: f64,
}

impl Feed {
    pub fn new(id: impl Into<String>, product_code: impl Into<String>, price_per_bag: f64, fcr: f64) -> Self {
        Self {
            id: id.into(),
            product_code: product_code.into(),
            price_per_bag,
            fcr,
            bags_consumed: 0.0,
        }
    }

    /// Create a feed with a freshly generated id.
    pub fn with_fresh_id(product_code: impl Into<String>, price_per_bag: f64, fcr: f64) -> Self {
        Self::new(fresh_id(), product_code, price_per_bag, fcr)
    }

    /// Whether this feed has actual consumption recorded.
    #[inline]
    pub fn is_consumed(&self) -> bool {
        self.bags_consumed > 0.0
    }
}

/// Generate a unique feed id.
pub(crate) fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}

/// A step of the feeding timeline covering `[start_weight, end_weight)` kg.
///
/// Stages are expected in increasing weight order; nothing re-sorts them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stage {
    pub name: String,
    pub start_weight: f64,
    pub end_weight: f64,
    pub feeds: Vec<Feed>,
}

impl Stage {
    pub fn new(name: impl Into<String>, start_weight: f64, end_weight: f64, feeds: Vec<Feed>) -> Self {
        Self {
            name: name.into(),
            start_weight,
            end_weight,
            feeds,
        }
    }

    /// The feed used by forecast mode.
    pub fn primary_feed(&self) -> Option<&Feed> {
        self.feeds.first()
    }

    /// Find a feed by id, or by product code (case-insensitive).
    pub fn find_feed_mut(&mut self, key: &str) -> Option<&mut Feed> {
        let lowered = key.to_lowercase();
        if let Some(pos) = self.feeds.iter().position(|f| f.id == key) {
            return self.feeds.get_mut(pos);
        }
        self.feeds
            .iter_mut()
            .find(|f| f.product_code.to_lowercase() == lowered)
    }
}
