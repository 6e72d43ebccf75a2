use strsim::jaro_winkler;
use tracing::{info, warn};

use crate::calculator::{calculate_with_config, CalcConfig};
use crate::error::{CalcError, Result};
use crate::models::{CalculationResult, FarmState, Feed, Stage};
use crate::state::codec;

/// Minimum Jaro-Winkler similarity for a fuzzy stage-name match.
const STAGE_MATCH_THRESHOLD: f64 = 0.7;

/// Owns the current input set and applies edits to it.
pub struct FarmStateManager {
    state: FarmState,
}

impl FarmStateManager {
    pub fn new(state: FarmState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &FarmState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut FarmState {
        &mut self.state
    }

    /// Calculate over the current state.
    pub fn calculate(&self, config: &CalcConfig) -> CalculationResult {
        calculate_with_config(&self.state.inputs, &self.state.stages, config)
    }

    /// The current state as a share token.
    pub fn share_token(&self) -> String {
        codec::encode(&self.state)
    }

    /// Replace the state with a decoded token.
    ///
    /// The token is fully decoded before anything is replaced; on error the
    /// current state is untouched.
    pub fn apply_token(&mut self, token: &str) -> Result<()> {
        let decoded = codec::decode(token)?;
        self.state = decoded;
        info!(stages = self.state.stages.len(), "loaded shared state");
        Ok(())
    }

    /// Like [`apply_token`](Self::apply_token), but logs failures instead of
    /// returning them. Returns whether a state was loaded.
    pub fn load_shared(&mut self, token: &str) -> bool {
        match self.apply_token(token) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "failed to load shared state, keeping current inputs");
                false
            }
        }
    }

    /// Find a stage index by name: exact (case-insensitive) first, then the
    /// closest fuzzy match.
    pub fn find_stage(&self, name: &str) -> Result<usize> {
        let wanted = name.trim().to_lowercase();

        if let Some(index) = self
            .state
            .stages
            .iter()
            .position(|s| s.name.to_lowercase() == wanted)
        {
            return Ok(index);
        }

        self.state
            .stages
            .iter()
            .enumerate()
            .map(|(i, s)| (i, jaro_winkler(&s.name.to_lowercase(), &wanted)))
            .filter(|(_, score)| *score > STAGE_MATCH_THRESHOLD)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(i, _)| i)
            .ok_or_else(|| CalcError::StageNotFound(name.to_string()))
    }

    fn stage_mut(&mut self, name: &str) -> Result<&mut Stage> {
        let index = self.find_stage(name)?;
        Ok(&mut self.state.stages[index])
    }

    /// Record bags consumed for a feed (by id or product code), or for the
    /// stage's first feed when `feed` is `None`.
    pub fn set_bags(&mut self, stage: &str, feed: Option<&str>, bags: f64) -> Result<()> {
        if !bags.is_finite() || bags < 0.0 {
            return Err(CalcError::InvalidInput(format!(
                "bags consumed must be a non-negative number, got {}",
                bags
            )));
        }

        let stage = self.stage_mut(stage)?;
        let stage_name = stage.name.clone();
        let target = match feed {
            Some(key) => stage.find_feed_mut(key),
            None => stage.feeds.first_mut(),
        };
        let target = target.ok_or_else(|| CalcError::FeedNotFound {
            stage: stage_name.clone(),
            feed: feed.unwrap_or("<first>").to_string(),
        })?;

        target.bags_consumed = bags;
        info!(stage = %stage_name, feed = %target.product_code, bags, "recorded bags consumed");
        Ok(())
    }

    /// Append a new feed to a stage. Returns its generated id.
    pub fn add_feed(&mut self, stage: &str, product_code: &str, price_per_bag: f64, fcr: f64) -> Result<String> {
        let stage = self.stage_mut(stage)?;
        let feed = Feed::with_fresh_id(product_code, price_per_bag, fcr);
        let id = feed.id.clone();
        stage.feeds.push(feed);
        info!(stage = %stage.name, feed = %product_code, "added feed");
        Ok(id)
    }

    /// Clear every bag count, returning to forecast mode.
    pub fn reset_bags(&mut self) {
        for stage in &mut self.state.stages {
            for feed in &mut stage.feeds {
                feed.bags_consumed = 0.0;
            }
        }
    }
}
