use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::models::FarmState;
use crate::state::codec;

/// Load a state file.
///
/// Goes through the same normalization as share tokens, so files written by
/// older versions load too.
pub fn load_state<P: AsRef<Path>>(path: P) -> Result<FarmState> {
    let content = fs::read(path.as_ref())?;
    let state = codec::from_json_slice(&content)?;
    info!(path = %path.as_ref().display(), stages = state.stages.len(), "loaded state");
    Ok(state)
}

/// Load a state file, or the seed state if it does not exist yet.
pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<FarmState> {
    if path.as_ref().exists() {
        load_state(path)
    } else {
        Ok(FarmState::default())
    }
}

/// Save a state as pretty JSON.
pub fn save_state<P: AsRef<Path>>(path: P, state: &FarmState) -> Result<()> {
    let json = serde_json::to_string_pretty(state)?;
    fs::write(path.as_ref(), json)?;
    info!(path = %path.as_ref().display(), "saved state");
    Ok(())
}
