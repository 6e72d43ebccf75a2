use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::models::CalculationResult;

/// Write the itemized stage costs of a result to a CSV file.
pub fn write_stage_costs_csv(result: &CalculationResult, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["stage", "feed", "feed_kg", "price_per_bag", "cost"])?;

    for detail in &result.stage_costs {
        wtr.write_record([
            detail.name.clone(),
            detail.feed.clone(),
            format!("{:.2}", detail.feed_kg),
            format!("{:.2}", detail.price_per_bag),
            format!("{:.2}", detail.cost),
        ])?;
    }

    wtr.flush()?;
    info!(path = %path.display(), rows = result.stage_costs.len(), "exported stage costs");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::calculate;
    use crate::models::FarmState;
    use tempfile::NamedTempFile;

    #[test]
    fn test_export_seed_forecast() {
        let state = FarmState::default();
        let result = calculate(&state.inputs, &state.stages);

        let file = NamedTempFile::new().unwrap();
        write_stage_costs_csv(&result, file.path()).unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "stage,feed,feed_kg,price_per_bag,cost");
        assert_eq!(lines[1], "Piglet,W-Standard,28.80,625000.00,720000.00");
    }
}
