use crate::models::{CalculationMode, CalculationResult, FarmState};

/// Format a number with thousands separators and up to `decimals` places.
pub fn format_amount(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::new();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && formatted.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };
    match frac_part {
        Some(f) if f.chars().any(|c| c != '0') => format!("{}{}.{}", sign, grouped, f),
        _ => format!("{}{}", sign, grouped),
    }
}

/// Display the current inputs and feeding timeline.
pub fn display_state(state: &FarmState) {
    let inputs = &state.inputs;

    println!();
    println!("=== Inputs ===");
    println!("Start weight:       {} kg", format_amount(inputs.start_weight, 2));
    println!("Target weight:      {} kg", format_amount(inputs.target_weight, 2));
    println!("Genetic price:      {}", format_amount(inputs.genetic_price, 2));
    println!("Medicine cost:      {}", format_amount(inputs.medicine_cost, 2));
    println!("Management cost:    {}", format_amount(inputs.management_cost, 2));
    println!("Hog price (per kg): {}", format_amount(inputs.forecasted_hog_price, 2));
    println!();

    println!("=== Stages ===");
    for stage in &state.stages {
        println!(
            "{} ({} - {} kg)",
            stage.name,
            format_amount(stage.start_weight, 2),
            format_amount(stage.end_weight, 2)
        );
        for feed in &stage.feeds {
            println!(
                "    {:<14} {:>12}/bag  FCR {:<5} bags {}  [{}]",
                feed.product_code,
                format_amount(feed.price_per_bag, 2),
                feed.fcr,
                format_amount(feed.bags_consumed, 2),
                feed.id
            );
        }
    }
    println!();
}

/// Display a calculation result as a report.
pub fn display_result(result: &CalculationResult) {
    println!();
    match result.calculation_mode {
        CalculationMode::Forecast => println!("=== Cost Forecast ==="),
        CalculationMode::Projection => println!("=== Cost Projection (from feed consumed) ==="),
    }
    println!();

    if result.stage_costs.is_empty() {
        println!("No feed costs.");
    } else {
        let width = result
            .stage_costs
            .iter()
            .map(|d| d.name.chars().count())
            .max()
            .unwrap_or(10);

        for detail in &result.stage_costs {
            println!(
                "  {:<width$}  {:<14} {:>10} kg @ {:>12}/bag = {:>16}",
                detail.name,
                detail.feed,
                format_amount(detail.feed_kg, 2),
                format_amount(detail.price_per_bag, 2),
                format_amount(detail.cost, 2),
                width = width
            );
        }
    }

    println!();
    println!("--- Summary ---");
    println!("Total feed cost:        {}", format_amount(result.total_feed_cost, 2));
    println!("  Genetic price:        {}", format_amount(result.genetic_price, 2));
    println!("  Medicine cost:        {}", format_amount(result.medicine_cost, 2));
    println!("  Management cost:      {}", format_amount(result.management_cost, 2));
    println!("Total other costs:      {}", format_amount(result.total_other_costs, 2));
    println!("Total cost:             {}", format_amount(result.total_cost, 2));
    println!("Cost per kg live wt:    {}", format_amount(result.cost_per_kg_live_weight, 2));
    println!("Feed consumed:          {} kg", format_amount(result.total_feed_consumed, 2));
    println!("Weight gain:            {} kg", format_amount(result.total_weight_gain, 2));
    if let Some(weight) = result.projected_final_weight {
        println!("Projected final weight: {} kg", format_amount(weight, 2));
    }
    println!("Feed cost per kg gain:  {}", format_amount(result.feed_cost_per_kg_gain, 2));
    println!("Estimated days:         {}", format_amount(result.number_of_days, 0));

    println!();
    println!("--- Profit Scenarios ---");
    for s in &result.profit_scenarios {
        let sign = if s.profit >= 0.0 { "+" } else { "" };
        println!(
            "  {:<18} price {:>10}  revenue {:>16}  profit {}{}",
            s.scenario,
            format_amount(s.hog_price, 2),
            format_amount(s.revenue, 2),
            sign,
            format_amount(s.profit, 2)
        );
    }
    println!();
}
