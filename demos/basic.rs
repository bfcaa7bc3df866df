//! Basic example: computing one pet's attributes
//!
//! This example demonstrates:
//! - Building a configuration
//! - Computing every attribute with its breakdown
//! - Reading the selected enhancement tiers

use petstat::*;

fn main() -> Result<(), StatError> {
    let mut config = BuildConfig::default();
    config.set_effort(252);
    config.set_nature_by_name("孤僻")?;

    println!("Nature: {} ({})", config.nature(), config.nature().description());
    println!(
        "Level {}, effort {}, guardian {}",
        config.level(),
        config.effort(),
        if config.guardian() { "on" } else { "off" }
    );

    let stats = BaseStats::new([95, 100, 80, 60, 70, 100]);
    let sheet = StatCalculator::compute_sheet(&stats, &config);

    for result in sheet.iter() {
        println!("\n=== {} ===", result.kind);
        println!("Raw: {}", stats.base_value(result.kind));
        for (step, value) in &result.breakdown {
            println!("  {}: {}", step, value);
        }
        let tiers: Vec<String> = result
            .selected(config.tier_selection())
            .map(|(level, value)| format!("[{}] {}", level, value))
            .collect();
        println!("  Tiers: {}", tiers.join("  "));
    }

    println!("\nComputed total: {}", sheet.total());
    Ok(())
}
