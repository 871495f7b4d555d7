use greenguard_core::error::GreenGuardError;
use greenguard_core::registry;

pub fn list() -> Result<(), GreenGuardError> {
    println!("Emission categories (in tie-break order):\n");
    for (i, entry) in registry::categories().iter().enumerate() {
        println!(
            "  {}. {:<14} {} {} per {}{}",
            i + 1,
            entry.name(),
            entry.factor,
            entry.gas_label,
            entry.unit_label,
            if entry.absorbs { "  (absorption)" } else { "" }
        );
    }
    println!();
    Ok(())
}

pub fn explain(name: &str) -> Result<(), GreenGuardError> {
    let entry = registry::lookup(name)?;

    println!("{}\n", entry.name());
    println!(
        "  Emission = round(usage x {}, 2) {}",
        entry.factor, entry.gas_label
    );
    println!("  Usage unit: {}", entry.unit_label);
    if entry.absorbs {
        println!("  Negative emissions are CO2 absorbed and are reported as-is.");
    } else {
        println!("  Negative results within 0.000001 of zero are reported as 0.");
    }
    println!();

    println!("Keywords ({}):", entry.keywords.len());
    for kw in entry.keywords {
        println!("  - {kw}");
    }
    println!();

    println!("A line belongs to the category with the most keyword hits.");
    println!("On a tie, the category listed first by `greenguard categories list` wins.\n");

    Ok(())
}
