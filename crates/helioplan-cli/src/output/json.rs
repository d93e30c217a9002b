use helioplan_core::error::HelioplanError;
use helioplan_core::DocumentPlan;

pub fn print(plan: &DocumentPlan) -> Result<(), HelioplanError> {
    let json = serde_json::to_string_pretty(plan)?;
    println!("{json}");
    Ok(())
}
