use anyhow::Result;
use serde_json::json;

use webstep::ConditionName;
use webstep::types::OutputFormat;

pub fn handle_conditions(format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let phrases: Vec<_> = ConditionName::ALL.iter().map(|c| c.as_phrase()).collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "conditions": phrases,
                    "default": ConditionName::default().as_phrase(),
                }))?
            );
        }
        OutputFormat::Simple => {
            for condition in ConditionName::ALL {
                if condition == ConditionName::default() {
                    println!("{} (default)", condition);
                } else {
                    println!("{}", condition);
                }
            }
        }
    }
    Ok(())
}
