use coinmarketcap_lib::AccountPlan;
use serde_json::json;

use crate::output::{build_plan_rows, print_json, print_table, OutputFormat};

/// Prints the configured plan and, per endpoint, whether it may be called.
pub fn run(plan: AccountPlan, format: &OutputFormat) {
    let rows = build_plan_rows(plan);
    match format {
        OutputFormat::Json => print_json(&json!({ "plan": plan.as_str(), "endpoints": rows })),
        _ => {
            println!("Account plan: {}", plan);
            print_table(rows, format);
        }
    }
}
