//! Store commands (years, clear)

use anyhow::Result;

use super::output::Output;
use crate::storage::Workspace;

/// List stored years
pub fn years(workspace: &Workspace, output: &Output) -> Result<()> {
    let years = workspace.store().available_years()?;

    if output.is_json() {
        output.data(&serde_json::json!({ "years": years }));
    } else if years.is_empty() {
        println!("No stored years.");
    } else {
        for year in years {
            println!("{}", year);
        }
    }

    Ok(())
}

/// Delete all stored years
pub fn clear(workspace: &Workspace, output: &Output) -> Result<()> {
    let removed = workspace.store().clear()?;
    output.success(&format!("Removed {} stored year(s)", removed));
    Ok(())
}
