use anyhow::{anyhow, Result};
use inquire::Confirm;

use crate::models::headline;
use crate::notebook::Notebook;

/// Execute the delete command
pub fn run_delete(notebook: &Notebook, id: &str, force: bool) -> Result<()> {
    let id = id.trim();
    if id.is_empty() {
        return Err(anyhow!("Note id cannot be empty."));
    }

    let Some(note) = notebook.get(id)? else {
        println!("No note found with ID: {}", id);
        return Ok(());
    };

    if !force {
        let confirmed = Confirm::new(&format!("Delete \"{}\"?", headline(&note.title)))
            .with_help_message("This action cannot be undone.")
            .with_default(false)
            .prompt()
            .unwrap_or(false);

        if !confirmed {
            return Ok(());
        }
    }

    if notebook.delete(&note.id)? {
        println!("Deleted.");
    } else {
        eprintln!("Error: failed to delete {}", note.id);
    }

    Ok(())
}
