use anyhow::{anyhow, Result};

use crate::cli::display::print_full_note;
use crate::notebook::Notebook;

/// Execute the show command
pub fn run_show(notebook: &Notebook, id: &str) -> Result<()> {
    let id = id.trim();
    if id.is_empty() {
        return Err(anyhow!("Note id cannot be empty."));
    }

    match notebook.get(id)? {
        Some(note) => print_full_note(&note, notebook.is_pinned(&note.id)),
        None => println!("No note found with ID: {}", id),
    }
    Ok(())
}
