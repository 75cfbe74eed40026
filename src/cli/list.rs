use anyhow::Result;

use crate::cli::display::summary_line;
use crate::notebook::Notebook;

/// Execute the list command
pub fn run_list(notebook: &Notebook) -> Result<()> {
    let listing = notebook.load()?;

    if listing.is_empty() {
        println!("No notes yet. Add one with `geonotes add`.");
        return Ok(());
    }

    if !listing.pinned.is_empty() {
        println!("Pinned");
        for note in &listing.pinned {
            println!("{}", summary_line(note, true));
        }
        println!();
        println!("General");
    }

    for note in &listing.general {
        println!("{}", summary_line(note, false));
    }

    Ok(())
}
