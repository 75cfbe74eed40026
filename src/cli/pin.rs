use anyhow::{anyhow, Result};

use crate::notebook::Notebook;

/// Execute the pin and unpin commands
pub fn run_pin(notebook: &Notebook, id: &str, pinned: bool) -> Result<()> {
    let id = id.trim();
    if id.is_empty() {
        return Err(anyhow!("Note id cannot be empty."));
    }

    notebook.set_pinned(id, pinned)?;
    println!("{}", if pinned { "Pinned." } else { "Unpinned." });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use tempfile::TempDir;

    #[test]
    fn test_pin_unknown_note_fails() {
        let tmp = TempDir::new().unwrap();
        let notebook = Notebook::open(&Config::at(tmp.path())).unwrap();
        assert!(run_pin(&notebook, "ghost", true).is_err());
        assert!(run_pin(&notebook, "ghost", false).is_ok());
        assert!(run_pin(&notebook, "  ", true).is_err());
    }
}
