use chrono::{Local, TimeZone};

use crate::models::Note;

/// Local date and time for a millisecond timestamp
pub fn format_timestamp(millis: i64) -> String {
    match Local.timestamp_millis_opt(millis).single() {
        Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        None => millis.to_string(),
    }
}

/// Location line: coordinates, address, or both
pub fn format_location(note: &Note) -> String {
    let coords = note
        .coordinates
        .map(|c| c.to_string())
        .unwrap_or_else(|| "No location".to_string());
    match note.address.as_deref() {
        Some(address) => format!("{}  •  {}", coords, address),
        None => coords,
    }
}

/// One-line summary used by the list view
pub fn summary_line(note: &Note, pinned: bool) -> String {
    let marker = if pinned { "*" } else { " " };
    let mut line = format!(
        "{} {}  {}  {}",
        marker,
        note.id,
        format_timestamp(note.created_at),
        note.headline()
    );
    if let Some(address) = note.address.as_deref() {
        line.push_str(&format!("  ({})", address));
    }
    line
}

pub fn print_full_note(note: &Note, pinned: bool) {
    let pin = if pinned { "  [pinned]" } else { "" };
    println!("{}{}\n", note.headline(), pin);

    if !note.body.is_empty() {
        println!("{}\n", note.body);
    }

    println!("  {}", format_timestamp(note.created_at));
    println!("  {}", format_location(note));
    println!("  {}", note.photo_path);
    println!("  {}", note.id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinates;

    fn note() -> Note {
        Note {
            id: "n1".into(),
            title: "Market".into(),
            body: String::new(),
            photo_path: "/photos/n1.jpg".into(),
            created_at: 0,
            coordinates: None,
            address: None,
        }
    }

    #[test]
    fn test_location_without_anything() {
        assert_eq!(format_location(&note()), "No location");
    }

    #[test]
    fn test_location_with_both() {
        let mut n = note();
        n.coordinates = Some(Coordinates::new(1.0, 2.0));
        n.address = Some("Here".into());
        assert_eq!(format_location(&n), "1.00000, 2.00000  •  Here");
    }

    #[test]
    fn test_summary_marks_pinned() {
        assert!(summary_line(&note(), true).starts_with("* n1"));
        assert!(summary_line(&note(), false).starts_with("  n1"));
    }
}
