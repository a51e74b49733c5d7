//! CSV generation for the event list.
//!
//! Pure string generation; writing the output anywhere is the caller's job.

use crate::event::Event;

const HEADER: &str = "id,title,description,date,start_time,end_time,category,link,location";

/// Generate CSV content for a list of events, header row included.
///
/// Rows follow the order of the input slice, so passing `store.events()`
/// yields chronological output. Fields containing commas, quotes or newlines
/// are quoted per RFC 4180.
pub fn generate_csv(events: &[Event]) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');

    for event in events {
        let fields = [
            event.id.to_string(),
            event.title.clone(),
            event.description.clone(),
            event.date.format("%Y-%m-%d").to_string(),
            event.start_time.format("%H:%M").to_string(),
            event.end_time.format("%H:%M").to_string(),
            event.category.to_string(),
            event.link.clone(),
            event.location.clone(),
        ];
        let row: Vec<String> = fields.iter().map(|f| escape_field(f)).collect();
        out.push_str(&row.join(","));
        out.push('\n');
    }

    out
}

/// Quote a field if it contains a comma, quote or newline.
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
