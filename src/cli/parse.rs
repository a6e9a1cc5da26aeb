use noted_core::note::NoteId;
use noted_core::visibility::View;

/// Parse note id from string
pub fn parse_note_id(s: &str) -> std::result::Result<NoteId, String> {
    s.parse::<NoteId>().map_err(|e| e.to_string())
}

/// Parse list view from string
pub fn parse_view(s: &str) -> std::result::Result<View, String> {
    s.parse::<View>().map_err(|e| e.to_string())
}
