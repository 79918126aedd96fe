//! Storyboard narrative documents

use std::fmt::Write;

use admock_projects::Storyboard;

/// Render the human-readable document for one storyboard
pub fn render_storyboard(storyboard: &Storyboard) -> String {
    let mut doc = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(doc, "# Storyboard {}\n", storyboard.id);
    for frame in &storyboard.frames {
        let _ = writeln!(doc, "## Frame {} – {}", frame.id, frame.beat);
        let _ = writeln!(doc, "Voice over: {}\n", frame.voice_over);
        let _ = writeln!(doc, "On-screen text: {}\n", frame.on_screen_text);
    }
    doc
}
