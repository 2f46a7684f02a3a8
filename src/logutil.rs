//! Log sanitization: player input goes into log lines, and players
//! type newlines, tabs, and worse. Everything logged raw-from-the-wire
//! passes through [`escape_log`] so one command stays one log line.

/// Escape a string for single-line logging. Control characters become
/// visible escapes, and anything over the preview cap is truncated
/// with an ellipsis to keep noisy input from flooding the log.
pub fn escape_log(s: &str) -> String {
    const MAX_PREVIEW: usize = 200;
    let mut out = String::with_capacity(s.len().min(MAX_PREVIEW) + 8);
    for (count, ch) in s.chars().enumerate() {
        if count >= MAX_PREVIEW {
            out.push('…');
            break;
        }
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                use std::fmt::Write;
                let _ = write!(&mut out, "\\x{:02X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out
}
