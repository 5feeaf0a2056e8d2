//! Chat message formatting.
//!
//! Messages are built as runs of text, each tagged with a logical color
//! that the host resolves against the user's chat theme. Highlight tags on
//! menu text use literal RGB colors instead.

use bassault_types::Color;
use memchr::memchr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatColorType {
    Normal,
    Highlight,
}

impl ChatColorType {
    fn tag(self) -> &'static str {
        match self {
            ChatColorType::Normal => "<colNORMAL>",
            ChatColorType::Highlight => "<colHIGHLIGHT>",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatMessageType {
    /// Messages sent by the game itself (wave banners land here)
    GameMessage,
    Public,
    /// Client-local output, never sent to the server
    Console,
}

#[derive(Debug, Default)]
pub struct ChatMessageBuilder {
    buf: String,
}

impl ChatMessageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, color: ChatColorType) -> Self {
        self.buf.push_str(color.tag());
        self
    }

    pub fn append(mut self, text: &str) -> Self {
        self.buf.push_str(text);
        self
    }

    pub fn build(self) -> String {
        self.buf
    }
}

/// A message waiting for the host to print it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueuedMessage {
    pub kind: ChatMessageType,
    /// Text with logical color tags
    pub formatted: String,
}

impl QueuedMessage {
    pub fn console(formatted: String) -> Self {
        Self {
            kind: ChatMessageType::Console,
            formatted,
        }
    }

    /// The message with every tag removed
    pub fn plain_text(&self) -> String {
        strip_tags(&self.formatted)
    }
}

/// `<col=rrggbb>` for the RGB part of `color`
pub fn color_tag(color: Color) -> String {
    format!("<col={:02x}{:02x}{:02x}>", color[0], color[1], color[2])
}

pub fn prepend_color_tag(text: &str, color: Color) -> String {
    let mut out = color_tag(color);
    out.push_str(text);
    out
}

/// Everything after the first `>`, or the whole string if there is none.
///
/// Menu strings arrive with a single leading color tag.
pub fn strip_leading_tag(text: &str) -> &str {
    match memchr(b'>', text.as_bytes()) {
        Some(idx) => &text[idx + 1..],
        None => text,
    }
}

/// Remove every `<...>` tag
pub fn strip_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = memchr(b'<', rest.as_bytes()) {
        out.push_str(&rest[..open]);
        match memchr(b'>', &rest.as_bytes()[open..]) {
            Some(close) => rest = &rest[open + close + 1..],
            None => {
                rest = &rest[open..];
                break;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use bassault_types::egg_colors;

    #[test]
    fn builder_tags_each_run() {
        let msg = ChatMessageBuilder::new()
            .color(ChatColorType::Normal)
            .append("Wave 3 duration: ")
            .color(ChatColorType::Highlight)
            .append("01:05")
            .build();
        assert_eq!(msg, "<colNORMAL>Wave 3 duration: <colHIGHLIGHT>01:05");
        assert_eq!(strip_tags(&msg), "Wave 3 duration: 01:05");
    }

    #[test]
    fn color_tag_is_lowercase_rgb() {
        assert_eq!(color_tag(egg_colors::CYAN), "<col=00ffff>");
        assert_eq!(prepend_color_tag("Red egg", egg_colors::RED), "<col=ff0000>Red egg");
    }

    #[test]
    fn strip_leading_tag_cases() {
        assert_eq!(strip_leading_tag("<col=ff9040>Red egg"), "Red egg");
        assert_eq!(strip_leading_tag("Yellow egg"), "Yellow egg");
        assert_eq!(strip_leading_tag("<col=ffffff>"), "");
    }

    #[test]
    fn strip_tags_keeps_unclosed_text() {
        assert_eq!(strip_tags("a<b"), "a<b");
        assert_eq!(strip_tags("<col=ff0000>x<br>y"), "xy");
    }
}
