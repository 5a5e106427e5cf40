//! Text style model for calendar cells and headers.
//!
//! A `TextStyle` is a sparse bundle of text attributes. Unset attributes
//! fall through to whatever style sits underneath when styles are merged.

/// Named colors offered by the text format controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Red,
    Blue,
    Black,
    Magenta,
    Green,
}

impl NamedColor {
    /// RGB components of the color.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Red => (255, 0, 0),
            Self::Blue => (0, 0, 255),
            Self::Black => (0, 0, 0),
            Self::Magenta => (255, 0, 255),
            Self::Green => (0, 255, 0),
        }
    }
}

/// Visual text attributes applied to dates, weekday columns or headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    /// Foreground (text) color
    pub foreground: Option<NamedColor>,
    /// Bold weight
    pub bold: Option<bool>,
    /// Italic slant
    pub italic: Option<bool>,
}

impl TextStyle {
    /// A style with nothing set.
    pub fn plain() -> Self {
        Self::default()
    }

    /// A style carrying only a foreground color.
    pub fn with_foreground(color: NamedColor) -> Self {
        Self {
            foreground: Some(color),
            ..Self::default()
        }
    }

    pub fn bold() -> Self {
        Self {
            bold: Some(true),
            ..Self::default()
        }
    }

    pub fn italic() -> Self {
        Self {
            italic: Some(true),
            ..Self::default()
        }
    }

    /// Build the header style matching a label from the header style control.
    ///
    /// Unknown labels produce a plain style.
    pub fn for_header_label(label: &str) -> Self {
        match label {
            "Bold" => Self::bold(),
            "Italic" => Self::italic(),
            "Green" => Self::with_foreground(NamedColor::Green),
            _ => Self::plain(),
        }
    }

    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }

    pub fn is_bold(&self) -> bool {
        self.bold.unwrap_or(false)
    }

    pub fn is_italic(&self) -> bool {
        self.italic.unwrap_or(false)
    }

    /// Layer `over` on top of this style; attributes set on `over` win.
    pub fn merged_with(&self, over: &TextStyle) -> TextStyle {
        TextStyle {
            foreground: over.foreground.or(self.foreground),
            bold: over.bold.or(self.bold),
            italic: over.italic.or(self.italic),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("Bold", TextStyle::bold() ; "bold label")]
    #[test_case("Italic", TextStyle::italic() ; "italic label")]
    #[test_case("Green", TextStyle::with_foreground(NamedColor::Green) ; "green label")]
    #[test_case("Plain", TextStyle::plain() ; "plain label")]
    #[test_case("Underlined", TextStyle::plain() ; "unknown label")]
    #[test_case("", TextStyle::plain() ; "empty label")]
    fn test_header_label_mapping(label: &str, expected: TextStyle) {
        assert_eq!(TextStyle::for_header_label(label), expected);
    }

    #[test]
    fn test_merge_prefers_overlay() {
        let base = TextStyle {
            foreground: Some(NamedColor::Black),
            bold: Some(true),
            italic: None,
        };
        let over = TextStyle::with_foreground(NamedColor::Red);
        let merged = base.merged_with(&over);

        assert_eq!(merged.foreground, Some(NamedColor::Red));
        assert!(merged.is_bold());
        assert!(!merged.is_italic());
    }

    #[test]
    fn test_merge_with_plain_keeps_base() {
        let base = TextStyle::italic();
        assert_eq!(base.merged_with(&TextStyle::plain()), base);
    }

    #[test]
    fn test_plain_style() {
        assert!(TextStyle::plain().is_plain());
        assert!(!TextStyle::bold().is_plain());
    }

    #[test]
    fn test_named_color_rgb() {
        assert_eq!(NamedColor::Red.rgb(), (255, 0, 0));
        assert_eq!(NamedColor::Magenta.rgb(), (255, 0, 255));
    }
}
