//! The [`ZwicklyLogo`] widget.
use crate::styles::theme;
use indoc::indoc;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::Text;
use ratatui::widgets::Widget;

/// Zwickly word mark, used on the splash and login screens.
///
/// ```text
/// ╺━┓╻ ╻╻┏━╸╻┏╸╻  ╻ ╻
/// ┏━┛┃╻┃┃┃  ┣┻┓┃  ┗┳┛
/// ┗━╸┗┻┛╹┗━╸╹ ╹┗━╸╺┻╸
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ZwicklyLogo {
    size: Size,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Size {
    /// Three lines of box drawing characters
    #[default]
    Regular,
    /// A single spaced-out line for short terminals
    Compact,
}

impl ZwicklyLogo {
    pub const fn new(size: Size) -> Self {
        Self { size }
    }

    pub const fn regular() -> Self {
        Self::new(Size::Regular)
    }

    pub const fn compact() -> Self {
        Self::new(Size::Compact)
    }

    /// Regular logo if `height` lines fit it, compact otherwise
    pub const fn fitting(height: u16) -> Self {
        if height >= Size::Regular.height() {
            Self::regular()
        } else {
            Self::compact()
        }
    }

    pub const fn width(&self) -> u16 {
        self.size.width()
    }

    pub const fn height(&self) -> u16 {
        self.size.height()
    }
}

impl Widget for ZwicklyLogo {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Text::raw(self.size.as_str())
            .style(theme().title_style())
            .render(area, buf);
    }
}

impl Size {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Regular => indoc! {"
                ╺━┓╻ ╻╻┏━╸╻┏╸╻  ╻ ╻
                ┏━┛┃╻┃┃┃  ┣┻┓┃  ┗┳┛
                ┗━╸┗┻┛╹┗━╸╹ ╹┗━╸╺┻╸
            "},
            Self::Compact => "Z W I C K L Y",
        }
    }

    pub const fn width(self) -> u16 {
        match self {
            Self::Regular => 19,
            Self::Compact => 13,
        }
    }

    pub const fn height(self) -> u16 {
        match self {
            Self::Regular => 3,
            Self::Compact => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logo_dimensions_match_content() {
        for size in [Size::Regular, Size::Compact] {
            let lines: Vec<&str> = size.as_str().lines().collect();
            assert_eq!(lines.len() as u16, size.height(), "{:?} height", size);
            let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u16;
            assert_eq!(width, size.width(), "{:?} width", size);
        }
    }

    #[test]
    fn fitting_falls_back_to_compact() {
        assert_eq!(ZwicklyLogo::fitting(5), ZwicklyLogo::regular());
        assert_eq!(ZwicklyLogo::fitting(2), ZwicklyLogo::compact());
    }
}
