//! Renderable attribute elements.
//!
//! Contains the data types describing one open/close pair of HTML markup:
//! - Category: the rendering slot an element occupies
//! - AttributeElement: the category plus its open and close markup

use std::fmt;

use crate::palette::ColorPalette;

/// Rendering slot of an attribute element.
///
/// At most one element per category is open at any time. `Foreground` and
/// `Background` are independent color slots, `Default` is the line wrapper
/// and the rest are boolean toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Default,
    Bold,
    Italic,
    Underline,
    Strikeout,
    Framed,
    Overline,
    Foreground,
    Background,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Default => "default",
            Category::Bold => "bold",
            Category::Italic => "italic",
            Category::Underline => "underline",
            Category::Strikeout => "strikeout",
            Category::Framed => "framed",
            Category::Overline => "overline",
            Category::Foreground => "foreground",
            Category::Background => "background",
        };
        f.write_str(name)
    }
}

/// One renderable attribute: its slot plus the markup that opens and closes it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttributeElement {
    category: Category,
    open: String,
    close: String,
}

impl AttributeElement {
    /// Build an element from a tag name and optional attribute string.
    fn tag(category: Category, name: &str, attributes: Option<&str>) -> Self {
        let open = match attributes {
            Some(attrs) => format!("<{} {}>", name, attrs),
            None => format!("<{}>", name),
        };
        Self {
            category,
            open,
            close: format!("</{}>", name),
        }
    }

    fn styled_span(category: Category, style: &str) -> Self {
        Self::tag(category, "span", Some(&format!("style=\"{}\"", style)))
    }

    pub fn bold() -> Self {
        Self::tag(Category::Bold, "b", None)
    }

    pub fn italic() -> Self {
        Self::tag(Category::Italic, "i", None)
    }

    pub fn underline() -> Self {
        Self::tag(Category::Underline, "u", None)
    }

    /// Double underline shares the `Underline` slot with the plain one.
    pub fn underline_double() -> Self {
        Self::styled_span(Category::Underline, "border-bottom:3px double;")
    }

    pub fn strikeout() -> Self {
        Self::styled_span(Category::Strikeout, "text-decoration:line-through;")
    }

    pub fn framed() -> Self {
        Self::styled_span(Category::Framed, "border:1px solid;")
    }

    pub fn overline() -> Self {
        Self::styled_span(Category::Overline, "text-decoration:overline;")
    }

    pub fn foreground(color: &str) -> Self {
        Self::styled_span(Category::Foreground, &format!("color:{};", color))
    }

    pub fn background(color: &str) -> Self {
        Self::styled_span(
            Category::Background,
            &format!("background-color:{};", color),
        )
    }

    /// The line wrapper carrying the palette's default colors.
    ///
    /// Returns `None` when neither color is given.
    pub fn default_pair(foreground: Option<&str>, background: Option<&str>) -> Option<Self> {
        let mut style = String::new();
        if let Some(fg) = foreground {
            style.push_str(&format!("color:{};", fg));
        }
        if let Some(bg) = background {
            style.push_str(&format!("background-color:{};", bg));
        }
        if style.is_empty() {
            None
        } else {
            Some(Self::styled_span(Category::Default, &style))
        }
    }

    /// The wrapper for a palette's default colors, if it names any.
    pub fn default_for(palette: &ColorPalette) -> Option<Self> {
        let fg = palette
            .default_foreground()
            .and_then(|i| palette.normal_color(i));
        let bg = palette
            .default_background()
            .and_then(|i| palette.normal_color(i));
        Self::default_pair(fg, bg)
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Markup emitted when the element is opened.
    pub fn open_markup(&self) -> &str {
        &self.open
    }

    /// Markup emitted when the element is closed.
    pub fn close_markup(&self) -> &str {
        &self.close
    }
}
