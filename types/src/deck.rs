//! Slide deck model.
//!
//! A [`Deck`] is the fixed, ordered list of slides shown by the presenter. It is
//! built once and never mutated. Both the deck and every horizontal group are
//! non-empty by construction, so index arithmetic on them never underflows.

/// Accent colour of a slide. The renderer maps it onto its palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Accent {
    #[default]
    Green,
    Pink,
    Violet,
    Cyan,
    Amber,
    White,
}

/// Opaque renderable content of one panel.
///
/// The navigation core never looks inside; only the renderer does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideContent {
    pub kicker: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub body: &'static [&'static str],
    pub accent: Accent,
}

impl SlideContent {
    #[must_use]
    pub const fn new(title: &'static str) -> Self {
        Self {
            kicker: "",
            title,
            subtitle: "",
            body: &[],
            accent: Accent::Green,
        }
    }

    #[must_use]
    pub const fn kicker(mut self, kicker: &'static str) -> Self {
        self.kicker = kicker;
        self
    }

    #[must_use]
    pub const fn subtitle(mut self, subtitle: &'static str) -> Self {
        self.subtitle = subtitle;
        self
    }

    #[must_use]
    pub const fn body(mut self, body: &'static [&'static str]) -> Self {
        self.body = body;
        self
    }

    #[must_use]
    pub const fn accent(mut self, accent: Accent) -> Self {
        self.accent = accent;
        self
    }
}

/// An ordered, non-empty row of panels inside one vertical slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HorizontalGroup {
    items: Vec<SlideContent>,
}

#[allow(clippy::len_without_is_empty)] // never empty by construction
impl HorizontalGroup {
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn last_index(&self) -> usize {
        self.items.len() - 1
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&SlideContent> {
        self.items.get(index)
    }

    #[must_use]
    pub fn items(&self) -> &[SlideContent] {
        &self.items
    }
}

/// One addressable unit of the vertical deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slide {
    Vertical(SlideContent),
    Horizontal(HorizontalGroup),
}

impl Slide {
    #[must_use]
    pub const fn vertical(content: SlideContent) -> Self {
        Self::Vertical(content)
    }

    /// Build a horizontal group. An empty array is rejected at compile time.
    #[must_use]
    pub fn horizontal<const L: usize>(items: [SlideContent; L]) -> Self {
        const { assert!(L > 0, "a horizontal group needs at least one item") };
        Self::Horizontal(HorizontalGroup {
            items: Vec::from(items),
        })
    }

    #[must_use]
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Self::Horizontal(_))
    }

    #[must_use]
    pub fn as_horizontal(&self) -> Option<&HorizontalGroup> {
        match self {
            Self::Horizontal(group) => Some(group),
            Self::Vertical(_) => None,
        }
    }

    /// Panels in this slide: one for a vertical slide, the whole row otherwise.
    #[must_use]
    pub fn panels(&self) -> &[SlideContent] {
        match self {
            Self::Vertical(content) => std::slice::from_ref(content),
            Self::Horizontal(group) => group.items(),
        }
    }
}

/// The fixed ordered sequence of all slides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    slides: Vec<Slide>,
}

#[allow(clippy::len_without_is_empty)] // never empty by construction
impl Deck {
    #[must_use]
    pub fn new(first: Slide, rest: impl IntoIterator<Item = Slide>) -> Self {
        let mut slides = vec![first];
        slides.extend(rest);
        Self { slides }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    #[must_use]
    pub fn last_section(&self) -> usize {
        self.slides.len() - 1
    }

    #[must_use]
    pub fn get(&self, section: usize) -> Option<&Slide> {
        self.slides.get(section)
    }

    /// Slide at `section`, clamped to the last slide.
    #[must_use]
    pub fn slide(&self, section: usize) -> &Slide {
        &self.slides[section.min(self.last_section())]
    }

    #[must_use]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Item count of the horizontal group at `section`, if it is one.
    #[must_use]
    pub fn horizontal_len(&self, section: usize) -> Option<usize> {
        self.get(section)
            .and_then(Slide::as_horizontal)
            .map(HorizontalGroup::len)
    }

    #[must_use]
    pub fn first_horizontal(&self) -> Option<usize> {
        self.slides.iter().position(Slide::is_horizontal)
    }

    /// Number of full-height pages when every panel is stacked vertically.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.slides.iter().map(|slide| slide.panels().len()).sum()
    }

    /// Index of the first stacked page belonging to `section`.
    #[must_use]
    pub fn anchor_page(&self, section: usize) -> usize {
        self.slides
            .iter()
            .take(section)
            .map(|slide| slide.panels().len())
            .sum()
    }
}
