//! Screen regions and mouse hit areas.
//!
//! Both drawing and input use [`DeckLayout`], so a click lands on exactly
//! what was drawn.

use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

use folio_engine::{App, NavLink};

use crate::theme::Glyphs;

const DOT_RAIL_MARGIN: u16 = 3;
const LINK_GAP: u16 = 3;
const NAVBAR_PAD: u16 = 2;

/// Something clickable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// Dot-rail dot for a section. Gated by the transition lock.
    Dot(usize),
    /// Navbar link. Always honoured.
    Link(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckLayout {
    pub stage: Rect,
    pub navbar: Option<Rect>,
    pub brand: Option<Rect>,
    pub links: Vec<(Rect, NavLink)>,
    pub dots: Vec<(Rect, usize)>,
    pub bars: Vec<(Rect, usize)>,
}

impl DeckLayout {
    #[must_use]
    pub fn compute(app: &App, area: Rect, glyphs: &Glyphs) -> Self {
        let mobile = app.responsive_mode().is_mobile();

        let navbar = app
            .navbar_visible()
            .then(|| Rect::new(area.x, area.y, area.width, 1_u16.min(area.height)));
        let brand = navbar.map(|bar| {
            let width = (folio_engine::content::BRAND.width() as u16)
                .min(bar.width.saturating_sub(NAVBAR_PAD));
            Rect::new(bar.x + NAVBAR_PAD.min(bar.width), bar.y, width, bar.height)
        });

        let links = match navbar {
            Some(bar) if app.nav_links_visible() => link_rects(bar, &app.nav_links()),
            _ => Vec::new(),
        };

        let dots = if mobile {
            Vec::new()
        } else {
            dot_rects(area, app.deck().len())
        };

        let bars = match app.deck().horizontal_len(app.active_section()) {
            Some(len) if !mobile => bar_rects(area, len, glyphs.bar_active.width() as u16),
            _ => Vec::new(),
        };

        Self {
            stage: area,
            navbar,
            brand,
            links,
            dots,
            bars,
        }
    }

    #[must_use]
    pub fn hit(&self, column: u16, row: u16) -> Option<Hit> {
        let inside = |rect: &Rect| {
            column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
        };
        if let Some((_, link)) = self.links.iter().find(|(rect, _)| inside(rect)) {
            return Some(Hit::Link(link.section));
        }
        self.dots
            .iter()
            .find(|(rect, _)| inside(rect))
            .map(|(_, section)| Hit::Dot(*section))
    }
}

fn link_rects(bar: Rect, links: &[NavLink]) -> Vec<(Rect, NavLink)> {
    let widths: Vec<u16> = links.iter().map(|l| l.label.width() as u16).collect();
    let total = widths.iter().sum::<u16>()
        + LINK_GAP * (links.len().saturating_sub(1) as u16)
        + NAVBAR_PAD;
    if total > bar.width {
        return Vec::new();
    }

    let mut x = bar.right() - total;
    links
        .iter()
        .zip(widths)
        .map(|(link, width)| {
            let rect = Rect::new(x, bar.y, width, bar.height);
            x += width + LINK_GAP;
            (rect, *link)
        })
        .collect()
}

/// One dot per section, two rows apart, centered on the right edge.
fn dot_rects(area: Rect, sections: usize) -> Vec<(Rect, usize)> {
    let span = (sections as u16).saturating_mul(2).saturating_sub(1);
    if area.width <= DOT_RAIL_MARGIN || span > area.height {
        return Vec::new();
    }
    let x = area.right() - DOT_RAIL_MARGIN;
    let top = area.y + (area.height - span) / 2;
    (0..sections)
        .map(|section| {
            // Three columns wide so the dot is easy to hit.
            let rect = Rect::new(x.saturating_sub(1), top + section as u16 * 2, 3, 1);
            (rect, section)
        })
        .collect()
}

/// Indicator bars, centered two rows above the bottom edge.
fn bar_rects(area: Rect, items: usize, bar_width: u16) -> Vec<(Rect, usize)> {
    let total = (items as u16) * (bar_width + 1);
    if area.height < 3 || total > area.width {
        return Vec::new();
    }
    let y = area.bottom() - 2;
    let left = area.x + (area.width - total) / 2;
    (0..items)
        .map(|item| {
            let rect = Rect::new(left + item as u16 * (bar_width + 1), y, bar_width, 1);
            (rect, item)
        })
        .collect()
}
