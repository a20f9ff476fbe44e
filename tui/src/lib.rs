//! TUI rendering for Folio using ratatui.

mod contact;
mod effects;
mod input;
mod layout;
mod theme;

pub use effects::{camera, ease_out_strong, eased_progress};
pub use input::{InputPump, apply_event, handle_events};
pub use layout::{DeckLayout, Hit};
pub use theme::{Glyphs, Palette, glyphs, palette, spinner_frame, styles};

use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};

use folio_engine::{App, SlideAxis, SlideContent};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, area);

    let layout = DeckLayout::compute(app, area, &glyphs);
    let buf = frame.buffer_mut();

    if app.responsive_mode().is_mobile() {
        draw_document(buf, app, area, &palette, &glyphs);
    } else {
        draw_stage(buf, app, area, &palette, &glyphs);
        draw_dot_rail(buf, app, &layout, &palette, &glyphs);
        draw_bars(buf, app, &layout, &palette, &glyphs);
    }
    draw_navbar(buf, &layout, &palette);
}

/// Desktop: the deck is a vertical strip of viewport-sized sections and the
/// camera sits on the active one, or slides between two during a transition.
fn draw_stage(buf: &mut Buffer, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    if area.height == 0 {
        return;
    }
    let effect = app
        .transition_effect()
        .filter(|effect| effect.axis() == SlideAxis::Vertical);
    let camera_y = effect.map_or_else(
        || app.active_section() as f32 * f32::from(area.height),
        |effect| camera(effect, area.height),
    );

    for section in visible_indices(camera_y, area.height, app.deck().len()) {
        let top = (section as f32 * f32::from(area.height) - camera_y).round() as i32;
        let mut scratch = Buffer::empty(area);
        draw_section(&mut scratch, app, section, area, palette, glyphs);
        blit(&scratch, buf, area, 0, top);
    }
}

fn draw_section(
    buf: &mut Buffer,
    app: &App,
    section: usize,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let active = app.active_section();
    match app.deck().slide(section).as_horizontal() {
        None => {
            if let Some(content) = app.deck().slide(section).panels().first() {
                draw_panel(buf, content, area, palette);
            }
        }
        Some(group) => {
            let effect = app
                .transition_effect()
                .filter(|effect| section == active && effect.axis() == SlideAxis::Horizontal);
            let item = if section == active {
                app.horizontal_index()
            } else if section < active {
                group.last_index()
            } else {
                0
            };
            let camera_x = effect.map_or_else(
                || item as f32 * f32::from(area.width),
                |effect| camera(effect, area.width),
            );
            for index in visible_indices(camera_x, area.width, group.len()) {
                let Some(content) = group.get(index) else {
                    continue;
                };
                let left = (index as f32 * f32::from(area.width) - camera_x).round() as i32;
                let mut scratch = Buffer::empty(area);
                draw_panel(&mut scratch, content, area, palette);
                blit(&scratch, buf, area, left, 0);
            }
        }
    }

    if section == app.deck().last_section() {
        contact::draw_contact(buf, app, area, palette, glyphs);
    }
}

/// Mobile: every panel stacked top to bottom, scrolled natively.
fn draw_document(buf: &mut Buffer, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let scroll = app.native_scroll();
    let page_rows = scroll.page_rows();
    if page_rows == 0 {
        return;
    }
    let offset = i64::from(scroll.offset());
    let last = app.deck().last_section();

    let pages = app
        .deck()
        .slides()
        .iter()
        .enumerate()
        .flat_map(|(section, slide)| slide.panels().iter().map(move |panel| (section, panel)));

    for (page, (section, content)) in pages.enumerate() {
        let top = page as i64 * i64::from(page_rows) - offset;
        if top >= i64::from(area.height) || top + i64::from(page_rows) <= 0 {
            continue;
        }
        let page_area = Rect::new(area.x, area.y, area.width, page_rows);
        let mut scratch = Buffer::empty(page_area);
        draw_panel(&mut scratch, content, page_area, palette);
        if section == last {
            contact::draw_contact(&mut scratch, app, page_area, palette, glyphs);
        }
        blit(&scratch, buf, area, 0, top as i32);
    }
}

/// Indices of strip slots that overlap a viewport of `extent` cells.
fn visible_indices(camera: f32, extent: u16, count: usize) -> impl Iterator<Item = usize> {
    let extent = f32::from(extent.max(1));
    let first = (camera / extent).floor().max(0.0) as usize;
    let covers_two = camera % extent > f32::EPSILON;
    let last = if covers_two { first + 1 } else { first };
    (first..=last).filter(move |index| *index < count)
}

/// Copy `src` into `dst`, shifted by `(dx, dy)` and clipped to `clip`.
fn blit(src: &Buffer, dst: &mut Buffer, clip: Rect, dx: i32, dy: i32) {
    let from = src.area;
    for y in from.top()..from.bottom() {
        let ty = i32::from(y) + dy;
        if ty < i32::from(clip.top()) || ty >= i32::from(clip.bottom()) {
            continue;
        }
        for x in from.left()..from.right() {
            let tx = i32::from(x) + dx;
            if tx < i32::from(clip.left()) || tx >= i32::from(clip.right()) {
                continue;
            }
            if let (Some(cell), Some(target)) = (src.cell((x, y)), dst.cell_mut((tx as u16, ty as u16)))
            {
                *target = cell.clone();
            }
        }
    }
}

/// One full-screen panel: kicker, title, subtitle and body, centered.
fn draw_panel(buf: &mut Buffer, content: &SlideContent, area: Rect, palette: &Palette) {
    let accent = palette.accent(content.accent);
    Block::default()
        .style(Style::default().bg(palette.bg_dark))
        .render(area, buf);

    let mut lines = Vec::new();
    if !content.kicker.is_empty() {
        lines.push(Line::from(Span::styled(
            content.kicker,
            Style::default().fg(palette.text_muted),
        )));
    }
    lines.push(Line::from(Span::styled(content.title, styles::title(accent))));
    if !content.subtitle.is_empty() {
        lines.push(Line::from(Span::styled(
            content.subtitle,
            Style::default().fg(palette.text_secondary),
        )));
    }
    if !content.body.is_empty() {
        lines.push(Line::default());
        lines.extend(content.body.iter().map(|line| {
            Line::from(Span::styled(*line, Style::default().fg(palette.text_primary)))
        }));
    }

    let height = (lines.len() as u16).min(area.height);
    let top = area.y + (area.height - height) / 3;
    let text_area = Rect::new(area.x + 2_u16.min(area.width), top, area.width.saturating_sub(4), height);
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .render(text_area, buf);
}

fn draw_navbar(buf: &mut Buffer, layout: &DeckLayout, palette: &Palette) {
    let Some(bar) = layout.navbar else {
        return;
    };
    Block::default()
        .style(Style::default().bg(palette.bg_dark))
        .render(bar, buf);
    if let Some(brand) = layout.brand {
        Paragraph::new(Span::styled(folio_engine::content::BRAND, styles::brand(palette)))
            .render(brand, buf);
    }
    for (rect, link) in &layout.links {
        Paragraph::new(Span::styled(link.label, styles::nav_link(palette))).render(*rect, buf);
    }
}

fn draw_dot_rail(
    buf: &mut Buffer,
    app: &App,
    layout: &DeckLayout,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let active = app.active_section();
    let accent = app
        .deck()
        .slide(active)
        .panels()
        .first()
        .map_or(palette.green, |content| palette.accent(content.accent));
    for (rect, section) in &layout.dots {
        let (glyph, style) = if *section == active {
            (glyphs.dot_active, Style::default().fg(accent))
        } else {
            (glyphs.dot_inactive, Style::default().fg(palette.text_muted))
        };
        Paragraph::new(Span::styled(glyph, style))
            .alignment(Alignment::Center)
            .render(*rect, buf);
    }
}

fn draw_bars(buf: &mut Buffer, app: &App, layout: &DeckLayout, palette: &Palette, glyphs: &Glyphs) {
    let current = app.horizontal_index();
    for (rect, item) in &layout.bars {
        let (glyph, style) = if *item == current {
            (glyphs.bar_active, Style::default().fg(palette.text_primary))
        } else {
            (glyphs.bar_inactive, Style::default().fg(palette.text_muted))
        };
        Paragraph::new(Span::styled(glyph, style)).render(*rect, buf);
    }
}
