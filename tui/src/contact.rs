//! Contact form overlay on the last slide.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use folio_engine::{App, ContactField, FormStatus};

use crate::theme::{Glyphs, Palette, spinner_frame, styles};

const FORM_WIDTH: u16 = 56;
const FORM_HEIGHT: u16 = 13;
const LABEL_WIDTH: usize = 7;

pub(crate) fn draw_contact(
    buf: &mut Buffer,
    app: &App,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let form = app.contact();
    let status = form.status();
    if status == FormStatus::Closed {
        return;
    }

    let width = FORM_WIDTH.min(area.width.saturating_sub(2));
    let height = FORM_HEIGHT.min(area.height);
    if width < 20 || height < 6 {
        return;
    }
    let rect = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );

    Clear.render(rect, buf);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.pink))
        .style(Style::default().bg(palette.bg_panel))
        .title(Span::styled(" Let's Talk ", styles::title(palette.pink)));
    let inner = block.inner(rect);
    block.render(rect, buf);

    let mut lines = Vec::new();
    if status == FormStatus::Sent {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!("{} Thanks! We'll be in touch soon.", glyphs.sent),
            Style::default().fg(palette.success),
        )));
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
        return;
    }

    let value_width = usize::from(inner.width).saturating_sub(LABEL_WIDTH + 2);
    for field in ContactField::ALL {
        let focused = form.focus() == field && matches!(status, FormStatus::Editing { .. });
        let value = form.draft().value(field);
        let label_style = if focused {
            styles::key_highlight(palette)
        } else {
            styles::key_hint(palette)
        };
        let mut spans = vec![Span::styled(
            format!(" {:<LABEL_WIDTH$}", field.label()),
            label_style,
        )];
        if value.is_empty() && !focused {
            spans.push(Span::styled(
                field.placeholder(),
                Style::default().fg(palette.text_muted),
            ));
        } else {
            spans.push(Span::styled(
                tail_fit(value, value_width),
                Style::default()
                    .fg(palette.text_primary)
                    .bg(palette.bg_field),
            ));
        }
        if focused {
            spans.push(Span::styled(glyphs.cursor, Style::default().fg(palette.pink)));
        }
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    match status {
        FormStatus::Submitting => lines.push(Line::from(Span::styled(
            format!(" {} Sending...", spinner_frame(app.tick_count(), app.ui_options())),
            Style::default().fg(palette.text_secondary),
        ))),
        FormStatus::Editing { error: Some(error) } => lines.push(Line::from(Span::styled(
            format!(" {} {error}", glyphs.failed),
            styles::error(palette),
        ))),
        _ => lines.push(Line::default()),
    }
    lines.push(Line::from(vec![
        Span::styled(" Tab", styles::key_highlight(palette)),
        Span::styled(" next  ", styles::key_hint(palette)),
        Span::styled("Enter", styles::key_highlight(palette)),
        Span::styled(" send  ", styles::key_hint(palette)),
        Span::styled("Esc", styles::key_highlight(palette)),
        Span::styled(" close", styles::key_hint(palette)),
    ]));

    Paragraph::new(lines).render(inner, buf);
}

/// Keep the end of `value` visible when it is wider than `max` columns.
fn tail_fit(value: &str, max: usize) -> String {
    if value.width() <= max {
        return value.to_string();
    }
    let mut kept: Vec<char> = Vec::new();
    let mut width = 0;
    for c in value.chars().rev() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if width + w > max {
            break;
        }
        width += w;
        kept.push(c);
    }
    kept.into_iter().rev().collect()
}
