//! Side panels: design selector, presets, colors, quote and favorites.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Focus, Theme};
use crate::branding::FOOTER_LINES;
use crate::models::{design_name, ColorKey, RgbColor, DESIGN_OPTIONS, PRESETS};

/// Favorites listed in the panel, most recent last.
pub const FAVORITES_SHOWN: usize = 3;

fn panel<'a>(title: String, focused: bool, theme: &Theme) -> Block<'a> {
    let border = if focused { theme.accent } else { theme.primary };
    let title_style = if focused {
        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.primary)
    };
    Block::default()
        .title(Span::styled(title, title_style))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(theme.background))
}

/// A small colored swatch, or `?` for text that is not a color.
fn swatch(text: &str, width: usize, theme: &Theme) -> Span<'static> {
    match RgbColor::parse_lenient(text) {
        Some(color) => Span::styled(" ".repeat(width), Style::default().bg(color.to_ratatui_color())),
        None => Span::styled(
            format!("{:^width$}", "?"),
            Style::default().fg(theme.warning),
        ),
    }
}

fn cursor_style(selected: bool, theme: &Theme) -> Style {
    if selected {
        Style::default().bg(theme.highlight_bg).fg(theme.text)
    } else {
        Style::default().fg(theme.text)
    }
}

/// "Elige tu diseño": one row of design cards.
pub fn render_designs(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let focused = state.focus == Focus::Designs;
    let mut spans = Vec::new();

    for (i, option) in DESIGN_OPTIONS.iter().enumerate() {
        let selected = state.session.selected_design() == option.id.id();
        let marker = if selected { "◆" } else { " " };
        let mut style = cursor_style(focused && state.design_cursor == i, theme);
        if selected {
            style = style.fg(theme.accent).add_modifier(Modifier::BOLD);
        }
        spans.push(Span::styled(
            format!(" {marker}{} {} ", option.icon, option.name),
            style,
        ));
        spans.push(Span::raw(" "));
    }

    let mut lines = vec![Line::from(spans)];
    if state.session.design().is_none() {
        lines.push(Line::from(Span::styled(
            format!("Diseño actual: {}", design_name(state.session.selected_design())),
            Style::default().fg(theme.warning),
        )));
    }

    let widget = Paragraph::new(lines).block(panel(" Elige tu diseño ".to_string(), focused, theme));
    f.render_widget(widget, area);
}

/// "Paletas de inspiración": presets with four swatches each.
pub fn render_presets(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let focused = state.focus == Focus::Presets;

    let lines: Vec<Line> = PRESETS
        .iter()
        .enumerate()
        .map(|(i, preset)| {
            let mut spans: Vec<Span> = preset
                .swatches(4)
                .iter()
                .flat_map(|hex| [swatch(hex, 2, theme), Span::raw(" ")])
                .collect();
            spans.push(Span::styled(
                format!(" {} ", preset.name),
                cursor_style(focused && state.preset_cursor == i, theme),
            ));
            Line::from(spans)
        })
        .collect();

    let widget =
        Paragraph::new(lines).block(panel(" Paletas de inspiración ".to_string(), focused, theme));
    f.render_widget(widget, area);
}

/// "Personaliza cada color": every slot with its swatch and text.
pub fn render_colors(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let focused = state.focus == Focus::Colors;

    let lines: Vec<Line> = state
        .session
        .colors()
        .iter()
        .map(|(key, value)| {
            let selected = focused && state.color_cursor == key.index();
            Line::from(vec![
                swatch(value, 4, theme),
                Span::raw(" "),
                Span::styled(
                    format!("{:<18}", key.label()),
                    cursor_style(selected, theme),
                ),
                Span::styled(value.to_string(), Style::default().fg(theme.text_secondary)),
            ])
        })
        .collect();

    let widget =
        Paragraph::new(lines).block(panel(" Personaliza cada color ".to_string(), focused, theme));
    f.render_widget(widget, area);
}

/// "Cotización": breakdown, total and the message shortcuts.
pub fn render_quote(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let quote = state.session.quote();
    let row = |label: &str, amount: i64| {
        Line::from(vec![
            Span::styled(format!("{label:<18}"), Style::default().fg(theme.text)),
            Span::styled(format!("${amount}"), Style::default().fg(theme.text)),
        ])
    };

    let mut lines = vec![
        row("Tapiz base:", quote.base),
        row("Personalización:", quote.customization),
    ];
    if quote.has_design_surcharge() {
        lines.push(row("Diseño especial:", quote.design));
    }
    lines.push(Line::from(vec![
        Span::styled(
            format!("{:<18}", "Total:"),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("${}", quote.total),
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("w", Style::default().fg(theme.success).add_modifier(Modifier::BOLD)),
        Span::raw(" 💬 Pedir por WhatsApp   "),
        Span::styled("s", Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)),
        Span::raw(" Compartir Diseño"),
    ]));
    for footer in FOOTER_LINES {
        lines.push(Line::from(Span::styled(
            footer,
            Style::default().fg(theme.text_muted),
        )));
    }

    let widget = Paragraph::new(lines).block(panel(" Cotización ".to_string(), false, theme));
    f.render_widget(widget, area);
}

/// "Favoritos (n)": the last few snapshots. Callers skip it when empty.
pub fn render_favorites(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let favorites = state.session.favorites();
    let start = favorites.len().saturating_sub(FAVORITES_SHOWN);

    let lines: Vec<Line> = favorites[start..]
        .iter()
        .map(|favorite| {
            let mut spans: Vec<Span> = ColorKey::ALL[..3]
                .iter()
                .map(|key| swatch(favorite.colors().get(*key), 1, theme))
                .collect();
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                design_name(favorite.design()),
                Style::default().fg(theme.text),
            ));
            spans.push(Span::styled(
                format!("  {}", favorite.timestamp()),
                Style::default().fg(theme.text_muted),
            ));
            Line::from(spans)
        })
        .collect();

    let title = format!(" Favoritos ({}) ", favorites.len());
    let widget = Paragraph::new(lines).block(panel(title, false, theme));
    f.render_widget(widget, area);
}
