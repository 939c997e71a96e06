use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Widget},
};

use crate::ui::theme::Theme;

/// Rounded panel framing one section of the expense page.
///
/// Besides the title it can carry a row count on the right of the top border
/// and a key hint on the bottom border. An alert border wins over focus.
pub struct Card<'a> {
    title: &'a str,
    theme: &'a Theme,
    focused: bool,
    alert: bool,
    count: Option<usize>,
    footer: Option<&'a str>,
}

impl<'a> Card<'a> {
    pub fn new(title: &'a str, theme: &'a Theme) -> Self {
        Self {
            title,
            theme,
            focused: false,
            alert: false,
            count: None,
            footer: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Red border, used while spending is over budget.
    pub fn alert(mut self, alert: bool) -> Self {
        self.alert = alert;
        self
    }

    pub fn count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    pub fn footer(mut self, footer: &'a str) -> Self {
        self.footer = Some(footer);
        self
    }

    fn border_style(&self) -> Style {
        let color = if self.alert {
            self.theme.error
        } else if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border
        };
        Style::default().fg(color)
    }

    pub fn block(&self) -> Block<'a> {
        let title_style = if self.focused {
            Style::default()
                .fg(self.theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.theme.accent)
        };
        let dim = Style::default().fg(self.theme.dim);

        let mut block = Block::default()
            .title(Span::styled(format!(" {} ", self.title), title_style))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.border_style())
            .style(Style::default().bg(self.theme.panel));
        if let Some(count) = self.count {
            block = block
                .title_top(Line::from(Span::styled(format!(" {count} rows "), dim)).right_aligned());
        }
        if let Some(footer) = self.footer {
            block = block.title_bottom(Line::from(Span::styled(format!(" {footer} "), dim)));
        }
        block
    }

    pub fn inner(&self, area: Rect) -> Rect {
        self.block().inner(area)
    }

    pub fn render_with<W: Widget>(&self, frame: &mut Frame<'_>, area: Rect, content: W) {
        let inner = self.inner(area);
        frame.render_widget(self.block(), area);
        frame.render_widget(content, inner);
    }
}
