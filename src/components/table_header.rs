//! Table header - title line, or the context message while rows are selected

use crate::model::{Alignment, TableStyles};
use ratatui::{layout::Rect, widgets::Paragraph, Frame};

/// What the header line shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderContent {
    Title(String),
    Context(String),
}

impl HeaderContent {
    /// Context wins over the title while anything is selected
    pub fn resolve(title: Option<&str>, context: Option<String>) -> Option<Self> {
        match (context, title) {
            (Some(message), _) => Some(HeaderContent::Context(message)),
            (None, Some(title)) => Some(HeaderContent::Title(title.to_string())),
            (None, None) => None,
        }
    }
}

pub fn render_header(frame: &mut Frame, area: Rect, content: &HeaderContent, styles: &TableStyles) {
    let paragraph = match content {
        HeaderContent::Title(title) => Paragraph::new(format!(" {}", title)).style(styles.header),
        HeaderContent::Context(message) => {
            Paragraph::new(format!(" {}", message)).style(styles.context)
        }
    };
    frame.render_widget(paragraph, area);
}

pub fn render_sub_header(
    frame: &mut Frame,
    area: Rect,
    text: &str,
    align: Alignment,
    styles: &TableStyles,
) {
    frame.render_widget(
        Paragraph::new(text.to_string())
            .style(styles.sub_header)
            .alignment(align.into()),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_replaces_title() {
        assert_eq!(
            HeaderContent::resolve(Some("Orders"), Some("2 items selected".into())),
            Some(HeaderContent::Context("2 items selected".into()))
        );
        assert_eq!(
            HeaderContent::resolve(Some("Orders"), None),
            Some(HeaderContent::Title("Orders".into()))
        );
        assert_eq!(HeaderContent::resolve(None, None), None);
    }
}
