use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout configuration
pub struct AppLayout {
    /// Rows the nav bar overlays at the top of the document.
    pub bar_rows: u16,
    /// Below this width the bar collapses its pills into a burger.
    pub breakpoint: u16,
}

impl Default for AppLayout {
    fn default() -> Self {
        Self {
            bar_rows: 2,
            breakpoint: 70,
        }
    }
}

/// Computed layout areas
pub struct LayoutAreas {
    /// Nav bar, drawn over the top of the document area so showing and
    /// hiding it never reflows the page.
    pub bar: Rect,
    pub document: Rect,
    pub status_bar: Rect,
}

impl AppLayout {
    pub fn compute(&self, area: Rect) -> LayoutAreas {
        // Reserve space for status bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        let document = chunks[0];
        let bar = Rect {
            height: self.bar_rows.min(document.height),
            ..document
        };

        LayoutAreas {
            bar,
            document,
            status_bar: chunks[1],
        }
    }

    pub fn is_compact(&self, width: u16) -> bool {
        width < self.breakpoint
    }
}

/// Calculate centered rect for modal
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Rect hugging the top-right corner of `area`, below the nav bar. Used
/// for the section drawer.
pub fn anchored_right(width: u16, height: u16, bar_rows: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height.saturating_sub(bar_rows));
    Rect {
        x: area.x + area.width - width,
        y: area.y + bar_rows.min(area.height),
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_overlays_the_document_top() {
        let layout = AppLayout::default();
        let areas = layout.compute(Rect::new(0, 0, 80, 24));
        assert_eq!(areas.document, Rect::new(0, 0, 80, 23));
        assert_eq!(areas.bar, Rect::new(0, 0, 80, 2));
        assert_eq!(areas.status_bar, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn bar_shrinks_before_the_document_does() {
        let layout = AppLayout::default();
        let areas = layout.compute(Rect::new(0, 0, 40, 2));
        assert!(areas.bar.height <= areas.document.height);
    }

    #[test]
    fn compact_below_breakpoint() {
        let layout = AppLayout::default();
        assert!(layout.is_compact(69));
        assert!(!layout.is_compact(70));
    }

    #[test]
    fn drawer_hugs_the_right_edge() {
        let rect = anchored_right(20, 8, 2, Rect::new(0, 0, 80, 24));
        assert_eq!(rect, Rect::new(60, 2, 20, 8));
    }
}
