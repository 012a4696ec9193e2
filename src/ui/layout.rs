use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::reveal::RegionSpan;

use super::sections::{SectionId, SectionRender};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiLayout {
    pub navbar: Rect,
    pub content: Rect,
    pub status: Rect,
}

pub fn split_layout(area: Rect, debug_status_visible: bool) -> UiLayout {
    let status_height = if debug_status_visible { 2 } else { 1 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(status_height),
        ])
        .split(area);

    UiLayout {
        navbar: chunks[0],
        content: chunks[1],
        status: chunks[2],
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpan {
    pub id: SectionId,
    pub span: RegionSpan,
}

/// Vertical geometry of the home page content column: where each section
/// starts and how tall the whole column is. Shared by scrolling, fragment
/// jumps, and the reveal observer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLayout {
    pub sections: Vec<SectionSpan>,
    pub total_height: u16,
    pub viewport_height: u16,
}

/// Blank rows separating stacked sections.
pub const SECTION_GAP: u16 = 1;

impl ContentLayout {
    /// Stacks rendered sections top to bottom with a gap between them.
    pub fn from_sections(sections: &[SectionRender], viewport_height: u16) -> Self {
        let mut spans = Vec::with_capacity(sections.len());
        let mut cursor: u16 = 0;
        for (index, section) in sections.iter().enumerate() {
            let height = section.lines.len() as u16;
            spans.push(SectionSpan {
                id: section.id,
                span: RegionSpan::new(cursor, height),
            });
            cursor = cursor.saturating_add(height);
            if index + 1 < sections.len() {
                cursor = cursor.saturating_add(SECTION_GAP);
            }
        }
        Self {
            sections: spans,
            total_height: cursor,
            viewport_height,
        }
    }

    pub fn span_of(&self, id: SectionId) -> Option<RegionSpan> {
        self.sections
            .iter()
            .find(|section| section.id == id)
            .map(|section| section.span)
    }

    pub fn max_scroll(&self) -> u16 {
        self.total_height.saturating_sub(self.viewport_height)
    }

    /// Section containing the given content row, used to step between
    /// sections from the keyboard.
    pub fn section_at(&self, row: u16) -> Option<SectionId> {
        self.sections
            .iter()
            .rev()
            .find(|section| section.span.offset <= row)
            .map(|section| section.id)
    }
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;
    use ratatui::text::Line;

    use crate::ui::sections::{SectionId, SectionRender};

    use super::{ContentLayout, split_layout};

    fn render(id: SectionId, height: usize) -> SectionRender {
        SectionRender {
            id,
            lines: vec![Line::default(); height],
        }
    }

    #[test]
    fn split_layout_reserves_navbar_and_status() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = split_layout(area, false);
        assert_eq!(layout.navbar.height, 3);
        assert_eq!(layout.status.height, 1);
        assert_eq!(layout.content.height, 36);

        let debug = split_layout(area, true);
        assert_eq!(debug.status.height, 2);
        assert_eq!(debug.content.height, 35);
    }

    #[test]
    fn content_layout_stacks_sections_with_gaps() {
        let sections = vec![
            render(SectionId::Hero, 5),
            render(SectionId::Education, 3),
            render(SectionId::Footer, 2),
        ];
        let layout = ContentLayout::from_sections(&sections, 8);

        let education = layout
            .span_of(SectionId::Education)
            .expect("education span should exist");
        assert_eq!(education.offset, 6);
        assert_eq!(education.height, 3);
        assert_eq!(layout.total_height, 12);
        assert_eq!(layout.max_scroll(), 4);
    }

    #[test]
    fn section_at_resolves_rows_to_the_owning_section() {
        let sections = vec![render(SectionId::Hero, 5), render(SectionId::Footer, 2)];
        let layout = ContentLayout::from_sections(&sections, 10);

        assert_eq!(layout.section_at(0), Some(SectionId::Hero));
        assert_eq!(layout.section_at(4), Some(SectionId::Hero));
        assert_eq!(layout.section_at(6), Some(SectionId::Footer));
        assert_eq!(layout.section_at(40), Some(SectionId::Footer));
    }

    #[test]
    fn max_scroll_is_zero_when_content_fits() {
        let layout = ContentLayout::from_sections(&[render(SectionId::Hero, 4)], 10);
        assert_eq!(layout.max_scroll(), 0);
    }
}
