//! Page geometry in terminal rows

use super::reveal::Extent;
use super::scroll::ROW_UNITS;
use crate::content::{CardKind, Section};

/// Height of the fixed header
pub const HEADER_ROWS: u16 = 3;
/// Height of a single card
pub const CARD_ROWS: u16 = 4;
/// Height reserved for the contact form block
pub const FORM_ROWS: u16 = 32;
/// Height of the footer with contact links
pub const FOOTER_ROWS: u16 = 3;

/// A run of page rows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowSpan {
    pub top: u16,
    pub height: u16,
}

impl RowSpan {
    pub fn extent(&self) -> Extent {
        Extent {
            top: self.top as f32 * ROW_UNITS,
            height: self.height as f32 * ROW_UNITS,
        }
    }

    pub fn bottom(&self) -> u16 {
        self.top + self.height
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionBox {
    pub id: &'static str,
    pub span: RowSpan,
    /// Row of the section title
    pub title_row: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardBox {
    pub section: usize,
    pub card: usize,
    pub kind: CardKind,
    pub span: RowSpan,
}

/// Row positions of everything on the page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLayout {
    pub sections: Vec<SectionBox>,
    pub cards: Vec<CardBox>,
    pub form: Option<RowSpan>,
    pub footer: RowSpan,
    pub total_rows: u16,
}

impl PageLayout {
    /// Stack sections vertically: title, intro, blank, cards, form, blank
    ///
    /// The fixed header overlays the top of the page, so content starts
    /// below a spacer of the same height.
    pub fn build(sections: &[Section]) -> Self {
        let mut layout = Self::default();
        let mut row: u16 = HEADER_ROWS;

        for (section_idx, section) in sections.iter().enumerate() {
            let top = row;
            let title_row = row;
            row += 3;

            for (card_idx, card) in section.cards.iter().enumerate() {
                layout.cards.push(CardBox {
                    section: section_idx,
                    card: card_idx,
                    kind: card.kind,
                    span: RowSpan {
                        top: row,
                        height: CARD_ROWS,
                    },
                });
                row += CARD_ROWS;
            }

            if section.has_form {
                layout.form = Some(RowSpan {
                    top: row,
                    height: FORM_ROWS,
                });
                row += FORM_ROWS;
            }

            row += 1;
            layout.sections.push(SectionBox {
                id: section.id,
                span: RowSpan {
                    top,
                    height: row - top,
                },
                title_row,
            });
        }

        layout.footer = RowSpan {
            top: row,
            height: FOOTER_ROWS,
        };
        layout.total_rows = layout.footer.bottom();
        layout
    }

    pub fn section(&self, id: &str) -> Option<&SectionBox> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Scrollable range for a viewport of `viewport_rows` rows, in units
    pub fn max_scroll(&self, viewport_rows: u16) -> f32 {
        self.total_rows.saturating_sub(viewport_rows) as f32 * ROW_UNITS
    }
}
