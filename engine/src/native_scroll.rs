//! Mobile document scrolling.
//!
//! On narrow viewports every panel is stacked into one tall document, one
//! viewport-height page per panel, and the visitor scrolls it directly.

use crate::gesture::NativeScrollDelta;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NativeScroll {
    offset: u32,
    page_rows: u16,
    pages: usize,
}

impl NativeScroll {
    #[must_use]
    pub fn new(pages: usize, page_rows: u16) -> Self {
        Self {
            offset: 0,
            page_rows,
            pages,
        }
    }

    #[must_use]
    pub fn offset(&self) -> u32 {
        self.offset
    }

    #[must_use]
    pub fn page_rows(&self) -> u16 {
        self.page_rows
    }

    #[must_use]
    pub fn content_rows(&self) -> u32 {
        (self.pages as u32).saturating_mul(u32::from(self.page_rows))
    }

    #[must_use]
    pub fn max_offset(&self) -> u32 {
        self.content_rows()
            .saturating_sub(u32::from(self.page_rows))
    }

    /// Page under the top edge of the viewport.
    #[must_use]
    pub fn current_page(&self) -> usize {
        if self.page_rows == 0 {
            return 0;
        }
        (self.offset / u32::from(self.page_rows)) as usize
    }

    /// Keep the same page in view after the viewport height changes.
    pub fn set_page_rows(&mut self, page_rows: u16) {
        if page_rows == self.page_rows {
            return;
        }
        let page = self.current_page();
        let within = if self.page_rows == 0 {
            0
        } else {
            self.offset % u32::from(self.page_rows)
        };
        self.page_rows = page_rows;
        self.offset = (page as u32)
            .saturating_mul(u32::from(page_rows))
            .saturating_add(within.min(u32::from(page_rows).saturating_sub(1)));
        self.clamp();
    }

    pub fn scroll(&mut self, delta: NativeScrollDelta) {
        let rows = match delta {
            NativeScrollDelta::Rows(rows) => i64::from(rows),
            NativeScrollDelta::Pages(pages) => i64::from(pages) * i64::from(self.page_rows),
        };
        let target = i64::from(self.offset) + rows;
        self.offset = target.clamp(0, i64::from(self.max_offset())) as u32;
    }

    /// Jump so `page` starts at the top of the viewport.
    pub fn scroll_to_page(&mut self, page: usize) {
        self.offset = (page as u32).saturating_mul(u32::from(self.page_rows));
        self.clamp();
    }

    fn clamp(&mut self) {
        self.offset = self.offset.min(self.max_offset());
    }
}
