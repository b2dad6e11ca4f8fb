use crate::error::SketchError;
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::refs::{ObjectReferences, RefType};
use pdf_writer::{Content, Finish, Name, Pdf};

/// A single page: its size plus the content streams drawn onto it.
pub struct Page {
    /// The size of the page
    pub media_box: Rect,
    /// Finished content chunks, painted in insertion order
    pub contents: Vec<Vec<u8>>,
}

impl Page {
    pub fn new(size: PageSize) -> Page {
        Page {
            media_box: Rect::from_size(size),
            contents: Vec::default(),
        }
    }

    /// Add a finished content stream to the page.
    pub fn add_content(&mut self, content: Content) {
        self.contents.push(content.finish());
    }

    /// Concatenate the chunks, bracketing each in q/Q so graphics state
    /// cannot leak from one into the next.
    fn render(&self) -> Vec<u8> {
        let mut out: Vec<u8> = Vec::default();
        for chunk in self.contents.iter() {
            out.extend_from_slice(b"q\n");
            out.extend_from_slice(chunk);
            out.extend_from_slice(b"\nQ\n");
        }
        out
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        page_index: usize,
        writer: &mut Pdf,
    ) -> Result<(), SketchError> {
        let id = refs
            .get(RefType::Page(page_index))
            .ok_or(SketchError::PageMissing)?;
        let parent = refs
            .get(RefType::PageTree)
            .ok_or(SketchError::PageMissing)?;
        let label_font = refs.get(RefType::Font(0)).ok_or(SketchError::PageMissing)?;

        let mut page = writer.page(id);
        page.media_box(self.media_box.into());
        page.parent(parent);

        let mut resources = page.resources();
        let mut fonts = resources.fonts();
        fonts.pair(Name(b"F0"), label_font);
        fonts.finish();
        resources.finish();

        let content_id = refs.gen(RefType::ContentForPage(page_index));
        page.contents(content_id);
        page.finish();

        writer.stream(content_id, self.render().as_slice());
        Ok(())
    }
}
