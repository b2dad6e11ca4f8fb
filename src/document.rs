use crate::error::SketchError;
use crate::info::Info;
use crate::page::Page;
use crate::refs::{ObjectReferences, RefType};
use id_arena::{Arena, Id};
use pdf_writer::{Finish, Name, Pdf, Ref};
use std::io::Write;

/// A document is the main object that collects pages, then renders them
/// out with a call to [Document::write]
#[derive(Default)]
pub struct Document {
    pub info: Option<Info>,
    pub pages: Arena<Page>,
    pub page_order: Vec<Id<Page>>,
}

impl Document {
    /// Sets information about the document. If not provided, no information
    /// block will be written to the PDF
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    /// Add a page to the end of the document, returning its id. The id
    /// stays valid however pages are later added around it.
    pub fn add_page(&mut self, page: Page) -> Id<Page> {
        let id = self.pages.alloc(page);
        self.page_order.push(id);
        id
    }

    /// Write the entire document to the writer. The whole document is
    /// rendered in memory first; references are resolved here and not
    /// before, so pages can be added freely up until this call.
    pub fn write<W: Write>(self, mut w: W) -> Result<(), SketchError> {
        let Document {
            info,
            pages,
            page_order,
        } = self;

        let mut refs = ObjectReferences::new();

        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);

        let mut writer = Pdf::new();
        if let Some(info) = info {
            info.write(&mut refs, &mut writer);
        }

        // page refs are keyed by page_order index, not arena index
        let page_refs: Vec<Ref> = page_order
            .iter()
            .enumerate()
            .map(|(i, _id)| refs.gen(RefType::Page(i)))
            .collect();

        writer
            .pages(page_tree_id)
            .count(page_refs.len() as i32)
            .kids(page_refs);

        // one shared font resource: the built-in Helvetica face used for
        // the axis labels
        let font_id = refs.gen(RefType::Font(0));
        writer.type1_font(font_id).base_font(Name(b"Helvetica"));

        for (page_index, id) in page_order.iter().enumerate() {
            let page = pages.get(*id).ok_or(SketchError::PageMissing)?;
            page.write(&mut refs, page_index, &mut writer)?;
        }

        let mut catalog = writer.catalog(catalog_id);
        catalog.pages(page_tree_id);
        catalog.finish();

        w.write_all(writer.finish().as_slice()).map_err(Into::into)
    }
}
