// Aggregate output assembly - collects pages from many PDFs into one
use std::collections::BTreeMap;
use std::path::Path;

use lopdf::{Dictionary, Document, Object, ObjectId};

use crate::types::{Result, SiftError};

/// Accumulates verbatim copies of selected pages across a whole run and
/// writes them out as a single PDF.
///
/// Sources are held as cloned documents until `save`, where their objects are
/// renumbered into one id space and a fresh page tree is built over the kept
/// pages. Page attributes inherited from a source's own page tree (rare in
/// invoice PDFs) are not resolved.
#[derive(Default)]
pub struct PageCollector {
    sources: Vec<(Document, Vec<u32>)>,
    pages: usize,
}

impl PageCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.pages == 0
    }

    pub fn page_count(&self) -> usize {
        self.pages
    }

    /// Queue the given 1-based pages of `document` for the output, in order.
    pub fn add_pages(&mut self, document: &Document, keep: &[u32]) {
        if keep.is_empty() {
            return;
        }
        self.pages += keep.len();
        self.sources.push((document.clone(), keep.to_vec()));
    }

    /// Write the collected pages to `path`, overwriting any existing file.
    /// Returns the number of pages written.
    pub fn save(self, path: &Path) -> Result<usize> {
        if self.is_empty() {
            return Err(SiftError::Assemble("no pages collected".into()));
        }

        let mut kept_pages: Vec<(ObjectId, Object)> = Vec::new();
        let mut all_objects: BTreeMap<ObjectId, Object> = BTreeMap::new();
        let mut max_id = 1;

        for (mut document, keep) in self.sources {
            document.renumber_objects_with(max_id);
            max_id = document.max_id + 1;

            let page_ids = document.get_pages();
            for page in keep {
                let id = page_ids
                    .get(&page)
                    .copied()
                    .ok_or(SiftError::PageNotFound(page))?;
                kept_pages.push((id, document.get_object(id)?.to_owned()));
            }
            all_objects.extend(std::mem::take(&mut document.objects));
        }

        let mut merged = Document::with_version("1.5");
        let mut catalog: Option<(ObjectId, Dictionary)> = None;
        let mut pages_root: Option<(ObjectId, Dictionary)> = None;

        for (id, object) in all_objects {
            match object_type(&object) {
                b"Catalog" => {
                    if catalog.is_none() {
                        if let Ok(dict) = object.as_dict() {
                            catalog = Some((id, dict.clone()));
                        }
                    }
                }
                b"Pages" => {
                    if pages_root.is_none() {
                        if let Ok(dict) = object.as_dict() {
                            pages_root = Some((id, dict.clone()));
                        }
                    }
                }
                // Kept pages are re-inserted below with a fresh parent;
                // dropped pages simply never reappear.
                b"Page" => {}
                b"Outlines" | b"Outline" => {}
                _ => {
                    merged.objects.insert(id, object);
                }
            }
        }

        let (pages_id, mut pages_dict) =
            pages_root.ok_or_else(|| SiftError::Assemble("no page tree in any source".into()))?;
        let (catalog_id, mut catalog_dict) =
            catalog.ok_or_else(|| SiftError::Assemble("no catalog in any source".into()))?;

        for (id, object) in &kept_pages {
            if let Ok(dict) = object.as_dict() {
                let mut dict = dict.clone();
                dict.set("Parent", pages_id);
                merged.objects.insert(*id, Object::Dictionary(dict));
            }
        }

        pages_dict.set("Count", kept_pages.len() as i64);
        pages_dict.set(
            "Kids",
            kept_pages
                .iter()
                .map(|(id, _)| Object::Reference(*id))
                .collect::<Vec<Object>>(),
        );
        merged.objects.insert(pages_id, Object::Dictionary(pages_dict));

        catalog_dict.set("Pages", pages_id);
        catalog_dict.remove(b"Outlines");
        merged.objects.insert(catalog_id, Object::Dictionary(catalog_dict));

        merged.trailer.set("Root", catalog_id);
        merged.max_id = max_id;
        merged.prune_objects();
        merged.renumber_objects();
        merged.compress();
        merged.save(path)?;

        Ok(kept_pages.len())
    }
}

fn object_type(object: &Object) -> &[u8] {
    object
        .as_dict()
        .ok()
        .and_then(|dict| dict.get(b"Type").ok())
        .and_then(|ty| ty.as_name().ok())
        .unwrap_or(b"")
}
