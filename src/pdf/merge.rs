use crate::error::{Error, Result};
use crate::pdf::PdfDocument;
use lopdf::{Document, Object, ObjectId};
use std::collections::BTreeMap;

/// Concatenate documents into one, preserving the given order and each
/// document's internal page order.
///
/// Object IDs of every source are renumbered past the running maximum so the
/// merged ID space has no clashes. The first source's Catalog is reused as
/// the output catalog; a single Pages node is rebuilt with all pages as
/// direct kids. Outlines are dropped (bookmark merging is out of scope).
pub fn concatenate(sources: Vec<PdfDocument>) -> Result<Document> {
    let first_path = sources
        .first()
        .map(|s| s.path.clone())
        .unwrap_or_default();

    let mut max_id = 1;
    let mut page_objects: Vec<(ObjectId, Object)> = Vec::new();
    let mut documents_objects: BTreeMap<ObjectId, Object> = BTreeMap::new();

    for mut source in sources {
        source.doc.renumber_objects_with(max_id);
        max_id = source.doc.max_id + 1;

        for (_, page_id) in source.page_ids() {
            let object = source
                .doc
                .get_object(page_id)
                .map_err(|e| Error::SourceUnreadable {
                    path: source.path.clone(),
                    reason: e.to_string(),
                })?
                .to_owned();
            page_objects.push((page_id, object));
        }

        documents_objects.extend(source.doc.objects);
    }

    let mut merged = Document::with_version("1.5");
    let mut catalog_object: Option<(ObjectId, Object)> = None;
    let mut pages_object: Option<(ObjectId, Object)> = None;

    // Pages are re-inserted separately below; Outlines would dangle after a
    // merge, so they are skipped entirely.
    for (object_id, object) in documents_objects.iter() {
        match object.type_name().unwrap_or(b"") {
            b"Catalog" => {
                if catalog_object.is_none() {
                    catalog_object = Some((*object_id, object.clone()));
                }
            }
            b"Pages" => {
                if let Ok(dictionary) = object.as_dict() {
                    let mut dictionary = dictionary.clone();
                    if let Some((_, ref existing)) = pages_object {
                        if let Ok(existing) = existing.as_dict() {
                            dictionary.extend(existing);
                        }
                    }
                    let id = pages_object
                        .as_ref()
                        .map(|(id, _)| *id)
                        .unwrap_or(*object_id);
                    pages_object = Some((id, Object::Dictionary(dictionary)));
                }
            }
            b"Page" | b"Outlines" | b"Outline" => {}
            _ => {
                merged.objects.insert(*object_id, object.clone());
            }
        }
    }

    let unreadable = |reason: &str| Error::SourceUnreadable {
        path: first_path.clone(),
        reason: reason.to_string(),
    };

    let Some((pages_id, pages_root)) = pages_object else {
        return Err(unreadable("no Pages root found"));
    };
    let Some((catalog_id, catalog)) = catalog_object else {
        return Err(unreadable("no Catalog found"));
    };

    let mut kids = Vec::with_capacity(page_objects.len());
    for (page_id, object) in page_objects {
        if let Ok(dictionary) = object.as_dict() {
            let mut dictionary = dictionary.clone();
            dictionary.set("Parent", pages_id);
            kids.push(Object::Reference(page_id));
            merged
                .objects
                .insert(page_id, Object::Dictionary(dictionary));
        }
    }

    if let Ok(dictionary) = pages_root.as_dict() {
        let mut dictionary = dictionary.clone();
        dictionary.set("Count", kids.len() as u32);
        dictionary.set("Kids", kids);
        merged
            .objects
            .insert(pages_id, Object::Dictionary(dictionary));
    }

    if let Ok(dictionary) = catalog.as_dict() {
        let mut dictionary = dictionary.clone();
        dictionary.set("Pages", pages_id);
        dictionary.remove(b"Outlines");
        merged
            .objects
            .insert(catalog_id, Object::Dictionary(dictionary));
    }

    merged.trailer.set("Root", catalog_id);
    merged.max_id = max_id;
    merged.renumber_objects();

    Ok(merged)
}
