use std::collections::HashMap;

use crate::model::upload::UploadedFile;

/// A parsed multipart submission: text fields and spooled file parts, keyed
/// by field name. Repeated names accumulate in arrival order.
///
/// Validation looks at the *merged* view of the two maps, in which a file
/// part shadows a text field of the same name. The lookup methods below make
/// that contract explicit instead of leaving it to map-union order.
#[derive(Debug, Default)]
pub struct FormData {
    fields: HashMap<String, Vec<String>>,
    files: HashMap<String, Vec<UploadedFile>>,
}

impl FormData {
    pub fn push_field(&mut self, name: String, value: String) {
        self.fields.entry(name).or_default().push(value);
    }

    pub fn push_file(&mut self, name: String, file: UploadedFile) {
        self.files.entry(name).or_default().push(file);
    }

    /// First text value under `name`, or `None` when the key is absent or
    /// shadowed by a file part.
    pub fn text(&self, name: &str) -> Option<&str> {
        if self.files.contains_key(name) {
            return None;
        }

        self.fields
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Whether `name` exists in the merged fields∪files view.
    pub fn has_key(&self, name: &str) -> bool {
        self.files.contains_key(name) || self.fields.contains_key(name)
    }

    pub fn fields(&self) -> &HashMap<String, Vec<String>> {
        &self.fields
    }

    pub fn files(&self) -> &HashMap<String, Vec<UploadedFile>> {
        &self.files
    }
}
