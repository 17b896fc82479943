use validator::ValidateEmail;

use crate::model::form_data::FormData;

/// The fixed submission schema: a non-empty `name`, a syntactically valid
/// `email`, and an `image` key present in the merged fields∪files view.
///
/// Built once at start-up and handed to the handler through its state; there
/// is no module-level schema object.
#[derive(Debug, Clone)]
pub struct FormSchema {
    name_field: &'static str,
    email_field: &'static str,
    image_field: &'static str,
}

impl FormSchema {
    pub fn new() -> Self {
        Self {
            name_field: "name",
            email_field: "email",
            image_field: "image",
        }
    }

    /// Decides whether a parsed submission conforms to the schema.
    ///
    /// Always lands on a definite bool; nothing in here can fail. Keys the
    /// schema does not name are ignored.
    pub fn validate(&self, form_data: &FormData) -> bool {
        let name_ok = form_data
            .text(self.name_field)
            .is_some_and(|name| !name.is_empty());

        let email_ok = form_data
            .text(self.email_field)
            .is_some_and(|email| email.validate_email());

        // Presence only: an upload of any type or size satisfies `image`, and
        // so does a plain text field of that name, since the merged view is
        // what gets checked.
        let image_ok = form_data.has_key(self.image_field);

        name_ok && email_ok && image_ok
    }
}

impl Default for FormSchema {
    fn default() -> Self {
        Self::new()
    }
}
