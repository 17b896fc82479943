//! Parse stage: turns a multipart request body into a [`FormData`].

use std::fs::write;
use std::path::{Path, PathBuf};

use axum::extract::Multipart;

use crate::model::form_data::FormData;
use crate::model::upload::UploadedFile;

/// Consumes the multipart stream into field and file maps.
///
/// Runs once per request and resolves exactly once, with either the parsed
/// form or the first stream error. File part content is written to a spool
/// file under `upload_dir`; spool files are not cleaned up here.
///
/// Browsers send an empty part (`filename=""`, no content) for a file input
/// the user left blank. Such parts are dropped so the field counts as absent.
pub async fn parse_form(mut multipart: Multipart, upload_dir: &Path) -> Result<FormData, String> {
    let mut form_data = FormData::default();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => return Err(format!("Malformed multipart stream: {e}")),
        };

        let Some(name) = field.name().map(|name| name.to_owned()) else {
            // A part without a field name has nowhere to land
            continue;
        };

        match field.file_name().map(|file_name| file_name.to_owned()) {
            Some(file_name) => {
                let content_type = field.content_type().map(|ct| ct.to_owned());

                let data = field
                    .bytes()
                    .await
                    .map_err(|e| format!("Could not read file part '{name}': {e}"))?;

                if file_name.is_empty() && data.is_empty() {
                    continue;
                }

                let spool_path = spool_path(upload_dir);
                write(&spool_path, &data)
                    .map_err(|e| format!("Could not spool file part '{name}': {e}"))?;

                form_data.push_file(
                    name,
                    UploadedFile {
                        file_name,
                        content_type,
                        size: data.len() as u64,
                        spool_path,
                    },
                );
            }
            None => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| format!("Could not read field '{name}': {e}"))?;

                form_data.push_field(name, value);
            }
        }
    }

    Ok(form_data)
}

/// Fresh random file name in the upload directory
fn spool_path(upload_dir: &Path) -> PathBuf {
    let stamp = rand::random_iter::<u8>()
        .take(16)
        .map(|b| format!("{:x}", b % 16))
        .collect::<String>();

    upload_dir.join(format!("upload-{stamp}"))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::extract::{FromRequest, Multipart, Request};
    use axum::http::header::CONTENT_TYPE;

    use super::parse_form;

    const BOUNDARY: &str = "form-data-test-boundary";

    async fn multipart_from(body: String) -> Multipart {
        let request = Request::builder()
            .method("POST")
            .header(
                CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap();

        Multipart::from_request(request, &()).await.unwrap()
    }

    fn text_part(name: &str, value: &str) -> String {
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        )
    }

    fn file_part(name: &str, file_name: &str, content: &str) -> String {
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n{content}\r\n"
        )
    }

    fn closed(parts: String) -> String {
        format!("{parts}--{BOUNDARY}--\r\n")
    }

    #[tokio::test]
    async fn collects_fields_and_spools_files() {
        let body = closed(
            text_part("name", "Ada")
                + &text_part("email", "ada@example.com")
                + &file_part("image", "cat.png", "PNGDATA"),
        );

        let multipart = multipart_from(body).await;
        let form_data = parse_form(multipart, &std::env::temp_dir()).await.unwrap();

        assert_eq!(form_data.text("name"), Some("Ada"));
        assert_eq!(form_data.text("email"), Some("ada@example.com"));

        let image = &form_data.files()["image"][0];
        assert_eq!(image.file_name, "cat.png");
        assert_eq!(image.size, 7);
        assert_eq!(std::fs::read(&image.spool_path).unwrap(), b"PNGDATA");
    }

    #[tokio::test]
    async fn repeated_names_accumulate() {
        let body = closed(
            text_part("tag", "one")
                + &text_part("tag", "two")
                + &file_part("image", "a.png", "A")
                + &file_part("image", "b.png", "B"),
        );

        let multipart = multipart_from(body).await;
        let form_data = parse_form(multipart, &std::env::temp_dir()).await.unwrap();

        assert_eq!(form_data.fields()["tag"], vec!["one", "two"]);
        assert_eq!(form_data.files()["image"].len(), 2);
    }

    #[tokio::test]
    async fn blank_file_input_counts_as_absent() {
        let body = closed(text_part("name", "Ada") + &file_part("image", "", ""));

        let multipart = multipart_from(body).await;
        let form_data = parse_form(multipart, &std::env::temp_dir()).await.unwrap();

        assert!(!form_data.has_key("image"));
    }

    #[tokio::test]
    async fn truncated_stream_is_a_parse_error() {
        // No terminating boundary
        let body = text_part("name", "Ada");

        let multipart = multipart_from(body).await;
        let result = parse_form(multipart, &std::env::temp_dir()).await;

        assert!(result.is_err());
    }
}
