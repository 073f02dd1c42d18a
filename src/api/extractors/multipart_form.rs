//! Multipart form extractor for the resources that accept an image upload.

use std::collections::HashMap;
use std::str::FromStr;

use axum::{
    async_trait,
    extract::{FromRequest, Multipart, Request},
};

use crate::config::IMAGE_FIELD;
use crate::errors::AppError;

/// Text fields of a multipart form plus the optional `imagen` file.
#[derive(Debug, Default)]
pub struct FormData {
    fields: HashMap<String, String>,
    image: Option<Vec<u8>>,
}

impl FormData {
    /// Required text field
    pub fn text(&self, name: &str) -> Result<String, AppError> {
        self.optional_text(name)
            .ok_or_else(|| AppError::validation(format!("{name} is required")))
    }

    /// Text field, `None` when absent or blank
    pub fn optional_text(&self, name: &str) -> Option<String> {
        self.fields
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .map(String::from)
    }

    /// Required field parsed into `T`
    pub fn parse<T: FromStr>(&self, name: &str) -> Result<T, AppError> {
        let raw = self.text(name)?;
        raw.parse()
            .map_err(|_| AppError::validation(format!("{name} has an invalid value: {raw}")))
    }

    /// Optional field parsed into `T`
    pub fn parse_optional<T: FromStr>(&self, name: &str) -> Result<Option<T>, AppError> {
        match self.optional_text(name) {
            Some(raw) => raw
                .parse()
                .map(Some)
                .map_err(|_| AppError::validation(format!("{name} has an invalid value: {raw}"))),
            None => Ok(None),
        }
    }

    /// Uploaded image bytes; an empty file counts as no upload
    pub fn take_image(&mut self) -> Option<Vec<u8>> {
        self.image.take().filter(|bytes| !bytes.is_empty())
    }

    #[cfg(test)]
    pub(crate) fn from_parts(fields: &[(&str, &str)], image: Option<Vec<u8>>) -> Self {
        Self {
            fields: fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            image,
        }
    }
}

#[async_trait]
impl<S> FromRequest<S> for FormData
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        let mut form = FormData::default();
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?
        {
            let Some(name) = field.name().map(String::from) else {
                continue;
            };

            if name == IMAGE_FIELD {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::bad_request(e.body_text()))?;
                tracing::debug!(size = bytes.len(), "Received image upload");
                form.image = Some(bytes.to_vec());
            } else {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::bad_request(e.body_text()))?;
                form.fields.insert(name, value);
            }
        }

        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_and_parse() {
        let form = FormData::from_parts(
            &[("nombre", " Huerta "), ("idregiones", "7"), ("tipo", "")],
            None,
        );

        assert_eq!(form.text("nombre").unwrap(), "Huerta");
        assert_eq!(form.parse::<i32>("idregiones").unwrap(), 7);
        assert!(form.text("tipo").is_err());
        assert_eq!(form.parse_optional::<i32>("tipo").unwrap(), None);
        assert!(matches!(form.parse::<i32>("nombre"), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_empty_upload_is_ignored() {
        let mut form = FormData::from_parts(&[], Some(Vec::new()));
        assert!(form.take_image().is_none());

        let mut form = FormData::from_parts(&[], Some(vec![1, 2, 3]));
        assert_eq!(form.take_image(), Some(vec![1, 2, 3]));
    }
}
