//! Custom request extractors.

mod multipart_form;
mod validated_json;

pub use multipart_form::FormData;
pub use validated_json::{validate, ValidatedJson};
