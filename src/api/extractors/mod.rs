//! Custom request extractors.

mod mugshot_upload;
mod validated_json;
mod validated_query;

pub use mugshot_upload::MugshotUpload;
pub use validated_json::ValidatedJson;
pub use validated_query::ValidatedQuery;

/// Format validation errors into a user-friendly string
fn format_validation_errors(errors: &validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}
