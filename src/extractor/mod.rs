pub mod form;
pub mod query;
pub mod validated;

/// An extractor that wraps a single extracted value.
pub trait Extractor {
    type Extracted;

    fn extracted(&self) -> &Self::Extracted;
}

/// Renders the expected schema of `T` as YAML, only if the verbosity asks for error reasons.
fn expected_schema<T: schemars::JsonSchema>(
    verbosity: crate::error::ErrorVerbosity,
) -> Result<Option<String>, crate::error::InternalServerError> {
    if !verbosity.should_generate_error_reason() {
        return Ok(None);
    }

    serde_yaml::to_string(&schemars::schema_for!(T))
        .map(Some)
        .map_err(|err| crate::error::InternalServerError::from_generic_error(verbosity, err))
}
