use thiserror::Error;

/// A contact-form rule that failed. The `Display` text is shown under the field.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Business name is required")]
    BusinessNameRequired,

    #[error("Your name is required")]
    NameRequired,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Please select an option")]
    FrustrationRequired,
}

/// Browser storage failures. None of these are fatal to the page.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("local storage is not available in this browser")]
    Unavailable,

    #[error("failed to write `{key}` to local storage")]
    WriteRejected { key: String },
}
