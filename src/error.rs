/// Errors that can occur when extracting a value from an [`AnyBox`](crate::AnyBox)
///
/// There is a single kind: the requested type is not the stored type. An empty
/// box reports the same error with `held` set to `"none"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnyError {
    /// Attempted to access a value with a type that doesn't match what was stored
    #[error("bad any cast: requested `{requested}`, container holds `{held}`")]
    TypeMismatch {
        requested: &'static str,
        held: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, AnyError>;
