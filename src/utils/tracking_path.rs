use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("invalid path {0}")]
    InvalidPath(String),
}

/// Extract the tracked user from a path of the form `/<prefix>/<user>`.
///
/// The user is an opaque token: anything but an empty last segment is
/// accepted, as long as the path has exactly three `/`-separated parts.
pub fn extract_user(path: &str) -> Result<&str, PathError> {
    let segments: Vec<&str> = path.split('/').collect();
    match segments.as_slice() {
        [_, _, user] if !user.is_empty() => Ok(user),
        _ => Err(PathError::InvalidPath(path.to_string())),
    }
}
