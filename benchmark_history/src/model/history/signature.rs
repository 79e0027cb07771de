//!
//! A commit author or committer.
//!

///
/// A commit author or committer.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Signature {
    /// The e-mail address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// The full name.
    pub name: String,
    /// The hosting-service username.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}
