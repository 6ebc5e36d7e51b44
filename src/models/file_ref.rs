use std::convert::Infallible;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Reference to an uploaded file, stored as a single text column.
///
/// `Local` holds a file name under the configured upload directory,
/// `Remote` a full external URL. The scheme check happens exactly once,
/// here, instead of at every read site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum FileRef {
    Local(String),
    Remote(String),
}

impl FileRef {
    pub fn parse(s: &str) -> FileRef {
        if s.starts_with("http://") || s.starts_with("https://") {
            FileRef::Remote(s.to_string())
        } else {
            FileRef::Local(s.to_string())
        }
    }

    /// The stored form: a bare file name for local files, the URL otherwise.
    pub fn as_str(&self) -> &str {
        match self {
            FileRef::Local(name) | FileRef::Remote(name) => name,
        }
    }

    /// The path a client fetches the file from.
    pub fn public_path(&self) -> String {
        match self {
            FileRef::Local(name) => format!("/uploads/{name}"),
            FileRef::Remote(url) => url.clone(),
        }
    }
}

impl fmt::Display for FileRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<FileRef> for String {
    fn from(value: FileRef) -> Self {
        value.as_str().to_string()
    }
}

impl TryFrom<String> for FileRef {
    type Error = Infallible;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Ok(FileRef::parse(&value))
    }
}

impl sqlx::Type<sqlx::Postgres> for FileRef {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }
}

impl<'r> sqlx::Decode<'r, sqlx::Postgres> for FileRef {
    fn decode(
        value: sqlx::postgres::PgValueRef<'r>,
    ) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <&str as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        Ok(FileRef::parse(s))
    }
}

impl<'q> sqlx::Encode<'q, sqlx::Postgres> for FileRef {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <&str as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.as_str(), buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_schemes_parse_as_remote() {
        assert_eq!(
            FileRef::parse("https://cdn.example.com/r/cv.pdf"),
            FileRef::Remote("https://cdn.example.com/r/cv.pdf".to_string())
        );
        assert_eq!(
            FileRef::parse("http://img.example.com/logo.png").public_path(),
            "http://img.example.com/logo.png"
        );
    }

    #[test]
    fn bare_names_parse_as_local() {
        let file = FileRef::parse("abc123-resume.pdf");
        assert_eq!(file, FileRef::Local("abc123-resume.pdf".to_string()));
        assert_eq!(file.public_path(), "/uploads/abc123-resume.pdf");
    }

    #[test]
    fn json_round_trips_through_the_stored_form() {
        let file = FileRef::parse("logo.png");
        let json = serde_json::to_string(&file).unwrap();
        assert_eq!(json, "\"logo.png\"");
        let back: FileRef = serde_json::from_str(&json).unwrap();
        assert_eq!(back, file);
    }
}
