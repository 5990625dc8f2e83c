//! Book model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Lending status of a book (serialized with the original Spanish labels)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BookStatus {
    Disponible,
    Prestado,
    Pendiente,
}

impl BookStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookStatus::Disponible => "disponible",
            BookStatus::Prestado => "prestado",
            BookStatus::Pendiente => "pendiente",
        }
    }
}

impl std::fmt::Display for BookStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for BookStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "disponible" => Ok(BookStatus::Disponible),
            "prestado" => Ok(BookStatus::Prestado),
            "pendiente" => Ok(BookStatus::Pendiente),
            _ => Err(format!("Invalid book status: {}", s)),
        }
    }
}

/// A catalog record. `id` is externally assigned; uniqueness is a convention
/// of the caller, not enforced here.
///
/// Field names on the wire keep the original camelCase shape
/// (`addedDate`, `borrowedDate`); `usuario` is a loose label that may
/// reference a session username but is never validated against one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub category: String,
    pub status: BookStatus,
    pub added_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub borrowed_date: Option<NaiveDate>,
    pub usuario: Option<String>,
}

/// Partial update for a book, shallow-merged over the first record whose id
/// matches. A field left out of the JSON body is preserved on the record; for
/// the two nullable fields, an explicit `null` clears the value while absence
/// keeps it (double-option).
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub isbn: Option<String>,
    pub category: Option<String>,
    pub status: Option<BookStatus>,
    pub added_date: Option<NaiveDate>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    #[schema(value_type = Option<String>, nullable)]
    pub borrowed_date: Option<Option<NaiveDate>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    #[schema(value_type = Option<String>, nullable)]
    pub usuario: Option<Option<String>>,
}

impl BookPatch {
    /// Overlay the present fields of this patch onto `book`.
    pub fn apply_to(&self, book: &mut Book) {
        if let Some(title) = &self.title {
            book.title = title.clone();
        }
        if let Some(author) = &self.author {
            book.author = author.clone();
        }
        if let Some(isbn) = &self.isbn {
            book.isbn = isbn.clone();
        }
        if let Some(category) = &self.category {
            book.category = category.clone();
        }
        if let Some(status) = self.status {
            book.status = status;
        }
        if let Some(added_date) = self.added_date {
            book.added_date = added_date;
        }
        if let Some(borrowed_date) = self.borrowed_date {
            book.borrowed_date = borrowed_date;
        }
        if let Some(usuario) = &self.usuario {
            book.usuario = usuario.clone();
        }
    }
}
