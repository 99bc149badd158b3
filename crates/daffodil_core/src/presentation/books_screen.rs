//! Books screen model.

use serde::{Deserialize, Serialize};

/// Everything bound to the books screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BooksScreen {
    books: Books,
}

impl BooksScreen {
    /// Creates the screen together with an empty books component.
    pub fn new() -> Self {
        Self {
            books: Books::new(),
        }
    }

    /// Books component displayed on the screen.
    pub fn books(&self) -> &Books {
        &self.books
    }

    /// Mutable access to the displayed books.
    pub fn books_mut(&mut self) -> &mut Books {
        &mut self.books
    }
}

/// Component grouping the books shown on the books screen.
///
/// `items` keeps insertion order and allows duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Books {
    /// Missing in a payload means empty.
    #[serde(default)]
    pub items: Vec<Book>,
}

impl Books {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Appends a book at the end of the sequence.
    pub fn push(&mut self, book: Book) {
        self.items.push(book);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Book> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a Books {
    type Item = &'a Book;
    type IntoIter = std::slice::Iter<'a, Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Individual book entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Optional title for the book.
    pub title: Option<String>,
}

impl Book {
    /// Creates a book with no title.
    pub fn new() -> Self {
        Self { title: None }
    }

    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
        }
    }
}
