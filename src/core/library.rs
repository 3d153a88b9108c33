use crate::core::{Book, BookValidator, LibraryInterface, Result};
use crate::utils::validation::{validate_non_empty_string, validate_year};

pub const DEFAULT_MAX_YEAR: i64 = 2024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimpleBookValidator {
    max_year: i64,
}

impl SimpleBookValidator {
    pub fn new() -> Self {
        Self::with_max_year(DEFAULT_MAX_YEAR)
    }

    pub fn with_max_year(max_year: i64) -> Self {
        Self { max_year }
    }

    pub fn max_year(&self) -> i64 {
        self.max_year
    }
}

impl Default for SimpleBookValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl BookValidator for SimpleBookValidator {
    fn check(&self, book: &Book) -> Result<()> {
        validate_non_empty_string("title", &book.title)?;
        validate_non_empty_string("author", &book.author)?;
        validate_year("year", book.year, self.max_year)
    }
}

/// 記憶體內的書庫，書籍依加入順序保存
pub struct Library<V: BookValidator> {
    books: Vec<Book>,
    validator: V,
}

impl<V: BookValidator> Library<V> {
    pub fn new(validator: V) -> Self {
        Self {
            books: Vec::new(),
            validator,
        }
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl<V: BookValidator> LibraryInterface for Library<V> {
    fn add_book(&mut self, book: Book) -> bool {
        if let Err(e) = self.validator.check(&book) {
            tracing::debug!("Rejected book '{}': {}", book.title, e);
            return false;
        }
        tracing::debug!("Storing book: {}", book);
        self.books.push(book);
        true
    }

    fn remove_book(&mut self, title: &str) -> bool {
        let initial_len = self.books.len();
        self.books.retain(|book| book.title != title);
        let removed = initial_len - self.books.len();
        tracing::debug!("Removed {} book(s) titled '{}'", removed, title);
        removed > 0
    }

    fn get_all_books(&self) -> Vec<Book> {
        self.books.clone()
    }
}
