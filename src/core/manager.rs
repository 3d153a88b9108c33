use crate::core::{Book, LibraryInterface};
use crate::utils::error::{DemoError, Result};
use std::fmt;
use std::num::IntErrorKind;

/// 門面操作的結果，Display 即為使用者看到的訊息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Added(Book),
    InvalidData,
    InvalidYearFormat,
    Removed(String),
    NotFound(String),
    Empty,
    Listing(Vec<Book>),
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Added(book) => write!(f, "Added book: {}", book),
            Report::InvalidData => f.write_str("Failed to add book: invalid data"),
            Report::InvalidYearFormat => f.write_str("Failed to add book: invalid year format"),
            Report::Removed(title) => write!(f, "Removed book: {}", title),
            Report::NotFound(title) => write!(f, "Book not found: {}", title),
            Report::Empty => f.write_str("Library is empty"),
            Report::Listing(books) => {
                f.write_str("Library books:")?;
                for book in books {
                    write!(f, "\n- {}", book)?;
                }
                Ok(())
            }
        }
    }
}

/// 非整數文字為格式錯誤；超出 i64 的整數仍是整數，視為資料無效
pub fn parse_year(year_text: &str) -> Result<i64> {
    year_text.trim().parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => DemoError::InvalidBook {
            field: "year".to_string(),
            reason: format!("Year {} is out of range", year_text.trim()),
        },
        _ => DemoError::InvalidYearFormat {
            value: year_text.to_string(),
        },
    })
}

pub struct LibraryManager<L: LibraryInterface> {
    library: L,
}

impl<L: LibraryInterface> LibraryManager<L> {
    pub fn new(library: L) -> Self {
        Self { library }
    }

    pub fn library(&self) -> &L {
        &self.library
    }

    pub fn add_book(&mut self, title: &str, author: &str, year_text: &str) -> Report {
        let year = match parse_year(year_text) {
            Ok(year) => year,
            Err(e @ DemoError::InvalidYearFormat { .. }) => {
                tracing::debug!("{}", e);
                return Report::InvalidYearFormat;
            }
            Err(e) => {
                tracing::debug!("Rejected book '{}': {}", title, e);
                return Report::InvalidData;
            }
        };

        let book = Book::new(title, author, year);
        if self.library.add_book(book.clone()) {
            tracing::debug!("Added book: {}", book);
            Report::Added(book)
        } else {
            Report::InvalidData
        }
    }

    pub fn remove_book(&mut self, title: &str) -> Report {
        if self.library.remove_book(title) {
            Report::Removed(title.to_string())
        } else {
            tracing::debug!("Book not found: {}", title);
            Report::NotFound(title.to_string())
        }
    }

    pub fn show_books(&self) -> Report {
        let books = self.library.get_all_books();
        if books.is_empty() {
            Report::Empty
        } else {
            Report::Listing(books)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::library::{Library, SimpleBookValidator};

    fn manager() -> LibraryManager<Library<SimpleBookValidator>> {
        LibraryManager::new(Library::new(SimpleBookValidator::new()))
    }

    #[test]
    fn test_add_and_show() {
        let mut manager = manager();
        let report = manager.add_book("Dune", "Frank Herbert", "1965");
        assert_eq!(report.to_string(), "Added book: Dune by Frank Herbert (1965)");

        let listing = manager.show_books().to_string();
        assert!(listing.contains("Dune by Frank Herbert (1965)"));
        assert_eq!(listing, "Library books:\n- Dune by Frank Herbert (1965)");
    }

    #[test]
    fn test_invalid_data_and_year_format() {
        let mut manager = manager();
        let report = manager.add_book("", "Anon", "2000");
        assert_eq!(report, Report::InvalidData);
        assert!(report.to_string().contains("invalid data"));

        let report = manager.add_book("Title", "Author", "abcd");
        assert_eq!(report, Report::InvalidYearFormat);
        assert!(report.to_string().contains("invalid year format"));

        assert_eq!(manager.show_books(), Report::Empty);
        assert_eq!(manager.show_books().to_string(), "Library is empty");
    }

    #[test]
    fn test_year_text_is_trimmed() {
        let mut manager = manager();
        assert!(matches!(
            manager.add_book("Emma", "Jane Austen", " 1815 "),
            Report::Added(_)
        ));
        assert!(parse_year("19.5").is_err());
        assert!(parse_year("").is_err());
    }

    #[test]
    fn test_oversized_year_is_invalid_data() {
        let mut manager = manager();

        let report = manager.add_book("T", "A", "99999999999999999999");
        assert_eq!(report, Report::InvalidData);
        assert_eq!(report.to_string(), "Failed to add book: invalid data");

        let report = manager.add_book("T", "A", "-99999999999999999999");
        assert_eq!(report, Report::InvalidData);

        assert!(matches!(
            parse_year("99999999999999999999"),
            Err(DemoError::InvalidBook { .. })
        ));
        assert!(matches!(
            parse_year("12abc"),
            Err(DemoError::InvalidYearFormat { .. })
        ));
        assert_eq!(manager.show_books(), Report::Empty);
    }

    #[test]
    fn test_remove_reports() {
        let mut manager = manager();
        manager.add_book("Dune", "Frank Herbert", "1965");

        assert_eq!(manager.remove_book("Dune").to_string(), "Removed book: Dune");
        assert_eq!(manager.remove_book("Dune").to_string(), "Book not found: Dune");
        assert!(manager.library().get_all_books().is_empty());
    }

    #[test]
    fn test_listing_keeps_insertion_order() {
        let mut manager = manager();
        manager.add_book("B", "Second", "2001");
        manager.add_book("A", "First", "2000");

        assert_eq!(
            manager.show_books().to_string(),
            "Library books:\n- B by Second (2001)\n- A by First (2000)"
        );
    }
}
