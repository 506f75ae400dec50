use tracing::{debug, info};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::library::{BookStatus, LibraryError, LibraryResult};

pub struct CatalogServiceImpl {
    branch_id: String,
    book_repository: Box<dyn BookRepository>,
}

impl CatalogServiceImpl {
    pub fn new(config: &Configuration, book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            book_repository,
        }
    }

    fn set_status(&mut self, mut book: BookEntity, status: BookStatus) -> LibraryResult<BookDto> {
        book.book_status = status;
        self.book_repository.update(&book)?;
        Ok(BookDto::from(&book))
    }
}

impl CatalogService for CatalogServiceImpl {
    fn add_book(&mut self, title: &str, author: &str, isbn: &str) -> LibraryResult<BookDto> {
        let book = BookEntity::new(title, author, isbn);
        if let Err(err) = self.book_repository.create(&book) {
            info!(branch = %self.branch_id, isbn, "rejected book: {}", err);
            return Err(err);
        }
        info!(branch = %self.branch_id, isbn, "added book {}", title);
        Ok(BookDto::from(&book))
    }

    fn list_books(&self) -> LibraryResult<Vec<BookDto>> {
        if self.book_repository.count() == 0 {
            return Err(LibraryError::empty_catalog("No books in the library."));
        }
        let books: Vec<BookDto> = self.book_repository.find_all().iter().map(BookDto::from).collect();
        debug!(branch = %self.branch_id, "listing {} books", books.len());
        Ok(books)
    }

    fn search_books(&self, query: &str) -> LibraryResult<Vec<BookDto>> {
        // an exact isbn hit wins over any title/author matches
        if let Ok(book) = self.book_repository.get(query) {
            debug!(branch = %self.branch_id, query, "isbn match");
            return Ok(vec![BookDto::from(&book)]);
        }
        let books: Vec<BookDto> = self.book_repository.find_by_title_or_author(query)
            .iter().map(BookDto::from).collect();
        if books.is_empty() {
            debug!(branch = %self.branch_id, query, "no match");
            return Err(LibraryError::no_match(format!("No book found matching '{}'", query).as_str()));
        }
        debug!(branch = %self.branch_id, query, "{} title/author matches", books.len());
        Ok(books)
    }

    fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<BookDto> {
        self.book_repository.get(isbn).map(|b| BookDto::from(&b))
    }

    fn issue_book(&mut self, isbn: &str) -> LibraryResult<BookDto> {
        let book = self.book_repository.get(isbn)?;
        if book.is_issued() {
            info!(branch = %self.branch_id, isbn, "book already issued");
            return Err(LibraryError::already_issued(
                format!("Book '{}' is already issued.", book.title).as_str()));
        }
        let issued = self.set_status(book, BookStatus::Issued)?;
        info!(branch = %self.branch_id, isbn, "issued book {}", issued.title);
        Ok(issued)
    }

    fn return_book(&mut self, isbn: &str) -> LibraryResult<BookDto> {
        let book = self.book_repository.get(isbn)?;
        if !book.is_issued() {
            info!(branch = %self.branch_id, isbn, "book was not issued");
            return Err(LibraryError::not_issued(
                format!("Book '{}' was not issued.", book.title).as_str()));
        }
        let returned = self.set_status(book, BookStatus::Available)?;
        info!(branch = %self.branch_id, isbn, "returned book {}", returned.title);
        Ok(returned)
    }

    fn remove_book(&mut self, isbn: &str) -> LibraryResult<BookDto> {
        let book = self.book_repository.get(isbn)?;
        if book.is_issued() {
            info!(branch = %self.branch_id, isbn, "cannot remove issued book");
            return Err(LibraryError::currently_issued(
                format!("Cannot delete book '{}'. It is currently issued.", book.title).as_str()));
        }
        let removed = self.book_repository.delete(isbn)?;
        info!(branch = %self.branch_id, isbn, "removed book {}", removed.title);
        Ok(BookDto::from(&removed))
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            isbn: other.isbn.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            book_status: other.book_status,
        }
    }
}


#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::{Arc, Mutex};
    use crate::books::domain::Book;
    use crate::books::domain::model::BookEntity;
    use crate::books::dto::BookDto;
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::domain::Configuration;
    use crate::core::library::{BookStatus, LibraryError};
    use crate::utils::logs::log_level;

    fn new_catalog() -> Box<dyn CatalogService> {
        factory::create_catalog_service(&Configuration::new("test"))
    }

    #[test]
    fn test_should_add_book() {
        let mut catalog_svc = new_catalog();

        let book = catalog_svc.add_book("Dune", "Frank Herbert", "111").expect("should add book");
        assert_eq!(BookStatus::Available, book.book_status);

        let loaded = catalog_svc.find_book_by_isbn("111").expect("should return book");
        assert_eq!(book, loaded);
    }

    #[test]
    fn test_should_accept_empty_fields() {
        let mut catalog_svc = new_catalog();
        let _ = catalog_svc.add_book("", "", "").expect("should add book");
        let loaded = catalog_svc.find_book_by_isbn("").expect("should return book");
        assert_eq!("", loaded.title.as_str());
    }

    #[test]
    fn test_should_search_added_book_by_isbn() {
        let mut catalog_svc = new_catalog();
        let book = catalog_svc.add_book("Dune", "Frank Herbert", "111").expect("should add book");
        let _ = catalog_svc.add_book("Children of Dune 111", "Frank Herbert", "333").expect("should add book");

        let res = catalog_svc.search_books("111").expect("should find book");
        assert_eq!(vec![book], res);
    }

    #[test]
    fn test_should_reject_duplicate_isbn() {
        let mut catalog_svc = new_catalog();
        let _ = catalog_svc.add_book("A", "B", "X").expect("should add book");
        let res = catalog_svc.add_book("A", "B", "X");
        assert!(matches!(res, Err(LibraryError::DuplicateKey{ message: _ })));

        let all = catalog_svc.list_books().expect("should list books");
        assert_eq!(1, all.len());
        assert_eq!("X", all[0].isbn.as_str());
    }

    #[test]
    fn test_should_signal_empty_catalog() {
        let catalog_svc = new_catalog();
        let res = catalog_svc.list_books();
        assert!(matches!(res, Err(LibraryError::EmptyCatalog{ message: _ })));
    }

    #[test]
    fn test_should_search_title_and_author_substrings() {
        let mut catalog_svc = new_catalog();
        let _ = catalog_svc.add_book("Dune", "Frank Herbert", "111").expect("should add book");
        let _ = catalog_svc.add_book("Foundation", "Isaac Asimov", "222").expect("should add book");
        let _ = catalog_svc.add_book("I, Robot", "Isaac Asimov", "444").expect("should add book");

        let mut by_author = catalog_svc.search_books("Isaac").expect("should find books");
        by_author.sort_by(|a, b| a.isbn.cmp(&b.isbn));
        assert_eq!(vec!["222", "444"], by_author.iter().map(|b| b.isbn.as_str()).collect::<Vec<_>>());

        let by_title = catalog_svc.search_books("Dun").expect("should find books");
        assert_eq!(1, by_title.len());
        assert_eq!("111", by_title[0].isbn.as_str());
    }

    #[test]
    fn test_should_search_case_sensitive() {
        let mut catalog_svc = new_catalog();
        let _ = catalog_svc.add_book("Dune", "Frank Herbert", "111").expect("should add book");
        let res = catalog_svc.search_books("dune");
        assert!(matches!(res, Err(LibraryError::NoMatch{ message: _ })));
    }

    #[test]
    fn test_should_issue_and_return_book() {
        let mut catalog_svc = new_catalog();
        let _ = catalog_svc.add_book("Dune", "Frank Herbert", "111").expect("should add book");

        let issued = catalog_svc.issue_book("111").expect("should issue book");
        assert!(issued.is_issued());
        let res = catalog_svc.issue_book("111");
        assert!(matches!(res, Err(LibraryError::AlreadyIssued{ message: _ })));

        let returned = catalog_svc.return_book("111").expect("should return book");
        assert!(!returned.is_issued());
        let res = catalog_svc.return_book("111");
        assert!(matches!(res, Err(LibraryError::NotIssued{ message: _ })));
    }

    #[test]
    fn test_should_fail_unknown_isbn() {
        let mut catalog_svc = new_catalog();
        assert!(matches!(catalog_svc.issue_book("404"), Err(LibraryError::NotFound{ message: _ })));
        assert!(matches!(catalog_svc.return_book("404"), Err(LibraryError::NotFound{ message: _ })));
        assert!(matches!(catalog_svc.remove_book("404"), Err(LibraryError::NotFound{ message: _ })));
        assert!(matches!(catalog_svc.find_book_by_isbn("404"), Err(LibraryError::NotFound{ message: _ })));
    }

    #[test]
    fn test_should_not_remove_issued_book() {
        let mut catalog_svc = new_catalog();
        let _ = catalog_svc.add_book("Dune", "Frank Herbert", "111").expect("should add book");
        let issued = catalog_svc.issue_book("111").expect("should issue book");

        let res = catalog_svc.remove_book("111");
        match res {
            Err(LibraryError::CurrentlyIssued { message }) => {
                assert_eq!("Cannot delete book 'Dune'. It is currently issued.", message.as_str());
            }
            other => panic!("unexpected result {:?}", other),
        }
        let loaded = catalog_svc.find_book_by_isbn("111").expect("should return book");
        assert_eq!(issued, loaded);
    }

    #[test]
    fn test_should_remove_book() {
        let mut catalog_svc = new_catalog();
        let _ = catalog_svc.add_book("Dune", "Frank Herbert", "111").expect("should add book");

        let removed = catalog_svc.remove_book("111").expect("should remove book");
        assert_eq!("Dune", removed.title.as_str());
        assert!(matches!(catalog_svc.search_books("111"), Err(LibraryError::NoMatch{ message: _ })));
        assert!(matches!(catalog_svc.find_book_by_isbn("111"), Err(LibraryError::NotFound{ message: _ })));
    }

    #[test]
    fn test_should_run_checkout_scenario() {
        let mut catalog_svc = new_catalog();
        let _ = catalog_svc.add_book("Dune", "Frank Herbert", "111").expect("should add book");
        let _ = catalog_svc.add_book("Foundation", "Isaac Asimov", "222").expect("should add book");

        let res = catalog_svc.search_books("Asi").expect("should find book");
        assert_eq!(1, res.len());
        assert_eq!("Foundation", res[0].title.as_str());

        let _ = catalog_svc.issue_book("111").expect("should issue book");
        assert!(matches!(catalog_svc.remove_book("111"), Err(LibraryError::CurrentlyIssued{ message: _ })));
        let _ = catalog_svc.return_book("111").expect("should return book");
        let _ = catalog_svc.remove_book("111").expect("should remove book");

        let all = catalog_svc.list_books().expect("should list books");
        assert_eq!(1, all.len());
        assert_eq!("222", all[0].isbn.as_str());
    }

    #[test]
    fn test_should_search_empty_query() {
        let mut catalog_svc = new_catalog();
        let _ = catalog_svc.add_book("Dune", "Frank Herbert", "111").expect("should add book");
        let _ = catalog_svc.add_book("Foundation", "Isaac Asimov", "222").expect("should add book");

        let all = catalog_svc.search_books("").expect("should find books");
        assert_eq!(2, all.len());

        let untitled = catalog_svc.add_book("Untitled", "Anonymous", "").expect("should add book");
        let res = catalog_svc.search_books("").expect("should find book");
        assert_eq!(vec![untitled], res);
    }

    #[test]
    fn test_should_convert_entity_to_dto() {
        let mut entity = BookEntity::new("Dune", "Frank Herbert", "111");
        entity.book_status = BookStatus::Issued;
        let dto = BookDto::from(&entity);
        assert!(dto.is_issued());
        assert_eq!("Title: Dune, Author: Frank Herbert, ISBN: 111, Status: Issued", dto.to_string());
    }

    #[derive(Clone, Default)]
    struct SharedLog(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedLog {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().expect("log buffer").extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_should_keep_rejections_below_default_log_level() {
        let log = SharedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(log_level(&Configuration::new("test")))
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut catalog_svc = new_catalog();
            let _ = catalog_svc.add_book("Dune", "Frank Herbert", "111").expect("should add book");
            assert!(catalog_svc.add_book("Dune", "Frank Herbert", "111").is_err());
            assert!(catalog_svc.return_book("111").is_err());
            let _ = catalog_svc.issue_book("111").expect("should issue book");
            assert!(catalog_svc.issue_book("111").is_err());
            assert!(catalog_svc.remove_book("111").is_err());
            assert!(catalog_svc.search_books("Tolkien").is_err());
        });

        let output = log.0.lock().expect("log buffer").clone();
        assert_eq!("", String::from_utf8(output).expect("should be utf8"));
    }
}
