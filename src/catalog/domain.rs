pub mod service;

use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;

pub trait CatalogService {
    fn add_book(&mut self, title: &str, author: &str, isbn: &str) -> LibraryResult<BookDto>;
    fn list_books(&self) -> LibraryResult<Vec<BookDto>>;
    fn search_books(&self, query: &str) -> LibraryResult<Vec<BookDto>>;
    fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<BookDto>;
    fn issue_book(&mut self, isbn: &str) -> LibraryResult<BookDto>;
    fn return_book(&mut self, isbn: &str) -> LibraryResult<BookDto>;
    fn remove_book(&mut self, isbn: &str) -> LibraryResult<BookDto>;
}
