pub mod memory_book_repository;

use crate::books::domain::model::BookEntity;
use crate::core::repository::Repository;


pub trait BookRepository: Repository<BookEntity> {
    // records whose title or author contains the text
    fn find_by_title_or_author(&self, text: &str) -> Vec<BookEntity>;
}
