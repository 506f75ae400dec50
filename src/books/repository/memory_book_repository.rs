use std::collections::HashMap;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

// MemoryBookRepository keeps books keyed by isbn for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    books: HashMap<String, BookEntity>,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self {
            books: HashMap::new(),
        }
    }
}

fn not_found(isbn: &str) -> LibraryError {
    LibraryError::not_found(format!("Book with ISBN '{}' not found.", isbn).as_str())
}

impl Repository<BookEntity> for MemoryBookRepository {
    fn create(&mut self, entity: &BookEntity) -> LibraryResult<usize> {
        let id = entity.id();
        if self.books.contains_key(&id) {
            return Err(LibraryError::duplicate_key(
                format!("Error: Book with ISBN '{}' already exists.", id).as_str()));
        }
        self.books.insert(id, entity.clone());
        Ok(1)
    }

    fn update(&mut self, entity: &BookEntity) -> LibraryResult<usize> {
        match self.books.get_mut(&entity.id()) {
            Some(existing) => {
                *existing = entity.clone();
                Ok(1)
            }
            None => Err(not_found(entity.isbn.as_str())),
        }
    }

    fn get(&self, id: &str) -> LibraryResult<BookEntity> {
        self.books.get(id).cloned().ok_or_else(|| not_found(id))
    }

    fn delete(&mut self, id: &str) -> LibraryResult<BookEntity> {
        self.books.remove(id).ok_or_else(|| not_found(id))
    }

    fn find_all(&self) -> Vec<BookEntity> {
        self.books.values().cloned().collect()
    }

    fn count(&self) -> usize {
        self.books.len()
    }
}

impl BookRepository for MemoryBookRepository {
    fn find_by_title_or_author(&self, text: &str) -> Vec<BookEntity> {
        self.books.values()
            .filter(|b| b.mentions(text))
            .cloned()
            .collect()
    }
}
