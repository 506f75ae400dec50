use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct SearchBookCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> SearchBookCommand<'a> {
    pub fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchBookCommandRequest {
    pub query: String,
}

impl SearchBookCommandRequest {
    pub fn new(query: &str) -> Self {
        Self {
            query: query.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub struct SearchBookCommandResponse {
    pub books: Vec<BookDto>,
}

impl SearchBookCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

impl<'a> Command<SearchBookCommandRequest, SearchBookCommandResponse> for SearchBookCommand<'a> {
    fn execute(&mut self, req: SearchBookCommandRequest) -> Result<SearchBookCommandResponse, CommandError> {
        self.catalog_service.search_books(req.query.as_str())
            .map_err(CommandError::from).map(SearchBookCommandResponse::new)
    }
}
