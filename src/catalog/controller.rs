use crate::books::dto::BookDto;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::issue_book_cmd::{IssueBookCommand, IssueBookCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
use crate::catalog::command::search_book_cmd::{SearchBookCommand, SearchBookCommandRequest};
use crate::catalog::domain::CatalogService;
use crate::core::command::Command;
use crate::core::controller::ShellError;

const LIST_HEADER: &str = "\n--- All Books in Library ---";
const LIST_FOOTER: &str = "--------------------------";
const SEARCH_HEADER: &str = "\n--- Search Results ---";
const SEARCH_FOOTER: &str = "--------------------";

fn render_books(header: &str, books: &[BookDto], footer: &str) -> String {
    let mut lines = vec![header.to_string()];
    lines.extend(books.iter().map(BookDto::to_string));
    lines.push(footer.to_string());
    lines.join("\n")
}

pub fn add_book(
    catalog: &mut dyn CatalogService,
    title: &str, author: &str, isbn: &str) -> Result<String, ShellError> {
    let req = AddBookCommandRequest::new(title, author, isbn);
    let _ = AddBookCommand::new(catalog).execute(req)?;
    Ok("Book added successfully!".to_string())
}

pub fn list_books(catalog: &dyn CatalogService) -> Result<String, ShellError> {
    let res = ListBooksCommand::new(catalog).execute(ListBooksCommandRequest::new())?;
    Ok(render_books(LIST_HEADER, &res.books, LIST_FOOTER))
}

pub fn search_book(catalog: &dyn CatalogService, query: &str) -> Result<String, ShellError> {
    let req = SearchBookCommandRequest::new(query);
    match SearchBookCommand::new(catalog).execute(req) {
        Ok(res) => Ok(render_books(SEARCH_HEADER, &res.books, SEARCH_FOOTER)),
        Err(err) => {
            // the no-match notice is framed like a result listing
            let (kind, message) = ShellError::from(err);
            Err((kind, format!("{}\n{}\n{}", SEARCH_HEADER, message, SEARCH_FOOTER)))
        }
    }
}

pub fn issue_book(catalog: &mut dyn CatalogService, isbn: &str) -> Result<String, ShellError> {
    let res = IssueBookCommand::new(catalog).execute(IssueBookCommandRequest::new(isbn))?;
    Ok(format!("Book '{}' issued successfully.", res.book.title))
}

pub fn return_book(catalog: &mut dyn CatalogService, isbn: &str) -> Result<String, ShellError> {
    let res = ReturnBookCommand::new(catalog).execute(ReturnBookCommandRequest::new(isbn))?;
    Ok(format!("Book '{}' returned successfully.", res.book.title))
}

pub fn remove_book(catalog: &mut dyn CatalogService, isbn: &str) -> Result<String, ShellError> {
    let res = RemoveBookCommand::new(catalog).execute(RemoveBookCommandRequest::new(isbn))?;
    Ok(format!("Deleting book: '{}'\nBook deleted successfully!", res.book.title))
}
