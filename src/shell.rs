pub mod menu;

use std::io::{BufRead, Write};
use tracing::{debug, info};
use crate::catalog::controller;
use crate::catalog::domain::CatalogService;
use crate::catalog::factory;
use crate::core::controller::{AppState, ShellError};
use crate::core::library::LibraryResult;
use crate::shell::menu::{MENU, MenuChoice};

/// Shell is the interactive front end: it owns the catalog for the whole
/// session, reads menu selections and fields line by line from `input` and
/// writes every outcome to `output`.
pub struct Shell<R, W> {
    state: AppState,
    catalog: Box<dyn CatalogService>,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(state: AppState, input: R, output: W) -> Self {
        let catalog = factory::create_catalog_service(&state.config);
        Self {
            state,
            catalog,
            input,
            output,
        }
    }

    /// Runs until the exit selection or end of input.
    pub fn run(&mut self) -> LibraryResult<()> {
        info!(branch = %self.state.config.branch_id, "library shell started");
        loop {
            writeln!(self.output, "{}", MENU)?;
            let Some(line) = self.prompt("Enter your choice: ")? else {
                debug!("end of input");
                break;
            };
            let choice = MenuChoice::from(line.as_str());
            debug!("menu choice {}", choice);
            if choice == MenuChoice::Exit {
                writeln!(self.output, "Exiting Library Management System. Goodbye!")?;
                break;
            }
            match self.dispatch(choice)? {
                Some(Ok(message)) => {
                    writeln!(self.output, "{}", message)?;
                }
                Some(Err((kind, message))) => {
                    debug!(?kind, "request rejected");
                    writeln!(self.output, "{}", message)?;
                }
                None => {
                    debug!("end of input");
                    break;
                }
            }
        }
        self.output.flush()?;
        info!(branch = %self.state.config.branch_id, "library shell stopped");
        Ok(())
    }

    // None when input ends before every field of the request was read
    fn dispatch(&mut self, choice: MenuChoice) -> LibraryResult<Option<Result<String, ShellError>>> {
        let res = match choice {
            MenuChoice::AddBook => {
                let Some(title) = self.prompt("Enter Title: ")? else { return Ok(None) };
                let Some(author) = self.prompt("Enter Author: ")? else { return Ok(None) };
                let Some(isbn) = self.prompt("Enter ISBN: ")? else { return Ok(None) };
                controller::add_book(self.catalog.as_mut(), &title, &author, &isbn)
            }
            MenuChoice::ViewAll => {
                controller::list_books(self.catalog.as_ref())
            }
            MenuChoice::Search => {
                let Some(query) = self.prompt("Enter ISBN, Title, or Author to search: ")? else { return Ok(None) };
                controller::search_book(self.catalog.as_ref(), &query)
            }
            MenuChoice::Issue => {
                let Some(isbn) = self.prompt("Enter ISBN of the book to issue: ")? else { return Ok(None) };
                controller::issue_book(self.catalog.as_mut(), &isbn)
            }
            MenuChoice::Return => {
                let Some(isbn) = self.prompt("Enter ISBN of the book to return: ")? else { return Ok(None) };
                controller::return_book(self.catalog.as_mut(), &isbn)
            }
            MenuChoice::Delete => {
                let Some(isbn) = self.prompt("Enter ISBN of the book to delete: ")? else { return Ok(None) };
                controller::remove_book(self.catalog.as_mut(), &isbn)
            }
            MenuChoice::Exit => {
                return Ok(None);
            }
            MenuChoice::Invalid => {
                Ok("Invalid choice. Please try again.".to_string())
            }
        };
        Ok(Some(res))
    }

    fn prompt(&mut self, label: &str) -> LibraryResult<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        // fields are free text; bytes that are not utf-8 are replaced, not rejected
        let line = String::from_utf8_lossy(&buf);
        let trimmed = line.strip_suffix('\n').unwrap_or(&line);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        Ok(Some(trimmed.to_string()))
    }
}
