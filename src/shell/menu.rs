use std::fmt;
use std::fmt::{Display, Formatter};

pub const MENU: &str = "\n--- Library Management System ---\n\
1. Add Book\n\
2. View All Books\n\
3. Search Book\n\
4. Issue Book\n\
5. Return Book\n\
6. Delete Book\n\
7. Exit";

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum MenuChoice {
    AddBook,
    ViewAll,
    Search,
    Issue,
    Return,
    Delete,
    Exit,
    Invalid,
}

impl From<&str> for MenuChoice {
    // only the first token selects; the rest of the line is discarded
    fn from(s: &str) -> Self {
        let token = s.split_whitespace().next().unwrap_or("");
        match token.parse::<i64>() {
            Ok(1) => MenuChoice::AddBook,
            Ok(2) => MenuChoice::ViewAll,
            Ok(3) => MenuChoice::Search,
            Ok(4) => MenuChoice::Issue,
            Ok(5) => MenuChoice::Return,
            Ok(6) => MenuChoice::Delete,
            Ok(7) => MenuChoice::Exit,
            _ => MenuChoice::Invalid,
        }
    }
}

impl Display for MenuChoice {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            MenuChoice::AddBook => write!(f, "AddBook"),
            MenuChoice::ViewAll => write!(f, "ViewAll"),
            MenuChoice::Search => write!(f, "Search"),
            MenuChoice::Issue => write!(f, "Issue"),
            MenuChoice::Return => write!(f, "Return"),
            MenuChoice::Delete => write!(f, "Delete"),
            MenuChoice::Exit => write!(f, "Exit"),
            MenuChoice::Invalid => write!(f, "Invalid"),
        }
    }
}
