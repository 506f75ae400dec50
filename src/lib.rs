pub mod books {
    pub mod domain;
    pub mod dto;
    pub mod factory;
    pub mod repository;
}

pub mod catalog {
    pub mod command;
    pub mod controller;
    pub mod domain;
    pub mod factory;
}

pub mod core {
    pub mod command;
    pub mod controller;
    pub mod domain;
    pub mod library;
    pub mod repository;
}

pub mod shell;

pub mod utils {
    pub mod logs;
}
