use serde::{Deserialize, Serialize};

// Identifiable defines common traits that can be shared by catalog records
pub trait Identifiable {
    fn id(&self) -> String;
}


// Configuration abstracts config options for the console library
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub log_level: String,
    pub log_json: bool,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            log_level: "warn".to_string(),
            log_json: false,
        }
    }

    pub fn dev(branch_id: &str) -> Self {
        Configuration {
            log_level: "debug".to_string(),
            ..Configuration::new(branch_id)
        }
    }
}
