pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CatalogArgs;
pub use config::Settings;
pub use domain::model::Book;

pub use crate::core::{
    command::{Command, CommandLoop},
    library::{Library, SimpleBookValidator},
    manager::{LibraryManager, Report},
    vehicles::{demo_fleet, EuVehicleFactory, UsVehicleFactory},
};
pub use utils::error::{DemoError, Result};
