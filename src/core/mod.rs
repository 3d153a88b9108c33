pub mod command;
pub mod library;
pub mod manager;
pub mod vehicles;

pub use crate::domain::model::{Book, RegionSpec, VehicleInfo};
pub use crate::domain::ports::{BookValidator, LibraryInterface, Vehicle, VehicleFactory};
pub use crate::utils::error::Result;
