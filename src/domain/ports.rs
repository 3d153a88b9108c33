use crate::domain::model::{Book, VehicleInfo};
use crate::utils::error::Result;

pub trait BookValidator {
    /// 檢查書籍資料，失敗時指出是哪個欄位
    fn check(&self, book: &Book) -> Result<()>;

    fn validate_book(&self, book: &Book) -> bool {
        self.check(book).is_ok()
    }
}

pub trait LibraryInterface {
    fn add_book(&mut self, book: Book) -> bool;
    fn remove_book(&mut self, title: &str) -> bool;
    fn get_all_books(&self) -> Vec<Book>;
}

pub trait Vehicle {
    fn info(&self) -> &VehicleInfo;
    fn startup_message(&self) -> String;

    fn start_engine(&self) {
        tracing::info!("{}", self.startup_message());
    }
}

pub trait VehicleFactory {
    type Car: Vehicle;
    type Motorcycle: Vehicle;

    fn create_car(&self, make: &str, model: &str) -> Self::Car;
    fn create_motorcycle(&self, make: &str, model: &str) -> Self::Motorcycle;
}
