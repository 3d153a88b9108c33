use solid_demos::demo_fleet;
use solid_demos::utils::logger;

fn main() {
    logger::init_plain_logger();

    for vehicle in demo_fleet() {
        vehicle.start_engine();
    }
}
