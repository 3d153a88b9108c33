use crate::core::{RegionSpec, Vehicle, VehicleFactory, VehicleInfo};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    info: VehicleInfo,
}

impl Car {
    pub fn new(make: &str, model: &str, spec: RegionSpec) -> Self {
        Self {
            info: VehicleInfo::new(make, model, spec),
        }
    }
}

impl Vehicle for Car {
    fn info(&self) -> &VehicleInfo {
        &self.info
    }

    fn startup_message(&self) -> String {
        format!(
            "{} {} ({}): Engine started",
            self.info.make, self.info.model, self.info.spec
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Motorcycle {
    info: VehicleInfo,
}

impl Motorcycle {
    pub fn new(make: &str, model: &str, spec: RegionSpec) -> Self {
        Self {
            info: VehicleInfo::new(make, model, spec),
        }
    }
}

impl Vehicle for Motorcycle {
    fn info(&self) -> &VehicleInfo {
        &self.info
    }

    fn startup_message(&self) -> String {
        format!(
            "{} {} ({}): Motor revved up",
            self.info.make, self.info.model, self.info.spec
        )
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UsVehicleFactory;

impl VehicleFactory for UsVehicleFactory {
    type Car = Car;
    type Motorcycle = Motorcycle;

    fn create_car(&self, make: &str, model: &str) -> Car {
        Car::new(make, model, RegionSpec::Us)
    }

    fn create_motorcycle(&self, make: &str, model: &str) -> Motorcycle {
        Motorcycle::new(make, model, RegionSpec::Us)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EuVehicleFactory;

impl VehicleFactory for EuVehicleFactory {
    type Car = Car;
    type Motorcycle = Motorcycle;

    fn create_car(&self, make: &str, model: &str) -> Car {
        Car::new(make, model, RegionSpec::Eu)
    }

    fn create_motorcycle(&self, make: &str, model: &str) -> Motorcycle {
        Motorcycle::new(make, model, RegionSpec::Eu)
    }
}

/// 示範車隊：美規汽車、美規機車、歐規汽車、歐規機車
pub fn demo_fleet() -> Vec<Box<dyn Vehicle>> {
    let us_factory = UsVehicleFactory;
    let eu_factory = EuVehicleFactory;

    vec![
        Box::new(us_factory.create_car("Ford", "Mustang")),
        Box::new(us_factory.create_motorcycle("Harley-Davidson", "Sportster")),
        Box::new(eu_factory.create_car("Renault", "Clio")),
        Box::new(eu_factory.create_motorcycle("BMW", "R1200GS")),
    ]
}
