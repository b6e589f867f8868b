// 📋 Demo Report - Line-oriented and JSON output
// Runs the showcase scenarios and collects what they produced

use serde::{Deserialize, Serialize};

use crate::error::FactoryError;
use crate::factory::VehicleFactory;
use crate::profile::{section_line, NetworkKind, Section, SocialNetwork};
use crate::vehicle::{Car, Vehicle};

/// Every showcase vehicle runs this many times
pub const RUNS_PER_DRIVE: u32 = 2;

/// Cars built straight from `Car::new`, no registry involved: (model, power)
pub const PLAIN_DRIVES: [(&str, u64); 2] = [("Genesis2", 20), ("Spark2", 13)];

/// Models registered on the factory as `Car::new` constructors
pub const CUSTOM_MODELS: [&str; 2] = ["Genesis3", "Spark3"];

/// Vehicles created through the factory: (tag, power)
pub const FACTORY_DRIVES: [(&str, u64); 5] = [
    ("Genesis3", 25),
    ("Spark3", 15),
    ("Genesis", 20),
    ("Spark", 13),
    ("Genesis", 27),
];

// ============================================================================
// REPORT TYPES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileReport {
    pub network: String,
    pub sections: Vec<Section>,
}

impl ProfileReport {
    pub fn from_network(network: &dyn SocialNetwork) -> Self {
        ProfileReport {
            network: network.name().to_string(),
            sections: network.sections().to_vec(),
        }
    }

    pub fn line(&self) -> String {
        section_line(&self.network, &self.sections)
    }
}

/// DemoReport - Everything the showcase produced
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DemoReport {
    pub vehicles: Vec<Car>,
    pub profiles: Vec<ProfileReport>,
}

impl DemoReport {
    pub fn record_vehicle(&mut self, vehicle: &dyn Vehicle) {
        self.vehicles.push(vehicle.car().clone());
    }

    pub fn record_profile(&mut self, network: &dyn SocialNetwork) {
        self.profiles.push(ProfileReport::from_network(network));
    }

    /// One line per vehicle, then one line per profile
    pub fn lines(&self) -> Vec<String> {
        let vehicles = self.vehicles.iter().map(|car| car.report());
        let profiles = self.profiles.iter().map(ProfileReport::line);
        vehicles.chain(profiles).collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

// ============================================================================
// SHOWCASE
// ============================================================================

/// Register every `CUSTOM_MODELS` entry as a plain `Car` constructor
pub fn register_custom_models(factory: &mut VehicleFactory) {
    for model in CUSTOM_MODELS {
        factory.register(model, move |power| -> Box<dyn Vehicle> {
            Box::new(Car::new(model, power))
        });
    }
}

fn drive(vehicle: &mut dyn Vehicle) {
    for _ in 0..RUNS_PER_DRIVE {
        vehicle.run();
    }
}

/// Drive the demo vehicles and build one profile per network
///
/// `factory` must know the built-in kinds and `CUSTOM_MODELS`.
pub fn run_demo(factory: &VehicleFactory) -> Result<DemoReport, FactoryError> {
    let mut report = DemoReport::default();

    for (model, power) in PLAIN_DRIVES {
        let mut car = Car::new(model, power);
        drive(&mut car);
        report.record_vehicle(&car);
    }

    for (tag, power) in FACTORY_DRIVES {
        let mut vehicle = factory.create(tag, power)?;
        drive(vehicle.as_mut());
        report.record_vehicle(vehicle.as_ref());
    }

    for kind in NetworkKind::ALL {
        let mut network = kind.create_network();
        network.create_profile();
        report.record_profile(network.as_ref());
    }

    Ok(report)
}

// ============================================================================
// TESTS
// ============================================================================
