// 🚗 Vehicle Models - Polymorphic cars
// One shared driving implementation, many concrete kinds

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FactoryError;

// ============================================================================
// VEHICLE KIND
// ============================================================================

/// VehicleKind - The statically known vehicle tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleKind {
    Genesis,
    Spark,
}

impl VehicleKind {
    pub const ALL: [VehicleKind; 2] = [VehicleKind::Genesis, VehicleKind::Spark];

    /// Tag used by the factory registry and shown as the model name
    pub fn name(&self) -> &'static str {
        match self {
            VehicleKind::Genesis => "Genesis",
            VehicleKind::Spark => "Spark",
        }
    }

    /// Build the concrete vehicle for this kind
    pub fn build(&self, power: u64) -> Box<dyn Vehicle> {
        match self {
            VehicleKind::Genesis => Box::new(Genesis::new(power)),
            VehicleKind::Spark => Box::new(Spark::new(power)),
        }
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VehicleKind {
    type Err = FactoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VehicleKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| FactoryError::unknown(s))
    }
}

// ============================================================================
// CAR (shared state)
// ============================================================================

/// Car - State every vehicle carries
///
/// Identity: `id` and `built_at` never change after construction.
/// Values: `moved` grows by exactly `power` on every run, and nothing else
/// can change it.
///
/// ```compile_fail
/// use vehicle_factory::Car;
///
/// let mut car = Car::new("Genesis", 20);
/// car.moved = 0;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    id: String,
    model: String,
    power: u64,
    moved: u64,
    built_at: DateTime<Utc>,
}

impl Car {
    /// Build a car with any model name, distance starts at zero
    pub fn new(model: impl Into<String>, power: u64) -> Self {
        Car {
            id: uuid::Uuid::new_v4().to_string(),
            model: model.into(),
            power,
            moved: 0,
            built_at: Utc::now(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn power(&self) -> u64 {
        self.power
    }

    pub fn moved(&self) -> u64 {
        self.moved
    }

    pub fn built_at(&self) -> DateTime<Utc> {
        self.built_at
    }

    /// The only place distance grows
    pub fn advance(&mut self) {
        self.moved = self.moved.saturating_add(self.power);
        tracing::trace!(model = %self.model, moved = self.moved, "vehicle ran");
    }

    /// One report line, e.g. `Genesis - moved: 40`
    pub fn report(&self) -> String {
        format!("{} - moved: {}", self.model, self.moved)
    }
}

// ============================================================================
// VEHICLE TRAIT
// ============================================================================

/// Vehicle - What every car kind can do
///
/// Implementors expose their `Car` read-only and forward `run` to
/// `Car::advance`, so every kind shares one driving implementation.
pub trait Vehicle: fmt::Debug + Send + Sync {
    fn car(&self) -> &Car;

    /// Drive once: distance grows by the car's power
    fn run(&mut self);

    fn model(&self) -> &str {
        self.car().model()
    }

    fn power(&self) -> u64 {
        self.car().power()
    }

    fn moved(&self) -> u64 {
        self.car().moved()
    }

    fn report(&self) -> String {
        self.car().report()
    }
}

impl Vehicle for Car {
    fn car(&self) -> &Car {
        self
    }

    fn run(&mut self) {
        self.advance();
    }
}

// ============================================================================
// CONCRETE KINDS
// ============================================================================

#[derive(Debug, Clone)]
pub struct Genesis(Car);

impl Genesis {
    pub fn new(power: u64) -> Self {
        Genesis(Car::new(VehicleKind::Genesis.name(), power))
    }
}

impl Vehicle for Genesis {
    fn car(&self) -> &Car {
        &self.0
    }

    fn run(&mut self) {
        self.0.advance();
    }
}

#[derive(Debug, Clone)]
pub struct Spark(Car);

impl Spark {
    pub fn new(power: u64) -> Self {
        Spark(Car::new(VehicleKind::Spark.name(), power))
    }
}

impl Vehicle for Spark {
    fn car(&self) -> &Car {
        &self.0
    }

    fn run(&mut self) {
        self.0.advance();
    }
}

// ============================================================================
// TESTS
// ============================================================================
