// 🏭 Vehicle Factory - Registry of constructors
// Adding a kind means registering a constructor, dispatch never changes

use std::collections::HashMap;

use crate::error::FactoryError;
use crate::vehicle::{Vehicle, VehicleKind};

/// Constructor stored in the registry: power in, fresh vehicle out
pub type Constructor = Box<dyn Fn(u64) -> Box<dyn Vehicle> + Send + Sync>;

/// VehicleFactory - Maps a tag to the constructor that builds it
///
/// The factory owns constructors only. Every vehicle it creates is handed
/// straight to the caller.
///
/// # Example:
/// ```
/// use vehicle_factory::{Vehicle, VehicleFactory};
///
/// let factory = VehicleFactory::new();
/// let mut genesis = factory.create("Genesis", 20).unwrap();
/// genesis.run();
/// genesis.run();
/// assert_eq!(genesis.moved(), 40);
/// ```
pub struct VehicleFactory {
    constructors: HashMap<String, Constructor>,
}

impl VehicleFactory {
    /// Create a factory that knows every built-in `VehicleKind`
    pub fn new() -> Self {
        let mut factory = VehicleFactory::empty();
        factory.register_default_kinds();
        factory
    }

    /// Create a factory with no constructors
    pub fn empty() -> Self {
        VehicleFactory {
            constructors: HashMap::new(),
        }
    }

    fn register_default_kinds(&mut self) {
        for kind in VehicleKind::ALL {
            self.register(kind.name(), move |power| kind.build(power));
        }
    }

    /// Register a constructor for `tag`
    ///
    /// Returns `true` if a previous constructor for the same tag was replaced.
    pub fn register<F>(&mut self, tag: impl Into<String>, constructor: F) -> bool
    where
        F: Fn(u64) -> Box<dyn Vehicle> + Send + Sync + 'static,
    {
        let tag = tag.into();
        let replaced = self
            .constructors
            .insert(tag.clone(), Box::new(constructor))
            .is_some();
        tracing::debug!(tag = %tag, replaced, "registered vehicle constructor");
        replaced
    }

    /// Build a new vehicle of kind `tag` with distance at zero
    pub fn create(&self, tag: &str, power: u64) -> Result<Box<dyn Vehicle>, FactoryError> {
        match self.constructors.get(tag) {
            Some(constructor) => {
                let vehicle = constructor(power);
                tracing::debug!(tag, power, "created vehicle");
                Ok(vehicle)
            }
            None => {
                tracing::warn!(tag, "no constructor registered");
                Err(FactoryError::unknown(tag))
            }
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.constructors.contains_key(tag)
    }

    /// Registered tags, sorted
    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        kinds
    }
}

impl Default for VehicleFactory {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vehicle::Car;
    use proptest::prelude::*;

    fn drive(vehicle: &mut dyn Vehicle, times: u32) {
        for _ in 0..times {
            vehicle.run();
        }
    }

    #[test]
    fn test_create_genesis_runs_twice() {
        let factory = VehicleFactory::new();
        let mut genesis = factory.create("Genesis", 20).unwrap();
        drive(genesis.as_mut(), 2);

        assert_eq!(genesis.model(), "Genesis");
        assert_eq!(genesis.moved(), 40);
        assert_eq!(genesis.report(), "Genesis - moved: 40");
    }

    #[test]
    fn test_create_spark_runs_twice() {
        let factory = VehicleFactory::new();
        let mut spark = factory.create("Spark", 13).unwrap();
        drive(spark.as_mut(), 2);

        assert_eq!(spark.model(), "Spark");
        assert_eq!(spark.moved(), 26);
    }

    #[test]
    fn test_create_starts_at_zero() {
        let factory = VehicleFactory::new();
        let vehicle = factory.create("Genesis", 27).unwrap();
        assert_eq!(vehicle.moved(), 0);
        assert_eq!(vehicle.power(), 27);
    }

    #[test]
    fn test_create_unknown_tag() {
        let factory = VehicleFactory::new();
        let err = factory.create("Tesla", 10).unwrap_err();
        assert_eq!(
            err,
            FactoryError::UnknownVariant {
                tag: "Tesla".to_string()
            }
        );
    }

    #[test]
    fn test_empty_factory_knows_nothing() {
        let factory = VehicleFactory::empty();
        assert!(factory.kinds().is_empty());
        assert!(factory.create("Genesis", 1).is_err());
    }

    #[test]
    fn test_default_kinds() {
        let factory = VehicleFactory::default();
        assert_eq!(factory.kinds(), vec!["Genesis", "Spark"]);
        assert!(factory.contains("Spark"));
        assert!(!factory.contains("spark"));
    }

    #[test]
    fn test_register_custom_kind() {
        let mut factory = VehicleFactory::new();
        let replaced = factory.register("Avante", |power| Box::new(Car::new("Avante", power)));
        assert!(!replaced);

        let mut avante = factory.create("Avante", 9).unwrap();
        avante.run();
        assert_eq!(avante.report(), "Avante - moved: 9");
        assert_eq!(factory.kinds(), vec!["Avante", "Genesis", "Spark"]);
    }

    #[test]
    fn test_register_replaces_existing() {
        let mut factory = VehicleFactory::new();
        let replaced = factory.register("Spark", |power| Box::new(Car::new("Spark EV", power)));
        assert!(replaced);

        let spark = factory.create("Spark", 3).unwrap();
        assert_eq!(spark.model(), "Spark EV");
        assert_eq!(factory.kinds().len(), 2);
    }

    #[test]
    fn test_factory_keeps_no_vehicles() {
        let factory = VehicleFactory::new();
        let mut first = factory.create("Genesis", 5).unwrap();
        first.run();
        let second = factory.create("Genesis", 5).unwrap();

        assert_eq!(first.moved(), 5);
        assert_eq!(second.moved(), 0);
    }

    proptest! {
        #[test]
        fn prop_moved_is_runs_times_power(
            index in 0usize..VehicleKind::ALL.len(),
            power in 0u64..1_000_000,
            runs in 0u32..100,
        ) {
            let factory = VehicleFactory::new();
            let tag = VehicleKind::ALL[index].name();
            let mut vehicle = factory.create(tag, power).unwrap();
            drive(vehicle.as_mut(), runs);
            prop_assert_eq!(vehicle.moved(), u64::from(runs) * power);
        }

        #[test]
        fn prop_unknown_tag_fails_for_any_power(power in any::<u64>()) {
            let factory = VehicleFactory::new();
            let result = factory.create("Tesla", power);
            prop_assert_eq!(result.unwrap_err(), FactoryError::unknown("Tesla"));
        }
    }
}
