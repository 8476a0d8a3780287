use tracing::debug;

/// Something that can be started.
///
/// `start` has a default; implementors override it only when they start differently.
pub trait Motion {
    fn name(&self) -> &str;

    fn start(&self) -> &'static str {
        "Engine starts"
    }
}

/// Generic vehicle; uses the default start.
#[derive(Debug, Clone, Copy, Default)]
pub struct Vehicle;

impl Motion for Vehicle {
    fn name(&self) -> &str {
        "vehicle"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Car;

impl Motion for Car {
    fn name(&self) -> &str {
        "car"
    }

    fn start(&self) -> &'static str {
        "Car starts"
    }
}

/// Start every member of `fleet` in order and collect what each reported.
pub fn start_all(fleet: &[Box<dyn Motion>]) -> Vec<&'static str> {
    fleet
        .iter()
        .map(|m| {
            debug!(target: "kata_core::motion", name = m.name(), "starting");
            m.start()
        })
        .collect()
}
