use models::Vehicle;

/// Optional exact-match criteria for listing vehicles.
///
/// An absent criterion does not constrain the result; `Some("")` is a real
/// criterion and only matches empty values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VehicleFilter {
    pub year: Option<i32>,
    pub make: Option<String>,
    pub model: Option<String>,
}

impl VehicleFilter {
    pub fn is_empty(&self) -> bool {
        self.year.is_none() && self.make.is_none() && self.model.is_none()
    }

    /// Narrow `all` by year, then make, then model. Relative order is kept.
    pub fn apply(&self, mut all: Vec<Vehicle>) -> Vec<Vehicle> {
        if self.is_empty() {
            return all;
        }
        if let Some(year) = self.year {
            all.retain(|v| v.year == year);
        }
        if let Some(make) = &self.make {
            all.retain(|v| &v.make == make);
        }
        if let Some(model) = &self.model {
            all.retain(|v| &v.model == model);
        }
        all
    }
}
