/// A configurable value, bounded by some minimum and maximum.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: Clone + PartialOrd> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }

    /// Sets the value of the option to `value`, if `value` is within bounds.
    /// Otherwise, the value is unchanged and `false` is returned.
    pub fn set(&mut self, value: T) -> bool {
        match self.min <= value && value <= self.max {
            true => {
                self.value = value;
                true
            }
            false => false,
        }
    }
}
