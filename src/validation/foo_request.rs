use crate::types::dto::foo::FooRequest;
use crate::validation::{ValidationErrors, Validate, length_between, not_blank};

pub const NAME_MIN_LENGTH: usize = 2;
pub const NAME_MAX_LENGTH: usize = 50;

const NAME_BLANK: &str = "Name cannot be blank";
const NAME_SIZE: &str = "Name must be between 2 and 50 characters";

impl Validate for FooRequest {
    /// Rules are checked in order; the first failure for a field is reported
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let name = self.name.as_deref();

        if !not_blank(name) {
            errors.add("name", NAME_BLANK);
        }
        if let Some(name) = name {
            if !length_between(name, NAME_MIN_LENGTH, NAME_MAX_LENGTH) {
                errors.add("name", NAME_SIZE);
            }
        }

        errors.into_result()
    }
}
