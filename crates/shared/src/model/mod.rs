mod exercise;
pub use exercise::*;

mod weight_unit;
pub use weight_unit::*;

mod workout;
pub use workout::*;

mod user;
pub use user::*;

use crate::api::error::ValidationError;

pub trait ValidateModel {
    fn validate(&self) -> Result<(), ValidationError>;
}

impl<T: ValidateModel> ValidateModel for &T {
    fn validate(&self) -> Result<(), ValidationError> {
        (*self).validate()
    }
}

/// Skips validation for bodies that don't have any rules
#[derive(Debug, Clone)]
pub struct NoValidation<T>(pub T);

impl<T: serde::Serialize> serde::Serialize for NoValidation<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<T> ValidateModel for NoValidation<T> {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}
