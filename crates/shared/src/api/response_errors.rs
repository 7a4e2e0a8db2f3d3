use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::api::error::ServerError;

/// Declares a route error enum with a status code and message per variant
macro_rules! response_error {
    ($name:ident {
        $(
            #[code($variant_code:expr)]
            #[error($($message:tt)*)]
            $variant:ident
            $({ $($var_struct_body_tt:tt)* })?
        ,)*
    }) => {

        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
        pub enum $name {
            $(
                #[error($($message)*)]
                $variant $({
                    $($var_struct_body_tt)*
                })?,
            )*
        }

        impl $name {
            pub fn code(&self) -> StatusCode {
                match self {
                    $( $name::$variant { .. } => $variant_code, )*
                }
            }
        }

        impl From<$name> for ServerError<$name> {
            fn from(inner: $name) -> Self {
                Self::Inner { code: inner.code(), inner }
            }
        }
    };
}

response_error!(SaveWorkoutError {
    #[code(StatusCode::INTERNAL_SERVER_ERROR)]
    #[error("Failed to save workout")]
    Backend,
});

response_error!(DeleteWorkoutError {
    #[code(StatusCode::BAD_REQUEST)]
    #[error("Workout id is required")]
    MissingWorkoutId,
    #[code(StatusCode::INTERNAL_SERVER_ERROR)]
    #[error("Failed to delete workout")]
    Backend,
});

response_error!(GuidanceError {
    #[code(StatusCode::BAD_REQUEST)]
    #[error("Exercise name is required")]
    MissingExerciseName,
    #[code(StatusCode::INTERNAL_SERVER_ERROR)]
    #[error("Error fetching ai guidance")]
    Provider,
});

#[cfg(test)]
mod test {
    use http::StatusCode;

    use super::*;

    #[test]
    fn test_codes_and_messages() {
        let err: ServerError<GuidanceError> = GuidanceError::MissingExerciseName.into();
        assert_eq!(err.code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Exercise name is required");

        let err: ServerError<SaveWorkoutError> = SaveWorkoutError::Backend.into();
        assert_eq!(err.code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Failed to save workout");
    }
}
