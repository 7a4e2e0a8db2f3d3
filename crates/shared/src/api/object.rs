use const_format::concatcp;

use crate::api::API_BASE_PATH;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Object {
    Ping,
    SaveWorkout,
    DeleteWorkout,
    Guidance,
}

impl Object {
    pub const fn path(&self) -> &'static str {
        use Object::*;
        match self {
            Ping => concatcp!(API_BASE_PATH, "ping"),
            SaveWorkout => concatcp!(API_BASE_PATH, "save-workout"),
            DeleteWorkout => concatcp!(API_BASE_PATH, "delete-workout"),
            Guidance => concatcp!(API_BASE_PATH, "ai"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::Object;

    #[test]
    fn test_paths_are_rooted_under_api() {
        assert_eq!(Object::Ping.path(), "/api/ping");
        assert_eq!(Object::SaveWorkout.path(), "/api/save-workout");
        assert_eq!(Object::DeleteWorkout.path(), "/api/delete-workout");
        assert_eq!(Object::Guidance.path(), "/api/ai");
    }
}
