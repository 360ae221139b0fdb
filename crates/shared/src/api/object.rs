use const_format::concatcp;

use crate::api::API_BASE_PATH;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Object {
    Users,
    NewUser,
    AddExercise,
    Log,
}

impl Object {
    pub const fn path(&self) -> &str {
        use Object::*;
        match self {
            Users => concatcp!(API_BASE_PATH, "users"),
            NewUser => concatcp!(API_BASE_PATH, "new-user"),
            AddExercise => concatcp!(API_BASE_PATH, "add"),
            Log => concatcp!(API_BASE_PATH, "log"),
        }
    }
}
