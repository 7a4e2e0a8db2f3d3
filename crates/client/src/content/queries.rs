//! GROQ queries against the content backend

pub const EXERCISES: &str = r#"*[_type == "exercise"]"#;

pub const EXERCISE_BY_ID: &str = r#"*[_type == "exercise" && _id == $id][0]"#;

pub const EXERCISE_BY_NAME: &str = r#"*[_type == "exercise" && name == $name][0]{ _id, name }"#;

pub const WORKOUTS_FOR_USER: &str = r#"*[_type == "workout" && userId == $userId] | order(date desc) {
  _id,
  date,
  duration,
  exercises[] {
    exercise-> { _id, name },
    sets[] { reps, weight, weightUnit, _type, _key },
    _type,
    _key
  }
}"#;

pub const WORKOUT_BY_ID: &str = r#"*[_type == "workout" && _id == $workoutId][0] {
  _id,
  date,
  duration,
  exercises[] {
    exercise-> { _id, name, description },
    sets[] { reps, weight, weightUnit, _type, _key },
    _type,
    _key
  }
}"#;
