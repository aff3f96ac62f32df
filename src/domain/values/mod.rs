pub mod delimiter;
pub mod options;
pub mod section;
pub mod string_distance;
