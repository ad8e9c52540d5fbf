//! Default value functions for serde deserialization.

pub fn attempts() -> usize {
    1
}

pub fn decay() -> f32 {
    0.998
}

pub fn factor() -> f32 {
    0.1
}

pub fn cell_size() -> f32 {
    40.0
}

pub fn output_directory() -> String {
    ".".to_string()
}
