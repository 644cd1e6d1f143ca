/// Fixed Likert weight table: levels 1..5 map onto the -2..+2 scale.
/// Out-of-domain levels are neutral, never an error.
pub fn weight_for_level(level: u8) -> f64 {
    match level {
        1 => -2.0,
        2 => -1.0,
        3 => 0.0,
        4 => 1.0,
        5 => 2.0,
        _ => 0.0,
    }
}
