//! Banner texts shown by the presenter at level start and on game over.

/// Intro banner for a level, e.g. `"Day 3"`.
pub fn day_banner(level: u32) -> String {
    format!("Day {level}")
}

/// Game-over banner, e.g. `"After 3 days you starved."`.
pub fn starvation_banner(level: u32) -> String {
    format!("After {level} days you starved.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banners_embed_level_number() {
        assert_eq!(day_banner(1), "Day 1");
        assert_eq!(starvation_banner(7), "After 7 days you starved.");
    }
}
