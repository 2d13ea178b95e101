// rules.rs - Birth/survival rule (B3/S23)

/// Next state of a cell given its current state and live-neighbour count.
///
/// | neighbours | alive | dead |
/// |------------|-------|------|
/// | 0-1        | dies  | dead |
/// | 2          | lives | dead |
/// | 3          | lives | born |
/// | 4-8        | dies  | dead |
pub fn next_state(is_alive: bool, alive_neighbors: u8) -> bool {
    match (is_alive, alive_neighbors) {
        (current, 2) => current, // Unchanged
        (_, 3)       => true,    // Survival or birth
        _            => false,   // Under- or overpopulation
    }
}
