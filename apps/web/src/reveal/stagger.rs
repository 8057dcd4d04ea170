/// Delay added per stagger slot.
pub const STAGGER_STEP_MS: u64 = 100;

/// Presentation delay for the `index`-th element of a group that reveals together.
///
/// Slots cycle every `cap` elements and start at `first_slot`, so a row of tags animates
/// left to right instead of all at once. State transitions are unaffected.
pub fn stagger_delay_ms(index: usize, cap: usize, first_slot: usize) -> u64 {
    let cap = cap.max(1);
    ((first_slot + index % cap) as u64) * STAGGER_STEP_MS
}
