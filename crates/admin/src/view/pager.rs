/// Page after `current`, wrapping back to the first page past `max_page`.
pub fn next_page(current: u32, max_page: u32) -> u32 {
    if current >= max_page {
        1
    } else {
        current + 1
    }
}

/// Page before `current`. Clamps at the first page instead of wrapping.
pub fn prev_page(current: u32) -> u32 {
    if current > 1 {
        current - 1
    } else {
        1
    }
}
