/// Step a list selection back by one, wrapping to the last row.
pub const fn wrap_decrement(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    if index == 0 || index > len {
        len - 1
    } else {
        index - 1
    }
}

/// Step a list selection forward by one, wrapping to the first row.
pub const fn wrap_increment(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    (index + 1) % len
}
