/// Format a count with en-IN digit grouping: the last three digits form one
/// group, everything before that is grouped in pairs (`1,23,45,678`).
pub fn format_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::with_capacity(head.len() / 2 + 1);
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{tail}", groups.join(","))
}

#[cfg(test)]
mod tests {
    use super::format_indian;

    #[test]
    fn small_numbers_are_unchanged() {
        assert_eq!(format_indian(0), "0");
        assert_eq!(format_indian(999), "999");
    }

    #[test]
    fn thousands_get_one_separator() {
        assert_eq!(format_indian(1_000), "1,000");
        assert_eq!(format_indian(99_999), "99,999");
    }

    #[test]
    fn lakhs_and_crores_group_in_pairs() {
        assert_eq!(format_indian(123_456), "1,23,456");
        assert_eq!(format_indian(12_345_678), "1,23,45,678");
        assert_eq!(format_indian(44_996_000), "4,49,96,000");
    }
}
