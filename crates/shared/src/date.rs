use time::OffsetDateTime;

/// Whether two timestamps fall on the same calendar day, each interpreted in
/// its own offset.
pub fn same_calendar_day(a: OffsetDateTime, b: OffsetDateTime) -> bool {
    a.date() == b.date()
}
