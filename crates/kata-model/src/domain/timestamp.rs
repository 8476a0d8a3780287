use time::{OffsetDateTime, error::Format, macros::format_description};

/// Render a timestamp as `YYYY-MM-DD HH:MM:SS` (no offset, no fraction).
pub fn format_timestamp(dt: OffsetDateTime) -> Result<String, Format> {
    dt.format(format_description!(
        "[year]-[month]-[day] [hour]:[minute]:[second]"
    ))
}
