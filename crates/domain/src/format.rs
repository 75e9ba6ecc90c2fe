/// Format a workout duration like "45m", "1h" or "1h 30m".
#[must_use]
pub fn format_duration(minutes: u32) -> String {
    if minutes < 60 {
        return format!("{minutes}m");
    }

    let hours = minutes / 60;
    match minutes % 60 {
        0 => format!("{hours}h"),
        remaining_minutes => format!("{hours}h {remaining_minutes}m"),
    }
}

/// Format a rest period as "m:ss".
#[must_use]
pub fn format_rest(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Turn a snake_case identifier into a title, e.g. "weight_loss" into "Weight Loss".
#[must_use]
pub fn label(identifier: &str) -> String {
    identifier
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
