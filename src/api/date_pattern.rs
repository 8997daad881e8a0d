//! Translation of ICU/`SimpleDateFormat` date patterns into `chrono` strftime.
//!
//! Hosts send the same pattern string to both native widgets, so the pattern
//! letters keep their ICU meaning here. Only the commonly used letters are
//! supported; any other ASCII letter is emitted literally.

/// Converts an ICU-style pattern (`"MMM d"`, `"yyyy-MM-dd HH:mm"`) to strftime.
#[must_use]
pub(crate) fn icu_to_strftime(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut index = 0;

    while index < chars.len() {
        let ch = chars[index];

        if ch == '\'' {
            index = push_quoted(&chars, index, &mut out);
            continue;
        }

        if !ch.is_ascii_alphabetic() {
            push_literal(ch, &mut out);
            index += 1;
            continue;
        }

        let run_start = index;
        while index < chars.len() && chars[index] == ch {
            index += 1;
        }
        let count = index - run_start;
        match strftime_for(ch, count) {
            Some(spec) => out.push_str(spec),
            None => {
                for _ in 0..count {
                    push_literal(ch, &mut out);
                }
            }
        }
    }

    out
}

/// Handles `'quoted text'` and the `''` escape; returns the next index to read.
fn push_quoted(chars: &[char], start: usize, out: &mut String) -> usize {
    if chars.get(start + 1) == Some(&'\'') {
        out.push('\'');
        return start + 2;
    }

    let mut index = start + 1;
    while index < chars.len() {
        if chars[index] == '\'' {
            if chars.get(index + 1) == Some(&'\'') {
                out.push('\'');
                index += 2;
                continue;
            }
            return index + 1;
        }
        push_literal(chars[index], out);
        index += 1;
    }
    index
}

fn push_literal(ch: char, out: &mut String) {
    match ch {
        '%' => out.push_str("%%"),
        '\n' => out.push_str("%n"),
        '\t' => out.push_str("%t"),
        other => out.push(other),
    }
}

fn strftime_for(letter: char, count: usize) -> Option<&'static str> {
    let spec = match (letter, count) {
        ('y' | 'u', 2) => "%y",
        ('y' | 'u', _) => "%Y",
        ('M' | 'L', 1) => "%-m",
        ('M' | 'L', 2) => "%m",
        ('M' | 'L', 3) => "%b",
        ('M' | 'L', _) => "%B",
        ('d', 1) => "%-d",
        ('d', _) => "%d",
        ('D', 1 | 2) => "%-j",
        ('D', _) => "%j",
        ('E', 1..=3) => "%a",
        ('E', _) => "%A",
        ('H' | 'k', 1) => "%-H",
        ('H' | 'k', _) => "%H",
        ('h' | 'K', 1) => "%-I",
        ('h' | 'K', _) => "%I",
        ('m', 1) => "%-M",
        ('m', _) => "%M",
        ('s', 1) => "%-S",
        ('s', _) => "%S",
        ('S', _) => "%3f",
        ('a', _) => "%p",
        ('Z' | 'X' | 'x', _) => "%z",
        ('z', _) => "%Z",
        _ => return None,
    };
    Some(spec)
}

#[cfg(test)]
mod tests {
    use super::icu_to_strftime;

    #[test]
    fn default_pattern_maps_to_short_month_and_day() {
        assert_eq!(icu_to_strftime("MMM d"), "%b %-d");
    }

    #[test]
    fn numeric_date_time_pattern() {
        assert_eq!(icu_to_strftime("yyyy-MM-dd HH:mm"), "%Y-%m-%d %H:%M");
    }

    #[test]
    fn quoted_text_and_percent_are_literal() {
        assert_eq!(icu_to_strftime("'week' w 100%"), "week w 100%%");
        assert_eq!(icu_to_strftime("h 'o''clock' a"), "%-I o'clock %p");
    }
}
