// Output formatting — terminal display for bounty lists and run results.

pub mod terminal;

/// Fit scraped text into one listing column of `width` characters.
///
/// Runs of whitespace collapse to single spaces first, since descriptions
/// are stitched together from several markdown lines. Longer text is cut on
/// a char boundary and ends in "…", which counts toward `width`.
pub fn clip_to_width(text: &str, width: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    match flat.char_indices().nth(width) {
        None => flat,
        Some(_) if width == 0 => String::new(),
        Some(_) => {
            let mut clipped: String = flat.chars().take(width - 1).collect();
            clipped.push('…');
            clipped
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_untouched() {
        assert_eq!(clip_to_width("Fix bug", 10), "Fix bug");
    }

    #[test]
    fn test_long_text_ends_in_ellipsis_within_width() {
        let clipped = clip_to_width("Build a Discord bot", 8);
        assert_eq!(clipped, "Build a…");
        assert_eq!(clipped.chars().count(), 8);
    }

    #[test]
    fn test_whitespace_collapses_before_measuring() {
        assert_eq!(clip_to_width("Need   a\tbot", 10), "Need a bot");
    }

    #[test]
    fn test_multibyte_text_cut_on_char_boundary() {
        assert_eq!(clip_to_width("🔥🔥🔥🔥", 3), "🔥🔥…");
    }
}
