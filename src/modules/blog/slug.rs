use regex::Regex;
use std::sync::LazyLock;

pub const MAX_SLUG_LEN: usize = 200;

static SLUG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("slug pattern is valid"));

/// Builds a URL slug from a title. Turkish and German letters are folded to
/// ASCII, whitespace and hyphens become single dashes, anything else is dropped.
pub fn generate_slug(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    for ch in text.chars() {
        let piece = match transliterate(ch) {
            Some(ascii) => ascii,
            None if ch.is_ascii_alphanumeric() => {
                push_piece(&mut slug, &mut pending_dash, &ch.to_ascii_lowercase().to_string());
                continue;
            }
            None => {
                if ch.is_whitespace() || ch == '-' {
                    pending_dash = !slug.is_empty();
                }
                continue;
            }
        };
        push_piece(&mut slug, &mut pending_dash, piece);
    }

    slug.truncate(MAX_SLUG_LEN);
    slug.trim_end_matches('-').to_string()
}

pub fn is_valid_slug(slug: &str) -> bool {
    slug.len() <= MAX_SLUG_LEN && SLUG_PATTERN.is_match(slug)
}

fn push_piece(slug: &mut String, pending_dash: &mut bool, piece: &str) {
    if *pending_dash {
        slug.push('-');
        *pending_dash = false;
    }
    slug.push_str(piece);
}

fn transliterate(ch: char) -> Option<&'static str> {
    let ascii = match ch {
        'ç' | 'Ç' => "c",
        'ğ' | 'Ğ' => "g",
        'ı' | 'İ' => "i",
        'ö' | 'Ö' => "o",
        'ş' | 'Ş' => "s",
        'ü' | 'Ü' => "u",
        'ä' | 'Ä' => "a",
        'ß' => "ss",
        _ => return None,
    };
    Some(ascii)
}
