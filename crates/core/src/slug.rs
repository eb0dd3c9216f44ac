//! URL- and filename-safe slug generation.
//!
//! Used to derive upload filenames from member display names, so the fold
//! table covers the accented letters French names actually carry.

/// Generate an ASCII slug: lowercase, diacritics folded, every run of
/// non-alphanumeric characters collapsed to a single hyphen, hyphens
/// trimmed at both ends.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut prev_hyphen = false;

    for c in input.to_lowercase().chars() {
        if let Some(folded) = fold_diacritic(c) {
            slug.push_str(folded);
            prev_hyphen = false;
        } else if c.is_ascii_alphanumeric() {
            slug.push(c);
            prev_hyphen = false;
        } else if !prev_hyphen {
            slug.push('-');
            prev_hyphen = true;
        }
    }

    slug.trim_matches('-').to_string()
}

/// ASCII base form of an accented lowercase Latin letter, or `None` when
/// the character needs no folding (it is then kept or collapsed to a
/// hyphen by [`slugify`]).
fn fold_diacritic(c: char) -> Option<&'static str> {
    let folded = match c {
        'à' | 'â' | 'ä' | 'á' | 'ã' | 'å' => "a",
        'ç' => "c",
        'é' | 'è' | 'ê' | 'ë' => "e",
        'î' | 'ï' | 'í' | 'ì' => "i",
        'ñ' => "n",
        'ô' | 'ö' | 'ó' | 'ò' | 'õ' => "o",
        'ù' | 'û' | 'ü' | 'ú' => "u",
        'ý' | 'ÿ' => "y",
        'æ' => "ae",
        'œ' => "oe",
        'ß' => "ss",
        _ => return None,
    };
    Some(folded)
}
