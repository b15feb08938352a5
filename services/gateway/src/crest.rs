//! Crest URL resolution
//!
//! Pure mapping from a team name to the crest asset served under
//! `/escudos`. File names are ASCII slugs, so Portuguese accents are
//! folded before slugging ("São Paulo" → `/escudos/sao_paulo.png`).

/// Resolve the crest URL for a team name
pub fn crest_url(team: &str) -> String {
    format!("/escudos/{}.png", slug(team))
}

fn slug(team: &str) -> String {
    let mut out = String::with_capacity(team.len());
    let mut last_was_separator = true; // suppress leading separators

    for c in team.chars().map(fold_accent) {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
            last_was_separator = false;
        } else if !last_was_separator {
            out.push('_');
            last_was_separator = true;
        }
    }

    while out.ends_with('_') {
        out.pop();
    }
    out
}

/// Fold the accented characters that appear in Brazilian team names
fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'Á' | 'À' | 'Â' | 'Ã' => 'a',
        'é' | 'ê' | 'É' | 'Ê' => 'e',
        'í' | 'Í' => 'i',
        'ó' | 'ô' | 'õ' | 'Ó' | 'Ô' | 'Õ' => 'o',
        'ú' | 'ü' | 'Ú' | 'Ü' => 'u',
        'ç' | 'Ç' => 'c',
        _ if c.is_ascii() => c,
        // Anything else non-ASCII becomes a separator
        _ => ' ',
    }
}
