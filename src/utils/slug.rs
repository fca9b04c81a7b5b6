//! Generación de slugs para reportes publicados

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_ALNUM_RE: Regex = Regex::new(r"[^a-z0-9]+").expect("valid slug regex");
}

/// "I-80 Closure @ Exit 142!" -> "i-80-closure-exit-142"
pub fn slugify(title: &str) -> String {
    let lower = title.to_lowercase();
    NON_ALNUM_RE
        .replace_all(&lower, "-")
        .trim_matches('-')
        .to_string()
}

/// Primer candidato libre: `base`, `base-2`, `base-3`, ...
pub fn unique_slug<F>(base: &str, mut is_taken: F) -> String
where
    F: FnMut(&str) -> bool,
{
    if !is_taken(base) {
        return base.to_string();
    }

    let mut suffix = 2;
    loop {
        let candidate = format!("{}-{}", base, suffix);
        if !is_taken(&candidate) {
            return candidate;
        }
        suffix += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("I-80 Closure @ Exit 142!"), "i-80-closure-exit-142");
        assert_eq!(slugify("  Weigh Station  OPEN "), "weigh-station-open");
        assert_eq!(slugify("Café on Rt. 66"), "caf-on-rt-66");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_unique_slug_appends_suffix() {
        let taken = ["fuel-prices", "fuel-prices-2"];
        let slug = unique_slug("fuel-prices", |candidate| taken.contains(&candidate));
        assert_eq!(slug, "fuel-prices-3");

        let slug = unique_slug("black-ice", |_| false);
        assert_eq!(slug, "black-ice");
    }
}
