//! Verb registry: the declared, closed verb set (spec.md §3/§4.1).
//!
//! `VERB_TABLE` is the single source of truth for which infinitives the
//! Conjugator, Validator, and Generator accept. Anything not in this table
//! is an `UnknownVerb`.

use super::types::{EndingClass, Person, SpellingChange, StemPattern};
use std::collections::HashMap;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy)]
pub struct StemChange {
    pub pattern: StemPattern,
}

#[derive(Debug, Clone, Copy)]
pub struct Verb {
    pub infinitive: &'static str,
    pub class: EndingClass,
    pub stem_change: Option<StemChange>,
    pub spelling_change: Option<SpellingChange>,
    pub irregular: bool,
}

impl Verb {
    /// The bare stem: infinitive with its two-letter ending removed.
    pub fn base_stem(&self) -> &str {
        &self.infinitive[..self.infinitive.len() - 2]
    }
}

macro_rules! verb {
    ($inf:literal, $class:ident) => {
        Verb { infinitive: $inf, class: EndingClass::$class, stem_change: None, spelling_change: None, irregular: false }
    };
    ($inf:literal, $class:ident, stem = $pattern:ident) => {
        Verb { infinitive: $inf, class: EndingClass::$class, stem_change: Some(StemChange { pattern: StemPattern::$pattern }), spelling_change: None, irregular: false }
    };
    ($inf:literal, $class:ident, spelling = $rule:ident) => {
        Verb { infinitive: $inf, class: EndingClass::$class, stem_change: None, spelling_change: Some(SpellingChange::$rule), irregular: false }
    };
    ($inf:literal, $class:ident, stem = $pattern:ident, spelling = $rule:ident) => {
        Verb { infinitive: $inf, class: EndingClass::$class, stem_change: Some(StemChange { pattern: StemPattern::$pattern }), spelling_change: Some(SpellingChange::$rule), irregular: false }
    };
    ($inf:literal, $class:ident, irregular) => {
        Verb { infinitive: $inf, class: EndingClass::$class, stem_change: None, spelling_change: None, irregular: true }
    };
}

/// All declared verbs. Regular exemplars, stem-changers, spelling-changers,
/// then the 17-verb closed irregular set (spec.md §4.1).
const VERBS: &[Verb] = &[
    // -- regular AR --
    verb!("hablar", Ar),
    verb!("estudiar", Ar),
    verb!("comprar", Ar),
    verb!("mirar", Ar),
    verb!("trabajar", Ar),
    // -- regular ER --
    verb!("comer", Er),
    verb!("aprender", Er),
    verb!("correr", Er),
    verb!("beber", Er),
    verb!("vender", Er),
    // -- regular IR --
    verb!("vivir", Ir),
    verb!("escribir", Ir),
    verb!("abrir", Ir),
    verb!("decidir", Ir),
    verb!("recibir", Ir),
    // -- stem-changing --
    verb!("pensar", Ar, stem = EIe),
    verb!("contar", Ar, stem = OUe),
    verb!("entender", Er, stem = EIe),
    verb!("volver", Er, stem = OUe),
    verb!("pedir", Ir, stem = EI),
    verb!("dormir", Ir, stem = OUe),
    verb!("sentir", Ir, stem = EIe),
    verb!("jugar", Ar, stem = UUe, spelling = GtoGu),
    // -- spelling-changing only --
    verb!("buscar", Ar, spelling = CtoQu),
    verb!("pagar", Ar, spelling = GtoGu),
    verb!("cruzar", Ar, spelling = ZtoC),
    verb!("averiguar", Ar, spelling = GutoGu2),
    verb!("vencer", Er, spelling = CtoZ),
    verb!("convencer", Er, spelling = CtoZ),
    verb!("huir", Ir, spelling = ItoY),
    // -- the 17 irregulars (spec.md §4.1) --
    verb!("ser", Er, irregular),
    verb!("estar", Ar, irregular),
    verb!("ir", Ir, irregular),
    verb!("haber", Er, irregular),
    verb!("dar", Ar, irregular),
    verb!("saber", Er, irregular),
    verb!("ver", Er, irregular),
    verb!("hacer", Er, irregular),
    verb!("tener", Er, irregular),
    verb!("poner", Er, irregular),
    verb!("poder", Er, stem = OUe), // irregular preterite, regular-pattern present subj
    verb!("querer", Er, stem = EIe), // irregular preterite, regular-pattern present subj
    verb!("venir", Ir, irregular),
    verb!("salir", Ir, irregular),
    verb!("traer", Er, irregular),
    verb!("caer", Er, irregular),
    verb!("conocer", Er, irregular),
];

fn registry() -> &'static HashMap<&'static str, Verb> {
    static REGISTRY: OnceLock<HashMap<&'static str, Verb>> = OnceLock::new();
    REGISTRY.get_or_init(|| VERBS.iter().map(|v| (v.infinitive, *v)).collect())
}

/// Look up a verb by infinitive. Returns `None` for anything outside the
/// declared set, which callers turn into `EngineError::UnknownVerb`.
pub fn lookup(infinitive: &str) -> Option<Verb> {
    registry().get(infinitive).copied()
}

/// All declared infinitives, for iteration by the Generator's verb pools.
pub fn all_verbs() -> impl Iterator<Item = &'static Verb> {
    VERBS.iter()
}

/// Place an acute accent on the last vowel of `stem`. Spanish orthography
/// requires this when attaching `-ramos`/`-semos` (spec.md §4.1): the
/// written stress must stay on the syllable before the suffix.
pub fn accent_last_vowel(stem: &str) -> String {
    let mut chars: Vec<char> = stem.chars().collect();
    if let Some(pos) = chars.iter().rposition(|c| "aeiouAEIOU".contains(*c)) {
        chars[pos] = match chars[pos] {
            'a' => 'á',
            'e' => 'é',
            'i' => 'í',
            'o' => 'ó',
            'u' => 'ú',
            'A' => 'Á',
            'E' => 'É',
            'I' => 'Í',
            'O' => 'Ó',
            'U' => 'Ú',
            other => other,
        };
    }
    chars.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accents_last_vowel_of_stem() {
        assert_eq!(accent_last_vowel("habla"), "hablá");
        assert_eq!(accent_last_vowel("comie"), "comié");
        assert_eq!(accent_last_vowel("traje"), "trajé");
    }

    #[test]
    fn lookup_knows_declared_verbs_only() {
        assert!(lookup("hablar").is_some());
        assert!(lookup("ser").is_some());
        assert!(lookup("xyzzy").is_none());
    }

    #[test]
    fn base_stem_strips_ending() {
        let v = lookup("hablar").unwrap();
        assert_eq!(v.base_stem(), "habl");
    }
}
