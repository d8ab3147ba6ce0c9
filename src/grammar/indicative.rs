//! Present indicative and preterite, for the declared verb set only.
//!
//! This module exists purely to back the Validator's MOOD_CONFUSION and
//! WRONG_TENSE classification (spec.md §5): it needs to recognize when a
//! learner typed the indicative form of a verb instead of the subjunctive
//! one. It is not part of the public conjugation surface.

use super::endings::{indicative_present_ending, indicative_preterite_ending};
use super::types::Person;
use super::verbs::Verb;
use crate::conjugator::{present_indicative_stem, preterite_indicative_stem};
use std::collections::HashMap;
use std::sync::OnceLock;

type PersonForms = [&'static str; 6];

fn present_indicative_irregular() -> &'static HashMap<&'static str, PersonForms> {
    static TABLE: OnceLock<HashMap<&'static str, PersonForms>> = OnceLock::new();
    TABLE.get_or_init(|| {
        HashMap::from([
            ("ser", ["soy", "eres", "es", "somos", "sois", "son"]),
            ("estar", ["estoy", "estás", "está", "estamos", "estáis", "están"]),
            ("ir", ["voy", "vas", "va", "vamos", "vais", "van"]),
            ("haber", ["he", "has", "ha", "hemos", "habéis", "han"]),
            ("dar", ["doy", "das", "da", "damos", "dais", "dan"]),
            ("saber", ["sé", "sabes", "sabe", "sabemos", "sabéis", "saben"]),
            ("ver", ["veo", "ves", "ve", "vemos", "veis", "ven"]),
            ("hacer", ["hago", "haces", "hace", "hacemos", "hacéis", "hacen"]),
            ("tener", ["tengo", "tienes", "tiene", "tenemos", "tenéis", "tienen"]),
            ("poner", ["pongo", "pones", "pone", "ponemos", "ponéis", "ponen"]),
            ("poder", ["puedo", "puedes", "puede", "podemos", "podéis", "pueden"]),
            ("querer", ["quiero", "quieres", "quiere", "queremos", "queréis", "quieren"]),
            ("venir", ["vengo", "vienes", "viene", "venimos", "venís", "vienen"]),
            ("salir", ["salgo", "sales", "sale", "salimos", "salís", "salen"]),
            ("traer", ["traigo", "traes", "trae", "traemos", "traéis", "traen"]),
            ("caer", ["caigo", "caes", "cae", "caemos", "caéis", "caen"]),
            ("conocer", ["conozco", "conoces", "conoce", "conocemos", "conocéis", "conocen"]),
        ])
    })
}

fn preterite_irregular() -> &'static HashMap<&'static str, PersonForms> {
    static TABLE: OnceLock<HashMap<&'static str, PersonForms>> = OnceLock::new();
    TABLE.get_or_init(|| {
        HashMap::from([
            ("ser", ["fui", "fuiste", "fue", "fuimos", "fuisteis", "fueron"]),
            ("estar", ["estuve", "estuviste", "estuvo", "estuvimos", "estuvisteis", "estuvieron"]),
            ("ir", ["fui", "fuiste", "fue", "fuimos", "fuisteis", "fueron"]),
            ("haber", ["hube", "hubiste", "hubo", "hubimos", "hubisteis", "hubieron"]),
            ("dar", ["di", "diste", "dio", "dimos", "disteis", "dieron"]),
            ("saber", ["supe", "supiste", "supo", "supimos", "supisteis", "supieron"]),
            ("ver", ["vi", "viste", "vio", "vimos", "visteis", "vieron"]),
            ("hacer", ["hice", "hiciste", "hizo", "hicimos", "hicisteis", "hicieron"]),
            ("tener", ["tuve", "tuviste", "tuvo", "tuvimos", "tuvisteis", "tuvieron"]),
            ("poner", ["puse", "pusiste", "puso", "pusimos", "pusisteis", "pusieron"]),
            ("poder", ["pude", "pudiste", "pudo", "pudimos", "pudisteis", "pudieron"]),
            ("querer", ["quise", "quisiste", "quiso", "quisimos", "quisisteis", "quisieron"]),
            ("venir", ["vine", "viniste", "vino", "vinimos", "vinisteis", "vinieron"]),
            ("salir", ["salí", "saliste", "salió", "salimos", "salisteis", "salieron"]),
            ("traer", ["traje", "trajiste", "trajo", "trajimos", "trajisteis", "trajeron"]),
            ("caer", ["caí", "caíste", "cayó", "caímos", "caísteis", "cayeron"]),
            ("conocer", ["conocí", "conociste", "conoció", "conocimos", "conocisteis", "conocieron"]),
        ])
    })
}

/// Present indicative form, for a declared verb. Applies the verb's
/// stem-change (declared stem-changers like `pensar`/`pedir` take it in
/// present indicative too) but ignores spelling-change markers, which
/// don't affect the indicative agreement checks the Validator performs
/// (a close, not exact, indicative form is enough to recognize "learner
/// answered in the wrong mood").
pub fn present_indicative(verb: &Verb, person: Person) -> String {
    if let Some(forms) = present_indicative_irregular().get(verb.infinitive) {
        return forms[person.index()].to_string();
    }
    format!("{}{}", present_indicative_stem(verb, person), indicative_present_ending(verb.class, person))
}

/// Preterite form, for a declared verb.
pub fn preterite(verb: &Verb, person: Person) -> String {
    if let Some(forms) = preterite_irregular().get(verb.infinitive) {
        return forms[person.index()].to_string();
    }
    format!("{}{}", preterite_indicative_stem(verb, person), indicative_preterite_ending(verb.class, person))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::verbs;

    #[test]
    fn regular_present_indicative() {
        let hablar = verbs::lookup("hablar").unwrap();
        assert_eq!(present_indicative(&hablar, Person::FirstSg), "hablo");
    }

    #[test]
    fn irregular_present_indicative() {
        let ser = verbs::lookup("ser").unwrap();
        assert_eq!(present_indicative(&ser, Person::FirstSg), "soy");
    }

    #[test]
    fn irregular_preterite() {
        let tener = verbs::lookup("tener").unwrap();
        assert_eq!(preterite(&tener, Person::ThirdSg), "tuvo");
    }

    #[test]
    fn declared_stem_changer_takes_the_change_in_present_indicative() {
        let pensar = verbs::lookup("pensar").unwrap();
        assert_eq!(present_indicative(&pensar, Person::FirstSg), "pienso");
        assert_eq!(present_indicative(&pensar, Person::FirstPl), "pensamos");
    }

    #[test]
    fn ir_stem_changer_reduces_only_in_third_person_preterite() {
        let pedir = verbs::lookup("pedir").unwrap();
        assert_eq!(preterite(&pedir, Person::ThirdSg), "pidió");
        assert_eq!(preterite(&pedir, Person::ThirdPl), "pidieron");
        assert_eq!(preterite(&pedir, Person::FirstSg), "pedí");
    }

    #[test]
    fn ar_stem_changer_has_no_preterite_stem_change() {
        let contar = verbs::lookup("contar").unwrap();
        assert_eq!(preterite(&contar, Person::ThirdSg), "contó");
    }
}
