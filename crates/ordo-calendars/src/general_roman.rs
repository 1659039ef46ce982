//! The General Roman Calendar — the universal calendar every particular
//! calendar inherits from.
//!
//! The temporale covers the moveable cycle (everything anchored to Easter or
//! to the fixed Christmas-cycle anchors); the sanctorale covers the
//! fixed-date celebrations of the year.

use crate::definition::{Color, DateSpec, ObservanceDef, Title};
use crate::precedence::Precedence::*;
use crate::registry::{CalendarDef, GENERAL_ROMAN};
use ordo_time::Month::*;

fn fixed(month: ordo_time::Month, day: u8) -> DateSpec {
    DateSpec::fixed(month, day)
}

fn anchored(anchor: &str) -> DateSpec {
    DateSpec::moveable(anchor, 0)
}

/// Build the General Roman Calendar.
pub fn general_roman() -> CalendarDef {
    let mut defs = temporale();
    defs.extend(sanctorale());
    CalendarDef::new(GENERAL_ROMAN, None, defs)
}

/// The moveable cycle.
fn temporale() -> Vec<ObservanceDef> {
    use ObservanceDef as O;
    vec![
        O::of_time("nativity_of_the_lord", ProperOfTimeSolemnity2, anchored("nativity_of_the_lord")),
        O::of_time("holy_family_of_jesus_mary_and_joseph", GeneralLordFeast5, anchored("holy_family_of_jesus_mary_and_joseph")),
        O::of_time("mary_mother_of_god", GeneralSolemnity3, anchored("mary_mother_of_god")),
        O::of_time("epiphany_of_the_lord", ProperOfTimeSolemnity2, anchored("epiphany_of_the_lord")),
        O::of_time("baptism_of_the_lord", GeneralLordFeast5, anchored("baptism_of_the_lord")),
        O::of_time("ash_wednesday", ProperOfTimeSolemnity2, anchored("ash_wednesday")).color(Color::Purple),
        O::of_time("palm_sunday_of_the_passion_of_the_lord", ProperOfTimeSolemnity2, anchored("palm_sunday_of_the_passion_of_the_lord")).color(Color::Red),
        O::of_time("thursday_of_the_lords_supper", Triduum1, anchored("thursday_of_the_lords_supper")),
        O::of_time("friday_of_the_passion_of_the_lord", Triduum1, anchored("friday_of_the_passion_of_the_lord")).color(Color::Red),
        O::of_time("holy_saturday", Triduum1, anchored("holy_saturday")).color(Color::Purple),
        O::of_time("easter_sunday", Triduum1, anchored("easter_sunday")),
        O::of_time("divine_mercy_sunday", ProperOfTimeSolemnity2, anchored("divine_mercy_sunday")),
        O::of_time("ascension_of_the_lord", ProperOfTimeSolemnity2, anchored("ascension_of_the_lord")),
        O::of_time("pentecost_sunday", ProperOfTimeSolemnity2, anchored("pentecost_sunday")).color(Color::Red),
        O::of_time("most_holy_trinity", GeneralSolemnity3, anchored("most_holy_trinity")),
        O::of_time("most_holy_body_and_blood_of_christ", GeneralSolemnity3, anchored("most_holy_body_and_blood_of_christ")),
        O::of_time("most_sacred_heart_of_jesus", GeneralSolemnity3, anchored("most_sacred_heart_of_jesus")),
        O::of_time("immaculate_heart_of_mary", GeneralMemorial10, anchored("immaculate_heart_of_mary")),
        O::of_time("our_lord_jesus_christ_king_of_the_universe", GeneralSolemnity3, anchored("our_lord_jesus_christ_king_of_the_universe")),
    ]
}

/// The fixed-date cycle.
fn sanctorale() -> Vec<ObservanceDef> {
    use ObservanceDef as O;
    use Title::*;
    vec![
        // ── January ──────────────────────────────────────────────────────────
        O::of_saints("basil_the_great_and_gregory_nazianzen_bishops", GeneralMemorial10, fixed(January, 2))
            .titles(&[Bishop, DoctorOfTheChurch]),
        O::of_saints("most_holy_name_of_jesus", OptionalMemorial12, fixed(January, 3)).martyrology(&[]),
        O::of_saints("raymond_of_penyafort_priest", OptionalMemorial12, fixed(January, 7)).titles(&[Priest]),
        O::of_saints("hilary_of_poitiers_bishop", OptionalMemorial12, fixed(January, 13)).titles(&[Bishop, DoctorOfTheChurch]),
        O::of_saints("anthony_of_egypt_abbot", GeneralMemorial10, fixed(January, 17)).titles(&[Abbot]),
        O::of_saints("fabian_i_pope", OptionalMemorial12, fixed(January, 20)).color(Color::Red).titles(&[Pope, Martyr]),
        O::of_saints("sebastian_of_milan_martyr", OptionalMemorial12, fixed(January, 20)).color(Color::Red).titles(&[Martyr]),
        O::of_saints("agnes_of_rome_virgin", GeneralMemorial10, fixed(January, 21)).color(Color::Red).titles(&[Virgin, Martyr]),
        O::of_saints("francis_de_sales_bishop", GeneralMemorial10, fixed(January, 24)).titles(&[Bishop, DoctorOfTheChurch]),
        O::of_saints("conversion_of_saint_paul_the_apostle", GeneralFeast7, fixed(January, 25)).martyrology(&[]),
        O::of_saints("timothy_and_titus_bishops", GeneralMemorial10, fixed(January, 26)).titles(&[Bishop]),
        O::of_saints("angela_merici_virgin", OptionalMemorial12, fixed(January, 27)).titles(&[Virgin]),
        O::of_saints("thomas_aquinas_priest", GeneralMemorial10, fixed(January, 28)).titles(&[Priest, DoctorOfTheChurch]),
        O::of_saints("john_bosco_priest", GeneralMemorial10, fixed(January, 31)).titles(&[Priest]),
        // ── February ─────────────────────────────────────────────────────────
        O::of_saints("presentation_of_the_lord", GeneralLordFeast5, fixed(February, 2)).martyrology(&[]),
        O::of_saints("blaise_of_sebaste_bishop", OptionalMemorial12, fixed(February, 3)).color(Color::Red).titles(&[Bishop, Martyr]),
        O::of_saints("agatha_of_sicily_virgin", GeneralMemorial10, fixed(February, 5)).color(Color::Red).titles(&[Virgin, Martyr]),
        O::of_saints("paul_miki_and_companions_martyrs", GeneralMemorial10, fixed(February, 6)).color(Color::Red).titles(&[Martyr]),
        O::of_saints("scholastica_of_nursia_virgin", GeneralMemorial10, fixed(February, 10)).titles(&[Virgin]),
        O::of_saints("our_lady_of_lourdes", OptionalMemorial12, fixed(February, 11)).martyrology(&[]),
        O::of_saints("cyril_the_monk_and_methodius_the_bishop", GeneralMemorial10, fixed(February, 14)).titles(&[Bishop, Missionary]),
        O::of_saints("chair_of_saint_peter_the_apostle", GeneralFeast7, fixed(February, 22)).martyrology(&[]),
        O::of_saints("polycarp_of_smyrna_bishop", GeneralMemorial10, fixed(February, 23)).color(Color::Red).titles(&[Bishop, Martyr]),
        // ── March ────────────────────────────────────────────────────────────
        O::of_saints("perpetua_and_felicity_martyrs", GeneralMemorial10, fixed(March, 7)).color(Color::Red).titles(&[Martyr]),
        O::of_saints("patrick_of_ireland_bishop", OptionalMemorial12, fixed(March, 17)).titles(&[Bishop, Missionary]),
        O::of_saints("joseph_spouse_of_mary", GeneralSolemnity3, fixed(March, 19)).martyrology(&[]),
        O::of_saints("annunciation_of_the_lord", GeneralSolemnity3, fixed(March, 25)).martyrology(&[]),
        // ── April ────────────────────────────────────────────────────────────
        O::of_saints("francis_of_paola_hermit", OptionalMemorial12, fixed(April, 2)),
        O::of_saints("stanislaus_of_szczepanow_bishop", GeneralMemorial10, fixed(April, 11)).color(Color::Red).titles(&[Bishop, Martyr]),
        O::of_saints("mark_evangelist", GeneralFeast7, fixed(April, 25)).color(Color::Red).titles(&[Evangelist, Martyr]),
        O::of_saints("catherine_of_siena_virgin", GeneralMemorial10, fixed(April, 29)).titles(&[Virgin, DoctorOfTheChurch]),
        // ── May ──────────────────────────────────────────────────────────────
        O::of_saints("joseph_the_worker", OptionalMemorial12, fixed(May, 1)).martyrology(&[]),
        O::of_saints("athanasius_of_alexandria_bishop", GeneralMemorial10, fixed(May, 2)).titles(&[Bishop, DoctorOfTheChurch]),
        O::of_saints("philip_and_james_apostles", GeneralFeast7, fixed(May, 3)).color(Color::Red).titles(&[Apostle]),
        O::of_saints("matthias_apostle", GeneralFeast7, fixed(May, 14)).color(Color::Red).titles(&[Apostle]),
        O::of_saints("john_i_pope", OptionalMemorial12, fixed(May, 18)).color(Color::Red).titles(&[Pope, Martyr]),
        O::of_saints("philip_neri_priest", GeneralMemorial10, fixed(May, 26)).titles(&[Priest]),
        O::of_saints("visitation_of_mary", GeneralFeast7, fixed(May, 31)).martyrology(&[]),
        // ── June ─────────────────────────────────────────────────────────────
        O::of_saints("justin_martyr", GeneralMemorial10, fixed(June, 1)).color(Color::Red).titles(&[Martyr]),
        O::of_saints("charles_lwanga_and_companions_martyrs", GeneralMemorial10, fixed(June, 3)).color(Color::Red).titles(&[Martyr]),
        O::of_saints("boniface_of_mainz_bishop", GeneralMemorial10, fixed(June, 5)).color(Color::Red).titles(&[Bishop, Martyr, Missionary]),
        O::of_saints("barnabas_apostle", GeneralMemorial10, fixed(June, 11)).color(Color::Red).titles(&[Apostle, Martyr]),
        O::of_saints("anthony_of_padua_priest", GeneralMemorial10, fixed(June, 13)).titles(&[Priest, DoctorOfTheChurch]),
        O::of_saints("aloysius_gonzaga_religious", GeneralMemorial10, fixed(June, 21)).titles(&[Religious]),
        O::of_saints("nativity_of_john_the_baptist", GeneralSolemnity3, fixed(June, 24)).martyrology(&[]),
        O::of_saints("irenaeus_of_lyon_bishop", GeneralMemorial10, fixed(June, 28)).color(Color::Red).titles(&[Bishop, Martyr, DoctorOfTheChurch]),
        O::of_saints("peter_and_paul_apostles", GeneralSolemnity3, fixed(June, 29)).color(Color::Red).titles(&[Apostle, Martyr]),
        // ── July ─────────────────────────────────────────────────────────────
        O::of_saints("thomas_apostle", GeneralFeast7, fixed(July, 3)).color(Color::Red).titles(&[Apostle]),
        O::of_saints("benedict_of_nursia_abbot", GeneralMemorial10, fixed(July, 11)).titles(&[Abbot]),
        O::of_saints("bonaventure_of_bagnoregio_bishop", GeneralMemorial10, fixed(July, 15)).titles(&[Bishop, DoctorOfTheChurch]),
        O::of_saints("our_lady_of_mount_carmel", OptionalMemorial12, fixed(July, 16)).martyrology(&[]),
        O::of_saints("mary_magdalene", GeneralFeast7, fixed(July, 22)),
        O::of_saints("bridget_of_sweden_religious", OptionalMemorial12, fixed(July, 23)).titles(&[Religious]),
        O::of_saints("james_apostle", GeneralFeast7, fixed(July, 25)).color(Color::Red).titles(&[Apostle, Martyr]),
        O::of_saints("joachim_and_anne_parents_of_mary", GeneralMemorial10, fixed(July, 26)),
        O::of_saints("martha_mary_and_lazarus", GeneralMemorial10, fixed(July, 29)),
        O::of_saints("ignatius_of_loyola_priest", GeneralMemorial10, fixed(July, 31)).titles(&[Priest]),
        // ── August ───────────────────────────────────────────────────────────
        O::of_saints("alphonsus_mary_liguori_bishop", GeneralMemorial10, fixed(August, 1)).titles(&[Bishop, DoctorOfTheChurch]),
        O::of_saints("john_mary_vianney_priest", GeneralMemorial10, fixed(August, 4)).titles(&[Priest]),
        O::of_saints("transfiguration_of_the_lord", GeneralLordFeast5, fixed(August, 6)).martyrology(&[]),
        O::of_saints("dominic_de_guzman_priest", GeneralMemorial10, fixed(August, 8)).titles(&[Priest]),
        O::of_saints("teresa_benedicta_of_the_cross_stein_virgin", OptionalMemorial12, fixed(August, 9)).color(Color::Red).titles(&[Virgin, Martyr]),
        O::of_saints("lawrence_of_rome_deacon", GeneralFeast7, fixed(August, 10)).color(Color::Red).titles(&[Deacon, Martyr]),
        O::of_saints("clare_of_assisi_virgin", GeneralMemorial10, fixed(August, 11)).titles(&[Virgin]),
        O::of_saints("assumption_of_mary", GeneralSolemnity3, fixed(August, 15)).martyrology(&[]),
        O::of_saints("bernard_of_clairvaux_abbot", GeneralMemorial10, fixed(August, 20)).titles(&[Abbot, DoctorOfTheChurch]),
        O::of_saints("pius_x_pope", GeneralMemorial10, fixed(August, 21)).titles(&[Pope]),
        O::of_saints("queenship_of_mary", GeneralMemorial10, fixed(August, 22)).martyrology(&[]),
        O::of_saints("bartholomew_apostle", GeneralFeast7, fixed(August, 24)).color(Color::Red).titles(&[Apostle]),
        O::of_saints("monica_of_hippo", GeneralMemorial10, fixed(August, 27)),
        O::of_saints("augustine_of_hippo_bishop", GeneralMemorial10, fixed(August, 28)).titles(&[Bishop, DoctorOfTheChurch]),
        O::of_saints("passion_of_saint_john_the_baptist", GeneralMemorial10, fixed(August, 29)).color(Color::Red).martyrology(&[]),
        // ── September ────────────────────────────────────────────────────────
        O::of_saints("gregory_the_great_pope", GeneralMemorial10, fixed(September, 3)).titles(&[Pope, DoctorOfTheChurch]),
        O::of_saints("nativity_of_mary", GeneralFeast7, fixed(September, 8)).martyrology(&[]),
        O::of_saints("john_chrysostom_bishop", GeneralMemorial10, fixed(September, 13)).titles(&[Bishop, DoctorOfTheChurch]),
        O::of_saints("exaltation_of_the_holy_cross", GeneralLordFeast5, fixed(September, 14)).color(Color::Red).martyrology(&[]),
        O::of_saints("our_lady_of_sorrows", GeneralMemorial10, fixed(September, 15)).martyrology(&[]),
        O::of_saints("cornelius_pope_and_cyprian_bishop_martyrs", GeneralMemorial10, fixed(September, 16)).color(Color::Red).titles(&[Martyr]),
        O::of_saints("matthew_apostle", GeneralFeast7, fixed(September, 21)).color(Color::Red).titles(&[Apostle, Evangelist, Martyr]),
        O::of_saints("pius_of_pietrelcina_priest", GeneralMemorial10, fixed(September, 23)).titles(&[Priest]),
        O::of_saints("vincent_de_paul_priest", GeneralMemorial10, fixed(September, 27)).titles(&[Priest]),
        O::of_saints("michael_gabriel_and_raphael_archangels", GeneralFeast7, fixed(September, 29)).martyrology(&[]),
        O::of_saints("jerome_of_stridon_priest", GeneralMemorial10, fixed(September, 30)).titles(&[Priest, DoctorOfTheChurch]),
        // ── October ──────────────────────────────────────────────────────────
        O::of_saints("therese_of_the_child_jesus_virgin", GeneralMemorial10, fixed(October, 1)).titles(&[Virgin, DoctorOfTheChurch]),
        O::of_saints("holy_guardian_angels", GeneralMemorial10, fixed(October, 2)).martyrology(&[]),
        O::of_saints("francis_of_assisi", GeneralMemorial10, fixed(October, 4)),
        O::of_saints("our_lady_of_the_rosary", GeneralMemorial10, fixed(October, 7)).martyrology(&[]),
        O::of_saints("john_xxiii_pope", OptionalMemorial12, fixed(October, 11)).titles(&[Pope]),
        O::of_saints("teresa_of_jesus_of_avila_virgin", GeneralMemorial10, fixed(October, 15)).titles(&[Virgin, DoctorOfTheChurch]),
        O::of_saints("ignatius_of_antioch_bishop", GeneralMemorial10, fixed(October, 17)).color(Color::Red).titles(&[Bishop, Martyr]),
        O::of_saints("luke_evangelist", GeneralFeast7, fixed(October, 18)).color(Color::Red).titles(&[Evangelist]),
        O::of_saints("john_paul_ii_pope", OptionalMemorial12, fixed(October, 22)).titles(&[Pope]),
        O::of_saints("simon_and_jude_apostles", GeneralFeast7, fixed(October, 28)).color(Color::Red).titles(&[Apostle]),
        // ── November ─────────────────────────────────────────────────────────
        O::of_saints("all_saints", GeneralSolemnity3, fixed(November, 1)).martyrology(&[]),
        O::of_saints("commemoration_of_all_the_faithful_departed", GeneralSolemnity3, fixed(November, 2)).color(Color::Purple).martyrology(&[]),
        O::of_saints("martin_de_porres_religious", OptionalMemorial12, fixed(November, 3)).titles(&[Religious]),
        O::of_saints("charles_borromeo_bishop", GeneralMemorial10, fixed(November, 4)).titles(&[Bishop]),
        O::of_saints("dedication_of_the_lateran_basilica", GeneralFeast7, fixed(November, 9)).martyrology(&[]),
        O::of_saints("leo_the_great_pope", GeneralMemorial10, fixed(November, 10)).titles(&[Pope, DoctorOfTheChurch]),
        O::of_saints("martin_of_tours_bishop", GeneralMemorial10, fixed(November, 11)).titles(&[Bishop]),
        O::of_saints("josaphat_kuntsevych_bishop", GeneralMemorial10, fixed(November, 12)).color(Color::Red).titles(&[Bishop, Martyr]),
        O::of_saints("elizabeth_of_hungary_religious", GeneralMemorial10, fixed(November, 17)).titles(&[Religious]),
        O::of_saints("presentation_of_mary", GeneralMemorial10, fixed(November, 21)).martyrology(&[]),
        O::of_saints("cecilia_of_rome_virgin", GeneralMemorial10, fixed(November, 22)).color(Color::Red).titles(&[Virgin, Martyr]),
        O::of_saints("andrew_apostle", GeneralFeast7, fixed(November, 30)).color(Color::Red).titles(&[Apostle]),
        // ── December ─────────────────────────────────────────────────────────
        O::of_saints("francis_xavier_priest", GeneralMemorial10, fixed(December, 3)).titles(&[Priest, Missionary]),
        O::of_saints("ambrose_of_milan_bishop", GeneralMemorial10, fixed(December, 7)).titles(&[Bishop, DoctorOfTheChurch]),
        O::of_saints("immaculate_conception_of_mary", GeneralSolemnity3, fixed(December, 8)).martyrology(&[]),
        O::of_saints("our_lady_of_guadalupe", OptionalMemorial12, fixed(December, 12)).martyrology(&[]),
        O::of_saints("lucy_of_syracuse_virgin", GeneralMemorial10, fixed(December, 13)).color(Color::Red).titles(&[Virgin, Martyr]),
        O::of_saints("john_of_the_cross_priest", GeneralMemorial10, fixed(December, 14)).titles(&[Priest, DoctorOfTheChurch]),
        O::of_saints("stephen_the_first_martyr", GeneralFeast7, fixed(December, 26)).color(Color::Red).titles(&[Deacon, Martyr]),
        O::of_saints("john_apostle_and_evangelist", GeneralFeast7, fixed(December, 27)).titles(&[Apostle, Evangelist]),
        O::of_saints("holy_innocents_martyrs", GeneralFeast7, fixed(December, 28)).color(Color::Red).titles(&[Martyr]),
        O::of_saints("thomas_becket_bishop", OptionalMemorial12, fixed(December, 29)).color(Color::Red).titles(&[Bishop, Martyr]),
        O::of_saints("sylvester_i_pope", OptionalMemorial12, fixed(December, 31)).titles(&[Pope]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::ProperCycle;
    use std::collections::BTreeSet;

    #[test]
    fn keys_are_unique() {
        let cal = general_roman();
        let mut seen = BTreeSet::new();
        for def in cal.definitions() {
            assert!(seen.insert(def.key.clone()), "duplicate key {}", def.key);
        }
    }

    #[test]
    fn origin_is_stamped() {
        let cal = general_roman();
        assert!(cal.definitions().iter().all(|d| d.origin == GENERAL_ROMAN));
    }

    #[test]
    fn temporale_entries_carry_no_martyrology() {
        let cal = general_roman();
        for def in cal.definitions() {
            if def.proper_cycle == ProperCycle::ProperOfTime {
                assert!(def.martyrology.is_empty(), "{}", def.key);
            }
        }
    }

    #[test]
    fn every_anchor_reference_resolves() {
        let cal = general_roman();
        let moveable = ordo_time::MoveableDates::for_year(2024).unwrap();
        for def in cal.definitions() {
            assert!(
                def.materialize(&moveable).unwrap().is_some(),
                "{} failed to materialize",
                def.key
            );
        }
    }
}
