use std::path::Path;

use fc_core::{Tolerances, nearly_equal};
use fc_project::{load, save};
use fc_thermo::{FixedChemPotPhase, ThermoError, ThermoPhase};

fn demo(name: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../demos")
        .join(name)
}

#[test]
fn to_document_round_trips_through_yaml() {
    let mut phase = FixedChemPotPhase::from_element("Na", -261_000.0).unwrap();
    phase.set_temperature(750.0).unwrap();
    phase.set_pressure(2.5e5);

    let path = std::env::temp_dir().join("fc_thermo_roundtrip_na.yaml");
    save(&path, &phase.to_document().unwrap()).unwrap();
    let loaded = FixedChemPotPhase::from_file(&path, Some("NaFixed")).unwrap();

    assert_eq!(loaded.snapshot(), phase.snapshot());
    assert_eq!(loaded.name(), "NaFixed");
}

#[test]
fn to_document_round_trips_through_json() {
    let phase = FixedChemPotPhase::from_element("Ca", -1.5e5).unwrap();

    let path = std::env::temp_dir().join("fc_thermo_roundtrip_ca.json");
    save(&path, &phase.to_document().unwrap()).unwrap();
    let doc = load(&path).unwrap();
    assert_eq!(doc.phases[0].thermo.as_ref().unwrap().model, "FixedChemPot");

    let loaded = FixedChemPotPhase::from_file(&path, None).unwrap();
    assert_eq!(loaded.snapshot(), phase.snapshot());
}

#[test]
fn demo_sodium_document() {
    let phase = FixedChemPotPhase::from_file(&demo("na_fixed.yaml"), None).unwrap();
    assert_eq!(phase.name(), "NaFixed");
    assert!(nearly_equal(
        phase.chemical_potential(),
        -500_000.0,
        Tolerances::default()
    ));
    assert!(nearly_equal(phase.pressure(), 101_325.0, Tolerances::default()));
    assert!(nearly_equal(phase.base().ref_pressure(), 1e5, Tolerances::default()));
}

#[test]
fn demo_quartz_document() {
    let phase = FixedChemPotPhase::from_file(&demo("quartz_stoich.yaml"), Some("quartz")).unwrap();
    assert_eq!(phase.name(), "alpha quartz");
    assert!((phase.molecular_weight() - 60.083).abs() < 1e-2);
    let expected = -910_700.0 - 298.15 * 41.46;
    assert!((phase.chemical_potential() - expected).abs() < 1e-6);
}

#[test]
fn demo_calcium_document() {
    let phase = FixedChemPotPhase::from_file(&demo("ca_fixed.json"), None).unwrap();
    assert!((phase.chemical_potential() + 12.0 * 4_184.0).abs() < 1e-6);
}

#[test]
fn missing_phase_id_is_reported() {
    let err = FixedChemPotPhase::from_file(&demo("na_fixed.yaml"), Some("KFixed")).unwrap_err();
    assert!(matches!(err, ThermoError::Config { .. }));
    assert!(err.to_string().contains("KFixed"));
}

#[test]
fn missing_file_is_a_document_error() {
    let err = FixedChemPotPhase::from_file(&demo("does_not_exist.yaml"), None).unwrap_err();
    assert!(matches!(err, ThermoError::Project(_)));
}
