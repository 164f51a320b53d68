use ent_project::{
    CaseDef, ProjectError, load_case, load_json, load_yaml, run_case, save_json, save_yaml,
};
use std::path::PathBuf;

fn temp_path(file_name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("ent-project-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir.join(file_name)
}

#[test]
fn yaml_round_trip() {
    let path = temp_path("reference.yaml");
    let case = CaseDef::reference();
    save_yaml(&path, &case).unwrap();
    let loaded = load_yaml(&path).unwrap();
    assert_eq!(loaded, case);
}

#[test]
fn json_round_trip() {
    let path = temp_path("reference.json");
    let case = CaseDef::reference();
    save_json(&path, &case).unwrap();
    let loaded = load_case(&path).unwrap();
    assert_eq!(loaded, load_json(&path).unwrap());
    assert_eq!(loaded, case);
}

#[test]
fn unknown_extension_is_rejected() {
    let err = load_case(&temp_path("case.toml")).unwrap_err();
    assert!(matches!(err, ProjectError::UnsupportedFormat(ext) if ext == "toml"));
}

#[test]
fn invalid_case_is_not_saved() {
    let path = temp_path("invalid.yaml");
    let mut case = CaseDef::reference();
    case.fluids.gas_density = 0.0;
    assert!(matches!(
        save_yaml(&path, &case),
        Err(ProjectError::Validation(_))
    ));
}

#[test]
fn reference_report() {
    let report = run_case(&CaseDef::reference()).unwrap();
    assert_eq!(report.name.as_deref(), Some("reference"));
    assert!(report.converged);
    assert_eq!(report.regime, "intermediate");
    assert_eq!(report.regime_exponent, 0.6);
    assert!(report.warnings.is_empty());
    assert!((report.entrainment_fraction - 0.069_207_894).abs() < 1e-6);
}

#[test]
fn non_converged_report_carries_warning() {
    let mut case = CaseDef::reference();
    case.solver = Some(ent_project::SolverDef {
        max_iterations: Some(1),
        ..Default::default()
    });
    let report = run_case(&case).unwrap();
    assert!(!report.converged);
    assert_eq!(report.iterations, 1);
    assert_eq!(report.warnings.len(), 1);
}

#[test]
fn loading_an_invalid_case_fails_validation() {
    let path = temp_path("zero_flow.yaml");
    let mut case = CaseDef::reference();
    case.flow.liquid_flow_rate = 0.0;
    std::fs::write(&path, serde_yaml::to_string(&case).unwrap()).unwrap();

    assert!(matches!(
        load_case(&path),
        Err(ProjectError::Validation(_))
    ));
}
