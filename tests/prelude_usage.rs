use renamer::prelude::*;

#[test]
fn prelude_exports_expected_items() {
    let rule = compile("old:new").unwrap();
    let mut cfg = Config::new(rule, ["x"]);
    let _ = LogLevel::Debug;
    let _err = Error::NoTargets;
    // Use type inference to ensure signatures are visible.
    let _resolve_fn: fn(&Config, &[std::path::PathBuf]) -> RnResult<MoveSet> = resolve_all;
    let _validate_fn: fn(&Config, &MoveSet) -> RnResult<()> = validate;
    let _perform_fn: fn(&Config, &MoveSet, &MoveFormatter) -> RnResult<usize> = perform;
    let _ = default_config_path();
    let _ = Move::new("a", "b");
    cfg.targets.clear();
    assert!(matches!(validate_and_normalize(&mut cfg), Err(Error::NoTargets)));
}
