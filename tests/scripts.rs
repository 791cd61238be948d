use std::fs;

use sapphire::{Scope, run};
use walkdir::WalkDir;

#[test]
fn scripts_run_cleanly() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "sfr"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        let mut scope = Scope::with_builtins();
        if let Err(e) = run(&source, &mut scope) {
            panic!("Script {path:?} failed:\n{source}\nError: {e}");
        }
        assert!(scope.warnings().is_empty(),
                "Script {path:?} raised warnings: {:?}",
                scope.warnings());
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}
