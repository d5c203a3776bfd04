#![allow(unused_crate_dependencies)]

use graphql_schema_comparator::{diff, Change, Schema};
use std::{fs, path::Path, sync::OnceLock};

fn update_expect() -> bool {
    static UPDATE_EXPECT: OnceLock<bool> = OnceLock::new();
    *UPDATE_EXPECT.get_or_init(|| std::env::var("UPDATE_EXPECT").is_ok())
}

fn render(changes: &[Change<'_>]) -> String {
    changes
        .iter()
        .map(|change| format!("{} {:?} {change}\n", change.criticality(), change.path()))
        .collect()
}

fn run_test(case: &Path) -> datatest_stable::Result<()> {
    let schemas = fs::read_to_string(case)?;
    let mut schemas = schemas.split("# --- #\n");
    let old = schemas.next().ok_or("Can't find first schema in test case.")?;
    let new = schemas.next().ok_or("Can't find second schema in test case.")?;

    let old = Schema::from_sdl(old)?;
    let new = Schema::from_sdl(new)?;

    let forward_diff = diff(&old, &new);
    let backward_diff = diff(&new, &old);

    let diff = format!(
        "# old → new\n{}\n# new → old\n{}",
        render(&forward_diff),
        render(&backward_diff)
    );

    let snapshot_file_path = case.with_extension("snapshot.txt");

    if update_expect() {
        fs::write(&snapshot_file_path, &diff)?;
        return Ok(());
    }

    let snapshot = fs::read_to_string(&snapshot_file_path).unwrap_or_default();

    if snapshot != diff {
        return Err(format!(
            "{}\n\n\n=== Hint: run the tests again with UPDATE_EXPECT=1 to update the snapshot. ===",
            similar::udiff::unified_diff(
                similar::Algorithm::default(),
                &snapshot,
                &diff,
                5,
                Some(("Snapshot", "Actual"))
            )
        )
        .into());
    }

    Ok(())
}

datatest_stable::harness! {
    run_test, "./tests/diff", r"^.*\.graphql$",
}
