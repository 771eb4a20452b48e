mod harness;

mod journal_traversal;
mod registry_rebuild;

use menushell::VERSION;

#[test]
fn scenarios_binary_smoke_runs() {
    assert!(!VERSION.is_empty());
}
