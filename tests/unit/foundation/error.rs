use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        FlockError::resource("x")
            .to_string()
            .contains("resource error:")
    );
    assert!(FlockError::render("x").to_string().contains("render error:"));
    assert!(
        FlockError::validation("x")
            .to_string()
            .contains("validation error:")
    );
}

#[test]
fn sparse_names_step_and_agent() {
    let msg = FlockError::sparse(1, 3).to_string();
    assert!(msg.contains("step 1"));
    assert!(msg.contains("agent 3"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = FlockError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
