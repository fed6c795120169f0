//! Data-driven tests for the minimal cover reduction
//!
//! Each case lists its FDs in text form (`A,B-->C;C-->D`) so fixtures read
//! the way they would be typed on the command line.

use mincover::{
    compute_closure, decompose_rhs, find_minimal_cover, find_minimal_cover_steps, parse,
    remove_extraneous_fds, remove_extraneous_lhs_attributes, AttributeSet, DefaultMinimalCover,
    Error, FdSet, MinimalCover, ParseFormat,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn fds(text: &str) -> FdSet {
    parse(ParseFormat::Text, text).unwrap()
}

// ============================================================================
// Phase 1: single RHS attribute
// ============================================================================

#[rstest]
#[case("A-->B,J,K", "A-->B;A-->J;A-->K")]
#[case("A-->B;A-->B,C", "A-->B;A-->C")]
#[case("A-->B;A-->B,C;A,D-->B,C", "A-->B;A-->C;A,D-->B;A,D-->C")]
#[case("A-->B;C-->D", "A-->B;C-->D")]
fn test_decompose_rhs(#[case] input: &str, #[case] expected: &str) {
    let result = decompose_rhs(&fds(input));
    assert!(result.is_single_rhs());
    assert_eq!(result, fds(expected));
}

#[rstest]
#[case("A-->B,J,K")]
#[case("A-->B;A-->B,C")]
#[case("A-->B;A-->B,C;A,D-->B,C")]
fn test_multi_rhs_violates_precondition(#[case] input: &str) {
    let input = fds(input);
    assert!(matches!(
        remove_extraneous_fds(&input),
        Err(Error::PreconditionViolation(_))
    ));
    let a = AttributeSet::single("A").unwrap();
    assert!(matches!(
        compute_closure(&a, &input),
        Err(Error::PreconditionViolation(_))
    ));
}

// ============================================================================
// Phase 2: extraneous LHS attributes
// ============================================================================

#[rstest]
#[case::closure_of_c_covers_a(
    "A,B-->C;C-->A;B,C-->D;A,C,D-->B;A,C,D-->D;D-->E;D-->G;B,E-->C;C,G-->B;C,G-->D;C,E-->A;C,E-->G",
    "A,B-->C;C-->A;B,C-->D;C,D-->B;C,D-->D;D-->E;D-->G;B,E-->C;C,G-->B;C,G-->D;C,E-->A;C,E-->G"
)]
#[case::determinant_derives_partner(
    "A-->D;B,C-->D;B,C-->A;C-->B;E-->D;E-->A",
    "A-->D;C-->D;C-->A;C-->B;E-->D;E-->A"
)]
#[case::nothing_to_trim("A-->B;B-->C", "A-->B;B-->C")]
fn test_remove_extraneous_lhs_attributes(#[case] input: &str, #[case] expected: &str) {
    let result = remove_extraneous_lhs_attributes(&fds(input));
    assert_eq!(result, fds(expected));
}

// ============================================================================
// Phase 3: extraneous FDs
// ============================================================================

#[rstest]
#[case::transitive(
    "A-->D;C-->D;C-->A;C-->B;E-->D;E-->A",
    "A-->D;C-->A;C-->B;E-->A"
)]
#[case::composite(
    "A,B-->C;C-->A;B,C-->D;C,D-->B;C,D-->D;D-->E;D-->G;B,E-->C;C,G-->B;C,G-->D;C,E-->A;C,E-->G",
    "A,B-->C;C-->A;B,C-->D;D-->E;D-->G;B,E-->C;C,G-->B;C,E-->G"
)]
#[case::self_determining("A-->A", "")]
#[case::nothing_redundant("A-->B;B-->C", "A-->B;B-->C")]
fn test_remove_extraneous_fds(#[case] input: &str, #[case] expected: &str) {
    let result = remove_extraneous_fds(&fds(input)).unwrap();
    assert_eq!(result, fds(expected));
}

// ============================================================================
// Full pipeline
// ============================================================================

#[rstest]
#[case::reference("A-->D;B,C-->A,D;C-->B;E-->A;E-->D", "A-->D;C-->A;C-->B;E-->A")]
#[case::self_determining("a-->a", "")]
#[case::trivial_rhs("A,B-->A,C;C-->B", "A,B-->C;C-->B")]
#[case::chain_shortcut("A-->B;B-->C;A-->C", "A-->B;B-->C")]
#[case::duplicates("A-->B;A-->B;B,A-->B", "A-->B")]
#[case::empty("", "")]
fn test_find_minimal_cover(#[case] input: &str, #[case] expected: &str) {
    let cover = find_minimal_cover(&fds(input)).unwrap();
    assert_eq!(cover, fds(expected));
}

#[test]
fn test_reference_scenario_phase_by_phase() {
    let steps = find_minimal_cover_steps(&fds("A-->D;B,C-->A,D;C-->B;E-->A;E-->D")).unwrap();

    assert_eq!(
        steps.single_rhs,
        fds("A-->D;B,C-->A;B,C-->D;C-->B;E-->A;E-->D")
    );
    // C alone derives B, so B is extraneous in B,C
    assert_eq!(steps.reduced_lhs, fds("A-->D;C-->A;C-->D;C-->B;E-->A;E-->D"));
    // C-->D and E-->D follow through A-->D
    assert_eq!(steps.minimal, fds("A-->D;C-->A;C-->B;E-->A"));
}

#[test]
fn test_trait_and_free_function_agree() {
    let input = fds("A,B-->C,D;C-->A;D-->B;B-->D");
    assert_eq!(
        DefaultMinimalCover.find_minimal_cover(&input).unwrap(),
        find_minimal_cover(&input).unwrap()
    );
}

#[test]
fn test_input_is_not_modified() {
    let input = fds("A-->D;B,C-->A,D;C-->B;E-->A;E-->D");
    let before = input.clone();
    let _ = find_minimal_cover(&input).unwrap();
    assert_eq!(input.as_slice(), before.as_slice());
}
