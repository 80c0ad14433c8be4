use crate::test_utils::{Fixture, range};
use crate::{BlockId, DiagnosticKind, TypeKind};

#[test]
fn unresolved_forward_is_reported_by_name() {
    let mut f = Fixture::new();
    f.types.add_forward(f.block, "Tree");

    assert!(!f.types.assert_forward_resolved(&mut f.diag, range(), BlockId::MODULE));
    assert_eq!(f.diag.kinds(), vec![DiagnosticKind::UnresolvedForwardType]);
    insta::assert_snapshot!(
        f.diag.render(),
        @"error at 0..4: unresolved forward type: `Tree` is declared but never defined (hint: every type named before its definition must be defined in the same block)"
    );
}

#[test]
fn resolved_forward_passes() {
    let mut f = Fixture::new();
    let tree = f.types.add_forward(f.block, "Tree");
    let left = f.ptr(tree);
    let concrete = f.strukt(&[("left", left)]);
    f.types.resolve_forward(tree, concrete);

    assert!(f.types.assert_forward_resolved(&mut f.diag, range(), BlockId::MODULE));
    assert!(f.diag.is_empty());
}

#[test]
fn every_unresolved_forward_is_listed() {
    let mut f = Fixture::new();
    f.types.add_forward(f.block, "A");
    f.scalar(TypeKind::Int);
    f.types.add_forward(f.block, "B");

    assert!(!f.types.assert_forward_resolved(&mut f.diag, range(), BlockId::MODULE));
    assert_eq!(f.diag.len(), 2);
    let rendered = f.diag.render();
    assert!(rendered.contains("`A`"));
    assert!(rendered.contains("`B`"));
}

#[test]
fn scoped_to_inner_blocks() {
    let mut f = Fixture::new();
    f.types.add_forward(BlockId::MODULE, "Outer");
    f.types.add_forward(BlockId(2), "Inner");

    assert!(!f.types.assert_forward_resolved(&mut f.diag, range(), BlockId(1)));
    assert_eq!(f.diag.len(), 1);
    assert!(f.diag.render().contains("`Inner`"));
}
