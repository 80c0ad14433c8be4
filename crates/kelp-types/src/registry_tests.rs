use crate::test_utils::Fixture;
use crate::{BaseRef, BlockId, Payload, TypeKind, TypeRegistry};

#[test]
fn add_tags_block_and_payload() {
    let mut types = TypeRegistry::new();
    let int = types.add(BlockId::MODULE, TypeKind::Int);
    let point = types.add(BlockId(1), TypeKind::Struct);
    let callback = types.add(BlockId(1), TypeKind::Fn);

    assert_eq!(types.len(), 3);
    assert_eq!(types.ty(int).block(), BlockId::MODULE);
    assert_eq!(types.ty(point).block(), BlockId(1));
    assert!(matches!(types.ty(int).payload(), Payload::Scalar));
    assert!(matches!(types.ty(point).payload(), Payload::Members(_)));
    assert!(matches!(types.ty(callback).payload(), Payload::Signature(_)));
}

#[test]
fn pointers_are_not_deduplicated() {
    let mut f = Fixture::new();
    let int = f.scalar(TypeKind::Int);
    let a = f.ptr(int);
    let b = f.ptr(int);

    assert_ne!(a, b);
    assert_eq!(f.types.ty(a).base(), Some(BaseRef::Owning(int)));
    assert!(f.types.equivalent(a, b));
}

#[test]
fn weak_pointer_base() {
    let mut f = Fixture::new();
    let node = f.scalar(TypeKind::Struct);
    let back = f.weak_ptr(node);

    assert_eq!(f.types.ty(back).base(), Some(BaseRef::Weak(node)));
    assert!(f.types.ty(back).is_weak());
    assert_eq!(f.types.base(back), Some(node));
}

#[test]
fn array_records_length() {
    let mut f = Fixture::new();
    let int = f.scalar(TypeKind::Int32);
    let arr = f.array(int, 5);

    assert_eq!(f.types.kind(arr), TypeKind::Array);
    assert_eq!(f.types.ty(arr).num_items(), 5);
}

#[test]
fn free_from_block_truncates_nested_blocks() {
    let mut types = TypeRegistry::new();
    let outer = types.add(BlockId::MODULE, TypeKind::Int);
    let inner = types.add(BlockId(1), TypeKind::Real);
    let innermost = types.add(BlockId(2), TypeKind::Bool);

    types.free_from_block(BlockId(1));

    assert_eq!(types.len(), 1);
    assert!(types.contains(outer));
    assert!(!types.contains(inner));
    assert!(!types.contains(innermost));
}

#[test]
fn stale_handle_does_not_alias_new_node() {
    let mut types = TypeRegistry::new();
    types.add(BlockId::MODULE, TypeKind::Int);
    let released = types.add(BlockId(1), TypeKind::Real);
    types.free_from_block(BlockId(1));

    let fresh = types.add(BlockId(1), TypeKind::Bool);

    assert_eq!(fresh.index(), released.index());
    assert!(types.get(released).is_none());
    assert_eq!(types.kind(fresh), TypeKind::Bool);
}

#[test]
fn free_all_releases_everything() {
    let mut types = TypeRegistry::new();
    let int = types.add(BlockId::MODULE, TypeKind::Int);
    types.add(BlockId(3), TypeKind::Int);

    types.free_all();

    assert!(types.is_empty());
    assert!(!types.contains(int));
}

#[test]
fn free_from_block_without_matching_nodes_keeps_handles() {
    let mut types = TypeRegistry::new();
    let int = types.add(BlockId::MODULE, TypeKind::Int);

    types.free_from_block(BlockId(4));

    assert!(types.contains(int));
}

#[test]
#[should_panic(expected = "is not live")]
fn stale_handle_panics_on_access() {
    let mut types = TypeRegistry::new();
    let int = types.add(BlockId(1), TypeKind::Int);
    types.free_all();
    types.kind(int);
}

#[test]
fn deep_copy_is_detached() {
    let mut f = Fixture::new();
    let int = f.scalar(TypeKind::Int);
    let point = f.strukt(&[("x", int), ("y", int)]);

    let copy = f.types.deep_copy(point);
    let before = f.types.len();

    assert_eq!(copy.kind(), TypeKind::Struct);
    assert_eq!(copy.fields().len(), 2);
    assert_eq!(copy.fields()[1].name(), "y");
    assert_eq!(f.types.len(), before);
}

#[test]
fn resolve_forward_rewrites_in_place() {
    let mut f = Fixture::new();
    let node = f.types.add_forward(f.block, "Node");
    let next = f.ptr(node);
    let int = f.scalar(TypeKind::Int);
    let concrete = f.strukt(&[("value", int), ("next", next)]);

    f.types.resolve_forward(node, concrete);

    let ty = f.types.ty(node);
    assert_eq!(ty.kind(), TypeKind::Struct);
    assert_eq!(ty.name(), Some("Node"));
    assert_eq!(ty.fields().len(), 2);
    assert_eq!(f.types.kind(f.types.base(next).unwrap()), TypeKind::Struct);
}

#[test]
#[should_panic(expected = "is not a forward type")]
fn resolve_forward_rejects_concrete_target() {
    let mut f = Fixture::new();
    let int = f.scalar(TypeKind::Int);
    let real = f.scalar(TypeKind::Real);
    f.types.resolve_forward(int, real);
}

#[test]
fn iter_in_creation_order() {
    let mut f = Fixture::new();
    f.scalar(TypeKind::Int);
    f.scalar(TypeKind::Bool);
    f.scalar(TypeKind::Str);

    let kinds: Vec<_> = f.types.iter().map(|(_, ty)| ty.kind()).collect();
    assert_eq!(kinds, vec![TypeKind::Int, TypeKind::Bool, TypeKind::Str]);
}

#[test]
fn mark_method_sets_flag() {
    let mut f = Fixture::new();
    let int = f.scalar(TypeKind::Int);
    let recv = f.ptr(int);
    let m = f.method(recv, &[], &[]);

    let sig = f.types.ty(m).signature().unwrap();
    assert!(sig.is_method());
    assert_eq!(sig.params()[0].name(), "self");
}

#[test]
#[should_panic(expected = "exceeds the u32 handle range")]
fn arena_position_is_bounded() {
    crate::invariants::ensure_index(usize::MAX);
}

#[test]
fn teardown_forgets_released_resolutions() {
    let mut types = TypeRegistry::new();
    let int = types.add(BlockId::MODULE, TypeKind::Int);
    let outer = types.add(BlockId::MODULE, TypeKind::Struct);
    let fwd = types.add_forward(BlockId(1), "Inner");
    let inner = types.add(BlockId(1), TypeKind::Struct);
    types.resolve_forward(fwd, inner);

    types.free_from_block(BlockId(1));

    assert_eq!(types.resolution_group(outer), vec![outer]);
    assert!(types.contains(int));
}
