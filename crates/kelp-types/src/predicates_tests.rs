use crate::test_utils::Fixture;
use crate::{Const, TypeKind};

#[test]
fn garbage_collected_by_kind() {
    let mut f = Fixture::new();
    let int = f.scalar(TypeKind::Int);
    let flag = f.scalar(TypeKind::Bool);
    let ptr = f.ptr(int);
    let plain = f.strukt(&[("n", int)]);

    assert!(f.types.garbage_collected(ptr));
    assert!(f.types.garbage_collected(plain));
    assert!(!f.types.garbage_collected(int));
    assert!(!f.types.garbage_collected(flag));
}

fn fiber_parts(f: &mut Fixture) -> (crate::TypeId, crate::TypeId) {
    let fiber = f.scalar(TypeKind::Fiber);
    let int = f.scalar(TypeKind::Int);
    (f.ptr(fiber), f.ptr(int))
}

#[test]
fn fiber_func_shape() {
    let mut f = Fixture::new();
    let void = f.scalar(TypeKind::Void);
    let (parent, arg) = fiber_parts(&mut f);
    let entry = f.func(&[("parent", parent), ("arg", arg)], &[void]);

    assert!(f.types.is_fiber_func(entry));
}

#[test]
fn fiber_func_rejects_other_shapes() {
    let mut f = Fixture::new();
    let void = f.scalar(TypeKind::Void);
    let int = f.scalar(TypeKind::Int);
    let any = f.ptr(void);
    let (parent, arg) = fiber_parts(&mut f);

    let returns_int = f.func(&[("parent", parent), ("arg", arg)], &[int]);
    let void_arg = f.func(&[("parent", parent), ("arg", any)], &[void]);
    let swapped = f.func(&[("arg", arg), ("parent", parent)], &[void]);
    let one_param = f.func(&[("parent", parent)], &[void]);
    let method = f.method(parent, &[("arg", arg)], &[void]);

    for id in [returns_int, void_arg, swapped, one_param, method, int] {
        assert!(!f.types.is_fiber_func(id), "{}", f.types.spelling(id));
    }
}

#[test]
fn fiber_func_rejects_defaults() {
    let mut f = Fixture::new();
    let void = f.scalar(TypeKind::Void);
    let (parent, arg) = fiber_parts(&mut f);
    let entry = f.func(&[("parent", parent)], &[void]);
    let range = crate::test_utils::range();
    f.types
        .add_param(&mut f.diag, range, entry, arg, "arg", Some(Const::Ptr(0)));

    assert!(f.diag.is_empty());
    assert!(!f.types.is_fiber_func(entry));
}
