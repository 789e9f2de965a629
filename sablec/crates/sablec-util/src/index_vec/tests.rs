use super::{Idx, IndexVec};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct TestId(u32);

impl Idx for TestId {
    fn from_usize(idx: usize) -> Self {
        assert!(idx <= u32::MAX as usize);
        TestId(idx as u32)
    }

    fn index(self) -> usize {
        self.0 as usize
    }
}

#[test]
fn test_new_is_empty() {
    let v: IndexVec<TestId, i32> = IndexVec::new();
    assert!(v.is_empty());
    assert_eq!(v.len(), 0);
}

#[test]
fn test_push_returns_sequential_ids() {
    let mut v: IndexVec<TestId, &str> = IndexVec::new();
    let a = v.push("a");
    let b = v.push("b");
    assert_eq!(a, TestId(0));
    assert_eq!(b, TestId(1));
    assert_eq!(v.len(), 2);
}

#[test]
fn test_index_access() {
    let mut v: IndexVec<TestId, i32> = IndexVec::new();
    let id = v.push(42);
    assert_eq!(v[id], 42);
    v[id] = 43;
    assert_eq!(v[id], 43);
}

#[test]
fn test_get_out_of_bounds() {
    let v: IndexVec<TestId, i32> = IndexVec::new();
    assert!(v.get(TestId(0)).is_none());
}

#[test]
fn test_get_mut() {
    let mut v: IndexVec<TestId, i32> = IndexVec::new();
    let id = v.push(1);
    *v.get_mut(id).unwrap() = 2;
    assert_eq!(v[id], 2);
}

#[test]
fn test_iter_enumerated() {
    let mut v: IndexVec<TestId, char> = IndexVec::new();
    v.push('x');
    v.push('y');
    let pairs: Vec<_> = v.iter_enumerated().collect();
    assert_eq!(pairs, vec![(TestId(0), &'x'), (TestId(1), &'y')]);
}

#[test]
fn test_indices() {
    let mut v: IndexVec<TestId, i32> = IndexVec::new();
    v.push(1);
    v.push(2);
    v.push(3);
    let ids: Vec<_> = v.indices().collect();
    assert_eq!(ids, vec![TestId(0), TestId(1), TestId(2)]);
}

#[test]
fn test_clear() {
    let mut v: IndexVec<TestId, i32> = IndexVec::new();
    v.push(1);
    v.clear();
    assert!(v.is_empty());
}

#[test]
fn test_with_capacity_and_reserve() {
    let mut v: IndexVec<TestId, i32> = IndexVec::with_capacity(8);
    v.reserve(16);
    assert!(v.is_empty());
}

#[test]
fn test_as_slice() {
    let mut v: IndexVec<TestId, i32> = IndexVec::new();
    v.push(1);
    v.push(2);
    assert_eq!(v.as_slice(), &[1, 2]);
}
