use value_cell::{atomic::*, AtomicCell, Kind};

#[test]
fn supported() {
    assert!(AtomicCell::<bool>::REF_SUPPORTED);
    assert!(AtomicCell::<char>::REF_SUPPORTED);
    assert!(AtomicCell::<i8>::REF_SUPPORTED);
    assert!(AtomicCell::<i16>::REF_SUPPORTED);
    assert!(AtomicCell::<i32>::REF_SUPPORTED);
    assert!(AtomicCell::<i64>::REF_SUPPORTED);
    assert!(AtomicCell::<u8>::REF_SUPPORTED);
    assert!(AtomicCell::<usize>::REF_SUPPORTED);
    assert!(AtomicCell::<f32>::REF_SUPPORTED);
    assert!(AtomicCell::<f64>::REF_SUPPORTED);
    assert!(AtomicCell::<Option<&String>>::REF_SUPPORTED);
}

#[test]
fn put_then_swap() {
    let a = AtomicCell::new(0i32);
    a.put(41);
    assert_eq!(a.swap(42), 41);
    assert_eq!(a.get(), 42);

    let c = AtomicCell::new('a');
    c.put('é');
    assert_eq!(c.swap('🦀'), 'é');
    assert_eq!(c.get(), '🦀');
}

#[test]
fn compare_and_swap_success() {
    let a = AtomicCell::new(10u64);
    assert!(a.compare_and_swap(10, 20));
    assert_eq!(a.get(), 20);

    let b = AtomicCell::new(true);
    assert!(b.compare_and_swap(true, false));
    assert!(!b.get());
}

#[test]
fn compare_and_swap_failure_is_noop() {
    let a = AtomicCell::new(10i16);
    assert!(!a.compare_and_swap(11, 20));
    assert_eq!(a.get(), 10);

    assert_eq!(a.compare_exchange(12, 20), Err(10));
    assert_eq!(a.get(), 10);
}

#[test]
fn increment_decrement_wrap() {
    let a = AtomicCell::new(i32::MAX);
    assert_eq!(a.increment(), i32::MIN);
    assert_eq!(a.decrement(), i32::MAX);

    let b = AtomicCell::new(i8::MIN);
    assert_eq!(b.decrement(), i8::MAX);
    assert_eq!(b.increment(), i8::MIN);

    let c = AtomicCell::new(i64::MAX);
    assert_eq!(c.increment(), i64::MIN);

    let d = AtomicCell::new(u8::MAX);
    assert_eq!(d.increment(), 0);
    assert_eq!(d.decrement(), u8::MAX);
}

#[test]
fn increment_returns_new_value() {
    let a = AtomicCell::new(5i16);
    assert_eq!(a.increment(), 6);
    assert_eq!(a.increment(), 7);
    assert_eq!(a.decrement(), 6);
    assert_eq!(a.get(), 6);
}

#[test]
fn defaults() {
    assert_eq!(AtomicCell::<i8>::default().get(), 0);
    assert_eq!(AtomicCell::<i16>::default().get(), 0);
    assert_eq!(AtomicCell::<i32>::default().get(), 0);
    assert_eq!(AtomicCell::<i64>::default().get(), 0);
    assert!(!AtomicCell::<bool>::default().get());
    assert_eq!(AtomicCell::<char>::default().get(), '\0');
    assert_eq!(AtomicCell::<f32>::default().get().to_bits(), 0);
    assert_eq!(AtomicCell::<f64>::default().get().to_bits(), 0);
    assert_eq!(AtomicCell::<Option<&u32>>::default().get(), None);
}

#[test]
fn float_compare_by_bits() {
    let a = AtomicCell::new(f32::NAN);
    assert!(a.compare_and_swap(f32::NAN, 1.0));
    assert_eq!(a.get(), 1.0);

    let b = AtomicCell::new(0.0f64);
    assert!(!b.compare_and_swap(-0.0, 1.0));
    assert_eq!(b.get().to_bits(), 0.0f64.to_bits());
    assert!(b.compare_and_swap(0.0, -0.0));
    assert!(b.get().is_sign_negative());

    // A NaN with a different payload is a different value.
    let other_nan = f64::from_bits(f64::NAN.to_bits() ^ 1);
    let c = AtomicCell::new(f64::NAN);
    assert!(!c.compare_and_swap(other_nan, 2.0));
    assert!(c.get().is_nan());
}

#[test]
fn reference_equality() {
    let x = String::from("node");
    let y = String::from("node");
    let z = String::from("other");

    let a = AtomicCell::<Option<&String>>::default();
    assert!(!a.compare_and_swap(Some(&x), Some(&z)));
    assert!(a.compare_and_swap(None, Some(&x)));
    assert!(core::ptr::eq(a.get().unwrap(), &x));

    // `y` is a distinct referent, equal to `x`
    assert!(a.compare_and_swap(Some(&y), Some(&z)));
    assert_eq!(a.get(), Some(&z));

    assert!(!a.compare_and_swap(None, Some(&x)));
    assert_eq!(a.compare_exchange(Some(&x), None), Err(Some(&z)));
    assert_eq!(a.swap(None), Some(&z));
    assert_eq!(a.get(), None);
}

#[test]
fn reference_to_nan_matches_itself() {
    let nan = f64::NAN;
    let one = 1.0;
    let a = AtomicCell::new(Some(&nan));
    assert!(a.compare_and_swap(Some(&nan), Some(&one)));
    assert_eq!(a.get(), Some(&1.0));
}

#[test]
fn take_and_into_inner() {
    let a = AtomicCell::new(9u32);
    assert_eq!(a.take(), 9);
    assert_eq!(a.get(), 0);
    a.put(3);
    assert_eq!(a.into_inner(), 3);
}

#[test]
fn get_mut() {
    let mut a = AtomicCell::new('q');
    *a.get_mut() = 'r';
    assert_eq!(a.get(), 'r');

    let mut b = AtomicCell::new(2.5f64);
    *b.get_mut() += 1.0;
    assert_eq!(b.get(), 3.5);

    let s = String::from("s");
    let mut c = AtomicCell::<Option<&String>>::new(None);
    *c.get_mut() = Some(&s);
    assert_eq!(c.into_inner(), Some(&s));
}

#[test]
fn fetch_update() {
    let a = AtomicCell::new(1i64);
    assert_eq!(a.fetch_update(|v| (v < 4).then(|| v * 2)), Ok(1));
    assert_eq!(a.fetch_update(|v| (v < 4).then(|| v * 2)), Ok(2));
    assert_eq!(a.fetch_update(|v| (v < 4).then(|| v * 2)), Err(4));
    assert_eq!(a.get(), 4);
}

#[test]
fn debug_and_from() {
    let a: AtomicCell<u16> = 12.into();
    assert_eq!(format!("{:?}", a), "12");
    let b = AtomicCell::from(Some(&"x"));
    assert_eq!(format!("{:?}", b), "Some(\"x\")");
}

#[derive(Clone, Copy, Eq, Debug)]
struct Modular(u8);

impl PartialEq for Modular {
    fn eq(&self, other: &Modular) -> bool {
        self.0 % 5 == other.0 % 5
    }
}

unsafe impl Kind for Modular {
    type Storage = AtomicU8;

    fn into_raw(self) -> u8 {
        self.0
    }

    unsafe fn from_raw(raw: u8) -> Self {
        Modular(raw)
    }

    fn same(&self, other: &Self) -> bool {
        self == other
    }
}

#[test]
fn modular_kind() {
    let a = AtomicCell::new(Modular(1));

    assert_eq!(a.get(), Modular(1));
    assert_eq!(a.swap(Modular(2)), Modular(11));
    assert_eq!(a.get(), Modular(52));

    a.put(Modular(0));
    assert_eq!(a.compare_exchange(Modular(0), Modular(5)), Ok(Modular(100)));
    assert_eq!(a.get().0, 5);

    // Equal under `same` but not raw-equal: the exchange retries against the
    // stored representation.
    assert_eq!(a.compare_exchange(Modular(10), Modular(15)), Ok(Modular(100)));
    assert_eq!(a.get().0, 15);

    assert_eq!(a.compare_exchange(Modular(1), Modular(2)), Err(Modular(0)));
    assert_eq!(a.get().0, 15);
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(u8)]
enum Phase {
    Idle = 0,
    Running = 1,
    Done = 2,
}

unsafe impl Kind for Phase {
    type Storage = AtomicU8;

    fn into_raw(self) -> u8 {
        self as u8
    }

    unsafe fn from_raw(raw: u8) -> Self {
        match raw {
            0 => Phase::Idle,
            1 => Phase::Running,
            _ => Phase::Done,
        }
    }

    fn same(&self, other: &Self) -> bool {
        self == other
    }
}

#[test]
fn enum_kind() {
    let mut phase = AtomicCell::<Phase>::default();
    assert_eq!(phase.get(), Phase::Idle);
    assert!(phase.compare_and_swap(Phase::Idle, Phase::Running));
    assert!(!phase.compare_and_swap(Phase::Idle, Phase::Running));
    *phase.get_mut() = Phase::Done;
    assert_eq!(phase.swap(Phase::Idle), Phase::Done);
}
