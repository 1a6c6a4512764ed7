//! End to end behavior of buffers, views and both notifying wrappers.

use numbuf::*;
use numbuf::prelude::*;



// ===============
// === Helpers ===
// ===============

type Log<T> = Rc<RefCell<Vec<T>>>;

fn log<T>() -> Log<T> {
    Rc::new(RefCell::new(Vec::new()))
}



// =============
// === Tests ===
// =============

#[test]
fn tiling_on_construction() {
    assert_eq!(Buffer::<i32>::with_default(vec![1,2],7).to_vec(), vec![1,2,1,2,1,2,1]);
    assert_eq!(Buffer::<i32>::with_default(vec![5],4).to_vec(), vec![5,5,5,5]);
    assert_eq!(Buffer::<i32>::with_default(vec![1,2,3],0).to_vec(), Vec::<i32>::new());
}

#[test]
fn resize_preserves_prefix_and_zero_fills() {
    let buffer = Buffer::<f64>::from_vec(vec![1.0,2.0,3.0,4.0]);
    buffer.resize(2);
    assert_eq!(buffer.to_vec(), vec![1.0,2.0]);
    buffer.resize(4);
    assert_eq!(buffer.to_vec(), vec![1.0,2.0,0.0,0.0]);
}

#[test]
fn only_write_is_bounds_checked() {
    let buffer = Buffer::<u8>::new(4);
    let err    = buffer.write(4,1).unwrap_err();
    assert_eq!(err, Error::IndexOutOfRange {index:4,length:4});
    assert_eq!(err.to_string(), "Index 4 is too big, array has 4 elements.");
    buffer.write(3,1).unwrap();
    assert_eq!(buffer.read(3), 1);
}

#[test]
fn bindable_range_notification_order() {
    let buffer       = Buffer::<i32>::new(5);
    let mut bindable = Bindable::new(buffer.clone_ref());
    let seen         = log();
    let seen2        = seen.clone();
    bindable.set_on_changed(move |ix| {
        let snapshot = buffer.to_vec();
        seen2.borrow_mut().push((ix,snapshot))
    });
    bindable.set(&[9,9,9],1);
    let indexes = seen.borrow().iter().map(|(ix,_)| *ix).collect_vec();
    assert_eq!(indexes, vec![1,2,3]);
    assert!(seen.borrow().iter().all(|(_,snapshot)| snapshot == &vec![0,9,9,9,0]));
}

#[test]
fn resize_to_same_length_is_a_no_op() {
    let mut bindable = Bindable::new(Buffer::<u8>::new(3));
    let resizes      = log();
    let resizes2     = resizes.clone();
    bindable.set_on_resized(move |old,new| resizes2.borrow_mut().push((old,new)));
    let before = bindable.array().as_ptr();
    bindable.resize(3);
    assert!(resizes.borrow().is_empty());
    assert_eq!(bindable.array().as_ptr(), before);

    let observable = Observable::new(Buffer::<u8>::new(3));
    let before     = observable.array().as_ptr();
    observable.resize(3);
    assert_eq!(observable.array().as_ptr(), before);
}

#[test]
fn view_delegation() {
    let buffer = Buffer::<i32>::from_vec(vec![0,1,2,3,4,5]);
    let view   = View::new(&buffer,3,3);
    assert_eq!(view.read(0), 3);
    view.write(0,99).unwrap();
    assert_eq!(buffer.read(3), 99);
}

#[test]
fn observable_fan_out() {
    let observable = Observable::new(Buffer::<f32>::new(4));
    let first      = log();
    let second     = log();
    let first2     = first.clone();
    let second2    = second.clone();
    let _h1        = observable.subscribe(move |ix| first2.borrow_mut().push(*ix));
    let _h2        = observable.subscribe(move |ix| second2.borrow_mut().push(*ix));
    observable.write(2,1.0).unwrap();
    assert_eq!(*first.borrow(), vec![2]);
    assert_eq!(*second.borrow(), vec![2]);
}

#[test]
fn dropped_subscription_stops_notifications() {
    let observable = Observable::new(Buffer::<f32>::new(4));
    let seen       = log();
    let seen2      = seen.clone();
    let handle     = observable.subscribe(move |ix| seen2.borrow_mut().push(*ix));
    observable.set(&[1.0,2.0],2);
    drop(handle);
    observable.write(0,1.0).unwrap();
    assert_eq!(*seen.borrow(), vec![2,3]);
    assert!(observable.on_changed().is_empty());
}

#[test]
fn wrappers_outlive_the_original_handle() {
    let (view,observable) = {
        let buffer = Buffer::<i16>::with_default(vec![4],2);
        (View::new(&buffer,1,1), Observable::new(buffer.clone_ref()))
    };
    observable.write(1,-4).unwrap();
    assert_eq!(view.read(0), -4);
}

#[test]
fn dynamically_typed_buffers() {
    let options = Options::default().default_pattern(vec![1.0,2.0]);
    let buffer  = AnyBuffer::new(ElementKind::Int32,Source::Size(3),options).unwrap();
    assert_eq!(buffer.to_numbers(), vec![1.0,2.0,1.0]);
    let typed = <&Buffer<i32>>::try_from(&buffer).unwrap();
    assert_eq!(typed.to_vec(), vec![1,2,1]);

    let source = Source::Values(vec![0.5]);
    let err    = AnyBuffer::new(ElementKind::Int32,source,Options::default()).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument{..}));
}
