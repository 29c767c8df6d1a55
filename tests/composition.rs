//! Generators consumed and produced through plain `Iterator` adapters.

mod common;

use lazyseq::prelude::*;

fn co_ints() -> Generator<i32> {
    from_async(|co| async move {
        for i in 0..5 {
            co.yield_(i).await;
        }
    })
    .into_generator()
}

fn filter_co<I, F>(range: I, pred: F) -> Generator<I::Item>
where
    I: IntoIterator + 'static,
    I::Item: 'static,
    F: FnMut(&I::Item) -> bool + 'static,
{
    from_async(move |co| async move {
        let mut pred = pred;
        for x in range {
            if pred(&x) {
                co.yield_(x).await;
            }
        }
    })
    .into_generator()
}

fn is_even(x: &i32) -> bool {
    x % 2 == 0
}

#[test]
fn filter_a_vector_with_a_generator() {
    let evens = filter_co(vec![1, 2, 3, 4, 5], is_even);
    assert_eq!(evens.into_iter().collect::<Vec<_>>(), vec![2, 4]);
}

#[test]
fn filter_a_generator_with_a_generator() {
    let evens = filter_co(co_ints(), is_even);
    assert_eq!(evens.into_iter().collect::<Vec<_>>(), vec![0, 2, 4]);
}

#[test]
fn filter_a_generator_with_iterator_adapters() {
    let odds: Vec<_> = co_ints().into_iter().filter(|x| !is_even(x)).collect();
    assert_eq!(odds, vec![1, 3]);
}

#[test]
fn chained_generators_stay_lazy() {
    let squares = from_iter(co_ints().into_iter().map(|x| x * x)).into_generator();
    assert!(!squares.is_started());

    let mut cursor = squares.begin();
    assert_eq!(*cursor.get(), 0);
    cursor.advance();
    assert_eq!(*cursor.get(), 1);
    cursor.advance();
    assert_eq!(*cursor.get(), 4);
}

#[test]
fn fibonacci_with_successors() {
    let fib = successors(Some((0_u64, 1_u64)), |&(a, b)| Some((b, a + b)))
        .into_generator()
        .into_iter()
        .map(|(a, _)| a)
        .take(10)
        .collect::<Vec<_>>();
    assert_eq!(fib, vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
}
