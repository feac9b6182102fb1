use quickcheck::{Arbitrary, Gen};

mod containers;
mod sorting;

/// A single mutation applied to a container and to the std model it is checked against.
#[derive(Clone, Debug)]
enum Op<T> {
    Append(T),
    Remove(T),
}

impl<T: Arbitrary> Arbitrary for Op<T> {
    /// Tells quickcheck how to randomly choose an operation. Appends are picked twice as often so
    /// that containers actually grow.
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2]).unwrap() {
            0 | 1 => Op::Append(T::arbitrary(g)),
            2 => Op::Remove(T::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}
