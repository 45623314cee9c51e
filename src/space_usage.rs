//! Measuring how much memory a value owns.
//!
//! Run-length encoding only pays off when the runs are long enough to
//! make up for storing a count beside every value. `SpaceUsage` lets a
//! caller weigh an encoded vector against the raw one before keeping
//! either.

use std::mem;

/// Computes the space usage of an object.
///
/// The size is split into a stack portion, fixed for every value of the
/// type, and a heap portion, which counts whatever the value allocated
/// at run time. A vector's heap portion includes the stack portion of
/// every slot it has capacity for, plus the heap portion of each
/// element.
pub trait SpaceUsage: Sized {
    /// Computes the size of the receiver in bytes, counting both the
    /// value itself and any heap memory it owns.
    #[inline]
    fn total_bytes(&self) -> usize {
        Self::stack_bytes() + self.heap_bytes()
    }

    /// Is the size of this type known statically?
    ///
    /// If this method returns true then `heap_bytes` should always
    /// return 0.
    fn is_stack_only() -> bool;

    /// The stack portion of the size of this type.
    ///
    /// Defaults to `std::mem::size_of::<Self>()`.
    #[inline]
    fn stack_bytes() -> usize {
        mem::size_of::<Self>()
    }

    /// The heap portion of the size of an object, excluding anything
    /// already counted by `stack_bytes`.
    fn heap_bytes(&self) -> usize;
}

/// Implements `SpaceUsage` for a type that owns no heap memory.
///
/// # Example
///
/// ```
/// # #[macro_use] extern crate runlength;
/// use runlength::run_length::{encode, Run};
/// use runlength::SpaceUsage;
///
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// struct Pixel { r: u8, g: u8, b: u8 }
///
/// impl_stack_only_space_usage!(Pixel);
///
/// fn main() {
///     let black = Pixel { r: 0, g: 0, b: 0 };
///     let row = vec![black; 640];
///     let runs: Vec<Run<Pixel>> = encode(&row);
///     assert!(runs.total_bytes() < row.total_bytes());
/// }
/// ```
#[macro_export]
macro_rules! impl_stack_only_space_usage {
    ( $t:ty ) => {
        impl $crate::SpaceUsage for $t {
            #[inline]
            fn is_stack_only() -> bool {
                true
            }
            #[inline]
            fn heap_bytes(&self) -> usize {
                0
            }
        }
    };
}

impl_stack_only_space_usage!(());
impl_stack_only_space_usage!(bool);
impl_stack_only_space_usage!(char);
impl_stack_only_space_usage!(u8);
impl_stack_only_space_usage!(u16);
impl_stack_only_space_usage!(u32);
impl_stack_only_space_usage!(u64);
impl_stack_only_space_usage!(usize);
impl_stack_only_space_usage!(i8);
impl_stack_only_space_usage!(i16);
impl_stack_only_space_usage!(i32);
impl_stack_only_space_usage!(i64);
impl_stack_only_space_usage!(isize);
impl_stack_only_space_usage!(f32);
impl_stack_only_space_usage!(f64);

impl<'a, T> SpaceUsage for &'a T {
    fn is_stack_only() -> bool {
        true
    }
    fn heap_bytes(&self) -> usize {
        0
    }
}

impl SpaceUsage for String {
    #[inline]
    fn is_stack_only() -> bool {
        false
    }

    fn heap_bytes(&self) -> usize {
        self.capacity()
    }
}

macro_rules! impl_tuple_space_usage {
    ( $( $tv:ident ),+ ) =>
    {
        impl<$( $tv: SpaceUsage ),+> SpaceUsage for ($( $tv, )+) {
            #[allow(non_snake_case)]
            fn heap_bytes(&self) -> usize {
                let &($( ref $tv, )+) = self;
                0 $( + $tv.heap_bytes() )+
            }

            #[inline]
            fn is_stack_only() -> bool {
                $( $tv::is_stack_only() )&*
            }
        }
    }
}

impl_tuple_space_usage!(A);
impl_tuple_space_usage!(A, B);
impl_tuple_space_usage!(A, B, C);
impl_tuple_space_usage!(A, B, C, D);

impl<A: SpaceUsage> SpaceUsage for Vec<A> {
    #[inline]
    fn is_stack_only() -> bool {
        false
    }

    fn heap_bytes(&self) -> usize {
        let mut result = self.capacity() * A::stack_bytes();

        if !A::is_stack_only() {
            for each in self {
                result += each.heap_bytes();
            }
        }

        result
    }
}

impl<A: SpaceUsage> SpaceUsage for Box<A> {
    #[inline]
    fn is_stack_only() -> bool {
        false
    }

    fn heap_bytes(&self) -> usize {
        use std::ops::Deref;
        self.deref().total_bytes()
    }
}
