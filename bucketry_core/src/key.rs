//! Declares [`Key`] - the bound every table key has to satisfy.
use std::hash::Hash;
use std::rc::Rc;
use std::sync::Arc;

/// A value usable as a dictionary key.
///
/// Keys are mandatory: a key that reports itself as absent is rejected with
/// [`crate::DictError::InvalidKey`] instead of being hashed. Only [`Option`] makes use of this,
/// treating `None` as the absent key; for any other type the provided implementation is enough:
///
/// ```rust
/// use bucketry_core::Key;
///
/// #[derive(Hash, PartialEq, Eq)]
/// struct UserId(u64);
///
/// impl Key for UserId {}
///
/// assert!(!UserId(7).is_absent());
/// assert!(None::<u32>.is_absent());
/// ```
pub trait Key: Hash + Eq {
    /// Whether the key stands for "no key at all".
    #[inline]
    fn is_absent(&self) -> bool {
        false
    }
}

macro_rules! impl_key {
    ($($type:ty),*) => {
        $(
            impl Key for $type {}
        )*
    };
}

impl_key!(u8, i8, u16, i16, u32, i32, u64, i64, u128, i128, usize, isize);
impl_key!(bool, char, (), String, str);

impl<T: Key> Key for Option<T> {
    #[inline]
    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

impl<T: Key + ?Sized> Key for &T {
    #[inline]
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

impl<T: Key + ?Sized> Key for Box<T> {
    #[inline]
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

impl<T: Key + ?Sized> Key for Rc<T> {
    #[inline]
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

impl<T: Key + ?Sized> Key for Arc<T> {
    #[inline]
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

impl<T: Key, const SIZE: usize> Key for [T; SIZE] {}

impl<T: Key> Key for Vec<T> {}

macro_rules! impl_key_tuple {
    ($($name:ident),+) => {
        impl<$($name: Key),+> Key for ($($name,)+) {}
    };
}

impl_key_tuple!(A);
impl_key_tuple!(A, B);
impl_key_tuple!(A, B, C);
impl_key_tuple!(A, B, C, D);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_keys_are_present() {
        assert!(!0_u8.is_absent());
        assert!(!(-1_i64).is_absent());
        assert!(!String::new().is_absent());
        assert!(!"".is_absent());
        assert!(!(1_u32, "a").is_absent());
    }

    #[test]
    fn test_option_none_is_absent() {
        assert!(None::<String>.is_absent());
        assert!(!Some(0_u32).is_absent());
        assert!(!Some(None::<u32>).is_absent());
        assert!((&None::<u8>).is_absent());
        assert!(Box::new(None::<u8>).is_absent());
    }
}
