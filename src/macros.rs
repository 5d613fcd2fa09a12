/// Defines a strongly-typed arena handle.
///
/// Each handle wraps a `usize` index into one of the [`crate::Ir`] arenas and
/// prints with a short prefix so that vertices, edges and graphs can be told
/// apart in logs and error messages.
///
/// ```rust, ignore
///  define_handle!(
///      /// Handle of a vertex in the IR arena.
///      VertexRef, "v"
///  );
///  assert_eq!(VertexRef::new(3).to_string(), "v3");
/// ```
macro_rules! define_handle {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub(crate) usize);

        impl $name {
            /// Creates a handle from a raw arena index.
            ///
            /// Handles are normally obtained from the [`crate::Ir`] that owns the
            /// referenced item; a hand-made handle may not resolve.
            #[must_use]
            #[inline]
            pub const fn new(index: usize) -> Self {
                $name(index)
            }

            /// Returns the raw arena index of this handle.
            #[must_use]
            #[inline]
            pub const fn index(self) -> usize {
                self.0
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}{}", $prefix, self.0)
            }
        }

        impl From<$name> for usize {
            #[inline]
            fn from(handle: $name) -> Self {
                handle.0
            }
        }
    };
}
