//! Value types attached to vertices.
//!
//! [`Type`] is a closed hierarchy of immutable value trees: scalars, strings,
//! arrays, functions, unions and references to user-defined types. Types have
//! no identity and no back-references; two types are equal exactly when their
//! trees are structurally equal, so they can be hashed and deduplicated
//! directly.
//!
//! A vertex carries at most one declared type token (see
//! [`DeclaredType`](crate::ir::DeclaredType)) and, independently, at most one
//! verified [`Type`].
//!
//! # Examples
//!
//! ```rust
//! use vertex_ir::types::Type;
//!
//! let callback = Type::function(Type::Void, vec![Type::integer(32), Type::dynamic_string()]);
//! assert_eq!(callback.to_string(), "(i32, string) => void");
//!
//! let numbers = Type::dynamic_array(Type::union(vec![Type::integer(32), Type::float(64)?]));
//! assert_eq!(numbers.to_string(), "(i32 | f64)[]");
//! # Ok::<(), vertex_ir::Error>(())
//! ```

mod visitor;

use std::fmt;

pub use visitor::{TypePrinter, TypeVisitor};

use crate::{Error, Result};

/// Width of a floating-point number type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatWidth {
    /// Single precision
    W32,
    /// Double precision
    W64,
}

impl FloatWidth {
    /// Returns the width in bits.
    #[must_use]
    pub const fn bits(self) -> u32 {
        match self {
            FloatWidth::W32 => 32,
            FloatWidth::W64 => 64,
        }
    }
}

impl TryFrom<u32> for FloatWidth {
    type Error = Error;

    fn try_from(bits: u32) -> Result<Self> {
        match bits {
            32 => Ok(FloatWidth::W32),
            64 => Ok(FloatWidth::W64),
            other => Err(Error::InvalidFloatWidth(other)),
        }
    }
}

/// Numeric types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberType {
    /// Integer of the given bit width
    Integer {
        /// Width in bits
        width: u32,
    },
    /// IEEE 754 float
    Float(FloatWidth),
}

/// String types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringType {
    /// String of a length known up front
    Static {
        /// Length in characters
        length: usize,
    },
    /// String of unknown length
    Dynamic,
}

/// Array types.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArrayType {
    /// Array of a length known up front
    Static {
        /// Element type
        element: Box<Type>,
        /// Number of elements
        length: usize,
    },
    /// Array of unknown length
    Dynamic {
        /// Element type
        element: Box<Type>,
    },
}

impl ArrayType {
    /// Returns the element type.
    #[must_use]
    pub fn element(&self) -> &Type {
        match self {
            ArrayType::Static { element, .. } | ArrayType::Dynamic { element } => element,
        }
    }
}

/// Function signature type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionType {
    /// Type of the returned value
    pub return_type: Box<Type>,
    /// Types of the formal parameters, in order
    pub parameter_types: Vec<Type>,
}

/// A value type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    /// No value
    Void,
    /// Not inferred
    Unknown,
    /// The `undefined` value
    Undefined,
    /// The `null` value
    Null,
    /// A value that may be absent
    Option(Box<Type>),
    /// Number
    Number(NumberType),
    /// Function
    Function(FunctionType),
    /// String
    String(StringType),
    /// Array
    Array(ArrayType),
    /// Any one of the member types
    Union(Vec<Type>),
    /// Named type defined by the program
    UserDefined(String),
    /// Object whose properties share an element type
    Object(Box<Type>),
}

impl Type {
    /// Creates an optional type.
    #[must_use]
    pub fn option(base: Type) -> Self {
        Type::Option(Box::new(base))
    }

    /// Creates an integer type of `width` bits.
    #[must_use]
    pub const fn integer(width: u32) -> Self {
        Type::Number(NumberType::Integer { width })
    }

    /// Creates a float type of `width` bits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFloatWidth`] unless `width` is 32 or 64.
    pub fn float(width: u32) -> Result<Self> {
        Ok(Type::Number(NumberType::Float(FloatWidth::try_from(width)?)))
    }

    /// Creates a function type.
    #[must_use]
    pub fn function(return_type: Type, parameter_types: Vec<Type>) -> Self {
        Type::Function(FunctionType {
            return_type: Box::new(return_type),
            parameter_types,
        })
    }

    /// Creates a string type of known `length`.
    #[must_use]
    pub const fn static_string(length: usize) -> Self {
        Type::String(StringType::Static { length })
    }

    /// Creates a string type of unknown length.
    #[must_use]
    pub const fn dynamic_string() -> Self {
        Type::String(StringType::Dynamic)
    }

    /// Creates an array type of known `length`.
    #[must_use]
    pub fn static_array(element: Type, length: usize) -> Self {
        Type::Array(ArrayType::Static {
            element: Box::new(element),
            length,
        })
    }

    /// Creates an array type of unknown length.
    #[must_use]
    pub fn dynamic_array(element: Type) -> Self {
        Type::Array(ArrayType::Dynamic {
            element: Box::new(element),
        })
    }

    /// Creates a union of `members`.
    #[must_use]
    pub const fn union(members: Vec<Type>) -> Self {
        Type::Union(members)
    }

    /// Creates a reference to the user-defined type `name`.
    #[must_use]
    pub fn user_defined(name: impl Into<String>) -> Self {
        Type::UserDefined(name.into())
    }

    /// Creates an object type with the given property element type.
    #[must_use]
    pub fn object(element: Type) -> Self {
        Type::Object(Box::new(element))
    }

    /// Returns `true` for integer and float types.
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Type::Number(_))
    }

    /// Dispatches to the visitor method named for this type's concrete variant.
    pub fn accept<T, V>(&self, visitor: &mut V) -> T
    where
        V: TypeVisitor<T> + ?Sized,
    {
        match self {
            Type::Void => visitor.visit_void(),
            Type::Unknown => visitor.visit_unknown(),
            Type::Undefined => visitor.visit_undefined(),
            Type::Null => visitor.visit_null(),
            Type::Option(base) => visitor.visit_option(base),
            Type::Number(NumberType::Integer { width }) => visitor.visit_integer(*width),
            Type::Number(NumberType::Float(width)) => visitor.visit_float(*width),
            Type::Function(function) => visitor.visit_function(function),
            Type::String(StringType::Static { length }) => visitor.visit_static_string(*length),
            Type::String(StringType::Dynamic) => visitor.visit_dynamic_string(),
            Type::Array(ArrayType::Static { element, length }) => {
                visitor.visit_static_array(element, *length)
            }
            Type::Array(ArrayType::Dynamic { element }) => visitor.visit_dynamic_array(element),
            Type::Union(members) => visitor.visit_union(members),
            Type::UserDefined(name) => visitor.visit_user_defined(name),
            Type::Object(element) => visitor.visit_object(element),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&TypePrinter.print(self))
    }
}
