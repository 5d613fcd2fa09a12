//! Closed dispatch over concrete types, and the canonical type printer.

use crate::types::{FloatWidth, FunctionType, Type};

/// Visitor over every concrete [`Type`] variant.
///
/// Nested number, string and array variants get one method each, so an
/// implementation never needs to match on the sub-enums itself.
pub trait TypeVisitor<T> {
    /// Visits `void`.
    fn visit_void(&mut self) -> T;
    /// Visits the unknown type.
    fn visit_unknown(&mut self) -> T;
    /// Visits `undefined`.
    fn visit_undefined(&mut self) -> T;
    /// Visits `null`.
    fn visit_null(&mut self) -> T;
    /// Visits an optional type.
    fn visit_option(&mut self, base: &Type) -> T;
    /// Visits an integer type.
    fn visit_integer(&mut self, width: u32) -> T;
    /// Visits a float type.
    fn visit_float(&mut self, width: FloatWidth) -> T;
    /// Visits a function type.
    fn visit_function(&mut self, function: &FunctionType) -> T;
    /// Visits a string of known length.
    fn visit_static_string(&mut self, length: usize) -> T;
    /// Visits a string of unknown length.
    fn visit_dynamic_string(&mut self) -> T;
    /// Visits an array of known length.
    fn visit_static_array(&mut self, element: &Type, length: usize) -> T;
    /// Visits an array of unknown length.
    fn visit_dynamic_array(&mut self, element: &Type) -> T;
    /// Visits a union.
    fn visit_union(&mut self, members: &[Type]) -> T;
    /// Visits a user-defined type reference.
    fn visit_user_defined(&mut self, name: &str) -> T;
    /// Visits an object type.
    fn visit_object(&mut self, element: &Type) -> T;
}

/// Renders types in their canonical textual form.
///
/// | Type | Text |
/// |------|------|
/// | integer / float | `i32`, `f64` |
/// | strings | `string[4]`, `string` |
/// | arrays | `i32[3]`, `i32[]` |
/// | union | `i32 \| null` |
/// | function | `(i32, string) => void` |
/// | option / object | `option<i32>`, `object<string>` |
///
/// Unions and functions are parenthesized when they appear as an array
/// element, so `(i32 | null)[]` does not read as a union containing an array.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypePrinter;

impl TypePrinter {
    /// Renders `ty`.
    #[must_use]
    pub fn print(&mut self, ty: &Type) -> String {
        ty.accept(self)
    }

    fn element(&mut self, element: &Type) -> String {
        let text = self.print(element);
        match element {
            Type::Union(_) | Type::Function(_) => format!("({text})"),
            _ => text,
        }
    }
}

impl TypeVisitor<String> for TypePrinter {
    fn visit_void(&mut self) -> String {
        "void".to_string()
    }

    fn visit_unknown(&mut self) -> String {
        "unknown".to_string()
    }

    fn visit_undefined(&mut self) -> String {
        "undefined".to_string()
    }

    fn visit_null(&mut self) -> String {
        "null".to_string()
    }

    fn visit_option(&mut self, base: &Type) -> String {
        format!("option<{}>", self.print(base))
    }

    fn visit_integer(&mut self, width: u32) -> String {
        format!("i{width}")
    }

    fn visit_float(&mut self, width: FloatWidth) -> String {
        format!("f{}", width.bits())
    }

    fn visit_function(&mut self, function: &FunctionType) -> String {
        let params: Vec<String> = function
            .parameter_types
            .iter()
            .map(|param| self.print(param))
            .collect();
        format!(
            "({}) => {}",
            params.join(", "),
            self.print(&function.return_type)
        )
    }

    fn visit_static_string(&mut self, length: usize) -> String {
        format!("string[{length}]")
    }

    fn visit_dynamic_string(&mut self) -> String {
        "string".to_string()
    }

    fn visit_static_array(&mut self, element: &Type, length: usize) -> String {
        format!("{}[{length}]", self.element(element))
    }

    fn visit_dynamic_array(&mut self, element: &Type) -> String {
        format!("{}[]", self.element(element))
    }

    fn visit_union(&mut self, members: &[Type]) -> String {
        let members: Vec<String> = members.iter().map(|member| self.print(member)).collect();
        members.join(" | ")
    }

    fn visit_user_defined(&mut self, name: &str) -> String {
        name.to_string()
    }

    fn visit_object(&mut self, element: &Type) -> String {
        format!("object<{}>", self.print(element))
    }
}
