use super::Printer;
use tsgen_parser::ast::{FunctionType, IndexSignature, Type, TypeMember, TypeReference};

impl Printer<'_> {
    // =========================================================================
    // Types
    // =========================================================================

    pub(super) fn emit_type(&mut self, ty: &Type) {
        match ty {
            Type::Predefined(predefined) => self.write(predefined.as_str()),
            Type::Reference(reference) => self.emit_type_reference(reference),
            Type::Parenthesized(inner) => {
                self.write("(");
                self.emit_type(inner);
                self.write(")");
            }
            Type::Union(union) => {
                self.emit_type_list(union.types(), " | ", |member| {
                    matches!(member, Type::Function(_) | Type::Constructor(_) | Type::Union(_))
                });
            }
            Type::Intersection(intersection) => {
                self.emit_type_list(intersection.types(), " & ", |member| {
                    matches!(
                        member,
                        Type::Function(_)
                            | Type::Constructor(_)
                            | Type::Union(_)
                            | Type::Intersection(_)
                    )
                });
            }
            Type::Array(element) => {
                let needs_parens = matches!(
                    **element,
                    Type::Union(_) | Type::Intersection(_) | Type::Function(_) | Type::Constructor(_)
                );
                self.emit_type_maybe_parenthesized(element, needs_parens);
                self.write("[]");
            }
            Type::Tuple(tuple) => {
                self.write("[");
                self.emit_comma_list(&tuple.elements, |p, element| p.emit_type(element));
                self.write("]");
            }
            Type::Function(function) => self.emit_function_type(function),
            Type::Constructor(function) => {
                self.write("new ");
                self.emit_function_type(function);
            }
            Type::Object(object) => {
                if object.members.is_empty() {
                    self.write("{}");
                    return;
                }
                self.write("{ ");
                for (i, member) in object.members.iter().enumerate() {
                    if i > 0 {
                        self.write("; ");
                    }
                    self.emit_type_member(member);
                }
                self.write(" }");
            }
            Type::Query(name) => {
                self.write("typeof ");
                self.write_display(name);
            }
            Type::This => self.write("this"),
            Type::StringLiteral(literal) => self.write_display(literal),
        }
    }

    /// `A.B<T, U>`
    pub(super) fn emit_type_reference(&mut self, reference: &TypeReference) {
        self.write_display(&reference.name);
        if !reference.type_arguments.is_empty() {
            self.write("<");
            self.emit_comma_list(&reference.type_arguments, |p, ty| p.emit_type(ty));
            self.write(">");
        }
    }

    fn emit_type_list(&mut self, types: &[Type], separator: &str, needs_parens: fn(&Type) -> bool) {
        for (i, ty) in types.iter().enumerate() {
            if i > 0 {
                self.write(separator);
            }
            self.emit_type_maybe_parenthesized(ty, needs_parens(ty));
        }
    }

    fn emit_type_maybe_parenthesized(&mut self, ty: &Type, parenthesize: bool) {
        if parenthesize {
            self.write("(");
            self.emit_type(ty);
            self.write(")");
        } else {
            self.emit_type(ty);
        }
    }

    /// `<T>(params) => R`
    fn emit_function_type(&mut self, function: &FunctionType) {
        self.emit_type_parameters(&function.type_parameters);
        self.emit_parameter_list(&function.parameters);
        self.write(" => ");
        self.emit_type(&function.return_type);
    }

    // =========================================================================
    // Type members
    // =========================================================================

    pub(super) fn emit_type_member(&mut self, member: &TypeMember) {
        match member {
            TypeMember::Property(property) => {
                if property.readonly {
                    self.write("readonly ");
                }
                self.emit_property_name(&property.name);
                if property.optional {
                    self.write("?");
                }
                if let Some(ty) = &property.ty {
                    self.write(": ");
                    self.emit_type(ty);
                }
            }
            TypeMember::Method(method) => {
                self.emit_property_name(&method.name);
                if method.optional {
                    self.write("?");
                }
                self.emit_call_signature(&method.signature);
            }
            TypeMember::Call(signature) => self.emit_call_signature(signature),
            TypeMember::Construct(signature) => {
                self.write("new ");
                self.emit_call_signature(signature);
            }
            TypeMember::Index(index) => self.emit_index_signature(index),
        }
    }

    /// `readonly [key: string]: T`
    pub(super) fn emit_index_signature(&mut self, index: &IndexSignature) {
        if index.readonly {
            self.write("readonly ");
        }
        self.write("[");
        self.write(index.parameter_name.as_str());
        self.write(": ");
        self.emit_type(&index.parameter_type);
        self.write("]: ");
        self.emit_type(&index.ty);
    }
}
