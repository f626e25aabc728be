//! Code synthesis — struct models → GLSL declaration, assignment, and
//! varying transport text.

use crate::analyzer::UniformBlock;
use crate::model::StructDefinition;

/// A closed, stage-specific mapping from semantic binding tag to the
/// pipeline-supplied GLSL expression it corresponds to. Fixed by the
/// pipeline; tags outside the table are ignored.
#[derive(Debug, Clone, Copy)]
pub struct BindingTable {
    entries: &'static [(&'static str, &'static str)],
}

impl BindingTable {
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    /// The pipeline expression for a binding tag, if the tag is in the table.
    pub fn expression(&self, tag: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(name, _)| *name == tag)
            .map(|(_, expr)| *expr)
    }
}

/// Vertex-input bindings: per-vertex attributes and the object transform.
pub const VERTEX_INPUT_BINDINGS: BindingTable = BindingTable::new(&[
    ("POSITION0", "internal_position"),
    ("TEXCOORD0", "internal_inTexCoord"),
    ("MATRIX", "internal_matrix"),
]);

/// Bindings for the inter-stage struct: the vertex stage copies the bound
/// position field out to the clip-space output slot.
pub const PIXEL_STAGE_BINDINGS: BindingTable = BindingTable::new(&[("POSITION0", "gl_Position")]);

/// Everything the synthesizer produces for one struct. The varying triplet
/// covers every field in original order, one interpolated transport slot per
/// field; the assignment pair covers only fields whose binding tag is in the
/// table.
#[derive(Debug, Clone, Default)]
pub struct StructCode {
    /// `struct Name { ... };` type declaration.
    pub declaration: String,
    /// Fresh instance declaration plus copies from pipeline expressions into
    /// bound fields.
    pub forward_assign: String,
    /// Copies from bound fields out to their pipeline expressions.
    pub reverse_assign: String,
    /// One `varying` declaration per field.
    pub varying_declarations: String,
    /// Copies from the struct instance into the varyings, run once after the
    /// vertex stage body.
    pub varying_assignments: String,
    /// Reconstruction of the struct instance from the varyings, run once
    /// before the pixel stage body.
    pub varying_loads: String,
}

/// Generate all per-struct text for one struct and one binding table.
pub fn synthesize_struct(def: &StructDefinition, bindings: &BindingTable) -> StructCode {
    let name = &def.name;
    let mut code = StructCode {
        declaration: format!("struct {name} {{\n"),
        forward_assign: format!("{name} compiler_{name};\n"),
        varying_loads: format!("{name} compiler_{name};\n"),
        ..StructCode::default()
    };

    for field in &def.fields {
        code.declaration
            .push_str(&format!("    {} {};\n", field.ty, field.name));

        if let Some(tag) = field.binding.as_deref() {
            match bindings.expression(tag) {
                Some(expr) => {
                    code.forward_assign
                        .push_str(&format!("compiler_{name}.{} = {expr};\n", field.name));
                    code.reverse_assign
                        .push_str(&format!("{expr} = compiler_{name}.{};\n", field.name));
                }
                None => {
                    tracing::debug!("ignoring unbound semantic tag '{}' on field '{}'", tag, field.name);
                }
            }
        }

        code.varying_declarations
            .push_str(&format!("varying {} compiler_pass_{};\n", field.ty, field.name));
        code.varying_assignments.push_str(&format!(
            "compiler_pass_{} = compiler_{name}.{};\n",
            field.name, field.name
        ));
        code.varying_loads.push_str(&format!(
            "compiler_{name}.{} = compiler_pass_{};\n",
            field.name, field.name
        ));
    }

    code.declaration.push_str("};");
    code
}

/// One raw uniform declaration line per uniform block field.
pub fn uniform_declarations(block: &UniformBlock) -> String {
    block
        .fields
        .iter()
        .map(|f| format!("uniform {} {};", f.ty, f.name))
        .collect::<Vec<_>>()
        .join("\n")
}
