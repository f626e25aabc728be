//! Gradient shader builder — generates a compilable shader description for
//! an n-stop radial-sweep gradient, plus the uniform values the renderer
//! must set for it.

use prism_core::{Color, PrismError, PrismResult, UniformValue};

/// Record types shared with the built-in default vertex function; gradient
/// descriptions rely on the vertex fallback, so these names must match the
/// default source.
const GRADIENT_STRUCTS: &str = "\
struct VSInput {
    float4 position : POSITION0;
    float2 texCoord : TEXCOORD0;
};

struct VSOutput {
    float4 position : POSITION0;
    float2 texCoord;
};
";

/// A generated gradient shader description together with the named uniform
/// values the renderer must supply for every draw that uses it.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientShader {
    pub source: String,
    pub uniforms: Vec<(String, UniformValue)>,
}

/// Build a gradient shader description from a list of color stops.
///
/// One color yields a flat fill; two or more yield a sweep gradient whose
/// axis is controlled by the `angle` uniform (radians). At least one color
/// is required.
pub fn gradient(colors: &[Color]) -> PrismResult<GradientShader> {
    if colors.is_empty() {
        return Err(PrismError::InvalidArgument(
            "gradient needs at least one color".to_string(),
        ));
    }

    let mut uniforms: Vec<(String, UniformValue)> = Vec::new();
    let source = if colors.len() == 1 {
        uniforms.push(("color0".to_string(), colors[0].into()));
        format!(
            "{GRADIENT_STRUCTS}\n\
            struct PixelUniforms {{\n    vec4 color0;\n}};\n\n\
            vec4 pixelShaderFunction(VSOutput vsOut) {{\n    return color0;\n}}\n"
        )
    } else {
        uniforms.push(("angle".to_string(), UniformValue::Float(0.0)));
        let mut uniform_fields = String::from("    float angle;\n");
        for (i, color) in colors.iter().enumerate() {
            uniform_fields.push_str(&format!("    vec4 color{i};\n"));
            uniforms.push((format!("color{i}"), (*color).into()));
        }
        format!(
            "{GRADIENT_STRUCTS}\n\
            struct PixelUniforms {{\n{uniform_fields}}};\n\n\
            vec4 pixelShaderFunction(VSOutput vsOut) {{\n    \
            vec2 U = vsOut.texCoord.xy - 0.5;\n    \
            float x = 0.5 + length(U) * cos(atan(U.y, -U.x) + angle);\n    \
            return {};\n}}\n",
            mix_chain(colors.len())?
        )
    };

    Ok(GradientShader { source, uniforms })
}

/// The nested `mix` expression blending `colors` stops over `x` in [0, 1].
fn mix_chain(colors: usize) -> PrismResult<String> {
    let steps: Vec<f64> = (0..colors - 1)
        .map(|i| i as f64 / (colors - 1) as f64)
        .collect();
    let mut mix_calls: Vec<String> = steps
        .iter()
        .enumerate()
        .map(|(i, step)| {
            let next = steps.get(i + 1).copied().unwrap_or(1.0);
            format!(
                "mix(color{i}, color{}, smoothstep({step:.1}, {next:.1}, x))",
                i + 1
            )
        })
        .collect();

    let mut chain = match mix_calls.pop() {
        Some(call) => call,
        None => {
            return Err(PrismError::InvalidArgument(
                "gradient mix chain needs at least two colors".to_string(),
            ))
        }
    };
    while let Some(call) = mix_calls.pop() {
        chain = format!("mix({call}, {chain}, smoothstep(0.0, 1.0, x))");
    }
    Ok(chain)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::compile_shader;
    use prism_core::UniformKind;

    #[test]
    fn test_empty_color_list_is_rejected() {
        let err = gradient(&[]).unwrap_err();
        assert!(matches!(err, PrismError::InvalidArgument(_)));
    }

    #[test]
    fn test_single_color_is_flat_fill() {
        let shader = gradient(&[Color::WHITE]).unwrap();
        assert!(shader.source.contains("return color0;"));
        assert_eq!(shader.uniforms.len(), 1);
        assert_eq!(shader.uniforms[0].0, "color0");
    }

    #[test]
    fn test_two_color_mix_chain() {
        let shader = gradient(&[Color::BLACK, Color::WHITE]).unwrap();
        assert!(shader
            .source
            .contains("mix(color0, color1, smoothstep(0.0, 1.0, x))"));
    }

    #[test]
    fn test_three_color_mix_chain_nests() {
        let shader = gradient(&[Color::BLACK, Color::WHITE, Color::TRANSPARENT]).unwrap();
        assert!(shader
            .source
            .contains("mix(color1, color2, smoothstep(0.5, 1.0, x))"));
        assert!(shader.source.contains("mix(mix(color0, color1,"));
    }

    #[test]
    fn test_uniform_values_cover_every_stop() {
        let shader = gradient(&[Color::BLACK, Color::WHITE]).unwrap();
        let names: Vec<&str> = shader.uniforms.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["angle", "color0", "color1"]);
        assert_eq!(shader.uniforms[0].1.kind(), UniformKind::Float);
        assert_eq!(shader.uniforms[1].1.kind(), UniformKind::Vec4);
    }

    #[test]
    fn test_gradient_source_compiles() {
        let shader = gradient(&[Color::BLACK, Color::WHITE]).unwrap();
        let pair = compile_shader(&shader.source).unwrap();
        assert!(pair.pixel_source.contains("uniform float angle;"));
        assert!(pair.pixel_source.contains("uniform vec4 color1;"));
    }
}
