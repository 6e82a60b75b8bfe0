use roundtri_geometry::types::TriangleSpec;
use roundtri_svg::{YAxis, render_to_string, rounded_triangle_path};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct TriangleOutput {
    path: String,
    svg: String,
    diagnostics: String,
    has_error: bool,
}

#[wasm_bindgen]
impl TriangleOutput {
    #[wasm_bindgen(getter)]
    pub fn path(&self) -> String {
        self.path.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn svg(&self) -> String {
        self.svg.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn diagnostics(&self) -> String {
        self.diagnostics.clone()
    }

    #[wasm_bindgen(getter, js_name = hasError)]
    pub fn has_error(&self) -> bool {
        self.has_error
    }
}

/// Compute the rounded-triangle path and a standalone SVG preview.
///
/// Invalid dimensions are reported through `diagnostics`/`hasError`
/// instead of throwing, so the binding never panics across the FFI
/// boundary.
#[wasm_bindgen]
pub fn triangle_path(half_width: f64, height: f64, radius: f64, y_up: bool) -> TriangleOutput {
    build_output(half_width, height, radius, y_up)
}

fn build_output(half_width: f64, height: f64, radius: f64, y_up: bool) -> TriangleOutput {
    let spec = match TriangleSpec::new(half_width, height, radius) {
        Ok(spec) => spec,
        Err(e) => {
            return TriangleOutput {
                path: String::new(),
                svg: String::new(),
                diagnostics: e.to_string(),
                has_error: true,
            };
        }
    };

    let axis = if y_up { YAxis::Up } else { YAxis::Down };
    let (path, tri) = rounded_triangle_path(&spec, axis);

    let diagnostics = if tri.radius < spec.r() {
        format!("radius {radius} does not fit; clamped to {}", tri.radius)
    } else {
        String::new()
    };

    TriangleOutput {
        path,
        svg: render_to_string(&spec),
        diagnostics,
        has_error: false,
    }
}

#[cfg(test)]
mod tests {
    use super::build_output;

    #[test]
    fn builds_path_and_svg_for_valid_input() {
        let output = build_output(96.0, 100.0, 12.0, false);

        assert!(
            !output.has_error,
            "unexpected diagnostics: {}",
            output.diagnostics
        );
        assert!(
            output.path.starts_with("M -67.845 0"),
            "unexpected path: {}",
            output.path
        );
        assert!(output.svg.contains("<svg"), "missing SVG root");
        assert!(output.diagnostics.is_empty(), "unexpected diagnostics");
    }

    #[test]
    fn y_up_flag_flips_sweeps() {
        let output = build_output(96.0, 100.0, 12.0, true);

        assert!(!output.has_error);
        assert!(
            output.path.contains("A 12 12 0 0 0 "),
            "expected inverted sweep flags: {}",
            output.path
        );
    }

    #[test]
    fn reports_invalid_dimensions() {
        let output = build_output(-1.0, 100.0, 12.0, false);

        assert!(output.has_error, "expected dimension error");
        assert!(
            output.diagnostics.contains("invalid dimension"),
            "unexpected diagnostics: {}",
            output.diagnostics
        );
        assert!(output.path.is_empty(), "path should be empty on error");
    }

    #[test]
    fn notes_clamping_in_diagnostics() {
        let output = build_output(10.0, 10.0, 1000.0, false);

        assert!(!output.has_error);
        assert!(
            output.diagnostics.contains("clamped"),
            "expected clamp note: {}",
            output.diagnostics
        );
        assert!(
            output.path.contains("5.858"),
            "expected clamped radius in path: {}",
            output.path
        );
    }
}
