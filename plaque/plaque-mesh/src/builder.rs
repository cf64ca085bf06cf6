//! Plaque assembly: Braille glyph grid to triangle mesh.

use braille_translate::{dot_mask, dot_raised, DOT_COUNT};
use tracing::{debug, info};

use crate::mesh::TriangleMesh;
use crate::params::PlaqueParams;
use crate::primitives::{push_box, push_stud, stud_facets, BOX_FACETS};

/// A generated plaque: mesh plus bounding dimensions.
#[derive(Debug, Clone)]
pub struct Plaque {
    /// Base box and stud facets, in emission order.
    pub mesh: TriangleMesh,

    /// Plaque width in mm (margins included).
    pub width_mm: f64,

    /// Plaque height in mm (margins included).
    pub height_mm: f64,

    /// Requested total thickness (base + dot height) in mm.
    pub total_mm: f64,
}

/// Build a plaque mesh from a Braille glyph string.
///
/// The string is split into lines on `'\n'`; the grid is `max line length`
/// columns by `line count` rows (each at least 1). Every glyph decodes to a
/// raised-dot mask; blank cells (space, or anything outside the Braille
/// block) emit no geometry. The base box sits at the origin and raised dots
/// become studs on its top face, laid out 2x3 per cell with dots 1-3 down
/// the left column and 4-6 down the right, top row first.
///
/// Parameters are sanitized first ([`PlaqueParams::sanitized`]), so the
/// geometry is always finite. Output is deterministic: identical inputs
/// produce an identical facet sequence.
///
/// # Example
///
/// ```
/// use braille_translate::to_braille;
/// use plaque_mesh::{build_plaque, PlaqueParams};
///
/// let braille = to_braille("hi");
/// let plaque = build_plaque(&braille, &PlaqueParams::default());
/// // 2 margins + 2 cells of 6 mm
/// assert!((plaque.width_mm - 20.0).abs() < 1e-12);
/// assert!(plaque.mesh.facet_count() > 12);
/// ```
#[must_use]
pub fn build_plaque(braille: &str, params: &PlaqueParams) -> Plaque {
    let p = params.sanitized();

    let lines: Vec<Vec<char>> = braille.split('\n').map(|l| l.chars().collect()).collect();
    let rows = lines.len().max(1);
    let cols = lines.iter().map(Vec::len).max().unwrap_or(0).max(1);

    #[allow(clippy::cast_precision_loss)] // plaque grids stay small
    let (cols_f, rows_f) = (cols as f64, rows as f64);
    let width_mm = 2.0 * p.margin_mm + cols_f * p.cell_width_mm;
    let height_mm = 2.0 * p.margin_mm + rows_f * p.cell_height_mm;
    let base_mm = p.base_mm();

    info!(rows, cols, width_mm, height_mm, "building plaque");

    // Count raised dots up front so the facet vector allocates once.
    #[allow(clippy::cast_possible_truncation)] // per-cell counts are at most 6
    let raised: usize = lines
        .iter()
        .flatten()
        .map(|&ch| braille_translate::raised_count(dot_mask(ch)) as usize)
        .sum();

    let mut mesh = TriangleMesh::with_capacity(BOX_FACETS + raised * stud_facets(p.segments));
    push_box(&mut mesh, width_mm, height_mm, base_mm);

    // Dot-group offsets centering the 2x3 layout in the cell footprint.
    let left_col_offset = (p.cell_width_mm - p.dot_pitch_x_mm) / 2.0;
    let top_row_offset = (p.cell_height_mm - 2.0 * p.dot_pitch_y_mm) / 2.0;
    let radius = p.dot_radius_mm();

    for (r, line) in lines.iter().enumerate() {
        for c in 0..cols {
            let glyph = line.get(c).copied().unwrap_or(' ');
            let mask = dot_mask(glyph);
            if mask & 0x3F == 0 {
                continue;
            }

            #[allow(clippy::cast_precision_loss)]
            let (c_f, r_f) = (c as f64, r as f64);
            let x_left = p.margin_mm + c_f * p.cell_width_mm;
            let y_top = height_mm - p.margin_mm - r_f * p.cell_height_mm;

            let x_l = x_left + left_col_offset;
            let x_r = x_l + p.dot_pitch_x_mm;
            let y_rows = [
                y_top - top_row_offset,
                y_top - top_row_offset - p.dot_pitch_y_mm,
                y_top - top_row_offset - 2.0 * p.dot_pitch_y_mm,
            ];

            for dot in 0..DOT_COUNT {
                #[allow(clippy::cast_possible_truncation)] // dot < 6
                let position = (dot + 1) as u8;
                if !dot_raised(mask, position) {
                    continue;
                }
                let x = if dot < 3 { x_l } else { x_r };
                let y = y_rows[dot % 3];
                push_stud(&mut mesh, x, y, base_mm, radius, p.dot_height_mm, p.segments);
            }
        }
    }

    debug!(
        raised_dots = raised,
        facets = mesh.facet_count(),
        "plaque mesh assembled"
    );

    Plaque {
        mesh,
        width_mm,
        height_mm,
        total_mm: p.total_mm(),
    }
}
