//! # Panel Triangulator
//!
//! Connects consecutive rings into a triangulated lateral surface: two
//! triangles per quad step, plus one closing quad per height band when a
//! closed sweep shares its seam vertex.

use crate::mesh::{MeshBuffers, Winding};

/// Triangulates the lateral panels between `rings` consecutive rings of
/// `ring_size` vertices starting at vertex `base`.
///
/// Triangles advance the cursor `ti`; each is tagged with `group` when the
/// bundle carries group tags. With `close_seam` (closed sweep, shared
/// vertices — no duplicate seam vertex to land on) every band gets one
/// extra quad wrapping the last ring vertex back to the first, which makes
/// the band's quad count equal to the slice count exactly.
pub fn emit_panels(
    mesh: &mut MeshBuffers,
    base: usize,
    ring_size: usize,
    rings: usize,
    close_seam: bool,
    winding: Winding,
    ti: &mut usize,
    group: Option<u32>,
) {
    for k in 0..ring_size - 1 {
        for i in 0..rings - 1 {
            let k1 = (base + k + ring_size * i) as u32;
            let ring_step = ring_size as u32;
            if let Some(g) = group {
                mesh.set_group(*ti, g);
            }
            mesh.set_triangle(ti, k1, k1 + 1, k1 + ring_step + 1, winding);
            if let Some(g) = group {
                mesh.set_group(*ti, g);
            }
            mesh.set_triangle(ti, k1, k1 + ring_step + 1, k1 + ring_step, winding);
        }
    }

    if close_seam {
        for i in 0..rings - 1 {
            let first = (base + ring_size * i) as u32;
            let last = first + ring_size as u32 - 1;
            let ring_step = ring_size as u32;
            if let Some(g) = group {
                mesh.set_group(*ti, g);
            }
            mesh.set_triangle(ti, last, first, first + ring_step, winding);
            if let Some(g) = group {
                mesh.set_group(*ti, g);
            }
            mesh.set_triangle(ti, last, first + ring_step, last + ring_step, winding);
        }
    }
}
