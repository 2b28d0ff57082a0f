//! Procedural low-poly ship.
//!
//! Model space: bow points to +Z, hull length 2.0, deck at y = 0, keel below.
//! Every face gets its own vertices so normals stay flat.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Quat, Vec3};

use crate::params::ShipConfig;

/// Vertex data for the ship mesh (flat-shaded)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct ShipVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 3],
}

/// Hull half-width at the deck
const BEAM: f32 = 0.4;
/// Hull half-length
const HALF_LENGTH: f32 = 1.0;
/// Keel depth below the deck
const DRAFT: f32 = 0.35;
/// Where the bow taper starts (fraction of half-length, towards +Z)
const BOW_START: f32 = 0.45;

pub struct ShipMesh {
    pub vertices: Vec<ShipVertex>,
    pub indices: Vec<u32>,
}

impl ShipMesh {
    /// Build the ship with the colors from `config`
    pub fn new(config: &ShipConfig) -> Self {
        let mut mesh = Self {
            vertices: Vec::new(),
            indices: Vec::new(),
        };

        mesh.push_hull(config.hull_color, config.deck_color);

        // Cabin aft of midships
        mesh.push_box(
            Vec3::new(0.0, 0.14, -0.45),
            Vec3::new(0.25, 0.14, 0.28),
            config.cabin_color,
        );

        // Mast and sail forward of the cabin
        mesh.push_box(
            Vec3::new(0.0, 0.6, 0.2),
            Vec3::new(0.03, 0.6, 0.03),
            config.hull_color,
        );
        mesh.push_box(
            Vec3::new(0.0, 0.7, 0.42),
            Vec3::new(0.012, 0.42, 0.18),
            config.sail_color,
        );

        log::debug!(
            "Ship mesh: {} vertices, {} triangles",
            mesh.vertices.len(),
            mesh.indices.len() / 3
        );

        mesh
    }

    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    /// Axis-aligned bounds in model space
    pub fn bounds(&self) -> (Vec3, Vec3) {
        self.vertices.iter().fold(
            (Vec3::splat(f32::MAX), Vec3::splat(f32::MIN)),
            |(min, max), v| {
                let p = Vec3::from_array(v.position);
                (min.min(p), max.max(p))
            },
        )
    }

    /// Pentagonal deck outline tapering into a keel outline
    fn push_hull(&mut self, hull_color: [f32; 3], deck_color: [f32; 3]) {
        let bow_z = HALF_LENGTH * BOW_START;
        let deck = [
            Vec3::new(-BEAM, 0.0, -HALF_LENGTH),
            Vec3::new(BEAM, 0.0, -HALF_LENGTH),
            Vec3::new(BEAM, 0.0, bow_z),
            Vec3::new(0.0, 0.0, HALF_LENGTH),
            Vec3::new(-BEAM, 0.0, bow_z),
        ];
        let keel = deck.map(|p| Vec3::new(p.x * 0.45, -DRAFT, p.z * 0.85));

        self.push_face(&deck, Vec3::Y, deck_color);
        self.push_face(&keel, Vec3::NEG_Y, hull_color);

        // Deck and keel edges are not parallel, so each side is two flat triangles
        let center = Vec3::new(0.0, -DRAFT * 0.5, 0.0);
        for i in 0..deck.len() {
            let j = (i + 1) % deck.len();
            for tri in [[deck[i], deck[j], keel[j]], [deck[i], keel[j], keel[i]]] {
                let mid = tri.iter().copied().sum::<Vec3>() / 3.0;
                self.push_face(&tri, mid - center, hull_color);
            }
        }
    }

    fn push_box(&mut self, center: Vec3, half: Vec3, color: [f32; 3]) {
        // Each face: outward axis plus two in-plane axes; winding is fixed up by push_face
        let faces = [
            (Vec3::X, Vec3::Y, Vec3::Z),
            (Vec3::NEG_X, Vec3::Y, Vec3::Z),
            (Vec3::Y, Vec3::X, Vec3::Z),
            (Vec3::NEG_Y, Vec3::X, Vec3::Z),
            (Vec3::Z, Vec3::X, Vec3::Y),
            (Vec3::NEG_Z, Vec3::X, Vec3::Y),
        ];

        for (outward, u, v) in faces {
            let quad = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)]
                .map(|(su, sv)| center + half * (outward + u * su + v * sv));
            self.push_face(&quad, outward, color);
        }
    }

    /// Append a planar convex polygon, fan-triangulated, wound counter-clockwise
    /// when seen from the `outward` side.
    fn push_face(&mut self, corners: &[Vec3], outward: Vec3, color: [f32; 3]) {
        let mut corners = corners.to_vec();
        let mut normal = (corners[1] - corners[0])
            .cross(corners[2] - corners[0])
            .normalize_or_zero();
        if normal.dot(outward) < 0.0 {
            corners.reverse();
            normal = -normal;
        }

        let base = self.vertices.len() as u32;
        self.vertices.extend(corners.iter().map(|p| ShipVertex {
            position: p.to_array(),
            normal: normal.to_array(),
            color,
        }));
        for k in 1..corners.len() as u32 - 1 {
            self.indices.extend_from_slice(&[base, base + k, base + k + 1]);
        }
    }
}

/// Model matrix placing the ship in the world
pub fn model_matrix(config: &ShipConfig) -> Mat4 {
    Mat4::from_scale_rotation_translation(
        Vec3::splat(config.scale),
        Quat::from_rotation_y(config.heading_degrees.to_radians()),
        Vec3::from_array(config.position),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ship_mesh_indices_in_range() {
        let mesh = ShipMesh::new(&ShipConfig::default());
        let count = mesh.vertices.len() as u32;
        assert!(!mesh.indices.is_empty());
        assert_eq!(mesh.indices.len() % 3, 0);
        assert!(mesh.indices.iter().all(|&i| i < count));
    }

    #[test]
    fn test_normals_are_unit_length() {
        let mesh = ShipMesh::new(&ShipConfig::default());
        for v in &mesh.vertices {
            let n = Vec3::from_array(v.normal);
            assert!((n.length() - 1.0).abs() < 1e-5, "normal {n} not unit");
        }
    }

    #[test]
    fn test_winding_matches_normals() {
        let mesh = ShipMesh::new(&ShipConfig::default());
        for tri in mesh.indices.chunks(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| mesh.vertices[i as usize]);
            let pa = Vec3::from_array(a.position);
            let face = (Vec3::from_array(b.position) - pa).cross(Vec3::from_array(c.position) - pa);
            assert!(face.dot(Vec3::from_array(a.normal)) > 0.0);
        }
    }

    #[test]
    fn test_bounds_cover_hull_and_mast() {
        let mesh = ShipMesh::new(&ShipConfig::default());
        let (min, max) = mesh.bounds();
        assert_eq!(min.y, -DRAFT);
        assert_eq!(min.z, -HALF_LENGTH);
        assert_eq!(max.z, HALF_LENGTH);
        assert!(max.y > 1.0); // mast top
    }

    #[test]
    fn test_default_ship_floats_above_calm_swell() {
        let config = ShipConfig::default();
        let (min, _) = ShipMesh::new(&config).bounds();
        let keel = model_matrix(&config).transform_point3(min * Vec3::Y);
        assert!(keel.y > 0.15);
    }

    #[test]
    fn test_model_matrix_places_origin() {
        let config = ShipConfig::default();
        let origin = model_matrix(&config).transform_point3(Vec3::ZERO);
        assert!(origin.abs_diff_eq(Vec3::from_array(config.position), 1e-6));
    }
}
